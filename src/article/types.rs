//! Article type definitions
//!
//! This module contains the article value type stored by
//! [`ArticleStore`](crate::ArticleStore) and grouped by
//! [`SectionIndex`](crate::SectionIndex).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Result, SimplepediaError};

/// Encyclopedia article
///
/// An article is a title, an extract (the article text) and the time it was
/// last edited. Articles are values: an edit produces a replacement record
/// through [`Article::revise`], never an in-place change.
///
/// The title is the identity key of the article and the source of its section
/// label. `Article::new` does not validate; use
/// [`ArticleBuilder`](crate::article::ArticleBuilder) or the store, which
/// reject empty titles.
///
/// Serializes to the seed schema: `{"title", "extract", "edited"}` with
/// `edited` as an RFC 3339 timestamp.
///
/// # Examples
///
/// ```
/// use simplepedia::article::ArticleBuilder;
///
/// let article = ArticleBuilder::new()
///     .title("Alpha Centauri")
///     .extract("An alien diplomat with an enormous egg shaped head")
///     .build()
///     .unwrap();
///
/// assert_eq!(article.title(), "Alpha Centauri");
/// assert_eq!(article.section_label(), "A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "crate::seed::SeedRecord")]
pub struct Article {
    title: String,
    extract: String,
    edited: DateTime<Utc>,
}

impl Article {
    /// Create a new article from its parts
    pub fn new(
        title: impl Into<String>,
        extract: impl Into<String>,
        edited: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            extract: extract.into(),
            edited,
        }
    }

    /// Article title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Article text
    pub fn extract(&self) -> &str {
        &self.extract
    }

    /// Time of the last edit
    pub fn edited(&self) -> DateTime<Utc> {
        self.edited
    }

    /// Section label: the first character of the title, uppercased
    ///
    /// Returns an empty string for an article with an empty title; such an
    /// article is rejected by [`SectionIndex::build`](crate::SectionIndex::build).
    ///
    /// # Examples
    ///
    /// ```
    /// use simplepedia::Article;
    /// use chrono::Utc;
    ///
    /// let article = Article::new("dalek", "Evil little pepperpots of death", Utc::now());
    /// assert_eq!(article.section_label(), "D");
    /// ```
    pub fn section_label(&self) -> String {
        crate::validation::section_label(&self.title).unwrap_or_default()
    }

    /// Render the edited time with a chrono format string
    ///
    /// # Examples
    ///
    /// ```
    /// use simplepedia::Article;
    /// use simplepedia::validation::parse_edited;
    ///
    /// let edited = parse_edited("2017-05-08T00:00:00.000Z").unwrap();
    /// let article = Article::new("Alpha Centauri", "", edited);
    /// assert_eq!(article.formatted_edited("%Y-%m-%d"), "2017-05-08");
    /// assert_eq!(
    ///     article.formatted_edited(simplepedia::DEFAULT_TIMESTAMP_FORMAT),
    ///     "5/8/2017, 12:00:00 AM"
    /// );
    /// ```
    pub fn formatted_edited(&self, format: &str) -> String {
        self.edited.format(format).to_string()
    }

    /// Produce the replacement record for an edit
    ///
    /// The original is left untouched; the returned article carries the new
    /// title, extract and edited time.
    ///
    /// # Errors
    ///
    /// Returns [`SimplepediaError::InvalidArticle`] if the new title is empty.
    pub fn revise(
        &self,
        title: impl Into<String>,
        extract: impl Into<String>,
        edited: DateTime<Utc>,
    ) -> Result<Article> {
        let title = title.into();
        if title.is_empty() {
            return Err(SimplepediaError::InvalidArticle(format!(
                "cannot rename '{}' to an empty title",
                self.title
            )));
        }
        Ok(Article::new(title, extract, edited))
    }
}
