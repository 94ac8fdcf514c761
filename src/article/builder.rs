//! Article builder for constructing valid articles
//!
//! This module provides the ArticleBuilder for creating articles with a
//! validated title and a default edited time.

use chrono::{DateTime, Utc};

use super::types::Article;
use crate::validation::validate_title;
use crate::{Result, SimplepediaError};

#[must_use]
#[derive(Debug, Clone, Default)]
pub struct ArticleBuilder {
    title: Option<String>,
    extract: String,
    edited: Option<DateTime<Utc>>,
}

impl ArticleBuilder {
    /// Create a new ArticleBuilder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title (required)
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the article text
    pub fn extract(mut self, extract: impl Into<String>) -> Self {
        self.extract = extract.into();
        self
    }

    /// Set the edited time (defaults to now)
    pub fn edited(mut self, edited: DateTime<Utc>) -> Self {
        self.edited = Some(edited);
        self
    }

    /// Build the article, validating the title and stamping the edited time
    ///
    /// Returns an error if the title is missing, empty or only whitespace.
    pub fn build(self) -> Result<Article> {
        let title = self
            .title
            .ok_or_else(|| SimplepediaError::InvalidArticle("title is required".to_string()))?;
        validate_title(&title)?;

        let edited = self.edited.unwrap_or_else(Utc::now);

        Ok(Article::new(title, self.extract, edited))
    }
}
