//! Alphabetical section index
//!
//! Groups a flat list of articles into sections keyed by the uppercased
//! first character of each title, and answers the two queries the view layer
//! needs: which sections exist, and which articles belong to a section.
//!
//! # Index Strategy
//!
//! - **Key**: section label (`"A"`, `"D"`, `"É"`, ...)
//! - **Bucket**: articles in the order they were supplied
//! - **Updates**: none; the index is rebuilt wholesale from the article list
//! - **Ordering**: applied at query time, labels lexicographically and titles
//!   with [`collation`](crate::collation)
//!
//! # Example
//!
//! ```
//! use simplepedia::{ArticleBuilder, SectionIndex};
//!
//! let articles = vec![
//!     ArticleBuilder::new().title("Dalek").build().unwrap(),
//!     ArticleBuilder::new().title("Auton").build().unwrap(),
//!     ArticleBuilder::new().title("Alpha Centauri").build().unwrap(),
//! ];
//!
//! let index = SectionIndex::build(&articles).unwrap();
//! assert_eq!(index.list_sections(), vec!["A", "D"]);
//!
//! let titles: Vec<_> = index
//!     .articles_in_section("A")
//!     .iter()
//!     .map(|a| a.title().to_string())
//!     .collect();
//! assert_eq!(titles, vec!["Alpha Centauri", "Auton"]);
//!
//! // Unknown sections are empty, not an error
//! assert!(index.articles_in_section("Q").is_empty());
//! ```

use std::collections::HashMap;

use tracing::debug;

use crate::collation;
use crate::validation::section_label;
use crate::{Article, Result};

/// Read-only section queries consumed by the view layer
///
/// [`Session::view`](crate::Session::view) reads the index only through
/// this trait.
pub trait SectionLookup {
    /// All section labels in ascending order, without duplicates
    fn list_sections(&self) -> Vec<String>;

    /// Articles in a section sorted by title; empty if the section does not exist
    fn articles_in_section(&self, label: &str) -> Vec<Article>;

    /// Titles in a section, in the order of [`articles_in_section`](Self::articles_in_section)
    fn titles_in_section(&self, label: &str) -> Vec<String> {
        self.articles_in_section(label)
            .into_iter()
            .map(|article| article.title().to_string())
            .collect()
    }

    /// Total number of indexed articles
    fn len(&self) -> usize;

    /// Check if the index holds no articles
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Mapping from section label to the articles in that section
///
/// Every article appears in exactly one bucket, keyed by
/// [`Article::section_label`]. Buckets are never empty: a label exists only
/// while at least one article carries it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionIndex {
    /// Storage for buckets, in supply order
    buckets: HashMap<String, Vec<Article>>,
    /// Sum of bucket sizes
    article_count: usize,
}

impl SectionIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from the full current article list
    ///
    /// Articles are copied into their buckets in the order supplied; the input
    /// is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`SimplepediaError::InvalidArticle`](crate::SimplepediaError::InvalidArticle)
    /// if any article has an empty title. No partial index is returned.
    pub fn build<'a, I>(articles: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Article>,
    {
        let mut buckets: HashMap<String, Vec<Article>> = HashMap::new();
        let mut article_count = 0;

        for article in articles {
            let label = section_label(article.title())?;
            buckets.entry(label).or_default().push(article.clone());
            article_count += 1;
        }

        debug!(
            "Built section index: {} articles in {} sections",
            article_count,
            buckets.len()
        );

        Ok(Self {
            buckets,
            article_count,
        })
    }

    /// All section labels in ascending lexicographic order
    pub fn list_sections(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.buckets.keys().cloned().collect();
        labels.sort();
        labels
    }

    /// Articles in a section, sorted by title in human alphabetical order
    ///
    /// Returns an empty vector for a label with no articles. The sort is
    /// stable and applied to a copy; the index itself is not reordered.
    pub fn articles_in_section(&self, label: &str) -> Vec<Article> {
        let mut articles = self.bucket(label).to_vec();
        collation::sort_by_key_str(&mut articles, Article::title);
        articles
    }

    /// Titles in a section, sorted as by [`articles_in_section`](Self::articles_in_section)
    pub fn titles_in_section(&self, label: &str) -> Vec<String> {
        self.articles_in_section(label)
            .into_iter()
            .map(|article| article.title().to_string())
            .collect()
    }

    /// Raw bucket for a label in supply order; empty if absent
    pub fn bucket(&self, label: &str) -> &[Article] {
        self.buckets.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check if a section exists
    pub fn contains_section(&self, label: &str) -> bool {
        self.buckets.contains_key(label)
    }

    /// Number of distinct sections
    pub fn section_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of indexed articles
    pub fn len(&self) -> usize {
        self.article_count
    }

    /// Check if the index is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.article_count == 0
    }

    /// Find an article by exact title, looking only in its own section
    pub fn find(&self, title: &str) -> Option<&Article> {
        let label = section_label(title).ok()?;
        self.bucket(&label).iter().find(|a| a.title() == title)
    }
}

impl SectionLookup for SectionIndex {
    fn list_sections(&self) -> Vec<String> {
        SectionIndex::list_sections(self)
    }

    fn articles_in_section(&self, label: &str) -> Vec<Article> {
        SectionIndex::articles_in_section(self, label)
    }

    fn titles_in_section(&self, label: &str) -> Vec<String> {
        SectionIndex::titles_in_section(self, label)
    }

    fn len(&self) -> usize {
        SectionIndex::len(self)
    }
}
