//! Article store
//!
//! The store is the single source of truth for article content. It owns the
//! article list and the [`SectionIndex`] derived from it; every create or
//! update rebuilds the index from the full list.
//!
//! # Example
//!
//! ```
//! use simplepedia::{ArticleStore, Config};
//!
//! let mut store = ArticleStore::from_seed_str(r#"[
//!     {"title": "Dalek", "extract": "Evil little pepperpots of death", "edited": "2017-05-08"}
//! ]"#, Config::default()).unwrap();
//!
//! store.create("Zorg", "Not from around here").unwrap();
//! assert_eq!(store.index().list_sections(), vec!["D", "Z"]);
//!
//! store.update("Dalek", "Ecks", "Renamed").unwrap();
//! assert_eq!(store.index().list_sections(), vec!["E", "Z"]);
//! ```

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::validation::validate_title;
use crate::{Article, Config, Result, SectionIndex, SimplepediaError, seed};

/// Source of edited timestamps
pub trait Clock {
    /// Current time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant
///
/// Useful for deterministic edited timestamps.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// In-memory article collection with its derived section index
#[derive(Debug, Clone)]
pub struct ArticleStore<C: Clock = SystemClock> {
    articles: Vec<Article>,
    index: SectionIndex,
    config: Config,
    clock: C,
}

impl ArticleStore<SystemClock> {
    /// Create a store from an initial article list
    ///
    /// # Errors
    ///
    /// - [`SimplepediaError::InvalidArticle`] if any title is empty or blank
    /// - [`SimplepediaError::DuplicateTitle`] if two articles share a title and
    ///   `config.unique_titles` is set
    pub fn new(articles: Vec<Article>, config: Config) -> Result<Self> {
        Self::with_clock(articles, config, SystemClock)
    }

    /// Create a store from a JSON seed list
    pub fn from_seed_str(json: &str, config: Config) -> Result<Self> {
        Self::new(seed::parse_seed(json)?, config)
    }

    /// Create a store from a JSON seed file
    pub fn from_seed_file(path: impl AsRef<Path>, config: Config) -> Result<Self> {
        Self::new(seed::load_seed(path)?, config)
    }

    /// Create a store from the collection bundled with the crate
    pub fn bundled(config: Config) -> Result<Self> {
        Self::new(seed::bundled()?, config)
    }
}

impl<C: Clock> ArticleStore<C> {
    /// Create a store with an explicit clock
    pub fn with_clock(articles: Vec<Article>, config: Config, clock: C) -> Result<Self> {
        for (i, article) in articles.iter().enumerate() {
            validate_title(article.title())?;
            if config.unique_titles
                && articles[..i].iter().any(|a| a.title() == article.title())
            {
                return Err(SimplepediaError::DuplicateTitle(article.title().to_string()));
            }
        }

        let index = SectionIndex::build(&articles)?;
        debug!("Article store created with {} articles", articles.len());

        Ok(Self {
            articles,
            index,
            config,
            clock,
        })
    }

    /// All articles, in insertion order
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Copy of the current article list
    pub fn snapshot(&self) -> Vec<Article> {
        self.articles.clone()
    }

    /// Section index for the current article list
    pub fn index(&self) -> &SectionIndex {
        &self.index
    }

    /// Store configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Look up an article by exact title
    pub fn get(&self, title: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.title() == title)
    }

    /// Number of articles
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Check if the store holds no articles
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Create a new article stamped with the current time
    ///
    /// The article is appended and the index rebuilt.
    ///
    /// # Errors
    ///
    /// - [`SimplepediaError::InvalidArticle`] if the title is empty or blank
    /// - [`SimplepediaError::DuplicateTitle`] if the title is taken and
    ///   `unique_titles` is set
    pub fn create(
        &mut self,
        title: impl Into<String>,
        extract: impl Into<String>,
    ) -> Result<Article> {
        let title = self.normalize_title(title.into());
        validate_title(&title)?;
        self.check_unique(&title, None)?;

        let article = Article::new(title, extract, self.clock.now());
        let mut articles = self.articles.clone();
        articles.push(article.clone());
        self.replace_articles(articles)?;

        debug!("Created article '{}'", article.title());
        Ok(article)
    }

    /// Replace the article titled `original_title` with a freshly stamped record
    ///
    /// The replacement keeps the original's position in the list; the index is
    /// rebuilt, so a rename moves the article to its new section.
    ///
    /// # Errors
    ///
    /// - [`SimplepediaError::NoSuchArticle`] if no article has `original_title`
    /// - [`SimplepediaError::InvalidArticle`] if the new title is empty or blank
    /// - [`SimplepediaError::DuplicateTitle`] if the new title belongs to another
    ///   article and `unique_titles` is set
    pub fn update(
        &mut self,
        original_title: &str,
        new_title: impl Into<String>,
        new_extract: impl Into<String>,
    ) -> Result<Article> {
        let position = self
            .articles
            .iter()
            .position(|a| a.title() == original_title)
            .ok_or_else(|| SimplepediaError::NoSuchArticle(original_title.to_string()))?;

        let new_title = self.normalize_title(new_title.into());
        validate_title(&new_title)?;
        self.check_unique(&new_title, Some(position))?;

        let revised = self.articles[position].revise(new_title, new_extract, self.clock.now())?;
        let mut articles = self.articles.clone();
        articles[position] = revised.clone();
        self.replace_articles(articles)?;

        if revised.title() == original_title {
            debug!("Updated article '{}'", original_title);
        } else {
            debug!("Renamed article '{}' to '{}'", original_title, revised.title());
        }
        Ok(revised)
    }

    /// Swap in a new article list, rebuilding the index first
    ///
    /// The store is left untouched if the rebuild fails.
    fn replace_articles(&mut self, articles: Vec<Article>) -> Result<()> {
        let index = SectionIndex::build(&articles)?;
        self.articles = articles;
        self.index = index;
        Ok(())
    }

    fn normalize_title(&self, title: String) -> String {
        if self.config.trim_input {
            title.trim().to_string()
        } else {
            title
        }
    }

    fn check_unique(&self, title: &str, skip: Option<usize>) -> Result<()> {
        if !self.config.unique_titles {
            return Ok(());
        }
        let taken = self
            .articles
            .iter()
            .enumerate()
            .any(|(i, a)| Some(i) != skip && a.title() == title);
        if taken {
            warn!("Rejected duplicate title '{}'", title);
            return Err(SimplepediaError::DuplicateTitle(title.to_string()));
        }
        Ok(())
    }
}
