//! Seed data loading
//!
//! The article collection starts from a static JSON list:
//!
//! ```json
//! [
//!   {
//!     "title": "Alpha Centauri",
//!     "extract": "An alien diplomat with an enormous egg shaped head",
//!     "edited": "2017-05-08T00:00:00.000Z"
//!   }
//! ]
//! ```
//!
//! `edited` accepts any form understood by
//! [`parse_edited`](crate::validation::parse_edited).
//!
//! # Example
//!
//! ```
//! use simplepedia::seed::parse_seed;
//!
//! let articles = parse_seed(r#"[
//!     {"title": "Dalek", "extract": "Evil little pepperpots of death", "edited": "2017-05-08"}
//! ]"#).unwrap();
//! assert_eq!(articles.len(), 1);
//! assert_eq!(articles[0].title(), "Dalek");
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::validation::{parse_edited, section_label};
use crate::{Article, Result, SimplepediaError};

/// Collection bundled with the crate
pub const BUNDLED_SEED: &str = include_str!("../data/seed.json");

/// One record of the seed schema, before validation
#[derive(Debug, Clone, Deserialize)]
pub struct SeedRecord {
    /// Article title
    pub title: String,
    /// Article text
    #[serde(default)]
    pub extract: String,
    /// ISO-8601 edited timestamp
    pub edited: String,
}

impl TryFrom<SeedRecord> for Article {
    type Error = SimplepediaError;

    fn try_from(record: SeedRecord) -> Result<Self> {
        section_label(&record.title)?;
        let edited = parse_edited(&record.edited)?;
        Ok(Article::new(record.title, record.extract, edited))
    }
}

/// Parse a JSON seed list into articles
///
/// Records are returned in file order.
///
/// # Errors
///
/// - [`SimplepediaError::Seed`] if the input is not a JSON array of records
/// - [`SimplepediaError::InvalidArticle`] if a record has an empty title
/// - [`SimplepediaError::InvalidTimestamp`] if an `edited` value cannot be parsed
pub fn parse_seed(json: &str) -> Result<Vec<Article>> {
    let records: Vec<SeedRecord> = serde_json::from_str(json)?;
    let articles = records
        .into_iter()
        .map(Article::try_from)
        .collect::<Result<Vec<_>>>()?;

    debug!("Parsed {} seed articles", articles.len());
    Ok(articles)
}

/// Read and parse a seed file
pub fn load_seed(path: impl AsRef<Path>) -> Result<Vec<Article>> {
    let path = path.as_ref();
    debug!("Loading seed from {}", path.display());
    let json = fs::read_to_string(path)?;
    parse_seed(&json)
}

/// Parse the collection bundled with the crate
pub fn bundled() -> Result<Vec<Article>> {
    parse_seed(BUNDLED_SEED)
}
