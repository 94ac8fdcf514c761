//! Encyclopedia articles
//!
//! This module is organized into:
//! - `types`: the Article value type
//! - `builder`: ArticleBuilder for constructing validated articles

mod builder;
mod types;

pub use self::builder::ArticleBuilder;
pub use self::types::Article;
