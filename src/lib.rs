#![doc = include_str!("../README.md")]

/// Encyclopedia article type and builder
pub mod article;
/// Human alphabetical ordering for titles
pub mod collation;
mod config;
mod error;
/// Alphabetical section index
pub mod index;
/// JSON seed data loading
pub mod seed;
/// Browsing session state machine
pub mod session;
/// Article store
pub mod store;
/// Article field validation
pub mod validation;

pub use article::{Article, ArticleBuilder};
pub use config::{Config, DEFAULT_TIMESTAMP_FORMAT};
pub use error::{Result, SimplepediaError};
pub use index::{SectionIndex, SectionLookup};
pub use seed::{bundled, load_seed, parse_seed};
pub use session::{Draft, SELECT_SECTION_PROMPT, Session, View, ViewState};
pub use store::{ArticleStore, Clock, FixedClock, SystemClock};
pub use validation::{parse_edited, section_label, validate_title};
