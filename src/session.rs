//! Browsing session state machine
//!
//! A [`Session`] owns the [`ArticleStore`] and the current [`ViewState`], and
//! turns UI events into state transitions:
//!
//! ```text
//!             choose_section                choose_title
//!   Idle ───────────────────▶ SectionChosen ─────────────▶ ArticleSelected
//!                              ▲     ▲                        │   │
//!                              │     └──── choose_section ────┘   │ edit_article
//!                              │                                  ▼
//!   Idle ◀──── save / cancel ──┴─────────────────────────── Editing
//!            (new_article from any state opens Editing with no article)
//! ```
//!
//! The renderer reads a [`View`] snapshot and never touches the state
//! directly.
//!
//! # Example
//!
//! ```
//! use simplepedia::{ArticleStore, Config, Session, ViewState};
//!
//! let store = ArticleStore::from_seed_str(r#"[
//!     {"title": "Dalek", "extract": "Evil little pepperpots of death", "edited": "2017-05-08"}
//! ]"#, Config::default()).unwrap();
//! let mut session = Session::new(store);
//!
//! session.choose_section("D").unwrap();
//! session.choose_title("Dalek").unwrap();
//! assert!(session.view().can_edit);
//!
//! session.edit_article().unwrap();
//! session.set_draft_extract("Exterminate").unwrap();
//! session.save().unwrap();
//!
//! assert_eq!(session.state(), &ViewState::Idle);
//! assert_eq!(session.store().get("Dalek").unwrap().extract(), "Exterminate");
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::index::SectionLookup;
use crate::store::{Clock, SystemClock};
use crate::{Article, ArticleStore, Result, SimplepediaError};

/// Prompt shown in place of the title list when no section is chosen
pub const SELECT_SECTION_PROMPT: &str = "Select a section";

/// Editor form contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// Title field
    pub title: String,
    /// Extract field
    pub extract: String,
}

impl Draft {
    /// Empty form for a new article
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing article
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title().to_string(),
            extract: article.extract().to_string(),
        }
    }

    /// The save control is enabled only once a title is present
    pub fn can_save(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// Selection state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    /// No section chosen
    Idle,
    /// Title list for `section` visible
    SectionChosen {
        /// Chosen section label
        section: String,
    },
    /// Reading view for `article`; the title list for `section` stays visible
    ArticleSelected {
        /// Section whose titles are listed
        section: String,
        /// Article being read
        article: Article,
    },
    /// Editor open; `original` is `None` when creating a new article
    Editing {
        /// Article being edited
        original: Option<Article>,
        /// Current form contents
        draft: Draft,
    },
}

impl ViewState {
    fn name(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::SectionChosen { .. } => "section chosen",
            ViewState::ArticleSelected { .. } => "article selected",
            ViewState::Editing { .. } => "editing",
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    /// Section labels, ascending
    pub sections: Vec<String>,
    /// Chosen section, if any
    pub section: Option<String>,
    /// Sorted titles of the chosen section
    pub titles: Option<Vec<String>>,
    /// Placeholder shown instead of the title list
    pub prompt: Option<String>,
    /// Article in the reading view
    pub article: Option<Article>,
    /// Formatted edited time of `article`
    pub edited: Option<String>,
    /// Editor form, when the editor is open
    pub draft: Option<Draft>,
    /// "New Article" is available
    pub can_create: bool,
    /// "Edit Article" is available
    pub can_edit: bool,
    /// The editor's save control is enabled
    pub can_save: bool,
}

impl View {
    /// Render one frame of `state` against any section lookup
    ///
    /// `timestamp_format` is a chrono format string for the edited time.
    pub fn new(lookup: &dyn SectionLookup, state: &ViewState, timestamp_format: &str) -> Self {
        let (section, article, draft) = match state {
            ViewState::Idle => (None, None, None),
            ViewState::SectionChosen { section } => (Some(section.clone()), None, None),
            ViewState::ArticleSelected { section, article } => {
                (Some(section.clone()), Some(article.clone()), None)
            }
            ViewState::Editing { draft, .. } => (None, None, Some(draft.clone())),
        };

        let titles = section.as_deref().map(|s| lookup.titles_in_section(s));
        let prompt = titles
            .is_none()
            .then(|| SELECT_SECTION_PROMPT.to_string());

        View {
            sections: lookup.list_sections(),
            edited: article.as_ref().map(|a| a.formatted_edited(timestamp_format)),
            can_edit: article.is_some(),
            can_save: draft.as_ref().is_some_and(Draft::can_save),
            can_create: true,
            section,
            titles,
            prompt,
            article,
            draft,
        }
    }
}

/// Store plus selection state for one browsing session
#[derive(Debug, Clone)]
pub struct Session<C: Clock = SystemClock> {
    store: ArticleStore<C>,
    state: ViewState,
}

impl<C: Clock> Session<C> {
    /// Start a session in the idle state
    pub fn new(store: ArticleStore<C>) -> Self {
        Self {
            store,
            state: ViewState::Idle,
        }
    }

    /// Current selection state
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Underlying article store
    pub fn store(&self) -> &ArticleStore<C> {
        &self.store
    }

    /// End the session, returning the store
    pub fn into_store(self) -> ArticleStore<C> {
        self.store
    }

    /// Choose a section, clearing any selected article
    ///
    /// Allowed from idle, section chosen and article selected. The label does
    /// not have to exist; an unknown section simply lists no titles.
    pub fn choose_section(&mut self, label: impl Into<String>) -> Result<()> {
        if let ViewState::Editing { .. } = self.state {
            return Err(rejected(&self.state, "choose a section"));
        }
        let section = label.into();
        debug!("Section '{}' chosen", section);
        self.state = ViewState::SectionChosen { section };
        Ok(())
    }

    /// Choose a title from the current section's list
    ///
    /// # Errors
    ///
    /// - [`SimplepediaError::InvalidTransition`] if no section is chosen
    /// - [`SimplepediaError::NoSuchArticle`] if the title is not in the section
    pub fn choose_title(&mut self, title: &str) -> Result<Article> {
        let section = match &self.state {
            ViewState::SectionChosen { section } | ViewState::ArticleSelected { section, .. } => {
                section.clone()
            }
            other => return Err(rejected(other, "choose a title")),
        };

        let article = self
            .store
            .index()
            .bucket(&section)
            .iter()
            .find(|a| a.title() == title)
            .cloned()
            .ok_or_else(|| SimplepediaError::NoSuchArticle(title.to_string()))?;

        debug!("Article '{}' selected", title);
        self.state = ViewState::ArticleSelected {
            section,
            article: article.clone(),
        };
        Ok(article)
    }

    /// Open an empty editor; allowed from any state
    pub fn new_article(&mut self) {
        debug!("Editor opened for a new article");
        self.state = ViewState::Editing {
            original: None,
            draft: Draft::new(),
        };
    }

    /// Open the editor on the selected article
    pub fn edit_article(&mut self) -> Result<()> {
        let article = match &self.state {
            ViewState::ArticleSelected { article, .. } => article.clone(),
            other => return Err(rejected(other, "edit an article")),
        };
        debug!("Editor opened for '{}'", article.title());
        self.state = ViewState::Editing {
            draft: Draft::from_article(&article),
            original: Some(article),
        };
        Ok(())
    }

    /// Replace the editor's title field
    pub fn set_draft_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.draft_mut()?.title = title.into();
        Ok(())
    }

    /// Replace the editor's extract field
    pub fn set_draft_extract(&mut self, extract: impl Into<String>) -> Result<()> {
        self.draft_mut()?.extract = extract.into();
        Ok(())
    }

    /// Save the draft and close the editor
    ///
    /// Creates a new article or updates the one being edited. The editor
    /// closes to idle whether or not the store accepts the draft; a rejected
    /// draft is reported through the returned error.
    pub fn save(&mut self) -> Result<Article> {
        let (original, draft) = match &self.state {
            ViewState::Editing { original, draft } => (original.clone(), draft.clone()),
            other => return Err(rejected(other, "save")),
        };
        self.state = ViewState::Idle;

        let result = match original {
            Some(original) => self.store.update(original.title(), draft.title, draft.extract),
            None => self.store.create(draft.title, draft.extract),
        };
        if let Err(e) = &result {
            warn!("Editor closed without saving: {}", e);
        }
        result
    }

    /// Discard the draft and close the editor
    pub fn cancel(&mut self) -> Result<()> {
        if !matches!(self.state, ViewState::Editing { .. }) {
            return Err(rejected(&self.state, "cancel"));
        }
        debug!("Editor cancelled");
        self.state = ViewState::Idle;
        Ok(())
    }

    /// Snapshot for rendering
    pub fn view(&self) -> View {
        View::new(self.store.index(), &self.state, &self.store.config().timestamp_format)
    }

    fn draft_mut(&mut self) -> Result<&mut Draft> {
        match &mut self.state {
            ViewState::Editing { draft, .. } => Ok(draft),
            other => Err(rejected(other, "edit the draft")),
        }
    }
}

fn rejected(state: &ViewState, action: &str) -> SimplepediaError {
    warn!("Cannot {} while {}", action, state.name());
    SimplepediaError::InvalidTransition(format!("cannot {} while {}", action, state.name()))
}
