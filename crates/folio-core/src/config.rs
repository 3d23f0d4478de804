#![forbid(unsafe_code)]

//! Runtime configuration.
//!
//! The host may pass a JSON options object; every field is optional and
//! falls back to [`FolioConfig::default`]. The page transition duration is
//! fixed and deliberately absent here.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::highlight::DEFAULT_LEAD_PX;
use crate::page::PageId;
use crate::reveal::DEFAULT_REVEAL_THRESHOLD;
use crate::viewport::{Breakpoint, DEFAULT_BREAKPOINT_PX};

/// How pages are laid out in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentMode {
    /// One page at a time, swapped by the router with a transition.
    #[default]
    Paged,
    /// All pages stacked as anchored sections; scroll position drives the
    /// active nav link.
    Scrolling,
}

/// Configuration for a Folio instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
    /// Minimum viewport width for the desktop layout.
    /// Default: 768
    pub breakpoint_px: f64,

    /// How far below the scroll position a section top may be and still
    /// count as current.
    /// Default: 150
    pub highlight_lead_px: f64,

    /// Visible fraction that reveals a section or card.
    /// Default: 0.1
    pub reveal_threshold: f64,

    /// Paged or scrolling document.
    /// Default: paged
    pub document_mode: DocumentMode,

    /// Page shown on load.
    /// Default: home
    pub initial_page: PageId,

    /// Delay between successive project card entrances, in milliseconds.
    /// Default: 100
    pub card_stagger_ms: u64,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            highlight_lead_px: DEFAULT_LEAD_PX,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            document_mode: DocumentMode::Paged,
            initial_page: PageId::Home,
            card_stagger_ms: 100,
        }
    }
}

impl FolioConfig {
    /// Parse and validate a JSON options object.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::InvalidConfig`] for malformed JSON, unknown
    /// fields, unknown pages, or out-of-range values.
    pub fn from_json(json: &str) -> FolioResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| FolioError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> FolioResult<()> {
        if !self.breakpoint_px.is_finite() || self.breakpoint_px <= 0.0 {
            return Err(FolioError::InvalidConfig(format!(
                "breakpoint_px must be positive, got {}",
                self.breakpoint_px
            )));
        }
        if !self.highlight_lead_px.is_finite() || self.highlight_lead_px < 0.0 {
            return Err(FolioError::InvalidConfig(format!(
                "highlight_lead_px must be non-negative, got {}",
                self.highlight_lead_px
            )));
        }
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(FolioError::InvalidConfig(format!(
                "reveal_threshold must be in (0, 1], got {}",
                self.reveal_threshold
            )));
        }
        Ok(())
    }

    /// Set the document mode (builder).
    #[must_use]
    pub fn with_document_mode(mut self, mode: DocumentMode) -> Self {
        self.document_mode = mode;
        self
    }

    /// Set the initial page (builder).
    #[must_use]
    pub fn with_initial_page(mut self, page: PageId) -> Self {
        self.initial_page = page;
        self
    }

    /// Breakpoint derived from `breakpoint_px`.
    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::new(self.breakpoint_px)
    }

    /// Stagger delay between project cards.
    #[must_use]
    pub fn card_stagger(&self) -> Duration {
        Duration::from_millis(self.card_stagger_ms)
    }
}
