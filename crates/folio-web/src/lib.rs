#![forbid(unsafe_code)]

//! `folio-web` hosts the portfolio in a browser.
//!
//! Design goals:
//! - **Host-driven I/O**: the document reports resize, scroll, intersection
//!   and click events; the runner never touches the DOM itself.
//! - **Deterministic time**: the host advances a monotonic clock explicitly.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.
//!
//! [`step_program::StepPortfolio`] is the platform-independent core. On
//! `wasm32` the `PortfolioWeb` type binds it to a live document via
//! `wasm-bindgen`.

pub mod step_program;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::PortfolioWeb;

use core::time::Duration;

use folio_core::{ClassOp, FolioError};
use folio_view::ViewError;

/// Native builds compile the browser binding as a stub so workspace checks
/// stay green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct PortfolioWeb;

#[cfg(not(target_arch = "wasm32"))]
impl PortfolioWeb {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}

/// Web host error type.
#[derive(Debug, Clone, PartialEq)]
pub enum WebError {
    /// [`step_program::StepPortfolio::init`] was called twice.
    AlreadyInitialized,
    /// A step was requested before initialization.
    NotInitialized,
    /// A required document element is absent.
    MissingElement(&'static str),
    /// A browser API call failed.
    Js(String),
    /// A host event could not be decoded.
    InvalidEvent(String),
    /// The controller rejected a request.
    Folio(FolioError),
    /// Markup could not be rendered.
    View(ViewError),
}

impl core::fmt::Display for WebError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AlreadyInitialized => write!(f, "already initialized"),
            Self::NotInitialized => write!(f, "not initialized"),
            Self::MissingElement(what) => write!(f, "missing element: {what}"),
            Self::Js(msg) => write!(f, "js error: {msg}"),
            Self::InvalidEvent(msg) => write!(f, "invalid host event: {msg}"),
            Self::Folio(err) => write!(f, "{err}"),
            Self::View(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Folio(err) => Some(err),
            Self::View(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FolioError> for WebError {
    fn from(err: FolioError) -> Self {
        Self::Folio(err)
    }
}

impl From<ViewError> for WebError {
    fn from(err: ViewError) -> Self {
        Self::View(err)
    }
}

/// Deterministic monotonic clock controlled by the host.
#[derive(Debug, Default, Clone)]
pub struct DeterministicClock {
    now: Duration,
}

impl DeterministicClock {
    /// Create a clock starting at `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Set current monotonic time. Earlier values are ignored.
    pub fn set(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    /// Advance monotonic time by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
    }
}

/// Captured document updates for host consumption.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WebOutputs {
    /// Replacement markup for the navigation region.
    pub nav_html: Option<String>,
    /// Replacement markup for the page region.
    pub main_html: Option<String>,
    /// Inline style for the page container.
    pub frame_style: Option<String>,
    /// Marker class changes in application order.
    pub class_ops: Vec<ClassOp>,
    /// Log lines written by the runner.
    pub logs: Vec<String>,
}

impl WebOutputs {
    /// Whether replaced markup needs re-measuring.
    #[must_use]
    pub const fn needs_measure(&self) -> bool {
        self.nav_html.is_some() || self.main_html.is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_monotonic() {
        let mut clock = DeterministicClock::new();
        clock.advance(Duration::from_millis(16));
        clock.set(Duration::from_millis(10));
        assert_eq!(clock.now(), Duration::from_millis(16));
        clock.set(Duration::from_millis(40));
        assert_eq!(clock.now(), Duration::from_millis(40));
    }

    #[test]
    fn folio_errors_convert() {
        let err: WebError = FolioError::UnknownRoute("x".into()).into();
        assert_eq!(err.to_string(), r#"unknown route: "x""#);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn view_errors_convert() {
        let err: WebError = ViewError::Render("missing partial".into()).into();
        assert_eq!(err.to_string(), "render error: missing partial");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn outputs_start_empty() {
        let out = WebOutputs::default();
        assert!(out.is_empty());
        assert!(!out.needs_measure());
    }
}
