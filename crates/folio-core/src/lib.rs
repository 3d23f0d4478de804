#![forbid(unsafe_code)]

//! Folio core: UI state machines for the portfolio site.
//!
//! Everything here is host-agnostic. The browser binding in `folio-web`
//! translates DOM events into [`Msg`] values and applies [`ViewState`]
//! markers to real elements; tests drive the same code with
//! [`MemoryViewState`].
//!
//! # Components
//!
//! - [`Router`] - current page plus the enter/exit [`PageTransition`]
//! - [`ViewportTracker`] - mobile/desktop switch at the breakpoint
//! - [`ScrollHighlighter`] - last-match-wins nav highlighting on scroll
//! - [`RevealTracker`] - one-way reveal on intersection
//! - [`MenuState`] - mobile drawer toggle
//! - [`Portfolio`] - the controller that owns all of the above

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod highlight;
pub mod logging;
pub mod menu;
pub mod page;
pub mod reveal;
pub mod router;
pub mod transition;
pub mod view_state;
pub mod viewport;

pub use app::{Dirty, DocumentLayout, Msg, Portfolio};
pub use config::{DocumentMode, FolioConfig};
pub use error::{FolioError, FolioResult};
pub use highlight::{NavLink, ScrollHighlighter, SectionOffset, apply_highlight, current_section};
pub use menu::MenuState;
pub use page::PageId;
pub use reveal::{IntersectionEntry, RevealTracker};
pub use router::{Navigation, Router};
pub use transition::{PAGE_TRANSITION, PageTransition, Phase, TransitionFrame};
pub use view_state::{ClassOp, Marker, MemoryViewState, ViewState};
pub use viewport::{Breakpoint, LayoutMode, ViewportTracker};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, info, trace, warn};
