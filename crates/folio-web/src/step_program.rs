#![forbid(unsafe_code)]

//! Step-based runner for the portfolio controller.
//!
//! [`StepPortfolio`] drives a [`Portfolio`] without threads or blocking. The
//! host (JavaScript, or a test) controls the loop:
//!
//! 1. Push events via [`StepPortfolio::push_event`].
//! 2. Advance time via [`StepPortfolio::advance_time`].
//! 3. Call [`StepPortfolio::step`] to apply queued events and render what
//!    became dirty.
//! 4. Apply [`StepPortfolio::take_outputs`] to the document.
//!
//! After replacing navigation or page markup the host measures the new
//! document and pushes [`HostEvent::Document`].
//!
//! # Example
//!
//! ```
//! use core::time::Duration;
//! use folio_core::FolioConfig;
//! use folio_web::step_program::{HostEvent, StepPortfolio};
//!
//! let mut prog = StepPortfolio::new(FolioConfig::default(), 1280.0).unwrap();
//! prog.init().unwrap();
//!
//! prog.push_event(HostEvent::Navigate { route: "about".into() });
//! prog.advance_time(Duration::from_millis(16));
//! let result = prog.step().unwrap();
//! assert!(result.rendered_nav);
//! let outputs = prog.take_outputs();
//! assert!(outputs.nav_html.is_some());
//! ```

use core::time::Duration;
use std::collections::VecDeque;

use folio_core::{
    Dirty, DocumentLayout, DocumentMode, FolioConfig, FolioResult, IntersectionEntry,
    MemoryViewState, Msg, PageId, Portfolio,
};
use folio_view::{Templates, ViewModel, frame_style, render_main, render_nav};
use serde::{Deserialize, Serialize};

use crate::{DeterministicClock, WebError, WebOutputs};

/// Event reported by the host document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// Programmatic navigation by route identifier.
    Navigate { route: String },
    /// A navigation link was activated.
    LinkClicked { route: String },
    /// The window was resized.
    Resize { width: f64 },
    /// The window scrolled to `y`.
    Scroll { y: f64 },
    /// Batch of intersection observations.
    Intersect { entries: Vec<IntersectionEntry> },
    /// The menu button was activated.
    ToggleMenu,
    /// Measurements of freshly rendered markup.
    Document { layout: DocumentLayout },
}

impl HostEvent {
    /// Parse an event from its JSON form, e.g. `{"type":"scroll","y":900}`.
    pub fn from_json(json: &str) -> Result<Self, WebError> {
        serde_json::from_str(json).map_err(|err| WebError::InvalidEvent(err.to_string()))
    }
}

/// Result of a single [`StepPortfolio::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether navigation markup was re-rendered.
    pub rendered_nav: bool,
    /// Whether page markup was re-rendered.
    pub rendered_main: bool,
    /// Whether a new transition pose was emitted.
    pub frame_changed: bool,
    /// Number of events processed during this step.
    pub events_processed: u32,
    /// Number of events rejected with an error.
    pub events_rejected: u32,
    /// Current frame index (monotonically increasing).
    pub frame_idx: u64,
}

/// Host-driven, non-blocking runner for the portfolio controller.
///
/// Marker changes are journaled and handed to the host as class operations;
/// markup is regenerated only for regions the controller reports dirty.
pub struct StepPortfolio {
    app: Portfolio,
    templates: Templates,
    view: MemoryViewState,
    events: VecDeque<HostEvent>,
    clock: DeterministicClock,
    last_tick: Duration,
    outputs: WebOutputs,
    dirty: Dirty,
    initialized: bool,
    frame_idx: u64,
}

impl StepPortfolio {
    /// Create a runner for a window `width` pixels wide.
    ///
    /// # Errors
    ///
    /// Fails if `config` is invalid or a template does not compile.
    pub fn new(config: FolioConfig, width: f64) -> Result<Self, WebError> {
        Ok(Self {
            app: Portfolio::new(config, width)?,
            templates: Templates::new()?,
            view: MemoryViewState::new(),
            events: VecDeque::new(),
            clock: DeterministicClock::new(),
            last_tick: Duration::ZERO,
            outputs: WebOutputs::default(),
            dirty: Dirty::all(),
            initialized: false,
            frame_idx: 0,
        })
    }

    /// Render the initial document.
    ///
    /// Must be called exactly once before [`step`](Self::step). Time set
    /// before this call does not count towards the first transition.
    pub fn init(&mut self) -> Result<(), WebError> {
        if self.initialized {
            return Err(WebError::AlreadyInitialized);
        }
        self.initialized = true;
        self.last_tick = self.clock.now();
        self.render()
    }

    /// Apply all queued events, advance any transition by the time elapsed
    /// since the previous step, and render what became dirty.
    ///
    /// A transition started by this step's events begins at the current
    /// clock reading; idle time before it is not applied.
    pub fn step(&mut self) -> Result<StepResult, WebError> {
        if !self.initialized {
            return Err(WebError::NotInitialized);
        }

        let was_animating = self.app.is_animating();

        let mut events_processed: u32 = 0;
        let mut events_rejected: u32 = 0;
        while let Some(event) = self.events.pop_front() {
            events_processed += 1;
            if let Err(err) = self.handle_event(event) {
                events_rejected += 1;
                self.outputs.logs.push(err.to_string());
            }
        }

        let now = self.clock.now();
        let dt = now.saturating_sub(self.last_tick);
        self.last_tick = now;
        if was_animating && self.app.is_animating() && !dt.is_zero() {
            self.apply(Msg::Tick(dt))?;
        }

        let dirty = self.dirty;
        self.render()?;
        Ok(StepResult {
            rendered_nav: dirty.contains(Dirty::NAV),
            rendered_main: dirty.contains(Dirty::MAIN),
            frame_changed: dirty.contains(Dirty::FRAME),
            events_processed,
            events_rejected,
            frame_idx: self.frame_idx,
        })
    }

    /// Queue an event for the next [`step`](Self::step).
    pub fn push_event(&mut self, event: HostEvent) {
        self.events.push_back(event);
    }

    /// Advance the deterministic clock by `dt`.
    pub fn advance_time(&mut self, dt: Duration) {
        self.clock.advance(dt);
    }

    /// Set the deterministic clock to an absolute time.
    pub fn set_time(&mut self, now: Duration) {
        self.clock.set(now);
    }

    /// Take the captured outputs, leaving empty defaults.
    pub fn take_outputs(&mut self) -> WebOutputs {
        core::mem::take(&mut self.outputs)
    }

    /// Read the captured outputs without consuming them.
    #[must_use]
    pub const fn outputs(&self) -> &WebOutputs {
        &self.outputs
    }

    /// Access the controller.
    #[must_use]
    pub const fn app(&self) -> &Portfolio {
        &self.app
    }

    /// Whether a transition is in flight and the host should keep stepping.
    #[must_use]
    pub const fn wants_frames(&self) -> bool {
        self.app.is_animating()
    }

    /// Whether the host should cancel the browser's default action for
    /// `event`.
    ///
    /// Paged documents swap pages in place, so link activation is handled
    /// entirely here. Scrolling documents leave anchor links to the browser
    /// so it scrolls to the section.
    #[must_use]
    pub fn suppresses_default(&self, event: &HostEvent) -> bool {
        match event {
            HostEvent::LinkClicked { .. } => self.app.document_mode() == DocumentMode::Paged,
            HostEvent::Navigate { .. } | HostEvent::ToggleMenu => true,
            _ => false,
        }
    }

    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub const fn frame_idx(&self) -> u64 {
        self.frame_idx
    }

    // --- Private helpers ---

    fn handle_event(&mut self, event: HostEvent) -> FolioResult<()> {
        let msg = match event {
            HostEvent::Navigate { route } => Msg::Navigate(route),
            HostEvent::LinkClicked { route } => Msg::NavLinkClicked(route.parse::<PageId>()?),
            HostEvent::Resize { width } => Msg::Resize { width },
            HostEvent::Scroll { y } => Msg::Scroll { y },
            HostEvent::Intersect { entries } => Msg::Intersect(entries),
            HostEvent::ToggleMenu => Msg::ToggleMenu,
            HostEvent::Document { layout } => Msg::SetDocument(layout),
        };
        self.apply(msg)
    }

    fn apply(&mut self, msg: Msg) -> FolioResult<()> {
        let dirty = self.app.update(msg, &mut self.view)?;
        self.dirty |= dirty;
        Ok(())
    }

    fn render(&mut self) -> Result<(), WebError> {
        self.outputs.class_ops.extend(self.view.take_ops());
        if self.dirty.is_empty() {
            return Ok(());
        }
        let vm = ViewModel::of(&self.app);
        if self.dirty.contains(Dirty::NAV) {
            self.outputs.nav_html = Some(render_nav(&self.templates, &vm)?);
        }
        if self.dirty.contains(Dirty::MAIN) {
            self.outputs.main_html = Some(render_main(&self.templates, &vm)?);
        }
        if self.dirty.intersects(Dirty::FRAME | Dirty::MAIN) {
            self.outputs.frame_style = Some(frame_style(&self.app.frame()));
        }
        self.dirty = Dirty::empty();
        self.frame_idx += 1;
        Ok(())
    }
}
