#![forbid(unsafe_code)]

//! Top-level controller.
//!
//! [`Portfolio`] owns every piece of mutable UI state: the current page and
//! its transition, the layout mode, the drawer flag, and the scroll effects.
//! The host feeds it [`Msg`] values; each update returns the set of regions
//! that need re-rendering, while marker changes go straight to the
//! [`ViewState`].

use std::time::Duration;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::animation::stagger_offsets;
use crate::config::{DocumentMode, FolioConfig};
use crate::error::FolioResult;
use crate::highlight::{NavLink, ScrollHighlighter, SectionOffset};
use crate::menu::MenuState;
use crate::page::PageId;
use crate::reveal::{IntersectionEntry, RevealTracker};
use crate::router::Router;
use crate::transition::TransitionFrame;
use crate::view_state::ViewState;
use crate::viewport::{LayoutMode, ViewportTracker};

bitflags! {
    /// Regions invalidated by an update.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Dirty: u8 {
        /// Navigation (current item or layout) changed.
        const NAV = 0b001;
        /// Main content must be rebuilt.
        const MAIN = 0b010;
        /// Transition pose moved; restyle the main container.
        const FRAME = 0b100;
    }
}

/// Document facts measured by the host after rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentLayout {
    /// Highlightable sections in document order.
    pub sections: Vec<SectionOffset>,
    /// Nav links that carry the active marker.
    pub links: Vec<NavLink>,
    /// Keys of sections and cards that reveal on intersection.
    pub reveal_targets: Vec<String>,
    /// Whether a menu button exists in the document.
    pub has_menu_button: bool,
}

/// Messages accepted by [`Portfolio::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Navigate by route identifier; unknown routes fail.
    Navigate(String),
    /// Navigate to a known page.
    NavigateTo(PageId),
    /// A nav link was activated: close the drawer, then navigate.
    NavLinkClicked(PageId),
    /// Window resized to `width` CSS pixels.
    Resize { width: f64 },
    /// Window scrolled to `y` CSS pixels.
    Scroll { y: f64 },
    /// Intersection observer batch.
    Intersect(Vec<IntersectionEntry>),
    /// Menu button clicked.
    ToggleMenu,
    /// Host re-measured the document.
    SetDocument(DocumentLayout),
    /// Animation clock advanced.
    Tick(Duration),
}

/// The single owner of portfolio UI state.
#[derive(Debug, Clone)]
pub struct Portfolio {
    config: FolioConfig,
    router: Router,
    viewport: ViewportTracker,
    menu: MenuState,
    highlighter: ScrollHighlighter,
    reveal: RevealTracker,
    has_menu_button: bool,
}

impl Portfolio {
    /// Create a controller for a window `width` pixels wide.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::InvalidConfig`](crate::FolioError::InvalidConfig)
    /// if `config` fails validation.
    pub fn new(config: FolioConfig, width: f64) -> FolioResult<Self> {
        config.validate()?;
        let router = match config.document_mode {
            DocumentMode::Paged => Router::new(config.initial_page),
            DocumentMode::Scrolling => Router::settled(config.initial_page),
        };
        crate::info!(
            mode = ?config.document_mode,
            page = %config.initial_page,
            width,
            "portfolio initialized"
        );
        Ok(Self {
            viewport: ViewportTracker::new(config.breakpoint(), width),
            highlighter: ScrollHighlighter::new(Vec::new(), Vec::new(), config.highlight_lead_px),
            reveal: RevealTracker::new(config.reveal_threshold),
            router,
            menu: MenuState::new(),
            has_menu_button: false,
            config,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &FolioConfig {
        &self.config
    }

    /// Page selected by the latest navigation (drives the nav marker).
    #[must_use]
    pub const fn current_page(&self) -> PageId {
        self.router.current()
    }

    /// Page whose content is on screen.
    #[must_use]
    pub const fn rendered_page(&self) -> PageId {
        self.router.rendered()
    }

    #[must_use]
    pub const fn layout_mode(&self) -> LayoutMode {
        self.viewport.mode()
    }

    #[must_use]
    pub const fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    #[must_use]
    pub const fn document_mode(&self) -> DocumentMode {
        self.config.document_mode
    }

    /// Current transition pose of the main content.
    #[must_use]
    pub fn frame(&self) -> TransitionFrame {
        self.router.frame()
    }

    /// Whether a page transition is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.router.is_animating()
    }

    /// Section highlighted by the most recent scroll.
    #[must_use]
    pub fn highlighted_section(&self) -> Option<&str> {
        self.highlighter.current()
    }

    /// Whether `key` has been revealed.
    #[must_use]
    pub fn is_revealed(&self, key: &str) -> bool {
        self.reveal.is_revealed(key)
    }

    /// Entrance delay for each of `count` project cards.
    #[must_use]
    pub fn card_delays(&self, count: usize) -> Vec<Duration> {
        stagger_offsets(count, self.config.card_stagger())
    }

    /// Apply one message.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::UnknownRoute`](crate::FolioError::UnknownRoute)
    /// for [`Msg::Navigate`] with an unrecognized route. No state changes in
    /// that case.
    pub fn update<V: ViewState + ?Sized>(&mut self, msg: Msg, view: &mut V) -> FolioResult<Dirty> {
        crate::trace!(msg = ?msg, "update");
        let dirty = match msg {
            Msg::Navigate(route) => {
                let nav = self.router.navigate(&route)?;
                self.navigation_dirty(nav.changed())
            }
            Msg::NavigateTo(page) => {
                let nav = self.router.navigate_to(page);
                self.navigation_dirty(nav.changed())
            }
            Msg::NavLinkClicked(page) => {
                self.menu.close_for_navigation(view);
                let nav = self.router.navigate_to(page);
                self.navigation_dirty(nav.changed())
            }
            Msg::Resize { width } => {
                if self.viewport.on_resize(width) {
                    Dirty::NAV | Dirty::MAIN
                } else {
                    Dirty::empty()
                }
            }
            Msg::Scroll { y } => {
                self.highlighter.on_scroll(y, view);
                Dirty::empty()
            }
            Msg::Intersect(entries) => {
                self.reveal.on_intersection(&entries, view);
                Dirty::empty()
            }
            Msg::ToggleMenu => {
                if self.has_menu_button {
                    self.menu.toggle(view);
                }
                Dirty::empty()
            }
            Msg::SetDocument(layout) => {
                self.set_document(layout, view);
                Dirty::empty()
            }
            Msg::Tick(dt) => self.tick(dt),
        };
        Ok(dirty)
    }

    fn navigation_dirty(&self, changed: bool) -> Dirty {
        match (changed, self.config.document_mode) {
            (false, _) => Dirty::empty(),
            (true, DocumentMode::Paged) => Dirty::NAV | Dirty::FRAME,
            (true, DocumentMode::Scrolling) => Dirty::NAV,
        }
    }

    fn set_document<V: ViewState + ?Sized>(&mut self, layout: DocumentLayout, view: &mut V) {
        let DocumentLayout {
            sections,
            links,
            reveal_targets,
            has_menu_button,
        } = layout;
        self.highlighter.set_document(sections, links, view);
        for key in reveal_targets {
            // Freshly rendered elements start hidden; reveals are permanent.
            if self.reveal.is_revealed(&key) {
                view.set_visible(&key);
            }
            self.reveal.observe(key);
        }
        self.has_menu_button = has_menu_button;
        if self.menu.is_open() {
            view.set_open(true);
        }
    }

    fn tick(&mut self, dt: Duration) -> Dirty {
        if self.config.document_mode == DocumentMode::Scrolling || !self.router.is_animating() {
            return Dirty::empty();
        }
        if self.router.tick(dt) {
            Dirty::MAIN | Dirty::FRAME
        } else {
            Dirty::FRAME
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;
    use crate::transition::PAGE_TRANSITION;
    use crate::view_state::MemoryViewState;

    fn desktop() -> (Portfolio, MemoryViewState) {
        let mut app = Portfolio::new(FolioConfig::default(), 1280.0).unwrap();
        let mut view = MemoryViewState::new();
        app.update(Msg::Tick(PAGE_TRANSITION), &mut view).unwrap();
        (app, view)
    }

    #[test]
    fn navigate_marks_nav_and_frame() {
        let (mut app, mut view) = desktop();
        let dirty = app.update(Msg::Navigate("about".into()), &mut view).unwrap();
        assert_eq!(dirty, Dirty::NAV | Dirty::FRAME);
        assert_eq!(app.current_page(), PageId::About);
    }

    #[test]
    fn main_swaps_when_exit_completes() {
        let (mut app, mut view) = desktop();
        app.update(Msg::NavigateTo(PageId::Projects), &mut view).unwrap();
        let dirty = app.update(Msg::Tick(PAGE_TRANSITION), &mut view).unwrap();
        assert!(dirty.contains(Dirty::MAIN));
        assert_eq!(app.rendered_page(), PageId::Projects);
        let dirty = app.update(Msg::Tick(PAGE_TRANSITION), &mut view).unwrap();
        assert_eq!(dirty, Dirty::FRAME);
        let dirty = app.update(Msg::Tick(PAGE_TRANSITION), &mut view).unwrap();
        assert!(dirty.is_empty());
    }

    #[test]
    fn unknown_route_leaves_state() {
        let (mut app, mut view) = desktop();
        let err = app
            .update(Msg::Navigate("resume".into()), &mut view)
            .unwrap_err();
        assert_eq!(err, FolioError::UnknownRoute("resume".into()));
        assert_eq!(app.current_page(), PageId::Home);
        assert!(!app.is_animating());
    }

    #[test]
    fn resize_across_breakpoint_rerenders() {
        let (mut app, mut view) = desktop();
        let dirty = app.update(Msg::Resize { width: 767.0 }, &mut view).unwrap();
        assert_eq!(dirty, Dirty::NAV | Dirty::MAIN);
        assert_eq!(app.layout_mode(), LayoutMode::Mobile);
        let dirty = app.update(Msg::Resize { width: 600.0 }, &mut view).unwrap();
        assert!(dirty.is_empty());
    }

    #[test]
    fn menu_button_requires_presence() {
        let (mut app, mut view) = desktop();
        app.update(Msg::ToggleMenu, &mut view).unwrap();
        assert!(!app.menu_open());
        app.update(
            Msg::SetDocument(DocumentLayout {
                has_menu_button: true,
                ..DocumentLayout::default()
            }),
            &mut view,
        )
        .unwrap();
        app.update(Msg::ToggleMenu, &mut view).unwrap();
        assert!(app.menu_open());
        assert!(view.is_open());
    }

    #[test]
    fn nav_link_closes_menu_and_navigates() {
        let (mut app, mut view) = desktop();
        app.update(
            Msg::SetDocument(DocumentLayout {
                has_menu_button: true,
                ..DocumentLayout::default()
            }),
            &mut view,
        )
        .unwrap();
        app.update(Msg::ToggleMenu, &mut view).unwrap();
        app.update(Msg::NavLinkClicked(PageId::Experience), &mut view)
            .unwrap();
        assert!(!app.menu_open());
        assert!(!view.is_open());
        assert_eq!(app.current_page(), PageId::Experience);
    }

    #[test]
    fn rerendered_targets_keep_reveal() {
        let (mut app, mut view) = desktop();
        let layout = DocumentLayout {
            reveal_targets: vec!["about".into()],
            ..DocumentLayout::default()
        };
        app.update(Msg::SetDocument(layout.clone()), &mut view)
            .unwrap();
        app.update(
            Msg::Intersect(vec![IntersectionEntry::new("about", true, 0.4)]),
            &mut view,
        )
        .unwrap();
        let mut fresh = MemoryViewState::new();
        app.update(Msg::SetDocument(layout), &mut fresh).unwrap();
        assert!(fresh.is_visible("about"));
    }

    #[test]
    fn scrolling_mode_never_animates() {
        let cfg = FolioConfig::default().with_document_mode(DocumentMode::Scrolling);
        let mut app = Portfolio::new(cfg, 1280.0).unwrap();
        let mut view = MemoryViewState::new();
        let dirty = app.update(Msg::NavigateTo(PageId::About), &mut view).unwrap();
        assert_eq!(dirty, Dirty::NAV);
        assert!(!app.is_animating());
        assert!(app.update(Msg::Tick(PAGE_TRANSITION), &mut view).unwrap().is_empty());
    }

    #[test]
    fn card_delays_follow_config() {
        let (app, _) = desktop();
        assert_eq!(
            app.card_delays(3),
            vec![
                Duration::ZERO,
                Duration::from_millis(100),
                Duration::from_millis(200)
            ]
        );
    }
}
