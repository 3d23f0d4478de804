#![forbid(unsafe_code)]

//! Folio view: portfolio content rendered through handlebars templates.
//!
//! Rendering is a pure function of [`ViewModel`], a snapshot of the
//! controller state. The host swaps regions wholesale as the controller
//! reports them dirty:
//!
//! - [`render_nav`] for the sidebar / mobile bar
//! - [`render_main`] for the page area
//!
//! Icons are emitted as `data-lucide` placeholders for the icon library to
//! materialize.

pub mod content;
pub mod nav;
pub mod pages;
pub mod templates;

use std::time::Duration;

use folio_core::{DocumentMode, LayoutMode, PageId, Portfolio, TransitionFrame};
use serde::Serialize;

pub use nav::{DRAWER_ID, MENU_BUTTON_ID, NAV_LINK_CLASS, nav_hrefs, render_nav};
pub use pages::{CONTENT_SECTION_CLASS, PROJECT_CARD_CLASS, render_page};
pub use templates::{Templates, ViewError, ViewResult};

/// Id of the element hosting page content.
pub const MAIN_ID: &str = "main";

/// Snapshot of controller state needed to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub current: PageId,
    pub rendered: PageId,
    pub layout: LayoutMode,
    pub menu_open: bool,
    pub mode: DocumentMode,
    pub card_delays: Vec<Duration>,
}

impl ViewModel {
    /// Capture the renderable state of `app`.
    #[must_use]
    pub fn of(app: &Portfolio) -> Self {
        Self {
            current: app.current_page(),
            rendered: app.rendered_page(),
            layout: app.layout_mode(),
            menu_open: app.menu_open(),
            mode: app.document_mode(),
            card_delays: app.card_delays(content::PROJECTS.len()),
        }
    }

    /// Pages present in the page area: the rendered page when paged, every
    /// page when scrolling.
    #[must_use]
    pub fn pages(&self) -> Vec<PageId> {
        match self.mode {
            DocumentMode::Paged => vec![self.rendered],
            DocumentMode::Scrolling => PageId::ALL.to_vec(),
        }
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self {
            current: PageId::Home,
            rendered: PageId::Home,
            layout: LayoutMode::Desktop,
            menu_open: false,
            mode: DocumentMode::Paged,
            card_delays: Vec::new(),
        }
    }
}

#[derive(Serialize)]
struct MainContext {
    main_id: &'static str,
    paged: bool,
    rendered: &'static str,
    pages: Vec<String>,
}

#[derive(Serialize)]
struct AppContext<'a> {
    layout: &'static str,
    nav: &'a str,
    main: &'a str,
}

/// Render the page area.
///
/// # Errors
///
/// Propagates template rendering failures.
pub fn render_main(templates: &Templates, vm: &ViewModel) -> ViewResult<String> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("render_main", page = %vm.rendered, mode = ?vm.mode).entered();
    let pages = vm
        .pages()
        .into_iter()
        .map(|page| render_page(templates, page, vm))
        .collect::<ViewResult<Vec<_>>>()?;
    templates.render(
        "main",
        &MainContext {
            main_id: MAIN_ID,
            paged: vm.mode == DocumentMode::Paged,
            rendered: vm.rendered.id(),
            pages,
        },
    )
}

/// Render the whole application shell.
///
/// # Errors
///
/// Propagates template rendering failures.
pub fn render_app(templates: &Templates, vm: &ViewModel) -> ViewResult<String> {
    let nav = render_nav(templates, vm)?;
    let main = render_main(templates, vm)?;
    templates.render(
        "app",
        &AppContext {
            layout: vm.layout.label(),
            nav: &nav,
            main: &main,
        },
    )
}

/// Inline style for the page container at `frame`.
#[must_use]
pub fn frame_style(frame: &TransitionFrame) -> String {
    format!(
        "opacity:{:.3};transform:translateY({:.2}px)",
        frame.opacity, frame.offset_y
    )
}

/// Ids of highlightable sections in the page area, in document order.
#[must_use]
pub fn section_ids(vm: &ViewModel) -> Vec<String> {
    vm.pages().into_iter().map(|page| page.id().to_string()).collect()
}

/// Ids of reveal targets in the page area, in document order.
#[must_use]
pub fn reveal_targets(vm: &ViewModel) -> Vec<String> {
    vm.pages().into_iter().flat_map(pages::page_targets).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{FolioConfig, MemoryViewState, Msg, Phase};

    #[test]
    fn paged_main_renders_one_page() {
        let templates = Templates::new().unwrap();
        let vm = ViewModel {
            rendered: PageId::Experience,
            ..ViewModel::default()
        };
        let html = render_main(&templates, &vm).unwrap();
        assert!(html.contains(r#"<div class="page" data-page="experience">"#));
        assert_eq!(html.matches(CONTENT_SECTION_CLASS).count(), 1);
        assert_eq!(section_ids(&vm), vec!["experience"]);
    }

    #[test]
    fn scrolling_main_stacks_pages_in_order() {
        let templates = Templates::new().unwrap();
        let vm = ViewModel {
            mode: DocumentMode::Scrolling,
            ..ViewModel::default()
        };
        let html = render_main(&templates, &vm).unwrap();
        assert!(!html.contains(r#"class="page""#));
        let positions: Vec<usize> = PageId::ALL
            .into_iter()
            .map(|page| html.find(&format!(r#"<section id="{}""#, page.id())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(
            section_ids(&vm),
            vec!["home", "about", "experience", "projects"]
        );
        assert_eq!(reveal_targets(&vm).len(), 4 + content::PROJECTS.len());
    }

    #[test]
    fn view_model_tracks_controller() {
        let mut app = Portfolio::new(FolioConfig::default(), 500.0).unwrap();
        let mut view = MemoryViewState::new();
        app.update(Msg::NavigateTo(PageId::About), &mut view)
            .unwrap();
        let vm = ViewModel::of(&app);
        assert_eq!(vm.current, PageId::About);
        assert_eq!(vm.rendered, PageId::Home);
        assert_eq!(vm.layout, LayoutMode::Mobile);
        assert_eq!(vm.card_delays.len(), content::PROJECTS.len());
    }

    #[test]
    fn frame_style_formats_pose() {
        let frame = TransitionFrame {
            page: PageId::Home,
            opacity: 0.5,
            offset_y: -10.0,
            phase: Phase::Exiting,
        };
        assert_eq!(
            frame_style(&frame),
            "opacity:0.500;transform:translateY(-10.00px)"
        );
    }

    #[test]
    fn app_shell_carries_layout_class() {
        let templates = Templates::new().unwrap();
        let html = render_app(&templates, &ViewModel::default()).unwrap();
        assert!(html.starts_with(r#"<div id="app-shell" class="app desktop">"#));
        assert!(html.contains(r#"<aside id="sidebar""#));
        assert!(html.contains(r#"<main id="main" class="main">"#));
    }
}
