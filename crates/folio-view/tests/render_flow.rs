//! Rendering driven by a live controller.

use folio_core::{
    DocumentLayout, DocumentMode, FolioConfig, IntersectionEntry, MemoryViewState, Msg, NavLink,
    PAGE_TRANSITION, PageId, Portfolio, SectionOffset, ViewState,
};
use folio_view::{
    MENU_BUTTON_ID, Templates, ViewModel, nav_hrefs, render_app, render_main, render_nav,
    reveal_targets, section_ids,
};
use pretty_assertions::assert_eq;

const SECTION_HEIGHT: f64 = 800.0;

/// Measure a rendered document the way a host would, stacking sections at a
/// fixed height.
fn measure(app: &Portfolio) -> DocumentLayout {
    let templates = Templates::new().unwrap();
    let vm = ViewModel::of(app);
    let nav = render_nav(&templates, &vm).unwrap();
    DocumentLayout {
        sections: section_ids(&vm)
            .into_iter()
            .enumerate()
            .map(|(i, id)| SectionOffset::new(id, i as f64 * SECTION_HEIGHT))
            .collect(),
        links: nav_hrefs().into_iter().map(NavLink::new).collect(),
        reveal_targets: reveal_targets(&vm),
        has_menu_button: nav.contains(MENU_BUTTON_ID),
    }
}

#[test]
fn paged_navigation_swaps_rendered_page_after_exit() {
    let templates = Templates::new().unwrap();
    let mut app = Portfolio::new(FolioConfig::default(), 1280.0).unwrap();
    let mut view = MemoryViewState::new();
    app.update(Msg::Tick(PAGE_TRANSITION), &mut view).unwrap();

    app.update(Msg::Navigate("projects".into()), &mut view)
        .unwrap();
    let vm = ViewModel::of(&app);
    assert_eq!(vm.current, PageId::Projects);
    assert_eq!(section_ids(&vm), vec!["home"]);
    let main = render_main(&templates, &vm).unwrap();
    assert!(main.contains(r#"data-page="home""#));

    app.update(Msg::Tick(PAGE_TRANSITION), &mut view).unwrap();
    let vm = ViewModel::of(&app);
    assert_eq!(section_ids(&vm), vec!["projects"]);
    let main = render_main(&templates, &vm).unwrap();
    assert!(main.contains(r#"<section id="projects""#));
    assert!(!main.contains(r#"<section id="home""#));
}

#[test]
fn scrolling_document_highlights_measured_sections() {
    let config = FolioConfig::default().with_document_mode(DocumentMode::Scrolling);
    let mut app = Portfolio::new(config, 1280.0).unwrap();
    let mut view = MemoryViewState::new();
    let layout = measure(&app);
    assert!(!layout.has_menu_button);
    app.update(Msg::SetDocument(layout), &mut view).unwrap();

    app.update(Msg::Scroll { y: 900.0 }, &mut view).unwrap();
    assert_eq!(view.active_keys().collect::<Vec<_>>(), vec!["#about"]);

    app.update(Msg::Scroll { y: 2300.0 }, &mut view).unwrap();
    assert_eq!(view.active_keys().collect::<Vec<_>>(), vec!["#projects"]);
}

#[test]
fn mobile_document_exposes_menu_button() {
    let mut app = Portfolio::new(FolioConfig::default(), 400.0).unwrap();
    let mut view = MemoryViewState::new();
    let layout = measure(&app);
    assert!(layout.has_menu_button);
    app.update(Msg::SetDocument(layout), &mut view).unwrap();

    app.update(Msg::ToggleMenu, &mut view).unwrap();
    assert!(view.is_open());
    let templates = Templates::new().unwrap();
    let html = render_app(&templates, &ViewModel::of(&app)).unwrap();
    assert!(html.contains(r#"aria-expanded="true""#));
}

#[test]
fn revealed_cards_stay_visible() {
    let mut app = Portfolio::new(
        FolioConfig::default()
            .with_document_mode(DocumentMode::Scrolling)
            .with_initial_page(PageId::Projects),
        1280.0,
    )
    .unwrap();
    let mut view = MemoryViewState::new();
    let layout = measure(&app);
    assert!(layout.reveal_targets.contains(&"project-1".to_string()));
    app.update(Msg::SetDocument(layout), &mut view).unwrap();

    let seen = vec![IntersectionEntry::new("project-1", true, 0.4)];
    app.update(Msg::Intersect(seen), &mut view).unwrap();
    let gone = vec![IntersectionEntry::new("project-1", false, 0.0)];
    app.update(Msg::Intersect(gone), &mut view).unwrap();

    assert!(app.is_revealed("project-1"));
    assert!(view.is_visible("project-1"));
}
