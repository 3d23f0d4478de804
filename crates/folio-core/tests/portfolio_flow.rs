//! End-to-end behavior of the portfolio controller.

use std::time::Duration;

use folio_core::{
    Dirty, DocumentLayout, FolioConfig, FolioError, IntersectionEntry, LayoutMode,
    MemoryViewState, Msg, NavLink, PAGE_TRANSITION, PageId, Portfolio, SectionOffset, ViewState,
};

fn settled(width: f64) -> (Portfolio, MemoryViewState) {
    let mut app = Portfolio::new(FolioConfig::default(), width).unwrap();
    let mut view = MemoryViewState::new();
    app.update(Msg::Tick(PAGE_TRANSITION), &mut view).unwrap();
    (app, view)
}

fn scroll_document() -> DocumentLayout {
    DocumentLayout {
        sections: vec![
            SectionOffset::new("s1", 0.0),
            SectionOffset::new("s2", 800.0),
            SectionOffset::new("s3", 1600.0),
        ],
        links: vec![
            NavLink::new("#s1"),
            NavLink::new("#s2"),
            NavLink::new("#s3"),
        ],
        reveal_targets: vec!["s1".into(), "s2".into(), "s3".into()],
        has_menu_button: true,
    }
}

#[test]
fn every_page_ends_up_rendered_alone() {
    let (mut app, mut view) = settled(1280.0);
    for page in PageId::ALL {
        app.update(Msg::Navigate(page.id().into()), &mut view)
            .unwrap();
        app.update(Msg::Tick(PAGE_TRANSITION * 2), &mut view)
            .unwrap();
        assert_eq!(app.current_page(), page);
        assert_eq!(app.rendered_page(), page);
        assert!(!app.is_animating());
    }
}

#[test]
fn breakpoint_flips_exactly_at_768() {
    let (mut app, mut view) = settled(1024.0);
    app.update(Msg::Resize { width: 768.0 }, &mut view).unwrap();
    assert_eq!(app.layout_mode(), LayoutMode::Desktop);
    let dirty = app.update(Msg::Resize { width: 767.0 }, &mut view).unwrap();
    assert_eq!(app.layout_mode(), LayoutMode::Mobile);
    assert!(dirty.contains(Dirty::NAV));
    app.update(Msg::Resize { width: 768.0 }, &mut view).unwrap();
    assert_eq!(app.layout_mode(), LayoutMode::Desktop);
}

#[test]
fn scroll_highlights_expected_sections() {
    let (mut app, mut view) = settled(1280.0);
    app.update(Msg::SetDocument(scroll_document()), &mut view)
        .unwrap();

    app.update(Msg::Scroll { y: 900.0 }, &mut view).unwrap();
    assert_eq!(app.highlighted_section(), Some("s2"));
    assert!(view.is_active("#s2"));
    assert!(!view.is_active("#s1"));

    app.update(Msg::Scroll { y: 1500.0 }, &mut view).unwrap();
    assert_eq!(app.highlighted_section(), Some("s3"));
    assert!(view.is_active("#s3"));
    assert!(!view.is_active("#s2"));
}

#[test]
fn reveal_survives_scrolling_out() {
    let (mut app, mut view) = settled(1280.0);
    app.update(Msg::SetDocument(scroll_document()), &mut view)
        .unwrap();
    app.update(
        Msg::Intersect(vec![IntersectionEntry::new("s2", true, 0.25)]),
        &mut view,
    )
    .unwrap();
    app.update(
        Msg::Intersect(vec![IntersectionEntry::new("s2", false, 0.0)]),
        &mut view,
    )
    .unwrap();
    assert!(view.is_visible("s2"));
    assert!(app.is_revealed("s2"));
}

#[test]
fn menu_closes_on_nav_and_stays_closed() {
    let (mut app, mut view) = settled(500.0);
    app.update(Msg::SetDocument(scroll_document()), &mut view)
        .unwrap();
    app.update(Msg::ToggleMenu, &mut view).unwrap();
    assert!(app.menu_open());

    app.update(Msg::NavLinkClicked(PageId::About), &mut view)
        .unwrap();
    assert!(!app.menu_open());
    assert!(!view.is_open());

    app.update(Msg::NavLinkClicked(PageId::Projects), &mut view)
        .unwrap();
    assert!(!app.menu_open());
}

#[test]
fn unknown_route_is_an_error() {
    let (mut app, mut view) = settled(1280.0);
    let result = app.update(Msg::Navigate("guestbook".into()), &mut view);
    assert_eq!(result, Err(FolioError::UnknownRoute("guestbook".into())));
    assert_eq!(app.rendered_page(), PageId::Home);
}

#[test]
fn host_can_tick_in_small_steps() {
    let (mut app, mut view) = settled(1280.0);
    app.update(Msg::NavigateTo(PageId::About), &mut view).unwrap();
    let mut swaps = 0;
    for _ in 0..60 {
        let dirty = app
            .update(Msg::Tick(Duration::from_millis(16)), &mut view)
            .unwrap();
        if dirty.contains(Dirty::MAIN) {
            swaps += 1;
        }
    }
    assert_eq!(swaps, 1);
    assert_eq!(app.rendered_page(), PageId::About);
}
