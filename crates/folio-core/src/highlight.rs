#![forbid(unsafe_code)]

//! Scroll-driven nav highlighting.
//!
//! On every scroll the sections are walked in document order and the last
//! one whose top (minus a fixed lead) is at or above the scroll position
//! wins. Every nav link then has its active marker cleared, and links whose
//! anchor targets the winner get it back. The clear is unconditional; no
//! diffing against the previous result.

use serde::{Deserialize, Serialize};

use crate::view_state::ViewState;

/// Default distance, in CSS pixels, a section may still be below the scroll
/// position and count as current.
pub const DEFAULT_LEAD_PX: f64 = 150.0;

/// A highlightable section and its offset from the document top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionOffset {
    /// Element id, matched against nav link anchors.
    pub id: String,
    /// `offsetTop` in CSS pixels.
    pub top: f64,
}

impl SectionOffset {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self {
            id: id.into(),
            top,
        }
    }
}

/// A navigation link identified by its `href`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Raw `href` attribute, e.g. `#about`.
    pub href: String,
}

impl NavLink {
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    /// Section id this link points at. `None` for non-anchor or bare `#`
    /// hrefs.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

/// Pick the current section: last match in iteration order wins.
#[must_use]
pub fn current_section<'a, I>(sections: I, scroll_y: f64, lead: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a SectionOffset>,
{
    sections
        .into_iter()
        .filter(|section| scroll_y >= section.top - lead)
        .last()
        .map(|section| section.id.as_str())
}

/// Clear the active marker on every link, then set it on links targeting
/// `current`.
pub fn apply_highlight<V: ViewState + ?Sized>(links: &[NavLink], current: Option<&str>, view: &mut V) {
    for link in links {
        view.set_active(&link.href, false);
        if current.is_some() && link.target() == current {
            view.set_active(&link.href, true);
        }
    }
}

/// Sections and links captured from the document, plus the lead offset.
#[derive(Debug, Clone)]
pub struct ScrollHighlighter {
    sections: Vec<SectionOffset>,
    links: Vec<NavLink>,
    lead: f64,
    current: Option<String>,
}

impl ScrollHighlighter {
    #[must_use]
    pub fn new(sections: Vec<SectionOffset>, links: Vec<NavLink>, lead: f64) -> Self {
        Self {
            sections,
            links,
            lead,
            current: None,
        }
    }

    /// Replace the captured sections and links (after a re-render or
    /// relayout). Freshly rendered links get the current highlight back.
    pub fn set_document<V: ViewState + ?Sized>(
        &mut self,
        sections: Vec<SectionOffset>,
        links: Vec<NavLink>,
        view: &mut V,
    ) {
        self.sections = sections;
        self.links = links;
        if self.current.is_some() {
            apply_highlight(&self.links, self.current.as_deref(), view);
        }
    }

    /// Section highlighted by the most recent scroll.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    #[must_use]
    pub fn sections(&self) -> &[SectionOffset] {
        &self.sections
    }

    #[must_use]
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Handle a scroll to `scroll_y`. With no sections or links this still
    /// runs and simply touches nothing.
    pub fn on_scroll<V: ViewState + ?Sized>(&mut self, scroll_y: f64, view: &mut V) -> Option<&str> {
        let current = current_section(&self.sections, scroll_y, self.lead).map(str::to_string);
        if current != self.current {
            crate::trace!(scroll_y, section = ?current, "highlight changed");
        }
        apply_highlight(&self.links, current.as_deref(), view);
        self.current = current;
        self.current.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::{ClassOp, Marker, MemoryViewState};

    fn three_sections() -> Vec<SectionOffset> {
        vec![
            SectionOffset::new("s1", 0.0),
            SectionOffset::new("s2", 800.0),
            SectionOffset::new("s3", 1600.0),
        ]
    }

    #[test]
    fn picks_section_within_lead() {
        let sections = three_sections();
        assert_eq!(current_section(&sections, 900.0, DEFAULT_LEAD_PX), Some("s2"));
        assert_eq!(current_section(&sections, 1500.0, DEFAULT_LEAD_PX), Some("s3"));
        assert_eq!(current_section(&sections, 649.0, DEFAULT_LEAD_PX), Some("s1"));
        assert_eq!(current_section(&sections, 650.0, DEFAULT_LEAD_PX), Some("s2"));
    }

    #[test]
    fn last_match_wins_even_out_of_order() {
        let sections = vec![
            SectionOffset::new("late", 1000.0),
            SectionOffset::new("early", 0.0),
        ];
        assert_eq!(current_section(&sections, 2000.0, DEFAULT_LEAD_PX), Some("early"));
    }

    #[test]
    fn nothing_matches_above_first_section() {
        let sections = vec![SectionOffset::new("s1", 400.0)];
        assert_eq!(current_section(&sections, 0.0, DEFAULT_LEAD_PX), None);
    }

    #[test]
    fn link_target_parsing() {
        assert_eq!(NavLink::new("#about").target(), Some("about"));
        assert_eq!(NavLink::new("#").target(), None);
        assert_eq!(NavLink::new("https://example.com").target(), None);
    }

    #[test]
    fn apply_clears_then_sets() {
        let links = vec![NavLink::new("#s1"), NavLink::new("#s2")];
        let mut view = MemoryViewState::new();
        apply_highlight(&links, Some("s2"), &mut view);
        assert_eq!(
            view.take_ops(),
            vec![
                ClassOp::remove("#s1", Marker::Active),
                ClassOp::remove("#s2", Marker::Active),
                ClassOp::add("#s2", Marker::Active),
            ]
        );
        assert!(view.is_active("#s2"));
        assert!(!view.is_active("#s1"));
    }

    #[test]
    fn none_clears_everything() {
        let links = vec![NavLink::new("#s1"), NavLink::new("#")];
        let mut view = MemoryViewState::new();
        view.set_active("#s1", true);
        apply_highlight(&links, None, &mut view);
        assert_eq!(view.active_keys().count(), 0);
    }

    #[test]
    fn repeated_scroll_repeats_clear() {
        let mut hl = ScrollHighlighter::new(
            three_sections(),
            vec![NavLink::new("#s1"), NavLink::new("#s2"), NavLink::new("#s3")],
            DEFAULT_LEAD_PX,
        );
        let mut view = MemoryViewState::new();
        hl.on_scroll(900.0, &mut view);
        view.take_ops();
        assert_eq!(hl.on_scroll(901.0, &mut view), Some("s2"));
        let removes = view.ops().iter().filter(|op| !op.add).count();
        assert_eq!(removes, 3);
    }

    #[test]
    fn new_links_inherit_current_highlight() {
        let mut view = MemoryViewState::new();
        let mut hl = ScrollHighlighter::new(
            three_sections(),
            vec![NavLink::new("#s1"), NavLink::new("#s2")],
            DEFAULT_LEAD_PX,
        );
        hl.on_scroll(900.0, &mut view);
        view.take_ops();
        hl.set_document(three_sections(), vec![NavLink::new("#s2")], &mut view);
        assert_eq!(
            view.take_ops(),
            vec![ClassOp::remove("#s2", Marker::Active), ClassOp::add("#s2", Marker::Active)]
        );
    }
}
