#![forbid(unsafe_code)]

//! Presentation markers decoupled from the document tree.
//!
//! The highlight, reveal and menu logic only ever toggles three markers:
//! `visible` on reveal targets, `active` on nav links and `open` on the
//! navigation drawer. [`ViewState`] is the seam between that logic and the
//! host; the browser binding maps it onto `classList`, tests use
//! [`MemoryViewState`].

use std::collections::BTreeSet;

/// A presentation marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Reveal target has entered the viewport.
    Visible,
    /// Nav link targets the current section.
    Active,
    /// Navigation drawer is open.
    Open,
}

impl Marker {
    /// CSS class carrying this marker.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Active => "active",
            Self::Open => "is-open",
        }
    }
}

/// One class-list mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassOp {
    /// Element key (element id, or link href for nav links).
    pub key: String,
    /// Marker being changed.
    pub marker: Marker,
    /// `true` adds the class, `false` removes it.
    pub add: bool,
}

impl ClassOp {
    #[must_use]
    pub fn add(key: impl Into<String>, marker: Marker) -> Self {
        Self {
            key: key.into(),
            marker,
            add: true,
        }
    }

    #[must_use]
    pub fn remove(key: impl Into<String>, marker: Marker) -> Self {
        Self {
            key: key.into(),
            marker,
            add: false,
        }
    }
}

/// Marker storage abstracted away from the DOM.
pub trait ViewState {
    /// Mark `key` as revealed.
    fn set_visible(&mut self, key: &str);

    /// Whether `key` carries the visible marker.
    fn is_visible(&self, key: &str) -> bool;

    /// Add or remove the active marker on `key`.
    fn set_active(&mut self, key: &str, active: bool);

    /// Whether `key` carries the active marker.
    fn is_active(&self, key: &str) -> bool;

    /// Open or close the navigation drawer.
    fn set_open(&mut self, open: bool);

    /// Whether the navigation drawer is open.
    fn is_open(&self) -> bool;
}

/// In-memory [`ViewState`] that journals every mutation.
#[derive(Debug, Default, Clone)]
pub struct MemoryViewState {
    visible: BTreeSet<String>,
    active: BTreeSet<String>,
    open: bool,
    journal: Vec<ClassOp>,
}

impl MemoryViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutations recorded since the last [`take_ops`](Self::take_ops).
    #[must_use]
    pub fn ops(&self) -> &[ClassOp] {
        &self.journal
    }

    /// Drain the mutation journal.
    pub fn take_ops(&mut self) -> Vec<ClassOp> {
        std::mem::take(&mut self.journal)
    }

    /// Keys currently carrying the active marker, sorted.
    pub fn active_keys(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }

    /// Keys currently carrying the visible marker, sorted.
    pub fn visible_keys(&self) -> impl Iterator<Item = &str> {
        self.visible.iter().map(String::as_str)
    }
}

impl ViewState for MemoryViewState {
    fn set_visible(&mut self, key: &str) {
        self.visible.insert(key.to_string());
        self.journal.push(ClassOp::add(key, Marker::Visible));
    }

    fn is_visible(&self, key: &str) -> bool {
        self.visible.contains(key)
    }

    fn set_active(&mut self, key: &str, active: bool) {
        if active {
            self.active.insert(key.to_string());
            self.journal.push(ClassOp::add(key, Marker::Active));
        } else {
            self.active.remove(key);
            self.journal.push(ClassOp::remove(key, Marker::Active));
        }
    }

    fn is_active(&self, key: &str) -> bool {
        self.active.contains(key)
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
        self.journal.push(ClassOp {
            key: DRAWER_KEY.to_string(),
            marker: Marker::Open,
            add: open,
        });
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

/// Journal key used for drawer mutations.
pub const DRAWER_KEY: &str = "sidebar";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_records_in_order() {
        let mut view = MemoryViewState::new();
        view.set_active("#about", true);
        view.set_active("#about", false);
        view.set_visible("about");
        assert_eq!(
            view.take_ops(),
            vec![
                ClassOp::add("#about", Marker::Active),
                ClassOp::remove("#about", Marker::Active),
                ClassOp::add("about", Marker::Visible),
            ]
        );
        assert!(view.ops().is_empty());
    }

    #[test]
    fn markers_are_independent() {
        let mut view = MemoryViewState::new();
        view.set_visible("card-0");
        view.set_open(true);
        assert!(view.is_visible("card-0"));
        assert!(!view.is_active("card-0"));
        assert!(view.is_open());
    }

    #[test]
    fn class_names() {
        assert_eq!(Marker::Visible.class_name(), "visible");
        assert_eq!(Marker::Active.class_name(), "active");
        assert_eq!(Marker::Open.class_name(), "is-open");
    }
}
