#![forbid(unsafe_code)]

//! Mobile navigation drawer toggle.

use crate::view_state::ViewState;

/// Open/closed state of the mobile navigation drawer.
///
/// Only the menu button toggles it and only nav-link activation forces it
/// closed. Clicks elsewhere are not handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Flip the drawer and mirror it onto `view`. Returns the new state.
    pub fn toggle<V: ViewState + ?Sized>(&mut self, view: &mut V) -> bool {
        self.open = !self.open;
        crate::debug!(open = self.open, "menu toggled");
        view.set_open(self.open);
        self.open
    }

    /// Force the drawer closed after a nav link is activated. Returns `true`
    /// if it was open.
    pub fn close_for_navigation<V: ViewState + ?Sized>(&mut self, view: &mut V) -> bool {
        let was_open = self.open;
        self.open = false;
        if was_open {
            view.set_open(false);
        }
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::MemoryViewState;

    #[test]
    fn toggle_flips() {
        let mut menu = MenuState::new();
        let mut view = MemoryViewState::new();
        assert!(menu.toggle(&mut view));
        assert!(view.is_open());
        assert!(!menu.toggle(&mut view));
        assert!(!view.is_open());
    }

    #[test]
    fn nav_closes_open_menu() {
        let mut menu = MenuState::new();
        let mut view = MemoryViewState::new();
        menu.toggle(&mut view);
        assert!(menu.close_for_navigation(&mut view));
        assert!(!menu.is_open());
        assert!(!view.is_open());
    }

    #[test]
    fn nav_on_closed_menu_is_idempotent() {
        let mut menu = MenuState::new();
        let mut view = MemoryViewState::new();
        assert!(!menu.close_for_navigation(&mut view));
        assert!(!menu.is_open());
        assert!(view.ops().is_empty());
    }
}
