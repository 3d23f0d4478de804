#![forbid(unsafe_code)]

//! In-memory page router.
//!
//! Holds the current page and drives the [`PageTransition`] that swaps the
//! rendered content. There is no history stack; back navigation is not
//! modeled.

use std::time::Duration;

use crate::error::FolioResult;
use crate::page::PageId;
use crate::transition::{PageTransition, TransitionFrame};

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    /// Page that was current before the request.
    pub from: PageId,
    /// Page that is current after the request.
    pub to: PageId,
}

impl Navigation {
    /// Whether the current page changed.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Current-page state plus its transition.
#[derive(Debug, Clone)]
pub struct Router {
    current: PageId,
    transition: PageTransition,
    animate: bool,
}

impl Router {
    /// Create a router whose first page plays its enter animation.
    #[must_use]
    pub fn new(initial: PageId) -> Self {
        Self {
            current: initial,
            transition: PageTransition::entering(initial),
            animate: true,
        }
    }

    /// Create a router that swaps pages instantly, without transitions.
    #[must_use]
    pub fn settled(initial: PageId) -> Self {
        Self {
            current: initial,
            transition: PageTransition::settled(initial),
            animate: false,
        }
    }

    /// Page selected by the latest navigation.
    #[must_use]
    pub const fn current(&self) -> PageId {
        self.current
    }

    /// Page whose content is on screen. Lags [`current`](Self::current)
    /// while the previous page is exiting.
    #[must_use]
    pub const fn rendered(&self) -> PageId {
        self.transition.rendered()
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        !self.transition.is_settled()
    }

    /// Sample the transition pose.
    #[must_use]
    pub fn frame(&self) -> TransitionFrame {
        self.transition.frame()
    }

    /// Navigate by route identifier.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::UnknownRoute`](crate::FolioError::UnknownRoute)
    /// if `route` names no page. State is left untouched.
    pub fn navigate(&mut self, route: &str) -> FolioResult<Navigation> {
        match route.parse::<PageId>() {
            Ok(page) => Ok(self.navigate_to(page)),
            Err(err) => {
                crate::warn!(route, "rejected navigation to unknown route");
                Err(err)
            }
        }
    }

    /// Navigate to a known page. Selecting the current page is a no-op.
    pub fn navigate_to(&mut self, page: PageId) -> Navigation {
        let nav = Navigation {
            from: self.current,
            to: page,
        };
        if nav.changed() {
            crate::info!(from = %nav.from, to = %nav.to, "navigate");
            self.current = page;
            if self.animate {
                self.transition.retarget(page);
            } else {
                self.transition = PageTransition::settled(page);
            }
        }
        nav
    }

    /// Advance the transition. Returns `true` when the rendered page swapped.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.transition.tick(dt)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(PageId::default())
    }
}
