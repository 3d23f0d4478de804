#![forbid(unsafe_code)]

//! Page enter/exit transition.
//!
//! Exactly one page is rendered at any time. When the target changes, the
//! rendered page first exits (fade out, slide up), and only once it is gone
//! does the target page enter (fade in, slide up from below). Each phase
//! lasts [`PAGE_TRANSITION`].

use std::time::Duration;

use crate::animation::{Animation, Tween, anticipate};
use crate::page::PageId;

/// Duration of each transition phase.
pub const PAGE_TRANSITION: Duration = Duration::from_millis(500);

/// Vertical travel of a page during enter/exit, in CSS pixels.
pub const PAGE_SHIFT_PX: f32 = 20.0;

/// Which half of the transition is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The rendered page is leaving.
    Exiting,
    /// The rendered page is arriving.
    Entering,
    /// No animation in flight.
    Settled,
}

/// Sampled presentation of the rendered page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    /// Page whose content is on screen.
    pub page: PageId,
    /// Opacity in [0, 1].
    pub opacity: f32,
    /// Vertical offset in CSS pixels (positive is down).
    pub offset_y: f32,
    /// Current phase.
    pub phase: Phase,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Settled,
    Exiting {
        target: PageId,
        opacity: Tween,
        offset: Tween,
    },
    Entering {
        opacity: Tween,
        offset: Tween,
    },
}

/// Wait-mode presence transition between pages.
#[derive(Debug, Clone)]
pub struct PageTransition {
    rendered: PageId,
    state: State,
}

impl PageTransition {
    /// Start with `page` entering, as on first mount.
    #[must_use]
    pub fn entering(page: PageId) -> Self {
        Self {
            rendered: page,
            state: enter_state(),
        }
    }

    /// Start with `page` already on screen and nothing animating.
    #[must_use]
    pub fn settled(page: PageId) -> Self {
        Self {
            rendered: page,
            state: State::Settled,
        }
    }

    /// Page currently on screen.
    #[must_use]
    pub const fn rendered(&self) -> PageId {
        self.rendered
    }

    /// Whether no animation is in flight.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self.state, State::Settled)
    }

    /// Request that `target` ends up on screen.
    ///
    /// Mid-exit requests retarget without restarting the exit. Mid-enter
    /// requests for another page start an exit from the current pose.
    pub fn retarget(&mut self, target: PageId) {
        match &mut self.state {
            State::Exiting { target: pending, .. } => *pending = target,
            State::Settled => {
                if target != self.rendered {
                    self.state = exit_state(target, 1.0, 0.0);
                }
            }
            State::Entering { opacity, offset } => {
                if target != self.rendered {
                    let from_opacity = opacity.position().clamp(0.0, 1.0);
                    let from_offset = offset.position();
                    self.state = exit_state(target, from_opacity, from_offset);
                }
            }
        }
    }

    /// Advance by `dt`. Returns `true` when the rendered page changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let mut swapped = false;
        let mut remaining = dt;
        loop {
            match &mut self.state {
                State::Settled => break,
                State::Exiting {
                    target,
                    opacity,
                    offset,
                } => {
                    opacity.tick(remaining);
                    offset.tick(remaining);
                    if !opacity.is_complete() {
                        break;
                    }
                    remaining = opacity.overshoot();
                    let next = *target;
                    swapped |= next != self.rendered;
                    self.rendered = next;
                    self.state = enter_state();
                }
                State::Entering { opacity, offset } => {
                    opacity.tick(remaining);
                    offset.tick(remaining);
                    if opacity.is_complete() {
                        self.state = State::Settled;
                    }
                    break;
                }
            }
        }
        swapped
    }

    /// Sample the current pose.
    #[must_use]
    pub fn frame(&self) -> TransitionFrame {
        let (opacity, offset_y, phase) = match &self.state {
            State::Settled => (1.0, 0.0, Phase::Settled),
            State::Exiting {
                opacity, offset, ..
            } => (opacity.position(), offset.position(), Phase::Exiting),
            State::Entering { opacity, offset } => {
                (opacity.position(), offset.position(), Phase::Entering)
            }
        };
        TransitionFrame {
            page: self.rendered,
            opacity: opacity.clamp(0.0, 1.0),
            offset_y,
            phase,
        }
    }
}

fn enter_state() -> State {
    State::Entering {
        opacity: Tween::new(0.0, 1.0, PAGE_TRANSITION).easing(anticipate),
        offset: Tween::new(PAGE_SHIFT_PX, 0.0, PAGE_TRANSITION).easing(anticipate),
    }
}

fn exit_state(target: PageId, from_opacity: f32, from_offset: f32) -> State {
    State::Exiting {
        target,
        opacity: Tween::new(from_opacity, 0.0, PAGE_TRANSITION).easing(anticipate),
        offset: Tween::new(from_offset, -PAGE_SHIFT_PX, PAGE_TRANSITION).easing(anticipate),
    }
}
