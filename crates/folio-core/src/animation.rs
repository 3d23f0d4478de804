#![forbid(unsafe_code)]

//! Time-based animation primitives.
//!
//! Animations are host-driven: nothing here reads a wall clock. The caller
//! advances them with [`Animation::tick`] and samples [`Animation::value`].
//! Elapsed time is tracked as [`Duration`] so repeated small ticks do not
//! accumulate floating-point drift.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Easing functions
// ---------------------------------------------------------------------------

/// Easing function signature: maps `t` in [0, 1] to an eased progress.
///
/// Most curves stay within [0, 1]; [`anticipate`] briefly dips below zero.
pub type EasingFn = fn(f32) -> f32;

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-out (slow end).
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

const BACK_OVERSHOOT: f32 = 1.701_58;

/// Pull back slightly, then shoot forward and settle.
///
/// The first half is a back-in curve, the second half an exponential
/// ease-out. Output dips below zero early on and reaches exactly 1.0 at the
/// end.
#[inline]
pub fn anticipate(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t >= 1.0 {
        return 1.0;
    }
    let p = t * 2.0;
    if p < 1.0 {
        0.5 * (p * p * ((BACK_OVERSHOOT + 1.0) * p - BACK_OVERSHOOT))
    } else {
        0.5 * (2.0 - 2f32.powf(-10.0 * (p - 1.0)))
    }
}

// ---------------------------------------------------------------------------
// Animation trait
// ---------------------------------------------------------------------------

/// A time-based animation.
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Current eased progress.
    fn value(&self) -> f32;

    /// Reset the animation to its initial state.
    fn reset(&mut self);

    /// Time elapsed past completion, forwarded by callers that chain
    /// animations back to back.
    fn overshoot(&self) -> Duration {
        Duration::ZERO
    }
}

// ---------------------------------------------------------------------------
// Tween
// ---------------------------------------------------------------------------

/// Interpolates an `f32` between `from` and `to` over a duration.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Tween {
    /// Create a tween with linear easing.
    #[must_use]
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            easing: linear,
        }
    }

    /// Set the easing function.
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Raw linear progress (before easing), in [0.0, 1.0].
    #[must_use]
    pub fn raw_progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }

    /// Interpolated value between `from` and `to`.
    #[must_use]
    pub fn position(&self) -> f32 {
        self.from + (self.to - self.from) * self.value()
    }

    /// Configured duration.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        (self.easing)(self.raw_progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    fn overshoot(&self) -> Duration {
        self.elapsed.saturating_sub(self.duration)
    }
}

// ---------------------------------------------------------------------------
// Stagger
// ---------------------------------------------------------------------------

/// Linear stagger offsets: `offset[i] = i * delay`.
///
/// Returns an empty vec for `count == 0`; the first offset is always zero.
#[must_use]
pub fn stagger_offsets(count: usize, delay: Duration) -> Vec<Duration> {
    (0..count)
        .map(|i| delay.saturating_mul(u32::try_from(i).unwrap_or(u32::MAX)))
        .collect()
}
