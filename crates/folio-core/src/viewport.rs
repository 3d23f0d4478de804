#![forbid(unsafe_code)]

//! Responsive layout switch.
//!
//! A single breakpoint splits mobile from desktop. Every resize is
//! classified synchronously; there is no debouncing.

use serde::{Deserialize, Serialize};

/// Default breakpoint width in CSS pixels.
pub const DEFAULT_BREAKPOINT_PX: f64 = 768.0;

/// Layout tier derived from viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Narrow viewport: bottom navigation bar.
    Mobile,
    /// Wide viewport: sticky sidebar.
    Desktop,
}

impl LayoutMode {
    /// Short label for display and logging.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }

    /// Whether this is the narrow layout.
    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

impl core::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Mobile/desktop threshold.
///
/// Widths strictly below `min_desktop_px` are mobile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Minimum width for the desktop layout.
    pub min_desktop_px: f64,
}

impl Breakpoint {
    /// The standard 768px breakpoint.
    pub const DEFAULT: Self = Self {
        min_desktop_px: DEFAULT_BREAKPOINT_PX,
    };

    /// Create a breakpoint at `min_desktop_px`.
    #[must_use]
    pub const fn new(min_desktop_px: f64) -> Self {
        Self { min_desktop_px }
    }

    /// Classify a viewport width.
    #[inline]
    #[must_use]
    pub fn classify(self, width: f64) -> LayoutMode {
        if width < self.min_desktop_px {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Tracks the current layout mode across resize events.
#[derive(Debug, Clone)]
pub struct ViewportTracker {
    breakpoint: Breakpoint,
    width: f64,
    mode: LayoutMode,
}

impl ViewportTracker {
    /// Create a tracker seeded with the initial window width.
    #[must_use]
    pub fn new(breakpoint: Breakpoint, width: f64) -> Self {
        Self {
            breakpoint,
            width,
            mode: breakpoint.classify(width),
        }
    }

    /// Current layout mode.
    #[must_use]
    pub const fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Last reported width.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Record a resize. Returns `true` when the layout mode flipped.
    pub fn on_resize(&mut self, width: f64) -> bool {
        self.width = width;
        let mode = self.breakpoint.classify(width);
        let changed = mode != self.mode;
        if changed {
            crate::debug!(width, from = %self.mode, to = %mode, "layout mode changed");
            self.mode = mode;
        }
        changed
    }
}
