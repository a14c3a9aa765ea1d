//! Per-tree layout configuration.

use serde::{Deserialize, Serialize};

/// Knobs shared by every node of a [`crate::LayoutTree`].
///
/// Out-of-range values are clamped when read, never rejected.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Device pixels per layout unit; results snap to `1 / point_scale_factor`.
    /// Zero disables rounding.
    pub point_scale_factor: f32,
    /// Web defaults: `flex-shrink` defaults to 1 and a positive `flex`
    /// shorthand keeps an `auto` basis.
    pub use_web_defaults: bool,
    /// Recompute every flex basis once per layout pass instead of reusing it
    /// while the child stays clean.
    pub web_flex_basis: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            point_scale_factor: 1.0,
            use_web_defaults: false,
            web_flex_basis: false,
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn with_point_scale_factor(mut self, scale: f32) -> Self {
        self.point_scale_factor = scale;
        self
    }

    #[must_use]
    pub const fn with_web_defaults(mut self, enabled: bool) -> Self {
        self.use_web_defaults = enabled;
        self
    }

    #[must_use]
    pub const fn with_web_flex_basis(mut self, enabled: bool) -> Self {
        self.web_flex_basis = enabled;
        self
    }

    /// Scale factor actually used: negative or non-finite values mean no rounding.
    #[inline]
    pub fn scale(&self) -> f32 {
        if self.point_scale_factor.is_finite() && self.point_scale_factor > 0.0 {
            self.point_scale_factor
        } else {
            0.0
        }
    }
}
