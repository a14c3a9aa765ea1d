//! Baseline alignment within a flex line.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#baseline-participation>

/// Tallest ascent and descent among a line's baseline-aligned items.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BaselineAccumulator {
    pub max_ascent: f32,
    pub max_descent: f32,
}

impl BaselineAccumulator {
    /// Record an item whose baseline sits `ascent` below its outer top edge
    /// and whose outer box extends `descent` below the baseline.
    #[inline]
    pub fn push(&mut self, ascent: f32, descent: f32) {
        self.max_ascent = self.max_ascent.max(ascent);
        self.max_descent = self.max_descent.max(descent);
    }

    /// Cross size needed to fit every recorded item on a shared baseline.
    #[inline]
    pub fn extent(&self) -> f32 {
        self.max_ascent + self.max_descent
    }
}
