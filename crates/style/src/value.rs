//! Length values carried by style properties.
//! Spec: <https://www.w3.org/TR/css-values-4/#lengths>

use core::fmt;

use serde::{Deserialize, Serialize};

/// A style length: exactly one of undefined, auto, an absolute point value or a
/// percentage of the reference length.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "kebab-case")]
pub enum Value {
    #[default]
    Undefined,
    Auto,
    Point(f32),
    Percent(f32),
}

impl Value {
    /// Zero points.
    pub const ZERO: Self = Self::Point(0.0);

    /// Absolute length in layout units. A NaN point value is stored as `Undefined`.
    #[inline]
    pub const fn points(value: f32) -> Self {
        if value.is_nan() {
            Self::Undefined
        } else {
            Self::Point(value)
        }
    }

    /// Percentage of the reference length. A NaN percentage is stored as `Undefined`.
    #[inline]
    pub const fn percent(value: f32) -> Self {
        if value.is_nan() {
            Self::Undefined
        } else {
            Self::Percent(value)
        }
    }

    #[inline]
    pub const fn is_undefined(self) -> bool {
        matches!(self, Self::Undefined)
    }

    #[inline]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// True for point and percent values.
    #[inline]
    pub const fn is_length(self) -> bool {
        matches!(self, Self::Point(_) | Self::Percent(_))
    }

    /// Resolve against a reference length.
    ///
    /// Percentages of an undefined (NaN) reference are undefined, as are `auto`
    /// and `undefined` themselves.
    #[inline]
    pub fn resolve(self, reference: f32) -> Option<f32> {
        match self {
            Self::Point(points) => Some(points),
            Self::Percent(pct) => {
                let resolved = pct * reference / 100.0;
                (!resolved.is_nan()).then_some(resolved)
            }
            Self::Undefined | Self::Auto => None,
        }
    }

    /// Resolve a margin: `auto` margins take no space until free space is distributed.
    #[inline]
    pub fn resolve_margin(self, reference: f32) -> f32 {
        if self.is_auto() {
            return 0.0;
        }
        self.resolve(reference).unwrap_or(0.0)
    }

    /// Value equality with the engine's float tolerance.
    pub fn approx_eq(self, other: Self) -> bool {
        match (self, other) {
            (Self::Point(left), Self::Point(right))
            | (Self::Percent(left), Self::Percent(right)) => (left - right).abs() < 0.0001,
            (Self::Undefined, Self::Undefined) | (Self::Auto, Self::Auto) => true,
            _ => false,
        }
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Self::points(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Auto => formatter.write_str("auto"),
            Self::Point(points) => write!(formatter, "{points}px"),
            Self::Percent(pct) => write!(formatter, "{pct}%"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if percent resolution ignores an undefined reference.
    fn percent_of_undefined_reference_is_undefined() {
        assert_eq!(Value::percent(50.0).resolve(f32::NAN), None);
        assert_eq!(Value::percent(50.0).resolve(200.0), Some(100.0));
        assert_eq!(Value::points(12.0).resolve(f32::NAN), Some(12.0));
        assert_eq!(Value::Auto.resolve(100.0), None);
    }

    #[test]
    /// # Panics
    /// Panics if NaN inputs are stored as lengths.
    fn nan_inputs_become_undefined() {
        assert!(Value::points(f32::NAN).is_undefined());
        assert!(Value::percent(f32::NAN).is_undefined());
    }

    #[test]
    /// # Panics
    /// Panics if auto margins resolve to anything but zero.
    fn auto_margin_resolves_to_zero() {
        assert!(Value::Auto.resolve_margin(300.0).abs() < 0.001);
        assert!((Value::percent(10.0).resolve_margin(300.0) - 30.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if the tagged serde form changes.
    fn serializes_with_unit_tag() {
        let json = serde_json::to_string(&Value::Percent(25.0)).unwrap_or_default();
        assert_eq!(json, r#"{"unit":"percent","value":25.0}"#);
    }
}
