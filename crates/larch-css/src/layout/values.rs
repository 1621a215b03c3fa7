//! Auto-or-length values used while resolving widths and margins.

use larch_common::warning::warn_once;

use crate::style::Value;

/// [§ 4.4 Automatic values](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
///
/// "Some properties can take the keyword 'auto' as a value. This keyword
/// allows the user agent to compute the value based on other properties."
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AutoOr {
    /// The value is 'auto' and must be resolved during layout.
    Auto,
    /// The value is a specific length in pixels.
    Length(f32),
}

impl AutoOr {
    /// Interpret a specified value. Keywords other than `auto` are not
    /// understood here and fall back to `initial`.
    #[must_use]
    pub fn from_value(value: &Value, property: &str, initial: Self) -> Self {
        match value {
            Value::Length(px) => Self::Length(*px),
            v if v.is_auto() => Self::Auto,
            Value::Keyword(keyword) => {
                let _ = warn_once(
                    "layout",
                    &format!("unsupported keyword '{keyword}' for {property}"),
                );
                initial
            }
        }
    }

    /// Check if the value is 'auto'.
    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Get the length value, or a default if 'auto'.
    #[must_use]
    pub const fn to_px_or(self, default: f32) -> f32 {
        match self {
            Self::Length(v) => v,
            Self::Auto => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value() {
        assert_eq!(
            AutoOr::from_value(&Value::Length(5.0), "width", AutoOr::Auto),
            AutoOr::Length(5.0)
        );
        assert_eq!(
            AutoOr::from_value(&Value::auto(), "margin-left", AutoOr::Length(0.0)),
            AutoOr::Auto
        );
        assert_eq!(
            AutoOr::from_value(
                &Value::Keyword("inherit".to_string()),
                "margin-left",
                AutoOr::Length(0.0)
            ),
            AutoOr::Length(0.0)
        );
    }

    #[test]
    fn test_to_px_or() {
        assert!((AutoOr::Auto.to_px_or(7.0) - 7.0).abs() < f32::EPSILON);
        assert!((AutoOr::Length(3.0).to_px_or(7.0) - 3.0).abs() < f32::EPSILON);
    }
}
