//! Specified value parsing.
//!
//! [CSS 2.1 § 4.3 Values](https://www.w3.org/TR/CSS2/syndata.html#values)

use larch_common::warning::warn_once;
use strum_macros::{Display as StrumDisplay, EnumString};

/// A parsed specified value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An identifier such as `auto`, `block`, or `none`.
    Keyword(String),
    /// A length in pixels.
    Length(f32),
}

impl Value {
    /// Parse a raw property value.
    ///
    /// Accepted lengths are `<number>px` and a bare `<number>` (taken as
    /// px). Anything that does not start like a number is a keyword.
    /// Returns `None`, after a one-time warning, for a number with any
    /// other unit.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if !raw.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '.' | '-' | '+')) {
            return Some(Self::Keyword(raw.to_ascii_lowercase()));
        }
        let number = raw.strip_suffix("px").unwrap_or(raw);
        if let Ok(px) = number.parse::<f32>()
            && px.is_finite()
        {
            return Some(Self::Length(px));
        }
        let _ = warn_once("style", &format!("unsupported length '{raw}', only px is supported"));
        None
    }

    /// `auto` keyword.
    #[must_use]
    pub fn auto() -> Self {
        Self::Keyword("auto".to_string())
    }

    /// True for the `auto` keyword.
    #[must_use]
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Keyword(k) if k == "auto")
    }

    /// The length in pixels; keywords count as zero.
    #[must_use]
    pub const fn to_px(&self) -> f32 {
        match self {
            Self::Length(px) => *px,
            Self::Keyword(_) => 0.0,
        }
    }
}

/// [CSS 2.1 § 9.2.4 The 'display' property](https://www.w3.org/TR/CSS2/visuren.html#display-prop)
///
/// The `display` keywords the layout tree builder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Display {
    /// "This value causes an element to generate a block box."
    Block,
    /// "This value causes an element to generate one or more inline boxes."
    Inline,
    /// "This value causes an element to not appear in the formatting
    /// structure."
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lengths() {
        assert_eq!(Value::parse("14px"), Some(Value::Length(14.0)));
        assert_eq!(Value::parse(" 2.5px "), Some(Value::Length(2.5)));
        assert_eq!(Value::parse("-10px"), Some(Value::Length(-10.0)));
        assert_eq!(Value::parse("0"), Some(Value::Length(0.0)));
        assert_eq!(Value::parse("40"), Some(Value::Length(40.0)));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Value::parse("auto"), Some(Value::auto()));
        assert!(Value::parse("AUTO").is_some_and(|v| v.is_auto()));
        assert_eq!(
            Value::parse("block"),
            Some(Value::Keyword("block".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_other_units() {
        assert_eq!(Value::parse("1.5em"), None);
        assert_eq!(Value::parse("50%"), None);
        assert_eq!(Value::parse(""), None);
    }

    #[test]
    fn test_to_px() {
        assert!((Value::Length(3.0).to_px() - 3.0).abs() < f32::EPSILON);
        assert!(Value::auto().to_px().abs() < f32::EPSILON);
    }

    #[test]
    fn test_display_keywords() {
        assert_eq!("block".parse::<Display>(), Ok(Display::Block));
        assert_eq!("INLINE".parse::<Display>(), Ok(Display::Inline));
        assert_eq!("none".parse::<Display>(), Ok(Display::None));
        assert!("flex".parse::<Display>().is_err());
        assert_eq!(Display::Block.to_string(), "block");
    }
}
