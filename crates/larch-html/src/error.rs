use thiserror::Error;

/// A structural violation in the markup.
///
/// Every variant records `position`, the byte offset into the input at
/// which the violation was detected. Variants that expected a particular
/// character record what was `found` instead (`None` at end of input).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// An element was expected to start with `<`.
    #[error("expected '<' at byte {position}, found {}", describe(.found.as_ref()))]
    TagOpenExpected {
        /// Byte offset of the violation.
        position: usize,
        /// The character actually present.
        found: Option<char>,
    },

    /// A tag was expected to end with `>`.
    #[error("expected '>' at byte {position}, found {}", describe(.found.as_ref()))]
    TagCloseExpected {
        /// Byte offset of the violation.
        position: usize,
        /// The character actually present.
        found: Option<char>,
    },

    /// A closing tag was expected to continue with `/` after `<`.
    #[error("expected '/' at byte {position}, found {}", describe(.found.as_ref()))]
    SlashExpected {
        /// Byte offset of the violation.
        position: usize,
        /// The character actually present.
        found: Option<char>,
    },

    /// A tag opener was not followed by an alphanumeric tag name.
    #[error("expected a tag name at byte {position}, found {}", describe(.found.as_ref()))]
    TagNameExpected {
        /// Byte offset of the violation.
        position: usize,
        /// The character actually present.
        found: Option<char>,
    },

    /// The closing tag's name differs from the open tag's name.
    #[error("closing tag </{found}> at byte {position} does not match <{expected}>")]
    TagNameMismatch {
        /// Byte offset of the closing tag's `<`.
        position: usize,
        /// The open tag's name.
        expected: String,
        /// The closing tag's name.
        found: String,
    },

    /// A closing tag appeared at the top level with no element open.
    #[error("closing tag at byte {position} has no matching open tag")]
    UnmatchedClosingTag {
        /// Byte offset of the closing tag's `<`.
        position: usize,
    },

    /// Inside a start tag, something other than an attribute name or `>`.
    #[error(
        "expected an attribute name or '>' at byte {position}, found {}",
        describe(.found.as_ref())
    )]
    AttributeNameExpected {
        /// Byte offset of the violation.
        position: usize,
        /// The character actually present.
        found: Option<char>,
    },

    /// An attribute name was not followed by `=`.
    #[error(
        "expected '=' after attribute name at byte {position}, found {}",
        describe(.found.as_ref())
    )]
    AttributeEqualsExpected {
        /// Byte offset of the violation.
        position: usize,
        /// The character actually present.
        found: Option<char>,
    },

    /// An attribute value did not start with `"` or `'`.
    #[error("expected an opening quote at byte {position}, found {}", describe(.found.as_ref()))]
    QuoteExpected {
        /// Byte offset of the violation.
        position: usize,
        /// The character actually present.
        found: Option<char>,
    },

    /// An attribute value was not closed by its opening quote character.
    #[error(
        "expected closing {expected:?} at byte {position}, found {}",
        describe(.found.as_ref())
    )]
    QuoteMismatch {
        /// Byte offset of the violation.
        position: usize,
        /// The opening quote character.
        expected: char,
        /// The character actually present.
        found: Option<char>,
    },
}

impl SyntaxError {
    /// Byte offset into the input at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::TagOpenExpected { position, .. }
            | Self::TagCloseExpected { position, .. }
            | Self::SlashExpected { position, .. }
            | Self::TagNameExpected { position, .. }
            | Self::TagNameMismatch { position, .. }
            | Self::UnmatchedClosingTag { position }
            | Self::AttributeNameExpected { position, .. }
            | Self::AttributeEqualsExpected { position, .. }
            | Self::QuoteExpected { position, .. }
            | Self::QuoteMismatch { position, .. } => *position,
        }
    }
}

fn describe(found: Option<&char>) -> String {
    found.map_or_else(|| "end of input".to_string(), |c| format!("{c:?}"))
}
