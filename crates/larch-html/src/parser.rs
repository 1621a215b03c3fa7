use larch_dom::{AttributesMap, Node};

use crate::error::SyntaxError;

/// Recursive-descent parser state: the input and a byte cursor into it.
///
/// The cursor only moves forward. Reads at or past the end of the input
/// yield `None`, which every character predicate rejects, so no loop can
/// run past the end.
pub struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl<'a> Parser<'a> {
    /// Create a parser positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset of the cursor.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// True once all input is consumed.
    #[must_use]
    pub const fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Read the current character without consuming it.
    fn peek(&self) -> Option<char> {
        self.input.get(self.pos..)?.chars().next()
    }

    /// Do the next characters start with the given string?
    fn starts_with(&self, prefix: &str) -> bool {
        self.input
            .get(self.pos..)
            .is_some_and(|rest| rest.starts_with(prefix))
    }

    /// Consume and return the current character.
    fn consume(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume characters while `test` holds and return them as a slice of
    /// the input.
    fn consume_while(&mut self, test: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&test) {
            let _ = self.consume();
        }
        &self.input[start..self.pos]
    }

    /// Consume and discard zero or more whitespace characters.
    fn consume_whitespace(&mut self) {
        let _ = self.consume_while(char::is_whitespace);
    }

    /// Consume one character, failing with `error` unless it is `expected`.
    fn expect(
        &mut self,
        expected: char,
        error: fn(usize, Option<char>) -> SyntaxError,
    ) -> Result<(), SyntaxError> {
        let position = self.pos;
        match self.consume() {
            Some(c) if c == expected => Ok(()),
            found => Err(error(position, found)),
        }
    }

    /// Parse a tag or attribute name: ASCII letters and digits only.
    fn parse_name(&mut self) -> &'a str {
        self.consume_while(|c| c.is_ascii_alphanumeric())
    }
}

// =============================================================================
// Node Parsing
// =============================================================================

impl Parser<'_> {
    /// Parse a sequence of sibling nodes.
    ///
    /// Whitespace between siblings is skipped. Stops at end of input or
    /// when the next characters open a closing tag (`</`), leaving the
    /// cursor on the `<`.
    ///
    /// # Errors
    ///
    /// Propagates the first [`SyntaxError`] from any sibling.
    pub fn parse_nodes(&mut self) -> Result<Vec<Node>, SyntaxError> {
        let mut nodes = Vec::new();
        loop {
            self.consume_whitespace();
            if self.eof() || self.starts_with("</") {
                break;
            }
            nodes.push(self.parse_node()?);
        }
        Ok(nodes)
    }

    /// Parse a single node: an element if the next character is `<`,
    /// otherwise a text run.
    fn parse_node(&mut self) -> Result<Node, SyntaxError> {
        if self.peek() == Some('<') {
            self.parse_element()
        } else {
            Ok(self.parse_text())
        }
    }

    /// Parse a text node: everything up to, not including, the next `<`.
    fn parse_text(&mut self) -> Node {
        Node::text(self.consume_while(|c| c != '<'))
    }

    /// Parse a single element, including its open tag, contents, and
    /// closing tag.
    fn parse_element(&mut self) -> Result<Node, SyntaxError> {
        // Opening tag.
        self.expect('<', |position, found| SyntaxError::TagOpenExpected {
            position,
            found,
        })?;
        let tag_name = self.parse_name();
        if tag_name.is_empty() {
            return Err(SyntaxError::TagNameExpected {
                position: self.pos,
                found: self.peek(),
            });
        }
        let attrs = self.parse_attributes()?;
        self.expect('>', |position, found| SyntaxError::TagCloseExpected {
            position,
            found,
        })?;

        log::trace!(target: "html", "<{tag_name}> with {} attribute(s)", attrs.len());

        // Contents.
        let children = self.parse_nodes()?;

        // Closing tag.
        let close_start = self.pos;
        self.expect('<', |position, found| SyntaxError::TagOpenExpected {
            position,
            found,
        })?;
        self.expect('/', |position, found| SyntaxError::SlashExpected {
            position,
            found,
        })?;
        let close_name = self.parse_name();
        if close_name != tag_name {
            return Err(SyntaxError::TagNameMismatch {
                position: close_start,
                expected: tag_name.to_string(),
                found: close_name.to_string(),
            });
        }
        self.expect('>', |position, found| SyntaxError::TagCloseExpected {
            position,
            found,
        })?;

        Ok(Node::element(tag_name, attrs, children))
    }

    /// Parse whitespace-separated `name="value"` pairs up to (not
    /// including) the `>` that ends the start tag.
    ///
    /// Every iteration either consumes an attribute or fails, so the loop
    /// needs no iteration cap. A repeated name keeps its last value.
    fn parse_attributes(&mut self) -> Result<AttributesMap, SyntaxError> {
        let mut attributes = AttributesMap::new();
        loop {
            self.consume_whitespace();
            if self.peek() == Some('>') {
                break;
            }
            let (name, value) = self.parse_attr()?;
            let _ = attributes.insert(name, value);
        }
        Ok(attributes)
    }

    /// Parse a single `name="value"` pair.
    fn parse_attr(&mut self) -> Result<(String, String), SyntaxError> {
        let name = self.parse_name();
        if name.is_empty() {
            return Err(SyntaxError::AttributeNameExpected {
                position: self.pos,
                found: self.peek(),
            });
        }
        self.expect('=', |position, found| {
            SyntaxError::AttributeEqualsExpected { position, found }
        })?;
        let value = self.parse_attr_value()?;
        Ok((name.to_string(), value.to_string()))
    }

    /// Parse a value quoted with `"` or `'`; the closing quote must match
    /// the opening one.
    fn parse_attr_value(&mut self) -> Result<&str, SyntaxError> {
        let position = self.pos;
        let open_quote = match self.consume() {
            Some(quote @ ('"' | '\'')) => quote,
            found => return Err(SyntaxError::QuoteExpected { position, found }),
        };
        let value = self.consume_while(|c| c != open_quote);
        let position = self.pos;
        match self.consume() {
            Some(c) if c == open_quote => Ok(value),
            found => Err(SyntaxError::QuoteMismatch {
                position,
                expected: open_quote,
                found,
            }),
        }
    }
}
