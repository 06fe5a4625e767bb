//! Tokens produced by the scanner and the token stream.

use fsscript_core::text::{TextPos, TextRange};
use fsscript_syntax::{NumericValue, SyntaxKind, TokenFlags};

/// Decoded payload of a token.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TokenValue {
    #[default]
    None,
    /// Identifier, keyword or operator lexeme, or decoded string contents.
    Text(String),
    Number(NumericValue),
}

/// A scanned token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: SyntaxKind,
    /// Start offset in the source text.
    pub pos: TextPos,
    /// End offset in the source text (exclusive).
    pub end: TextPos,
    pub value: TokenValue,
    pub flags: TokenFlags,
}

impl Token {
    pub fn new(kind: SyntaxKind, pos: TextPos, end: TextPos) -> Self {
        Self {
            kind,
            pos,
            end,
            value: TokenValue::None,
            flags: TokenFlags::NONE,
        }
    }

    /// A zero-width token that does not appear in the source.
    pub fn synthetic(kind: SyntaxKind, at: TextPos) -> Self {
        Self::new(kind, at, at).with_flags(TokenFlags::SYNTHETIC)
    }

    pub fn with_value(mut self, value: TokenValue) -> Self {
        self.value = value;
        self
    }

    pub fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Text payload, if any.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Numeric payload, if any.
    pub fn number(&self) -> Option<NumericValue> {
        match self.value {
            TokenValue::Number(value) => Some(value),
            _ => None,
        }
    }

    pub fn range(&self) -> TextRange {
        TextRange::new(self.pos, self.end)
    }

    /// The length of this token in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.pos
    }

    /// Whether this token has zero length.
    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    pub fn is_synthetic(&self) -> bool {
        self.flags.contains(TokenFlags::SYNTHETIC)
    }

    pub fn is_unterminated(&self) -> bool {
        self.flags.contains(TokenFlags::UNTERMINATED)
    }

    /// Whether there was a line break before this token.
    pub fn has_preceding_line_break(&self) -> bool {
        self.flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }
}
