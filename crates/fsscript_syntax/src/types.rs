//! Flag types and literal values attached to tokens.

use std::fmt;

bitflags::bitflags! {
    /// Per-token flags set by the scanner and the stream rewrites.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TokenFlags: u16 {
        const NONE                  = 0;
        /// At least one `'\n'` or `'\r'` was skipped before this token.
        const PRECEDING_LINE_BREAK  = 1 << 0;
        /// A string or template ran into end of input.
        const UNTERMINATED          = 1 << 1;
        /// Inserted by the token stream, not present in the source.
        const SYNTHETIC             = 1 << 2;
        const HEX_SPECIFIER         = 1 << 3;
        const SCIENTIFIC            = 1 << 4;
        /// Literal text between substitutions in template mode.
        const TEMPLATE_TEXT         = 1 << 5;
        /// Numeric literal carried an `l`/`L` suffix.
        const WIDE                  = 1 << 6;

        const NUMERIC_LITERAL_FLAGS = Self::HEX_SPECIFIER.bits()
            | Self::SCIENTIFIC.bits()
            | Self::WIDE.bits();
    }
}

/// Value of a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    /// 32/64-bit integer without a fractional part or negative exponent.
    Integer(i64),
    Float(f64),
    /// Hex literal with an `l`/`L` suffix.
    Wide(i64),
}

impl NumericValue {
    pub fn as_f64(self) -> f64 {
        match self {
            NumericValue::Integer(v) | NumericValue::Wide(v) => v as f64,
            NumericValue::Float(v) => v,
        }
    }

    pub fn as_i64(self) -> Option<i64> {
        match self {
            NumericValue::Integer(v) | NumericValue::Wide(v) => Some(v),
            NumericValue::Float(_) => None,
        }
    }

    pub fn is_integer(self) -> bool {
        !matches!(self, NumericValue::Float(_))
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::Integer(v) => write!(f, "{}", v),
            NumericValue::Float(v) => write!(f, "{}", v),
            NumericValue::Wide(v) => write!(f, "{}L", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_value_accessors() {
        assert_eq!(NumericValue::Integer(7).as_f64(), 7.0);
        assert_eq!(NumericValue::Float(0.5).as_i64(), None);
        assert!(NumericValue::Wide(255).is_integer());
        assert_eq!(NumericValue::Wide(255).to_string(), "255L");
    }

    #[test]
    fn test_token_flags() {
        let flags = TokenFlags::HEX_SPECIFIER | TokenFlags::PRECEDING_LINE_BREAK;
        assert!(flags.intersects(TokenFlags::NUMERIC_LITERAL_FLAGS));
        assert!(!flags.contains(TokenFlags::SYNTHETIC));
        assert_eq!(TokenFlags::default(), TokenFlags::NONE);
    }
}
