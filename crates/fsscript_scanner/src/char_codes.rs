//! Character classes used by the scanner.

use unicode_xid::UnicodeXID;

pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';
pub const DOUBLE_QUOTE: char = '"';
pub const SINGLE_QUOTE: char = '\'';
pub const BACKTICK: char = '`';
pub const BACKSLASH: char = '\\';
pub const DOLLAR_SIGN: char = '$';
pub const OPEN_BRACE: char = '{';

/// Characters that end a line and can trigger semicolon insertion.
#[inline]
pub fn is_line_break(ch: char) -> bool {
    ch == LINE_FEED || ch == CARRIAGE_RETURN
}

/// Whitespace that is skipped without affecting statement boundaries.
#[inline]
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\u{000B}' // vertical tab
            | '\u{000C}' // form feed
            | '\u{00A0}' // no-break space
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}' // BOM
    )
}

#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Identifier start. Non-ASCII characters only qualify when `unicode` is set.
#[inline]
pub fn is_identifier_start(ch: char, unicode: bool) -> bool {
    ch.is_ascii_alphabetic()
        || ch == '_'
        || ch == DOLLAR_SIGN
        || (unicode && !ch.is_ascii() && UnicodeXID::is_xid_start(ch))
}

#[inline]
pub fn is_identifier_part(ch: char, unicode: bool) -> bool {
    ch.is_ascii_alphanumeric()
        || ch == '_'
        || ch == DOLLAR_SIGN
        || (unicode && !ch.is_ascii() && UnicodeXID::is_xid_continue(ch))
}
