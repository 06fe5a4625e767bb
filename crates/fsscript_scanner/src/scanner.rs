//! The fsscript scanner.
//!
//! Converts source text into raw tokens. The scanner is tolerant: malformed
//! numbers, unterminated strings and unterminated comments all degrade to a
//! best-effort token (or to skipped trivia) and a non-fatal diagnostic, never
//! to an error.

use crate::char_codes::*;
use crate::cursor::Cursor;
use crate::token::{Token, TokenValue};
use fsscript_core::text::{LineTable, TextPos, TextRange};
use fsscript_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage};
use fsscript_options::{ScannerOptions, SourceMode};
use fsscript_syntax::{lookup_keyword, NumericValue, SyntaxKind, TokenFlags};

/// Where the number scanner is within a decimal literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    LeftOfPoint,
    RightOfPoint,
    InExponent,
}

/// Template-mode position: literal text, or inside a `${ ... }` substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemplateState {
    Text,
    /// Inside a substitution; the value is the open brace depth.
    Substitution(u32),
}

/// The scanner converts fsscript source text into raw tokens.
pub struct Scanner {
    cursor: Cursor,
    options: ScannerOptions,
    /// Start of the current token (after leading trivia).
    token_start: usize,
    /// Token flags for the current token.
    token_flags: TokenFlags,
    /// Set whenever a line break is skipped; cleared by `take_newline_seen`.
    newline_seen: bool,
    template: TemplateState,
    diagnostics: DiagnosticCollection,
}

impl Scanner {
    /// Create a new scanner with default options.
    pub fn new(text: &str) -> Self {
        Self::with_options(text, ScannerOptions::default())
    }

    pub fn with_options(text: &str, options: ScannerOptions) -> Self {
        tracing::debug!(mode = %options.mode, len = text.len(), "creating scanner");
        Self {
            cursor: Cursor::new(text),
            options,
            token_start: 0,
            token_flags: TokenFlags::NONE,
            newline_seen: false,
            template: TemplateState::Text,
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Line breaks seen so far.
    pub fn lines(&self) -> &LineTable {
        self.cursor.lines()
    }

    /// Whether a line break was skipped since the last call, clearing the flag.
    pub fn take_newline_seen(&mut self) -> bool {
        std::mem::take(&mut self.newline_seen)
    }

    /// Get the accumulated diagnostics.
    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Take the accumulated diagnostics, leaving an empty collection.
    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Scan the next token. At end of input this keeps returning
    /// `EndOfFileToken`.
    pub fn scan(&mut self) -> Token {
        self.token_flags = TokenFlags::NONE;
        loop {
            if self.options.mode == SourceMode::Template && self.template == TemplateState::Text {
                return self.scan_template_text();
            }
            self.skip_trivia();
            self.token_start = self.cursor.pos();
            if let Some(token) = self.scan_token() {
                return token;
            }
        }
    }

    /// Scan one token at the current position, or skip an invalid character
    /// and return `None`.
    fn scan_token(&mut self) -> Option<Token> {
        let Some(ch) = self.cursor.current() else {
            if let TemplateState::Substitution(_) = self.template {
                self.template = TemplateState::Text;
                self.error_at_current(&messages::UNTERMINATED_TEMPLATE_SUBSTITUTION, &[]);
            }
            return Some(self.finish(SyntaxKind::EndOfFileToken, TokenValue::None));
        };

        let kind = match ch {
            '(' => self.single(SyntaxKind::OpenParenToken),
            ')' => self.single(SyntaxKind::CloseParenToken),
            '{' => self.scan_open_brace(),
            '}' => self.scan_close_brace(),
            '[' => self.single(SyntaxKind::OpenBracketToken),
            ']' => self.single(SyntaxKind::CloseBracketToken),
            ';' => self.single(SyntaxKind::SemicolonToken),
            ',' => self.single(SyntaxKind::CommaToken),
            ':' => self.single(SyntaxKind::ColonToken),
            '@' => self.single(SyntaxKind::AtToken),
            '#' => self.single(SyntaxKind::HashToken),
            '^' => self.single(SyntaxKind::CaretToken),
            '+' => self.single(SyntaxKind::PlusToken),
            '-' => self.single(SyntaxKind::MinusToken),
            '*' => self.single(SyntaxKind::AsteriskToken),
            '%' => self.single(SyntaxKind::PercentToken),
            '/' => self.single(SyntaxKind::SlashToken),
            '~' => self.single(SyntaxKind::BarToken),

            '.' => {
                if self.cursor.peek(1).map_or(false, is_digit) {
                    return Some(self.scan_number());
                }
                self.scan_dot()
            }
            '?' => self.scan_question(),
            '<' => self.scan_less_than(),
            '>' => self.scan_greater_than(),
            '=' => self.scan_equals(),
            '!' => self.scan_exclamation(),
            '&' => self.scan_ampersand(),
            '|' => self.scan_bar(),

            DOUBLE_QUOTE => return Some(self.scan_double_quoted_string()),
            SINGLE_QUOTE => return Some(self.scan_single_quoted_string()),
            BACKTICK => return Some(self.scan_template_literal()),

            '0'..='9' => return Some(self.scan_number()),

            DOLLAR_SIGN
                if self.options.mode == SourceMode::Template
                    && self.cursor.peek(1) == Some(OPEN_BRACE) =>
            {
                self.cursor.advance_by(2);
                self.enter_brace();
                SyntaxKind::DollarOpenBraceToken
            }

            _ if is_identifier_start(ch, self.options.unicode_identifiers) => {
                return Some(self.scan_identifier());
            }

            _ => {
                self.cursor.advance();
                let span = self.current_span();
                let text = ch.to_string();
                self.diagnostics.add(Diagnostic::with_span(
                    span,
                    &messages::INVALID_CHARACTER,
                    &[text.as_str()],
                ));
                tracing::trace!(pos = span.pos, character = %ch, "skipped invalid character");
                return None;
            }
        };

        Some(self.finish_with_lexeme(kind))
    }

    /// Skip whitespace and comments, recording line breaks.
    fn skip_trivia(&mut self) {
        while let Some(ch) = self.cursor.current() {
            match ch {
                LINE_FEED | CARRIAGE_RETURN => {
                    self.mark_line_break();
                    self.cursor.advance();
                }
                '/' => match self.cursor.peek(1) {
                    Some('/') => {
                        self.cursor.advance_by(2);
                        self.cursor.skip_to_line_end();
                    }
                    Some('*') => self.skip_block_comment(),
                    _ => return,
                },
                c if is_white_space_single_line(c) => self.cursor.advance(),
                _ => return,
            }
        }
    }

    fn skip_block_comment(&mut self) {
        let start = self.cursor.pos();
        self.cursor.advance_by(2);
        loop {
            match self.cursor.current() {
                None => {
                    let span = TextRange::new(start as TextPos, self.cursor.pos() as TextPos);
                    self.diagnostics
                        .add(Diagnostic::with_span(span, &messages::ASTERISK_SLASH_EXPECTED, &[]));
                    tracing::trace!(pos = start, "unterminated block comment");
                    return;
                }
                Some('*') if self.cursor.peek(1) == Some('/') => {
                    self.cursor.advance_by(2);
                    return;
                }
                Some(c) => {
                    if is_line_break(c) {
                        self.mark_line_break();
                    }
                    self.cursor.advance();
                }
            }
        }
    }

    fn mark_line_break(&mut self) {
        self.newline_seen = true;
        self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
    }

    // ========================================================================
    // Token construction
    // ========================================================================

    fn current_span(&self) -> TextRange {
        TextRange::new(self.token_start as TextPos, self.cursor.pos() as TextPos)
    }

    fn finish(&self, kind: SyntaxKind, value: TokenValue) -> Token {
        let span = self.current_span();
        Token::new(kind, span.pos, span.end)
            .with_value(value)
            .with_flags(self.token_flags)
    }

    /// Finish a token whose value is its source text.
    fn finish_with_lexeme(&self, kind: SyntaxKind) -> Token {
        let lexeme = self.cursor.slice(self.token_start, self.cursor.pos()).to_string();
        self.finish(kind, TokenValue::Text(lexeme))
    }

    fn error_at_current(&mut self, message: &DiagnosticMessage, args: &[&str]) {
        let span = self.current_span();
        self.diagnostics.add(Diagnostic::with_span(span, message, args));
    }

    #[inline]
    fn single(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.cursor.advance();
        kind
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    fn scan_open_brace(&mut self) -> SyntaxKind {
        self.cursor.advance();
        self.enter_brace();
        SyntaxKind::OpenBraceToken
    }

    fn scan_close_brace(&mut self) -> SyntaxKind {
        self.cursor.advance();
        if let TemplateState::Substitution(depth) = self.template {
            self.template = match depth {
                0 | 1 => TemplateState::Text,
                _ => TemplateState::Substitution(depth - 1),
            };
        }
        SyntaxKind::CloseBraceToken
    }

    fn enter_brace(&mut self) {
        if let TemplateState::Substitution(depth) = self.template {
            self.template = TemplateState::Substitution(depth + 1);
        }
    }

    fn scan_dot(&mut self) -> SyntaxKind {
        if self.cursor.peek(1) == Some('.') && self.cursor.peek(2) == Some('.') {
            self.cursor.advance_by(3);
            SyntaxKind::DotDotDotToken
        } else {
            self.cursor.advance();
            SyntaxKind::DotToken
        }
    }

    fn scan_question(&mut self) -> SyntaxKind {
        if self.cursor.peek(1) == Some('.') && !self.cursor.peek(2).map_or(false, is_digit) {
            self.cursor.advance_by(2);
            SyntaxKind::QuestionDotToken
        } else {
            self.cursor.advance();
            SyntaxKind::QuestionToken
        }
    }

    fn scan_less_than(&mut self) -> SyntaxKind {
        match self.cursor.peek(1) {
            Some('>') => {
                self.cursor.advance_by(2);
                SyntaxKind::ExclamationEqualsToken
            }
            Some('=') => {
                self.cursor.advance_by(2);
                SyntaxKind::LessThanEqualsToken
            }
            _ => {
                self.cursor.advance();
                SyntaxKind::LessThanToken
            }
        }
    }

    fn scan_greater_than(&mut self) -> SyntaxKind {
        if self.cursor.peek(1) == Some('=') {
            self.cursor.advance_by(2);
            SyntaxKind::GreaterThanEqualsToken
        } else {
            self.cursor.advance();
            SyntaxKind::GreaterThanToken
        }
    }

    fn scan_equals(&mut self) -> SyntaxKind {
        match self.cursor.peek(1) {
            Some('=') => {
                // `===` means the same as `==`
                let len = if self.cursor.peek(2) == Some('=') { 3 } else { 2 };
                self.cursor.advance_by(len);
                SyntaxKind::EqualsEqualsToken
            }
            Some('>') => {
                self.cursor.advance_by(2);
                SyntaxKind::EqualsGreaterThanToken
            }
            _ => {
                self.cursor.advance();
                SyntaxKind::EqualsToken
            }
        }
    }

    fn scan_exclamation(&mut self) -> SyntaxKind {
        if self.cursor.peek(1) == Some('=') {
            let len = if self.cursor.peek(2) == Some('=') { 3 } else { 2 };
            self.cursor.advance_by(len);
            SyntaxKind::ExclamationEqualsToken
        } else {
            self.cursor.advance();
            SyntaxKind::ExclamationToken
        }
    }

    fn scan_ampersand(&mut self) -> SyntaxKind {
        if self.cursor.peek(1) == Some('&') {
            self.cursor.advance_by(2);
            SyntaxKind::AmpersandAmpersandToken
        } else {
            self.cursor.advance();
            SyntaxKind::AmpersandToken
        }
    }

    fn scan_bar(&mut self) -> SyntaxKind {
        if self.cursor.peek(1) == Some('|') {
            self.cursor.advance_by(2);
            SyntaxKind::BarBarToken
        } else {
            self.cursor.advance();
            SyntaxKind::BarToken
        }
    }

    fn scan_identifier(&mut self) -> Token {
        let unicode = self.options.unicode_identifiers;
        self.cursor.advance();
        while self
            .cursor
            .current()
            .map_or(false, |c| is_identifier_part(c, unicode))
        {
            self.cursor.advance();
        }

        let kind = match lookup_keyword(self.cursor.slice(self.token_start, self.cursor.pos())) {
            Some(SyntaxKind::DefaultKeyword) if self.cursor.current() == Some(':') => {
                self.cursor.advance();
                SyntaxKind::DefaultColonToken
            }
            Some(keyword) => keyword,
            None => SyntaxKind::Identifier,
        };
        self.finish_with_lexeme(kind)
    }

    /// Scan a decimal literal such as `1`, `1.2`, `.1`, `1e2`, `1E-2` or
    /// `1.5e+3`, or a hex literal. A second point or a second exponent ends
    /// the literal; the remainder is scanned as the next token.
    fn scan_number(&mut self) -> Token {
        if self.cursor.current() == Some('0') && matches!(self.cursor.peek(1), Some('x' | 'X')) {
            return self.scan_hex_number();
        }

        let mut state = NumberState::LeftOfPoint;
        let mut digits = String::new();
        let mut fraction_digits: i32 = 0;
        let mut exponent: i32 = 0;
        let mut exponent_digits = 0u32;
        let mut negative_exponent = false;
        let mut has_dot = false;

        while let Some(ch) = self.cursor.current() {
            match (ch, state) {
                ('.', NumberState::LeftOfPoint) => {
                    has_dot = true;
                    state = NumberState::RightOfPoint;
                }
                ('.', _) => break,
                ('e' | 'E', NumberState::InExponent) => break,
                ('e' | 'E', _) => {
                    state = NumberState::InExponent;
                    self.token_flags |= TokenFlags::SCIENTIFIC;
                }
                ('0'..='9', NumberState::InExponent) => {
                    let digit = (ch as u8 - b'0') as i32;
                    exponent = exponent.saturating_mul(10).saturating_add(digit);
                    exponent_digits += 1;
                }
                ('0'..='9', NumberState::RightOfPoint) => {
                    digits.push(ch);
                    fraction_digits += 1;
                }
                ('0'..='9', NumberState::LeftOfPoint) => digits.push(ch),
                ('-', NumberState::InExponent) if exponent_digits == 0 => {
                    negative_exponent = !negative_exponent;
                }
                ('+', NumberState::InExponent) if exponent_digits == 0 => {}
                _ => break,
            }
            self.cursor.advance();
        }

        let exponent = if negative_exponent { -exponent } else { exponent };
        let value = decimal_value(&digits, fraction_digits, exponent, has_dot);
        self.finish(SyntaxKind::NumericLiteral, TokenValue::Number(value))
    }

    fn scan_hex_number(&mut self) -> Token {
        self.cursor.advance_by(2);
        self.token_flags |= TokenFlags::HEX_SPECIFIER;

        // `None` once the value no longer fits in `i64`; `approx` keeps going.
        let mut exact: Option<i64> = Some(0);
        let mut approx = 0f64;
        let mut any_digits = false;
        while let Some(digit) = self.cursor.current().and_then(|c| c.to_digit(16)) {
            exact = exact
                .and_then(|v| v.checked_mul(16))
                .and_then(|v| v.checked_add(i64::from(digit)));
            approx = approx * 16.0 + f64::from(digit);
            any_digits = true;
            self.cursor.advance();
        }
        if !any_digits {
            self.error_at_current(&messages::HEXADECIMAL_DIGIT_EXPECTED, &[]);
        }

        let wide = matches!(self.cursor.current(), Some('l' | 'L'));
        let kind = if wide {
            self.cursor.advance();
            self.token_flags |= TokenFlags::WIDE;
            SyntaxKind::LongLiteral
        } else {
            SyntaxKind::NumericLiteral
        };
        let number = match exact {
            Some(v) if wide => NumericValue::Wide(v),
            Some(v) => NumericValue::Integer(v),
            None => NumericValue::Float(approx),
        };
        self.finish(kind, TokenValue::Number(number))
    }

    /// `"..."` string. A doubled quote `""` stands for one `"`; line breaks
    /// are kept as part of the value.
    fn scan_double_quoted_string(&mut self) -> Token {
        let mut value = String::new();
        self.cursor.advance();
        loop {
            match self.cursor.current() {
                None => return self.unterminated(SyntaxKind::StringLiteral, value),
                Some(DOUBLE_QUOTE) => {
                    self.cursor.advance();
                    if self.cursor.current() != Some(DOUBLE_QUOTE) {
                        break;
                    }
                    value.push(DOUBLE_QUOTE);
                }
                Some(c) => value.push(c),
            }
            self.cursor.advance();
        }
        self.finish(SyntaxKind::StringLiteral, TokenValue::Text(value))
    }

    /// `'...'` string. There are no escapes.
    fn scan_single_quoted_string(&mut self) -> Token {
        let start = self.cursor.pos() + 1;
        self.cursor.advance();
        loop {
            match self.cursor.current() {
                None => {
                    let value = self.cursor.slice(start, self.cursor.pos()).to_string();
                    return self.unterminated(SyntaxKind::StringLiteral, value);
                }
                Some(SINGLE_QUOTE) => break,
                Some(_) => self.cursor.advance(),
            }
        }
        let value = self.cursor.slice(start, self.cursor.pos()).to_string();
        self.cursor.advance();
        self.finish(SyntaxKind::StringLiteral, TokenValue::Text(value))
    }

    /// `` `...` `` literal. The only escape is `` \` ``; the contents are not
    /// interpolated here.
    fn scan_template_literal(&mut self) -> Token {
        let mut value = String::new();
        self.cursor.advance();
        loop {
            match self.cursor.current() {
                None => return self.unterminated(SyntaxKind::TemplateLiteral, value),
                Some(BACKTICK) => {
                    self.cursor.advance();
                    break;
                }
                Some(BACKSLASH) if self.cursor.peek(1) == Some(BACKTICK) => {
                    value.push(BACKTICK);
                    self.cursor.advance_by(2);
                }
                Some(c) => {
                    value.push(c);
                    self.cursor.advance();
                }
            }
        }
        self.finish(SyntaxKind::TemplateLiteral, TokenValue::Text(value))
    }

    fn unterminated(&mut self, kind: SyntaxKind, value: String) -> Token {
        self.token_flags |= TokenFlags::UNTERMINATED;
        let message = if kind == SyntaxKind::TemplateLiteral {
            &messages::UNTERMINATED_TEMPLATE_LITERAL
        } else {
            &messages::UNTERMINATED_STRING_LITERAL
        };
        self.error_at_current(message, &[]);
        tracing::trace!(pos = self.token_start, ?kind, "unterminated literal");
        self.finish(kind, TokenValue::Text(value))
    }

    /// Template mode: everything up to the next `${` (or end of input) is one
    /// text token, possibly empty.
    fn scan_template_text(&mut self) -> Token {
        self.token_start = self.cursor.pos();
        if self.cursor.is_eof() {
            return self.finish(SyntaxKind::EndOfFileToken, TokenValue::None);
        }
        while let Some(ch) = self.cursor.current() {
            if ch == DOLLAR_SIGN && self.cursor.peek(1) == Some(OPEN_BRACE) {
                self.template = TemplateState::Substitution(0);
                break;
            }
            self.cursor.advance();
        }
        self.token_flags |= TokenFlags::TEMPLATE_TEXT;
        self.finish_with_lexeme(SyntaxKind::StringLiteral)
    }
}

/// Value of a decimal literal from its significant digits, the number of
/// those digits right of the point, and the signed exponent.
///
/// Literals without a point and without a negative exponent stay integers
/// while they fit in an `i64`.
fn decimal_value(digits: &str, fraction_digits: i32, exponent: i32, has_dot: bool) -> NumericValue {
    if !has_dot && exponent >= 0 {
        let integer = digits.parse::<i64>().ok().and_then(|mantissa| {
            10i64
                .checked_pow(exponent as u32)
                .and_then(|scale| mantissa.checked_mul(scale))
        });
        if let Some(value) = integer {
            return NumericValue::Integer(value);
        }
    }
    let digits = if digits.is_empty() { "0" } else { digits };
    let scale = exponent.saturating_sub(fraction_digits);
    let value = format!("{}e{}", digits, scale)
        .parse::<f64>()
        .unwrap_or(f64::NAN);
    NumericValue::Float(value)
}
