//! Forward-only character cursor with a lookahead buffer.
//!
//! The cursor decodes one character at a time from the source. Characters
//! fetched by [`Cursor::peek`] wait in a FIFO ring buffer until
//! [`Cursor::advance`] consumes them, so every character is decoded once.
//! Every `'\n'` that becomes the current character is recorded in the
//! cursor's [`LineTable`].

use fsscript_core::text::{LineTable, TextPos};
use std::collections::VecDeque;

pub struct Cursor {
    text: Box<str>,
    /// Byte offset of `current`.
    pos: usize,
    /// The character at `pos`, `None` at end of input.
    current: Option<char>,
    /// Characters after `current` that have been decoded but not consumed.
    lookahead: VecDeque<char>,
    /// Byte offset of the next character to decode.
    read_pos: usize,
    lines: LineTable,
}

impl Cursor {
    pub fn new(text: &str) -> Self {
        let mut cursor = Self {
            text: text.into(),
            pos: 0,
            current: None,
            lookahead: VecDeque::with_capacity(4),
            read_pos: 0,
            lines: LineTable::new(),
        };
        cursor.current = cursor.decode();
        cursor.note_line_break();
        cursor
    }

    /// The character under the cursor.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Byte offset of the character under the cursor.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// The source between two byte offsets previously reported by [`pos`](Self::pos).
    pub fn slice(&self, start: usize, end: usize) -> &str {
        &self.text[start..end]
    }

    pub fn lines(&self) -> &LineTable {
        &self.lines
    }

    /// Look `n` characters past the current one without consuming anything.
    /// `peek(0)` is the current character.
    pub fn peek(&mut self, n: usize) -> Option<char> {
        if n == 0 {
            return self.current;
        }
        while self.lookahead.len() < n {
            let ch = self.decode()?;
            self.lookahead.push_back(ch);
        }
        self.lookahead.get(n - 1).copied()
    }

    /// Consume the current character.
    pub fn advance(&mut self) {
        let Some(ch) = self.current else {
            return;
        };
        self.pos += ch.len_utf8();
        self.current = match self.lookahead.pop_front() {
            Some(next) => Some(next),
            None => self.decode(),
        };
        self.note_line_break();
    }

    /// Consume `n` characters.
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Advance until the current character is `'\n'`, `'\r'` or end of input.
    pub fn skip_to_line_end(&mut self) {
        if !self.lookahead.is_empty() {
            while !matches!(self.current, None | Some('\n') | Some('\r')) {
                self.advance();
            }
            return;
        }
        if matches!(self.current, None | Some('\n') | Some('\r')) {
            return;
        }
        // Nothing is buffered, so `read_pos` sits right after `current`.
        let rest = &self.text.as_bytes()[self.read_pos..];
        match memchr::memchr2(b'\n', b'\r', rest) {
            Some(index) => {
                self.pos = self.read_pos + index;
                self.read_pos = self.pos;
                self.current = self.decode();
                self.note_line_break();
            }
            None => {
                self.pos = self.text.len();
                self.read_pos = self.pos;
                self.current = None;
            }
        }
    }

    fn decode(&mut self) -> Option<char> {
        let ch = self.text[self.read_pos..].chars().next()?;
        self.read_pos += ch.len_utf8();
        Some(ch)
    }

    fn note_line_break(&mut self) {
        if self.current == Some('\n') {
            self.lines.push(self.pos as TextPos);
        }
    }
}
