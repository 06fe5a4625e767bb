//! Token stream: the scanner plus the rewrites the fsscript grammar relies on.
//!
//! The grammar is written for fully delimited input. The stream fills in what
//! authors are allowed to leave out:
//!
//! - a `;` at a line break between two statements;
//! - a `;` before every `export` not already preceded by one;
//! - a `;` after the closing `}` of a function body;
//! - `{ }` around an unbraced arrow-function body;
//! - `( )` around the expression of an index access, so `a[i]` reaches the
//!   parser as `a [ ( i ) ]`.
//!
//! Every rewrite emits one synthetic token next to a real one. The token that
//! has to wait is parked in a single `pending` slot and returned verbatim on
//! the next call, so at most one rewrite is in flight at any time.

use crate::scanner::Scanner;
use crate::token::Token;
use fsscript_core::text::{LineTable, SourceRegion, TextRange};
use fsscript_diagnostics::DiagnosticCollection;
use fsscript_options::ScannerOptions;
use fsscript_syntax::SyntaxKind;

/// A synthetic token to emit next to the token that triggered a rewrite.
#[derive(Debug)]
enum Rewrite {
    /// Emit the synthetic token first; the real token waits in `pending`.
    Before(Token),
    /// Emit the real token first; the synthetic token waits in `pending`.
    After(Token),
}

/// Stack of nesting counters, one frame per open construct.
#[derive(Debug, Default)]
struct CounterStack {
    frames: Vec<i32>,
}

impl CounterStack {
    fn open(&mut self, initial: i32) {
        self.frames.push(initial);
    }

    /// Count an opening delimiter in the innermost frame.
    fn increment(&mut self) {
        if let Some(top) = self.frames.last_mut() {
            *top += 1;
        }
    }

    /// Count a closing delimiter in the innermost frame. Returns the frame's
    /// new count, popping the frame when it reaches zero, or `None` when no
    /// frame is open.
    fn close(&mut self) -> Option<i32> {
        let top = self.frames.last_mut()?;
        *top -= 1;
        let count = *top;
        if count == 0 {
            self.frames.pop();
        }
        Some(count)
    }

    fn depth(&self) -> usize {
        self.frames.len()
    }
}

/// Pull-based token stream over a source string.
pub struct TokenStream {
    scanner: Scanner,
    /// Token deferred by the last rewrite.
    pending: Option<Token>,
    /// Kind of the last token handed out.
    previous: SyntaxKind,
    /// One frame per open `function`, counting its `{ }`.
    function_braces: CounterStack,
    /// One frame per open index access, counting its `[ ]`.
    index_brackets: CounterStack,
    /// Open parentheses in the current unbraced arrow body.
    arrow_depth: i32,
    in_arrow_body: bool,
    finished: bool,
}

impl TokenStream {
    /// Create a token stream with default options.
    pub fn new(text: &str) -> Self {
        Self::with_options(text, ScannerOptions::default())
    }

    pub fn with_options(text: &str, options: ScannerOptions) -> Self {
        Self::from_scanner(Scanner::with_options(text, options))
    }

    pub fn from_scanner(scanner: Scanner) -> Self {
        Self {
            scanner,
            pending: None,
            previous: SyntaxKind::Unknown,
            function_braces: CounterStack::default(),
            index_brackets: CounterStack::default(),
            arrow_depth: 0,
            in_arrow_body: false,
            finished: false,
        }
    }

    /// Line breaks seen so far.
    pub fn lines(&self) -> &LineTable {
        self.scanner.lines()
    }

    /// Resolve a token to a 1-based line/column region.
    pub fn region(&self, token: &Token) -> SourceRegion {
        self.lines().region(token.pos, token.end)
    }

    pub fn region_of(&self, range: TextRange) -> SourceRegion {
        self.lines().region_of(range)
    }

    pub fn diagnostics(&self) -> &DiagnosticCollection {
        self.scanner.diagnostics()
    }

    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        self.scanner.take_diagnostics()
    }

    /// Produce the next token. At end of input this keeps returning
    /// `EndOfFileToken`.
    pub fn next_token(&mut self) -> Token {
        if let Some(token) = self.pending.take() {
            return self.emit(token);
        }

        let token = self.scanner.scan();
        let crossed_line_break = self.scanner.take_newline_seen();
        if matches!(
            token.kind,
            SyntaxKind::SemicolonToken | SyntaxKind::EndOfFileToken
        ) {
            return self.emit(token);
        }

        self.track_nesting(&token);
        let rewrite = self.select_rewrite(&token, crossed_line_break);
        let opens_index = matches!(rewrite, Some(Rewrite::After(_)));
        if token.kind == SyntaxKind::OpenBracketToken && !opens_index {
            // A plain `[` nests inside the innermost index access.
            self.index_brackets.increment();
        }

        match rewrite {
            None => self.emit(token),
            Some(Rewrite::Before(synthetic)) => {
                debug_assert!(self.pending.is_none());
                self.pending = Some(token);
                self.emit(synthetic)
            }
            Some(Rewrite::After(synthetic)) => {
                debug_assert!(self.pending.is_none());
                self.pending = Some(synthetic);
                self.emit(token)
            }
        }
    }

    fn emit(&mut self, token: Token) -> Token {
        self.previous = token.kind;
        token
    }

    /// Counter updates that apply to every scanned token, including one that
    /// is about to be deferred.
    fn track_nesting(&mut self, token: &Token) {
        match token.kind {
            SyntaxKind::FunctionKeyword => self.function_braces.open(0),
            SyntaxKind::OpenBraceToken => self.function_braces.increment(),
            SyntaxKind::OpenParenToken if self.in_arrow_body => self.arrow_depth += 1,
            _ => {}
        }
    }

    /// Pick the rewrite for a freshly scanned token. Earlier rules win.
    fn select_rewrite(&mut self, token: &Token, crossed_line_break: bool) -> Option<Rewrite> {
        let kind = token.kind;

        if crossed_line_break
            && self.previous.can_end_statement()
            && !kind.can_continue_statement()
            && kind.starts_statement()
        {
            return Some(self.before(SyntaxKind::SemicolonToken, token, "automatic semicolon"));
        }

        if kind == SyntaxKind::ExportKeyword && self.previous != SyntaxKind::SemicolonToken {
            return Some(self.before(SyntaxKind::SemicolonToken, token, "export boundary"));
        }

        if kind == SyntaxKind::CloseBraceToken && self.function_braces.close() == Some(0) {
            return Some(self.after(SyntaxKind::SemicolonToken, token, "function body end"));
        }

        if self.previous == SyntaxKind::EqualsGreaterThanToken
            && kind != SyntaxKind::OpenBraceToken
        {
            self.in_arrow_body = true;
            // A deferred `(` is already inside the body.
            self.arrow_depth = if kind == SyntaxKind::OpenParenToken { 2 } else { 1 };
            return Some(self.before(SyntaxKind::OpenBraceToken, token, "arrow body open"));
        }
        if self.in_arrow_body && kind == SyntaxKind::CloseParenToken {
            self.arrow_depth -= 1;
            if self.arrow_depth == 0 {
                self.in_arrow_body = false;
                return Some(self.before(SyntaxKind::CloseBraceToken, token, "arrow body close"));
            }
        }

        if kind == SyntaxKind::OpenBracketToken && self.previous == SyntaxKind::Identifier {
            self.index_brackets.open(1);
            return Some(self.after(SyntaxKind::OpenParenToken, token, "index open"));
        }
        if kind == SyntaxKind::CloseBracketToken && self.index_brackets.close() == Some(0) {
            return Some(self.before(SyntaxKind::CloseParenToken, token, "index close"));
        }

        None
    }

    fn before(&self, kind: SyntaxKind, token: &Token, rule: &'static str) -> Rewrite {
        tracing::trace!(rule, ?kind, pos = token.pos, "insert before");
        Rewrite::Before(Token::synthetic(kind, token.pos))
    }

    fn after(&self, kind: SyntaxKind, token: &Token, rule: &'static str) -> Rewrite {
        tracing::trace!(rule, ?kind, pos = token.end, "insert after");
        Rewrite::After(Token::synthetic(kind, token.end))
    }

    /// Open function bodies and index accesses.
    #[cfg(test)]
    fn open_frames(&self) -> (usize, usize) {
        (self.function_braces.depth(), self.index_brackets.depth())
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    /// Yields every token up to and including the first `EndOfFileToken`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == SyntaxKind::EndOfFileToken {
            self.finished = true;
        }
        Some(token)
    }
}
