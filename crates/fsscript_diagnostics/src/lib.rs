//! fsscript_diagnostics: Non-fatal diagnostics recorded by the fsscript scanner.
//!
//! The scanner never fails on malformed input. Instead it degrades to a
//! best-effort token and records a diagnostic here, so tools can report the
//! problem without the token stream being interrupted. Diagnostics carry a
//! byte range; line and column are resolved later through a [`LineTable`].

use fsscript_core::text::{LineTable, TextRange};
use std::fmt;

/// A diagnostic message template with a code. Every scanner diagnostic is a
/// warning: the token stream always continues past it.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1002).
    pub code: u32,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The source range this diagnostic refers to, if any.
    pub span: Option<TextRange>,
    pub message_text: String,
    pub code: u32,
}

impl Diagnostic {
    /// Create a new diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            span: None,
            message_text: format_message(message.message, args),
            code: message.code,
        }
    }

    /// Create a new diagnostic attached to a source range.
    pub fn with_span(span: TextRange, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            span: Some(span),
            ..Self::new(message, args)
        }
    }

    /// Render with a 1-based line/column prefix resolved through `lines`.
    pub fn render(&self, lines: &LineTable) -> String {
        match self.span {
            Some(span) => format!("{}: {}", lines.region_of(span), self),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning FS{}: {}", self.code, self.message_text)
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A collection of diagnostics accumulated during a scan.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, $msg:expr) => {
            DiagnosticMessage { code: $code, message: $msg }
        };
    }

    // ========================================================================
    // Scanner notes (1000-1099)
    // ========================================================================
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage =
        diag!(1002, "Unterminated string literal.");
    pub const ASTERISK_SLASH_EXPECTED: DiagnosticMessage =
        diag!(1010, "'*/' expected.");
    pub const INVALID_CHARACTER: DiagnosticMessage =
        diag!(1127, "Invalid character '{0}'.");
    pub const UNTERMINATED_TEMPLATE_LITERAL: DiagnosticMessage =
        diag!(1160, "Unterminated template literal.");
    pub const HEXADECIMAL_DIGIT_EXPECTED: DiagnosticMessage =
        diag!(1125, "Hexadecimal digit expected.");
    pub const UNTERMINATED_TEMPLATE_SUBSTITUTION: DiagnosticMessage =
        diag!(1161, "Unterminated '${' substitution.");
}
