//! Reserved-word table.
//!
//! Keywords are matched case-insensitively: `IF`, `If` and `if` all resolve to
//! [`SyntaxKind::IfKeyword`]. The table is keyed by the uppercase spelling.

use crate::SyntaxKind;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Length of the longest reserved word (`_EVALUATOR`).
pub const MAX_KEYWORD_LEN: usize = 10;

static KEYWORDS: Lazy<FxHashMap<&'static str, SyntaxKind>> = Lazy::new(|| {
    let entries: [(&'static str, SyntaxKind); 37] = [
        ("NOT", SyntaxKind::NotKeyword),
        ("LIKE", SyntaxKind::LikeKeyword),
        ("IN", SyntaxKind::InKeyword),
        ("NULL", SyntaxKind::NullKeyword),
        ("FUNCTION", SyntaxKind::FunctionKeyword),
        ("VAR", SyntaxKind::VarKeyword),
        ("LET", SyntaxKind::LetKeyword),
        ("NEW", SyntaxKind::NewKeyword),
        ("IF", SyntaxKind::IfKeyword),
        ("ELSE", SyntaxKind::ElseKeyword),
        ("RETURN", SyntaxKind::ReturnKeyword),
        ("TRY", SyntaxKind::TryKeyword),
        ("CATCH", SyntaxKind::CatchKeyword),
        ("FINALLY", SyntaxKind::FinallyKeyword),
        ("THROW", SyntaxKind::ThrowKeyword),
        ("FOR", SyntaxKind::ForKeyword),
        ("TRUE", SyntaxKind::TrueKeyword),
        ("FALSE", SyntaxKind::FalseKeyword),
        ("THIS", SyntaxKind::ThisKeyword),
        ("REQUEST", SyntaxKind::RequestKeyword),
        ("_EE", SyntaxKind::EeKeyword),
        ("_EVALUATOR", SyntaxKind::EvaluatorKeyword),
        ("OR", SyntaxKind::OrKeyword),
        ("WHILE", SyntaxKind::WhileKeyword),
        ("BREAK", SyntaxKind::BreakKeyword),
        ("IMPORT", SyntaxKind::ImportKeyword),
        ("CIMPORT", SyntaxKind::CImportKeyword),
        ("EXPORT", SyntaxKind::ExportKeyword),
        ("DEFAULT", SyntaxKind::DefaultKeyword),
        ("FROM", SyntaxKind::FromKeyword),
        ("CONST", SyntaxKind::ConstKeyword),
        ("AS", SyntaxKind::AsKeyword),
        ("CONTINUE", SyntaxKind::ContinueKeyword),
        ("CASE", SyntaxKind::CaseKeyword),
        ("SWITCH", SyntaxKind::SwitchKeyword),
        ("DELETE", SyntaxKind::DeleteKeyword),
        ("OF", SyntaxKind::OfKeyword),
    ];
    let mut map = FxHashMap::default();
    map.reserve(entries.len());
    map.extend(entries);
    map
});

/// Look up a lexeme in the reserved-word table.
///
/// Returns `None` for anything that is not a keyword, in which case the
/// lexeme is an identifier.
pub fn lookup_keyword(lexeme: &str) -> Option<SyntaxKind> {
    if lexeme.is_empty() || lexeme.len() > MAX_KEYWORD_LEN {
        return None;
    }
    let upper = lexeme.to_ascii_uppercase();
    KEYWORDS.get(upper.as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup_keyword("if"), Some(SyntaxKind::IfKeyword));
        assert_eq!(lookup_keyword("IF"), Some(SyntaxKind::IfKeyword));
        assert_eq!(lookup_keyword("If"), Some(SyntaxKind::IfKeyword));
        assert_eq!(lookup_keyword("_evaluator"), Some(SyntaxKind::EvaluatorKeyword));
        assert_eq!(lookup_keyword("cImport"), Some(SyntaxKind::CImportKeyword));
    }

    #[test]
    fn test_lookup_rejects_identifiers() {
        assert_eq!(lookup_keyword("iff"), None);
        assert_eq!(lookup_keyword(""), None);
        assert_eq!(lookup_keyword("functionally"), None);
        assert_eq!(lookup_keyword("undefined"), None);
    }

    #[test]
    fn test_every_entry_round_trips_through_keyword_text() {
        for (text, kind) in KEYWORDS.iter() {
            assert!(text.len() <= MAX_KEYWORD_LEN);
            assert!(kind.is_keyword());
            assert_eq!(kind.keyword_text().map(str::to_ascii_uppercase).as_deref(), Some(*text));
        }
        assert_eq!(KEYWORDS.len(), 37);
    }
}
