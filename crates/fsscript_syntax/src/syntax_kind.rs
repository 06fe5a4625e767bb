//! SyntaxKind enum - every token kind the fsscript scanner can produce.
//!
//! Besides the kinds themselves this module holds the three token classes the
//! semicolon-insertion rewrite is driven by: tokens that can end a statement,
//! tokens that continue one, and tokens that start a new one.

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    // ========================================================================
    // Tokens
    // ========================================================================
    Unknown = 0,
    EndOfFileToken = 1,

    // Literals
    NumericLiteral = 2,
    LongLiteral = 3,
    StringLiteral = 4,
    TemplateLiteral = 5,

    // Identifiers
    Identifier = 6,

    // Punctuation
    OpenBraceToken = 7,
    CloseBraceToken = 8,
    OpenParenToken = 9,
    CloseParenToken = 10,
    OpenBracketToken = 11,
    CloseBracketToken = 12,
    DotToken = 13,
    DotDotDotToken = 14,
    SemicolonToken = 15,
    CommaToken = 16,
    QuestionDotToken = 17,
    LessThanToken = 18,
    GreaterThanToken = 19,
    LessThanEqualsToken = 20,
    GreaterThanEqualsToken = 21,
    EqualsEqualsToken = 22,
    ExclamationEqualsToken = 23,
    EqualsGreaterThanToken = 24,
    PlusToken = 25,
    MinusToken = 26,
    AsteriskToken = 27,
    SlashToken = 28,
    PercentToken = 29,
    AmpersandToken = 30,
    BarToken = 31,
    CaretToken = 32,
    ExclamationToken = 33,
    AmpersandAmpersandToken = 34,
    BarBarToken = 35,
    QuestionToken = 36,
    ColonToken = 37,
    AtToken = 38,
    HashToken = 39,
    EqualsToken = 40,
    DollarOpenBraceToken = 41,
    DefaultColonToken = 42,

    // Keywords
    AsKeyword = 43,
    BreakKeyword = 44,
    CaseKeyword = 45,
    CatchKeyword = 46,
    CImportKeyword = 47,
    ConstKeyword = 48,
    ContinueKeyword = 49,
    DefaultKeyword = 50,
    DeleteKeyword = 51,
    EeKeyword = 52,
    ElseKeyword = 53,
    EvaluatorKeyword = 54,
    ExportKeyword = 55,
    FalseKeyword = 56,
    FinallyKeyword = 57,
    ForKeyword = 58,
    FromKeyword = 59,
    FunctionKeyword = 60,
    IfKeyword = 61,
    ImportKeyword = 62,
    InKeyword = 63,
    LetKeyword = 64,
    LikeKeyword = 65,
    NewKeyword = 66,
    NotKeyword = 67,
    NullKeyword = 68,
    OfKeyword = 69,
    OrKeyword = 70,
    RequestKeyword = 71,
    ReturnKeyword = 72,
    SwitchKeyword = 73,
    ThisKeyword = 74,
    ThrowKeyword = 75,
    TrueKeyword = 76,
    TryKeyword = 77,
    VarKeyword = 78,
    WhileKeyword = 79,
}

// Marker constants for SyntaxKind ranges.
impl SyntaxKind {
    pub const FIRST_LITERAL_TOKEN: SyntaxKind = SyntaxKind::NumericLiteral;
    pub const LAST_LITERAL_TOKEN: SyntaxKind = SyntaxKind::TemplateLiteral;
    pub const FIRST_PUNCTUATION: SyntaxKind = SyntaxKind::OpenBraceToken;
    pub const LAST_PUNCTUATION: SyntaxKind = SyntaxKind::DefaultColonToken;
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::AsKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::WhileKeyword;
}

impl SyntaxKind {
    /// Whether this kind represents a keyword.
    #[inline]
    pub fn is_keyword(self) -> bool {
        let v = self as u16;
        v >= SyntaxKind::FIRST_KEYWORD as u16 && v <= SyntaxKind::LAST_KEYWORD as u16
    }

    /// Whether this kind represents a punctuation token.
    #[inline]
    pub fn is_punctuation(self) -> bool {
        let v = self as u16;
        v >= SyntaxKind::FIRST_PUNCTUATION as u16 && v <= SyntaxKind::LAST_PUNCTUATION as u16
    }

    /// Whether this kind represents a literal token.
    #[inline]
    pub fn is_literal(self) -> bool {
        let v = self as u16;
        v >= SyntaxKind::FIRST_LITERAL_TOKEN as u16 && v <= SyntaxKind::LAST_LITERAL_TOKEN as u16
    }

    /// Whether a statement may end on a token of this kind.
    pub fn can_end_statement(self) -> bool {
        self.is_literal()
            || matches!(
                self,
                SyntaxKind::Identifier
                    | SyntaxKind::CloseParenToken
                    | SyntaxKind::CloseBracketToken
                    | SyntaxKind::CloseBraceToken
                    | SyntaxKind::TrueKeyword
                    | SyntaxKind::FalseKeyword
                    | SyntaxKind::NullKeyword
                    | SyntaxKind::ThisKeyword
                    | SyntaxKind::BreakKeyword
                    | SyntaxKind::ContinueKeyword
            )
    }

    /// Whether a token of this kind continues the statement before it,
    /// even across a line break.
    pub fn can_continue_statement(self) -> bool {
        matches!(
            self,
            SyntaxKind::DotToken
                | SyntaxKind::QuestionDotToken
                | SyntaxKind::CommaToken
                | SyntaxKind::PlusToken
                | SyntaxKind::MinusToken
                | SyntaxKind::AsteriskToken
                | SyntaxKind::SlashToken
                | SyntaxKind::PercentToken
                | SyntaxKind::EqualsToken
                | SyntaxKind::EqualsEqualsToken
                | SyntaxKind::ExclamationEqualsToken
                | SyntaxKind::LessThanToken
                | SyntaxKind::GreaterThanToken
                | SyntaxKind::LessThanEqualsToken
                | SyntaxKind::GreaterThanEqualsToken
                | SyntaxKind::AmpersandToken
                | SyntaxKind::BarToken
                | SyntaxKind::CaretToken
                | SyntaxKind::AmpersandAmpersandToken
                | SyntaxKind::BarBarToken
                | SyntaxKind::OrKeyword
                | SyntaxKind::QuestionToken
                | SyntaxKind::ColonToken
                | SyntaxKind::EqualsGreaterThanToken
                | SyntaxKind::OpenParenToken
                | SyntaxKind::InKeyword
                | SyntaxKind::LikeKeyword
        )
    }

    /// Whether a token of this kind can only begin a new statement when it
    /// follows a line break.
    pub fn starts_statement(self) -> bool {
        self.is_literal()
            || matches!(
                self,
                SyntaxKind::Identifier
                    | SyntaxKind::FunctionKeyword
                    | SyntaxKind::IfKeyword
                    | SyntaxKind::ForKeyword
                    | SyntaxKind::WhileKeyword
                    | SyntaxKind::SwitchKeyword
                    | SyntaxKind::ReturnKeyword
                    | SyntaxKind::VarKeyword
                    | SyntaxKind::LetKeyword
                    | SyntaxKind::ConstKeyword
                    | SyntaxKind::ExportKeyword
                    | SyntaxKind::ImportKeyword
                    | SyntaxKind::CImportKeyword
                    | SyntaxKind::TryKeyword
                    | SyntaxKind::ThrowKeyword
                    | SyntaxKind::BreakKeyword
                    | SyntaxKind::ContinueKeyword
                    | SyntaxKind::DeleteKeyword
                    | SyntaxKind::TrueKeyword
                    | SyntaxKind::FalseKeyword
                    | SyntaxKind::NullKeyword
                    | SyntaxKind::ThisKeyword
                    | SyntaxKind::OpenBraceToken
                    | SyntaxKind::OpenBracketToken
                    | SyntaxKind::AtToken
                    | SyntaxKind::HashToken
            )
    }

    /// Get the keyword text for a keyword kind, or None.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::AsKeyword => Some("as"),
            SyntaxKind::BreakKeyword => Some("break"),
            SyntaxKind::CaseKeyword => Some("case"),
            SyntaxKind::CatchKeyword => Some("catch"),
            SyntaxKind::CImportKeyword => Some("cimport"),
            SyntaxKind::ConstKeyword => Some("const"),
            SyntaxKind::ContinueKeyword => Some("continue"),
            SyntaxKind::DefaultKeyword => Some("default"),
            SyntaxKind::DeleteKeyword => Some("delete"),
            SyntaxKind::EeKeyword => Some("_ee"),
            SyntaxKind::ElseKeyword => Some("else"),
            SyntaxKind::EvaluatorKeyword => Some("_evaluator"),
            SyntaxKind::ExportKeyword => Some("export"),
            SyntaxKind::FalseKeyword => Some("false"),
            SyntaxKind::FinallyKeyword => Some("finally"),
            SyntaxKind::ForKeyword => Some("for"),
            SyntaxKind::FromKeyword => Some("from"),
            SyntaxKind::FunctionKeyword => Some("function"),
            SyntaxKind::IfKeyword => Some("if"),
            SyntaxKind::ImportKeyword => Some("import"),
            SyntaxKind::InKeyword => Some("in"),
            SyntaxKind::LetKeyword => Some("let"),
            SyntaxKind::LikeKeyword => Some("like"),
            SyntaxKind::NewKeyword => Some("new"),
            SyntaxKind::NotKeyword => Some("not"),
            SyntaxKind::NullKeyword => Some("null"),
            SyntaxKind::OfKeyword => Some("of"),
            SyntaxKind::OrKeyword => Some("or"),
            SyntaxKind::RequestKeyword => Some("request"),
            SyntaxKind::ReturnKeyword => Some("return"),
            SyntaxKind::SwitchKeyword => Some("switch"),
            SyntaxKind::ThisKeyword => Some("this"),
            SyntaxKind::ThrowKeyword => Some("throw"),
            SyntaxKind::TrueKeyword => Some("true"),
            SyntaxKind::TryKeyword => Some("try"),
            SyntaxKind::VarKeyword => Some("var"),
            SyntaxKind::WhileKeyword => Some("while"),
            _ => None,
        }
    }

    /// Get the punctuation text for a punctuation kind, or None.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::OpenBraceToken => Some("{"),
            SyntaxKind::CloseBraceToken => Some("}"),
            SyntaxKind::OpenParenToken => Some("("),
            SyntaxKind::CloseParenToken => Some(")"),
            SyntaxKind::OpenBracketToken => Some("["),
            SyntaxKind::CloseBracketToken => Some("]"),
            SyntaxKind::DotToken => Some("."),
            SyntaxKind::DotDotDotToken => Some("..."),
            SyntaxKind::SemicolonToken => Some(";"),
            SyntaxKind::CommaToken => Some(","),
            SyntaxKind::QuestionDotToken => Some("?."),
            SyntaxKind::LessThanToken => Some("<"),
            SyntaxKind::GreaterThanToken => Some(">"),
            SyntaxKind::LessThanEqualsToken => Some("<="),
            SyntaxKind::GreaterThanEqualsToken => Some(">="),
            SyntaxKind::EqualsEqualsToken => Some("=="),
            SyntaxKind::ExclamationEqualsToken => Some("!="),
            SyntaxKind::EqualsGreaterThanToken => Some("=>"),
            SyntaxKind::PlusToken => Some("+"),
            SyntaxKind::MinusToken => Some("-"),
            SyntaxKind::AsteriskToken => Some("*"),
            SyntaxKind::SlashToken => Some("/"),
            SyntaxKind::PercentToken => Some("%"),
            SyntaxKind::AmpersandToken => Some("&"),
            SyntaxKind::BarToken => Some("|"),
            SyntaxKind::CaretToken => Some("^"),
            SyntaxKind::ExclamationToken => Some("!"),
            SyntaxKind::AmpersandAmpersandToken => Some("&&"),
            SyntaxKind::BarBarToken => Some("||"),
            SyntaxKind::QuestionToken => Some("?"),
            SyntaxKind::ColonToken => Some(":"),
            SyntaxKind::AtToken => Some("@"),
            SyntaxKind::HashToken => Some("#"),
            SyntaxKind::EqualsToken => Some("="),
            SyntaxKind::DollarOpenBraceToken => Some("${"),
            SyntaxKind::DefaultColonToken => Some("default:"),
            _ => None,
        }
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.punctuation_text().or_else(|| self.keyword_text()) {
            Some(text) => write!(f, "'{}'", text),
            None => write!(f, "{:?}", self),
        }
    }
}
