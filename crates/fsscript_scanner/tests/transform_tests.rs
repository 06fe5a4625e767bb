//! Token stream integration tests.
//!
//! Covers each rewrite on its own and the cases where two of them meet on
//! neighbouring tokens.

use fsscript_scanner::{ScannerOptions, Token, TokenStream};
use fsscript_syntax::SyntaxKind::{self, *};

fn stream_all(source: &str) -> Vec<Token> {
    TokenStream::new(source).collect()
}

/// Helper: token kinds after rewriting, without the trailing EOF.
fn stream_kinds(source: &str) -> Vec<SyntaxKind> {
    let mut kinds: Vec<SyntaxKind> = stream_all(source).into_iter().map(|t| t.kind).collect();
    assert_eq!(kinds.pop(), Some(EndOfFileToken));
    kinds
}

/// Render kinds as punctuation/keyword text where available, for compact
/// expectations.
fn stream_shape(source: &str) -> String {
    stream_all(source)
        .iter()
        .filter(|t| t.kind != EndOfFileToken)
        .map(|t| match t.kind {
            Identifier | NumericLiteral | StringLiteral => t
                .text()
                .map(str::to_string)
                .unwrap_or_else(|| t.number().map(|n| n.to_string()).unwrap_or_default()),
            kind => kind
                .punctuation_text()
                .or_else(|| kind.keyword_text())
                .unwrap_or("?")
                .to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn synthetic_kinds(source: &str) -> Vec<SyntaxKind> {
    stream_all(source)
        .into_iter()
        .filter(Token::is_synthetic)
        .map(|t| t.kind)
        .collect()
}

// ============================================================================
// Automatic semicolons
// ============================================================================

#[test]
fn test_asi_between_statements() {
    assert_eq!(stream_kinds("a=1\nb=2"), stream_kinds("a=1;b=2"));
}

#[test]
fn test_no_asi_across_continuation() {
    assert_eq!(stream_kinds("a=1\n+2"), stream_kinds("a=1+2"));
    assert_eq!(stream_kinds("a\n.b"), stream_kinds("a.b"));
    assert_eq!(stream_kinds("f\n(1)"), stream_kinds("f(1)"));
    assert_eq!(stream_kinds("a\nor b"), stream_kinds("a or b"));
}

#[test]
fn test_no_asi_after_open_expression() {
    assert_eq!(stream_kinds("a =\nb"), stream_kinds("a = b"));
    assert_eq!(stream_kinds("a &&\nb"), stream_kinds("a && b"));
}

#[test]
fn test_no_asi_without_line_break() {
    assert!(synthetic_kinds("a b").is_empty());
}

#[test]
fn test_no_asi_at_eof() {
    assert_eq!(stream_kinds("a\n"), vec![Identifier]);
}

#[test]
fn test_no_double_semicolon() {
    assert_eq!(stream_kinds("a;\nb"), vec![Identifier, SemicolonToken, Identifier]);
    assert_eq!(stream_kinds("a\n\n\nb"), vec![Identifier, SemicolonToken, Identifier]);
}

#[test]
fn test_asi_after_keyword_literals() {
    assert_eq!(
        stream_kinds("return true\nx"),
        vec![ReturnKeyword, TrueKeyword, SemicolonToken, Identifier]
    );
    assert_eq!(
        stream_kinds("break\ncontinue"),
        vec![BreakKeyword, SemicolonToken, ContinueKeyword]
    );
}

#[test]
fn test_asi_before_statement_keywords() {
    assert_eq!(stream_shape("x = 1\nvar y = 2"), "x = 1 ; var y = 2");
    assert_eq!(stream_shape("x()\nif (y) z()"), "x ( ) ; if ( y ) z ( )");
    assert_eq!(stream_shape("a\n@bean"), "a ; @ bean");
    assert_eq!(stream_shape("a\n#attr"), "a ; # attr");
}

#[test]
fn test_asi_synthetic_semicolon_position() {
    let tokens = stream_all("a\r\nb");
    let semi = &tokens[1];
    assert_eq!(semi.kind, SemicolonToken);
    assert!(semi.is_synthetic());
    assert_eq!((semi.pos, semi.end), (3, 3));
}

// ============================================================================
// export boundary
// ============================================================================

#[test]
fn test_export_self_terminates() {
    assert_eq!(stream_kinds("a = 1 export x"), stream_kinds("a = 1 ; export x"));
}

#[test]
fn test_export_after_explicit_semicolon() {
    assert_eq!(
        stream_kinds("a; export b"),
        vec![Identifier, SemicolonToken, ExportKeyword, Identifier]
    );
}

#[test]
fn test_export_at_start_is_preceded_by_semicolon() {
    assert_eq!(
        stream_kinds("export const a = 1"),
        vec![SemicolonToken, ExportKeyword, ConstKeyword, Identifier, EqualsToken, NumericLiteral]
    );
}

#[test]
fn test_export_after_line_break_gets_one_semicolon() {
    assert_eq!(
        stream_kinds("a = 1\nexport b"),
        vec![Identifier, EqualsToken, NumericLiteral, SemicolonToken, ExportKeyword, Identifier]
    );
}

// ============================================================================
// Function body semicolon
// ============================================================================

#[test]
fn test_function_end_to_end() {
    let tokens = stream_all("function f(x){return x} f(1)");
    let second_f = tokens
        .iter()
        .rposition(|t| t.kind == Identifier && t.text() == Some("f"))
        .unwrap();
    assert_eq!(tokens[second_f - 1].kind, SemicolonToken);
    assert!(tokens[second_f - 1].is_synthetic());
    assert_eq!(tokens[second_f - 2].kind, CloseBraceToken);
    assert_eq!(
        stream_shape("function f(x){return x} f(1)"),
        "function f ( x ) { return x } ; f ( 1 )"
    );
}

#[test]
fn test_function_semicolon_follows_outer_brace_only() {
    assert_eq!(
        stream_shape("function f(){ if (a) { b } } c"),
        "function f ( ) { if ( a ) { b } } ; c"
    );
}

#[test]
fn test_nested_functions() {
    assert_eq!(
        stream_shape("function f(){ function g(){} } h"),
        "function f ( ) { function g ( ) { } ; } ; h"
    );
}

#[test]
fn test_function_expression_argument() {
    assert_eq!(
        stream_shape("run(function(){ a })"),
        "run ( function ( ) { a } ; )"
    );
}

#[test]
fn test_unmatched_close_brace_passes_through() {
    assert_eq!(stream_kinds("}"), vec![CloseBraceToken]);
}

#[test]
fn test_function_then_line_break_then_call() {
    // The `;` after the body already separates the statements.
    assert_eq!(
        stream_shape("function f(){}\nf()"),
        "function f ( ) { } ; f ( )"
    );
}

// ============================================================================
// Arrow body wrap
// ============================================================================

#[test]
fn test_arrow_wrap_only_when_unbraced() {
    assert_eq!(stream_kinds("f(x=>y)"), stream_kinds("f(x=>{y})"));
    assert_eq!(
        synthetic_kinds("f(x=>{y})"),
        Vec::<SyntaxKind>::new()
    );
}

#[test]
fn test_arrow_body_with_call() {
    assert_eq!(
        stream_shape("list.filter(r => r.ok(1) || r.code == 200)"),
        "list . filter ( r => { r . ok ( 1 ) || r . code == 200 } )"
    );
}

#[test]
fn test_arrow_body_starting_with_paren() {
    assert_eq!(stream_shape("f(x => (x + 1))"), "f ( x => { ( x + 1 ) } )");
}

#[test]
fn test_arrow_parenthesized_parameters() {
    assert_eq!(
        stream_shape("map((a, b) => a + b)"),
        "map ( ( a , b ) => { a + b } )"
    );
}

#[test]
fn test_arrow_brace_positions() {
    let tokens = stream_all("f(x=>y)");
    let open = tokens.iter().find(|t| t.kind == OpenBraceToken).unwrap();
    let close = tokens.iter().find(|t| t.kind == CloseBraceToken).unwrap();
    assert!(open.is_synthetic() && close.is_synthetic());
    assert_eq!(open.pos, 5);
    assert_eq!(close.pos, 6);
}

// ============================================================================
// Index parenthesization
// ============================================================================

#[test]
fn test_bracket_round_trip() {
    assert_eq!(
        stream_kinds("name[i]"),
        vec![
            Identifier,
            OpenBracketToken,
            OpenParenToken,
            Identifier,
            CloseParenToken,
            CloseBracketToken,
        ]
    );
}

#[test]
fn test_index_with_expression() {
    assert_eq!(
        stream_shape("const end = times[times.length - 1]"),
        "const end = times [ ( times . length - 1 ) ]"
    );
}

#[test]
fn test_nested_index() {
    assert_eq!(stream_shape("a[b[1]]"), "a [ ( b [ ( 1 ) ] ) ]");
}

#[test]
fn test_array_literal_inside_index() {
    assert_eq!(stream_shape("a[[1][0]]"), "a [ ( [ 1 ] [ 0 ] ) ]");
}

#[test]
fn test_array_literal_is_not_rewritten() {
    assert_eq!(stream_shape("x = [1, 2]"), "x = [ 1 , 2 ]");
    assert_eq!(stream_shape("f()[0]"), "f ( ) [ 0 ]");
}

#[test]
fn test_index_paren_positions() {
    let tokens = stream_all("ab[1]");
    assert_eq!((tokens[2].kind, tokens[2].pos), (OpenParenToken, 3));
    assert_eq!((tokens[4].kind, tokens[4].pos), (CloseParenToken, 4));
}

// ============================================================================
// Interactions
// ============================================================================

#[test]
fn test_asi_then_index_on_new_line() {
    // ASI claims the `[`, so it is an array literal rather than an index.
    assert_eq!(stream_shape("a\n[1]"), "a ; [ 1 ]");
}

#[test]
fn test_index_then_asi() {
    assert_eq!(stream_shape("a[1]\nb"), "a [ ( 1 ) ] ; b");
}

#[test]
fn test_arrow_after_line_break_is_continuation() {
    assert_eq!(stream_shape("f(x\n=> y)"), "f ( x => { y } )");
}

#[test]
fn test_arrow_body_closes_before_asi() {
    assert_eq!(stream_shape("g(x => y)\nz"), "g ( x => { y } ) ; z");
}

#[test]
fn test_nested_unbraced_arrow_keeps_flat_counter() {
    // One depth counter is shared by every open arrow body, so the inner wrap
    // resets it and the outer `{` is never closed.
    assert_eq!(stream_shape("f(a => b => c)"), "f ( a => { b => { c } )");
    assert_eq!(
        synthetic_kinds("f(a => b => c)"),
        vec![OpenBraceToken, OpenBraceToken, CloseBraceToken]
    );
}

#[test]
fn test_arrow_body_with_index() {
    assert_eq!(stream_shape("f(x => x[0])"), "f ( x => { x [ ( 0 ) ] } )");
}

#[test]
fn test_function_and_export() {
    assert_eq!(
        stream_shape("function f(){} export g"),
        "function f ( ) { } ; export g"
    );
}

#[test]
fn test_export_function_then_statement() {
    assert_eq!(
        stream_shape("export function f(){ return 1 }\nf()"),
        "; export function f ( ) { return 1 } ; f ( )"
    );
}

#[test]
fn test_every_synthetic_token_is_zero_width() {
    let source = "export function f(a){ return list.map(x => a[x]) }\nf(1)";
    for token in stream_all(source) {
        if token.is_synthetic() {
            assert!(token.is_empty(), "{:?}", token);
            assert!(token.text().is_none());
        } else {
            assert!(!token.is_empty() || token.kind == EndOfFileToken, "{:?}", token);
        }
    }
}

#[test]
fn test_real_tokens_unchanged_by_rewrites() {
    let source = "a[1]\nb = x => y\nexport c";
    let raw: Vec<(SyntaxKind, u32, u32)> = {
        let mut scanner = fsscript_scanner::Scanner::new(source);
        let mut out = Vec::new();
        loop {
            let token = scanner.scan();
            out.push((token.kind, token.pos, token.end));
            if token.kind == EndOfFileToken {
                break;
            }
        }
        out
    };
    let real: Vec<(SyntaxKind, u32, u32)> = stream_all(source)
        .into_iter()
        .filter(|t| !t.is_synthetic())
        .map(|t| (t.kind, t.pos, t.end))
        .collect();
    assert_eq!(raw, real);
}

// ============================================================================
// Template mode and positions
// ============================================================================

#[test]
fn test_template_mode_stream() {
    let stream = TokenStream::with_options("Total: ${ a[0] + 1 }", ScannerOptions::template());
    let kinds: Vec<SyntaxKind> = stream.map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            StringLiteral,
            DollarOpenBraceToken,
            Identifier,
            OpenBracketToken,
            OpenParenToken,
            NumericLiteral,
            CloseParenToken,
            CloseBracketToken,
            PlusToken,
            NumericLiteral,
            CloseBraceToken,
            EndOfFileToken,
        ]
    );
}

#[test]
fn test_region_resolution() {
    let mut stream = TokenStream::new("x = 1\nyy = 2");
    let mut tokens = Vec::new();
    loop {
        let token = stream.next_token();
        if token.kind == EndOfFileToken {
            break;
        }
        tokens.push(token);
    }
    let yy = tokens.iter().find(|t| t.text() == Some("yy")).unwrap();
    assert_eq!(stream.region(yy).to_string(), "2:1-2:2");
    let semi = tokens.iter().find(|t| t.is_synthetic()).unwrap();
    assert!(stream.region(semi).is_point());
    assert_eq!(stream.region_of(semi.range()).to_string(), "2:1");
}

#[test]
fn test_diagnostics_do_not_change_stream() {
    let mut stream = TokenStream::new("a = 'open");
    let kinds: Vec<SyntaxKind> = stream.by_ref().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![Identifier, EqualsToken, StringLiteral, EndOfFileToken]);
    assert_eq!(stream.diagnostics().len(), 1);
    assert_eq!(stream.take_diagnostics().len(), 1);
    assert!(stream.diagnostics().is_empty());
}
