//! fsscript_scanner: Lexical front end for fsscript formulas.
//!
//! [`Scanner`] turns source text into raw tokens:
//! - identifiers with case-insensitive reserved words
//! - decimal, exponent and hex numbers
//! - `"..."`, `'...'` and `` `...` `` strings
//! - template sources with `${ ... }` substitutions
//!
//! [`TokenStream`] wraps the scanner and applies the statement-boundary and
//! delimiter rewrites the parser expects. Parsers normally pull from the
//! stream:
//!
//! ```
//! use fsscript_scanner::TokenStream;
//! use fsscript_syntax::SyntaxKind;
//!
//! let kinds: Vec<SyntaxKind> = TokenStream::new("a = 1\nb = 2").map(|t| t.kind).collect();
//! assert_eq!(kinds[3], SyntaxKind::SemicolonToken);
//! ```

mod char_codes;
mod cursor;
mod scanner;
mod token;
mod transform;

pub use fsscript_options::{ScannerOptions, SourceMode};
pub use scanner::Scanner;
pub use token::{Token, TokenValue};
pub use transform::TokenStream;
