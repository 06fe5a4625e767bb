//! fsscript_syntax: Token kinds, token flags and the reserved-word table.
//!
//! Shared vocabulary between the scanner and whatever parser consumes its
//! token stream.

pub mod keywords;
pub mod syntax_kind;
pub mod types;

pub use keywords::{lookup_keyword, MAX_KEYWORD_LEN};
pub use syntax_kind::SyntaxKind;
pub use types::*;
