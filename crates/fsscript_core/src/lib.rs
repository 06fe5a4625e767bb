//! fsscript_core: Core position types for the fsscript lexical front end.
//!
//! Provides source offsets, text ranges, the append-only line-break table and
//! the 1-based regions derived from it for diagnostics.

pub mod text;

// Re-export commonly used types
pub use text::{LineTable, SourceRegion, TextPos, TextRange};
