//! fsscript_options: Scanner configuration.
//!
//! Options are plain data with JSON support, so hosts can keep them next to
//! the rest of their formula settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the source text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceMode {
    /// The whole source is an expression/statement script.
    #[default]
    Script,
    /// Literal text with embedded `${ expr }` substitutions.
    Template,
}

impl SourceMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceMode::Script => "script",
            SourceMode::Template => "template",
        }
    }
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceMode {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "script" => Ok(SourceMode::Script),
            "template" => Ok(SourceMode::Template),
            _ => Err(OptionsError::UnknownMode(s.to_string())),
        }
    }
}

/// Options accepted by the scanner and the token stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScannerOptions {
    pub mode: SourceMode,
    /// Accept non-ASCII XID characters in identifiers.
    pub unicode_identifiers: bool,
}

impl ScannerOptions {
    /// Options for template sources.
    pub fn template() -> Self {
        Self {
            mode: SourceMode::Template,
            ..Self::default()
        }
    }

    pub fn with_unicode_identifiers(mut self, enabled: bool) -> Self {
        self.unicode_identifiers = enabled;
        self
    }

    /// Parse options from a JSON object. Missing keys take their defaults.
    pub fn from_json(content: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Errors raised while loading scanner options.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("invalid scanner options: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown source mode `{0}`, expected `script` or `template`")]
    UnknownMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ScannerOptions::default();
        assert_eq!(options.mode, SourceMode::Script);
        assert!(!options.unicode_identifiers);
    }

    #[test]
    fn test_from_json() {
        let options =
            ScannerOptions::from_json(r#"{ "mode": "template", "unicodeIdentifiers": true }"#)
                .unwrap();
        assert_eq!(options, ScannerOptions::template().with_unicode_identifiers(true));

        let partial = ScannerOptions::from_json("{}").unwrap();
        assert_eq!(partial, ScannerOptions::default());
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        let err = ScannerOptions::from_json(r#"{ "mode": "markdown" }"#).unwrap_err();
        assert!(matches!(err, OptionsError::Json(_)));
        assert!(err.to_string().starts_with("invalid scanner options"));
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("Template".parse::<SourceMode>().unwrap(), SourceMode::Template);
        assert_eq!("script".parse::<SourceMode>().unwrap(), SourceMode::Script);
        let err = "xml".parse::<SourceMode>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown source mode `xml`, expected `script` or `template`"
        );
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_string(&ScannerOptions::template()).unwrap();
        assert_eq!(json, r#"{"mode":"template","unicodeIdentifiers":false}"#);
    }
}
