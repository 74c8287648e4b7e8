//! Inlining configuration.
//!
//! Nothing is discovered: callers either use [`InlineConfig::default`] or hand
//! over a TOML document explicitly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::emit::DEFAULT_IDENTIFIER;
use crate::error::{InlineError, Result};

/// Default input list of the reference invocation.
pub const DEFAULT_INPUTS: &[&str] = &["tex/daisy.webp"];

/// Default output file of the reference invocation.
pub const DEFAULT_OUTPUT: &str = "data-urls.js";

/// What to inline and where to write it.
///
/// ```toml
/// inputs = ["tex/daisy.webp", "tex/grass.png"]
/// output = "data-urls.js"
/// identifier = "dataUrls"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InlineConfig {
    /// Asset paths, in the order they appear in the table.
    pub inputs: Vec<String>,
    /// Generated module path. Overwritten on every run.
    pub output: PathBuf,
    /// Name the table is bound to in the generated module.
    pub identifier: String,
}

impl Default for InlineConfig {
    fn default() -> Self {
        Self {
            inputs: DEFAULT_INPUTS.iter().map(|s| s.to_string()).collect(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            identifier: DEFAULT_IDENTIFIER.to_string(),
        }
    }
}

impl InlineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).map_err(|e| InlineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| InlineError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Check that the output path is set and the identifier is usable in JavaScript.
    pub fn validate(&self) -> Result<()> {
        if self.output.as_os_str().is_empty() {
            return Err(InlineError::Config("output path must not be empty".to_string()));
        }
        if !is_js_identifier(&self.identifier) {
            return Err(InlineError::Config(format!(
                "identifier must be a valid JavaScript identifier, got {:?}",
                self.identifier
            )));
        }
        Ok(())
    }
}

// ASCII subset of IdentifierName; reserved words are not rejected.
fn is_js_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
