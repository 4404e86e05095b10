use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// How header names are compared against table names.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NameMatch {
    /// Byte-for-byte equality. `Content-Type` does not match `content-type`.
    #[default]
    Exact,
    /// ASCII case folding on the name only.
    AsciiCaseInsensitive,
}

/// What the decoder does with a stream whose length is not a multiple of 8.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TrailingBits {
    /// Right-pad the final group with '0'.
    #[default]
    Pad,
    /// Fail with `InvalidFormat`.
    Reject,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CodecConfig {
    pub name_match: NameMatch,
    pub trailing_bits: TrailingBits,
}

impl CodecConfig {
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let config: CodecConfig = toml::from_str(src)?;
        tracing::debug!(?config, "codec config parsed");
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let src = std::fs::read_to_string(path)?;
        Self::from_toml_str(&src)
    }

    pub fn with_name_match(mut self, name_match: NameMatch) -> Self {
        self.name_match = name_match;
        self
    }

    pub fn with_trailing_bits(mut self, trailing_bits: TrailingBits) -> Self {
        self.trailing_bits = trailing_bits;
        self
    }
}
