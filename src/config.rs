// Configuration for tokenization and output.
// Every value has a default; the binary overrides them from command-line flags.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use crate::token::CleaningPolicy;

/// Tokenizer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// How cleaned text is derived from raw text (default strict)
    pub policy: CleaningPolicy,
}

/// What the binary prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON token per line
    #[default]
    Tokens,
    /// The whole volume as one JSON document
    Volume,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Indent JSON output (default false)
    pub pretty: bool,
}

/// Master configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub tokenizer: TokenizerConfig,
    pub output: OutputConfig,
}
