//! Unified error types for avmfeatures using thiserror

use thiserror::Error;

/// Errors raised by an option provider during lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    #[error("unknown build option: {0}")]
    UnknownOption(String),
}

/// Errors raised while loading a feature configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown feature name: {0}")]
    UnknownFeature(String),

    #[error("`features` must be a table, found {0}")]
    NotATable(String),

    #[error("feature `{name}` must be a boolean, found {found}")]
    NotABool { name: String, found: String },
}
