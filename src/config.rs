//! TOML feature configuration: a `[features]` table of `name = bool` entries.
//!
//! Validation lives here, not in the translator: unknown feature names and
//! non-boolean values are configuration errors, because a misspelled name in
//! a build-flags file must not silently leave a feature disabled.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::options::OptionMap;

/// Load a feature configuration file into an option table
pub fn load(path: &Path) -> Result<OptionMap, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse(&text)
}

/// Parse configuration text. An absent `[features]` table leaves every
/// option disabled.
pub fn parse(text: &str) -> Result<OptionMap, ConfigError> {
    let value: toml::Value = toml::from_str(text)?;
    let mut options = OptionMap::new();

    let Some(features) = value.get("features") else {
        return Ok(options);
    };
    let Some(table) = features.as_table() else {
        return Err(ConfigError::NotATable(features.type_str().to_string()));
    };

    for (name, entry) in table {
        let Some(enabled) = entry.as_bool() else {
            return Err(ConfigError::NotABool {
                name: name.clone(),
                found: entry.type_str().to_string(),
            });
        };
        options
            .set(name, enabled)
            .map_err(|_| ConfigError::UnknownFeature(name.clone()))?;
    }
    Ok(options)
}
