//! The option provider capability: given an option name, return its
//! boolean value.
//!
//! The translator in [`crate::features`] consults a provider once per known
//! option and never validates or recovers; lookup failures propagate to the
//! caller unchanged.

use std::collections::HashMap;

use crate::error::OptionError;
use crate::features::FEATURES;

/// Capability consulted by the feature translator, one lookup per option name
pub trait BoolArgs {
    fn get_bool_arg(&self, name: &str) -> Result<bool, OptionError>;
}

/// Adapter turning a lookup closure into a provider
pub struct FnArgs<F>(pub F);

impl<F> BoolArgs for FnArgs<F>
where
    F: Fn(&str) -> Result<bool, OptionError>,
{
    fn get_bool_arg(&self, name: &str) -> Result<bool, OptionError> {
        (self.0)(name)
    }
}

/// Owned option table seeded with every known feature name set to false
#[derive(Debug, Clone)]
pub struct OptionMap {
    values: HashMap<&'static str, bool>,
}

impl OptionMap {
    pub fn new() -> Self {
        let values = FEATURES.iter().map(|f| (f.option, false)).collect();
        Self { values }
    }

    /// Set a named option. Unknown names are rejected so a misspelled
    /// feature cannot silently stay disabled.
    pub fn set(&mut self, name: &str, value: bool) -> Result<(), OptionError> {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(OptionError::UnknownOption(name.to_string())),
        }
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.values.get(name).copied().unwrap_or(false)
    }
}

impl Default for OptionMap {
    fn default() -> Self {
        Self::new()
    }
}

impl BoolArgs for OptionMap {
    fn get_bool_arg(&self, name: &str) -> Result<bool, OptionError> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| OptionError::UnknownOption(name.to_string()))
    }
}
