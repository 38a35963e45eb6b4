//! Build feature configuration for the AVM shell.
//!
//! Translates named boolean build options ("debugger", "jit",
//! "wordcode-interp", ...) into the `-DAVMFEATURE_*` preprocessor
//! definitions consumed by the native compiler invocation.

pub mod config;
pub mod error;
pub mod features;
pub mod options;

// Re-export main types
pub use error::{ConfigError, OptionError};
pub use features::{feature_defines, feature_settings, render_defines, Define, FeatureDef, FEATURES};
pub use options::{BoolArgs, FnArgs, OptionMap};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debugger_emits_its_define() {
        let mut options = OptionMap::new();
        options.set("debugger", true).unwrap();
        assert_eq!(
            feature_settings(&options).unwrap(),
            "-DAVMFEATURE_DEBUGGER=1 "
        );
    }
}
