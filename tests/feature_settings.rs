//! Behavioral tests for the option-to-define translation.
//!
//! These pin the exact byte format of the flag string, including the
//! trailing space consumers are required to tolerate.

use avmfeatures::{
    feature_defines, feature_settings, render_defines, FnArgs, OptionError, OptionMap, FEATURES,
};

fn only(name: &str) -> OptionMap {
    let mut options = OptionMap::new();
    options.set(name, true).unwrap();
    options
}

#[test]
fn each_option_emits_only_its_own_tokens() {
    for feature in FEATURES {
        let settings = feature_settings(&only(feature.option)).unwrap();
        let expected: String = feature.defines.iter().map(|d| format!("{} ", d)).collect();
        assert_eq!(settings, expected, "option {}", feature.option);
    }
}

#[test]
fn all_disabled_emits_nothing() {
    assert_eq!(feature_settings(&OptionMap::new()).unwrap(), "");
}

#[test]
fn all_enabled_emits_every_token_in_table_order() {
    let mut options = OptionMap::new();
    for feature in FEATURES {
        options.set(feature.option, true).unwrap();
    }
    let settings = feature_settings(&options).unwrap();

    let expected: String = FEATURES
        .iter()
        .flat_map(|f| f.defines)
        .map(|d| format!("{} ", d))
        .collect();
    assert_eq!(settings, expected);
    assert!(!settings.contains("  "), "tokens are single-space separated");
    assert!(settings.ends_with(' '));
}

#[test]
fn debugger_and_jit_worked_example() {
    let mut options = OptionMap::new();
    options.set("debugger", true).unwrap();
    options.set("jit", true).unwrap();
    assert_eq!(
        feature_settings(&options).unwrap(),
        "-DAVMFEATURE_DEBUGGER=1 -DAVMFEATURE_JIT=1 "
    );
}

#[test]
fn both_interpreters_emit_both_pairs_in_declaration_order() {
    let mut options = OptionMap::new();
    options.set("abc-interp", true).unwrap();
    options.set("wordcode-interp", true).unwrap();
    assert_eq!(
        feature_settings(&options).unwrap(),
        "-DAVMFEATURE_ABC_INTERP=1 -DAVMFEATURE_WORDCODE_INTERP=0 -DAVMFEATURE_WORDCODE_INTERP=1 -DAVMFEATURE_ABC_INTERP=0 "
    );
}

#[test]
fn repeated_calls_are_byte_identical() {
    let options = only("selftest");
    assert_eq!(
        feature_settings(&options).unwrap(),
        feature_settings(&options).unwrap()
    );
}

#[test]
fn render_defines_joins_without_trailing_space() {
    let defines = feature_defines(&only("jit")).unwrap();
    assert_eq!(render_defines(&defines), "-DAVMFEATURE_JIT=1");
}

#[test]
fn provider_errors_propagate_unchanged() {
    let provider = FnArgs(|name: &str| {
        if name == "vtune" {
            Err(OptionError::UnknownOption(name.to_string()))
        } else {
            Ok(false)
        }
    });
    let err = feature_settings(&provider).unwrap_err();
    assert_eq!(err, OptionError::UnknownOption("vtune".to_string()));
}
