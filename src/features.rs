//! The feature-flag translator: a fixed mapping from named build options to
//! the preprocessor definitions passed on the native compiler command line.

use std::fmt;

use serde::Serialize;

use crate::error::OptionError;
use crate::options::BoolArgs;

/// A single `-D<NAME>=<0|1>` preprocessor definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Define {
    pub name: &'static str,
    pub value: u8,
}

impl Define {
    const fn on(name: &'static str) -> Self {
        Self { name, value: 1 }
    }

    const fn off(name: &'static str) -> Self {
        Self { name, value: 0 }
    }
}

impl fmt::Display for Define {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-D{}={}", self.name, self.value)
    }
}

/// One row of the translation table: a build option and the definitions it
/// emits when enabled
#[derive(Debug, Clone, Copy)]
pub struct FeatureDef {
    pub option: &'static str,
    pub defines: &'static [Define],
}

/// The fixed translation table, in emission order.
///
/// `abc-interp` and `wordcode-interp` are mutually-exclusive interpreter
/// selectors; each forces the other's definition to 0 when enabled. A caller
/// that enables both gets both pairs, in this order, and the compiler's
/// last-definition-wins rule decides downstream.
pub const FEATURES: &[FeatureDef] = &[
    FeatureDef {
        option: "debugger",
        defines: &[Define::on("AVMFEATURE_DEBUGGER")],
    },
    FeatureDef {
        option: "allocation-sampler",
        defines: &[Define::on("AVMFEATURE_ALLOCATION_SAMPLER")],
    },
    FeatureDef {
        option: "vtune",
        defines: &[Define::on("AVMFEATURE_VTUNE")],
    },
    FeatureDef {
        option: "jit",
        defines: &[Define::on("AVMFEATURE_JIT")],
    },
    FeatureDef {
        option: "abc-interp",
        defines: &[
            Define::on("AVMFEATURE_ABC_INTERP"),
            Define::off("AVMFEATURE_WORDCODE_INTERP"),
        ],
    },
    FeatureDef {
        option: "wordcode-interp",
        defines: &[
            Define::on("AVMFEATURE_WORDCODE_INTERP"),
            Define::off("AVMFEATURE_ABC_INTERP"),
        ],
    },
    FeatureDef {
        option: "threaded-interp",
        defines: &[Define::on("AVMFEATURE_THREADED_INTERP")],
    },
    FeatureDef {
        option: "selftest",
        defines: &[Define::on("AVMFEATURE_SELFTEST")],
    },
    FeatureDef {
        option: "eval",
        defines: &[Define::on("AVMFEATURE_EVAL")],
    },
    FeatureDef {
        option: "protect-jitmem",
        defines: &[Define::on("AVMFEATURE_PROTECT_JITMEM")],
    },
    FeatureDef {
        option: "shared-gcheap",
        defines: &[Define::on("AVMFEATURE_SHARED_GCHEAP")],
    },
    FeatureDef {
        option: "use-system_malloc",
        defines: &[Define::on("AVMFEATURE_USE_SYSTEM_MALLOC")],
    },
    FeatureDef {
        option: "cpp-exceptions",
        defines: &[Define::on("AVMFEATURE_CPP_EXCEPTIONS")],
    },
    FeatureDef {
        option: "interior-pointers",
        defines: &[Define::on("AVMFEATURE_INTERIOR_POINTERS")],
    },
    FeatureDef {
        option: "jni",
        defines: &[Define::on("AVMFEATURE_JNI")],
    },
    FeatureDef {
        option: "heap-alloca",
        defines: &[Define::on("AVMFEATURE_HEAP_ALLOCA")],
    },
    FeatureDef {
        option: "static-function_ptrs",
        defines: &[Define::on("AVMFEATURE_STATIC_FUNCTION_PTRS")],
    },
];

/// Ordered definitions for every enabled option.
///
/// Single stateless pass over the table; provider errors propagate unchanged.
pub fn feature_defines<P: BoolArgs>(provider: &P) -> Result<Vec<Define>, OptionError> {
    let mut defines = Vec::new();
    for feature in FEATURES {
        if provider.get_bool_arg(feature.option)? {
            defines.extend_from_slice(feature.defines);
        }
    }
    Ok(defines)
}

/// Compiler flag string for every enabled option, each token followed by a
/// single space. Consumers must tolerate the trailing space.
pub fn feature_settings<P: BoolArgs>(provider: &P) -> Result<String, OptionError> {
    let mut args = String::new();
    for define in feature_defines(provider)? {
        args.push_str(&define.to_string());
        args.push(' ');
    }
    Ok(args)
}

/// Space-joined form of a define list, without the trailing space
pub fn render_defines(defines: &[Define]) -> String {
    defines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
