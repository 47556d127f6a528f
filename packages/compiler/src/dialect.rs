//! Dialect
//!
//! The markers that identify the class-decorator dialect, and the lifecycle
//! hook set of the targeted framework version. Nothing in the classifier
//! hard-codes a marker name; it always reads them from here.

use serde::Deserialize;

/// A fixed, framework-defined set of lifecycle hook names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleHooks {
    names: &'static [&'static str],
}

impl LifecycleHooks {
    pub const VUE3: LifecycleHooks = LifecycleHooks {
        names: &[
            "beforeCreate",
            "created",
            "beforeMount",
            "mounted",
            "beforeUpdate",
            "updated",
            "activated",
            "deactivated",
            "beforeUnmount",
            "unmounted",
            "errorCaptured",
            "renderTracked",
            "renderTriggered",
            "serverPrefetch",
        ],
    };

    pub const VUE2: LifecycleHooks = LifecycleHooks {
        names: &[
            "beforeCreate",
            "created",
            "beforeMount",
            "mounted",
            "beforeUpdate",
            "updated",
            "activated",
            "deactivated",
            "beforeDestroy",
            "destroyed",
            "errorCaptured",
            "serverPrefetch",
        ],
    };

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name)
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }
}

/// Framework version the generated component targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Vue2,
    #[default]
    Vue3,
}

impl Target {
    pub fn lifecycle_hooks(self) -> LifecycleHooks {
        match self {
            Target::Vue2 => LifecycleHooks::VUE2,
            Target::Vue3 => LifecycleHooks::VUE3,
        }
    }
}

impl std::str::FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vue2" => Ok(Target::Vue2),
            "vue3" => Ok(Target::Vue3),
            other => Err(format!("unknown target `{}` (expected vue2 or vue3)", other)),
        }
    }
}

/// Recognized decorator and helper names of the input dialect.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Dialect {
    pub component_decorator: String,
    pub prop_decorator: String,
    pub ref_decorator: String,
    pub watch_decorator: String,
    pub emit_decorator: String,
    /// Callees accepted in `extends Mixins(A, B)`.
    pub mixins_helpers: Vec<String>,
    /// Import sources that only exist to feed the decorators; dropped from output.
    pub decorator_import_sources: Vec<String>,
    pub target: Target,
    /// Spaces per indentation level in the generated text.
    pub indent_width: usize,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            component_decorator: "Component".to_string(),
            prop_decorator: "Prop".to_string(),
            ref_decorator: "Ref".to_string(),
            watch_decorator: "Watch".to_string(),
            emit_decorator: "Emit".to_string(),
            mixins_helpers: vec!["Mixins".to_string(), "mixins".to_string()],
            decorator_import_sources: vec![
                "vue-property-decorator".to_string(),
                "vue-class-component".to_string(),
                "vue-facing-decorator".to_string(),
            ],
            target: Target::default(),
            indent_width: 4,
        }
    }
}

impl Dialect {
    pub fn lifecycle_hooks(&self) -> LifecycleHooks {
        self.target.lifecycle_hooks()
    }

    pub fn is_mixins_helper(&self, name: &str) -> bool {
        self.mixins_helpers.iter().any(|helper| helper == name)
    }

    pub fn is_decorator_import_source(&self, source: &str) -> bool {
        self.decorator_import_sources.iter().any(|s| s == source)
    }
}
