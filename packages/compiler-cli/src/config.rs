//! Project Config
//!
//! `d2o.json`: any `Dialect` field at the top level, plus the suffix used
//! for generated files when not overwriting.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use anyhow::Context;
use d2o_compiler::Dialect;

pub const DEFAULT_CONFIG_FILE: &str = "d2o.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectConfig {
    #[serde(flatten)]
    pub dialect: Dialect,
    #[serde(default = "default_suffix")]
    pub generated_file_suffix: String,
}

fn default_suffix() -> String {
    "options".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            generated_file_suffix: default_suffix(),
        }
    }
}

impl ProjectConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        let config: ProjectConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Loads `path` if given, else `d2o.json` in the working directory when
    /// present, else the defaults.
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use d2o_compiler::Target;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: ProjectConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn dialect_fields_sit_at_top_level() {
        let config: ProjectConfig = serde_json::from_str(
            r#"{"target": "vue2", "prop_decorator": "Property", "generated_file_suffix": "vue3"}"#,
        )
        .unwrap();
        assert_eq!(config.dialect.target, Target::Vue2);
        assert_eq!(config.dialect.prop_decorator, "Property");
        assert_eq!(config.dialect.component_decorator, "Component");
        assert_eq!(config.generated_file_suffix, "vue3");
    }
}
