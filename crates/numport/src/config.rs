//! Configuration system for numport.
//!
//! Loads config from:
//! 1. Global: ~/.config/numport/config.toml
//! 2. Per-project: .numport/config.toml (overrides global)
//!
//! Example config.toml:
//! ```toml
//! [output]
//! namespace = "FftFlat"
//!
//! [[dialects]]
//! name = "mykernel"
//! sources = ["mykernel.c"]
//! declaration = { prefix = "void" }
//! substitutions = [{ from = " sqrt(", to = " Math.Sqrt(" }]
//! ```

use anyhow::Context;
use numport_translate::{DEFAULT_NAMESPACE, DialectSpec, register_dialect};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Output configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Namespace for generated classes.
    pub namespace: Option<String>,
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct NumportConfig {
    pub output: OutputConfig,
    /// Additional dialects, registered on top of the built-in ones.
    pub dialects: Vec<DialectSpec>,
}

impl NumportConfig {
    /// Load configuration for a project.
    ///
    /// Loads global config from ~/.config/numport/config.toml,
    /// then merges with per-project config from .numport/config.toml.
    pub fn load(root: &Path) -> Self {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::load_file(&global_path) {
                config = config.merge(global);
            }
        }

        let project_path = root.join(".numport").join("config.toml");
        if let Some(project) = Self::load_file(&project_path) {
            config = config.merge(project);
        }

        config
    }

    /// Get the global config path.
    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("numport").join("config.toml"))
    }

    /// Load config from a file path. Missing files are silent; broken ones warn.
    fn load_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                None
            }
        }
    }

    /// Merge another config into this one. `other` wins on scalar settings;
    /// its dialects are appended so they register after (and override) ours.
    fn merge(mut self, other: Self) -> Self {
        if other.output.namespace.is_some() {
            self.output.namespace = other.output.namespace;
        }
        self.dialects.extend(other.dialects);
        self
    }

    /// Namespace for generated classes.
    pub fn namespace(&self) -> &str {
        self.output.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }

    /// Compile and register every configured dialect.
    pub fn register_dialects(&self) -> anyhow::Result<()> {
        for spec in &self.dialects {
            let dialect = spec
                .compile()
                .with_context(|| format!("invalid dialect `{}` in config", spec.name))?;
            register_dialect(dialect);
        }
        Ok(())
    }
}
