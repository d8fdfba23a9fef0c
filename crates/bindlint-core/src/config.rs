//! Configuration file loading for bindlint.
//!
//! Reads `.bindlint/bindlint.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::InjectedTypes;

/// Top-level bindlint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindlintConfig {
    pub version: String,
    #[serde(default)]
    pub rules: RuleConfig,
    /// Expected types for the six injected trailing parameters. Overriding
    /// these retargets the validator at a different runtime.
    #[serde(default)]
    pub injected_types: InjectedTypes,
    /// Diagnostic codes suppressed for the whole repository.
    #[serde(default)]
    pub suppress: Vec<String>,
    /// Glob patterns for manifest files to skip during directory scans.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

/// Per-rule enable toggles. Only the non-structural rules can be turned off;
/// parameter shape, count, and injected-type checks always run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default = "default_true")]
    pub visibility: bool,
    #[serde(default = "default_true")]
    pub documentation: bool,
}

fn default_true() -> bool {
    true
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            visibility: true,
            documentation: true,
        }
    }
}

impl Default for BindlintConfig {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            rules: RuleConfig::default(),
            injected_types: InjectedTypes::default(),
            suppress: vec![],
            ignore_patterns: vec![],
        }
    }
}

impl BindlintConfig {
    /// Load configuration from `bindlint.json` inside the given bindlint directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(bindlint_dir: &Path) -> Self {
        let config_path = bindlint_dir.join("bindlint.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "bindlint: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
