use serde::{Deserialize, Serialize};

/// Result envelope for a full `bindlint check` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub version: String,
    pub command: String,
    pub status: String, // "ok" | "error" | "warning"
    pub manifests_analyzed: Vec<String>,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub info: CheckInfo,
}

/// One reported rule violation, tied to the offending callable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: String,
    pub severity: String, // "ERROR" | "WARNING" | "INFO"
    pub category: String,
    pub message: String,
    pub callable: String,
    pub file: String,
    pub line: u32,
    pub hash: String,
    pub fix_hint: Option<String>,
    pub suppressed: bool,
    pub suppress_hint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInfo {
    pub callables_checked: u32,
    pub diagnostics_suppressed: u32,
}

/// Rule-catalog explanation for one diagnostic code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainResult {
    pub version: String,
    pub command: String,
    pub code: String,
    pub title: String,
    pub summary: String,
    pub details: Vec<String>,
    pub fix: String,
}
