//! Output formatters for bindlint command results.
//!
//! Provides two output modes:
//! - **Human** (default): Formatted output for terminal users
//! - **JSON** (`--json`): Machine-readable structured output

pub mod human;
pub(crate) mod human_helpers;
pub mod json;

use bindlint_validate::types::{CheckResult, ExplainResult};

pub trait OutputFormatter {
    fn format_check(&self, result: &CheckResult) -> String;
    fn format_explain(&self, result: &ExplainResult) -> String;
}
