use bindlint_core::config::{BindlintConfig, RuleConfig};
use bindlint_core::types::{CallableDecl, InjectedTypes};
use rayon::prelude::*;

use crate::rules::{self, RuleViolation};
use crate::suppress::SuppressionManager;
use crate::types::{CheckInfo, CheckResult, Diagnostic};

/// Core validation engine. Holds the injected-type table, rule toggles, and
/// suppressions; carries no state across callables.
pub struct Validator {
    injected: InjectedTypes,
    rules: RuleConfig,
    suppressions: SuppressionManager,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    pub fn new() -> Self {
        Self {
            injected: InjectedTypes::default(),
            rules: RuleConfig::default(),
            suppressions: SuppressionManager::new(),
        }
    }

    /// Create a validator configured from a `BindlintConfig`.
    pub fn with_config(config: &BindlintConfig) -> Self {
        let mut suppressions = SuppressionManager::new();
        for code in &config.suppress {
            suppressions.suppress(code);
        }
        Self {
            injected: config.injected_types.clone(),
            rules: config.rules.clone(),
            suppressions,
        }
    }

    /// Suppress a specific diagnostic code.
    pub fn suppress(&mut self, code: &str) {
        self.suppressions.suppress(code);
    }

    /// Validate one callable declaration against its contract.
    ///
    /// Runs the five rule families in order. A violation aborts only its own
    /// family; every family is always attempted, so one callable can report
    /// several diagnostics. The injected-type walk bounds-checks internally
    /// and is safe to attempt even when the count family failed.
    pub fn validate(&self, decl: &CallableDecl) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut report = |violation: RuleViolation| {
            diagnostics.push(self.diagnostic(decl, violation));
        };

        if self.rules.visibility {
            if let Err(v) = rules::check_visibility(decl) {
                report(v);
            }
        }
        if self.rules.documentation {
            if let Err(v) = rules::check_documented(&decl.contract) {
                report(v);
            }
        }
        if let Err(v) = rules::check_struct_field(&decl.contract) {
            report(v);
        }
        if let Err(v) = rules::check_param_order(&decl.contract) {
            report(v);
        }
        if let Err(v) = rules::check_param_count(decl) {
            report(v);
        }
        if let Err(v) = rules::check_injected_types(decl, &self.injected) {
            report(v);
        }

        diagnostics
    }

    /// Validate a batch of callables and assemble the check envelope.
    ///
    /// Callables are independent, so they validate in parallel; the collected
    /// diagnostic order still follows the input order.
    pub fn check(&self, callables: &[CallableDecl], manifests_analyzed: Vec<String>) -> CheckResult {
        let all: Vec<Diagnostic> = callables
            .par_iter()
            .flat_map_iter(|decl| self.validate(decl))
            .collect();

        let suppressed = all.iter().filter(|d| d.suppressed).count() as u32;

        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        Self::partition_diagnostics(all, &mut errors, &mut warnings);

        let status = if !errors.is_empty() {
            "error"
        } else if warnings.iter().any(|d| d.severity == "WARNING") {
            "warning"
        } else {
            "ok"
        };

        CheckResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "check".to_string(),
            status: status.to_string(),
            manifests_analyzed,
            errors,
            warnings,
            info: CheckInfo {
                callables_checked: callables.len() as u32,
                diagnostics_suppressed: suppressed,
            },
        }
    }

    // -- Private helpers --

    fn diagnostic(&self, decl: &CallableDecl, violation: RuleViolation) -> Diagnostic {
        let diagnostic = Diagnostic {
            code: violation.code().to_string(),
            severity: "ERROR".to_string(),
            category: violation.category().to_string(),
            message: violation.to_string(),
            callable: decl.name.clone(),
            file: decl.file.clone(),
            line: decl.line,
            hash: decl.fingerprint(),
            fix_hint: violation.fix_hint(),
            suppressed: false,
            suppress_hint: None,
        };
        self.suppressions.apply(diagnostic)
    }

    pub(crate) fn partition_diagnostics(
        diagnostics: Vec<Diagnostic>,
        errors: &mut Vec<Diagnostic>,
        warnings: &mut Vec<Diagnostic>,
    ) {
        for d in diagnostics {
            match d.severity.as_str() {
                "ERROR" => errors.push(d),
                _ => warnings.push(d),
            }
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
