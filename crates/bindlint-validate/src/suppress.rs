use std::collections::HashSet;

use crate::types::Diagnostic;

/// Manages suppressed diagnostic codes.
///
/// When a code is suppressed, diagnostics with that code are:
/// - Changed to severity "INFO" and marked suppressed=true
/// - Code changed to "S001"
/// - Given a suppress_hint naming the original code
///
/// Suppressed diagnostics stay in the output so a reader can see what was
/// silenced, but they never fail the pass.
#[derive(Debug, Default)]
pub struct SuppressionManager {
    suppressed_codes: HashSet<String>,
}

impl SuppressionManager {
    pub fn new() -> Self {
        Self {
            suppressed_codes: HashSet::new(),
        }
    }

    /// Add a code to suppress (e.g., "B002").
    pub fn suppress(&mut self, code: &str) {
        self.suppressed_codes.insert(code.to_string());
    }

    /// Check if a code is currently suppressed.
    pub fn is_suppressed(&self, code: &str) -> bool {
        self.suppressed_codes.contains(code)
    }

    /// Apply suppression to a diagnostic, returning the modified diagnostic.
    /// If the code is not suppressed, returns the diagnostic unchanged.
    pub fn apply(&self, mut diagnostic: Diagnostic) -> Diagnostic {
        if self.is_suppressed(&diagnostic.code) {
            diagnostic.suppress_hint = Some(format!(
                "Suppressed {} via config or --suppress",
                diagnostic.code
            ));
            diagnostic.suppressed = true;
            diagnostic.code = "S001".to_string();
            diagnostic.severity = "INFO".to_string();
        }
        diagnostic
    }

    /// Number of active suppressions.
    pub fn count(&self) -> usize {
        self.suppressed_codes.len()
    }
}
