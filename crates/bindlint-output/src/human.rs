use crate::human_helpers::format_diagnostic_human;
use crate::OutputFormatter;
use bindlint_validate::types::{CheckResult, ExplainResult};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        if result.errors.is_empty() && result.warnings.is_empty() {
            return String::new(); // Clean check = empty stdout
        }

        let mut out = String::new();

        for d in &result.errors {
            out.push_str(&format_diagnostic_human(d));
        }
        for d in &result.warnings {
            out.push_str(&format_diagnostic_human(d));
        }

        // Summary line
        out.push_str(&format!(
            "\n{} error(s), {} warning(s) across {} callable(s)\n",
            result.errors.len(),
            result.warnings.len(),
            result.info.callables_checked,
        ));

        out
    }

    fn format_explain(&self, result: &ExplainResult) -> String {
        let mut out = String::new();

        out.push_str(&format!("{} — {}\n", result.code, result.title));
        out.push_str(&format!("  {}\n\n", result.summary));

        for detail in &result.details {
            out.push_str(&format!("  - {}\n", detail));
        }

        out.push_str(&format!("\n  fix: {}\n", result.fix));
        out
    }
}
