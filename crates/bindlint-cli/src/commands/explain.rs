use bindlint_output::OutputFormatter;
use bindlint_validate::catalog;
use bindlint_validate::types::ExplainResult;

/// Run `bindlint explain <code>` — print the rule-catalog entry for a code.
pub fn run(formatter: &dyn OutputFormatter, code: &str) -> i32 {
    let Some(doc) = catalog::lookup(code) else {
        eprintln!("bindlint explain: unknown diagnostic code '{}'", code);
        eprintln!("known codes: B001-B006, S001");
        return 2;
    };

    let result = ExplainResult {
        version: env!("CARGO_PKG_VERSION").to_string(),
        command: "explain".to_string(),
        code: doc.code.to_string(),
        title: doc.title.to_string(),
        summary: doc.summary.to_string(),
        details: doc.details.iter().map(|d| d.to_string()).collect(),
        fix: doc.fix.to_string(),
    };
    print!("{}", formatter.format_explain(&result));
    0
}
