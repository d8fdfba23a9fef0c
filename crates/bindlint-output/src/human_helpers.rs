use bindlint_validate::types::Diagnostic;

pub(crate) fn format_diagnostic_human(d: &Diagnostic) -> String {
    let severity_label = match d.severity.as_str() {
        "ERROR" => "error",
        "WARNING" => "warning",
        "INFO" => "info",
        _ => "note",
    };

    let mut out = format!(
        "{}[{}]: {}\n  --> {}:{} ({})\n",
        severity_label, d.code, d.message, d.file, d.line, d.callable,
    );

    if !d.hash.is_empty() {
        out.push_str(&format!("   = hash: {}\n", d.hash));
    }

    if let Some(fix) = &d.fix_hint {
        out.push_str(&format!("   = fix: {}\n", fix));
    }

    if d.suppressed {
        if let Some(hint) = &d.suppress_hint {
            out.push_str(&format!("   = {}\n", hint));
        }
    }

    out
}
