use std::error::Error;
use std::path::PathBuf;

use bindlint_core::config::BindlintConfig;
use bindlint_core::types::CallableDecl;
use bindlint_output::OutputFormatter;
use bindlint_validate::engine::Validator;

/// Run `bindlint check [paths…]` — validate scanner manifests.
pub fn run(
    formatter: &dyn OutputFormatter,
    verbose: bool,
    paths: Vec<String>,
    strict: bool,
    suppress: Option<String>,
) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("bindlint check: failed to get current directory: {}", e);
            return 2;
        }
    };

    let config = BindlintConfig::load(&cwd.join(".bindlint"));
    let mut validator = Validator::with_config(&config);
    if let Some(code) = suppress {
        validator.suppress(&code);
    }

    let paths: Vec<PathBuf> = if paths.is_empty() {
        let default = cwd.join(".bindlint").join("manifests");
        if !default.exists() {
            eprintln!(
                "bindlint check: no manifest paths given and {} does not exist. Run `bindlint init` first.",
                default.display()
            );
            return 2;
        }
        vec![default]
    } else {
        paths.into_iter().map(PathBuf::from).collect()
    };

    let loaded = match bindlint_manifest::load_all(&paths, &config.ignore_patterns) {
        Ok(l) => l,
        Err(e) => {
            eprint!("bindlint check: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprint!(": {}", cause);
                source = cause.source();
            }
            eprintln!();
            return 2;
        }
    };

    if verbose {
        eprintln!("bindlint check: loaded {} manifest(s)", loaded.len());
    }

    let analyzed: Vec<String> = loaded
        .iter()
        .map(|m| m.path.display().to_string())
        .collect();
    let callables: Vec<CallableDecl> = loaded
        .into_iter()
        .flat_map(|m| m.manifest.callables)
        .collect();

    let result = validator.check(&callables, analyzed);
    print!("{}", formatter.format_check(&result));

    match result.status.as_str() {
        "error" => 1,
        "warning" if strict => 1,
        _ => 0,
    }
}
