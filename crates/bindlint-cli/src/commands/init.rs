use std::fs;

use bindlint_core::config::BindlintConfig;

/// Run `bindlint init` — write a default `.bindlint/bindlint.json`.
pub fn run(verbose: bool) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("bindlint init: failed to get current directory: {}", e);
            return 2;
        }
    };

    let bindlint_dir = cwd.join(".bindlint");
    let config_path = bindlint_dir.join("bindlint.json");
    if config_path.exists() {
        eprintln!(
            "bindlint init: {} already exists, leaving it untouched",
            config_path.display()
        );
        return 0;
    }

    if let Err(e) = fs::create_dir_all(bindlint_dir.join("manifests")) {
        eprintln!("bindlint init: failed to create .bindlint: {}", e);
        return 2;
    }

    let config = BindlintConfig::default();
    let content = match serde_json::to_string_pretty(&config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("bindlint init: failed to serialize default config: {}", e);
            return 2;
        }
    };
    if let Err(e) = fs::write(&config_path, content + "\n") {
        eprintln!("bindlint init: failed to write config: {}", e);
        return 2;
    }

    if verbose {
        eprintln!("bindlint init: wrote {}", config_path.display());
    }
    0
}
