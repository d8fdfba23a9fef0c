use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "bindlint",
    version,
    about = "Contract checker for scripting-layer callable bindings"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Report progress detail on stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Write a default .bindlint/bindlint.json configuration
    Init,

    /// Validate scanner manifests against their declared contracts
    Check {
        /// Manifest files or directories (default: .bindlint/manifests)
        paths: Vec<String>,
        /// Exit non-zero on warnings too
        #[arg(long)]
        strict: bool,
        /// Suppress a specific diagnostic code
        #[arg(long)]
        suppress: Option<String>,
    },

    /// Explain a diagnostic code
    Explain {
        /// Diagnostic code (e.g., B004)
        code: String,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to target (bash, zsh, fish, elvish, powershell)
        shell: String,
    },
}
