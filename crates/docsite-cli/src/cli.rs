//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level arguments for `docsite`.
#[derive(Parser, Debug)]
#[command(name = "docsite", author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "DOCSITE_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// `docsite` subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Regenerate the tutorial index from document front matter.
    Index {
        /// Directory holding the markdown documents.
        #[arg(long)]
        content_dir: Option<String>,

        /// Index file name, relative to the content directory.
        #[arg(short, long)]
        output: Option<String>,

        /// Fail if the index on disk is out of date instead of rewriting it.
        #[arg(long)]
        check: bool,
    },

    /// Render the latest-updates panel from a running site.
    Updates {
        /// Site base URL.
        #[arg(long)]
        base_url: Option<String>,

        /// Write the panel HTML to a file instead of stdout.
        #[arg(short, long)]
        output: Option<String>,

        /// Number of cards to show.
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print version information.
    Version,

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "updates.limit").
        key: String,
    },

    /// Set a configuration value by dotted key.
    Set {
        /// Dotted key (e.g., "updates.limit").
        key: String,

        /// Value to set.
        value: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },

    /// Export configuration as environment variables.
    Export {
        /// Format as Docker --env flags.
        #[arg(long)]
        docker_env: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================
