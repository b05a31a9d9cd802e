//! The `docsite` application.

use std::path::Path;

use docsite_content::{Catalog, IndexBuilder};
use docsite_core::util::files;
use docsite_core::{Error, Result};
use docsite_updates::{HtmlPanel, HttpSource, LatestUpdates};
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command};
use crate::config::DocsiteConfig;
use crate::config_handlers;

// ============================================================================
// DocsiteCli
// ============================================================================

/// CLI application holding the resolved configuration.
pub struct DocsiteCli {
    name: String,
    config: DocsiteConfig,
    version: String,
}

impl DocsiteCli {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = DocsiteConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }

    pub fn new(name: impl Into<String>, config: DocsiteConfig) -> Self {
        Self {
            name: name.into(),
            config,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn config(&self) -> &DocsiteConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    /// Library crates log through `log`; the subscriber picks those records up.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // A subscriber may already be installed (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(Command::Index {
                content_dir,
                output,
                check,
            }) => {
                self.run_index(content_dir.as_deref(), output.as_deref(), check)
                    .await
            }
            Some(Command::Updates {
                base_url,
                output,
                limit,
            }) => {
                self.run_updates(base_url.as_deref(), output.as_deref(), limit)
                    .await
            }
            Some(Command::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(Command::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            None => {
                println!("{} {} (use --help for usage)", self.name, self.version);
                Ok(())
            }
        }
    }

    async fn run_index(
        &self,
        content_dir: Option<&str>,
        output: Option<&str>,
        check: bool,
    ) -> Result<()> {
        let mut options = self.config.index.to_options(content_dir);
        if let Some(name) = output {
            options = options.with_output_file(name);
        }
        tracing::debug!(?options, "index options");
        let builder = IndexBuilder::new(options, Catalog::default());

        if check {
            let (fresh, report) = builder.check().await?;
            if !fresh {
                return Err(Error::invalid_data(format!(
                    "{} is out of date; run `{}` to regenerate it",
                    report.output.display(),
                    docsite_content::index::REGENERATE_COMMAND
                )));
            }
            println!("{} is up to date", report.output.display());
            return Ok(());
        }

        let report = builder.build().await?;
        println!(
            "Wrote {} ({} documents in {} sections)",
            report.output.display(),
            report.documents,
            report.sections
        );
        Ok(())
    }

    async fn run_updates(
        &self,
        base_url: Option<&str>,
        output: Option<&str>,
        limit: Option<usize>,
    ) -> Result<()> {
        let updates_config = &self.config.updates;
        let base_url = base_url.unwrap_or(&updates_config.base_url);
        let mut settings = updates_config.to_settings();
        if let Some(limit) = limit {
            settings.limit = limit;
        }

        tracing::info!(%base_url, limit = settings.limit, "loading latest updates");
        let source = HttpSource::with_timeout(base_url, updates_config.timeout())?;
        let mut panel = HtmlPanel::new(settings.clone());
        let shown = LatestUpdates::new(source, settings).load(&mut panel).await;
        tracing::debug!(cards = shown.len(), "panel rendered");

        match output.or(updates_config.output.as_deref()) {
            Some(path) => {
                files::write_file(Path::new(path), panel.html()).await?;
                println!("Wrote {} update card(s) to {path}", shown.len());
            }
            None => print!("{}", panel.html()),
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
