//! Command-line interface for docsite.
//!
//! # Modules
//!
//! - [`cli`]: Argument parsing
//! - [`config`]: `DocsiteConfig` loading via `confyg`
//! - [`config_handlers`]: `docsite config ...` subcommands
//! - [`app`]: `DocsiteCli`, logging setup and command dispatch

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;

pub use app::DocsiteCli;
pub use cli::{CliArgs, Command, ConfigAction, ConfigCommand};
pub use config::{DocsiteConfig, IndexConfig, UpdatesConfig};
