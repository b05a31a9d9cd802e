//! Shared errors and file utilities for docsite.
//!
//! This crate has no internal docsite dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: File discovery and path utilities

#![doc = include_str!("../README.md")]

pub mod error;
pub mod util;

pub use error::{Error, Result};
pub use util::files::{FileInfo, FindOptions};
