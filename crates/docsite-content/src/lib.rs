//! Front-matter extraction and tutorial index generation.
//!
//! This crate provides the content processing shared by the index builder
//! and the latest-updates panel.
//!
//! # Features
//!
//! - Front-matter extraction from markdown text
//! - Category bucketing with alias and fallback rules
//! - Rendering of the aggregated tutorial index

#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod frontmatter;
pub mod index;
pub mod labels;
pub mod metadata;

pub use catalog::{Catalog, CategoryDef};
pub use frontmatter::{extract, parse};
pub use index::{CategoryBucket, IndexBuilder, IndexOptions, IndexReport, IndexedDocument};
pub use labels::Difficulty;
pub use metadata::Metadata;
