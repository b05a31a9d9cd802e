//! Latest-updates panel for docsite.
//!
//! # Modules
//!
//! - [`source`]: `DocumentSource` trait and the `reqwest` implementation
//! - [`mock`]: In-memory source for tests
//! - [`settings`]: Panel configuration and fallback records
//! - [`manifest`]: Document list discovery
//! - [`entry`]: Per-document fetch with fallback, concurrent collection, ordering
//! - [`render`]: Card and panel-state HTML
//! - [`panel`]: `LatestUpdates` driver and panel sinks

#![doc = include_str!("../README.md")]

pub mod entry;
pub mod manifest;
pub mod mock;
pub mod panel;
pub mod render;
pub mod settings;
pub mod source;

pub use entry::{UpdateEntry, collect_entries, fetch_entry, latest};
pub use manifest::load_manifest;
pub use mock::MockSource;
pub use panel::{HtmlPanel, LatestUpdates, Panel, UpdatesView};
pub use settings::{FallbackRecord, UpdatesSettings};
pub use source::{DocumentSource, HttpSource};
