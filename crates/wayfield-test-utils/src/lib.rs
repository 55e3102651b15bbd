//! Test utilities for Wayfield development.
//!
//! - [`MapFixture`]: ASCII maps with a glyph legend, applied to a grid's
//!   cells in one call.
//! - [`example_map`]: the 10×8 two-lane scenario with its points of
//!   interest per layer.
//! - [`trace_path`] / [`render_layer`]: follow and draw a built layer.
//! - [`random_map`]: seeded random maps for property tests and benches.
//! - [`init_tracing`]: route `tracing` output to the test harness.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod walk;

pub use fixtures::{default_legend, example_map, random_map, CellSpec, MapFixture, Scenario};
pub use walk::{render_layer, trace_path};

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber writing through the test harness.
///
/// Filter comes from `RUST_LOG`, defaulting to `warn`. Safe to call from
/// every test; only the first call installs anything.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
