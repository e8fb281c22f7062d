//! Tracing configuration for inspecting what the scanner and parser do.
//!
//! Supports three output formats controlled by `ESZ_LOG_FORMAT`:
//!
//! - `text` (default): standard `tracing-subscriber` flat output
//! - `tree`: hierarchical indented output via `tracing-tree`
//! - `json`: one JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Program start/finish events with statement and token counts
//! ESZ_LOG=debug cargo bench --bench parser_bench
//!
//! # Every parse step, indented by nesting
//! ESZ_LOG=esz_parser=trace ESZ_LOG_FORMAT=tree cargo test -p esz --test end_to_end_tests
//! ```
//!
//! The subscriber is only initialised when `ESZ_LOG` (or `RUST_LOG`) is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a format name; anything unrecognised is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Read from the `ESZ_LOG_FORMAT` environment variable.
    fn from_env() -> Self {
        Self::parse(&std::env::var("ESZ_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `ESZ_LOG`, falling back to `RUST_LOG`.
///
/// Values use the `RUST_LOG` syntax (e.g. `debug`, `esz_parser=trace`).
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("ESZ_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `ESZ_LOG` nor `RUST_LOG` is set. A second call,
/// or a call after another subscriber was installed, is also a no-op. All
/// output goes to stderr.
pub fn init_tracing() {
    let has_esz_log = std::env::var("ESZ_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_esz_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    let result = match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_writer(std::io::stderr)
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).try_init().map_err(drop)
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).try_init().map_err(drop)
        }
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(drop),
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
