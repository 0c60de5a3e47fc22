//! Tracing configuration for hosts and test runs.
//!
//! Supports three output formats controlled by `SHARPBIND_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event, machine-readable
//!
//! ## Quick start
//!
//! ```bash
//! # Every accessibility decision, as a tree
//! SHARPBIND_LOG=sharpbind_access=debug SHARPBIND_LOG_FORMAT=tree cargo test
//!
//! # Structured query events for tooling
//! SHARPBIND_LOG=sharpbind::query_json=trace SHARPBIND_LOG_FORMAT=json cargo test
//! ```
//!
//! The subscriber is only installed when `SHARPBIND_LOG` (or `RUST_LOG`) is
//! set. Hosts that install their own subscriber simply never call
//! [`init_tracing`].

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
    /// Parse a format name; unknown names fall back to [`LogFormat::Text`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("SHARPBIND_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `SHARPBIND_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("SHARPBIND_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Install the global tracing subscriber.
///
/// Returns `true` if a subscriber was installed by this call. Does nothing
/// when neither `SHARPBIND_LOG` nor `RUST_LOG` is set, or when a global
/// subscriber already exists (so every test may call it). Output goes to
/// stderr.
pub fn init_tracing() -> bool {
    let has_sharpbind_log = std::env::var("SHARPBIND_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_sharpbind_log && !has_rust_log {
        return false;
    }

    let filter = build_filter();
    let installed = match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);

            Registry::default()
                .with(filter)
                .with(tree_layer)
                .try_init()
                .is_ok()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default()
                .with(filter)
                .with(json_layer)
                .try_init()
                .is_ok()
        }
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    };
    installed
}
