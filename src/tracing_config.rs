//! Tracing configuration for debugging assertion generation.
//!
//! Supports three output formats controlled by `QA_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`, handy for
//!   following one traversal
//! - `json`: One JSON object per span/event, for tooling
//!
//! ## Quick start
//!
//! ```bash
//! # Every expansion and leaf of a traversal
//! QA_LOG=qa_solver=trace QA_LOG_FORMAT=tree <host>
//!
//! # Only pipeline summaries
//! QA_LOG=debug <host>
//! ```
//!
//! The subscriber is only initialised when `QA_LOG` (or `RUST_LOG`) is set,
//! so a host that never asks for logs pays nothing.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Standard flat text lines.
    #[default]
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Read `QA_LOG_FORMAT`.
    fn from_env() -> Self {
        Self::parse(&std::env::var("QA_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `QA_LOG`, falling back to `RUST_LOG`.
///
/// `QA_LOG` takes precedence when both are set. Values use the same
/// syntax as `RUST_LOG` (e.g. `debug`, `qa_solver=trace`).
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("QA_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `QA_LOG` nor `RUST_LOG` is set, or when the host
/// already installed a subscriber. Returns whether one was installed here.
///
/// All output goes to stderr so it never mixes with a host protocol on
/// stdout.
pub fn init_tracing() -> bool {
    let has_qa_log = std::env::var("QA_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_qa_log && !has_rust_log {
        return false;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
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
    }
}
