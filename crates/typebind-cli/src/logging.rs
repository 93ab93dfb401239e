//! Tracing subscriber setup.
//!
//! The subscriber is only installed when `TYPEBIND_LOG` (or `RUST_LOG`) is
//! set. Events go to stderr so generated output on stdout stays clean.
//!
//! ```bash
//! TYPEBIND_LOG=debug typebind generate model.json -o out
//! TYPEBIND_LOG=typebind_compiler=trace TYPEBIND_LOG_FORMAT=json typebind dump model.json
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn from_env() -> Self {
        match std::env::var("TYPEBIND_LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// `TYPEBIND_LOG` wins over `RUST_LOG` when both are set.
fn build_filter() -> EnvFilter {
    match std::env::var("TYPEBIND_LOG") {
        Ok(directives) => EnvFilter::builder().parse_lossy(directives),
        Err(_) => EnvFilter::from_default_env(),
    }
}

pub fn init_tracing() {
    let has_own = std::env::var("TYPEBIND_LOG").is_ok();
    let has_rust = std::env::var("RUST_LOG").is_ok();
    if !has_own && !has_rust {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
