//! Hexbook: a command-line pattern book.
//!
//! Loads the host's action table (and any solved per-world patterns) from
//! JSON exports, builds a [`hex_registry::PatternRegistry`] from them and
//! drives a [`hex_store::PatternStore`].

use std::sync::Once;

pub mod commands;
mod error;
pub mod host;

pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Install the log subscriber. Only does anything when `RUST_LOG` is set,
/// and only the first time it is called.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
