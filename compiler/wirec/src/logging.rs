//! Tracing setup for the driver.
//!
//! - `WIRE_LOG=wire_types=debug`: adapter redirects, shape matches, cache hits
//! - `WIRE_LOG=wire_types=trace`: every dispatch step
//!
//! `RUST_LOG` is read when `WIRE_LOG` is unset.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the hierarchical stderr subscriber.
///
/// Silent unless a filter variable is set or `verbose` is on. Safe to call
/// multiple times.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let filter = match EnvFilter::try_from_env("WIRE_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
        {
            Ok(filter) => filter,
            Err(_) if verbose => EnvFilter::new("debug"),
            Err(_) => return,
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_targets(true),
            )
            .init();
    });
}
