//! Wire projection driver.
//!
//! Loads a declaration model, runs the projection engine once per consumer
//! and reports the projected names together with the run's diagnostics.
//!
//! # Tracing
//!
//! Set `WIRE_LOG` (or `RUST_LOG`) to an `EnvFilter` directive to get
//! hierarchical engine traces on stderr; see [`logging`].

pub mod cli;
pub mod commands;
pub mod driver;
pub mod logging;
pub mod model;
pub mod target;

pub use driver::{run, RunOptions, TargetReport};
pub use model::{LoadError, LoadedModel, Model};
pub use target::Target;
