//! Diagnostic system for projection errors.
//!
//! Every problem the projection engine finds is a value, not a panic. This
//! crate gives those values a stable shape:
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Site label (where it went wrong)
//! - Notes and suggestions (how to fix)
//!
//! # Error Guarantees
//!
//! The `ErrorGuaranteed` type provides type-level proof that at least one
//! error was emitted.
//!
//! ```text
//! // Can only get ErrorGuaranteed by emitting an error
//! let guarantee = queue.emit_error(diagnostic);
//!
//! // Functions can return ErrorGuaranteed to prove they reported errors
//! fn run(model: &Model) -> Result<Report, ErrorGuaranteed> { ... }
//! ```

mod diagnostic;
mod error_code;
mod guarantee;
pub mod queue;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
