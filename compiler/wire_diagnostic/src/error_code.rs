//! Error codes for all projection diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the category.

use std::fmt;

/// Error codes for all projection diagnostics.
///
/// Format: E#### / W#### where the first digit indicates the category:
/// - E1xxx: Projection errors
/// - E9xxx: Internal errors
/// - W1xxx: Projection warnings
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Projection Errors (E1xxx)
    /// Unknown type (not in the known-type registry or definition table)
    E1001,
    /// `void` used as a wire type
    E1002,
    /// Bare interface used as a wire type
    E1003,
    /// Annotation type used as a wire type
    E1004,
    /// Unsupported nesting (multi-dimensional arrays, nested collections)
    E1005,
    /// Adapter chain does not terminate
    E1006,
    /// Adapter does not adapt the declared type
    E1007,
    /// Adapter identity not declared
    E1008,

    // Internal Errors (E9xxx)
    /// Internal error
    E9001,
    /// Too many errors
    E9002,

    // Projection Warnings (W1xxx)
    /// Ambiguous generic binding resolved by the most-derived rule
    W1001,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E9001,
        ErrorCode::E9002,
        ErrorCode::W1001,
    ];

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
            ErrorCode::W1001 => "W1001",
        }
    }

    /// Short description, used by `--explain`-style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "unknown type",
            ErrorCode::E1002 => "void is not a valid wire type",
            ErrorCode::E1003 => "bare interfaces cannot be wire types",
            ErrorCode::E1004 => "annotation types cannot be wire types",
            ErrorCode::E1005 => "unsupported nesting",
            ErrorCode::E1006 => "adapter cycle",
            ErrorCode::E1007 => "adapter does not adapt the declared type",
            ErrorCode::E1008 => "unknown adapter",
            ErrorCode::E9001 => "internal error",
            ErrorCode::E9002 => "too many errors",
            ErrorCode::W1001 => "ambiguous generic binding",
        }
    }

    /// Check if this is a projection error (E1xxx range).
    pub fn is_projection_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
                | ErrorCode::E1006
                | ErrorCode::E1007
                | ErrorCode::E1008
        )
    }

    /// Check if this is an adapter error.
    pub fn is_adapter_error(&self) -> bool {
        matches!(self, ErrorCode::E1006 | ErrorCode::E1007 | ErrorCode::E1008)
    }

    /// Check if this is an internal error (E9xxx range).
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001 | ErrorCode::E9002)
    }

    /// Check if this is a warning code (W prefix).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W1001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
