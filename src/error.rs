//! # Error Types
//!
//! This module defines error types used throughout the epos library.
//!
//! Validation failures carry the offending field together with the range or
//! set it accepts. Malformed device replies are not errors: they come back as
//! a [`Response`](crate::protocol::Response) with `success == false`.

use thiserror::Error;

/// Main error type for epos operations
#[derive(Debug, Error)]
pub enum EposError {
    /// An attribute assignment was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The element kind exists in the protocol but is not supported yet
    #[error("element \"{element}\" is not implemented")]
    Unimplemented { element: &'static str },

    /// Untyped input named an element kind we do not know
    #[error("unknown element \"{0}\"")]
    UnknownElement(String),

    /// Untyped input named an attribute the element does not carry
    #[error("element \"{element}\" has no attribute \"{attribute}\"")]
    UnknownAttribute {
        element: &'static str,
        attribute: String,
    },

    /// Markup could not be written
    #[error("XML error: {0}")]
    Xml(String),

    /// Transport-level errors (connection, timeout, I/O)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid printer configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// JSON input could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejected attribute assignment.
///
/// The previously stored value is always left untouched when one of these is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("\"{field}\" must be between {min} and {max} inclusive, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },

    #[error("\"{field}\" must be an integer, got {value:?}")]
    NotAnInteger { field: &'static str, value: String },

    #[error("\"{field}\" must be one of [{allowed}], got {value:?}")]
    NotInSet {
        field: &'static str,
        allowed: String,
        value: String,
    },

    #[error("\"{field}\" must be true or false, got {value:?}")]
    NotABool { field: &'static str, value: String },
}

impl ValidationError {
    /// Name of the field whose assignment failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::OutOfRange { field, .. }
            | Self::NotAnInteger { field, .. }
            | Self::NotInSet { field, .. }
            | Self::NotABool { field, .. } => field,
        }
    }
}

/// Result type for epos operations.
pub type Result<T> = std::result::Result<T, EposError>;
