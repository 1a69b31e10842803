//! # Error Types
//!
//! Structured error types for lamina_core. Every failure that can reach the
//! user (bad ply tokens, backend validation errors, transport problems,
//! clipboard access) is one variant here, so front ends can decide how to
//! present it without string matching.
//!
//! ## Example
//!
//! ```rust
//! use lamina_core::errors::{LaminaError, LaminaResult};
//!
//! fn parse_angle(token: &str) -> LaminaResult<f64> {
//!     token
//!         .trim()
//!         .parse()
//!         .map_err(|_| LaminaError::invalid_angle(token))
//! }
//!
//! assert_eq!(parse_angle(" 45 "), Ok(45.0));
//! assert_eq!(parse_angle("abc").unwrap_err().error_code(), "INVALID_ANGLE");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for lamina_core operations
pub type LaminaResult<T> = Result<T, LaminaError>;

/// Message shown when the backend fails without a usable `detail`.
pub const GENERIC_SERVER_ERROR: &str = "Server error";

/// Message shown when a request never reached the backend.
pub const GENERIC_NETWORK_ERROR: &str = "Network error: could not reach the server";

/// Structured error type for client operations.
///
/// `Clone` so errors can travel inside GUI messages.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum LaminaError {
    /// A ply-stack token is not a number
    #[error("Invalid angle: \"{token}\"")]
    InvalidAngle { token: String },

    /// The ply stack has no angles at all
    #[error("Ply stack must contain at least one angle")]
    EmptyStack,

    /// Material preset not found in the library
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// The backend answered with a non-success status
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The request never produced a response
    #[error("Network error: {reason}")]
    Network { reason: String },

    /// A success response could not be decoded
    #[error("Unexpected response: {reason}")]
    Decode { reason: String },

    /// Writing to the system clipboard failed
    #[error("Failed to copy to clipboard: {reason}")]
    Clipboard { reason: String },

    /// Settings file could not be read or parsed
    #[error("Configuration error in '{path}': {reason}")]
    Config { path: String, reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl LaminaError {
    /// Create an InvalidAngle error
    pub fn invalid_angle(token: impl Into<String>) -> Self {
        LaminaError::InvalidAngle { token: token.into() }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        LaminaError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a Backend error
    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        LaminaError::Backend {
            status,
            message: message.into(),
        }
    }

    /// Create a Network error
    pub fn network(reason: impl Into<String>) -> Self {
        LaminaError::Network { reason: reason.into() }
    }

    /// Create a Decode error
    pub fn decode(reason: impl Into<String>) -> Self {
        LaminaError::Decode { reason: reason.into() }
    }

    /// Create a Clipboard error
    pub fn clipboard(reason: impl Into<String>) -> Self {
        LaminaError::Clipboard { reason: reason.into() }
    }

    /// Create a Config error
    pub fn config(path: impl Into<String>, reason: impl Into<String>) -> Self {
        LaminaError::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        LaminaError::Internal {
            message: message.into(),
        }
    }

    /// Text suitable for a toast or a terminal line.
    ///
    /// Backend messages are shown verbatim, transport failures get a generic
    /// line (the reason goes to the log); everything else uses `Display`.
    pub fn user_message(&self) -> String {
        match self {
            LaminaError::Backend { message, .. } => message.clone(),
            LaminaError::Network { .. } => GENERIC_NETWORK_ERROR.to_string(),
            LaminaError::Clipboard { .. } => "Failed to copy to clipboard".to_string(),
            other => other.to_string(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            LaminaError::InvalidAngle { .. } => "INVALID_ANGLE",
            LaminaError::EmptyStack => "EMPTY_STACK",
            LaminaError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            LaminaError::Backend { .. } => "BACKEND_ERROR",
            LaminaError::Network { .. } => "NETWORK_ERROR",
            LaminaError::Decode { .. } => "DECODE_ERROR",
            LaminaError::Clipboard { .. } => "CLIPBOARD_ERROR",
            LaminaError::Config { .. } => "CONFIG_ERROR",
            LaminaError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = LaminaError::backend(422, "E1: must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: LaminaError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(LaminaError::EmptyStack.error_code(), "EMPTY_STACK");
        assert_eq!(LaminaError::material_not_found("kevlar").error_code(), "MATERIAL_NOT_FOUND");
        assert_eq!(LaminaError::network("refused").error_code(), "NETWORK_ERROR");
    }

    #[test]
    fn test_invalid_angle_message() {
        assert_eq!(LaminaError::invalid_angle("abc").to_string(), "Invalid angle: \"abc\"");
    }

    #[test]
    fn test_user_message() {
        let backend = LaminaError::backend(422, "E1: must be positive\nE2: must be positive");
        assert_eq!(backend.user_message(), "E1: must be positive\nE2: must be positive");
        assert_eq!(
            LaminaError::clipboard("no display").user_message(),
            "Failed to copy to clipboard"
        );
        assert_eq!(
            LaminaError::network("connection refused").user_message(),
            GENERIC_NETWORK_ERROR
        );
    }
}
