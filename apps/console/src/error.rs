//! # Console Error Type
//!
//! What the operator sees when an operation cannot complete.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  Command function                                                       │
//! │  Result<T, ConsoleError>                                                │
//! │         │                                                               │
//! │         ├── InventoryError::NotFound ─────────► NOT_FOUND               │
//! │         ├── InventoryError::CapacityExceeded ─► CAPACITY_EXCEEDED       │
//! │         ├── ValidationError ──────────────────► VALIDATION_ERROR        │
//! │         └── io::Error (terminal gone) ────────► INPUT_CLOSED / INTERNAL │
//! │                                                                         │
//! │  Session loop: prints the message and returns to the menu.             │
//! │  Only INPUT_CLOSED ends the session.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::io;

use serde::Serialize;
use stockroom_core::{InventoryError, ValidationError};

/// Error surfaced by console commands.
///
/// Serializes as:
/// ```json
/// { "code": "NOT_FOUND", "message": "No product found with code 'P042'" }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for console responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Lookup by code missed
    NotFound,

    /// Operator input rejected
    ValidationError,

    /// Inventory at its configured limit
    CapacityExceeded,

    /// Input stream ended (Ctrl-D, closed pipe)
    InputClosed,

    /// Terminal failure
    Internal,
}

impl ConsoleError {
    /// Creates a new console error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ConsoleError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ConsoleError::new(ErrorCode::ValidationError, message)
    }

    /// True when the session cannot continue reading input.
    pub fn is_input_closed(&self) -> bool {
        self.code == ErrorCode::InputClosed
    }
}

/// Converts inventory errors to console errors.
impl From<InventoryError> for ConsoleError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::NotFound(_) => ConsoleError::new(ErrorCode::NotFound, err.to_string()),
            InventoryError::CapacityExceeded { .. } => {
                ConsoleError::new(ErrorCode::CapacityExceeded, err.to_string())
            }
        }
    }
}

impl From<ValidationError> for ConsoleError {
    fn from(err: ValidationError) -> Self {
        ConsoleError::validation(err.to_string())
    }
}

/// Terminal errors: end of input is expected, anything else is logged.
impl From<io::Error> for ConsoleError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            return ConsoleError::new(ErrorCode::InputClosed, "Input closed");
        }
        tracing::error!("Terminal I/O failed: {}", err);
        ConsoleError::new(ErrorCode::Internal, "Terminal I/O failed")
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ConsoleError {}

/// Convenience alias for command results.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_error_mapping() {
        let err: ConsoleError = InventoryError::NotFound("P042".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "No product found with code 'P042'");

        let err: ConsoleError = InventoryError::CapacityExceeded { max: 3 }.into();
        assert_eq!(err.code, ErrorCode::CapacityExceeded);

        let err: ConsoleError = ValidationError::StockNegative.into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Stock cannot be negative");
    }

    #[test]
    fn test_eof_is_input_closed() {
        let err: ConsoleError = io::Error::new(io::ErrorKind::UnexpectedEof, "eof").into();
        assert!(err.is_input_closed());

        let err: ConsoleError = io::Error::new(io::ErrorKind::Other, "boom").into();
        assert_eq!(err.code, ErrorCode::Internal);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ConsoleError::new(ErrorCode::NotFound, "missing");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "missing");
    }
}
