//! # Error Types
//!
//! Domain-specific error types for bustani-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bustani-core errors (this file)                                       │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bustani-session errors (separate crate)                               │
//! │  └── SessionError     - Session/store operation failures               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → SessionError → View layer         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (role string, item id, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//!
//! Note that an empty selection is deliberately NOT always an error: the view
//! layer renders it as a disabled action. `EmptySelection` only surfaces when
//! a caller bypasses the disabled state and tries to finalize anyway.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A role string did not match any defined persona.
    ///
    /// ## When This Occurs
    /// - A navigation request carries a role identifier outside
    ///   visitor/producer/farmer
    ///
    /// The router never silently defaults: an unknown role aborts the
    /// navigation and surfaces to the caller.
    #[error("Unknown role: {0}")]
    InvalidRole(String),

    /// An order or booking was finalized with nothing selected.
    ///
    /// The normal path never reaches this variant (the confirm action is
    /// disabled while the selection is empty); it exists for callers that
    /// drive the core directly.
    #[error("Cannot finalize an empty selection")]
    EmptySelection,

    /// A catalog item id was referenced that the catalog does not contain.
    #[error("Item not in catalog: {0}")]
    UnknownItem(String),

    /// An order id was referenced that the board does not contain.
    #[error("Order not found: {0}")]
    UnknownOrder(String),

    /// A booking draft was mutated after confirmation.
    ///
    /// Confirmed drafts are immutable; the only permitted operation is
    /// re-confirmation, which is a no-op returning the same ticket.
    #[error("Booking is already confirmed and can no longer be edited")]
    AlreadyConfirmed,

    /// An order status was advanced past its terminal state.
    #[error("Order {order_id} is {status}, no further transition exists")]
    InvalidStatusTransition { order_id: String, status: String },

    /// The passport has no room for another stamp.
    #[error("Passport is full ({capacity} stamps)")]
    PassportFull { capacity: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller-supplied values don't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. malformed identifier).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidRole("admin".to_string());
        assert_eq!(err.to_string(), "Unknown role: admin");

        let err = CoreError::InvalidStatusTransition {
            order_id: "ORD-2451".to_string(),
            status: "Delivered".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Order ORD-2451 is Delivered, no further transition exists"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "identifier".to_string(),
        };
        assert_eq!(err.to_string(), "identifier is required");

        let err = ValidationError::OutOfRange {
            field: "adults".to_string(),
            min: 1,
            max: 20,
        };
        assert_eq!(err.to_string(), "adults must be between 1 and 20");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "identifier".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
