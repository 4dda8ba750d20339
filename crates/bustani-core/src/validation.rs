//! # Validation Module
//!
//! Field validation utilities shared across the core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  └── Business rule validation before core logic runs                   │
//! │                                                                         │
//! │  Booking-flow preconditions (participant present, payment picked)      │
//! │  are NOT here: they are an explicit ValidationPolicy on confirm.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::MAX_PARTICIPANTS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog identifier.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use bustani_core::validation::validate_identifier;
///
/// assert!(validate_identifier("ORD-2451").is_ok());
/// assert!(validate_identifier("").is_err());
/// assert!(validate_identifier("has space").is_err());
/// ```
pub fn validate_identifier(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "identifier".to_string(),
        });
    }

    if id.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "identifier".to_string(),
            max: 50,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "identifier".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches everything)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a participant counter (adults or children).
///
/// ## Rules
/// - Must not exceed MAX_PARTICIPANTS per counter
/// - Zero is allowed here; whether a zero TOTAL is confirmable is the
///   booking ValidationPolicy's call
pub fn validate_participant_count(field: &str, count: u32) -> ValidationResult<()> {
    if count > MAX_PARTICIPANTS {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_PARTICIPANTS as i64,
        });
    }

    Ok(())
}

/// Validates a price in whole SAR.
///
/// ## Rules
/// - Must be non-negative (zero allowed: free items)
pub fn validate_price_sar(sar: i64) -> ValidationResult<()> {
    if sar < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a price multiplier in basis points.
///
/// ## Rules
/// - Between 5000 (0.5x) and 20000 (2.0x); catalog markups are 10000-11000
pub fn validate_multiplier_bps(bps: u32) -> ValidationResult<()> {
    if !(5_000..=20_000).contains(&bps) {
        return Err(ValidationError::OutOfRange {
            field: "price multiplier".to_string(),
            min: 5_000,
            max: 20_000,
        });
    }

    Ok(())
}

/// Validates an outlet rating in tenths of a star.
///
/// ## Rules
/// - Between 0 and 50 (0.0 to 5.0 stars)
pub fn validate_rating_tenths(tenths: u32) -> ValidationResult<()> {
    if tenths > 50 {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: 50,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("ORD-2451").is_ok());
        assert!(validate_identifier("orange").is_ok());
        assert!(validate_identifier("slot_1630").is_ok());

        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("   ").is_err());
        assert!(validate_identifier("has space").is_err());
        assert!(validate_identifier(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  sarah ").unwrap(), "sarah");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"q".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_participant_count() {
        assert!(validate_participant_count("adults", 0).is_ok());
        assert!(validate_participant_count("adults", MAX_PARTICIPANTS).is_ok());
        assert!(validate_participant_count("adults", MAX_PARTICIPANTS + 1).is_err());
    }

    #[test]
    fn test_validate_price_sar() {
        assert!(validate_price_sar(0).is_ok());
        assert!(validate_price_sar(50).is_ok());
        assert!(validate_price_sar(-1).is_err());
    }

    #[test]
    fn test_validate_multiplier_bps() {
        assert!(validate_multiplier_bps(10_000).is_ok());
        assert!(validate_multiplier_bps(11_000).is_ok());
        assert!(validate_multiplier_bps(4_999).is_err());
        assert!(validate_multiplier_bps(20_001).is_err());
    }

    #[test]
    fn test_validate_rating_tenths() {
        assert!(validate_rating_tenths(49).is_ok());
        assert!(validate_rating_tenths(51).is_err());
    }
}
