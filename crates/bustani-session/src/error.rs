//! Session-layer error types.
//!
//! Wraps core errors and adds the few failure modes that only exist once
//! stateful session bookkeeping is involved.

use thiserror::Error;

use bustani_core::CoreError;

/// Session/store operation errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A role-gated operation ran before any role was chosen.
    #[error("No role selected for this session")]
    RoleNotSelected,

    /// A business rule failed in the core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with SessionError.
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_passes_through() {
        let err: SessionError = CoreError::InvalidRole("admin".to_string()).into();
        assert_eq!(err.to_string(), "Unknown role: admin");
    }
}
