//! # Passport Module
//!
//! The visitor's citrus passport: a capacity-bounded collection of farm
//! visit stamps. Re-visiting a farm does not duplicate its stamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::PASSPORT_CAPACITY;

/// A single collected farm stamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Stamp {
    /// The farm the stamp commemorates.
    pub farm: String,

    /// Placeholder QR reference printed under the stamp ("QR-OF-2030-01").
    pub reference: String,

    #[ts(as = "String")]
    pub collected_at: DateTime<Utc>,
}

/// The visitor's stamp book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passport {
    stamps: Vec<Stamp>,
}

impl Passport {
    pub fn new() -> Self {
        Passport { stamps: Vec::new() }
    }

    /// Adds a stamp.
    ///
    /// Idempotent per farm: if a stamp for the same farm is already present,
    /// the passport is unchanged and `Ok(false)` is returned.
    ///
    /// ## Errors
    /// [`CoreError::PassportFull`] when all pages are stamped.
    pub fn add_stamp(&mut self, stamp: Stamp) -> CoreResult<bool> {
        if self.stamps.iter().any(|s| s.farm == stamp.farm) {
            return Ok(false);
        }

        if self.stamps.len() >= PASSPORT_CAPACITY {
            return Err(CoreError::PassportFull {
                capacity: PASSPORT_CAPACITY,
            });
        }

        self.stamps.push(stamp);
        Ok(true)
    }

    pub fn stamps(&self) -> &[Stamp] {
        &self.stamps
    }

    pub fn stamp_count(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_full(&self) -> bool {
        self.stamps.len() >= PASSPORT_CAPACITY
    }

    /// Progress label shown on the profile page ("3/10").
    pub fn progress(&self) -> String {
        format!("{}/{}", self.stamps.len(), PASSPORT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(farm: &str) -> Stamp {
        Stamp {
            farm: farm.to_string(),
            reference: format!("QR-{}-2030", farm.to_uppercase()),
            collected_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_stamp() {
        let mut passport = Passport::new();
        assert!(passport.add_stamp(stamp("Orange Farm")).unwrap());
        assert_eq!(passport.stamp_count(), 1);
        assert_eq!(passport.progress(), "1/10");
    }

    #[test]
    fn test_revisit_does_not_duplicate() {
        let mut passport = Passport::new();
        passport.add_stamp(stamp("Orange Farm")).unwrap();
        assert!(!passport.add_stamp(stamp("Orange Farm")).unwrap());
        assert_eq!(passport.stamp_count(), 1);
    }

    #[test]
    fn test_full_passport_rejects_new_farms() {
        let mut passport = Passport::new();
        for i in 0..PASSPORT_CAPACITY {
            passport.add_stamp(stamp(&format!("Farm {i}"))).unwrap();
        }
        assert!(passport.is_full());

        // A re-visit is still fine; a new farm is not.
        assert!(!passport.add_stamp(stamp("Farm 0")).unwrap());
        assert!(matches!(
            passport.add_stamp(stamp("New Farm")),
            Err(CoreError::PassportFull { .. })
        ));
    }
}
