//! # Booking Module
//!
//! The multi-step experience booking flow and its confirmation ticket.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking Flow                                         │
//! │                                                                         │
//! │  ChoosingExperience ─┐                                                  │
//! │  ChoosingTime        │  All fields are mutable simultaneously while     │
//! │  ChoosingParticipants├─ the draft is open; no step forces the next.     │
//! │  ChoosingPayment    ─┘                                                  │
//! │            │                                                            │
//! │            │  confirm()  (explicit action, never automatic)             │
//! │            ▼                                                            │
//! │       Confirmed ──► Ticket (display-only projection)                    │
//! │            │                                                            │
//! │            └── confirm() again: idempotent, same Ticket                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Once confirmed, the draft is immutable: setters fail with
//! [`CoreError::AlreadyConfirmed`]. Which fields must be populated before
//! confirming is an explicit [`ValidationPolicy`], not an implicit rule.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::pricing::GroupPricing;
use crate::types::{ExperienceType, PaymentMethod, TimeSlot};
use crate::validation::validate_participant_count;

// =============================================================================
// Validation Policy
// =============================================================================

/// Which preconditions `confirm` enforces.
///
/// The original flow had defaults for every field, which made confirmation
/// always valid; whether that was intent or oversight is undecidable from the
/// source. Making the rules a reviewable configuration keeps both readings
/// expressible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ValidationPolicy {
    /// Require at least one participant.
    pub require_participant: bool,

    /// Require a payment method to have been picked.
    pub require_payment: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        ValidationPolicy {
            require_participant: true,
            require_payment: true,
        }
    }
}

impl ValidationPolicy {
    /// The permissive policy matching the observed behavior (defaults exist
    /// for every field, so confirmation never fails).
    pub const fn permissive() -> Self {
        ValidationPolicy {
            require_participant: false,
            require_payment: false,
        }
    }
}

// =============================================================================
// Ticket
// =============================================================================

/// The read-only summary produced once a draft is confirmed.
///
/// Display-only: the reference is a placeholder QR payload, not a durable
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub experience: ExperienceType,
    pub time_slot: TimeSlot,
    pub total: Money,
    pub reference: String,
}

// =============================================================================
// Booking Draft
// =============================================================================

/// The mutable, in-progress state of a reservation before confirmation.
///
/// Defaults mirror the booking screen's initial state: citrus picking at
/// 09:00, one adult, Apple Pay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    experience: ExperienceType,
    time_slot: TimeSlot,
    adults: u32,
    children: u32,
    payment: Option<PaymentMethod>,
    ticket: Option<Ticket>,
}

impl BookingDraft {
    /// Creates a draft with the screen's initial defaults.
    pub fn new() -> Self {
        BookingDraft {
            experience: ExperienceType::default(),
            time_slot: TimeSlot::new("09:00", false),
            adults: 1,
            children: 0,
            payment: Some(PaymentMethod::default()),
            ticket: None,
        }
    }

    /// Creates a draft with no payment method preselected.
    ///
    /// Pair with the default [`ValidationPolicy`] to actually require the
    /// user to pick one.
    pub fn without_payment_default() -> Self {
        BookingDraft {
            payment: None,
            ..BookingDraft::new()
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn experience(&self) -> ExperienceType {
        self.experience
    }

    pub fn time_slot(&self) -> &TimeSlot {
        &self.time_slot
    }

    pub fn adults(&self) -> u32 {
        self.adults
    }

    pub fn children(&self) -> u32 {
        self.children
    }

    pub fn payment(&self) -> Option<PaymentMethod> {
        self.payment
    }

    pub fn is_confirmed(&self) -> bool {
        self.ticket.is_some()
    }

    /// The ticket, if the draft has been confirmed.
    pub fn ticket(&self) -> Option<&Ticket> {
        self.ticket.as_ref()
    }

    // -------------------------------------------------------------------------
    // Mutators (rejected once confirmed)
    // -------------------------------------------------------------------------

    fn ensure_open(&self) -> CoreResult<()> {
        if self.ticket.is_some() {
            return Err(CoreError::AlreadyConfirmed);
        }
        Ok(())
    }

    pub fn set_experience(&mut self, experience: ExperienceType) -> CoreResult<()> {
        self.ensure_open()?;
        self.experience = experience;
        Ok(())
    }

    pub fn set_time_slot(&mut self, slot: TimeSlot) -> CoreResult<()> {
        self.ensure_open()?;
        self.time_slot = slot;
        Ok(())
    }

    /// Sets both participant counters.
    ///
    /// Counts are validated against the shared participant bounds; whether a
    /// zero total is confirmable is the policy's decision, not this setter's.
    pub fn set_participants(&mut self, adults: u32, children: u32) -> CoreResult<()> {
        self.ensure_open()?;
        validate_participant_count("adults", adults)?;
        validate_participant_count("children", children)?;
        self.adults = adults;
        self.children = children;
        Ok(())
    }

    pub fn set_payment(&mut self, method: PaymentMethod) -> CoreResult<()> {
        self.ensure_open()?;
        self.payment = Some(method);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Confirmation
    // -------------------------------------------------------------------------

    /// Confirms the draft, deriving its [`Ticket`].
    ///
    /// ## Idempotence
    /// Confirming an already-confirmed draft returns the existing ticket
    /// unchanged; it never re-derives or re-prices.
    ///
    /// ## Errors
    /// Precondition failures per the supplied [`ValidationPolicy`]. These
    /// correspond to disabled confirm buttons in the view layer.
    pub fn confirm(
        &mut self,
        pricing: &GroupPricing,
        policy: &ValidationPolicy,
    ) -> CoreResult<Ticket> {
        if let Some(ticket) = &self.ticket {
            return Ok(ticket.clone());
        }

        if policy.require_participant && self.adults + self.children == 0 {
            return Err(CoreError::EmptySelection);
        }

        if policy.require_payment && self.payment.is_none() {
            return Err(CoreError::Validation(ValidationError::Required {
                field: "payment method".to_string(),
            }));
        }

        let quote = pricing.price(self.adults, self.children);
        let ticket = Ticket {
            experience: self.experience,
            time_slot: self.time_slot.clone(),
            total: quote.total,
            reference: format!("QR-{}", Uuid::new_v4().simple()),
        };

        self.ticket = Some(ticket.clone());
        Ok(ticket)
    }
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_screen() {
        let draft = BookingDraft::new();
        assert_eq!(draft.experience(), ExperienceType::Citrus);
        assert_eq!(draft.time_slot().label, "09:00");
        assert_eq!(draft.adults(), 1);
        assert_eq!(draft.children(), 0);
        assert_eq!(draft.payment(), Some(PaymentMethod::ApplePay));
        assert!(!draft.is_confirmed());
    }

    #[test]
    fn test_fields_mutable_in_any_order() {
        let mut draft = BookingDraft::new();
        draft.set_payment(PaymentMethod::Mada).unwrap();
        draft.set_participants(2, 2).unwrap();
        draft.set_time_slot(TimeSlot::new("16:30", true)).unwrap();
        draft.set_experience(ExperienceType::Workshop).unwrap();

        assert_eq!(draft.experience(), ExperienceType::Workshop);
        assert_eq!(draft.time_slot().label, "16:30");
    }

    #[test]
    fn test_confirm_derives_ticket() {
        let mut draft = BookingDraft::new();
        draft.set_participants(2, 2).unwrap();

        let ticket = draft
            .confirm(&GroupPricing::default(), &ValidationPolicy::default())
            .unwrap();

        assert_eq!(ticket.experience, ExperienceType::Citrus);
        // 2 adults + 2 children with the group discount: 128 SAR
        assert_eq!(ticket.total.sar(), 128);
        assert!(ticket.reference.starts_with("QR-"));
        assert!(draft.is_confirmed());
    }

    #[test]
    fn test_confirm_is_idempotent() {
        let mut draft = BookingDraft::new();
        draft.set_participants(1, 0).unwrap();

        let pricing = GroupPricing::default();
        let policy = ValidationPolicy::default();
        let first = draft.confirm(&pricing, &policy).unwrap();
        let second = draft.confirm(&pricing, &policy).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_confirmed_draft_is_immutable() {
        let mut draft = BookingDraft::new();
        draft
            .confirm(&GroupPricing::default(), &ValidationPolicy::default())
            .unwrap();

        assert!(matches!(
            draft.set_experience(ExperienceType::Tour),
            Err(CoreError::AlreadyConfirmed)
        ));
        assert!(matches!(
            draft.set_participants(3, 0),
            Err(CoreError::AlreadyConfirmed)
        ));
    }

    #[test]
    fn test_policy_requires_participant() {
        let mut draft = BookingDraft::new();
        draft.set_participants(0, 0).unwrap();

        let err = draft
            .confirm(&GroupPricing::default(), &ValidationPolicy::default())
            .unwrap_err();
        assert!(matches!(err, CoreError::EmptySelection));

        // The permissive policy reproduces the observed always-valid flow.
        let ticket = draft
            .confirm(&GroupPricing::default(), &ValidationPolicy::permissive())
            .unwrap();
        assert_eq!(ticket.total.sar(), 0);
    }

    #[test]
    fn test_policy_requires_payment() {
        let mut draft = BookingDraft::without_payment_default();

        let err = draft
            .confirm(&GroupPricing::default(), &ValidationPolicy::default())
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        draft.set_payment(PaymentMethod::StcPay).unwrap();
        assert!(draft
            .confirm(&GroupPricing::default(), &ValidationPolicy::default())
            .is_ok());
    }
}
