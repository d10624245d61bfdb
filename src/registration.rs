//! Registration service: validation pipeline, registry merge, fee accrual.

use crate::errors::ValidationError;
use crate::ledger::PrizePoolLedger;
use crate::registry::SlotRegistry;
use crate::types::{TimeSlot, NUMBER_MAX, NUMBER_MIN};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::info;

/// Validates and applies registration requests against the slot registry and
/// the prize pool ledger.
pub struct RegistrationService {
    registry: Arc<SlotRegistry>,
    ledger: Arc<PrizePoolLedger>,
    /// Flat participation fee per registration call, regardless of how many
    /// numbers were submitted.
    fee: f64,
}

impl RegistrationService {
    pub fn new(registry: Arc<SlotRegistry>, ledger: Arc<PrizePoolLedger>, fee: f64) -> Self {
        Self {
            registry,
            ledger,
            fee,
        }
    }

    /// Register `numbers` for `email` against the slot containing
    /// `timestamp`. Validation short-circuits on the first failure, in
    /// order: past slot, number range, duplicate number. A rejected request
    /// mutates nothing.
    pub fn register(
        &self,
        email: &str,
        numbers: &BTreeSet<u32>,
        timestamp: DateTime<Utc>,
    ) -> Result<TimeSlot, ValidationError> {
        if timestamp < Utc::now() {
            return Err(ValidationError::PastSlot);
        }
        if numbers
            .iter()
            .any(|n| !(NUMBER_MIN..=NUMBER_MAX).contains(n))
        {
            return Err(ValidationError::NumberOutOfRange);
        }

        let slot = TimeSlot::of(timestamp);
        self.registry.merge(slot, email, numbers)?;
        // Read-at-tick-time closure: a registration landing after its
        // slot's tick has fired is simply too late. The entry is never
        // drawn and the fee stays in the settled slot's pool.
        self.ledger.accrue(slot, self.fee);

        info!(%slot, email, count = numbers.len(), "registration accepted");
        Ok(slot)
    }
}
