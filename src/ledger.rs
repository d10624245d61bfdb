//! Prize pool ledger: accumulated fees per slot.
//!
//! A single `RwLock` guards the whole map so the carry-over move (read the
//! source pool, zero it, add to the target) is atomic as a unit; per-key
//! locking cannot give that for a two-slot mutation.

use crate::types::TimeSlot;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Mapping from slot to accumulated award amount. Amounts never go negative:
/// accrual adds, payout and carry-over drain to zero.
#[derive(Default)]
pub struct PrizePoolLedger {
    pools: RwLock<HashMap<TimeSlot, f64>>,
}

impl PrizePoolLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<TimeSlot, f64>> {
        self.pools.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<TimeSlot, f64>> {
        self.pools.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add the participation fee for one registration event to the slot's
    /// pool, creating the entry if absent.
    pub fn accrue(&self, slot: TimeSlot, fee: f64) {
        *self.write().entry(slot).or_insert(0.0) += fee;
    }

    /// Current pool amount for a slot (zero when no entry exists).
    pub fn amount(&self, slot: TimeSlot) -> f64 {
        self.read().get(&slot).copied().unwrap_or(0.0)
    }

    /// Pay out the slot's pool: reset it to zero and return the amount that
    /// was held.
    pub fn pay_out(&self, slot: TimeSlot) -> f64 {
        let mut pools = self.write();
        pools.insert(slot, 0.0).unwrap_or(0.0)
    }

    /// Carry the slot's pool forward: zero the source and add its amount to
    /// the target slot's pool in one atomic move. Returns the amount moved.
    pub fn carry_over(&self, from: TimeSlot, to: TimeSlot) -> f64 {
        let mut pools = self.write();
        let moved = pools.insert(from, 0.0).unwrap_or(0.0);
        if moved > 0.0 {
            *pools.entry(to).or_insert(0.0) += moved;
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn slot() -> TimeSlot {
        TimeSlot::of(Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap())
    }

    #[test]
    fn test_accrue_accumulates_per_event() {
        let ledger = PrizePoolLedger::new();
        ledger.accrue(slot(), 100.0);
        ledger.accrue(slot(), 100.0);
        assert_eq!(ledger.amount(slot()), 200.0);
    }

    #[test]
    fn test_pay_out_resets_to_zero() {
        let ledger = PrizePoolLedger::new();
        ledger.accrue(slot(), 100.0);

        assert_eq!(ledger.pay_out(slot()), 100.0);
        assert_eq!(ledger.amount(slot()), 0.0);
        // Untouched neighbor.
        assert_eq!(ledger.amount(slot().next()), 0.0);
    }

    #[test]
    fn test_carry_over_moves_full_amount() {
        let ledger = PrizePoolLedger::new();
        ledger.accrue(slot(), 100.0);
        ledger.accrue(slot().next(), 40.0);

        assert_eq!(ledger.carry_over(slot(), slot().next()), 100.0);
        assert_eq!(ledger.amount(slot()), 0.0);
        assert_eq!(ledger.amount(slot().next()), 140.0);
    }

    #[test]
    fn test_carry_over_of_empty_pool_is_noop() {
        let ledger = PrizePoolLedger::new();
        assert_eq!(ledger.carry_over(slot(), slot().next()), 0.0);
        assert_eq!(ledger.amount(slot().next()), 0.0);
    }
}
