//! Settlement: history write, payout or carry-over, winner notification.

use crate::errors::NotifyError;
use crate::history::HistoryStore;
use crate::ledger::PrizePoolLedger;
use crate::types::{DrawResult, HistoryRecord};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Outbound winner notification boundary. Delivery failures are the
/// implementation's concern; settlement never rolls back on them.
#[async_trait]
pub trait WinnerNotifier: Send + Sync {
    async fn notify(&self, email: &str, drawn: u32, share: f64) -> Result<(), NotifyError>;
}

/// Notifier that only logs. Stands in for the mail channel, which lives
/// outside this service.
pub struct LogNotifier;

#[async_trait]
impl WinnerNotifier for LogNotifier {
    async fn notify(&self, email: &str, drawn: u32, share: f64) -> Result<(), NotifyError> {
        info!(recipient = email, drawn, share, "winner notified");
        Ok(())
    }
}

/// Consumes each draw result exactly once: writes the history record and
/// settles the prize pool (payout to winners, or carry-over to the next slot
/// when nobody matched).
pub struct SettlementHandler {
    ledger: Arc<PrizePoolLedger>,
    history: Arc<HistoryStore>,
    notifier: Arc<dyn WinnerNotifier>,
}

impl SettlementHandler {
    pub fn new(
        ledger: Arc<PrizePoolLedger>,
        history: Arc<HistoryStore>,
        notifier: Arc<dyn WinnerNotifier>,
    ) -> Self {
        Self {
            ledger,
            history,
            notifier,
        }
    }

    pub async fn settle(&self, result: DrawResult) {
        if result.participants == 0 {
            info!(slot = %result.slot, "no draw took place, nothing to settle");
            return;
        }
        // Settlement is serialized on a single consumer, so this check
        // cannot race another settle for the same slot.
        if self.history.get(result.slot).is_some() {
            warn!(slot = %result.slot, "slot already settled, dropping duplicate draw result");
            return;
        }

        // Drain the pool before writing the record: the record, the payout,
        // and the notified shares must all reflect the same amount even
        // when a registration accrues a fee mid-settlement.
        let pool = if result.winners.is_empty() {
            self.ledger.carry_over(result.slot, result.slot.next())
        } else {
            self.ledger.pay_out(result.slot)
        };

        let record = HistoryRecord {
            drawn: result.drawn,
            winners: result.winners.clone(),
            pool,
        };
        if !self.history.insert(result.slot, record) {
            warn!(slot = %result.slot, "slot already settled, dropping duplicate draw result");
            return;
        }
        info!(slot = %result.slot, pool, "history record written");

        if result.winners.is_empty() {
            let next = result.slot.next();
            info!(slot = %result.slot, %next, amount = pool, "no winners, pool carried over");
            return;
        }

        let share = pool / result.winners.len() as f64;
        info!(
            slot = %result.slot,
            winners = result.winners.len(),
            amount = pool,
            share,
            "pool paid out"
        );

        // Winners imply a drawn number; guard anyway rather than unwrap.
        let Some(drawn) = result.drawn else {
            warn!(slot = %result.slot, "winners present without a drawn number, skipping notification");
            return;
        };
        for email in &result.winners {
            // Fire-and-forget: a delivery failure never re-queues the draw.
            if let Err(e) = self.notifier.notify(email, drawn, share).await {
                warn!(recipient = email, error = %e, "winner notification failed");
            }
        }
        info!(slot = %result.slot, "winner notification complete");
    }
}
