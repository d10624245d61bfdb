//! Periodic draw scheduler.
//!
//! One timer task fires once per slot boundary and runs the draw engine;
//! each draw result is pushed over a typed channel to a single settlement
//! consumer. Missed ticks are skipped, never run concurrently.

use crate::draw::DrawEngine;
use crate::errors::SchedulerError;
use crate::settlement::SettlementHandler;
use crate::types::{DrawResult, TimeSlot};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::info;

/// Wires the draw engine and settlement handler to a recurring timer.
pub struct DrawScheduler {
    engine: Arc<DrawEngine>,
    settlement: Arc<SettlementHandler>,
    period: Duration,
}

/// Handles to the running timer and settlement tasks. Dropping the handle
/// leaves the tasks running; `shutdown` aborts them and drops in-flight
/// state (nothing is persisted).
#[derive(Debug)]
pub struct SchedulerHandle {
    timer: JoinHandle<()>,
    consumer: JoinHandle<()>,
}

impl SchedulerHandle {
    pub fn shutdown(&self) {
        self.timer.abort();
        self.consumer.abort();
    }
}

impl DrawScheduler {
    pub fn new(
        engine: Arc<DrawEngine>,
        settlement: Arc<SettlementHandler>,
        period: Duration,
    ) -> Self {
        Self {
            engine,
            settlement,
            period,
        }
    }

    /// Start the periodic draw job. Failing to start is fatal to the
    /// service: a lottery without its draw engine must not run.
    pub fn start(self) -> Result<SchedulerHandle, SchedulerError> {
        if self.period < Duration::from_secs(1) {
            return Err(SchedulerError::InvalidPeriod);
        }

        let (tx, mut rx) = mpsc::unbounded_channel::<DrawResult>();

        let settlement = self.settlement;
        let consumer = tokio::spawn(async move {
            // Single consumer: settlements for consecutive slots never
            // interleave.
            while let Some(result) = rx.recv().await {
                settlement.settle(result).await;
            }
        });

        let engine = self.engine;
        let period = self.period;
        let timer = tokio::spawn(async move {
            // Align the first firing to the next period boundary so slots
            // close at the time their name says.
            let period_secs = period.as_secs() as i64;
            let now = Utc::now().timestamp();
            let until_boundary = period_secs - now.rem_euclid(period_secs);
            tokio::time::sleep(Duration::from_secs(until_boundary as u64)).await;

            let mut ticker = tokio::time::interval(period);
            // A tick still running when the next is due suppresses that
            // firing; the engine never draws two slots concurrently.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                let slot = TimeSlot::of(Utc::now());
                info!(%slot, "drawing job fired");
                let result = engine.draw_for(slot);
                if tx.send(result).is_err() {
                    // Consumer gone, nothing left to settle into.
                    break;
                }
            }
        });

        info!(period_secs = self.period.as_secs(), "draw scheduler started");
        Ok(SchedulerHandle { timer, consumer })
    }
}
