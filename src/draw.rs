//! Draw engine: one drawing per slot over a registry snapshot.

use crate::errors::EngineError;
use crate::registry::SlotRegistry;
use crate::types::{DrawResult, TimeSlot, NUMBER_MAX, NUMBER_MIN};
use rand::Rng;
use std::sync::Arc;
use tracing::{info, warn};

/// Source of the drawn number. Pluggable so tests can pin the outcome while
/// production draws uniformly.
pub trait NumberSource: Send + Sync {
    /// Draw one number in [1, 255].
    fn draw(&self) -> u32;
}

/// Uniform random draw over the full number range.
pub struct UniformSource;

impl NumberSource for UniformSource {
    fn draw(&self) -> u32 {
        rand::thread_rng().gen_range(NUMBER_MIN..=NUMBER_MAX)
    }
}

/// Always draws the same number. Test double.
pub struct FixedSource(pub u32);

impl NumberSource for FixedSource {
    fn draw(&self) -> u32 {
        self.0
    }
}

/// Executes one drawing per scheduler tick: snapshot the slot's registry
/// entry, draw a number, compute winners. Infallible by construction so the
/// periodic scheduler can never be crashed by a draw.
pub struct DrawEngine {
    registry: Arc<SlotRegistry>,
    source: Arc<dyn NumberSource>,
}

impl DrawEngine {
    pub fn new(registry: Arc<SlotRegistry>, source: Arc<dyn NumberSource>) -> Self {
        Self { registry, source }
    }

    /// Run the drawing for `slot`. A slot nobody registered for yields a
    /// zero-participant result with no drawn number; the settlement handler
    /// treats that as a no-op. Any failure inside the drawing is recovered
    /// here as a "no draw" tick so the scheduler keeps running.
    pub fn draw_for(&self, slot: TimeSlot) -> DrawResult {
        match self.try_draw(slot) {
            Ok(result) => result,
            Err(e) => {
                warn!(%slot, error = %e, "drawing failed, treating as no draw");
                DrawResult {
                    slot,
                    drawn: None,
                    winners: Vec::new(),
                    participants: 0,
                }
            }
        }
    }

    fn try_draw(&self, slot: TimeSlot) -> Result<DrawResult, EngineError> {
        let Some(entries) = self.registry.snapshot(slot).filter(|e| !e.is_empty()) else {
            info!(%slot, "no participants registered, skipping draw");
            return Ok(DrawResult {
                slot,
                drawn: None,
                winners: Vec::new(),
                participants: 0,
            });
        };

        let drawn = self.source.draw();
        if !(NUMBER_MIN..=NUMBER_MAX).contains(&drawn) {
            return Err(EngineError::DrawOutOfRange {
                slot: slot.to_string(),
                drawn,
            });
        }
        let mut winners: Vec<String> = entries
            .iter()
            .filter(|(_, numbers)| numbers.contains(&drawn))
            .map(|(email, _)| email.clone())
            .collect();
        winners.sort();

        info!(
            %slot,
            drawn,
            participants = entries.len(),
            winners = winners.len(),
            "drawing complete"
        );

        Ok(DrawResult {
            slot,
            drawn: Some(drawn),
            winners,
            participants: entries.len(),
        })
    }
}
