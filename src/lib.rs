//! Tombola - recurring numbers lottery service.
//!
//! Participants register chosen numbers against future minute-granularity
//! time slots; a periodic job draws a number for each closing slot, settles
//! winnings, and carries unclaimed prize pools forward.

pub mod api;
pub mod config;
pub mod draw;
pub mod errors;
pub mod history;
pub mod ledger;
pub mod query;
pub mod registration;
pub mod registry;
pub mod scheduler;
pub mod settlement;
pub mod types;

pub use config::LotteryConfig;
pub use draw::{DrawEngine, FixedSource, NumberSource, UniformSource};
pub use errors::{ConfigError, EngineError, NotifyError, SchedulerError, ValidationError};
pub use history::HistoryStore;
pub use ledger::PrizePoolLedger;
pub use query::HistoricalQueryService;
pub use registration::RegistrationService;
pub use registry::SlotRegistry;
pub use scheduler::{DrawScheduler, SchedulerHandle};
pub use settlement::{LogNotifier, SettlementHandler, WinnerNotifier};
pub use types::{DrawResult, DrawSummary, HistoryRecord, TimeSlot, NUMBER_MAX, NUMBER_MIN};
