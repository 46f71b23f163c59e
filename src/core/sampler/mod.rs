//! Metrics sampling core.
//!
//! This module provides the tick-driven sampler behind `sysdeck watch`:
//! instantaneous CPU/memory/swap/frequency percentages, cumulative network
//! and disk counters with derived per-second rates, and fixed-length
//! rolling histories for trend display.

mod diskio;
mod engine;
mod history;
mod metrics;

pub use engine::{Sampler, TICK_INTERVAL_MS};
pub use history::{RollingHistory, HISTORY_LEN};
pub use metrics::{MetricSample, RateSet, SamplerSnapshot, DT_EPSILON};
