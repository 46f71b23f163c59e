use serde::{Deserialize, Serialize};

/// Floor applied to the tick delta before rate division. Timer coalescing
/// and suspend/resume can hand us a near-zero or zero dt; dividing by this
/// instead keeps every rate finite.
pub const DT_EPSILON: f64 = 0.001;

/// One tick's raw readings: instantaneous percentages plus the kernel's
/// cumulative byte counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MetricSample {
    pub timestamp: i64, // Unix timestamp
    pub cpu_percent: f64,
    pub mem_percent: f64,
    pub swap_percent: f64,
    pub freq_percent: f64,
    pub net_rx_bytes: u64,
    pub net_tx_bytes: u64,
    pub disk_read_bytes: u64,
    pub disk_write_bytes: u64,
}

/// Per-second deltas between two consecutive samples
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RateSet {
    pub rx_rate: f64,
    pub tx_rate: f64,
    pub read_rate: f64,
    pub write_rate: f64,
}

impl RateSet {
    /// Derive rates from two cumulative samples taken `dt` seconds apart.
    /// Counter resets saturate to a zero delta instead of going negative.
    pub fn between(prev: &MetricSample, now: &MetricSample, dt: f64) -> Self {
        let dt = dt.max(DT_EPSILON);
        Self {
            rx_rate: now.net_rx_bytes.saturating_sub(prev.net_rx_bytes) as f64 / dt,
            tx_rate: now.net_tx_bytes.saturating_sub(prev.net_tx_bytes) as f64 / dt,
            read_rate: now.disk_read_bytes.saturating_sub(prev.disk_read_bytes) as f64 / dt,
            write_rate: now.disk_write_bytes.saturating_sub(prev.disk_write_bytes) as f64 / dt,
        }
    }
}

/// Snapshot handed to renderers after each tick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SamplerSnapshot {
    pub sample: MetricSample,
    pub rates: RateSet,
    /// Heaviest CPU consumer as "name (xx.x%)"
    pub top_process: Option<String>,
}
