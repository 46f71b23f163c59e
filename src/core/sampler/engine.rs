use std::cmp::Ordering;
use std::fs;
use std::time::Instant;

use sysinfo::{CpuRefreshKind, MemoryRefreshKind, Networks, ProcessRefreshKind, RefreshKind, System};

use super::diskio;
use super::history::RollingHistory;
use super::metrics::{MetricSample, RateSet, SamplerSnapshot};

/// Nominal milliseconds between ticks
pub const TICK_INTERVAL_MS: u64 = 2000;

const CPUFREQ_CUR: &str = "/sys/devices/system/cpu/cpu0/cpufreq/scaling_cur_freq";
const CPUFREQ_MAX: &str = "/sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_max_freq";

/// Periodic system sampler feeding the rolling trend histories.
///
/// `tick()` is driven by the embedding loop on the nominal cadence; each
/// call refreshes the sysinfo handles, derives rates from the previous
/// sample over a monotonic dt, and pushes the percentage series into the
/// fixed-length histories.
pub struct Sampler {
    system: System,
    networks: Networks,
    last_sample: Option<MetricSample>,
    last_tick: Option<Instant>,
    max_freq_khz: Option<u64>,
    observed_max_mhz: u64,
    pub cpu_history: RollingHistory,
    pub mem_history: RollingHistory,
    pub swap_history: RollingHistory,
    pub freq_history: RollingHistory,
}

impl Sampler {
    pub fn new() -> Self {
        let system = System::new_with_specifics(Self::refresh_kind());
        let networks = Networks::new_with_refreshed_list();

        Self {
            system,
            networks,
            last_sample: None,
            last_tick: None,
            max_freq_khz: read_khz(CPUFREQ_MAX),
            observed_max_mhz: 0,
            cpu_history: RollingHistory::new(),
            mem_history: RollingHistory::new(),
            swap_history: RollingHistory::new(),
            freq_history: RollingHistory::new(),
        }
    }

    fn refresh_kind() -> RefreshKind {
        RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything())
            .with_processes(ProcessRefreshKind::nothing().with_cpu())
    }

    /// Take one sample. Never blocks beyond the sysinfo refresh itself.
    pub fn tick(&mut self) -> SamplerSnapshot {
        let now = Instant::now();
        self.system.refresh_specifics(Self::refresh_kind());
        self.networks.refresh(true);

        let (net_rx, net_tx) = self.network_totals();
        let (disk_read, disk_write) = diskio::read_totals();

        let sample = MetricSample {
            timestamp: chrono::Utc::now().timestamp(),
            cpu_percent: self.system.global_cpu_usage() as f64,
            mem_percent: percent(self.system.used_memory(), self.system.total_memory()),
            swap_percent: percent(self.system.used_swap(), self.system.total_swap()),
            freq_percent: self.freq_percent(),
            net_rx_bytes: net_rx,
            net_tx_bytes: net_tx,
            disk_read_bytes: disk_read,
            disk_write_bytes: disk_write,
        };

        let dt = self
            .last_tick
            .map(|t| now.duration_since(t).as_secs_f64())
            .unwrap_or(TICK_INTERVAL_MS as f64 / 1000.0);

        let rates = match self.last_sample {
            Some(ref prev) => RateSet::between(prev, &sample, dt),
            None => RateSet::default(),
        };

        self.cpu_history.push(sample.cpu_percent);
        self.mem_history.push(sample.mem_percent);
        self.swap_history.push(sample.swap_percent);
        self.freq_history.push(sample.freq_percent);

        self.last_sample = Some(sample);
        self.last_tick = Some(now);

        SamplerSnapshot {
            sample,
            rates,
            top_process: self.top_cpu_process(),
        }
    }

    fn network_totals(&self) -> (u64, u64) {
        self.networks
            .values()
            .fold((0u64, 0u64), |(rx, tx), data| {
                (rx + data.total_received(), tx + data.total_transmitted())
            })
    }

    /// Current CPU frequency as a percentage of the sysfs maximum. When the
    /// cpufreq tree is absent, scale the sysinfo MHz reading against the
    /// fastest value seen so far instead.
    fn freq_percent(&mut self) -> f64 {
        if let Some(max_khz) = self.max_freq_khz.filter(|&m| m > 0) {
            if let Some(cur_khz) = read_khz(CPUFREQ_CUR) {
                return (cur_khz as f64 / max_khz as f64) * 100.0;
            }
        }

        let cur_mhz = self
            .system
            .cpus()
            .iter()
            .map(|cpu| cpu.frequency())
            .max()
            .unwrap_or(0);
        self.observed_max_mhz = self.observed_max_mhz.max(cur_mhz);
        if self.observed_max_mhz == 0 {
            return 0.0;
        }
        (cur_mhz as f64 / self.observed_max_mhz as f64) * 100.0
    }

    fn top_cpu_process(&self) -> Option<String> {
        self.system
            .processes()
            .values()
            .max_by(|a, b| {
                a.cpu_usage()
                    .partial_cmp(&b.cpu_usage())
                    .unwrap_or(Ordering::Equal)
            })
            .map(|proc| {
                format!(
                    "{} ({:.1}%)",
                    proc.name().to_string_lossy(),
                    proc.cpu_usage()
                )
            })
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

fn percent(used: u64, total: u64) -> f64 {
    if total > 0 {
        (used as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn read_khz(path: &str) -> Option<u64> {
    fs::read_to_string(path).ok()?.trim().parse().ok()
}
