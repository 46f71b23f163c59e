//! Best-effort hardware and network probes.
//!
//! Every probe returns a [`ProbeResult`] instead of an error: an absent
//! sensor, a missing diagnostic binary or an unreachable network all
//! collapse to `Unavailable`, which the presentation layer renders as
//! "N/A" (or a probe-specific sentinel such as the GPU's "Unknown").

use std::fmt;

mod battery;
mod fans;
mod gpu;
mod host;
mod hwmon;
mod net;
mod session;
mod temperature;

pub use battery::battery_status;
pub use fans::{fan_rpm, fan_rpm_at};
pub use gpu::{gpu_model, opengl_version, vulkan_version};
pub use host::{collect_host_summary, HostSummary};
pub use net::{fetch_public_ip, local_ip, PUBLIC_IP_TIMEOUT};
pub use session::{desktop_environment, login_shell, reload_session, session_type};
pub use temperature::{cpu_temperature, cpu_temperature_at};

/// Outcome of a single best-effort probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    Ready(String),
    Unavailable,
}

impl ProbeResult {
    pub fn ready<S: Into<String>>(value: S) -> Self {
        ProbeResult::Ready(value.into())
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ProbeResult::Ready(_))
    }

    /// The probed value, or the universal "N/A" sentinel
    pub fn display(&self) -> &str {
        self.display_or("N/A")
    }

    /// The probed value, or a call-site sentinel
    pub fn display_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            ProbeResult::Ready(value) => value,
            ProbeResult::Unavailable => fallback,
        }
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}
