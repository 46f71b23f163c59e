//! Fan speed probing over hwmon tachometer inputs.

use std::path::Path;

use super::hwmon;
use super::ProbeResult;

const HWMON_ROOT: &str = "/sys/class/hwmon";

pub fn fan_rpm() -> ProbeResult {
    fan_rpm_at(Path::new(HWMON_ROOT))
}

/// First nonzero fan reading across all chips. Sensors that exist but all
/// read zero report an explicit "0 RPM"; no tachometers at all is
/// Unavailable.
pub fn fan_rpm_at(root: &Path) -> ProbeResult {
    let mut saw_sensor = false;

    for chip in hwmon::chip_dirs(root) {
        for input in hwmon::fan_inputs(&chip) {
            saw_sensor = true;
            let rpm = hwmon::read_trimmed(&input).and_then(|s| s.parse::<u64>().ok());
            if let Some(rpm) = rpm.filter(|&r| r > 0) {
                return ProbeResult::ready(format!("{} RPM", rpm));
            }
        }
    }

    if saw_sensor {
        ProbeResult::ready("0 RPM")
    } else {
        ProbeResult::Unavailable
    }
}
