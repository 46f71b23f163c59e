//! CPU temperature probing.
//!
//! The hwmon sysfs tree is the primary source, filtered to the known CPU
//! chip drivers and their package/die labels. The generic sysinfo
//! component list is the fallback, and the hottest reading anywhere is the
//! last resort.

use std::path::Path;

use sysinfo::Components;

use super::hwmon;
use super::ProbeResult;

const HWMON_ROOT: &str = "/sys/class/hwmon";

const CPU_CHIPS: [&str; 3] = ["coretemp", "k10temp", "zenpower"];
const PREFERRED_LABELS: [&str; 3] = ["Package", "Tdie", "Tctl"];

pub fn cpu_temperature() -> ProbeResult {
    match cpu_temperature_at(Path::new(HWMON_ROOT)) {
        ProbeResult::Ready(value) => ProbeResult::Ready(value),
        ProbeResult::Unavailable => component_temperature(),
    }
}

/// Scan an hwmon tree for a CPU package temperature. The root is a
/// parameter so tests can synthesize one.
pub fn cpu_temperature_at(root: &Path) -> ProbeResult {
    for chip in hwmon::chip_dirs(root) {
        let Some(name) = hwmon::read_trimmed(&chip.join("name")) else {
            continue;
        };
        if !CPU_CHIPS.contains(&name.as_str()) {
            continue;
        }

        for (label, input) in hwmon::temp_sensors(&chip) {
            if !is_preferred_label(&label) {
                continue;
            }
            if let Some(millideg) = hwmon::read_trimmed(&input).and_then(|s| s.parse::<i64>().ok())
            {
                return ProbeResult::ready(format!("{}°C", millideg / 1000));
            }
        }
    }

    ProbeResult::Unavailable
}

/// Generic sensor fallback: prefer package/die labels, else take the
/// hottest component reading.
fn component_temperature() -> ProbeResult {
    let components = Components::new_with_refreshed_list();

    let mut hottest: Option<f32> = None;
    for component in &components {
        let Some(temp) = component.temperature() else {
            continue;
        };
        if is_preferred_label(component.label()) {
            return ProbeResult::ready(format!("{}°C", temp as i64));
        }
        if hottest.map(|h| temp > h).unwrap_or(true) {
            hottest = Some(temp);
        }
    }

    match hottest {
        Some(temp) if temp > 0.0 => ProbeResult::ready(format!("{}°C", temp as i64)),
        _ => ProbeResult::Unavailable,
    }
}

fn is_preferred_label(label: &str) -> bool {
    PREFERRED_LABELS.iter().any(|p| label.contains(p))
}
