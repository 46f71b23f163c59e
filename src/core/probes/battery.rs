//! Battery charge and power source via the battery crate.

use battery::{Manager, State};

use super::ProbeResult;

/// "{pct}% (Plugged)" / "{pct}% (Battery)", Unavailable on desktops
pub fn battery_status() -> ProbeResult {
    match read_first_battery() {
        Some(text) => ProbeResult::Ready(text),
        None => ProbeResult::Unavailable,
    }
}

fn read_first_battery() -> Option<String> {
    let manager = Manager::new().ok()?;
    let battery = manager.batteries().ok()?.next()?.ok()?;

    let percent = (battery.state_of_charge().value * 100.0).round() as u32;
    let plugged = matches!(battery.state(), State::Charging | State::Full);
    let source = if plugged { "Plugged" } else { "Battery" };

    Some(format!("{}% ({})", percent, source))
}
