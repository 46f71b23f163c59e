//! Desktop session environment, plus the compositor reload hook used by
//! the variant switcher.

use std::env;
use std::path::Path;
use std::process::Command;

use super::ProbeResult;

pub fn desktop_environment() -> ProbeResult {
    env_probe("XDG_CURRENT_DESKTOP")
}

pub fn session_type() -> ProbeResult {
    env_probe("XDG_SESSION_TYPE")
}

/// Basename of $SHELL
pub fn login_shell() -> ProbeResult {
    let Ok(shell) = env::var("SHELL") else {
        return ProbeResult::Unavailable;
    };
    if shell.is_empty() {
        return ProbeResult::Unavailable;
    }

    let name = Path::new(&shell)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or(shell);
    ProbeResult::Ready(name)
}

fn env_probe(var: &str) -> ProbeResult {
    match env::var(var) {
        Ok(value) if !value.is_empty() => ProbeResult::Ready(value),
        _ => ProbeResult::Unavailable,
    }
}

/// Reload command for the running session manager, if one is recognized
fn reload_command() -> Option<&'static [&'static str]> {
    if env::var_os("HYPRLAND_INSTANCE_SIGNATURE").is_some() {
        Some(&["hyprctl", "reload"])
    } else if env::var_os("SWAYSOCK").is_some() {
        Some(&["swaymsg", "reload"])
    } else {
        None
    }
}

/// Ask the running compositor to reload its configuration. Failures are
/// logged and swallowed; an unrecognized session is a no-op.
pub fn reload_session() {
    let Some(cmd) = reload_command() else {
        log::debug!("no recognized session manager to reload");
        return;
    };

    match Command::new(cmd[0]).args(&cmd[1..]).output() {
        Ok(out) if !out.status.success() => {
            log::debug!("session reload exited with {}", out.status);
        }
        Err(e) => log::debug!("session reload failed: {}", e),
        _ => {}
    }
}
