//! GPU identity and graphics API versions via the host's diagnostic tools.
//!
//! glxinfo answers for the renderer actually in use; lspci is the fallback
//! when no GL context can be created (headless, nested session). Both are
//! presence-checked subprocesses, never bundled.

use std::process::Command;

use regex::Regex;

use super::ProbeResult;

/// Renderer device name. Renders as "Unknown" (not "N/A") at call sites.
pub fn gpu_model() -> ProbeResult {
    if let Some(out) = run_tool("glxinfo", &["-B"]) {
        if let Some(device) = value_after(&out, "Device:") {
            return ProbeResult::Ready(device);
        }
    }

    if let Some(out) = run_tool("lspci", &[]) {
        let vga = out
            .lines()
            .find_map(|line| line.split_once("VGA compatible controller:"))
            .map(|(_, rest)| rest.trim().to_string())
            .filter(|s| !s.is_empty());
        if let Some(vga) = vga {
            return ProbeResult::Ready(vga);
        }
    }

    ProbeResult::Unavailable
}

/// OpenGL version string from glxinfo
pub fn opengl_version() -> ProbeResult {
    match run_tool("glxinfo", &["-B"]).and_then(|out| value_after(&out, "OpenGL version string:")) {
        Some(version) => ProbeResult::Ready(version),
        None => ProbeResult::Unavailable,
    }
}

/// Vulkan instance version from vulkaninfo
pub fn vulkan_version() -> ProbeResult {
    let Some(out) = run_tool("vulkaninfo", &["--summary"]) else {
        return ProbeResult::Unavailable;
    };
    match extract_vulkan_version(&out) {
        Some(version) => ProbeResult::Ready(version),
        None => ProbeResult::Unavailable,
    }
}

fn extract_vulkan_version(output: &str) -> Option<String> {
    let re = Regex::new(r"Vulkan Instance Version: (\d+\.\d+\.\d+)").ok()?;
    re.captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn run_tool(cmd: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(cmd).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Trimmed remainder of the first line containing `key`, split at the
/// key's colon
fn value_after(output: &str, key: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| line.split_once(key))
        .map(|(_, rest)| rest.trim().to_string())
        .filter(|s| !s.is_empty())
}
