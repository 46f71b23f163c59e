use std::fs;
use std::net::IpAddr;
use std::path::Path;

use sysdeck::core::probes::{cpu_temperature_at, fan_rpm_at, local_ip, ProbeResult};
use tempfile::TempDir;

fn write_chip(root: &Path, dir: &str, name: &str, files: &[(&str, &str)]) {
    let chip = root.join(dir);
    fs::create_dir_all(&chip).unwrap();
    fs::write(chip.join("name"), format!("{}\n", name)).unwrap();
    for (file, content) in files {
        fs::write(chip.join(file), format!("{}\n", content)).unwrap();
    }
}

#[test]
fn test_temperature_from_synthetic_hwmon_tree() {
    let root = TempDir::new().unwrap();
    write_chip(
        root.path(),
        "hwmon0",
        "coretemp",
        &[("temp1_label", "Package id 0"), ("temp1_input", "45000")],
    );

    assert_eq!(cpu_temperature_at(root.path()), ProbeResult::ready("45°C"));
}

#[test]
fn test_temperature_skips_foreign_chips() {
    let root = TempDir::new().unwrap();
    write_chip(
        root.path(),
        "hwmon0",
        "iwlwifi_1",
        &[("temp1_label", "Package id 0"), ("temp1_input", "99000")],
    );

    assert_eq!(cpu_temperature_at(root.path()), ProbeResult::Unavailable);
}

#[test]
fn test_fan_reports_first_nonzero_rpm() {
    let root = TempDir::new().unwrap();
    write_chip(
        root.path(),
        "hwmon0",
        "nct6775",
        &[("fan1_input", "0"), ("fan2_input", "1250")],
    );

    assert_eq!(fan_rpm_at(root.path()), ProbeResult::ready("1250 RPM"));
}

#[test]
fn test_fan_zero_is_distinct_from_missing() {
    let stopped = TempDir::new().unwrap();
    write_chip(stopped.path(), "hwmon0", "nct6775", &[("fan1_input", "0")]);
    assert_eq!(fan_rpm_at(stopped.path()), ProbeResult::ready("0 RPM"));

    let fanless = TempDir::new().unwrap();
    write_chip(fanless.path(), "hwmon0", "coretemp", &[("temp1_input", "40000")]);
    assert_eq!(fan_rpm_at(fanless.path()), ProbeResult::Unavailable);
}

#[test]
fn test_local_ip_is_always_parseable() {
    // Either a routable source address or the loopback fallback
    let ip = local_ip();
    assert!(ip.parse::<IpAddr>().is_ok());
}
