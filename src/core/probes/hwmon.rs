//! Helpers for walking the hwmon sysfs tree.

use std::fs;
use std::path::{Path, PathBuf};

/// Chip directories under an hwmon root, sorted for stable iteration
pub(crate) fn chip_dirs(root: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = match fs::read_dir(root) {
        Ok(entries) => entries
            .flatten()
            .map(|e| e.path())
            .filter(|p| p.is_dir())
            .collect(),
        Err(_) => Vec::new(),
    };
    dirs.sort();
    dirs
}

pub(crate) fn read_trimmed(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok().map(|s| s.trim().to_string())
}

/// Labelled temperature sensors of a chip as (label, input_path) pairs.
/// Unlabelled inputs are skipped; the label is what identifies the die.
pub(crate) fn temp_sensors(chip: &Path) -> Vec<(String, PathBuf)> {
    let mut sensors = Vec::new();
    let Ok(entries) = fs::read_dir(chip) else {
        return sensors;
    };

    for entry in entries.flatten() {
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !file_name.starts_with("temp") || !file_name.ends_with("_label") {
            continue;
        }
        let Some(label) = read_trimmed(&entry.path()) else {
            continue;
        };
        let input = chip.join(file_name.replace("_label", "_input"));
        sensors.push((label, input));
    }

    sensors.sort_by(|a, b| a.1.cmp(&b.1));
    sensors
}

/// Fan tachometer inputs of a chip, sorted
pub(crate) fn fan_inputs(chip: &Path) -> Vec<PathBuf> {
    let mut inputs: Vec<PathBuf> = match fs::read_dir(chip) {
        Ok(entries) => entries
            .flatten()
            .map(|e| e.path())
            .filter(|p| {
                p.file_name()
                    .map(|n| {
                        let name = n.to_string_lossy();
                        name.starts_with("fan") && name.ends_with("_input")
                    })
                    .unwrap_or(false)
            })
            .collect(),
        Err(_) => Vec::new(),
    };
    inputs.sort();
    inputs
}
