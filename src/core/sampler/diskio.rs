//! Cumulative disk I/O counters from /proc/diskstats.
//!
//! sysinfo exposes per-process disk usage but no system-wide byte counters,
//! so the block layer stats are read directly. Only whole physical devices
//! are summed: partitions would double-count their parent and the virtual
//! devices (loop, ram, dm-...) are noise.

use std::fs;

const DISKSTATS_PATH: &str = "/proc/diskstats";
const SECTOR_SIZE: u64 = 512;

const VIRTUAL_PREFIXES: [&str; 7] = ["loop", "ram", "zram", "dm-", "sr", "fd", "md"];

/// Current cumulative (read_bytes, written_bytes) across physical disks.
/// Returns zeros when the stats file is unreadable.
pub fn read_totals() -> (u64, u64) {
    match fs::read_to_string(DISKSTATS_PATH) {
        Ok(content) => parse_totals(&content),
        Err(e) => {
            log::debug!("diskstats unavailable: {}", e);
            (0, 0)
        }
    }
}

fn parse_totals(content: &str) -> (u64, u64) {
    let mut read_bytes = 0u64;
    let mut write_bytes = 0u64;

    for line in content.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        // major minor name reads rmerged rsectors rms writes wmerged wsectors ...
        if fields.len() < 10 {
            continue;
        }
        let name = fields[2];
        if !is_physical_disk(name) {
            continue;
        }
        let sectors_read: u64 = fields[5].parse().unwrap_or(0);
        let sectors_written: u64 = fields[9].parse().unwrap_or(0);
        read_bytes += sectors_read * SECTOR_SIZE;
        write_bytes += sectors_written * SECTOR_SIZE;
    }

    (read_bytes, write_bytes)
}

fn is_physical_disk(name: &str) -> bool {
    if VIRTUAL_PREFIXES.iter().any(|p| name.starts_with(p)) {
        return false;
    }
    !is_partition(name)
}

fn is_partition(name: &str) -> bool {
    // nvme0n1p2 / mmcblk0p1 style: digit, 'p', trailing digits
    if let Some(idx) = name.rfind('p') {
        let (prefix, suffix) = (&name[..idx], &name[idx + 1..]);
        if prefix.ends_with(|c: char| c.is_ascii_digit())
            && !suffix.is_empty()
            && suffix.chars().all(|c| c.is_ascii_digit())
        {
            return true;
        }
    }

    // sda1 / vdb2 style; nvme0n1 and mmcblk0 are whole disks despite the
    // trailing digit
    name.starts_with(|c: char| c.is_ascii_alphabetic())
        && name.ends_with(|c: char| c.is_ascii_digit())
        && !name.starts_with("nvme")
        && !name.starts_with("mmcblk")
}
