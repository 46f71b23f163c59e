//! Host identity summary (display only).

use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, RefreshKind, System};

/// Static-ish facts about the host shown by `sysdeck info`
#[derive(Debug, Clone, Default)]
pub struct HostSummary {
    pub hostname: String,
    pub distro: String,
    pub os_version: String,
    pub kernel: String,
    pub uptime_secs: u64,
    pub cpu_model: String,
    pub physical_cores: usize,
    pub logical_cores: usize,
    pub mem_total_bytes: u64,
    pub mem_used_bytes: u64,
    pub root_total_bytes: u64,
    pub root_used_bytes: u64,
}

impl HostSummary {
    /// "X Phys / Y Log"
    pub fn core_counts(&self) -> String {
        format!("{} Phys / {} Log", self.physical_cores, self.logical_cores)
    }
}

pub fn collect_host_summary() -> HostSummary {
    let system = System::new_with_specifics(
        RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything()),
    );

    let (root_total, root_used) = root_disk_usage();

    HostSummary {
        hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        distro: System::name().unwrap_or_else(|| "Unknown".to_string()),
        os_version: System::os_version().unwrap_or_else(|| "Unknown".to_string()),
        kernel: System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
        uptime_secs: System::uptime(),
        cpu_model: system
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .unwrap_or_else(|| "Unknown".to_string()),
        physical_cores: System::physical_core_count().unwrap_or(0),
        logical_cores: system.cpus().len(),
        mem_total_bytes: system.total_memory(),
        mem_used_bytes: system.used_memory(),
        root_total_bytes: root_total,
        root_used_bytes: root_used,
    }
}

fn root_disk_usage() -> (u64, u64) {
    let disks = Disks::new_with_refreshed_list();
    disks
        .iter()
        .find(|disk| disk.mount_point() == std::path::Path::new("/"))
        .map(|disk| {
            let total = disk.total_space();
            (total, total.saturating_sub(disk.available_space()))
        })
        .unwrap_or((0, 0))
}
