use crate::core::probes::{self, HostSummary};
use crate::ui::formatters::{format_bytes, format_uptime, print_section_header};
use anyhow::Result;
use clap::ArgMatches;
use colored::*;

/// Filter for controlling which report sections to display
#[derive(Debug, Clone)]
pub struct SectionFilter {
    pub software: bool,
    pub cpu: bool,
    pub memory: bool,
    pub graphics: bool,
    pub network: bool,
}

impl SectionFilter {
    /// Returns a filter that shows all sections
    pub fn all() -> Self {
        Self {
            software: true,
            cpu: true,
            memory: true,
            graphics: true,
            network: true,
        }
    }
}

pub fn execute(matches: &ArgMatches) -> Result<()> {
    println!("Collecting system information...");

    let show_software = matches.get_flag("software");
    let show_cpu = matches.get_flag("cpu");
    let show_memory = matches.get_flag("memory");
    let show_graphics = matches.get_flag("graphics");
    let show_network = matches.get_flag("network");

    // If no flags are set, show everything
    let filter =
        if !show_software && !show_cpu && !show_memory && !show_graphics && !show_network {
            SectionFilter::all()
        } else {
            SectionFilter {
                software: show_software,
                cpu: show_cpu,
                memory: show_memory,
                graphics: show_graphics,
                network: show_network,
            }
        };

    print_report(&filter);

    Ok(())
}

fn print_report(filter: &SectionFilter) {
    let host = probes::collect_host_summary();

    println!("\n{}", "SYSTEM REPORT".bold().bright_cyan());
    println!("{}", "=".repeat(80));

    if filter.software {
        print_software(&host);
    }

    if filter.cpu {
        print_cpu(&host);
    }

    if filter.memory {
        print_memory(&host);
    }

    if filter.graphics {
        print_graphics();
    }

    if filter.network {
        print_network();
    }

    println!();
}

fn print_software(host: &HostSummary) {
    print_section_header("Software");

    println!("  Distro: {} {}", host.distro, host.os_version);
    println!("  Kernel: {}", host.kernel);
    println!("  Hostname: {}", host.hostname);
    println!("  Uptime: {}", format_uptime(host.uptime_secs));
    println!("  Desktop: {}", probes::desktop_environment().display());
    println!("  Session: {}", probes::session_type().display());
    println!("  Shell: {}", probes::login_shell().display());
}

fn print_cpu(host: &HostSummary) {
    print_section_header("CPU");

    println!("  Model: {}", host.cpu_model);
    println!("  Cores: {}", host.core_counts());
    println!("  Temperature: {}", probes::cpu_temperature().display());
    println!("  Fan: {}", probes::fan_rpm().display());
    println!("  Battery: {}", probes::battery_status().display());
}

fn print_memory(host: &HostSummary) {
    print_section_header("Memory");

    let ram_pct = if host.mem_total_bytes > 0 {
        host.mem_used_bytes as f64 / host.mem_total_bytes as f64 * 100.0
    } else {
        0.0
    };
    println!(
        "  RAM: {} / {} ({:.1}%)",
        format_bytes(host.mem_used_bytes),
        format_bytes(host.mem_total_bytes),
        ram_pct
    );
    println!(
        "  Root Disk: {} / {}",
        format_bytes(host.root_used_bytes),
        format_bytes(host.root_total_bytes)
    );
}

fn print_graphics() {
    print_section_header("Graphics");

    println!("  GPU: {}", probes::gpu_model().display_or("Unknown"));
    println!("  OpenGL: {}", probes::opengl_version().display());
    println!("  Vulkan: {}", probes::vulkan_version().display());
}

fn print_network() {
    print_section_header("Network");

    println!("  Local IP: {}", probes::local_ip());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_all_enables_every_section() {
        let filter = SectionFilter::all();
        assert!(filter.software);
        assert!(filter.cpu);
        assert!(filter.memory);
        assert!(filter.graphics);
        assert!(filter.network);
    }
}
