use colored::Colorize;

const SPARK_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Format a byte count in human-readable form (B, KB, MB, GB, TB).
/// Always renders exactly one fractional digit: 1536 -> "1.5 KB".
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Format a bytes-per-second rate ("1.5 KB/s")
pub fn format_rate(bytes_per_sec: f64) -> String {
    format!("{}/s", format_bytes(bytes_per_sec.max(0.0) as u64))
}

/// Format an uptime in seconds as "Nd HH:MM:SS", days omitted when zero
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if days > 0 {
        format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Render a percentage series (0..=100) as a block-glyph sparkline
pub fn sparkline(values: impl Iterator<Item = f64>) -> String {
    values
        .map(|v| {
            let idx = (v.clamp(0.0, 100.0) / 100.0 * (SPARK_GLYPHS.len() - 1) as f64).round();
            SPARK_GLYPHS[idx as usize]
        })
        .collect()
}

/// Print a section header in the report style used by `sysdeck info`
pub fn print_section_header(title: &str) {
    println!("\n{}", title.bold().green());
    println!("{}", "-".repeat(title.len()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_kb() {
        assert_eq!(format_bytes(1536), "1.5 KB");
    }

    #[test]
    fn test_format_bytes_gb() {
        assert_eq!(format_bytes(1_073_741_824), "1.0 GB");
    }

    #[test]
    fn test_format_bytes_small() {
        assert_eq!(format_bytes(0), "0.0 B");
        assert_eq!(format_bytes(512), "512.0 B");
        assert_eq!(format_bytes(1023), "1023.0 B");
    }

    #[test]
    fn test_format_bytes_tb_cap() {
        // Values past the ladder stay in TB instead of inventing a unit
        assert_eq!(format_bytes(1024_u64.pow(4)), "1.0 TB");
        assert_eq!(format_bytes(1024_u64.pow(4) * 2048), "2048.0 TB");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(1536.0), "1.5 KB/s");
        assert_eq!(format_rate(-10.0), "0.0 B/s");
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(59), "00:00:59");
        assert_eq!(format_uptime(3 * 3600 + 4 * 60 + 5), "03:04:05");
        assert_eq!(format_uptime(86_400 + 7265), "1d 02:01:05");
    }

    #[test]
    fn test_sparkline_extremes() {
        let line = sparkline([0.0, 100.0, 250.0].into_iter());
        assert_eq!(line.chars().count(), 3);
        assert_eq!(line.chars().next(), Some('▁'));
        assert_eq!(line.chars().last(), Some('█'));
    }
}
