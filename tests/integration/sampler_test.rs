use sysdeck::core::sampler::{
    MetricSample, RateSet, RollingHistory, Sampler, DT_EPSILON, HISTORY_LEN,
};
use sysdeck::ui::formatters::format_bytes;

#[test]
fn test_history_length_never_varies() {
    let mut history = RollingHistory::new();
    assert_eq!(history.len(), HISTORY_LEN);

    for i in 0..150 {
        history.push(i as f64);
        assert_eq!(history.len(), HISTORY_LEN);
    }
}

#[test]
fn test_rate_reference_case() {
    let prev = MetricSample {
        net_tx_bytes: 1000,
        ..Default::default()
    };
    let now = MetricSample {
        net_tx_bytes: 2000,
        ..Default::default()
    };

    let rates = RateSet::between(&prev, &now, 2.0);
    assert_eq!(rates.tx_rate, 500.0);
}

#[test]
fn test_rate_never_divides_by_zero() {
    let prev = MetricSample {
        net_rx_bytes: 100,
        ..Default::default()
    };
    let now = MetricSample {
        net_rx_bytes: 400,
        ..Default::default()
    };

    for dt in [0.0, -1.0, DT_EPSILON / 10.0] {
        let rates = RateSet::between(&prev, &now, dt);
        assert!(rates.rx_rate.is_finite());
    }
}

#[test]
fn test_counter_reset_yields_zero_rate() {
    let prev = MetricSample {
        disk_write_bytes: 9999,
        ..Default::default()
    };
    let now = MetricSample {
        disk_write_bytes: 12,
        ..Default::default()
    };

    let rates = RateSet::between(&prev, &now, 2.0);
    assert_eq!(rates.write_rate, 0.0);
}

#[test]
fn test_format_bytes_reference_points() {
    assert_eq!(format_bytes(1536), "1.5 KB");
    assert_eq!(format_bytes(1_073_741_824), "1.0 GB");
}

#[test]
fn test_sampler_ticks_keep_every_history_full() {
    let mut sampler = Sampler::new();

    for _ in 0..3 {
        let snapshot = sampler.tick();
        assert!(snapshot.sample.timestamp > 0);
        assert!(snapshot.sample.cpu_percent >= 0.0);
    }

    assert_eq!(sampler.cpu_history.len(), HISTORY_LEN);
    assert_eq!(sampler.mem_history.len(), HISTORY_LEN);
    assert_eq!(sampler.swap_history.len(), HISTORY_LEN);
    assert_eq!(sampler.freq_history.len(), HISTORY_LEN);
}

#[test]
fn test_snapshot_serializes_to_json() {
    let mut sampler = Sampler::new();
    let snapshot = sampler.tick();

    let text = serde_json::to_string(&snapshot).unwrap();
    assert!(text.contains("cpu_percent"));
    assert!(text.contains("rx_rate"));
}
