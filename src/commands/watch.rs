use crate::core::probes::ProbeResult;
use crate::core::sampler::{Sampler, SamplerSnapshot, HISTORY_LEN, TICK_INTERVAL_MS};
use crate::core::workers::{WorkerUpdate, Workers};
use crate::ui::formatters::{format_rate, sparkline};
use anyhow::Result;
use clap::ArgMatches;
use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Trailing slice of the CPU history shown inline per tick
const SPARK_WIDTH: usize = 10;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let interval_ms = matches
        .get_one::<u64>("interval")
        .copied()
        .unwrap_or(TICK_INTERVAL_MS);
    let as_json = matches.get_flag("json");
    let count = matches.get_one::<u64>("count").copied();

    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = running.clone();
    ctrlc::set_handler(move || {
        handler_flag.store(false, Ordering::SeqCst);
    })?;

    let mut sampler = Sampler::new();
    let mut workers = Workers::new()?;
    workers.request_public_ip();
    let mut public_ip = ProbeResult::Unavailable;

    if !as_json {
        println!(
            "{}",
            "Watching system metrics (Ctrl-C to stop)...".bold()
        );
    }

    let mut ticks: u64 = 0;
    while running.load(Ordering::SeqCst) {
        let snapshot = sampler.tick();

        while let Some(update) = workers.poll() {
            match update {
                WorkerUpdate::PublicIp(result) => {
                    if !as_json {
                        println!("{} {}", "Public IP:".bold(), result.display());
                    }
                    public_ip = result;
                }
            }
        }

        if as_json {
            print_json_line(&snapshot, &public_ip)?;
        } else {
            print_line(&sampler, &snapshot);
        }

        ticks += 1;
        if let Some(limit) = count {
            if ticks >= limit {
                break;
            }
        }

        sleep_interruptible(&running, interval_ms);
    }

    if !as_json {
        println!("{}", "Stopped.".dimmed());
    }

    Ok(())
}

fn print_line(sampler: &Sampler, snapshot: &SamplerSnapshot) {
    let sample = &snapshot.sample;
    let rates = &snapshot.rates;
    let spark = sparkline(
        sampler
            .cpu_history
            .iter()
            .skip(HISTORY_LEN.saturating_sub(SPARK_WIDTH)),
    );

    let mut line = format!(
        "{}  CPU {:5.1}% {}  MEM {:5.1}%  SWAP {:5.1}%  FREQ {:5.1}%  NET \u{2193}{} \u{2191}{}  DISK R {} W {}",
        chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
        sample.cpu_percent,
        spark.cyan(),
        sample.mem_percent,
        sample.swap_percent,
        sample.freq_percent,
        format_rate(rates.rx_rate),
        format_rate(rates.tx_rate),
        format_rate(rates.read_rate),
        format_rate(rates.write_rate),
    );

    if let Some(top) = &snapshot.top_process {
        line.push_str(&format!("  top: {}", top));
    }

    println!("{}", line);
}

fn print_json_line(snapshot: &SamplerSnapshot, public_ip: &ProbeResult) -> Result<()> {
    let line = serde_json::json!({
        "sample": snapshot.sample,
        "rates": snapshot.rates,
        "top_process": snapshot.top_process,
        "public_ip": public_ip.display(),
    });
    println!("{}", serde_json::to_string(&line)?);
    Ok(())
}

/// Sleep the tick interval in short slices so Ctrl-C takes effect quickly
fn sleep_interruptible(running: &AtomicBool, interval_ms: u64) {
    const SLICE_MS: u64 = 100;

    let mut remaining = interval_ms;
    while remaining > 0 && running.load(Ordering::SeqCst) {
        let slice = remaining.min(SLICE_MS);
        thread::sleep(Duration::from_millis(slice));
        remaining -= slice;
    }
}
