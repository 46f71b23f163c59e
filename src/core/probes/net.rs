//! Network identity probes.

use std::net::UdpSocket;
use std::time::Duration;

use crate::error::{Result, SysdeckError};

use super::ProbeResult;

/// Connecting toward this address picks the egress interface; no packet
/// is actually sent.
const ROUTE_PROBE_TARGET: &str = "8.8.8.8:80";
const LOOPBACK: &str = "127.0.0.1";

const PUBLIC_IP_ENDPOINT: &str = "https://api.ipify.org";
pub const PUBLIC_IP_TIMEOUT: Duration = Duration::from_secs(5);

/// LAN address of the egress interface, loopback when there is no route
pub fn local_ip() -> String {
    let addr = UdpSocket::bind("0.0.0.0:0").and_then(|socket| {
        socket.connect(ROUTE_PROBE_TARGET)?;
        socket.local_addr()
    });

    match addr {
        Ok(addr) => addr.ip().to_string(),
        Err(e) => {
            log::debug!("local ip discovery failed: {}", e);
            LOOPBACK.to_string()
        }
    }
}

/// Public address lookup with a hard timeout. Blocking: must run on the
/// worker pool, never on the control loop thread.
pub fn fetch_public_ip() -> ProbeResult {
    match try_fetch_public_ip() {
        Ok(ip) => ProbeResult::Ready(ip),
        Err(e) => {
            log::debug!("public ip lookup failed: {}", e);
            ProbeResult::Unavailable
        }
    }
}

fn try_fetch_public_ip() -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(PUBLIC_IP_TIMEOUT)
        .build()
        .map_err(|e| SysdeckError::probe(e.to_string()))?;

    let body = client
        .get(PUBLIC_IP_ENDPOINT)
        .send()
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text())
        .map_err(|e| SysdeckError::probe(e.to_string()))?;

    let ip = body.trim().to_string();
    if ip.is_empty() {
        return Err(SysdeckError::probe("empty public ip response"));
    }
    Ok(ip)
}
