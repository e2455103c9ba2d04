//! ICMP liveness probing through the system `ping` utility.

use std::net::IpAddr;
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

/// Sends `count` echo requests to `ip` with the ping binary at `ping_binary`.
///
/// The node is reachable iff the utility exits with status zero. A binary that
/// cannot be spawned counts as unreachable. No timeout is imposed beyond the
/// utility's own.
pub async fn is_reachable(ping_binary: &Path, ip: IpAddr, count: u32) -> bool {
    log::debug!("Pinging {ip} ({count} probes)");

    let status = Command::new(ping_binary)
        .arg("-c")
        .arg(count.to_string())
        .arg(ip.to_string())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    match status {
        Ok(status) if status.success() => true,
        Ok(status) => {
            log::info!("{ip} did not answer ping ({status})");
            false
        }
        Err(e) => {
            log::warn!("Failed to run {}: {e}", ping_binary.display());
            false
        }
    }
}
