//! Probe executor implementation
//!
//! One bounded round-trip probe per tick, backed by the system `ping`
//! binary. The probe is a black box to the rest of the crate: it yields an
//! elapsed time in milliseconds or no response.

use async_trait::async_trait;
use log::{trace, warn};
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Executes a single round-trip probe against a host.
#[async_trait]
pub trait ProbeExecutor {
    /// Probes `host` once, bounded by `limit`. Returns the round-trip time in
    /// milliseconds, or `None` when the host did not respond in time.
    async fn probe(&self, host: &str, limit: Duration) -> Option<f64>;
}

/// Probe executor that shells out to `ping -c 1`.
#[derive(Debug, Default)]
pub struct PingProbe;

impl PingProbe {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProbeExecutor for PingProbe {
    async fn probe(&self, host: &str, limit: Duration) -> Option<f64> {
        let mut command = Command::new("ping");
        command
            .arg("-c")
            .arg("1")
            .arg("-W")
            .arg(limit.as_secs().max(1).to_string())
            .arg(host)
            .kill_on_drop(true);

        let output = match timeout(limit, command.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(err)) => {
                warn!("failed to run ping for {host}: {err}");
                return None;
            }
            Err(_) => {
                trace!("probe to {host} exceeded {limit:?}");
                return None;
            }
        };

        if !output.status.success() {
            return None;
        }

        parse_ping_time(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Extracts the value of the `time=<millis> ms` token from ping output.
/// A reply without the token reads as no response.
fn parse_ping_time(stdout: &str) -> Option<f64> {
    let start = stdout.find("time=")? + "time=".len();
    let rest = &stdout[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(rest.len());

    rest[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_fractional_time() {
        let stdout = "PING 8.8.8.8 (8.8.8.8) 56(84) bytes of data.\n\
                      64 bytes from 8.8.8.8: icmp_seq=1 ttl=117 time=12.3 ms\n";

        assert_eq!(parse_ping_time(stdout), Some(12.3));
    }

    #[test]
    fn test_parses_integer_time() {
        let stdout = "64 bytes from 1.1.1.1: icmp_seq=1 ttl=58 time=4 ms";

        assert_eq!(parse_ping_time(stdout), Some(4.0));
    }

    #[test]
    fn test_missing_time_token_is_none() {
        let stdout = "PING 192.0.2.1 (192.0.2.1) 56(84) bytes of data.\n\
                      \n--- 192.0.2.1 ping statistics ---\n\
                      1 packets transmitted, 0 received, 100% packet loss, time 0ms\n";

        assert_eq!(parse_ping_time(stdout), None);
    }

    #[test]
    fn test_empty_output_is_none() {
        assert_eq!(parse_ping_time(""), None);
    }

    #[test]
    fn test_malformed_time_value_is_none() {
        assert_eq!(parse_ping_time("time= ms"), None);
    }
}
