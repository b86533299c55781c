use clap::Parser;

/// Main CLI structure for the link-pulse monitor
/// Uses clap's derive macros for automatic CLI generation
#[derive(Parser, Debug)]
#[command(version)] // Automatically uses version from Cargo.toml
#[command(about = "Monitor network throughput, latency, and packet loss in near real time")]
#[command(long_about = "Link Pulse samples an interface's traffic counters and probes a host once per \
interval, printing one line per tick with download/upload rates, round-trip latency, and the \
cumulative packet-loss percentage for the run.\n\n\
Examples:\n  \
lp                                    # First non-loopback interface, probe 8.8.8.8\n  \
lp --interface eth0 --host 1.1.1.1    # Explicit interface and probe target\n  \
lp --interval 0.5 --count 20          # 20 samples at half-second cadence")]
pub struct Cli {
    /// Network interface whose counters are sampled
    #[arg(
        short = 'I',
        long,
        help = "Network interface to monitor (defaults to first non-loopback interface)"
    )]
    pub interface: Option<String>,

    /// Target of the per-tick round-trip probe
    #[arg(
        long,
        default_value = "8.8.8.8",
        help = "Host to probe for latency and packet-loss measurement"
    )]
    pub host: String,

    /// Nominal period between tick starts, in seconds
    #[arg(
        short = 'i',
        long,
        default_value = "1.0",
        value_parser = parse_interval,
        help = "Seconds between samples"
    )]
    pub interval: f64,

    /// Finite tick budget; the run is unbounded when omitted
    #[arg(
        short = 'c',
        long,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Number of samples to take (runs until interrupted if omitted)"
    )]
    pub count: Option<u64>,
}

fn parse_interval(raw: &str) -> Result<f64, String> {
    let seconds: f64 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a valid number of seconds"))?;
    if seconds.is_finite() && seconds > 0.0 {
        Ok(seconds)
    } else {
        Err("interval must be a positive number of seconds".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["lp"]).unwrap();

        assert_eq!(cli.interface, None);
        assert_eq!(cli.host, "8.8.8.8");
        assert_eq!(cli.interval, 1.0);
        assert_eq!(cli.count, None);
    }

    #[test]
    fn test_all_arguments() {
        let cli = Cli::try_parse_from([
            "lp",
            "--interface",
            "eth0",
            "--host",
            "1.1.1.1",
            "--interval",
            "0.5",
            "--count",
            "20",
        ])
        .unwrap();

        assert_eq!(cli.interface.as_deref(), Some("eth0"));
        assert_eq!(cli.host, "1.1.1.1");
        assert_eq!(cli.interval, 0.5);
        assert_eq!(cli.count, Some(20));
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        assert!(Cli::try_parse_from(["lp", "--interval", "0"]).is_err());
    }

    #[test]
    fn test_negative_interval_is_rejected() {
        assert!(Cli::try_parse_from(["lp", "--interval", "-1.5"]).is_err());
    }

    #[test]
    fn test_zero_count_is_rejected() {
        assert!(Cli::try_parse_from(["lp", "--count", "0"]).is_err());
    }
}
