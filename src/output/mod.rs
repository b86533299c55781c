//! Sample rendering for the operator
//!
//! The sampling engine hands each finished [`Sample`] to a [`Reporter`]; the
//! console implementation prints one fixed-width line per tick under a single
//! header line.

use crate::models::Sample;

/// Renders samples for a human operator. One header, then one line per tick.
pub trait Reporter {
    /// Emits the run header, echoing the monitored interface and probe host.
    fn header(&mut self, interface: &str, host: &str);

    /// Emits one finished sample.
    fn report(&mut self, sample: &Sample);
}

/// Reporter that prints fixed-width columns to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn header(&mut self, interface: &str, host: &str) {
        println!("{}", format_header(interface, host));
    }

    fn report(&mut self, sample: &Sample) {
        println!("{}", format_sample(sample));
    }
}

/// Formats the run header and column captions.
pub fn format_header(interface: &str, host: &str) -> String {
    format!(
        "Monitoring interface '{interface}' | Host: {host}\n\
         Time                Download(Mbps)  Upload(Mbps)  Latency(ms)  PacketLoss(%)"
    )
}

/// Formats one sample as a fixed-width line. A probe with no response renders
/// the `loss` sentinel in the latency column.
pub fn format_sample(sample: &Sample) -> String {
    let timestamp = sample.timestamp.format("%H:%M:%S");
    let latency = match sample.latency_ms {
        Some(latency_ms) => format!("{latency_ms:7.2}"),
        None => "   loss".to_string(),
    };

    format!(
        "{timestamp}         {download:12.2}  {upload:12.2}  {latency}  {loss:12.2}",
        download = sample.download_mbps,
        upload = sample.upload_mbps,
        loss = sample.loss_pct,
    )
}
