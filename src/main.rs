use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tokio::sync::watch;

use link_pulse::cli::Cli;
use link_pulse::collectors::{PingProbe, SystemCounterSource, resolve_interface};
use link_pulse::output::ConsoleReporter;
use link_pulse::sampler::{SampleScheduler, SchedulerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut counters = SystemCounterSource::new();
    let interface = resolve_interface(&mut counters, cli.interface.as_deref())?;

    // Ctrl-C stops the loop at the next tick boundary; an in-flight probe is
    // left to finish or time out on its own.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    let config = SchedulerConfig {
        interface,
        host: cli.host,
        interval: Duration::from_secs_f64(cli.interval),
        count: cli.count,
    };

    let mut scheduler = SampleScheduler::new(
        config,
        counters,
        PingProbe::new(),
        ConsoleReporter::new(),
        shutdown_rx,
    );
    let outcome = scheduler.run().await?;
    log::debug!("sampling loop finished: {outcome:?}");

    Ok(())
}
