//! The sampling loop
//!
//! Drives one probe and one counter read per tick, corrects the sleep for
//! time already spent in the tick so the configured interval is the period
//! between tick starts, and stops after a configured number of ticks or runs
//! until cancelled.

use chrono::Local;
use log::{debug, trace};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{Instant, sleep_until};

use crate::collectors::{CounterSource, ProbeExecutor};
use crate::models::Sample;
use crate::output::Reporter;
use crate::sampler::errors::MonitorError;
use crate::sampler::loss::LossTracker;
use crate::sampler::throughput::compute_throughput;

/// Upper bound on a single probe. Fixed and independent of the sampling
/// interval so a slow interval never stretches individual probes.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Fixed parameters for one sampling run.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Interface whose counters are sampled
    pub interface: String,
    /// Probe target host
    pub host: String,
    /// Nominal period between tick starts
    pub interval: Duration,
    /// Number of ticks to run, or `None` to run until cancelled
    pub count: Option<u64>,
}

/// Lifecycle of the sampling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Created, initial counter snapshot not yet taken
    Idle,
    /// Ticking
    Running,
    /// Finished, either by exhausting the tick budget or by cancellation
    Stopped,
}

/// How a sampling run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The configured tick budget was exhausted.
    Completed,
    /// The operator cancelled the run. No partial sample was published.
    Cancelled,
}

/// Drives the per-tick sampling loop over its three collaborators.
pub struct SampleScheduler<C, P, R> {
    config: SchedulerConfig,
    counters: C,
    probe: P,
    reporter: R,
    shutdown: watch::Receiver<bool>,
    loss: LossTracker,
    state: SchedulerState,
}

impl<C, P, R> SampleScheduler<C, P, R>
where
    C: CounterSource,
    P: ProbeExecutor,
    R: Reporter,
{
    pub fn new(
        config: SchedulerConfig,
        counters: C,
        probe: P,
        reporter: R,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            config,
            counters,
            probe,
            reporter,
            shutdown,
            loss: LossTracker::new(),
            state: SchedulerState::Idle,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Runs the sampling loop until the tick budget is exhausted or the
    /// shutdown signal fires.
    ///
    /// The first counter read happens before the loop and is never reported;
    /// it only seeds the "previous" snapshot for tick 1. A cancellation
    /// observed mid-tick abandons that tick without publishing anything:
    /// every reported sample is a complete one.
    pub async fn run(&mut self) -> Result<RunOutcome, MonitorError> {
        let mut previous = self.counters.read(&self.config.interface)?;
        let mut last_read = Instant::now();

        self.reporter
            .header(&self.config.interface, &self.config.host);
        self.state = SchedulerState::Running;
        let mut remaining = self.config.count;
        debug!(
            "sampling '{}' against {} every {:?}",
            self.config.interface, self.config.host, self.config.interval
        );

        while self.state == SchedulerState::Running {
            if *self.shutdown.borrow() {
                self.state = SchedulerState::Stopped;
                return Ok(RunOutcome::Cancelled);
            }

            let tick_start = Instant::now();

            let latency_ms = self.probe.probe(&self.config.host, PROBE_TIMEOUT).await;
            self.loss.record(latency_ms.is_some());
            if latency_ms.is_none() {
                trace!("no probe response from {}", self.config.host);
            }

            // Drift correction: time already spent in the tick (chiefly the
            // probe) comes out of the sleep, so successive tick starts stay
            // one interval apart. A probe that outlasts the interval skips
            // the sleep entirely and the tick runs long.
            let deadline = tick_start + self.config.interval;
            tokio::select! {
                _ = sleep_until(deadline) => {}
                Ok(_) = self.shutdown.wait_for(|stop| *stop) => {
                    self.state = SchedulerState::Stopped;
                    return Ok(RunOutcome::Cancelled);
                }
            }

            let current = self.counters.read(&self.config.interface).map_err(|err| {
                MonitorError::CounterSourceUnavailable {
                    interface: self.config.interface.clone(),
                    message: err.to_string(),
                }
            })?;
            // Rates are computed over the measured gap between counter
            // reads, not the nominal interval, so an overrunning tick does
            // not distort them.
            let elapsed_seconds = last_read.elapsed().as_secs_f64();
            last_read = Instant::now();
            let rates = compute_throughput(previous, current, elapsed_seconds);
            previous = current;

            let sample = Sample {
                timestamp: Local::now(),
                download_mbps: rates.download_mbps,
                upload_mbps: rates.upload_mbps,
                latency_ms,
                loss_pct: self.loss.loss_pct(),
            };
            self.reporter.report(&sample);

            if let Some(budget) = remaining.as_mut() {
                *budget -= 1;
                if *budget == 0 {
                    self.state = SchedulerState::Stopped;
                }
            }
        }

        debug!(
            "run complete: {} probes, {} lost",
            self.loss.total_probes(),
            self.loss.lost_probes()
        );
        Ok(RunOutcome::Completed)
    }
}
