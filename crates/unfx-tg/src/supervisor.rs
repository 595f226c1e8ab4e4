//! Keeps the bot polling no matter what, until it's asked to stop.

use crate::prelude::*;
use crate::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

/// Source of updates that the bot handles. It's expected to run forever,
/// so returning from [`Transport::poll_forever`] in any way is a failure.
#[async_trait]
pub(crate) trait Transport: Send + Sync {
    async fn poll_forever(&self) -> Result;
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct Config {
    /// Delay before the first polling session. Gives the operator a chance
    /// to interrupt the startup with Ctrl+C.
    #[serde(default = "default_grace_period_secs")]
    pub(crate) grace_period_secs: u64,

    /// Delay between a polling failure and the next attempt
    #[serde(default = "default_backoff_secs")]
    pub(crate) backoff_secs: u64,
}

fn default_grace_period_secs() -> u64 {
    1
}

fn default_backoff_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Timings {
    pub(crate) grace: Duration,
    pub(crate) backoff: Duration,
}

impl From<Config> for Timings {
    fn from(cfg: Config) -> Self {
        Self {
            grace: Duration::from_secs(cfg.grace_period_secs),
            backoff: Duration::from_secs(cfg.backoff_secs),
        }
    }
}

/// Summary of the finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunReport {
    /// How many times the polling was restarted after a failure
    pub(crate) restarts: usize,
}

/// Runs the transport until `shutdown` resolves. Every failure of the
/// transport is logged and followed by a restart after a fixed backoff.
pub(crate) async fn supervise<T: Transport + ?Sized>(
    transport: &T,
    timings: Timings,
    shutdown: impl Future<Output = ()>,
) -> RunReport {
    tokio::pin!(shutdown);

    let mut report = RunReport { restarts: 0 };

    info!(
        grace_period = tracing_duration(timings.grace),
        "Starting the bot. Press Ctrl+C to cancel the startup"
    );

    tokio::select! {
        () = tokio::time::sleep(timings.grace) => {}
        () = &mut shutdown => {
            info!("Startup was cancelled");
            return report;
        }
    }

    loop {
        info!(restarts = report.restarts, "Polling for updates...");

        let result = tokio::select! {
            result = transport.poll_forever() => result,
            () = &mut shutdown => {
                info!("Stopping the polling");
                return report;
            }
        };

        match result {
            Ok(()) => error!("Polling stopped unexpectedly"),
            Err(err) => error!(err = tracing_err(&err), "Polling failed"),
        }

        info!(
            backoff = tracing_duration(timings.backoff),
            "Restarting the polling after a pause"
        );

        tokio::select! {
            () = tokio::time::sleep(timings.backoff) => {}
            () = &mut shutdown => {
                info!("Stopped during the backoff");
                return report;
            }
        }

        report.restarts += 1;
    }
}
