use crate::config::from_env;
use crate::observability::GLOBAL_LABELS;
use crate::prelude::*;
use crate::Result;
use serde::Deserialize;
use serde_with::serde_as;
use std::collections::HashMap;
use std::ops::Deref;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

/// Handle to the background part of the logging system.
/// It must be shut down at the very end of the program to flush the logs.
pub struct LoggingTask {
    loki: Option<LokiTask>,
}

struct LokiTask {
    task: tokio::task::JoinHandle<()>,
    controller: tracing_loki::BackgroundTaskController,
}

impl LoggingTask {
    pub async fn shutdown(self) {
        let Some(loki) = self.loki else {
            return;
        };

        info!("Waiting for the Loki logging task to finish nicely...");

        let ((), duration) = loki.controller.shutdown().with_duration().await;

        eprintln!(
            "Stopped Loki logging task in {:.2?}: {:?}",
            duration,
            loki.task.await
        );
    }
}

/// Installs the global `tracing` subscriber. Must be called once before
/// anything else is logged.
pub fn init_logging() -> Result<LoggingTask> {
    from_env::<LoggingConfig>("LOKI_")?.init_logging()
}

#[serde_as]
#[derive(Deserialize)]
struct LoggingConfig {
    /// Logs are shipped to Loki only if this is set
    url: Option<url::Url>,

    #[serde_as(as = "serde_with::json::JsonString")]
    #[serde(default)]
    labels: HashMap<String, String>,
}

impl LoggingConfig {
    fn init_logging(self) -> Result<LoggingTask> {
        let env_filter = tracing_subscriber::EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .with_env_var("UNFX_LOG")
            .from_env_lossy();

        let fmt = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_ansi(colors_enabled())
            .pretty();

        let (loki_layer, loki_task) = match self.url {
            Some(url) => {
                let mut labels = self.labels;
                labels.extend(
                    GLOBAL_LABELS
                        .iter()
                        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned())),
                );

                let builder = labels
                    .into_iter()
                    .try_fold(tracing_loki::builder(), |builder, (key, value)| {
                        builder.label(key, value)
                    })?;

                let (layer, controller, task) = builder.build_controller_url(url)?;

                let task = tokio::spawn(task);

                (Some(layer), Some(LokiTask { task, controller }))
            }
            None => (None, None),
        };

        tracing_subscriber::registry()
            .with(fmt)
            .with(loki_layer)
            .with(env_filter)
            .with(tracing_error::ErrorLayer::default())
            .init();

        init_panic_hook();

        Ok(LoggingTask { loki: loki_task })
    }
}

/// ANSI colors are on by default, `COLORS=0` turns them off
pub(crate) fn colors_enabled() -> bool {
    std::env::var("COLORS").as_deref() != Ok("0")
}

fn init_panic_hook() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        // The default hook must run first. The panic may originate in the
        // logging system itself, and then the `error!` below would be lost.
        default_hook(panic_info);

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));

        let payload = panic_info.payload();
        let message = payload
            .downcast_ref::<String>()
            .map(<_>::deref)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or("<unknown>");

        error!(
            target: "panic",
            thread = std::thread::current().name(),
            location,
            span_trace = %tracing_error::SpanTrace::capture(),
            "{message}"
        );
    }));
}
