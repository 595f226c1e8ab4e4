mod config;
mod error;
mod observability;
mod relay;
mod supervisor;
mod tg;

mod util;

pub use crate::error::*;
pub use config::*;
pub use observability::*;

use std::future::Future;

#[allow(unused_imports)]
mod prelude {
    pub(crate) use crate::error::prelude::*;
    pub(crate) use crate::observability::logging::prelude::*;
    pub(crate) use crate::util::prelude::*;
}

/// Run the telegram bot processing loop until `shutdown` resolves
pub async fn run(config: Config, shutdown: impl Future<Output = ()>) -> Result {
    let relay = relay::Relay::new(config.access, config.domains)?;

    let transport = tg::TgTransport::new(config.tg, relay);

    let report = supervisor::supervise(&transport, config.supervisor.into(), shutdown).await;

    tracing::info!(restarts = report.restarts, "Goodbye!");

    Ok(())
}
