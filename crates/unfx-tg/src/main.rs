use futures::prelude::*;
use std::panic::AssertUnwindSafe;
use std::process::ExitCode;
use tracing::{error, info, warn};
use unfx_tg::tracing_err;

#[tokio::main]
async fn main() -> ExitCode {
    if dotenvy::dotenv().is_err() {
        eprintln!("Dotenv config was not found, ignoring this...")
    }

    let logging_task = match unfx_tg::init_logging() {
        Ok(task) => task,
        Err(err) => {
            eprintln!("Failed to initialize logging: {err:?}");
            return ExitCode::FAILURE;
        }
    };

    let exit_code = AssertUnwindSafe(async {
        let result = try_main().await;

        result.map(|()| ExitCode::SUCCESS).unwrap_or_else(|err| {
            error!(err = tracing_err(&err), "Exitting with an error...");
            ExitCode::FAILURE
        })
    })
    .catch_unwind()
    .unwrap_or_else(|_| {
        error!("Exitting due to a panic...");
        ExitCode::FAILURE
    })
    .await;

    logging_task.shutdown().await;

    exit_code
}

async fn try_main() -> unfx_tg::Result {
    let config = unfx_tg::Config::load()?;
    unfx_tg::run(config, abort_signal()).await
}

async fn abort_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(
            err = tracing_err(&err),
            "Failed to wait for Ctrl+C, the bot can only be stopped by killing the process"
        );
        future::pending::<()>().await;
    } else {
        info!("Ctrl+C received");
    }
}
