pub(crate) mod logging;

pub use self::logging::{init_logging, tracing_err, LoggingTask};

const GLOBAL_LABELS: &[(&str, &str)] = &[
    ("app_version", env!("CARGO_PKG_VERSION")),
    ("source", env!("CARGO_PKG_NAME")),
];
