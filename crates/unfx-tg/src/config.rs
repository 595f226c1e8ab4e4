use crate::error::{err_ctx, ConfigError};
use crate::{relay, supervisor, tg, Result};
use serde::de::DeserializeOwned;

/// Settings of the whole bot. They are read once from the environment
/// at startup and never change afterwards.
pub struct Config {
    pub(crate) tg: tg::Config,
    pub(crate) access: relay::AccessConfig,
    pub(crate) domains: relay::DomainsConfig,
    pub(crate) supervisor: supervisor::Config,
}

impl Config {
    pub fn load() -> Result<Config> {
        Ok(Self {
            tg: from_env("TG_")?,
            access: from_env("ACCESS_")?,
            domains: from_env("DOMAINS_")?,
            supervisor: from_env("SUPERVISOR_")?,
        })
    }
}

pub(crate) fn from_env<T: DeserializeOwned>(prefix: &'static str) -> Result<T> {
    envy::prefixed(prefix).from_env().map_err(err_ctx!(ConfigError::Env {
        prefix,
        target_ty: std::any::type_name::<T>(),
    }))
}
