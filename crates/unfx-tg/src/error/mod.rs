mod macros;

use crate::prelude::*;
use std::fmt;
use std::sync::Arc;
use teloxide::types::ChatId;
use thiserror::Error;
use tracing_error::SpanTrace;

pub(crate) use macros::*;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

pub(crate) mod prelude {
    #[allow(unused_imports)]
    pub(crate) use super::{err, err_ctx};
}

/// Describes any possible error that may happen in the application lifetime.
#[derive(Clone)]
pub struct Error {
    imp: Arc<ErrorImp>,
}

struct ErrorImp {
    /// Small identifier used for debugging purposes.
    /// It lets us find all log lines about the same failure.
    id: String,
    kind: ErrorKind,

    // Participates only in debug impl
    spantrace: SpanTrace,
}

#[derive(Error, Debug)]
pub enum ErrorKind {
    #[error(transparent)]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error(transparent)]
    Transport {
        #[from]
        source: TransportError,
    },

    #[error("Failed to set up log shipping to Loki")]
    Logging {
        #[from]
        source: tracing_loki::Error,
    },
}

/// Invalid or missing settings. These are fatal and stop the bot at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Couldn't load `{target_ty}` from environment variables \
        with the prefix `{prefix}`"
    )]
    Env {
        prefix: &'static str,
        target_ty: &'static str,
        source: envy::Error,
    },

    #[error("Admin-only mode is enabled, but the admin chat ID is not specified")]
    MissingAdminChat,

    #[error("The replacement `{dest}` for the domain `{src}` is not a valid hostname")]
    InvalidReplacementHost {
        src: String,
        dest: String,
        source: url::ParseError,
    },
}

/// Failures of communication with the Telegram Bot API
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to identify the bot via `getMe`")]
    GetMe { source: teloxide::RequestError },

    #[error("Failed to register the list of bot commands")]
    SetMyCommands { source: teloxide::RequestError },

    #[error("Failed to fetch updates via long polling")]
    GetUpdates { source: teloxide::RequestError },

    #[error("Failed to deliver a message to the chat {chat_id}")]
    Deliver {
        chat_id: ChatId,
        source: teloxide::RequestError,
    },
}

impl Error {
    pub fn id(&self) -> &str {
        &self.imp.id
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.imp.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error (id: {}): {}", self.imp.id, self.imp.kind)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.imp.kind.source()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_chain())?;
        fmt::Display::fmt(&self.imp.spantrace, f)
    }
}

impl<T: Into<ErrorKind>> From<T> for Error {
    #[track_caller]
    fn from(kind: T) -> Self {
        let imp = ErrorImp {
            kind: kind.into(),
            id: nanoid::nanoid!(6),
            spantrace: SpanTrace::capture(),
        };

        let err = Self { imp: Arc::new(imp) };

        trace!(err = tracing_err(&err), "Created an error");

        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn error_has_short_id_and_displays_kind() {
        let err = err!(ConfigError::MissingAdminChat);

        assert_eq!(err.id().len(), 6);
        assert_matches!(
            err.kind(),
            ErrorKind::Config {
                source: ConfigError::MissingAdminChat
            }
        );
        assert_eq!(
            err.to_string(),
            format!(
                "Error (id: {}): Admin-only mode is enabled, \
                but the admin chat ID is not specified",
                err.id()
            )
        );
    }

    #[test]
    fn clones_share_the_same_id() {
        let err = err!(ConfigError::MissingAdminChat);
        assert_eq!(err.clone().id(), err.id());
    }
}
