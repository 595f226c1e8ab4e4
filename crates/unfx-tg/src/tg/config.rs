use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub(crate) struct Config {
    /// Bot API token issued by `@BotFather`
    pub(crate) token: String,
}
