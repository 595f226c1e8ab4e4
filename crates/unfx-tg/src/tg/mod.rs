//! Telegram transport: long polling, update routing and message delivery

mod cmd;
mod config;
mod console;
mod deliver;
mod inbound;
mod route;

use crate::error::{err_ctx, TransportError};
use crate::prelude::*;
use crate::relay::Relay;
use crate::{supervisor, Error, Result};
use async_trait::async_trait;
use console::ConsoleLogger;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use teloxide::adaptors::{CacheMe, Throttle, Trace};
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::Me;
use teloxide::utils::command::BotCommands;

pub(crate) use config::*;

pub(crate) type Bot = Trace<CacheMe<Throttle<teloxide::Bot>>>;

/// How long a single `getUpdates` request waits for new updates
const LONG_POLL_TIMEOUT: Duration = Duration::from_secs(10);

pub(crate) struct Ctx {
    bot: Bot,
    relay: Relay,
    console: ConsoleLogger,
}

pub(crate) struct TgTransport {
    ctx: Arc<Ctx>,
    handler: UpdateHandler<Error>,

    /// Identifier of the next update to fetch. It survives restarts of the
    /// polling, so that updates that were already seen aren't handled twice.
    offset: AtomicI32,
}

impl TgTransport {
    pub(crate) fn new(cfg: Config, relay: Relay) -> Self {
        let bot: Bot = teloxide::Bot::new(cfg.token)
            .throttle(Default::default())
            .cache_me()
            .trace(teloxide::adaptors::trace::Settings::all());

        let ctx = Ctx {
            bot,
            relay,
            console: ConsoleLogger::new(crate::observability::logging::colors_enabled()),
        };

        Self {
            ctx: Arc::new(ctx),
            handler: schema(),
            offset: AtomicI32::new(0),
        }
    }

    async fn dispatch(&self, update: Update, me: Me) -> Result {
        let update_id = update.id;
        let deps = dptree::deps![update, me, self.ctx.clone()];

        match self.handler.dispatch(deps).await {
            ControlFlow::Break(result) => result,
            ControlFlow::Continue(_) => {
                trace!(update_id, "Skipped the update, no handler is interested in it");
                Ok(())
            }
        }
    }
}

#[async_trait]
impl supervisor::Transport for TgTransport {
    async fn poll_forever(&self) -> Result {
        let bot = &self.ctx.bot;

        let me = bot.get_me().await.map_err(err_ctx!(TransportError::GetMe))?;

        info!(username = me.username(), "Identified the bot");

        bot.set_my_commands(cmd::Cmd::bot_commands())
            .await
            .map_err(err_ctx!(TransportError::SetMyCommands))?;

        loop {
            let updates = bot
                .get_updates()
                .offset(self.offset.load(Ordering::Relaxed))
                .timeout(LONG_POLL_TIMEOUT.as_secs() as u32)
                .await
                .map_err(err_ctx!(TransportError::GetUpdates))?;

            // Updates are handled strictly one by one, in the order of arrival
            for update in updates {
                self.offset.store(update.id + 1, Ordering::Relaxed);
                self.dispatch(update, me.clone()).await?;
            }
        }
    }
}

/// Routes every incoming update to its handler
fn schema() -> UpdateHandler<Error> {
    let on_message = Update::filter_message()
        .inspect(|ctx: Arc<Ctx>, msg: Message| {
            let filtered = !ctx.relay.should_process(msg.chat.id);
            ctx.console.log(&inbound::from_tg(&msg), filtered);
        })
        .endpoint(route::handle);

    dptree::entry().branch(on_message)
}

/// Answers the message via the [`Relay`], if it has anything to say
async fn respond(ctx: &Ctx, msg: &Message, request: crate::relay::Request<'_>) -> Result {
    let span = info_span!(
        "respond",
        sender = msg.from().map(|user| user.debug_id()).as_deref(),
        chat = %msg.chat.debug_id(),
        msg_id = msg.id.0,
        request = ?request,
    );

    async {
        let inbound = inbound::from_tg(msg);

        let Some(outbound) = ctx.relay.respond(&inbound, request) else {
            debug!("The chat is not served by the bot, ignoring the message");
            return Ok(());
        };

        deliver::deliver(&ctx.bot, outbound)
            .with_duration_log("Delivered the answer")
            .await
    }
    .instrument(span)
    .await
}
