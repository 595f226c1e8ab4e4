use crate::error::{err_ctx, TransportError};
use crate::relay::{Format, OutboundMessage};
use crate::tg::Bot;
use crate::Result;
use teloxide::prelude::*;
use teloxide::types::ParseMode;

/// Sends the message, or replies with it if it references another message
pub(crate) async fn deliver(bot: &Bot, msg: OutboundMessage) -> Result {
    let OutboundMessage {
        chat_id,
        body,
        format,
        reply_to,
    } = msg;

    let mut request = bot.send_message(chat_id, body);

    if let Format::Markdown = format {
        request = request.parse_mode(ParseMode::MarkdownV2);
    }

    if let Some(reply_to) = reply_to {
        request = request
            .reply_to_message_id(reply_to)
            .allow_sending_without_reply(true);
    }

    request
        .await
        .map_err(err_ctx!(TransportError::Deliver { chat_id }))?;

    Ok(())
}
