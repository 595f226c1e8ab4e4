use chrono::{DateTime, Utc};
use teloxide::types::{ChatId, MessageId, UserId};

/// Platform-independent view of a message received from a chat
#[derive(Debug, Clone)]
pub(crate) struct InboundMessage {
    pub(crate) chat_id: ChatId,
    pub(crate) chat_title: Option<String>,
    pub(crate) message_id: MessageId,
    pub(crate) sender: Option<Sender>,
    pub(crate) timestamp: DateTime<Utc>,
    pub(crate) content: ContentKind,
    pub(crate) text: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct Sender {
    pub(crate) id: UserId,
    pub(crate) first_name: String,
    pub(crate) last_name: Option<String>,
    pub(crate) username: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "title_case")]
pub(crate) enum ContentKind {
    Text,
    Photo,
    Video,
    Animation,
    Audio,
    Document,
    Sticker,
    Voice,
    VideoNote,
    Contact,
    Location,
    Venue,
    Poll,
    Dice,
    Game,
    Other,
}

/// A message that the bot wants to deliver. It lives only until it is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OutboundMessage {
    pub(crate) chat_id: ChatId,
    pub(crate) body: String,
    pub(crate) format: Format,

    /// If set, the message is sent as a reply to the given message
    pub(crate) reply_to: Option<MessageId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Plain,

    /// Telegram's `MarkdownV2` flavor
    Markdown,
}

impl OutboundMessage {
    pub(crate) fn send(chat_id: ChatId, format: Format, body: impl Into<String>) -> Self {
        Self {
            chat_id,
            body: body.into(),
            format,
            reply_to: None,
        }
    }

    pub(crate) fn reply(to: &InboundMessage, format: Format, body: impl Into<String>) -> Self {
        Self {
            reply_to: Some(to.message_id),
            ..Self::send(to.chat_id, format, body)
        }
    }
}
