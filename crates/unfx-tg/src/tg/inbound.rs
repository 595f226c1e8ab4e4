use crate::relay::{ContentKind, InboundMessage, Sender};
use teloxide::types::{MediaKind, Message, MessageKind};

pub(crate) fn from_tg(msg: &Message) -> InboundMessage {
    InboundMessage {
        chat_id: msg.chat.id,
        chat_title: msg.chat.title().map(ToOwned::to_owned),
        message_id: msg.id,
        sender: msg.from().map(|user| Sender {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            username: user.username.clone(),
        }),
        timestamp: msg.date,
        content: content_kind(msg),
        text: msg.text().map(ToOwned::to_owned),
    }
}

fn content_kind(msg: &Message) -> ContentKind {
    let media = match &msg.kind {
        MessageKind::Common(common) => &common.media_kind,
        MessageKind::Dice(_) => return ContentKind::Dice,
        _ => return ContentKind::Other,
    };

    match media {
        MediaKind::Text(_) => ContentKind::Text,
        MediaKind::Photo(_) => ContentKind::Photo,
        MediaKind::Video(_) => ContentKind::Video,
        MediaKind::Animation(_) => ContentKind::Animation,
        MediaKind::Audio(_) => ContentKind::Audio,
        MediaKind::Document(_) => ContentKind::Document,
        MediaKind::Sticker(_) => ContentKind::Sticker,
        MediaKind::Voice(_) => ContentKind::Voice,
        MediaKind::VideoNote(_) => ContentKind::VideoNote,
        MediaKind::Contact(_) => ContentKind::Contact,
        MediaKind::Location(_) => ContentKind::Location,
        MediaKind::Venue(_) => ContentKind::Venue,
        MediaKind::Poll(_) => ContentKind::Poll,
        MediaKind::Game(_) => ContentKind::Game,
        _ => ContentKind::Other,
    }
}
