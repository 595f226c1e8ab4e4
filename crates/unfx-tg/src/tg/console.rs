use crate::relay::InboundMessage;
use crossterm::style::{style, Color, Stylize};
use std::fmt::Display;

const MISSING: &str = "-";

/// Prints a human-readable line about every message the bot sees
#[derive(Debug, Clone, Copy)]
pub(crate) struct ConsoleLogger {
    colors: bool,
}

impl ConsoleLogger {
    pub(crate) fn new(colors: bool) -> Self {
        Self { colors }
    }

    pub(crate) fn log(&self, msg: &InboundMessage, filtered: bool) {
        let line = self.render(msg, filtered);
        tracing::info!(target: "unfx_tg::inbound", "{line}");
    }

    fn render(&self, msg: &InboundMessage, filtered: bool) -> String {
        let marker = if filtered {
            format!("{} ", self.paint("[FILTERED]", Color::Red))
        } else {
            String::new()
        };

        let time = msg.timestamp.format("%d.%m.%Y %H:%M:%S");
        let sender = msg.sender.as_ref();

        let first_name = sender.map(|s| s.first_name.as_str()).unwrap_or(MISSING);
        let last_name = sender.and_then(|s| s.last_name.as_deref()).unwrap_or(MISSING);
        let username = sender.and_then(|s| s.username.as_deref()).unwrap_or(MISSING);
        let user_id = sender
            .map(|s| s.id.0.to_string())
            .unwrap_or_else(|| MISSING.to_owned());
        let chat_title = msg.chat_title.as_deref().unwrap_or(MISSING);

        let head = format!(
            "[{} {} {} {} {} {} @ {} {}]",
            self.paint(time, Color::DarkGrey),
            self.paint(format!("#{}", msg.message_id.0), Color::DarkGrey),
            self.paint(first_name, Color::Green),
            self.paint(last_name, Color::Green),
            self.paint(format!("@{username}"), Color::Cyan),
            self.paint(format!("#{user_id}"), Color::DarkGrey),
            self.paint(chat_title, Color::Magenta),
            self.paint(format!("#{}", msg.chat_id.0), Color::DarkGrey),
        );

        let body = match &msg.text {
            Some(text) => text.clone(),
            None => self.paint(msg.content, Color::Blue),
        };

        format!("{marker}{head} {body}")
    }

    fn paint(&self, value: impl Display, color: Color) -> String {
        if self.colors {
            style(value).with(color).to_string()
        } else {
            value.to_string()
        }
    }
}
