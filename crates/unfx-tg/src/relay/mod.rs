//! Platform-independent core of the bot: who we talk to, and what we answer.

mod access;
mod model;
mod replace;

pub(crate) use access::*;
pub(crate) use model::*;
pub(crate) use replace::*;

use crate::prelude::*;
use crate::Result;
use teloxide::types::ChatId;
use teloxide::utils::markdown;

const UNKNOWN_MESSAGE_REPLY: &str = "Sorry, I don't know what to do with this message.";
const UNKNOWN_DOMAIN_REPLY: &str = "Sorry, I don't accept this domain.";

/// What the sender of a message asked for
#[derive(Debug, Clone, Copy)]
pub(crate) enum Request<'a> {
    Start,
    Domains,
    Text(&'a str),
}

#[derive(Debug)]
pub(crate) struct Relay {
    access: AccessFilter,
    replacer: DomainReplacer,
}

impl Relay {
    pub(crate) fn new(access: AccessConfig, domains: DomainsConfig) -> Result<Self> {
        let relay = Self {
            access: AccessFilter::new(access)?,
            replacer: DomainReplacer::new(domains)?,
        };

        if relay.replacer.entries().next().is_none() {
            warn!("No domain replacements are configured, every link will be rejected");
        }

        Ok(relay)
    }

    pub(crate) fn should_process(&self, chat: ChatId) -> bool {
        self.access.should_process(chat)
    }

    /// Produces the answer to the message, if any. Messages from chats
    /// rejected by the [`AccessFilter`] never get an answer.
    pub(crate) fn respond(
        &self,
        msg: &InboundMessage,
        request: Request<'_>,
    ) -> Option<OutboundMessage> {
        if !self.should_process(msg.chat_id) {
            return None;
        }

        let outbound = match request {
            Request::Start => OutboundMessage::send(msg.chat_id, Format::Markdown, start_text()),
            Request::Domains => {
                OutboundMessage::send(msg.chat_id, Format::Markdown, self.domains_text())
            }
            Request::Text(text) => OutboundMessage::reply(msg, Format::Plain, self.rewrite(text)),
        };

        Some(outbound)
    }

    fn domains_text(&self) -> String {
        let mut entries = self.replacer.entries().peekable();

        if entries.peek().is_none() {
            return markdown::escape("No domain replacements are configured at the moment.");
        }

        let lines = entries
            .map(|(src, dest)| {
                let src = markdown::code_inline(src);
                let dest = markdown::code_inline(dest);
                format!("{src} ➔ {dest}")
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!("The current domain replacements are:\n\n{lines}")
    }

    fn rewrite(&self, text: &str) -> String {
        match self.replacer.replace(text) {
            Ok(url) => url,
            Err(ReplaceError::NotApplicable { authority }) => {
                debug!(%authority, "Rejecting a link with an unknown domain");
                UNKNOWN_DOMAIN_REPLY.to_owned()
            }
            Err(err @ (ReplaceError::MalformedUrl { .. } | ReplaceError::Rebuild { .. })) => {
                debug!(err = tracing_err(&err), "Don't know what to do with the text");
                UNKNOWN_MESSAGE_REPLY.to_owned()
            }
        }
    }
}

fn start_text() -> String {
    let greeting = markdown::escape(
        "Hi! Just send me a link and I'll give you the same link with its domain replaced, \
        e.g.",
    );
    let example = markdown::code_inline("vxtwitter.com ➔ twitter.com");
    let outro = markdown::escape(
        "Try /domains to see what replacements I can make for you :)",
    );

    format!("{greeting} {example}\n\n{outro}")
}
