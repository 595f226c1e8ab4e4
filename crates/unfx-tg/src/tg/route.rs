use crate::prelude::*;
use crate::relay::Request;
use crate::tg::cmd::Cmd;
use crate::tg::{self, Ctx};
use crate::Result;
use std::sync::Arc;
use teloxide::types::{Me, Message};
use teloxide::utils::command::BotCommands;

/// Single endpoint for every message. Commands addressed to other bots and
/// unknown commands are treated as plain text.
pub(crate) async fn handle(ctx: Arc<Ctx>, msg: Message, me: Me) -> Result {
    let Some(request) = request(msg.text(), me.username()) else {
        trace!("Ignoring a message without text");
        return Ok(());
    };
    tg::respond(&ctx, &msg, request).await
}

pub(crate) fn request<'a>(text: Option<&'a str>, bot_username: &str) -> Option<Request<'a>> {
    let text = text?;

    // Arguments are ignored, so deep links like `/start ref123` still work
    let command = text.split_whitespace().next().unwrap_or_default();

    let request = match Cmd::parse(command, bot_username) {
        Ok(Cmd::Start) => Request::Start,
        Ok(Cmd::Domains) => Request::Domains,
        Err(_) => Request::Text(text),
    };

    Some(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::{expect, Expect};

    #[track_caller]
    fn assert_request(text: Option<&str>, expected: Expect) {
        let actual = request(text, "unfx_bot");
        expected.assert_eq(&format!("{actual:?}"));
    }

    #[test]
    fn commands() {
        use assert_request as test;

        test(Some("/start"), expect!["Some(Start)"]);
        test(Some("/start@unfx_bot"), expect!["Some(Start)"]);
        test(Some("/start ref123"), expect!["Some(Start)"]);
        test(Some("/domains"), expect!["Some(Domains)"]);
        test(Some("/domains@unfx_bot please"), expect!["Some(Domains)"]);
    }

    #[test]
    fn everything_else_is_text() {
        use assert_request as test;

        test(Some("/help"), expect![[r#"Some(Text("/help"))"#]]);
        test(
            Some("/start@other_bot"),
            expect![[r#"Some(Text("/start@other_bot"))"#]],
        );
        test(
            Some("https://vxtwitter.com/user/status/1"),
            expect![[r#"Some(Text("https://vxtwitter.com/user/status/1"))"#]],
        );
        test(Some(""), expect![[r#"Some(Text(""))"#]]);
    }

    #[test]
    fn message_without_text_is_ignored() {
        assert_request(None, expect!["None"]);
    }
}
