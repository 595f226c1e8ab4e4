use teloxide::macros::BotCommands;

#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Commands:")]
pub(crate) enum Cmd {
    #[command(description = "show the guide")]
    Start,

    #[command(description = "list the domains I can replace")]
    Domains,
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::{expect, Expect};
    use teloxide::utils::command::BotCommands;

    #[track_caller]
    fn assert_parse(text: &str, expected: Expect) {
        let actual = match Cmd::parse(text, "unfx_bot") {
            Ok(cmd) => format!("{cmd:?}"),
            Err(_) => "None".to_owned(),
        };
        expected.assert_eq(&actual);
    }

    #[test]
    fn parsing() {
        use assert_parse as test;

        test("/start", expect!["Start"]);
        test("/domains", expect!["Domains"]);
        test("/domains@unfx_bot", expect!["Domains"]);
        test("/domains@other_bot", expect!["None"]);
        test("/help", expect!["None"]);
        test("https://vxtwitter.com/user/status/1", expect!["None"]);
    }
}
