use crate::error::{err, ConfigError};
use crate::Result;
use serde::Deserialize;
use std::collections::HashSet;
use teloxide::types::ChatId;

#[derive(Deserialize, Debug, Clone, Default)]
pub(crate) struct AccessConfig {
    /// Process messages only from [`AccessConfig::admin_chat_id`]
    #[serde(default)]
    pub(crate) admin_only: bool,

    pub(crate) admin_chat_id: Option<ChatId>,

    /// Chats whose messages are always ignored
    #[serde(default)]
    pub(crate) blocklist: Vec<ChatId>,
}

/// Decides which chats the bot talks to
#[derive(Debug)]
pub(crate) struct AccessFilter {
    /// `Some` only in admin-only mode
    admin_chat: Option<ChatId>,
    blocklist: HashSet<ChatId>,
}

impl AccessFilter {
    pub(crate) fn new(cfg: AccessConfig) -> Result<Self> {
        let admin_chat = match (cfg.admin_only, cfg.admin_chat_id) {
            (false, _) => None,
            (true, Some(chat)) => Some(chat),
            (true, None) => return Err(err!(ConfigError::MissingAdminChat)),
        };

        Ok(Self {
            admin_chat,
            blocklist: cfg.blocklist.into_iter().collect(),
        })
    }

    pub(crate) fn should_process(&self, chat: ChatId) -> bool {
        if self.admin_chat.is_some_and(|admin| admin != chat) {
            return false;
        }
        !self.blocklist.contains(&chat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::{expect, Expect};

    const ADMIN: ChatId = ChatId(1);
    const BLOCKED: ChatId = ChatId(2);
    const OTHER: ChatId = ChatId(3);

    #[track_caller]
    fn assert_access(admin_only: bool, blocklist: &[ChatId], expected: Expect) {
        let filter = AccessFilter::new(AccessConfig {
            admin_only,
            admin_chat_id: Some(ADMIN),
            blocklist: blocklist.to_vec(),
        })
        .unwrap();

        let actual = [ADMIN, BLOCKED, OTHER]
            .map(|chat| format!("{}:{}", chat, filter.should_process(chat)))
            .join(" ");

        expected.assert_eq(&actual);
    }

    #[test]
    fn truth_table() {
        use assert_access as test;

        test(false, &[], expect!["1:true 2:true 3:true"]);
        test(false, &[BLOCKED], expect!["1:true 2:false 3:true"]);
        test(true, &[], expect!["1:true 2:false 3:false"]);
        test(true, &[BLOCKED], expect!["1:true 2:false 3:false"]);

        // Blocklist wins even over the admin chat
        test(true, &[ADMIN], expect!["1:false 2:false 3:false"]);
        test(false, &[ADMIN, OTHER], expect!["1:false 2:true 3:false"]);
    }

    #[test]
    fn admin_chat_is_ignored_when_not_admin_only() {
        let filter = AccessFilter::new(AccessConfig {
            admin_only: false,
            admin_chat_id: None,
            blocklist: vec![],
        })
        .unwrap();

        assert!(filter.should_process(OTHER));
    }

    #[test]
    fn admin_only_requires_admin_chat() {
        let err = AccessFilter::new(AccessConfig {
            admin_only: true,
            admin_chat_id: None,
            blocklist: vec![],
        })
        .unwrap_err();

        expect!["Admin-only mode is enabled, but the admin chat ID is not specified"]
            .assert_eq(&err.kind().to_string());
    }
}
