use easy_ext::ext;
use teloxide::types::{Chat, User};

pub(crate) mod prelude {
    pub(crate) use super::{ChatExt as _, UserExt as _};
}

#[ext(UserExt)]
pub(crate) impl User {
    fn debug_id(&self) -> String {
        let name = self.username.clone().unwrap_or_else(|| self.full_name());
        format!("{name} ({})", self.id)
    }
}

#[ext(ChatExt)]
pub(crate) impl Chat {
    fn debug_id(&self) -> String {
        let title = self.title().unwrap_or("{unknown_chat_title}");
        match self.username() {
            Some(username) => format!("{title} ({username}, {})", self.id),
            None => format!("{title} ({})", self.id),
        }
    }
}
