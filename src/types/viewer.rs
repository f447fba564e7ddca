use serde::{Deserialize, Serialize};

use crate::post::Post;
use crate::types::identifiers::UserId;

/// The person a feed is being rendered for.
///
/// `display_name` is presentation only. Authorship is decided on `id`, and a
/// viewer without one is never the author of anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub id: Option<UserId>,
    pub display_name: String,
}

impl Viewer {
    pub fn new(id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            display_name: display_name.into(),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            id: None,
            display_name: String::new(),
        }
    }

    pub fn is_author_of(&self, post: &Post) -> bool {
        self.id
            .as_ref()
            .is_some_and(|id| post.is_authored_by(id))
    }
}
