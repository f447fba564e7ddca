pub mod post;
pub mod store;

pub use crate::types::identifiers::{PostId, PostVersion, TopicId, UserId};
pub use post::{Author, Post, ValidationStatus, MAX_RELEVANCE};
pub use store::PostStore;
