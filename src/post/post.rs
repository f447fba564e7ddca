use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::{PostId, PostVersion, TopicId, UserId};

/// Highest value the external relevance classifier produces.
pub const MAX_RELEVANCE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    Verified,
    Partial,
    Incorrect,
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: UserId,
    pub display_name: String,
}

impl Author {
    pub fn new(id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

/// A peer-submitted solution post.
///
/// `weighted_score` is only ever moved by vote deltas and
/// `has_misconception` only ever cleared by dismissal; every other field is
/// fixed at ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub code: String,

    /// Pre-computed classifier score, 0..=100.
    pub ai_relevance: u8,
    #[serde(default)]
    pub weighted_score: i64,

    #[serde(default)]
    pub shadow_banned: bool,
    #[serde(default)]
    pub has_misconception: bool,
    #[serde(default)]
    pub misconception_reason: Option<String>,
    #[serde(default)]
    pub ai_warning: Option<String>,

    #[serde(default)]
    pub validation_status: ValidationStatus,
    #[serde(default)]
    pub validation_reason: Option<String>,

    #[serde(default)]
    pub topic_id: Option<TopicId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>, // informational only
}

impl Post {
    /// A plain post: no moderation flags, unvalidated, zero score.
    pub fn new(id: PostId, author: Author, ai_relevance: u8) -> Self {
        Self {
            id,
            author,
            title: String::new(),
            code: String::new(),
            ai_relevance,
            weighted_score: 0,
            shadow_banned: false,
            has_misconception: false,
            misconception_reason: None,
            ai_warning: None,
            validation_status: ValidationStatus::None,
            validation_reason: None,
            topic_id: None,
            created_at: None,
        }
    }

    pub fn version(&self) -> PostVersion {
        PostVersion::from_code(&self.code)
    }

    pub fn is_authored_by(&self, user: &UserId) -> bool {
        &self.author.id == user
    }
}
