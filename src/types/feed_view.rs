use serde::{Deserialize, Serialize};

use crate::compare::CompareState;
use crate::feed::config::RelevanceBand;
use crate::feed::ranking::SortMode;
use crate::post::Post;
use crate::types::identifiers::{PostId, PostVersion};
use crate::votes::Vote;

/// Banner a card shows above its code. A flagged misconception with a reason
/// takes priority over the classifier warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryAlert {
    Misconception { reason: String },
    AiWarning { message: String },
}

/// Viewer-specific facts the presentation layer renders from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryHints {
    pub is_author: bool,
    pub is_selected: bool,
    pub relevance_band: RelevanceBand,
    /// Only ever true for the author of a shadow-banned post.
    pub shadow_ban_notice: bool,
    pub alert: Option<EntryAlert>,
    pub viewer_vote: Vote,
}

/// A visible post in ranked position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub post: Post,
    pub version: PostVersion,
    pub hints: EntryHints,
}

/// Counts describing how the view was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewMetadata {
    pub sort: SortMode,

    pub posts_considered: usize,
    pub posts_visible: usize,
    pub hidden_low_relevance: usize,
    pub hidden_shadow_banned: usize,

    pub selected: Vec<PostId>,
    pub compare_state: CompareState,
}

/// The rendered feed for one viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedView {
    pub entries: Vec<FeedEntry>,
    pub metadata: ViewMetadata,
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Duplicate post ID: {0}")]
    DuplicatePostId(String),

    #[error("Relevance {relevance} out of range for post {id}")]
    RelevanceOutOfRange { id: String, relevance: u8 },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
