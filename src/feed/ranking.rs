use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::post::Post;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// "Top Rated": descending weighted score.
    Score,
    /// "AI Relevance": descending classifier score.
    Relevance,
}

/// Descending by the key `mode` selects. Equal keys compare equal.
pub fn compare(a: &Post, b: &Post, mode: SortMode) -> Ordering {
    match mode {
        SortMode::Relevance => b.ai_relevance.cmp(&a.ai_relevance),
        SortMode::Score => b.weighted_score.cmp(&a.weighted_score),
    }
}

/// Stable sort: posts with equal keys keep their input order.
pub fn rank(posts: &mut [&Post], mode: SortMode) {
    posts.sort_by(|a, b| compare(a, b, mode));

    debug_assert!(posts
        .windows(2)
        .all(|w| compare(w[0], w[1], mode) != Ordering::Greater));
}
