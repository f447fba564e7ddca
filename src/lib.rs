//! Deterministic ranking, moderation and comparison engine for community
//! solution feeds.
//!
//! `feed-core` decides which posts a viewer sees (relevance threshold and
//! shadow-ban self-visibility), orders them by score or classifier
//! relevance, keeps per-viewer votes idempotent, and maintains the
//! two-post selection that drives side-by-side comparison. Identical state
//! always renders identical output.

pub mod compare;
pub mod feed;
pub mod post;
pub mod types;
pub mod votes;
