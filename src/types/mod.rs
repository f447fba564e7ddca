pub mod feed_view;
pub mod identifiers;
pub mod viewer;

pub use feed_view::{EntryAlert, EntryHints, FeedEntry, FeedError, FeedView, ViewMetadata};
pub use identifiers::{IdentifierError, PostId, PostVersion, TopicId, UserId};
pub use viewer::Viewer;
