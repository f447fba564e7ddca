use crate::post::Post;
use crate::types::Viewer;

/// Posts scored below this are never shown, not even to their author.
pub const RELEVANCE_THRESHOLD: u8 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    HiddenLowRelevance,
    HiddenShadowBanned,
}

pub trait VisibilityFilter {
    fn classify(&self, post: &Post, viewer: &Viewer) -> Visibility;

    fn is_visible(&self, post: &Post, viewer: &Viewer) -> bool {
        self.classify(post, viewer) == Visibility::Visible
    }
}

/// Relevance threshold first, then shadow-ban self-visibility.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModerationFilter;

impl VisibilityFilter for ModerationFilter {
    fn classify(&self, post: &Post, viewer: &Viewer) -> Visibility {
        if post.ai_relevance < RELEVANCE_THRESHOLD {
            Visibility::HiddenLowRelevance
        } else if post.shadow_banned && !viewer.is_author_of(post) {
            Visibility::HiddenShadowBanned
        } else {
            Visibility::Visible
        }
    }
}

/// Visible posts in input order.
pub fn filter_visible<'a, F, I>(filter: &F, posts: I, viewer: &Viewer) -> Vec<&'a Post>
where
    F: VisibilityFilter + ?Sized,
    I: IntoIterator<Item = &'a Post>,
{
    posts
        .into_iter()
        .filter(|post| filter.is_visible(post, viewer))
        .collect()
}
