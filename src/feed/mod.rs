pub mod config;
pub mod filters;
pub mod ranking;
pub mod state;

use tracing::{debug, trace};

use crate::compare::SelectionSet;
use crate::post::{Post, PostStore};
use crate::types::feed_view::{EntryAlert, EntryHints, FeedEntry, FeedView, ViewMetadata};
use crate::types::identifiers::{PostId, UserId};
use crate::types::Viewer;
use crate::votes::{Vote, VoteLedger};
pub use config::{FeedConfig, RelevanceBand};
pub use filters::{filter_visible, ModerationFilter, Visibility, VisibilityFilter, RELEVANCE_THRESHOLD};
pub use ranking::{compare, rank, SortMode};
pub use state::{EventOutcome, FeedEvent, FeedState};

/// Visible posts for `viewer`, ranked by `mode`.
pub fn view<'a, I>(posts: I, viewer: &Viewer, mode: SortMode) -> Vec<&'a Post>
where
    I: IntoIterator<Item = &'a Post>,
{
    view_with(&ModerationFilter, posts, viewer, mode)
}

pub fn view_with<'a, F, I>(filter: &F, posts: I, viewer: &Viewer, mode: SortMode) -> Vec<&'a Post>
where
    F: VisibilityFilter + ?Sized,
    I: IntoIterator<Item = &'a Post>,
{
    let mut visible = filter_visible(filter, posts, viewer);
    rank(&mut visible, mode);
    visible
}

/// Owns one feed's posts, votes, selection and sort mode.
///
/// Every event replaces the current `FeedState` with its successor; reads
/// recompute the filtered, ranked view from whatever snapshot is current.
pub struct FeedEngine<F = ModerationFilter> {
    config: FeedConfig,
    filter: F,
    state: FeedState,
}

impl FeedEngine<ModerationFilter> {
    pub fn new(posts: PostStore, config: FeedConfig) -> Self {
        Self::with_filter(posts, config, ModerationFilter)
    }
}

impl<F> FeedEngine<F>
where
    F: VisibilityFilter,
{
    pub fn with_filter(posts: PostStore, config: FeedConfig, filter: F) -> Self {
        let ledger = VoteLedger::new(config.revote_policy);
        let state = FeedState::new(posts, ledger, config.default_sort);
        Self {
            config,
            filter,
            state,
        }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn posts(&self) -> &PostStore {
        &self.state.posts
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.state.selection
    }

    pub fn sort_mode(&self) -> SortMode {
        self.state.sort
    }

    pub fn dispatch(&mut self, event: FeedEvent) -> EventOutcome {
        let (next, outcome) = self.state.apply(&event);

        match &outcome {
            EventOutcome::UnknownPost(id) => {
                debug!(post = %id, ?event, "ignoring event for unknown post");
            }
            _ => {
                trace!(?event, ?outcome, "feed event applied");
            }
        }

        self.state = next;
        outcome
    }

    /// Returns the applied delta, or `None` when the post is unknown.
    pub fn vote(&mut self, post: &PostId, viewer: &UserId, vote: Vote) -> Option<i64> {
        let event = FeedEvent::Vote {
            post: post.clone(),
            viewer: viewer.clone(),
            vote,
        };
        match self.dispatch(event) {
            EventOutcome::Voted { delta, .. } => Some(delta),
            _ => None,
        }
    }

    /// Returns false when the post is unknown. Dismissing twice is fine.
    pub fn dismiss_misconception(&mut self, post: &PostId) -> bool {
        let outcome = self.dispatch(FeedEvent::DismissMisconception { post: post.clone() });
        outcome == EventOutcome::Applied
    }

    pub fn toggle_selection(&mut self, post: &PostId) -> &SelectionSet {
        self.dispatch(FeedEvent::ToggleSelection { post: post.clone() });
        &self.state.selection
    }

    pub fn clear_selection(&mut self) {
        self.dispatch(FeedEvent::ClearSelection);
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.dispatch(FeedEvent::SetSort { mode });
    }

    pub fn vote_of(&self, viewer: &UserId, post: &PostId) -> Vote {
        self.state.ledger.vote_of(viewer, post)
    }

    pub fn visible_posts(&self, viewer: &Viewer) -> Vec<&Post> {
        view_with(&self.filter, self.state.posts.iter(), viewer, self.state.sort)
    }

    /// The two selected posts in selection order, once two are selected.
    pub fn comparison(&self) -> Option<(&Post, &Post)> {
        let (first, second) = self.state.selection.pair()?;
        let posts = &self.state.posts;
        Some((posts.get(first)?, posts.get(second)?))
    }

    pub fn render(&self, viewer: &Viewer) -> FeedView {
        let posts = &self.state.posts;

        let mut hidden_low_relevance = 0;
        let mut hidden_shadow_banned = 0;
        for post in posts.iter() {
            match self.filter.classify(post, viewer) {
                Visibility::HiddenLowRelevance => hidden_low_relevance += 1,
                Visibility::HiddenShadowBanned => hidden_shadow_banned += 1,
                Visibility::Visible => {}
            }
        }

        let entries: Vec<FeedEntry> = self
            .visible_posts(viewer)
            .into_iter()
            .map(|post| FeedEntry {
                post: post.clone(),
                version: post.version(),
                hints: self.hints_for(post, viewer),
            })
            .collect();

        let metadata = ViewMetadata {
            sort: self.state.sort,
            posts_considered: posts.len(),
            posts_visible: entries.len(),
            hidden_low_relevance,
            hidden_shadow_banned,
            selected: self.state.selection.ids().to_vec(),
            compare_state: self.state.selection.compare_state(),
        };

        debug_assert_eq!(
            metadata.posts_visible + hidden_low_relevance + hidden_shadow_banned,
            metadata.posts_considered
        );

        FeedView { entries, metadata }
    }

    fn hints_for(&self, post: &Post, viewer: &Viewer) -> EntryHints {
        let is_author = viewer.is_author_of(post);

        let alert = match (&post.misconception_reason, &post.ai_warning) {
            (Some(reason), _) if post.has_misconception => Some(EntryAlert::Misconception {
                reason: reason.clone(),
            }),
            (_, Some(message)) => Some(EntryAlert::AiWarning {
                message: message.clone(),
            }),
            _ => None,
        };

        let viewer_vote = viewer
            .id
            .as_ref()
            .map(|id| self.state.ledger.vote_of(id, &post.id))
            .unwrap_or_default();

        EntryHints {
            is_author,
            is_selected: self.state.selection.contains(&post.id),
            relevance_band: self.config.relevance_band(post.ai_relevance),
            shadow_ban_notice: post.shadow_banned && is_author,
            alert,
            viewer_vote,
        }
    }
}
