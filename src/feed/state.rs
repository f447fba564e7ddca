use serde::{Deserialize, Serialize};

use crate::compare::SelectionSet;
use crate::feed::ranking::SortMode;
use crate::post::PostStore;
use crate::types::identifiers::{PostId, UserId};
use crate::votes::{Vote, VoteLedger};

/// A discrete user action against the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FeedEvent {
    Vote {
        post: PostId,
        viewer: UserId,
        vote: Vote,
    },
    ToggleSelection {
        post: PostId,
    },
    ClearSelection,
    SetSort {
        mode: SortMode,
    },
    DismissMisconception {
        post: PostId,
    },
}

/// What applying an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Applied,
    /// A vote landed; `delta` was added to the post's weighted score.
    Voted { delta: i64, score: i64 },
    /// The event named a post the store does not hold. Nothing changed.
    UnknownPost(PostId),
}

/// Everything the engine owns, as one value.
///
/// Transitions never mutate a snapshot in place: `apply` reads `&self` and
/// returns the successor.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    pub(crate) posts: PostStore,
    pub(crate) ledger: VoteLedger,
    pub(crate) selection: SelectionSet,
    pub(crate) sort: SortMode,
}

impl FeedState {
    pub fn new(posts: PostStore, ledger: VoteLedger, sort: SortMode) -> Self {
        Self {
            posts,
            ledger,
            selection: SelectionSet::new(),
            sort,
        }
    }

    pub fn posts(&self) -> &PostStore {
        &self.posts
    }

    pub fn ledger(&self) -> &VoteLedger {
        &self.ledger
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn apply(&self, event: &FeedEvent) -> (FeedState, EventOutcome) {
        match event {
            FeedEvent::Vote { post, viewer, vote } => self.apply_vote(post, viewer, *vote),
            FeedEvent::ToggleSelection { post } => {
                if !self.posts.contains(post) {
                    return (self.clone(), EventOutcome::UnknownPost(post.clone()));
                }
                let next = FeedState {
                    selection: self.selection.toggle(post),
                    ..self.clone()
                };
                (next, EventOutcome::Applied)
            }
            FeedEvent::ClearSelection => {
                let next = FeedState {
                    selection: self.selection.clear(),
                    ..self.clone()
                };
                (next, EventOutcome::Applied)
            }
            FeedEvent::SetSort { mode } => {
                let next = FeedState {
                    sort: *mode,
                    ..self.clone()
                };
                (next, EventOutcome::Applied)
            }
            FeedEvent::DismissMisconception { post } => {
                let mut next = self.clone();
                let outcome = match next.posts.get_mut(post) {
                    Some(target) => {
                        target.has_misconception = false;
                        EventOutcome::Applied
                    }
                    None => EventOutcome::UnknownPost(post.clone()),
                };
                (next, outcome)
            }
        }
    }

    fn apply_vote(&self, post: &PostId, viewer: &UserId, vote: Vote) -> (FeedState, EventOutcome) {
        let mut next = self.clone();

        // Unknown posts leave the ledger untouched too.
        let outcome = match next.posts.get_mut(post) {
            Some(target) => {
                let delta = next.ledger.apply_vote(post, viewer, vote);
                // Clamps at the i64 bounds instead of wrapping.
                target.weighted_score = target.weighted_score.saturating_add(delta);
                EventOutcome::Voted {
                    delta,
                    score: target.weighted_score,
                }
            }
            None => EventOutcome::UnknownPost(post.clone()),
        };

        (next, outcome)
    }
}
