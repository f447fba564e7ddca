use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::identifiers::{PostId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Up,
    Down,
    #[default]
    None,
}

impl Vote {
    pub fn value(self) -> i64 {
        match self {
            Vote::Up => 1,
            Vote::Down => -1,
            Vote::None => 0,
        }
    }
}

/// What re-casting the vote a viewer already holds means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevotePolicy {
    /// up -> up stays up; the delta is 0.
    #[default]
    Reaffirm,
    /// up -> up clears the vote; the delta is -1 (and +1 for down -> down).
    Retract,
}

/// One entry per (viewer, post). Missing entries read as `Vote::None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteLedger {
    policy: RevotePolicy,
    votes: BTreeMap<(UserId, PostId), Vote>,
}

impl VoteLedger {
    pub fn new(policy: RevotePolicy) -> Self {
        Self {
            policy,
            votes: BTreeMap::new(),
        }
    }

    pub fn policy(&self) -> RevotePolicy {
        self.policy
    }

    pub fn vote_of(&self, viewer: &UserId, post: &PostId) -> Vote {
        self.votes
            .get(&(viewer.clone(), post.clone()))
            .copied()
            .unwrap_or_default()
    }

    /// Record `new_vote` for the pair and return the signed score delta.
    ///
    /// The entry is overwritten even when the delta is 0.
    pub fn apply_vote(&mut self, post: &PostId, viewer: &UserId, new_vote: Vote) -> i64 {
        let previous = self.vote_of(viewer, post);

        let recorded = match self.policy {
            RevotePolicy::Retract if new_vote == previous => Vote::None,
            _ => new_vote,
        };

        self.votes.insert((viewer.clone(), post.clone()), recorded);

        recorded.value() - previous.value()
    }

    /// Net value of every recorded vote on `post`.
    pub fn tally(&self, post: &PostId) -> i64 {
        self.votes
            .iter()
            .filter(|((_, voted), _)| voted == post)
            .map(|(_, vote)| vote.value())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }
}
