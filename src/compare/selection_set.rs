use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::PostId;

/// Number of posts a comparison needs.
pub const SELECTION_CAPACITY: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareState {
    Empty,
    Single,
    Ready,
}

/// Ordered, duplicate-free set of at most two post ids.
///
/// Once full, adding a third id evicts the oldest member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PostId>", into = "Vec<PostId>")]
pub struct SelectionSet {
    ids: Vec<PostId>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Selection holds {0} posts, at most 2 allowed")]
    OverCapacity(usize),
    #[error("Post selected twice: {0}")]
    Duplicate(String),
}

impl TryFrom<Vec<PostId>> for SelectionSet {
    type Error = SelectionError;

    fn try_from(ids: Vec<PostId>) -> Result<Self, Self::Error> {
        if ids.len() > SELECTION_CAPACITY {
            return Err(SelectionError::OverCapacity(ids.len()));
        }
        if let [first, second] = ids.as_slice() {
            if first == second {
                return Err(SelectionError::Duplicate(first.as_str().to_string()));
            }
        }
        Ok(SelectionSet { ids })
    }
}

impl From<SelectionSet> for Vec<PostId> {
    fn from(set: SelectionSet) -> Vec<PostId> {
        set.ids
    }
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&self, id: &PostId) -> SelectionSet {
        let mut ids = self.ids.clone();

        if let Some(position) = ids.iter().position(|selected| selected == id) {
            ids.remove(position);
        } else {
            if ids.len() == SELECTION_CAPACITY {
                ids.remove(0);
            }
            ids.push(id.clone());
        }

        debug_assert!(ids.len() <= SELECTION_CAPACITY);
        SelectionSet { ids }
    }

    pub fn clear(&self) -> SelectionSet {
        SelectionSet::new()
    }

    pub fn contains(&self, id: &PostId) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &[PostId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn compare_state(&self) -> CompareState {
        match self.ids.len() {
            0 => CompareState::Empty,
            1 => CompareState::Single,
            _ => CompareState::Ready,
        }
    }

    /// Both members in selection order, once the set is full.
    pub fn pair(&self) -> Option<(&PostId, &PostId)> {
        match self.ids.as_slice() {
            [first, second] => Some((first, second)),
            _ => None,
        }
    }
}
