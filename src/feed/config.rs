use serde::{Deserialize, Serialize};

use crate::feed::ranking::SortMode;
use crate::votes::RevotePolicy;

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Visible posts at or below this relevance are marked low.
    pub low_relevance_ceiling: u8,
    /// Visible posts above this relevance are highlighted.
    pub high_relevance_floor: u8,
    pub default_sort: SortMode,
    pub revote_policy: RevotePolicy,
}

impl FeedConfig {
    pub fn v0() -> Self {
        Self {
            low_relevance_ceiling: 70,
            high_relevance_floor: 90,
            default_sort: SortMode::Relevance,
            revote_policy: RevotePolicy::Reaffirm,
        }
    }

    pub fn relevance_band(&self, relevance: u8) -> RelevanceBand {
        if relevance <= self.low_relevance_ceiling {
            RelevanceBand::Low
        } else if relevance > self.high_relevance_floor {
            RelevanceBand::High
        } else {
            RelevanceBand::Standard
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::v0()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelevanceBand {
    Low,
    Standard,
    High,
}
