use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    id: String,
    name: String,
    score: u32,
    avatar_seed: String,
    is_current_user: bool,
}

impl LeaderboardEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        score: u32,
        avatar_seed: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            score,
            avatar_seed: avatar_seed.into(),
            is_current_user: false,
        }
    }

    pub fn current_user(mut self) -> Self {
        self.is_current_user = true;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn avatar_seed(&self) -> &str {
        &self.avatar_seed
    }

    pub fn is_current_user(&self) -> bool {
        self.is_current_user
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    rank: usize,
    #[serde(flatten)]
    entry: LeaderboardEntry,
}

impl RankedEntry {
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn entry(&self) -> &LeaderboardEntry {
        &self.entry
    }
}

/// Sort by score, highest first, and number the result from 1. Ties keep
/// their input order.
pub fn rank_entries(mut entries: Vec<LeaderboardEntry>) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankedEntry { rank: i + 1, entry })
        .collect()
}
