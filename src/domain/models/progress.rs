use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

/// Progress added each time a part of a lesson is completed.
pub const LESSON_PART_PERCENT: u8 = 25;

/// Per-lesson completion percentage for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LessonProgress {
    percent: BTreeMap<String, u8>,
}

impl LessonProgress {
    /// Seed demo progress: half the lessons untouched, and of the rest roughly
    /// a third finished and the others somewhere between 10 and 79 percent.
    pub fn seed<'a, R: Rng + ?Sized>(
        lesson_ids: impl IntoIterator<Item = &'a str>,
        rng: &mut R,
    ) -> Self {
        let percent = lesson_ids
            .into_iter()
            .map(|id| {
                let value = if rng.gen_bool(0.5) {
                    if rng.gen_bool(0.3) {
                        100
                    } else {
                        rng.gen_range(10..80)
                    }
                } else {
                    0
                };
                (id.to_string(), value)
            })
            .collect();
        Self { percent }
    }

    /// Complete one part of `lesson_id`, capped at 100. A lesson without an
    /// entry starts from 0. Returns the new percentage.
    pub fn advance(&mut self, lesson_id: &str) -> u8 {
        let entry = self.percent.entry(lesson_id.to_string()).or_insert(0);
        *entry = entry.saturating_add(LESSON_PART_PERCENT).min(100);
        *entry
    }

    pub fn get(&self, lesson_id: &str) -> Option<u8> {
        self.percent.get(lesson_id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> + '_ {
        self.percent.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn completed(&self) -> usize {
        self.percent.values().filter(|p| **p == 100).count()
    }

    pub fn len(&self) -> usize {
        self.percent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.percent.is_empty()
    }
}
