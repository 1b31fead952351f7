//! RoleColor scorer: keyword-frequency model over the fixed taxonomy.
//!
//! Algorithm:
//! 1. Normalize: lowercase, replace anything outside `[a-z0-9\s-]` with a space, split on whitespace.
//! 2. Per role, per keyword:
//!    - multi-word keyword → non-overlapping substring count `n` in the lowercased raw text
//!    - single-word keyword → exact token count `n`
//!    - `n > 0` adds `1 + ln(1 + n)`
//! 3. Normalize raw scores to a distribution (4 d.p.); uniform 0.25 when nothing matched.
//!
//! Rounding means the distribution may sum to 1.0 ± 0.0002. That is expected.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::scoring::taxonomy::RoleColor;

/// One score per role, always in taxonomy order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleScores([f64; 4]);

impl RoleScores {
    pub fn new(scores: [f64; 4]) -> Self {
        Self(scores)
    }

    pub fn uniform() -> Self {
        let share = 1.0 / RoleColor::ALL.len() as f64;
        Self([share; 4])
    }

    pub fn get(&self, role: RoleColor) -> f64 {
        self.0[role.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoleColor, f64)> + '_ {
        RoleColor::ALL
            .into_iter()
            .map(move |role| (role, self.get(role)))
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

// Serialized as `{"Builders": .., "Enablers": .., ..}` in taxonomy order.
impl Serialize for RoleScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(RoleColor::ALL.len()))?;
        for (role, score) in self.iter() {
            map.serialize_entry(role.as_str(), &score)?;
        }
        map.end()
    }
}

/// Lowercased text plus its normalized tokens.
#[derive(Debug, Clone)]
pub struct PreparedText {
    /// Full lowercased text, otherwise untouched. Used for multi-word keywords.
    pub lowered: String,
    pub tokens: Vec<String>,
}

/// Lowercases and tokenizes `text`. Empty input yields no tokens.
pub fn preprocess_text(text: &str) -> PreparedText {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect();
    let tokens = cleaned.split_whitespace().map(str::to_string).collect();

    PreparedText { lowered, tokens }
}

fn keyword_weight(occurrences: usize) -> f64 {
    1.0 + (occurrences as f64).ln_1p()
}

/// Pre-normalization score per role.
pub fn raw_scores(text: &str) -> RoleScores {
    let prepared = preprocess_text(text);
    if prepared.tokens.is_empty() {
        return RoleScores::new([0.0; 4]);
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in &prepared.tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let mut scores = [0.0_f64; 4];
    for role in RoleColor::ALL {
        let mut role_score = 0.0;
        for kw in role.keywords() {
            let occurrences = if kw.contains(' ') {
                // Raw substring count, not token-boundary aware.
                prepared.lowered.matches(kw).count()
            } else {
                counts.get(kw).copied().unwrap_or(0)
            };
            if occurrences > 0 {
                role_score += keyword_weight(occurrences);
            }
        }
        scores[role.index()] = role_score;
    }

    debug!(
        "Raw role scores over {} tokens: {:?}",
        prepared.tokens.len(),
        scores
    );
    RoleScores::new(scores)
}

/// Scores `text` across all four roles as a probability distribution.
pub fn score_resume(text: &str) -> RoleScores {
    let raw = raw_scores(text);
    let total = raw.total();
    if total == 0.0 {
        return RoleScores::uniform();
    }

    let mut normalized = [0.0_f64; 4];
    for (role, score) in raw.iter() {
        normalized[role.index()] = round4(score / total);
    }
    RoleScores::new(normalized)
}

/// Nearest 4-decimal value to the exact binary `value`; exact ties go to even.
fn round4(value: f64) -> f64 {
    format!("{value:.4}").parse().unwrap_or(value)
}

/// Role with the highest score. Ties go to the earliest role in taxonomy order.
pub fn get_dominant_role(scores: &RoleScores) -> RoleColor {
    let mut best = RoleColor::ALL[0];
    for (role, score) in scores.iter() {
        if score > scores.get(best) {
            best = role;
        }
    }
    best
}
