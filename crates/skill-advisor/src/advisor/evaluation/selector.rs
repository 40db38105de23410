use super::Candidate;
use crate::advisor::domain::{AdviceSet, Recommendation};

/// Number of recommendations handed back per request.
pub const ADVICE_LIMIT: usize = 3;

/// Ranks candidates, collapses duplicates and truncates to the advice limit.
#[derive(Debug, Clone)]
pub struct Selector {
    limit: usize,
}

impl Selector {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// `pad` is asked for variants `1, 2, ...` until the limit is reached or it
    /// returns `None`. Padding always ranks below real candidates.
    pub fn select<F>(&self, candidates: Vec<Candidate>, mut pad: F) -> AdviceSet
    where
        F: FnMut(usize) -> Option<Recommendation>,
    {
        let mut ranked = deduplicate(candidates);
        ranked.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.order.cmp(&b.order))
        });

        let mut items: Vec<Recommendation> = ranked
            .into_iter()
            .take(self.limit)
            .map(|candidate| candidate.recommendation)
            .collect();

        let mut variant = 1;
        while items.len() < self.limit {
            let Some(extra) = pad(variant) else {
                break;
            };
            if !items.iter().any(|item| item.title == extra.title) {
                items.push(extra);
            }
            variant += 1;
        }

        let degraded = items.len() < self.limit;
        AdviceSet { items, degraded }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(ADVICE_LIMIT)
    }
}

/// Keep one candidate per title, preferring the higher-ranked instance.
fn deduplicate(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut unique: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match unique
            .iter_mut()
            .find(|kept| kept.recommendation.title == candidate.recommendation.title)
        {
            Some(kept) => {
                if candidate.ranks_above(kept) {
                    *kept = candidate;
                }
            }
            None => unique.push(candidate),
        }
    }
    unique
}
