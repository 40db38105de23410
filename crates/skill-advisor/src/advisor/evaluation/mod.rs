mod caution;
mod fallback;
mod goals;
mod membership;
mod selector;

pub use caution::{HardcoreSafetyEvaluator, HARDCORE_SAFETY_TITLE};
pub use fallback::FallbackEvaluator;
pub use goals::{
    CombatGoalEvaluator, DiaryGoalEvaluator, GoldFarmingGoalEvaluator, QuestingGoalEvaluator,
    SkillingGoalEvaluator,
};
pub use membership::{MembershipEvaluator, FREE_TO_PLAY_TITLE};
pub use selector::{Selector, ADVICE_LIMIT};

use serde::Serialize;

use super::content;
use super::domain::{AdviceSet, Profile, Recommendation};

/// Discrete ranking tier. Higher tiers rank first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Priority(pub u8);

impl Priority {
    /// Reserved for hardcore safety advice; nothing else may use it.
    pub const SAFETY: Self = Self(100);
    pub const FALLBACK: Self = Self(1);
}

/// What an evaluator proposes when it does not abstain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub recommendation: Recommendation,
    pub priority: Priority,
}

impl Proposal {
    pub fn new(recommendation: Recommendation, priority: Priority) -> Self {
        Self {
            recommendation,
            priority,
        }
    }
}

/// A stateless rule over a profile. Returning `None` means the rule abstains.
pub trait RuleEvaluator: Send + Sync {
    fn name(&self) -> &'static str;
    fn evaluate(&self, profile: &Profile) -> Option<Proposal>;
}

/// A proposal tagged with the registration index of the evaluator that made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub source: &'static str,
    pub recommendation: Recommendation,
    pub priority: Priority,
    pub order: usize,
}

impl Candidate {
    /// Total order used for ranking: tier descending, then registration order.
    fn ranks_above(&self, other: &Candidate) -> bool {
        self.priority > other.priority
            || (self.priority == other.priority && self.order < other.order)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("internal configuration error: no rule evaluators registered")]
    NoEvaluators,
}

/// Maps a profile to ranked advice using a fixed set of rule evaluators.
pub struct AdviceEngine {
    evaluators: Vec<Box<dyn RuleEvaluator>>,
    fallback: FallbackEvaluator,
    selector: Selector,
}

impl AdviceEngine {
    pub fn new(evaluators: Vec<Box<dyn RuleEvaluator>>) -> Self {
        Self {
            evaluators,
            fallback: FallbackEvaluator,
            selector: Selector::default(),
        }
    }

    /// Registration order doubles as the tie-break order within a tier.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(HardcoreSafetyEvaluator),
            Box::new(MembershipEvaluator),
            Box::new(QuestingGoalEvaluator),
            Box::new(CombatGoalEvaluator),
            Box::new(SkillingGoalEvaluator),
            Box::new(GoldFarmingGoalEvaluator),
            Box::new(DiaryGoalEvaluator),
            Box::new(FallbackEvaluator),
        ])
    }

    pub fn evaluator_names(&self) -> Vec<&'static str> {
        self.evaluators.iter().map(|rule| rule.name()).collect()
    }

    pub fn advise(&self, profile: &Profile) -> Result<AdviceSet, EngineError> {
        if self.evaluators.is_empty() {
            return Err(EngineError::NoEvaluators);
        }

        let candidates: Vec<Candidate> = self
            .evaluators
            .iter()
            .enumerate()
            .filter_map(|(order, rule)| {
                let proposal = rule.evaluate(profile);
                match &proposal {
                    Some(proposal) => tracing::debug!(
                        rule = rule.name(),
                        priority = proposal.priority.0,
                        title = %proposal.recommendation.title,
                        "rule proposed advice"
                    ),
                    None => tracing::debug!(rule = rule.name(), "rule abstained"),
                }
                proposal.map(|proposal| Candidate {
                    source: rule.name(),
                    recommendation: proposal.recommendation,
                    priority: proposal.priority,
                    order,
                })
            })
            .collect();

        let advice = self.selector.select(candidates, |variant| {
            self.fallback.variant(profile, variant)
        });

        if advice.degraded {
            tracing::warn!(
                produced = advice.items.len(),
                "advice pool smaller than requested"
            );
        }
        tracing::info!(titles = ?advice.titles(), "advice selected");
        Ok(advice)
    }
}

impl Default for AdviceEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Skills the profile's tier can train, lowest level first. Ties follow
/// hiscores order, then name.
fn trainable_skills<'a>(
    profile: &'a Profile,
    include: impl Fn(&str) -> bool,
) -> Vec<(&'a str, u8)> {
    let mut skills: Vec<(&str, u8)> = profile
        .skills
        .iter()
        .filter(|(name, _)| profile.membership.allows(content::is_members_skill(name)))
        .filter(|(name, _)| include(name))
        .collect();
    skills.sort_by(|(a_name, a_level), (b_name, b_level)| {
        a_level
            .cmp(b_level)
            .then_with(|| content::skill_order(a_name).cmp(&content::skill_order(b_name)))
            .then_with(|| a_name.cmp(b_name))
    });
    skills
}

/// Next round-ten milestone above `level`, capped at 99.
fn next_milestone(level: u8) -> u8 {
    let next = (u16::from(level) / 10 + 1) * 10;
    next.min(99) as u8
}
