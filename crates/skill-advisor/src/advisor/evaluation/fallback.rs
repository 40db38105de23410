use super::{next_milestone, trainable_skills, Priority, Proposal, RuleEvaluator};
use crate::advisor::content;
use crate::advisor::domain::{Membership, Profile, Recommendation, MAX_LEVEL};

/// "Train your lowest skill". Never abstains while the profile tracks a
/// trainable skill, which the baseline combat skills guarantee.
pub struct FallbackEvaluator;

impl FallbackEvaluator {
    /// The n-th lowest trainable skill (0 is the lowest). Used by the selector
    /// to pad short candidate pools. Maxed skills rank last and get upkeep
    /// advice instead of a level target.
    pub fn variant(&self, profile: &Profile, index: usize) -> Option<Recommendation> {
        let skills = trainable_skills(profile, |_| true);
        let (skill, level) = skills.get(index).copied()?;
        let label = content::skill_label(skill);
        let method = content::training_method(skill, profile.membership == Membership::Paid);

        if level >= MAX_LEVEL {
            return Some(Self::maxed(&label, method, index == 0));
        }

        let why_now = if index == 0 {
            format!("{label} is your lowest skill at level {level}, so each level comes quickly.")
        } else {
            format!("{label} is still only level {level}, one of your lowest skills.")
        };

        Some(Recommendation::new(
            Recommendation::training_title(skill),
            why_now,
            [
                format!("Train {label} by {method}"),
                format!("Keep going until {label} reaches level {}", next_milestone(level)),
            ],
        ))
    }

    fn maxed(label: &str, method: &str, everything_maxed: bool) -> Recommendation {
        let why_now = if everything_maxed {
            format!("Every skill you can train is level 99, so {label} has no levels left to gain.")
        } else {
            format!("{label} is already level 99, so it has no levels left to gain.")
        };
        Recommendation::new(
            format!("Put your level 99 {label} to use"),
            why_now,
            [
                format!("Keep {label} working by {method} for supplies and coins"),
                format!("Buy the {label} skillcape from its master if you have not yet"),
            ],
        )
    }
}

impl RuleEvaluator for FallbackEvaluator {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn evaluate(&self, profile: &Profile) -> Option<Proposal> {
        self.variant(profile, 0)
            .map(|recommendation| Proposal::new(recommendation, Priority::FALLBACK))
    }
}
