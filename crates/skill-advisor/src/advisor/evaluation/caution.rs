use super::{Priority, Proposal, RuleEvaluator};
use crate::advisor::domain::{GameMode, Profile, Recommendation};

pub const HARDCORE_SAFETY_TITLE: &str = "Protect your Hardcore status";

/// Death-avoidance guidance for hardcore ironmen. Fires regardless of goals at
/// the reserved safety tier.
pub struct HardcoreSafetyEvaluator;

impl RuleEvaluator for HardcoreSafetyEvaluator {
    fn name(&self) -> &'static str {
        "hardcore_safety"
    }

    fn evaluate(&self, profile: &Profile) -> Option<Proposal> {
        if profile.game_mode != GameMode::HardcoreIronman {
            return None;
        }

        let why_now = format!(
            "You are a {} at combat level {} with {} Hitpoints, and one dangerous death ends your hardcore status.",
            profile.game_mode.label(),
            profile.combat_level(),
            profile.level("hitpoints"),
        );

        let recommendation = Recommendation::new(
            HARDCORE_SAFETY_TITLE,
            why_now,
            [
                "Stay out of the Wilderness and multi-combat areas",
                "Carry food and a teleport on every trip",
                "Leave any fight once your Hitpoints drop below half",
                "Raise Hitpoints and Defence before attempting quest bosses",
                "Read up on each boss mechanic before you enter the fight",
            ],
        );

        Some(Proposal::new(recommendation, Priority::SAFETY))
    }
}
