use super::{Priority, Proposal, RuleEvaluator};
use crate::advisor::content;
use crate::advisor::domain::{Goal, Membership, Profile, Recommendation, MAX_LEVEL};

const BASE_PRIORITY: Priority = Priority(35);
/// Free players have few viable paths for these goals, so the plan matters more.
const ELEVATED_PRIORITY: Priority = Priority(75);

pub const FREE_TO_PLAY_TITLE: &str = "Make the most of free-to-play";

const MELEE_SKILLS: [&str; 3] = ["attack", "strength", "defence"];

/// Progression plan for free-to-play accounts. Abstains for members.
pub struct MembershipEvaluator;

impl MembershipEvaluator {
    /// Free melee spot matching the weakest melee skill. Left out when the
    /// combat goal already covers training or melee is maxed.
    fn melee_step(profile: &Profile) -> Option<String> {
        if profile.has_goal(Goal::Combat) {
            return None;
        }
        let (skill, level) = MELEE_SKILLS
            .iter()
            .map(|skill| (*skill, profile.level(skill)))
            .min_by_key(|(skill, level)| (*level, content::skill_order(skill)))?;
        if level >= MAX_LEVEL {
            return None;
        }
        let spot = content::TRAINING_SPOTS
            .iter()
            .filter(|spot| !spot.members && spot.min_level <= level)
            .max_by_key(|spot| spot.min_level)?;
        Some(format!(
            "Train Attack, Strength and Defence on {} at {} while {} is level {level}",
            spot.name,
            spot.location,
            content::skill_label(skill)
        ))
    }
}

impl RuleEvaluator for MembershipEvaluator {
    fn name(&self) -> &'static str {
        "membership"
    }

    fn evaluate(&self, profile: &Profile) -> Option<Proposal> {
        if profile.membership == Membership::Paid {
            return None;
        }

        let constrained_goals: Vec<&str> = [
            (Goal::Questing, "questing"),
            (Goal::GoldFarming, "gold farming"),
        ]
        .into_iter()
        .filter(|(goal, _)| profile.has_goal(*goal))
        .map(|(_, label)| label)
        .collect();

        let (priority, why_now) = if constrained_goals.is_empty() {
            (
                BASE_PRIORITY,
                format!(
                    "You are on free-to-play at total level {}, so plan around the free quests and training areas.",
                    profile.total_level()
                ),
            )
        } else {
            (
                ELEVATED_PRIORITY,
                format!(
                    "You are on free-to-play with {} as a goal, and only a handful of free quests and money makers are open to you.",
                    constrained_goals.join(" and ")
                ),
            )
        };

        let mut steps = vec![
            "Finish the quick free quests: Cook's Assistant, Sheep Shearer and The Restless Ghost"
                .to_string(),
        ];
        steps.extend(Self::melee_step(profile));
        steps.push("Work toward Dragon Slayer I to unlock the rune platebody".to_string());
        if profile.has_goal(Goal::GoldFarming) {
            let money_step = if profile.game_mode.is_ironman() {
                "Clear the Stronghold of Security for its coin rewards"
            } else {
                "Build a bank by collecting cowhides or mining iron ore"
            };
            steps.push(money_step.to_string());
        }

        Some(Proposal::new(
            Recommendation::new(FREE_TO_PLAY_TITLE, why_now, steps),
            priority,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::domain::GameMode;

    #[test]
    fn abstains_for_members() {
        let profile = Profile::new(GameMode::Main, Membership::Paid).with_goal(Goal::Questing);
        assert!(MembershipEvaluator.evaluate(&profile).is_none());
    }

    #[test]
    fn elevates_priority_for_questing_or_gold_goals() {
        let plain = Profile::new(GameMode::Main, Membership::Free).with_goal(Goal::Combat);
        let questing = plain.clone().with_goal(Goal::Questing);
        let gold = plain.clone().with_goal(Goal::GoldFarming);

        let base = MembershipEvaluator.evaluate(&plain).expect("free players get a plan");
        assert_eq!(base.priority, BASE_PRIORITY);

        for profile in [questing, gold] {
            let proposal = MembershipEvaluator
                .evaluate(&profile)
                .expect("free players get a plan");
            assert_eq!(proposal.priority, ELEVATED_PRIORITY);
            assert!(proposal.recommendation.why_now.contains("as a goal"));
        }
    }

    #[test]
    fn ironman_gold_step_avoids_trading() {
        let profile =
            Profile::new(GameMode::Ironman, Membership::Free).with_goal(Goal::GoldFarming);
        let proposal = MembershipEvaluator.evaluate(&profile).expect("plan");

        let last = proposal.recommendation.steps.last().expect("steps present");
        assert!(last.contains("Stronghold of Security"));
    }

    #[test]
    fn melee_step_follows_the_weakest_melee_skill() {
        let fresh = Profile::new(GameMode::Main, Membership::Free);
        let mid = fresh
            .clone()
            .with_skill("attack", 45)
            .with_skill("strength", 50)
            .with_skill("defence", 25);

        let fresh_steps = MembershipEvaluator.evaluate(&fresh).expect("plan").recommendation.steps;
        assert!(fresh_steps[1].contains("Lumbridge cows"));
        assert!(fresh_steps[1].contains("Attack is level 1"));

        let mid_steps = MembershipEvaluator.evaluate(&mid).expect("plan").recommendation.steps;
        assert!(mid_steps[1].contains("Al Kharid warriors"));
        assert!(mid_steps[1].contains("Defence is level 25"));
    }

    #[test]
    fn melee_step_is_left_to_the_combat_goal() {
        let profile = Profile::new(GameMode::Main, Membership::Free)
            .with_goal(Goal::Combat)
            .with_goal(Goal::Questing);
        let steps = MembershipEvaluator.evaluate(&profile).expect("plan").recommendation.steps;

        assert_eq!(steps.len(), 2);
        assert!(steps.iter().all(|step| !step.contains("Train Attack")));
    }

    #[test]
    fn maxed_melee_gets_no_training_step() {
        let profile = Profile::new(GameMode::Main, Membership::Free)
            .with_skill("attack", 99)
            .with_skill("strength", 99)
            .with_skill("defence", 99);
        let steps = MembershipEvaluator.evaluate(&profile).expect("plan").recommendation.steps;

        assert!(steps.iter().all(|step| !step.contains("Train Attack")));
        assert!(steps.last().is_some_and(|step| step.contains("Dragon Slayer I")));
    }
}
