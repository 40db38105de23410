use std::cmp::Reverse;

use super::{next_milestone, trainable_skills, Priority, Proposal, RuleEvaluator};
use crate::advisor::content::{self, Diary, MoneyMethod, Quest, TrainingSpot};
use crate::advisor::domain::{Goal, Membership, Profile, Recommendation, COMBAT_SKILLS, MAX_LEVEL};

const GOAL_BASE_PRIORITY: u8 = 50;
const FOCUS_BONUS_PER_GOAL: u8 = 5;
const MAX_PLAYTIME_BONUS: u32 = 10;
/// Sessions at least this long favour quest chains over quick wins.
const LONG_SESSION_MINUTES: u32 = 120;
/// Content this far below the player's total level is assumed done.
const COMPLETION_MARGIN: u32 = 150;

/// Fewer active goals give each goal more weight.
fn goal_priority(profile: &Profile) -> Priority {
    let inactive = Goal::ALL.len().saturating_sub(profile.goals.len()) as u8;
    Priority(GOAL_BASE_PRIORITY + FOCUS_BONUS_PER_GOAL * inactive)
}

fn assumed_complete(recommended_total: u32, total: u32) -> bool {
    total >= recommended_total + COMPLETION_MARGIN
}

pub struct QuestingGoalEvaluator;

impl QuestingGoalEvaluator {
    /// Lowest-requirement reachable quest that is not assumed complete.
    /// Long sessions prefer a quest chain when one is reachable.
    fn pick(profile: &Profile) -> Option<&'static Quest> {
        let total = profile.total_level();
        let mut open: Vec<&'static Quest> = content::QUESTS
            .iter()
            .filter(|quest| profile.membership.allows(quest.members))
            .filter(|quest| quest.recommended_total <= total)
            .filter(|quest| !assumed_complete(quest.recommended_total, total))
            .collect();
        open.sort_by_key(|quest| quest.recommended_total);

        if profile.playtime_minutes >= LONG_SESSION_MINUTES {
            if let Some(chain) = open.iter().find(|quest| quest.chain) {
                return Some(*chain);
            }
        }
        open.first().copied()
    }
}

impl RuleEvaluator for QuestingGoalEvaluator {
    fn name(&self) -> &'static str {
        "goal_questing"
    }

    fn evaluate(&self, profile: &Profile) -> Option<Proposal> {
        if !profile.has_goal(Goal::Questing) {
            return None;
        }
        let quest = Self::pick(profile)?;

        let why_now = if quest.chain && profile.playtime_minutes >= LONG_SESSION_MINUTES {
            format!(
                "With {} minutes to play, {} is a quest line worth the session, and it rewards {}.",
                profile.playtime_minutes, quest.name, quest.reward
            )
        } else {
            format!(
                "At total level {}, {} is the lowest-requirement quest you can start, and it rewards {}.",
                profile.total_level(),
                quest.name,
                quest.reward
            )
        };

        let playtime_bonus = (profile.playtime_minutes / 60).min(MAX_PLAYTIME_BONUS) as u8;
        let priority = Priority(goal_priority(profile).0 + playtime_bonus);

        Some(Proposal::new(
            Recommendation::new(
                format!("Complete {}", quest.name),
                why_now,
                quest.steps.iter().copied(),
            ),
            priority,
        ))
    }
}

pub struct CombatGoalEvaluator;

impl CombatGoalEvaluator {
    fn spot_for(profile: &Profile, level: u8) -> Option<&'static TrainingSpot> {
        content::TRAINING_SPOTS
            .iter()
            .filter(|spot| profile.membership.allows(spot.members))
            .filter(|spot| spot.min_level <= level)
            .max_by_key(|spot| (spot.members, spot.min_level))
    }
}

impl RuleEvaluator for CombatGoalEvaluator {
    fn name(&self) -> &'static str {
        "goal_combat"
    }

    fn evaluate(&self, profile: &Profile) -> Option<Proposal> {
        if !profile.has_goal(Goal::Combat) {
            return None;
        }

        // level ties go to the skill listed first on the hiscores
        let levels: Vec<(&str, u8)> = COMBAT_SKILLS
            .iter()
            .map(|skill| (*skill, profile.level(skill)))
            .collect();
        let (skill, level) = levels
            .iter()
            .copied()
            .min_by_key(|(skill, level)| (*level, content::skill_order(skill)))?;
        let highest = levels
            .iter()
            .copied()
            .max_by_key(|(skill, level)| (*level, Reverse(content::skill_order(skill))))?;

        if level >= MAX_LEVEL {
            return None;
        }
        let label = content::skill_label(skill);
        let spot = Self::spot_for(profile, level)?;

        let why_now = if highest.1 > level {
            format!(
                "Your {label} is level {level}, the lowest of your combat skills and {} levels behind your {} at {}.",
                highest.1 - level,
                content::skill_label(highest.0),
                highest.1
            )
        } else {
            format!(
                "Your combat skills are even at level {level}, so raise {label} first to keep them balanced."
            )
        };

        let members = profile.membership == Membership::Paid;
        Some(Proposal::new(
            Recommendation::new(
                Recommendation::training_title(skill),
                why_now,
                [
                    format!("Travel to {} at {}", spot.name, spot.location),
                    format!("Train {label} by {}", content::training_method(skill, members)),
                    format!("Keep going until {label} reaches level {}", next_milestone(level)),
                ],
            ),
            goal_priority(profile),
        ))
    }
}

pub struct SkillingGoalEvaluator;

impl RuleEvaluator for SkillingGoalEvaluator {
    fn name(&self) -> &'static str {
        "goal_skilling"
    }

    fn evaluate(&self, profile: &Profile) -> Option<Proposal> {
        if !profile.has_goal(Goal::Skilling) {
            return None;
        }

        let skills = trainable_skills(profile, |name| !content::is_combat_skill(name));
        let (skill, level) = skills.first().copied()?;
        if level >= MAX_LEVEL {
            return None;
        }
        let label = content::skill_label(skill);
        let members = profile.membership == Membership::Paid;

        Some(Proposal::new(
            Recommendation::new(
                Recommendation::training_title(skill),
                format!("{label} is your lowest non-combat skill at level {level}."),
                [
                    format!("Train {label} by {}", content::training_method(skill, members)),
                    format!("Keep going until {label} reaches level {}", next_milestone(level)),
                    "Bank or use the resources you gather along the way".to_string(),
                ],
            ),
            goal_priority(profile),
        ))
    }
}

pub struct GoldFarmingGoalEvaluator;

impl GoldFarmingGoalEvaluator {
    /// Highest-requirement method the player qualifies for. Ironman modes skip
    /// anything that needs trading.
    fn pick(profile: &Profile) -> Option<&'static MoneyMethod> {
        content::MONEY_METHODS
            .iter()
            .filter(|method| profile.membership.allows(method.members))
            .filter(|method| !(method.trading && profile.game_mode.is_ironman()))
            .filter(|method| {
                method
                    .skill
                    .map_or(true, |skill| profile.level(skill) >= method.level)
            })
            .fold(None, |best: Option<&'static MoneyMethod>, method| match best {
                Some(current) if current.level >= method.level => Some(current),
                _ => Some(method),
            })
    }
}

impl RuleEvaluator for GoldFarmingGoalEvaluator {
    fn name(&self) -> &'static str {
        "goal_gold_farming"
    }

    fn evaluate(&self, profile: &Profile) -> Option<Proposal> {
        if !profile.has_goal(Goal::GoldFarming) {
            return None;
        }
        let method = Self::pick(profile)?;

        let tier = match profile.membership {
            Membership::Free => "free-to-play",
            Membership::Paid => "member",
        };
        let requirement = match method.skill {
            Some(skill) => format!(
                " with {} at level {}",
                content::skill_label(skill),
                profile.level(skill)
            ),
            None => String::new(),
        };
        let why_now = if profile.game_mode.is_ironman() {
            format!(
                "As a {tier} {} you cannot trade, so {} is the best self-sufficient money maker your levels allow{requirement}.",
                profile.game_mode.label(),
                method.name.to_lowercase()
            )
        } else {
            format!(
                "On a {tier} account, {} is the best money maker your levels allow{requirement}.",
                method.name.to_lowercase()
            )
        };

        Some(Proposal::new(
            Recommendation::new(
                method.name,
                why_now,
                method.steps.iter().copied(),
            ),
            goal_priority(profile),
        ))
    }
}

pub struct DiaryGoalEvaluator;

impl DiaryGoalEvaluator {
    fn pick(profile: &Profile) -> Option<&'static Diary> {
        let total = profile.total_level();
        content::DIARIES
            .iter()
            .filter(|diary| diary.recommended_total <= total)
            .filter(|diary| !assumed_complete(diary.recommended_total, total))
            .min_by_key(|diary| (diary.tier, diary.recommended_total))
    }
}

impl RuleEvaluator for DiaryGoalEvaluator {
    fn name(&self) -> &'static str {
        "goal_achievement_diaries"
    }

    fn evaluate(&self, profile: &Profile) -> Option<Proposal> {
        if !profile.has_goal(Goal::AchievementDiaries) {
            return None;
        }
        // Every diary is members content.
        if profile.membership != Membership::Paid {
            return None;
        }
        let diary = Self::pick(profile)?;
        let name = diary.name();

        Some(Proposal::new(
            Recommendation::new(
                format!("Complete the {name}"),
                format!(
                    "At total level {}, the {name} is your lowest incomplete diary tier, and it unlocks {}.",
                    profile.total_level(),
                    diary.reward
                ),
                [
                    format!("Open the {} diary task list", diary.region),
                    "Train any skill that falls short of a task requirement".to_string(),
                    format!(
                        "Finish the {} tasks and claim the reward",
                        diary.tier.label()
                    ),
                ],
            ),
            goal_priority(profile),
        ))
    }
}
