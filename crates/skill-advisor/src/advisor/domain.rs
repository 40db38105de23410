use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::content;

/// Lowest and highest level a skill can hold.
pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 99;

/// Combat skills every profile tracks.
pub const COMBAT_SKILLS: [&str; 7] = [
    "attack",
    "strength",
    "defence",
    "hitpoints",
    "ranged",
    "magic",
    "prayer",
];

/// Identifier for a stored profile. Only the primary record is used today.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProfileId(pub String);

impl ProfileId {
    pub fn primary() -> Self {
        Self("primary".to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    Main,
    Ironman,
    HardcoreIronman,
    GroupIronman,
}

impl GameMode {
    /// Parse a mode tag, accepting the short forms players type.
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_tag(raw).as_str() {
            "main" | "regular" => Some(Self::Main),
            "ironman" | "im" => Some(Self::Ironman),
            "hardcore_ironman" | "hcim" => Some(Self::HardcoreIronman),
            "group_ironman" | "gim" => Some(Self::GroupIronman),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Main => "Main",
            Self::Ironman => "Ironman",
            Self::HardcoreIronman => "Hardcore Ironman",
            Self::GroupIronman => "Group Ironman",
        }
    }

    /// Ironman variants cannot use the Grand Exchange or trade with other players.
    pub const fn is_ironman(self) -> bool {
        !matches!(self, Self::Main)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Membership {
    #[default]
    Free,
    Paid,
}

impl Membership {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_tag(raw).as_str() {
            "free" | "f2p" => Some(Self::Free),
            "paid" | "p2p" | "member" | "members" => Some(Self::Paid),
            _ => None,
        }
    }

    /// Whether content with the given members flag is available on this tier.
    pub const fn allows(self, members_only: bool) -> bool {
        matches!(self, Self::Paid) || !members_only
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Questing,
    Combat,
    Skilling,
    GoldFarming,
    AchievementDiaries,
}

impl Goal {
    pub const ALL: [Self; 5] = [
        Self::Questing,
        Self::Combat,
        Self::Skilling,
        Self::GoldFarming,
        Self::AchievementDiaries,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_tag(raw).as_str() {
            "questing" | "quests" => Some(Self::Questing),
            "combat" => Some(Self::Combat),
            "skilling" => Some(Self::Skilling),
            "gold_farming" | "gp" | "money_making" => Some(Self::GoldFarming),
            "achievement_diaries" | "diaries" => Some(Self::AchievementDiaries),
            _ => None,
        }
    }
}

/// A skill level already clamped into `1..=99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub fn clamped(raw: i64) -> Self {
        let bounded = raw.clamp(i64::from(MIN_LEVEL), i64::from(MAX_LEVEL));
        Self(bounded as u8)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for SkillLevel {
    fn default() -> Self {
        Self(MIN_LEVEL)
    }
}

/// Skill levels keyed by lowercase skill name. The baseline combat skills are
/// always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillLevels(BTreeMap<String, SkillLevel>);

impl SkillLevels {
    pub fn from_raw<I, K>(levels: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: AsRef<str>,
    {
        let mut skills = Self::default();
        for (name, level) in levels {
            skills.set(name.as_ref(), level);
        }
        skills
    }

    /// Set a level, normalising the name and clamping the value. Blank names are ignored.
    pub fn set(&mut self, name: &str, level: i64) {
        let key = normalize_skill_name(name);
        if key.is_empty() {
            return;
        }
        self.0.insert(key, SkillLevel::clamped(level));
    }

    pub fn level(&self, name: &str) -> u8 {
        self.0
            .get(&normalize_skill_name(name))
            .copied()
            .unwrap_or_default()
            .get()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.0.iter().map(|(name, level)| (name.as_str(), level.get()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> u32 {
        self.0.values().map(|level| u32::from(level.get())).sum()
    }
}

impl Default for SkillLevels {
    fn default() -> Self {
        let map = COMBAT_SKILLS
            .iter()
            .map(|name| (name.to_string(), SkillLevel::default()))
            .collect();
        Self(map)
    }
}

/// Player profile after boundary correction. Every value is within range.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "ProfileSubmission")]
pub struct Profile {
    pub player_name: String,
    pub game_mode: GameMode,
    pub membership: Membership,
    pub goals: BTreeSet<Goal>,
    pub playtime_minutes: u32,
    pub skills: SkillLevels,
}

impl Profile {
    pub fn new(game_mode: GameMode, membership: Membership) -> Self {
        Self {
            game_mode,
            membership,
            ..Self::default()
        }
    }

    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goals.insert(goal);
        self
    }

    pub fn with_skill(mut self, name: &str, level: i64) -> Self {
        self.skills.set(name, level);
        self
    }

    pub fn with_playtime(mut self, minutes: u32) -> Self {
        self.playtime_minutes = minutes;
        self
    }

    pub fn has_goal(&self, goal: Goal) -> bool {
        self.goals.contains(&goal)
    }

    pub fn level(&self, skill: &str) -> u8 {
        self.skills.level(skill)
    }

    pub fn total_level(&self) -> u32 {
        self.skills.total()
    }

    /// Combat level using the in-game formula, truncated.
    pub fn combat_level(&self) -> u32 {
        let level = |name: &str| f64::from(self.level(name));
        let prayer_half = f64::from(self.level("prayer") / 2);

        let base = 0.25 * (level("defence") + level("hitpoints") + prayer_half);
        let melee = 0.325 * (level("attack") + level("strength"));
        let ranged = 0.325 * ((level("ranged") * 1.5).floor() + prayer_half);
        let magic = 0.325 * ((level("magic") * 1.5).floor() + prayer_half);

        (base + melee.max(ranged).max(magic)) as u32
    }
}

/// Raw profile as received from callers or storage, before correction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileSubmission {
    pub player_name: String,
    pub game_mode: String,
    pub membership: String,
    pub goals: Vec<String>,
    pub playtime_minutes: i64,
    pub skills: BTreeMap<String, i64>,
}

impl From<ProfileSubmission> for Profile {
    fn from(raw: ProfileSubmission) -> Self {
        let game_mode = GameMode::parse(&raw.game_mode).unwrap_or_else(|| {
            if !raw.game_mode.trim().is_empty() {
                tracing::warn!(value = %raw.game_mode, "unknown game mode, defaulting to main");
            }
            GameMode::default()
        });
        let membership = Membership::parse(&raw.membership).unwrap_or_else(|| {
            if !raw.membership.trim().is_empty() {
                tracing::warn!(value = %raw.membership, "unknown membership, defaulting to free");
            }
            Membership::default()
        });
        let goals = raw
            .goals
            .iter()
            .filter_map(|tag| {
                let goal = Goal::parse(tag);
                if goal.is_none() {
                    tracing::warn!(value = %tag, "dropping unknown goal tag");
                }
                goal
            })
            .collect();

        Self {
            player_name: raw.player_name.trim().to_string(),
            game_mode,
            membership,
            goals,
            playtime_minutes: raw.playtime_minutes.clamp(0, i64::from(u32::MAX)) as u32,
            skills: SkillLevels::from_raw(raw.skills),
        }
    }
}

/// One advisory unit returned to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub why_now: String,
    pub steps: Vec<String>,
}

impl Recommendation {
    pub fn new<I, S>(title: impl Into<String>, why_now: impl Into<String>, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            why_now: why_now.into(),
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }

    /// Canonical title for skill training advice so duplicates collapse.
    pub fn training_title(skill: &str) -> String {
        format!("Train {}", content::skill_label(skill))
    }
}

/// Ranked advice. `degraded` is set when fewer than three items could be produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceSet {
    pub items: Vec<Recommendation>,
    pub degraded: bool,
}

impl AdviceSet {
    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.title.as_str()).collect()
    }
}

pub fn normalize_skill_name(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

fn normalize_tag(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn submission_corrects_out_of_range_input() {
        let profile: Profile = serde_json::from_value(json!({
            "player_name": "  Iron Bob ",
            "game_mode": "GIM",
            "membership": "F2P",
            "goals": ["quests", "money-making", "raiding"],
            "playtime_minutes": -15,
            "skills": { " Mining ": 0, "attack": 120, "": 50 }
        }))
        .expect("profile deserializes");

        assert_eq!(profile.player_name, "Iron Bob");
        assert_eq!(profile.game_mode, GameMode::GroupIronman);
        assert_eq!(profile.membership, Membership::Free);
        assert_eq!(
            profile.goals,
            BTreeSet::from([Goal::Questing, Goal::GoldFarming])
        );
        assert_eq!(profile.playtime_minutes, 0);
        assert_eq!(profile.level("mining"), 1);
        assert_eq!(profile.level("attack"), 99);
        assert_eq!(profile.skills.len(), COMBAT_SKILLS.len() + 1);
    }

    #[test]
    fn unknown_enums_fall_back_to_defaults() {
        let profile: Profile =
            serde_json::from_value(json!({ "game_mode": "deadman", "membership": "gold" }))
                .expect("profile deserializes");

        assert_eq!(profile.game_mode, GameMode::Main);
        assert_eq!(profile.membership, Membership::Free);
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn serialized_profile_reads_back_unchanged() {
        let profile = Profile::new(GameMode::HardcoreIronman, Membership::Paid)
            .with_goal(Goal::AchievementDiaries)
            .with_playtime(240)
            .with_skill("Slayer", 61);

        let json = serde_json::to_value(&profile).expect("serializes");
        assert_eq!(json["game_mode"], "hardcore_ironman");
        assert_eq!(json["goals"], json!(["achievement_diaries"]));

        let back: Profile = serde_json::from_value(json).expect("deserializes");
        assert_eq!(back, profile);
    }

    #[test]
    fn combat_level_uses_best_style() {
        let melee = Profile::default()
            .with_skill("attack", 60)
            .with_skill("strength", 60)
            .with_skill("defence", 60)
            .with_skill("hitpoints", 60)
            .with_skill("prayer", 43);

        assert_eq!(Profile::default().combat_level(), 1);
        assert_eq!(melee.combat_level(), 74);
    }

    #[test]
    fn training_titles_are_canonical() {
        assert_eq!(Recommendation::training_title("ranged"), "Train Ranged");
        assert_eq!(Recommendation::training_title("sailing"), "Train Sailing");
    }
}
