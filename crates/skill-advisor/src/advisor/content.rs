//! Static game content the evaluators draw from.
//!
//! Every entry carries a `members` flag; evaluators must filter through
//! [`Membership::allows`](super::domain::Membership::allows) before surfacing
//! an entry so free-to-play players never see paid content.

pub struct SkillInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub members: bool,
    pub combat: bool,
}

const fn skill(key: &'static str, label: &'static str, members: bool, combat: bool) -> SkillInfo {
    SkillInfo {
        key,
        label,
        members,
        combat,
    }
}

/// Known skills in hiscores order.
pub static SKILLS: [SkillInfo; 23] = [
    skill("attack", "Attack", false, true),
    skill("defence", "Defence", false, true),
    skill("strength", "Strength", false, true),
    skill("hitpoints", "Hitpoints", false, true),
    skill("ranged", "Ranged", false, true),
    skill("prayer", "Prayer", false, true),
    skill("magic", "Magic", false, true),
    skill("cooking", "Cooking", false, false),
    skill("woodcutting", "Woodcutting", false, false),
    skill("fletching", "Fletching", true, false),
    skill("fishing", "Fishing", false, false),
    skill("firemaking", "Firemaking", false, false),
    skill("crafting", "Crafting", false, false),
    skill("smithing", "Smithing", false, false),
    skill("mining", "Mining", false, false),
    skill("herblore", "Herblore", true, false),
    skill("agility", "Agility", true, false),
    skill("thieving", "Thieving", true, false),
    skill("slayer", "Slayer", true, false),
    skill("farming", "Farming", true, false),
    skill("runecraft", "Runecraft", false, false),
    skill("hunter", "Hunter", true, false),
    skill("construction", "Construction", true, false),
];

pub fn skill_info(key: &str) -> Option<&'static SkillInfo> {
    SKILLS.iter().find(|info| info.key == key)
}

/// Display label; unknown skills are capitalised as given.
pub fn skill_label(key: &str) -> String {
    match skill_info(key) {
        Some(info) => info.label.to_string(),
        None => {
            let mut chars = key.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// Position in hiscores order. Unknown skills sort after every known skill.
pub fn skill_order(key: &str) -> usize {
    SKILLS
        .iter()
        .position(|info| info.key == key)
        .unwrap_or(SKILLS.len())
}

pub fn is_members_skill(key: &str) -> bool {
    skill_info(key).is_some_and(|info| info.members)
}

pub fn is_combat_skill(key: &str) -> bool {
    skill_info(key).is_some_and(|info| info.combat)
}

pub struct Quest {
    pub name: &'static str,
    pub members: bool,
    /// Rough total level at which the quest becomes comfortable.
    pub recommended_total: u32,
    /// Multi-step quest lines that reward a long session.
    pub chain: bool,
    pub reward: &'static str,
    pub steps: &'static [&'static str],
}

pub const QUESTS: &[Quest] = &[
    Quest {
        name: "Cook's Assistant",
        members: false,
        recommended_total: 0,
        chain: false,
        reward: "300 Cooking XP and access to the Lumbridge range",
        steps: &[
            "Talk to the Cook in Lumbridge Castle",
            "Collect an egg, a pot of flour and a bucket of milk",
            "Hand the ingredients to the Cook",
        ],
    },
    Quest {
        name: "Sheep Shearer",
        members: false,
        recommended_total: 0,
        chain: false,
        reward: "150 Crafting XP",
        steps: &[
            "Talk to Fred the Farmer north of Lumbridge",
            "Shear 20 sheep and spin the wool on the Lumbridge spinning wheel",
            "Return the balls of wool to Fred",
        ],
    },
    Quest {
        name: "The Restless Ghost",
        members: false,
        recommended_total: 10,
        chain: false,
        reward: "1,125 Prayer XP",
        steps: &[
            "Speak to Father Aereck in the Lumbridge church",
            "Get the ghostspeak amulet from Father Urhney in the swamp",
            "Recover the skull from the Wizards' Tower basement",
        ],
    },
    Quest {
        name: "Rune Mysteries",
        members: false,
        recommended_total: 20,
        chain: false,
        reward: "Access to Runecraft altars",
        steps: &[
            "Speak to Duke Horacio in Lumbridge Castle",
            "Deliver the talisman to Sedridor in the Wizards' Tower",
            "Carry the research package to Aubury in Varrock",
        ],
    },
    Quest {
        name: "Demon Slayer",
        members: false,
        recommended_total: 50,
        chain: true,
        reward: "Silverlight and a route through Varrock",
        steps: &[
            "Talk to the Gypsy in Varrock square",
            "Collect the three keys from Captain Rovin, the sewers and Wizard Traiborn",
            "Pick up Silverlight from Sir Prysin",
            "Defeat Delrith at the stone circle south of Varrock",
        ],
    },
    Quest {
        name: "Vampyre Slayer",
        members: false,
        recommended_total: 60,
        chain: false,
        reward: "4,825 Attack XP",
        steps: &[
            "Speak to Morgan in Draynor Village",
            "Get a stake and hammer from Dr Harlow in Varrock",
            "Defeat Count Draynor in the manor basement",
        ],
    },
    Quest {
        name: "The Knight's Sword",
        members: false,
        recommended_total: 120,
        chain: false,
        reward: "12,725 Smithing XP",
        steps: &[
            "Train Mining to 10 before starting",
            "Talk to the Squire in Falador Castle",
            "Bring blueberry pie to Thurgo and fetch the portrait",
            "Mine blurite and have Thurgo forge the sword",
        ],
    },
    Quest {
        name: "Dragon Slayer I",
        members: false,
        recommended_total: 250,
        chain: true,
        reward: "The right to wear a rune platebody and 18,650 Strength and Defence XP",
        steps: &[
            "Talk to the Guildmaster in the Champions' Guild",
            "Collect the three map pieces",
            "Buy an anti-dragon shield from Duke Horacio",
            "Charter a boat from Port Sarim and defeat Elvarg",
        ],
    },
    Quest {
        name: "Waterfall Quest",
        members: true,
        recommended_total: 80,
        chain: false,
        reward: "13,750 Attack and Strength XP",
        steps: &[
            "Talk to Almera by Baxtorian Falls",
            "Collect the pebble, amulet and urn",
            "Place the items on Glarial's tomb and claim the treasure",
        ],
    },
    Quest {
        name: "Priest in Peril",
        members: true,
        recommended_total: 90,
        chain: false,
        reward: "Access to Morytania",
        steps: &[
            "Talk to King Roald in Varrock Palace",
            "Kill the temple guardian dog",
            "Bless the water and clear the Salve barrier",
        ],
    },
    Quest {
        name: "Tree Gnome Village",
        members: true,
        recommended_total: 100,
        chain: true,
        reward: "Spirit tree transportation",
        steps: &[
            "Talk to King Bolren in the gnome maze",
            "Deliver logs to Commander Montai",
            "Retrieve the orb fragments from the Khazard warlord",
        ],
    },
    Quest {
        name: "Lost City",
        members: true,
        recommended_total: 200,
        chain: false,
        reward: "Access to Zanaris and dragon weapons",
        steps: &[
            "Reach 31 Crafting and 36 Woodcutting",
            "Question the adventurers in Lumbridge Swamp",
            "Craft a dramen staff and enter Zanaris",
        ],
    },
    Quest {
        name: "Fairy Tale I - Growing Pains",
        members: true,
        recommended_total: 300,
        chain: true,
        reward: "The first step toward fairy ring access",
        steps: &[
            "Talk to Martin the Master Gardener in Draynor",
            "Investigate the Fairy Queen's disappearance",
            "Defeat the Tanglefoot",
        ],
    },
    Quest {
        name: "Monkey Madness I",
        members: true,
        recommended_total: 500,
        chain: true,
        reward: "Dragon scimitar access",
        steps: &[
            "Complete The Grand Tree first",
            "Travel to Ape Atoll with the 10th squad",
            "Defeat the Jungle Demon",
        ],
    },
    Quest {
        name: "Recipe for Disaster",
        members: true,
        recommended_total: 700,
        chain: true,
        reward: "Barrows gloves",
        steps: &[
            "Complete the prerequisite quests starting with Cook's Assistant",
            "Free each council member one subquest at a time",
            "Defeat the Culinaromancer",
        ],
    },
    Quest {
        name: "Desert Treasure I",
        members: true,
        recommended_total: 1000,
        chain: true,
        reward: "Ancient Magicks",
        steps: &[
            "Talk to the Archaeologist at the Bandit Camp",
            "Recover the four diamonds",
            "Claim the spellbook at the Jaldraocht pyramid",
        ],
    },
    Quest {
        name: "Song of the Elves",
        members: true,
        recommended_total: 1400,
        chain: true,
        reward: "Access to Prifddinas",
        steps: &[
            "Finish the elf quest series prerequisites",
            "Rescue Lord Iorwerth's captives",
            "Defeat the Fragment of Seren",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiaryTier {
    Easy,
    Medium,
    Hard,
    Elite,
}

impl DiaryTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Elite => "Elite",
        }
    }
}

pub struct Diary {
    pub region: &'static str,
    pub tier: DiaryTier,
    pub recommended_total: u32,
    pub reward: &'static str,
}

impl Diary {
    pub fn name(&self) -> String {
        format!("{} {} Diary", self.region, self.tier.label())
    }
}

/// Achievement diaries, ordered by tier then region. All diaries are members content.
pub const DIARIES: &[Diary] = &[
    Diary {
        region: "Lumbridge & Draynor",
        tier: DiaryTier::Easy,
        recommended_total: 0,
        reward: "Explorer's ring 1 with free low alchemy casts",
    },
    Diary {
        region: "Karamja",
        tier: DiaryTier::Easy,
        recommended_total: 0,
        reward: "Karamja gloves 1",
    },
    Diary {
        region: "Varrock",
        tier: DiaryTier::Easy,
        recommended_total: 30,
        reward: "Discounted battlestaves from Zaff",
    },
    Diary {
        region: "Ardougne",
        tier: DiaryTier::Easy,
        recommended_total: 40,
        reward: "Ardougne cloak 1",
    },
    Diary {
        region: "Falador",
        tier: DiaryTier::Easy,
        recommended_total: 50,
        reward: "Falador shield 1",
    },
    Diary {
        region: "Lumbridge & Draynor",
        tier: DiaryTier::Medium,
        recommended_total: 450,
        reward: "Explorer's ring 2",
    },
    Diary {
        region: "Varrock",
        tier: DiaryTier::Medium,
        recommended_total: 500,
        reward: "More daily battlestaves",
    },
    Diary {
        region: "Ardougne",
        tier: DiaryTier::Medium,
        recommended_total: 550,
        reward: "Ardougne cloak 2 with extra teleports",
    },
    Diary {
        region: "Varrock",
        tier: DiaryTier::Hard,
        recommended_total: 1000,
        reward: "Varrock armour 3",
    },
    Diary {
        region: "Ardougne",
        tier: DiaryTier::Hard,
        recommended_total: 1100,
        reward: "Improved pickpocket success in Ardougne",
    },
    Diary {
        region: "Lumbridge & Draynor",
        tier: DiaryTier::Elite,
        recommended_total: 1600,
        reward: "Explorer's ring 4",
    },
];

pub struct MoneyMethod {
    pub name: &'static str,
    pub members: bool,
    /// Relies on the Grand Exchange or player trading.
    pub trading: bool,
    pub skill: Option<&'static str>,
    pub level: u8,
    pub steps: &'static [&'static str],
}

pub const MONEY_METHODS: &[MoneyMethod] = &[
    MoneyMethod {
        name: "Collect cowhides",
        members: false,
        trading: true,
        skill: None,
        level: 1,
        steps: &[
            "Kill cows in the Lumbridge field and pick up every hide",
            "Bank at Lumbridge Castle when your inventory is full",
            "Sell the hides in bulk on the Grand Exchange",
        ],
    },
    MoneyMethod {
        name: "Mine iron ore",
        members: false,
        trading: true,
        skill: Some("mining"),
        level: 15,
        steps: &[
            "Mine iron rocks south-east of Varrock",
            "Bank at Varrock East",
            "Sell the ore on the Grand Exchange",
        ],
    },
    MoneyMethod {
        name: "Fish and cook lobsters",
        members: false,
        trading: true,
        skill: Some("fishing"),
        level: 40,
        steps: &[
            "Fish lobsters at Musa Point on Karamja",
            "Cook them on the Port Sarim range",
            "Sell cooked lobsters on the Grand Exchange",
        ],
    },
    MoneyMethod {
        name: "Clear the Stronghold of Security",
        members: false,
        trading: false,
        skill: None,
        level: 1,
        steps: &[
            "Enter the stronghold in Barbarian Village",
            "Answer each security door question correctly",
            "Claim the coin reward on every floor",
        ],
    },
    MoneyMethod {
        name: "Kill Hill Giants for coins",
        members: false,
        trading: false,
        skill: Some("attack"),
        level: 20,
        steps: &[
            "Buy a brass key and enter the Edgeville Dungeon giants room",
            "Loot the coin and rune drops",
            "Sell surplus drops to the general store",
        ],
    },
    MoneyMethod {
        name: "Buy daily battlestaves",
        members: true,
        trading: true,
        skill: None,
        level: 1,
        steps: &[
            "Buy the daily stock of battlestaves from Zaff in Varrock",
            "Sell them on the Grand Exchange",
            "Repeat every day",
        ],
    },
    MoneyMethod {
        name: "Make cannonballs",
        members: true,
        trading: true,
        skill: Some("smithing"),
        level: 35,
        steps: &[
            "Buy steel bars on the Grand Exchange",
            "Smith cannonballs at the Edgeville furnace",
            "Sell the cannonballs back on the Grand Exchange",
        ],
    },
    MoneyMethod {
        name: "Manage the Kingdom of Miscellania",
        members: true,
        trading: false,
        skill: None,
        level: 1,
        steps: &[
            "Complete Throne of Miscellania",
            "Deposit coffers and set workers to gather resources",
            "Collect the resources every few days",
        ],
    },
    MoneyMethod {
        name: "Run birdhouses",
        members: true,
        trading: false,
        skill: Some("hunter"),
        level: 5,
        steps: &[
            "Complete The Bone Voyage for Fossil Island access",
            "Build and place four birdhouses",
            "Collect nests and seeds every 50 minutes",
        ],
    },
    MoneyMethod {
        name: "Pickpocket Master Farmers",
        members: true,
        trading: false,
        skill: Some("thieving"),
        level: 38,
        steps: &[
            "Pickpocket Master Farmers in Draynor market",
            "Keep the best seeds for your farm runs",
            "Sell spare seeds to the farming shops",
        ],
    },
];

pub struct TrainingSpot {
    pub name: &'static str,
    pub location: &'static str,
    pub members: bool,
    pub min_level: u8,
}

pub const TRAINING_SPOTS: &[TrainingSpot] = &[
    TrainingSpot {
        name: "Lumbridge cows",
        location: "the field east of Lumbridge",
        members: false,
        min_level: 1,
    },
    TrainingSpot {
        name: "Al Kharid warriors",
        location: "Al Kharid palace",
        members: false,
        min_level: 20,
    },
    TrainingSpot {
        name: "Hill Giants",
        location: "Edgeville Dungeon",
        members: false,
        min_level: 40,
    },
    TrainingSpot {
        name: "Sand Crabs",
        location: "the Hosidius coast",
        members: true,
        min_level: 1,
    },
    TrainingSpot {
        name: "Ammonite Crabs",
        location: "Fossil Island",
        members: true,
        min_level: 50,
    },
    TrainingSpot {
        name: "Nightmare Zone",
        location: "Yanille",
        members: true,
        min_level: 70,
    },
];

/// A training method for a skill. The first method is free-to-play when one
/// exists; members-only skills only carry a members method.
pub fn training_method(skill: &str, members: bool) -> &'static str {
    let (free, paid) = match skill {
        "attack" | "strength" | "defence" | "hitpoints" => (
            "fighting cows and goblins around Lumbridge",
            "fighting Sand Crabs on the Hosidius coast",
        ),
        "ranged" => (
            "shooting chickens and cows with a shortbow",
            "shooting Sand Crabs with the best bow you can use",
        ),
        "magic" => (
            "casting the strongest strike spell on cows",
            "casting spells on Sand Crabs or high alching",
        ),
        "prayer" => (
            "burying the bones from every kill",
            "offering bones at a gilded altar",
        ),
        "cooking" => ("cooking shrimp and trout on a range", "cooking fish at Hosidius"),
        "woodcutting" => ("chopping oaks then willows", "chopping teaks on Fossil Island"),
        "fishing" => ("fishing shrimp then trout at Barbarian Village", "fly fishing at Seers' Village"),
        "firemaking" => ("burning logs along the Grand Exchange", "fighting the Wintertodt"),
        "crafting" => ("spinning wool and crafting leather", "crafting battlestaves"),
        "smithing" => ("smelting bronze then iron bars", "working at the Blast Furnace"),
        "mining" => ("mining copper, tin then iron", "mining iron in the Mining Guild"),
        "runecraft" => ("crafting air and earth runes", "running the Guardians of the Rift"),
        "fletching" | "herblore" | "agility" | "thieving" | "slayer" | "farming" | "hunter"
        | "construction" => ("", members_method(skill)),
        _ => (
            "the most efficient method you have unlocked",
            "the most efficient method you have unlocked",
        ),
    };

    if members || free.is_empty() {
        paid
    } else {
        free
    }
}

fn members_method(skill: &str) -> &'static str {
    match skill {
        "fletching" => "fletching arrow shafts then longbows",
        "herblore" => "cleaning herbs and making attack potions",
        "agility" => "running the rooftop courses",
        "thieving" => "pickpocketing men then fruit stalls",
        "slayer" => "taking tasks from Turael then Vannaka",
        "farming" => "planting trees and herb runs",
        "hunter" => "trapping birds then birdhouse runs",
        _ => "building planks into furniture in your house",
    }
}
