//! Canonical in-memory shape of one observation of a character.
//!
//! Serializing a [`Snapshot`] always yields the normalized wire shape, so a
//! snapshot survives an encode/decode cycle unchanged.

use serde::{Deserialize, Serialize};

use super::{decimal_text, is_false, is_zero};

/// Item id of the flat-happiness booster.
pub const FLAT_BOOSTER_ITEM_ID: i64 = 367;
/// Item id of the proportional-happiness booster.
pub const PROPORTIONAL_BOOSTER_ITEM_ID: i64 = 366;

/// One observation of a character's statistics at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "userId", default)]
    pub user_id: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "battlestats", default)]
    pub battle_stats: BattleStats,
    #[serde(default)]
    pub bars: Bars,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<Job>,
    #[serde(rename = "personalstats", default)]
    pub personal_stats: PersonalStats,
    #[serde(default)]
    pub refills: Refills,
    #[serde(rename = "inventory", default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
}

/// The four trained stats as exact decimal text.
///
/// On a diff each field holds a signed delta; an empty string is an exact
/// zero and is omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleStats {
    #[serde(
        deserialize_with = "decimal_text::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub strength: String,
    #[serde(
        deserialize_with = "decimal_text::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub speed: String,
    #[serde(
        deserialize_with = "decimal_text::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub dexterity: String,
    #[serde(
        deserialize_with = "decimal_text::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub defense: String,
}

impl BattleStats {
    /// Stat values in a fixed order: strength, speed, dexterity, defense.
    pub fn values(&self) -> [&str; 4] {
        [
            self.strength.as_str(),
            self.speed.as_str(),
            self.dexterity.as_str(),
            self.defense.as_str(),
        ]
    }
}

/// A gauge with a current reading and a capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gauge {
    #[serde(skip_serializing_if = "is_zero")]
    pub current: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub maximum: i64,
    /// Seconds until the next regeneration tick (energy only)
    #[serde(rename = "ticktime", skip_serializing_if = "is_zero")]
    pub tick_time: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bars {
    pub energy: Gauge,
    pub happy: Gauge,
}

/// Point balance at one workplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Points", default)]
    pub points: i64,
}

impl Job {
    pub fn new(name: impl Into<String>, points: i64) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Lifetime counters tracked by the stats API.
///
/// Serves both as the snapshot reading and, on a diff, as the signed
/// per-counter delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalStats {
    #[serde(rename = "attackswon", skip_serializing_if = "is_zero")]
    pub attacks_won: i64,
    #[serde(rename = "dumpsearches", skip_serializing_if = "is_zero")]
    pub dump_searches: i64,
    #[serde(rename = "useractivity", skip_serializing_if = "is_zero")]
    pub user_activity: i64,
    #[serde(rename = "logins", skip_serializing_if = "is_zero")]
    pub logins: i64,
    #[serde(rename = "attackslost", skip_serializing_if = "is_zero")]
    pub attacks_lost: i64,
    #[serde(rename = "xantaken", skip_serializing_if = "is_zero")]
    pub xanax_taken: i64,
    #[serde(rename = "attacksdraw", skip_serializing_if = "is_zero")]
    pub attacks_draw: i64,
    #[serde(rename = "lsdtaken", skip_serializing_if = "is_zero")]
    pub lsd_taken: i64,
    #[serde(rename = "exttaken", skip_serializing_if = "is_zero")]
    pub ecstasy_taken: i64,
    #[serde(rename = "overdosed", skip_serializing_if = "is_zero")]
    pub overdosed: i64,
    #[serde(rename = "yourunaway", skip_serializing_if = "is_zero")]
    pub you_run_away: i64,
    #[serde(rename = "attacksassisted", skip_serializing_if = "is_zero")]
    pub attacks_assisted: i64,
    #[serde(rename = "cantaken", skip_serializing_if = "is_zero")]
    pub cannabis_taken: i64,
    #[serde(rename = "consumablesused", skip_serializing_if = "is_zero")]
    pub consumables_used: i64,
    #[serde(rename = "candyused", skip_serializing_if = "is_zero")]
    pub candy_used: i64,
    #[serde(rename = "alcoholused", skip_serializing_if = "is_zero")]
    pub alcohol_used: i64,
    #[serde(rename = "energydrinkused", skip_serializing_if = "is_zero")]
    pub energy_drink_used: i64,
    #[serde(rename = "booksread", skip_serializing_if = "is_zero")]
    pub books_read: i64,
    #[serde(rename = "nerverefills", skip_serializing_if = "is_zero")]
    pub nerve_refills: i64,
    #[serde(rename = "boostersused", skip_serializing_if = "is_zero")]
    pub boosters_used: i64,
    #[serde(rename = "refills", skip_serializing_if = "is_zero")]
    pub refills: i64,
}

impl PersonalStats {
    /// Attacks of every outcome: won, lost, drawn, assisted and fled.
    pub fn total_attacks(&self) -> i64 {
        self.attacks_won
            + self.attacks_lost
            + self.attacks_draw
            + self.attacks_assisted
            + self.you_run_away
    }
}

/// Daily and special refill state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Refills {
    /// On a snapshot: the daily energy refill is already spent. On a diff:
    /// it was spent during the interval.
    #[serde(skip_serializing_if = "is_false")]
    pub energy_refill_used: bool,
    /// Remaining count; a negative diff means some were spent.
    #[serde(skip_serializing_if = "is_zero")]
    pub special_refills_available: i64,
}

/// Quantity held of one inventory item kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(default)]
    pub quantity: i64,
}

/// The inventory item kinds the engine keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemKind {
    FlatBooster,
    ProportionalBooster,
}

impl ItemKind {
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            FLAT_BOOSTER_ITEM_ID => Some(ItemKind::FlatBooster),
            PROPORTIONAL_BOOSTER_ITEM_ID => Some(ItemKind::ProportionalBooster),
            _ => None,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            ItemKind::FlatBooster => FLAT_BOOSTER_ITEM_ID,
            ItemKind::ProportionalBooster => PROPORTIONAL_BOOSTER_ITEM_ID,
        }
    }
}

impl Item {
    pub fn kind(&self) -> Option<ItemKind> {
        ItemKind::from_id(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_attacks_covers_every_outcome() {
        let ps = PersonalStats {
            attacks_won: 1,
            attacks_lost: 2,
            attacks_draw: 3,
            attacks_assisted: 4,
            you_run_away: 5,
            dump_searches: 100,
            ..PersonalStats::default()
        };
        assert_eq!(ps.total_attacks(), 15);
    }

    #[test]
    fn test_item_kind_ids() {
        assert_eq!(ItemKind::from_id(367), Some(ItemKind::FlatBooster));
        assert_eq!(ItemKind::from_id(366), Some(ItemKind::ProportionalBooster));
        assert_eq!(ItemKind::from_id(206), None);
        assert_eq!(ItemKind::FlatBooster.id(), 367);
    }

    #[test]
    fn test_zero_counters_are_omitted() {
        let ps = PersonalStats {
            xanax_taken: 3,
            ..PersonalStats::default()
        };
        let json = serde_json::to_value(ps).unwrap();
        assert_eq!(json, serde_json::json!({ "xantaken": 3 }));
    }

    #[test]
    fn test_bars_always_serialized() {
        let json = serde_json::to_value(Snapshot::default()).unwrap();
        assert!(json.get("bars").is_some());
    }
}
