//! Player document format.

use std::collections::BTreeMap;

use hp_core::{DamageCategory, Defense, DefenseKind, HpStateError, PlayerHpState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored defense entry. Both fields are kept as strings so that documents
/// written by other tools round-trip untouched; they are parsed on mapping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenseEntry {
    #[serde(rename = "type")]
    pub damage_type: String,
    pub defense: String,
}

impl DefenseEntry {
    pub fn new(category: DamageCategory, kind: DefenseKind) -> Self {
        Self {
            damage_type: category.as_ref().to_ascii_lowercase(),
            defense: kind.to_string(),
        }
    }

    fn to_defense(&self) -> Result<Defense, RecordError> {
        let category = self
            .damage_type
            .parse::<DamageCategory>()
            .map_err(|_| RecordError::UnknownDamageType(self.damage_type.clone()))?;
        let kind = self
            .defense
            .parse::<DefenseKind>()
            .map_err(|_| RecordError::UnknownDefense(self.defense.clone()))?;
        Ok(Defense::new(category, kind))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntry {
    pub name: String,
    pub hit_dice_value: u32,
    pub class_level: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemModifier {
    pub affected_object: String,
    pub affected_value: String,
    pub value: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEntry {
    pub name: String,
    pub modifier: ItemModifier,
}

/// A full player document as stored.
///
/// `hitPoints` is the maximum. `currentHp` defaults to `hitPoints` and
/// `tempHp` to 0 when a document omits them. Unknown top-level fields are kept
/// in `extra` and written back unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub level: u32,
    pub hit_points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_hp: Option<u32>,
    #[serde(default)]
    pub temp_hp: u32,
    #[serde(default)]
    pub classes: Vec<ClassEntry>,
    #[serde(default)]
    pub stats: AbilityScores,
    #[serde(default)]
    pub items: Vec<ItemEntry>,
    #[serde(default)]
    pub defenses: Vec<DefenseEntry>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl PlayerRecord {
    /// A minimal record at full health.
    pub fn new(name: impl Into<String>, hit_points: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            level: 1,
            hit_points,
            current_hp: None,
            temp_hp: 0,
            classes: Vec::new(),
            stats: AbilityScores::default(),
            items: Vec::new(),
            defenses: Vec::new(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_current_hp(mut self, current_hp: u32) -> Self {
        self.current_hp = Some(current_hp);
        self
    }

    pub fn with_temp_hp(mut self, temp_hp: u32) -> Self {
        self.temp_hp = temp_hp;
        self
    }

    pub fn with_defense(mut self, category: DamageCategory, kind: DefenseKind) -> Self {
        self.defenses.push(DefenseEntry::new(category, kind));
        self
    }

    /// Current HP, falling back to the maximum when the document has none.
    pub fn current_hp(&self) -> u32 {
        self.current_hp.unwrap_or(self.hit_points)
    }

    /// Map this document to the engine's state value.
    pub fn hp_state(&self) -> Result<PlayerHpState, RecordError> {
        let defenses = self
            .defenses
            .iter()
            .map(DefenseEntry::to_defense)
            .collect::<Result<Vec<_>, _>>()?;

        let state = PlayerHpState::new(self.hit_points, self.current_hp(), self.temp_hp)?;
        Ok(state.with_defenses(defenses))
    }

    /// Write the HP pools of `state` back into this document.
    ///
    /// Only `currentHp` and `tempHp` are touched; the engine never changes the
    /// maximum or the defenses.
    pub fn store_hp(&mut self, state: &PlayerHpState) {
        self.current_hp = Some(state.current_hp());
        self.temp_hp = state.temp_hp();
    }
}

/// A player document that cannot be mapped to a valid HP state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("unknown damage type in defenses: {0:?}")]
    UnknownDamageType(String),

    #[error("unknown defense kind: {0:?}")]
    UnknownDefense(String),

    #[error(transparent)]
    InvalidHp(#[from] HpStateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    const BRIV: &str = r#"{
        "name": "Briv",
        "level": 5,
        "hitPoints": 25,
        "classes": [{ "name": "fighter", "hitDiceValue": 10, "classLevel": 5 }],
        "stats": {
            "strength": 15, "dexterity": 12, "constitution": 14,
            "intelligence": 13, "wisdom": 10, "charisma": 8
        },
        "items": [{
            "name": "Ioun Stone of Fortitude",
            "modifier": { "affectedObject": "stats", "affectedValue": "constitution", "value": 2 }
        }],
        "defenses": [
            { "type": "fire", "defense": "immunity" },
            { "type": "slashing", "defense": "resistance" }
        ]
    }"#;

    #[test]
    fn parses_document_without_hp_pools() {
        let record: PlayerRecord = serde_json::from_str(BRIV).unwrap();

        assert_eq!(record.name, "Briv");
        assert_eq!(record.current_hp(), 25);
        assert_eq!(record.temp_hp, 0);

        let state = record.hp_state().unwrap();
        assert_eq!(state.max_hp(), 25);
        assert_eq!(state.current_hp(), 25);
        assert_eq!(
            state.defenses(),
            &[
                Defense::immunity(DamageCategory::Fire),
                Defense::resistance(DamageCategory::Slashing)
            ]
        );
    }

    #[test]
    fn store_hp_round_trips_pools() {
        let mut record: PlayerRecord = serde_json::from_str(BRIV).unwrap();
        let state = PlayerHpState::new(25, 9, 4).unwrap();

        record.store_hp(&state);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["currentHp"], 9);
        assert_eq!(json["tempHp"], 4);
        assert_eq!(json["hitPoints"], 25);
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let raw = r#"{ "name": "Ada", "hitPoints": 10, "_id": "data/ada.json", "notes": ["x"] }"#;
        let record: PlayerRecord = serde_json::from_str(raw).unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["_id"], "data/ada.json");
        assert_eq!(json["notes"][0], "x");
    }

    #[test]
    fn rejects_unknown_defense_strings() {
        let record = PlayerRecord {
            defenses: vec![DefenseEntry {
                damage_type: "fire".into(),
                defense: "vulnerability".into(),
            }],
            ..PlayerRecord::new("Ada", 10)
        };

        assert_eq!(
            record.hp_state().unwrap_err(),
            RecordError::UnknownDefense("vulnerability".into())
        );

        let record = PlayerRecord::new("Ada", 10).with_current_hp(10);
        let record = PlayerRecord {
            defenses: vec![DefenseEntry {
                damage_type: "sonic".into(),
                defense: "immunity".into(),
            }],
            ..record
        };
        assert_eq!(
            record.hp_state().unwrap_err(),
            RecordError::UnknownDamageType("sonic".into())
        );
    }

    #[test]
    fn rejects_current_above_maximum() {
        let record = PlayerRecord::new("Ada", 10).with_current_hp(11);

        assert!(matches!(
            record.hp_state(),
            Err(RecordError::InvalidHp(HpStateError::CurrentExceedsMax { .. }))
        ));
    }

    #[test]
    fn defense_entry_writes_lower_case_names() {
        let entry = DefenseEntry::new(DamageCategory::Lightning, DefenseKind::Resistance);

        assert_eq!(entry.damage_type, "lightning");
        assert_eq!(entry.defense, "resistance");
    }
}
