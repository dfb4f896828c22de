//! Stat-block record types
//!
//! The record is a flat collection of optional fields: a field whose value
//! could not be located in the source is `None` and is omitted from every
//! serialization; downstream consumers must treat absence, not emptiness,
//! as "unknown". All values are built fresh per extraction call and are
//! immutable afterwards; serializers never mutate their input.
//!
//! JSON field names are camelCase (`hitDice`, `acDescription`, ...), with
//! the record's creature category serialized as `type`.

use serde::{Serialize, Serializer};
use std::fmt;

/// One extracted monster stat block.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Creature category ("dragon", "humanoid", ...); serialized as `type`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hp: Option<Score>,
    /// Raw hit-dice annotation, delimiters intact (e.g. `(11d8 + 22)`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hit_dice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ac: Option<Score>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ac_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ability_scores: Option<AbilityScores>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saving_throws: Option<Vec<Bonus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Bonus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub senses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_vulnerabilities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_resistances: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_immunities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_immunities: Option<String>,
    /// Challenge rating token; defaulted to "1/4" when the source carries
    /// no challenge line, so present in every built record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cr: Option<String>,
    /// Experience-point token paired with [`StatBlock::cr`]; defaulted to "25".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cr_xp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proficiency_bonus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traits: Option<Vec<Ability>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Ability>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reactions: Option<Vec<Ability>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus_actions: Option<Vec<Ability>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legendary_actions: Option<Vec<Ability>>,
}

/// An integer stat parsed from source text.
///
/// A located value whose text has no leading integer is kept as an explicit
/// [`Score::NotANumber`] marker instead of being dropped, so a broken source
/// value stays visible in the output for manual correction. `NotANumber`
/// serializes as JSON `null` and renders as the literal `NaN` in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    Value(i64),
    NotANumber,
}

impl Score {
    /// Parse the leading integer of `text` (optional sign, then digits;
    /// trailing non-digit text is ignored).
    pub fn from_text(text: &str) -> Score {
        let trimmed = text.trim();
        let (sign, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (-1i64, rest),
            None => (1i64, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        match unsigned[..end].parse::<i64>() {
            Ok(value) => Score::Value(sign * value),
            Err(_) => Score::NotANumber,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Value(value) => write!(f, "{}", value),
            Score::NotANumber => f.write_str("NaN"),
        }
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Score::Value(value) => serializer.serialize_i64(*value),
            Score::NotANumber => serializer.serialize_none(),
        }
    }
}

/// The six ability scores with their separately-rendered modifier strings.
///
/// Every member is independently optional; the record builder only attaches
/// the group when at least one member was located.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityScores {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<Score>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength_mod: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dexterity: Option<Score>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dexterity_mod: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constitution: Option<Score>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constitution_mod: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intelligence: Option<Score>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intelligence_mod: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wisdom: Option<Score>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wisdom_mod: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charisma: Option<Score>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charisma_mod: Option<String>,
}

impl AbilityScores {
    /// Whether no score and no modifier was located.
    pub fn is_empty(&self) -> bool {
        self.strength.is_none()
            && self.strength_mod.is_none()
            && self.dexterity.is_none()
            && self.dexterity_mod.is_none()
            && self.constitution.is_none()
            && self.constitution_mod.is_none()
            && self.intelligence.is_none()
            && self.intelligence_mod.is_none()
            && self.wisdom.is_none()
            && self.wisdom_mod.is_none()
            && self.charisma.is_none()
            && self.charisma_mod.is_none()
    }

    /// The six scores in STR/DEX/CON/INT/WIS/CHA order, when all are present.
    pub fn full_scores(&self) -> Option<[Score; 6]> {
        Some([
            self.strength?,
            self.dexterity?,
            self.constitution?,
            self.intelligence?,
            self.wisdom?,
            self.charisma?,
        ])
    }
}

/// A (name, modifier) pair from a "Name +N, Name2 +N2" bonus list.
///
/// Both parts are raw substrings: the name is the first space-separated
/// token of its segment and the modifier the second, so a name containing
/// internal spaces mis-parses. The boundary is inherently ambiguous without
/// a controlled vocabulary of valid names, so no smarter split is attempted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bonus {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
}

/// One named or nameless trait/action/reaction entry.
///
/// An entry is named only when its source paragraph carries an emphasized
/// run; continuation paragraphs merge into the previous entry's
/// description, newline-joined. The nullable name is serialized as-is
/// (JSON `null`), unlike the record's omitted optional fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ability {
    pub name: Option<String>,
    pub description: String,
}

/// Size/type/subtype/alignment fields split out of the meta line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeInfo {
    pub size: Option<String>,
    pub kind: Option<String>,
    pub subtype: Option<String>,
    pub alignment: Option<String>,
}
