//! Stat-block extraction (HTML → StatBlock import)
//!
//! Walks an `RcDom` fragment for the class-tagged nodes a rendered stat
//! block carries and folds them into one [`StatBlock`] record.
//! Pipeline: HTML string → RcDom → class-keyed field scans → StatBlock
//!
//! Every lookup that fails to find its target resolves to `None` and
//! absence propagates; a field-level miss never aborts the whole build.

use crate::formats::html::dom;
use crate::statblock::{Ability, AbilityScores, Bonus, Score, StatBlock, TypeInfo};
use markup5ever_rcdom::Handle;
use once_cell::sync::Lazy;
use regex::Regex;

/// Marker class identifying a stat-block fragment inside a larger page.
pub const STAT_BLOCK_CLASS: &str = "mon-stat-block";

const NAME_LINK_CLASS: &str = "mon-stat-block__name-link";
const META_CLASS: &str = "mon-stat-block__meta";
const ATTRIBUTE_LABEL_CLASS: &str = "mon-stat-block__attribute-label";
const ATTRIBUTE_VALUE_CLASS: &str = "mon-stat-block__attribute-data-value";
const ATTRIBUTE_EXTRA_CLASS: &str = "mon-stat-block__attribute-data-extra";
const TIDBIT_LABEL_CLASS: &str = "mon-stat-block__tidbit-label";
const TIDBIT_DATA_CLASS: &str = "mon-stat-block__tidbit-data";
const ABILITY_HEADING_CLASS: &str = "ability-block__heading";
const ABILITY_SCORE_CLASS: &str = "ability-block__score";
const ABILITY_MODIFIER_CLASS: &str = "ability-block__modifier";
const DESCRIPTION_BLOCK_CLASS: &str = "mon-stat-block__description-block";
const DESCRIPTION_HEADING_CLASS: &str = "mon-stat-block__description-block-heading";
const DESCRIPTION_CONTENT_CLASS: &str = "mon-stat-block__description-block-content";

/// Meta-line pattern: `SIZE[ TYPE][ (SUBTYPE)][, ALIGNMENT]`, every group
/// after the size independently optional. Unanchored, first match wins.
static TYPE_INFO_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?P<size>[a-zA-Z]+)(?: (?P<kind>[a-zA-Z]+))?(?: \((?P<subtype>.+)\))?(?:, (?P<alignment>.+))?",
    )
    .expect("meta-line pattern is valid")
});

/// Every stat-block fragment in the document, in document order.
pub fn find_stat_blocks(document: &Handle) -> Vec<Handle> {
    dom::elements_by_class(document, STAT_BLOCK_CLASS)
}

/// The stat block's title, from its name link.
pub fn name(fragment: &Handle) -> Option<String> {
    let link = dom::elements_by_class(fragment, NAME_LINK_CLASS)
        .into_iter()
        .next()?;
    non_empty(dom::text_content(&link).trim())
}

/// A boxed attribute's data value (e.g. the "Hit Points" number).
pub fn attribute_value(fragment: &Handle, label: &str) -> Option<String> {
    labeled_text(fragment, ATTRIBUTE_LABEL_CLASS, label, ATTRIBUTE_VALUE_CLASS)
}

/// A boxed attribute's extra annotation (e.g. the hit-dice expression).
pub fn attribute_extra(fragment: &Handle, label: &str) -> Option<String> {
    labeled_text(fragment, ATTRIBUTE_LABEL_CLASS, label, ATTRIBUTE_EXTRA_CLASS)
}

/// A compact side-note value (e.g. "Senses", "Challenge").
pub fn tidbit(fragment: &Handle, label: &str) -> Option<String> {
    labeled_text(fragment, TIDBIT_LABEL_CLASS, label, TIDBIT_DATA_CLASS)
}

/// An ability score keyed by its 3-letter abbreviation (e.g. "STR").
pub fn ability_score(fragment: &Handle, abbreviation: &str) -> Option<Score> {
    labeled_text(fragment, ABILITY_HEADING_CLASS, abbreviation, ABILITY_SCORE_CLASS)
        .map(|text| Score::from_text(&text))
}

/// An ability modifier string keyed by its 3-letter abbreviation.
pub fn ability_modifier(fragment: &Handle, abbreviation: &str) -> Option<String> {
    labeled_text(
        fragment,
        ABILITY_HEADING_CLASS,
        abbreviation,
        ABILITY_MODIFIER_CLASS,
    )
}

/// Find the first label-class node whose trimmed text equals `label`
/// exactly, then read the first data-class node inside the label's parent.
/// No label match, no parent, or an empty-after-trim value all yield `None`.
fn labeled_text(
    fragment: &Handle,
    label_class: &str,
    label: &str,
    data_class: &str,
) -> Option<String> {
    let label_node = dom::elements_by_class(fragment, label_class)
        .into_iter()
        .find(|node| dom::text_content(node).trim() == label)?;
    let container = dom::parent(&label_node)?;
    let data_node = dom::elements_by_class(&container, data_class)
        .into_iter()
        .next()?;
    non_empty(dom::text_content(&data_node).trim())
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Split a "Name +N, Name2 +N2" bonus list into (name, modifier) pairs.
///
/// Each comma-separated segment contributes its first space-separated token
/// as the name and its second as the modifier; anything further is
/// discarded. An empty result list is normalized to `None`.
pub fn parse_bonuses(text: Option<&str>) -> Option<Vec<Bonus>> {
    let text = text?;
    let bonuses: Vec<Bonus> = text
        .split(", ")
        .map(|segment| {
            let mut parts = segment.split(' ');
            Bonus {
                name: parts.next().unwrap_or_default().to_string(),
                modifier: parts.next().map(str::to_string),
            }
        })
        .collect();
    if bonuses.is_empty() {
        None
    } else {
        Some(bonuses)
    }
}

/// Split a meta line like "Large dragon (chromatic), chaotic evil" into its
/// four fields. Absent input or no pattern match leaves all fields `None`;
/// partial matches fill only the groups that matched.
pub fn parse_type_info(meta_line: Option<&str>) -> TypeInfo {
    let Some(meta_line) = meta_line else {
        return TypeInfo::default();
    };
    let Some(captures) = TYPE_INFO_PATTERN.captures(meta_line) else {
        return TypeInfo::default();
    };
    TypeInfo {
        size: captures.name("size").map(|m| m.as_str().to_string()),
        kind: captures.name("kind").map(|m| m.as_str().to_string()),
        subtype: captures.name("subtype").map(|m| m.as_str().to_string()),
        alignment: captures.name("alignment").map(|m| m.as_str().to_string()),
    }
}

/// Segment a description block's content into named entries.
///
/// Selects the block whose heading equals `block_label`, or, with no
/// label, the one block that has no heading at all (the unlabeled traits
/// block). Returns `None` when no such block exists; a present-but-empty
/// block yields an empty list.
///
/// The content children are folded in document order, flattening `ol`/`ul`
/// containers one level. A unit carrying an emphasized run starts a new
/// entry named by the text before the first `.`; units without one are
/// continuations, appended newline-joined to the entry they follow. A
/// leading run of unnamed units survives as a single nameless entry.
pub fn parse_abilities(fragment: &Handle, block_label: Option<&str>) -> Option<Vec<Ability>> {
    let block = dom::elements_by_class(fragment, DESCRIPTION_BLOCK_CLASS)
        .into_iter()
        .find(|block| block_matches(block, block_label))?;
    let content = dom::elements_by_class(&block, DESCRIPTION_CONTENT_CLASS)
        .into_iter()
        .next()?;

    let mut abilities = Vec::new();
    let mut current: Option<Ability> = None;

    for child in dom::element_children(&content) {
        if dom::is_element_named(&child, "ol") || dom::is_element_named(&child, "ul") {
            for item in dom::element_children(&child) {
                fold_unit(&item, &mut abilities, &mut current);
            }
        } else {
            fold_unit(&child, &mut abilities, &mut current);
        }
    }

    if let Some(ability) = current {
        abilities.push(ability);
    }
    Some(abilities)
}

fn block_matches(block: &Handle, block_label: Option<&str>) -> bool {
    let heading = dom::elements_by_class(block, DESCRIPTION_HEADING_CLASS)
        .into_iter()
        .next();
    match block_label {
        Some(label) => heading.map_or(false, |node| dom::text_content(&node).trim() == label),
        None => heading.is_none(),
    }
}

fn fold_unit(unit: &Handle, abilities: &mut Vec<Ability>, current: &mut Option<Ability>) {
    let candidate = parse_ability_unit(unit);
    if candidate.name.is_some() {
        if let Some(previous) = current.take() {
            abilities.push(previous);
        }
        *current = Some(candidate);
    } else if let Some(open) = current.as_mut() {
        open.description.push('\n');
        open.description.push_str(&candidate.description);
    } else {
        *current = Some(candidate);
    }
}

fn parse_ability_unit(unit: &Handle) -> Ability {
    let text = dom::text_content(unit);
    if !dom::has_descendant_tag(unit, "strong") {
        return Ability {
            name: None,
            description: text.trim().to_string(),
        };
    }
    match text.find('.') {
        Some(divider) => {
            let unit_name = text[..divider].to_string();
            let description = text[divider + 1..].trim().to_string();
            Ability {
                // An empty name (text starting with the divider) does not
                // name the entry.
                name: (!unit_name.is_empty()).then_some(unit_name),
                description,
            }
        }
        None => Ability {
            name: None,
            description: text.trim().to_string(),
        },
    }
}

/// Assemble the full record from one stat-block fragment.
///
/// Each field comes from its own scan; fields whose scans find nothing stay
/// `None`, except the challenge pair, which falls back to rating "1/4" and
/// xp "25" when the tidbit is missing entirely.
pub fn parse_stat_block(fragment: &Handle) -> StatBlock {
    let type_info = parse_type_info(meta_line(fragment).as_deref());
    let (cr, cr_xp) = split_challenge(tidbit(fragment, "Challenge").as_deref());

    StatBlock {
        name: name(fragment),
        size: type_info.size,
        kind: type_info.kind,
        subtype: type_info.subtype,
        alignment: type_info.alignment,
        hp: attribute_value(fragment, "Hit Points").map(|text| Score::from_text(&text)),
        hit_dice: attribute_extra(fragment, "Hit Points"),
        ac: attribute_value(fragment, "Armor Class").map(|text| Score::from_text(&text)),
        ac_description: attribute_extra(fragment, "Armor Class"),
        speed: attribute_value(fragment, "Speed"),
        ability_scores: parse_ability_scores(fragment),
        saving_throws: parse_bonuses(tidbit(fragment, "Saving Throws").as_deref()),
        skills: parse_bonuses(tidbit(fragment, "Skills").as_deref()),
        senses: tidbit(fragment, "Senses"),
        languages: tidbit(fragment, "Languages"),
        damage_vulnerabilities: tidbit(fragment, "Damage Vulnerabilities"),
        damage_resistances: tidbit(fragment, "Damage Resistances"),
        damage_immunities: tidbit(fragment, "Damage Immunities"),
        condition_immunities: tidbit(fragment, "Condition Immunities"),
        cr: Some(cr),
        cr_xp: Some(cr_xp),
        proficiency_bonus: tidbit(fragment, "Proficiency Bonus"),
        traits: parse_abilities(fragment, None),
        actions: parse_abilities(fragment, Some("Actions")),
        reactions: parse_abilities(fragment, Some("Reactions")),
        bonus_actions: parse_abilities(fragment, Some("Bonus Actions")),
        legendary_actions: parse_abilities(fragment, Some("Legendary Actions")),
    }
}

fn meta_line(fragment: &Handle) -> Option<String> {
    let node = dom::elements_by_class(fragment, META_CLASS)
        .into_iter()
        .next()?;
    non_empty(dom::text_content(&node).trim())
}

fn parse_ability_scores(fragment: &Handle) -> Option<AbilityScores> {
    let scores = AbilityScores {
        strength: ability_score(fragment, "STR"),
        strength_mod: ability_modifier(fragment, "STR"),
        dexterity: ability_score(fragment, "DEX"),
        dexterity_mod: ability_modifier(fragment, "DEX"),
        constitution: ability_score(fragment, "CON"),
        constitution_mod: ability_modifier(fragment, "CON"),
        intelligence: ability_score(fragment, "INT"),
        intelligence_mod: ability_modifier(fragment, "INT"),
        wisdom: ability_score(fragment, "WIS"),
        wisdom_mod: ability_modifier(fragment, "WIS"),
        charisma: ability_score(fragment, "CHA"),
        charisma_mod: ability_modifier(fragment, "CHA"),
    };
    if scores.is_empty() {
        None
    } else {
        Some(scores)
    }
}

/// Split the challenge tidbit into its rating and xp tokens on the first
/// space. A space-free tidbit keeps indexOf-style slicing: the rating is
/// all but the final character and the xp token is the whole string.
fn split_challenge(challenge: Option<&str>) -> (String, String) {
    match challenge {
        Some(raw) => match raw.split_once(' ') {
            Some((rating, xp)) => (rating.to_string(), xp.to_string()),
            None => {
                let mut rating = raw.to_string();
                rating.pop();
                (rating, raw.to_string())
            }
        },
        None => ("1/4".to_string(), "25".to_string()),
    }
}
