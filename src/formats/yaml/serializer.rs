//! Stat-block text serialization (StatBlock → YAML-style text)
//!
//! Builds the indented key/value layout consumed by statblock note
//! plugins. The field order is fixed, every line is emitted only when its
//! field is present, and entry descriptions are quoted with newlines
//! escaped so each entry stays on one line.

use crate::statblock::{Ability, Bonus, Score, StatBlock};

/// Serialize one stat block to the indented text layout.
///
/// Output is deterministic: plain struct-field access in a fixed order, so
/// encoding the same record twice is byte-identical.
pub fn serialize_to_text(block: &StatBlock) -> String {
    let mut out = String::new();

    push_scalar(&mut out, "name", &block.name);
    push_scalar(&mut out, "size", &block.size);
    push_scalar(&mut out, "type", &block.kind);
    push_scalar(&mut out, "subtype", &block.subtype);
    push_scalar(&mut out, "alignment", &block.alignment);
    push_score(&mut out, "hp", &block.hp);
    if let Some(hit_dice) = &block.hit_dice {
        out.push_str(&format!("hit_dice: {}\n", strip_delimiters(hit_dice)));
    }
    push_score(&mut out, "ac", &block.ac);
    push_scalar(&mut out, "ac_description", &block.ac_description);
    push_scalar(&mut out, "speed", &block.speed);
    if let Some(scores) = &block.ability_scores {
        // A partial group would corrupt the positional list, so the line
        // requires all six scores.
        if let Some(stats) = scores.full_scores() {
            out.push_str(&format!(
                "stats: [{}, {}, {}, {}, {}, {}]\n",
                stats[0], stats[1], stats[2], stats[3], stats[4], stats[5]
            ));
        }
    }
    push_bonus_list(&mut out, "saves", &block.saving_throws);
    push_bonus_list(&mut out, "skillsaves", &block.skills);
    push_scalar(&mut out, "senses", &block.senses);
    push_scalar(&mut out, "languages", &block.languages);
    push_scalar(&mut out, "damage_vulnerabilities", &block.damage_vulnerabilities);
    push_scalar(&mut out, "damage_resistances", &block.damage_resistances);
    push_scalar(&mut out, "damage_immunities", &block.damage_immunities);
    push_scalar(&mut out, "condition_immunities", &block.condition_immunities);
    push_scalar(&mut out, "cr", &block.cr);
    push_ability_list(&mut out, "traits", &block.traits);
    push_ability_list(&mut out, "actions", &block.actions);
    push_ability_list(&mut out, "reactions", &block.reactions);
    push_ability_list(&mut out, "bonus_actions", &block.bonus_actions);
    push_ability_list(&mut out, "legendary_actions", &block.legendary_actions);

    out
}

fn push_scalar(out: &mut String, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        out.push_str(&format!("{}: {}\n", key, value));
    }
}

fn push_score(out: &mut String, key: &str, value: &Option<Score>) {
    if let Some(value) = value {
        out.push_str(&format!("{}: {}\n", key, value));
    }
}

fn push_bonus_list(out: &mut String, key: &str, bonuses: &Option<Vec<Bonus>>) {
    let Some(bonuses) = bonuses else { return };
    if bonuses.is_empty() {
        return;
    }
    out.push_str(&format!("{}:\n", key));
    for bonus in bonuses {
        match &bonus.modifier {
            Some(modifier) => out.push_str(&format!("  - {}: {}\n", bonus.name, modifier)),
            None => out.push_str(&format!("  - {}:\n", bonus.name)),
        }
    }
}

fn push_ability_list(out: &mut String, key: &str, abilities: &Option<Vec<Ability>>) {
    let Some(abilities) = abilities else { return };
    if abilities.is_empty() {
        return;
    }
    out.push_str(&format!("{}:\n", key));
    for ability in abilities {
        match &ability.name {
            Some(name) => out.push_str(&format!("  - name: {}\n", name)),
            None => out.push_str("  - name: null\n"),
        }
        out.push_str(&format!("    desc: {}\n", quote_single_line(&ability.description)));
    }
}

/// Strip the annotation's outer delimiter characters: `(11d8 + 22)`
/// becomes `11d8 + 22`. The first and last characters go unconditionally.
fn strip_delimiters(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// Double-quote `text` with every line-break sequence replaced by the
/// two-character escape `\n`, yielding a single-line quoted scalar.
fn quote_single_line(text: &str) -> String {
    let escaped = text
        .replace("\r\n", "\\n")
        .replace('\r', "\\n")
        .replace('\n', "\\n");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_delimiters() {
        assert_eq!(strip_delimiters("(11d8 + 22)"), "11d8 + 22");
        assert_eq!(strip_delimiters("{2d6}"), "2d6");
        assert_eq!(strip_delimiters("x"), "");
        assert_eq!(strip_delimiters(""), "");
    }

    #[test]
    fn test_quote_single_line_escapes_breaks() {
        assert_eq!(quote_single_line("one line"), "\"one line\"");
        assert_eq!(quote_single_line("a\nb"), "\"a\\nb\"");
        assert_eq!(quote_single_line("a\r\nb\rc"), "\"a\\nb\\nc\"");
    }

    #[test]
    fn test_empty_record_produces_no_lines() {
        assert_eq!(serialize_to_text(&StatBlock::default()), "");
    }

    #[test]
    fn test_nan_score_renders_as_nan() {
        let block = StatBlock {
            hp: Some(Score::NotANumber),
            ..Default::default()
        };
        assert_eq!(serialize_to_text(&block), "hp: NaN\n");
    }

    #[test]
    fn test_nameless_entry_renders_null_name() {
        let block = StatBlock {
            legendary_actions: Some(vec![Ability {
                name: None,
                description: "It can take 2 legendary actions.".to_string(),
            }]),
            ..Default::default()
        };
        assert_eq!(
            serialize_to_text(&block),
            "legendary_actions:\n  - name: null\n    desc: \"It can take 2 legendary actions.\"\n"
        );
    }

    #[test]
    fn test_empty_lists_produce_no_lines() {
        let block = StatBlock {
            traits: Some(Vec::new()),
            saving_throws: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(serialize_to_text(&block), "");
    }
}
