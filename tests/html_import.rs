//! Import tests for the HTML format (HTML → StatBlock)
//!
//! These tests drive a whole fixture page through the format and verify
//! the extracted record field by field.

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, RcDom};
use rstest::rstest;
use statblock::formats::html::parser::{find_stat_blocks, parse_abilities};
use statblock::{Format, HtmlFormat, Score, StatBlock};
use std::fs;

fn fixture_source() -> String {
    fs::read_to_string("tests/fixtures/ember_drake.html").expect("fixture page is readable")
}

fn ember_drake() -> StatBlock {
    let mut blocks = HtmlFormat
        .parse(&fixture_source())
        .expect("fixture page parses");
    assert_eq!(blocks.len(), 1, "fixture page holds one stat block");
    blocks.remove(0)
}

fn fixture_fragment() -> Handle {
    let source = fixture_source();
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(source.as_str());
    let fragment = find_stat_blocks(&dom.document).remove(0);
    // `Node::drop` drains every descendant's children when the document root
    // is dropped, so the returned handle's subtree would be emptied once `dom`
    // goes out of scope. Keep the tree alive for the handle.
    std::mem::forget(dom);
    fragment
}

#[test]
fn test_identity_fields() {
    let block = ember_drake();
    assert_eq!(block.name, Some("Ember Drake".to_string()));
    assert_eq!(block.size, Some("Medium".to_string()));
    assert_eq!(block.kind, Some("dragon".to_string()));
    assert_eq!(block.subtype, Some("firekin".to_string()));
    assert_eq!(block.alignment, Some("neutral evil".to_string()));
}

#[test]
fn test_combat_fields() {
    let block = ember_drake();
    assert_eq!(block.hp, Some(Score::Value(71)));
    assert_eq!(block.hit_dice, Some("(11d8 + 22)".to_string()));
    assert_eq!(block.ac, Some(Score::Value(14)));
    assert_eq!(block.ac_description, Some("(natural armor)".to_string()));
    assert_eq!(block.speed, Some("30 ft., fly 60 ft.".to_string()));
}

#[test]
fn test_ability_scores_and_modifiers() {
    let block = ember_drake();
    let scores = block.ability_scores.expect("ability scores present");
    assert_eq!(
        scores.full_scores(),
        Some([
            Score::Value(16),
            Score::Value(12),
            Score::Value(15),
            Score::Value(8),
            Score::Value(11),
            Score::Value(10),
        ])
    );
    assert_eq!(scores.strength_mod, Some("(+3)".to_string()));
    assert_eq!(scores.intelligence_mod, Some("(-1)".to_string()));
    assert_eq!(scores.charisma_mod, Some("(+0)".to_string()));
}

#[test]
fn test_bonus_lists() {
    let block = ember_drake();

    let saves = block.saving_throws.expect("saving throws present");
    assert_eq!(saves.len(), 2);
    assert_eq!(saves[0].name, "DEX");
    assert_eq!(saves[0].modifier, Some("+3".to_string()));
    assert_eq!(saves[1].name, "CON");
    assert_eq!(saves[1].modifier, Some("+4".to_string()));

    let skills = block.skills.expect("skills present");
    assert_eq!(skills.len(), 2);
    assert_eq!(skills[0].name, "Perception");
    assert_eq!(skills[1].name, "Stealth");
}

#[test]
fn test_tidbit_fields() {
    let block = ember_drake();
    assert_eq!(
        block.senses,
        Some("darkvision 60 ft., passive Perception 12".to_string())
    );
    assert_eq!(block.languages, Some("Draconic".to_string()));
    assert_eq!(block.damage_vulnerabilities, Some("cold".to_string()));
    assert_eq!(block.damage_immunities, Some("fire".to_string()));
    assert_eq!(block.proficiency_bonus, Some("+2".to_string()));
}

#[test]
fn test_challenge_is_split_on_first_space() {
    let block = ember_drake();
    assert_eq!(block.cr, Some("3".to_string()));
    assert_eq!(block.cr_xp, Some("(700 XP)".to_string()));
}

#[test]
fn test_absent_fields_stay_absent() {
    let block = ember_drake();
    assert_eq!(block.damage_resistances, None);
    assert_eq!(block.condition_immunities, None);
    assert_eq!(block.reactions, None);
    assert_eq!(block.bonus_actions, None);
}

#[test]
fn test_traits_merge_continuation_paragraphs() {
    let block = ember_drake();
    let traits = block.traits.expect("traits present");
    assert_eq!(traits.len(), 2);
    assert_eq!(traits[0].name, Some("Fire Form".to_string()));
    assert_eq!(
        traits[0].description,
        "The drake sheds dim light in a 10-foot radius.\n\
         A creature that touches the drake takes 3 (1d6) fire damage."
    );
    assert_eq!(traits[1].name, Some("Keen Smell".to_string()));
}

#[test]
fn test_action_names_stop_at_first_dot() {
    let block = ember_drake();
    let actions = block.actions.expect("actions present");
    assert_eq!(actions[0].name, Some("Bite".to_string()));
    assert!(actions[0].description.starts_with("Melee Weapon Attack:"));
    assert_eq!(
        actions[1].name,
        Some("Fire Breath (Recharge 5-6)".to_string())
    );
}

#[test]
fn test_legendary_actions_keep_leading_nameless_entry() {
    let block = ember_drake();
    let legendary = block.legendary_actions.expect("legendary actions present");
    assert_eq!(legendary.len(), 3);
    assert_eq!(legendary[0].name, None);
    assert!(legendary[0]
        .description
        .starts_with("The drake can take 2 legendary actions"));
    assert_eq!(legendary[1].name, Some("Detect".to_string()));
    assert_eq!(legendary[2].name, Some("Tail Swipe".to_string()));
}

#[rstest]
#[case(None, Some(Some("Fire Form")))]
#[case(Some("Actions"), Some(Some("Bite")))]
#[case(Some("Legendary Actions"), Some(None))]
#[case(Some("Reactions"), None)]
fn test_description_block_selection(
    #[case] block_label: Option<&'static str>,
    #[case] first_name: Option<Option<&'static str>>,
) {
    let fragment = fixture_fragment();
    let abilities = parse_abilities(&fragment, block_label);
    match first_name {
        None => assert_eq!(abilities, None),
        Some(expected) => {
            let abilities = abilities.expect("block exists");
            assert_eq!(abilities[0].name.as_deref(), expected);
        }
    }
}

#[test]
fn test_multiple_blocks_in_document_order() {
    let source = "<html><body>\
         <div class=\"mon-stat-block\">\
         <a class=\"mon-stat-block__name-link\">Ash Crawler</a></div>\
         <div class=\"mon-stat-block\">\
         <a class=\"mon-stat-block__name-link\">Bog Howler</a></div>\
         </body></html>";
    let blocks = HtmlFormat.parse(source).unwrap();
    let names: Vec<_> = blocks.iter().map(|block| block.name.as_deref()).collect();
    assert_eq!(names, vec![Some("Ash Crawler"), Some("Bog Howler")]);
}

#[test]
fn test_bare_fragment_gets_challenge_defaults() {
    let blocks = HtmlFormat
        .parse("<div class=\"mon-stat-block\"></div>")
        .unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].cr, Some("1/4".to_string()));
    assert_eq!(blocks[0].cr_xp, Some("25".to_string()));
    assert_eq!(blocks[0].name, None);
    assert_eq!(blocks[0].ability_scores, None);
}
