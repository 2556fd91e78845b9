//! Commander-format command-zone and color-identity tests.

mod common;

use deck_legality::checks::{check_commander_rules, check_deck_size};
use deck_legality::DeckSnapshot;

#[test]
fn legal_dimir_deck_has_no_issues() {
    let cards = common::dimir_commander_deck();
    let deck = DeckSnapshot::new(None, "commander", cards.clone());
    assert!(check_deck_size("commander", deck.mainboard_count(true)).is_empty());
    assert!(check_commander_rules(&cards).is_empty());
}

#[test]
fn missing_commander_is_the_only_issue() {
    let cards = vec![
        common::colored("Llanowar Elves", &["G"]),
        common::card("Sol Ring", 3).with_type_line("Artifact"),
        common::colored("Counterspell", &["U"]),
    ];
    let issues = check_commander_rules(&cards);
    assert_eq!(issues, vec!["Deck must have a commander.".to_string()]);
}

#[test]
fn non_legendary_commander_is_rejected() {
    let mut cards = vec![common::colored("Llanowar Elves", &["G"]).commander()];
    cards.push(common::colored("Elvish Mystic", &["G"]));
    let issues = check_commander_rules(&cards);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].contains("Llanowar Elves"));
    assert!(issues[0].contains("not a legal commander"));
}

#[test]
fn commander_marker_keyword_allows_non_creature() {
    let cards = vec![common::card("Teferi, Temporal Archmage", 1)
        .with_type_line("Legendary Planeswalker — Teferi")
        .with_keywords(&["can be your commander"])
        .with_color_identity(&["U"])
        .commander()];
    assert!(check_commander_rules(&cards).is_empty());
}

#[test]
fn ineligible_and_duplicated_commander_reports_both() {
    let bad = common::card("Grizzly Bears", 2)
        .with_type_line("Creature — Bear")
        .with_color_identity(&["G"])
        .commander();
    let issues = check_commander_rules(&[bad]);
    assert_eq!(issues.len(), 2);
    assert!(issues[0].contains("not a legal commander"));
    assert!(issues[1].contains("single copy"));
}

// ---------------------------------------------------------------------------
// Partners
// ---------------------------------------------------------------------------

#[test]
fn two_partners_are_allowed_and_identities_union() {
    let cards = vec![
        common::legendary("Thrasios, Triton Hero", &["G", "U"]).with_keywords(&["Partner"]),
        common::legendary("Tymna the Weaver", &["W", "B"]).with_keywords(&["Partner"]),
        common::colored("Swords to Plowshares", &["W"]),
        common::colored("Demonic Tutor", &["B"]),
        common::colored("Mystic Remora", &["U"]),
        common::colored("Sylvan Library", &["G"]),
    ];
    assert!(check_commander_rules(&cards).is_empty());
}

#[test]
fn partner_with_and_friends_forever_are_accepted() {
    let cards = vec![
        common::legendary("Pir, Imaginative Rascal", &["G"])
            .with_oracle_text("Partner with Toothy, Imaginary Friend"),
        common::legendary("Will the Wise", &["U"]).with_oracle_text("Friends forever"),
    ];
    assert!(check_commander_rules(&cards).is_empty());
}

#[test]
fn two_commanders_without_partner_is_one_issue() {
    let cards = vec![
        common::legendary("Thrasios, Triton Hero", &["G", "U"]).with_keywords(&["Partner"]),
        common::legendary("Krenko, Mob Boss", &["R"]),
    ];
    let issues = check_commander_rules(&cards);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].contains("Partner"));
}

#[test]
fn three_commanders_skip_the_partner_check() {
    let cards = vec![
        common::legendary("Krenko, Mob Boss", &["R"]),
        common::legendary("Isamaru, Hound of Konda", &["W"]),
        common::legendary("Captain Sisay", &["G", "W"]),
    ];
    let issues = check_commander_rules(&cards);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].contains("more than two commanders"));
    assert!(!issues.iter().any(|i| i.contains("Partner")));
}

// ---------------------------------------------------------------------------
// Color identity
// ---------------------------------------------------------------------------

#[test]
fn each_off_identity_card_is_its_own_issue() {
    let cards = vec![
        common::legendary("Krenko, Mob Boss", &["R"]),
        common::colored("Counterspell", &["U"]),
        common::colored("Lightning Helix", &["R", "W"]),
        common::colored("Goblin Guide", &["R"]),
    ];
    let issues = check_commander_rules(&cards);
    assert_eq!(issues.len(), 2);
    assert!(issues[0].contains("Counterspell"));
    assert!(issues[0].contains("identity U"));
    assert!(issues[0].contains("color identity R"));
    assert!(issues[1].contains("Lightning Helix"));
    assert!(issues[1].contains("WR"));
}

#[test]
fn colorless_commander_allows_only_colorless_cards() {
    let cards = vec![
        common::legendary("Karn, Silver Golem", &[]),
        common::card("Sol Ring", 1).with_type_line("Artifact"),
        common::colored("Opt", &["U"]),
    ];
    let issues = check_commander_rules(&cards);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].contains("Opt"));
    assert!(issues[0].ends_with("color identity C."));
}

#[test]
fn sideboard_cards_are_held_to_identity_too() {
    let cards = vec![
        common::legendary("Krenko, Mob Boss", &["R"]),
        common::colored("Swords to Plowshares", &["W"]).sideboard(),
    ];
    assert_eq!(check_commander_rules(&cards).len(), 1);
}
