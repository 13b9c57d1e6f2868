use std::fs;
use std::path::PathBuf;

use summoner_lookup::service::gameapi::parsing::{
    summoner::{parse_ranked_stats, parse_summoner},
    ParsingError,
};

fn read_fixture(name: &str) -> json::JsonValue {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    let raw = fs::read_to_string(path).expect("fixture file should be readable");
    json::parse(&raw).expect("fixture should be valid json")
}

#[test]
fn parses_summoner_fixture() {
    let summoner = parse_summoner(&read_fixture("summoner_faker.json")).expect("fixture should parse");
    assert_eq!(summoner.id.as_str(), "Gj0k2vQxYdT4c1mGZ6qL8Hb3");
    assert_eq!(summoner.name, "Faker");
    assert_eq!(summoner.level, 500);
    assert!(!summoner.is_placeholder());
}

#[test]
fn parses_placeholder_summoner() {
    let summoner = parse_summoner(&read_fixture("summoner_undefined.json")).expect("fixture should parse");
    assert!(summoner.is_placeholder());
}

#[test]
fn parses_league_fixture_in_order() {
    let entries = parse_ranked_stats(&read_fixture("league_faker.json")).expect("fixture should parse");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].queue_type, "RANKED_SOLO_5x5");
    assert_eq!(entries[0].tier, "CHALLENGER");
    assert_eq!(entries[0].division, "I");
    assert_eq!(entries[0].league_points, 1200);
    assert_eq!(entries[0].wins, 300);
    assert_eq!(entries[0].losses, 200);
    assert_eq!(entries[1].queue_label(), "FLEX");
}

#[test]
fn empty_league_list_is_valid() {
    let entries = parse_ranked_stats(&json::parse("[]").unwrap()).expect("empty array should parse");
    assert!(entries.is_empty());
}

#[test]
fn missing_field_names_the_field() {
    let err = parse_ranked_stats(&read_fixture("league_missing_wins.json")).unwrap_err();
    assert_eq!(err, ParsingError::InvalidType("wins".into()));
}

#[test]
fn wrong_root_types_are_rejected() {
    let league_as_summoner = parse_summoner(&read_fixture("league_faker.json")).unwrap_err();
    assert_eq!(league_as_summoner, ParsingError::InvalidType("root".into()));

    let summoner_as_league = parse_ranked_stats(&read_fixture("summoner_faker.json")).unwrap_err();
    assert_eq!(summoner_as_league, ParsingError::InvalidType("root".into()));
}

#[test]
fn mistyped_level_is_rejected() {
    let payload = json::parse(r#"{ "id": "abc", "name": "Caps", "summonerLevel": "high" }"#).unwrap();
    let err = parse_summoner(&payload).unwrap_err();
    assert_eq!(err, ParsingError::InvalidType("summonerLevel".into()));
}

#[test]
fn non_object_entries_are_rejected() {
    let payload = json::parse(r#"["RANKED_SOLO_5x5"]"#).unwrap();
    let err = parse_ranked_stats(&payload).unwrap_err();
    assert_eq!(err, ParsingError::InvalidType("entries".into()));
}

#[test]
fn large_counts_parse_and_total_without_wrapping() {
    let payload = json::parse(
        r#"[{ "queueType": "RANKED_SOLO_5x5", "tier": "GOLD", "rank": "I",
              "leaguePoints": 10, "wins": 3000000000, "losses": 3000000000 }]"#,
    )
    .unwrap();
    let entries = parse_ranked_stats(&payload).expect("large u32 counts should parse");
    let card = summoner_lookup::ui::projection::RankedCard::from_stats(&entries[0]);
    assert_eq!(card.total_games, 6_000_000_000);
    assert_eq!(card.win_rate, "50.0%");
}
