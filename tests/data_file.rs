use std::fs;
use std::path::PathBuf;

use profile_dashboard::config::{DashConfig, load_profile, resolve_profile};
use profile_dashboard::icons::{GlyphTable, IconResolver};
use profile_dashboard::model::parse_profile_json;

fn fixture_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

#[test]
fn parses_full_profile_fixture() {
    let data = load_profile(&fixture_path("profile.json")).expect("fixture should load");
    assert_eq!(data.identity.display_name, "John Doe");
    assert_eq!(data.identity.avatar_image, "profile.jpg");
    assert_eq!(data.rankings.len(), 3);
    assert_eq!(data.rankings[1].leaderboard_name, "Top Finder");
    assert_eq!(data.milestones[0].progress_percent, 55);
    assert_eq!(data.milestones[0].next_level_threshold, 10_000);
    assert_eq!(data.badges.len(), 5);
    assert_eq!(data.badges[1].sub_badge.as_deref(), Some("Gold"));
    assert_eq!(data.team_history.len(), 3);
    assert!(data.team_history[0].is_active);
    assert_eq!(data.team_history[1].team_name, None);
    assert!(!data.team_history[1].is_active);
}

#[test]
fn missing_lists_default_to_empty() {
    let data = load_profile(&fixture_path("profile_minimal.json")).expect("fixture should load");
    assert_eq!(data.identity.team, "Core");
    assert!(data.identity.avatar_image.is_empty());
    assert!(data.rankings.is_empty());
    assert!(data.milestones.is_empty());
    assert!(data.badges.is_empty());
    assert!(data.team_history.is_empty());
    assert!(data.glyphs.is_empty());
}

#[test]
fn out_of_range_progress_survives_parsing() {
    let raw = r#"{
        "identity": {"displayName": "A", "designation": "B", "email": "c", "team": "d"},
        "milestones": [
            {"name": "m", "level": 0, "totalLevels": 0, "remainingToNext": 0,
             "nextLevelThreshold": 1, "progressPercent": -15}
        ]
    }"#;
    let data = parse_profile_json(raw).expect("should parse");
    assert_eq!(data.milestones[0].progress_percent, -15);
}

#[test]
fn malformed_file_is_an_error() {
    let raw = fs::read_to_string(fixture_path("profile.json")).expect("fixture");
    assert!(parse_profile_json(&raw[..raw.len() / 2]).is_err());
}

#[test]
fn glyph_table_comes_from_data() {
    let data = load_profile(&fixture_path("profile.json")).expect("fixture should load");
    let icons = GlyphTable::from(&data.glyphs);
    assert_eq!(icons.resolve("at"), Some("@"));
    assert_eq!(icons.resolve("users"), None);
}

#[test]
fn resolve_profile_uses_configured_file() {
    let config = DashConfig::from_lookup(Some(fixture_path("profile_minimal.json")), |_| None);
    let data = resolve_profile(&config).expect("should load");
    assert_eq!(data.identity.display_name, "Ada");
}

#[test]
fn resolve_profile_falls_back_to_demo() {
    let config = DashConfig::from_lookup(None, |_| None);
    let data = resolve_profile(&config).expect("demo profile");
    assert_eq!(data.identity.display_name, "John Doe");
    assert_eq!(data.milestones.len(), 3);
}
