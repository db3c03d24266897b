use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankEntry {
    pub leaderboard_name: String,
    pub points: u64,
    // Expected to be >= 1; not validated.
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneEntry {
    pub name: String,
    pub level: u32,
    pub total_levels: u32,
    pub remaining_to_next: u64,
    pub next_level_threshold: u64,
    // Supplied independently of remaining/threshold; signed so upstream
    // values outside 0..=100 survive until display clamps them.
    pub progress_percent: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamHistoryEntry {
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl TeamHistoryEntry {
    pub fn new(team_name: impl Into<String>, is_active: bool) -> Self {
        Self {
            team_name: Some(team_name.into()),
            is_active,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileIdentity {
    pub display_name: String,
    pub designation: String,
    /// Opaque reference to the avatar image (path or URL); only shown, never loaded.
    #[serde(default)]
    pub avatar_image: String,
    pub email: String,
    pub team: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub name: String,
    #[serde(default)]
    pub sub_badge: Option<String>,
    /// Glyph name looked up through the icon resolver.
    #[serde(default)]
    pub glyph: Option<String>,
}

/// Everything one render of the profile page needs.
///
/// Built once by the caller (data file, demo generator, tests) and only
/// ever borrowed by the views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub identity: ProfileIdentity,
    #[serde(default)]
    pub rankings: Vec<RankEntry>,
    #[serde(default)]
    pub milestones: Vec<MilestoneEntry>,
    #[serde(default)]
    pub badges: Vec<Badge>,
    #[serde(default)]
    pub team_history: Vec<TeamHistoryEntry>,
    /// Glyph name -> rendered glyph, handed to the icon resolver.
    #[serde(default)]
    pub glyphs: BTreeMap<String, String>,
}

pub fn parse_profile_json(raw: &str) -> anyhow::Result<ProfileData> {
    let data = serde_json::from_str::<ProfileData>(raw)?;
    Ok(data)
}
