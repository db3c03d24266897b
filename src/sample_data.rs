use std::collections::BTreeMap;

use rand::Rng;

use crate::model::{
    Badge, MilestoneEntry, ProfileData, ProfileIdentity, RankEntry, TeamHistoryEntry,
};

/// Demo profile used when no data file is configured. Point totals and
/// remaining counts are randomised on every call.
pub fn demo_profile<R: Rng>(rng: &mut R) -> ProfileData {
    let identity = ProfileIdentity {
        display_name: "John Doe".to_string(),
        designation: "Senior Engineer".to_string(),
        avatar_image: "profile.jpg".to_string(),
        email: "john@product.com".to_string(),
        team: "QA-Testings".to_string(),
    };

    let rankings = vec![
        RankEntry {
            leaderboard_name: "Top Supporter".to_string(),
            points: rng.gen_range(0..100_000),
            rank: 2,
        },
        RankEntry {
            leaderboard_name: "Top Finder".to_string(),
            points: rng.gen_range(0..500),
            rank: 15,
        },
        RankEntry {
            leaderboard_name: "Top Closer".to_string(),
            points: rng.gen_range(0..500),
            rank: rng.gen_range(1..=20),
        },
    ];

    let milestones = [
        ("Total Resolves", 4, 10, 55),
        ("Quick Resolves", 2, 5, 32),
        ("Bugs Found", 9, 20, 81),
    ]
    .into_iter()
    .map(|(name, level, total_levels, progress)| MilestoneEntry {
        name: name.to_string(),
        level,
        total_levels,
        remaining_to_next: rng.gen_range(0..10_000),
        next_level_threshold: 10_000,
        progress_percent: progress,
    })
    .collect();

    let badges = [
        ("First Blood", None, "medal"),
        ("Bug Hunter", Some("Gold"), "bug"),
        ("Streak x5", None, "fire"),
        ("Closer", Some("Silver"), "medal"),
        ("Helper", None, "star"),
    ]
    .into_iter()
    .map(|(name, sub, glyph)| Badge {
        name: name.to_string(),
        sub_badge: sub.map(str::to_string),
        glyph: Some(glyph.to_string()),
    })
    .collect();

    let team_history = vec![
        TeamHistoryEntry::new("Team-1", true),
        TeamHistoryEntry::default(),
        TeamHistoryEntry::default(),
    ];

    ProfileData {
        identity,
        rankings,
        milestones,
        badges,
        team_history,
        glyphs: demo_glyphs(),
    }
}

fn demo_glyphs() -> BTreeMap<String, String> {
    [
        ("football-ball", "●"),
        ("at", "@"),
        ("users", "▪"),
        ("medal", "◆"),
        ("bug", "¤"),
        ("fire", "▲"),
        ("star", "★"),
    ]
    .into_iter()
    .map(|(name, glyph)| (name.to_string(), glyph.to_string()))
    .collect()
}
