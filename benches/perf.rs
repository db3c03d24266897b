use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

use profile_dashboard::icons::GlyphTable;
use profile_dashboard::model::{MilestoneEntry, RankEntry};
use profile_dashboard::sample_data::demo_profile;
use profile_dashboard::screen::render_to_buffer;

fn bench_demo_page_render(c: &mut Criterion) {
    let data = demo_profile(&mut StdRng::seed_from_u64(7));
    let icons = GlyphTable::from(&data.glyphs);

    c.bench_function("demo_page_render_120x32", |b| {
        b.iter(|| {
            let buffer = render_to_buffer(black_box(&data), &icons, 120, 32).unwrap();
            black_box(buffer.area);
        })
    });
}

fn bench_large_page_render(c: &mut Criterion) {
    let mut data = demo_profile(&mut StdRng::seed_from_u64(11));
    data.rankings = (0..200)
        .map(|idx| RankEntry {
            leaderboard_name: format!("Board {idx}"),
            points: idx * 37,
            rank: (idx as u32 % 50) + 1,
        })
        .collect();
    data.milestones = (0..60)
        .map(|idx| MilestoneEntry {
            name: format!("Milestone {idx}"),
            level: idx % 10,
            total_levels: 10,
            remaining_to_next: u64::from(idx) * 13,
            next_level_threshold: 1_000,
            progress_percent: (idx as i32 * 7) % 130 - 10,
        })
        .collect();
    let icons = GlyphTable::from(&data.glyphs);

    c.bench_function("large_page_render_200x60", |b| {
        b.iter(|| {
            let buffer = render_to_buffer(black_box(&data), &icons, 200, 60).unwrap();
            black_box(buffer.area);
        })
    });
}

criterion_group!(benches, bench_demo_page_render, bench_large_page_render);
criterion_main!(benches);
