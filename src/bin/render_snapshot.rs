use std::path::PathBuf;

use anyhow::{Context, Result};

use profile_dashboard::config::{DashConfig, resolve_profile};
use profile_dashboard::icons::GlyphTable;
use profile_dashboard::screen::{buffer_lines, render_to_buffer};

const DEFAULT_WIDTH: u16 = 120;
const DEFAULT_HEIGHT: u16 = 32;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let data_path = args.next().filter(|arg| arg != "-").map(PathBuf::from);
    let width = parse_dim(args.next(), DEFAULT_WIDTH)?;
    let height = parse_dim(args.next(), DEFAULT_HEIGHT)?;

    let config = DashConfig::from_env(data_path);
    let data = resolve_profile(&config)?;
    let icons = GlyphTable::from(&data.glyphs);

    // Prints a single frame as plain text so layout changes can be checked
    // without an interactive terminal.
    let buffer = render_to_buffer(&data, &icons, width, height).context("render frame")?;
    for line in buffer_lines(&buffer) {
        println!("{line}");
    }
    Ok(())
}

fn parse_dim(arg: Option<String>, default: u16) -> Result<u16> {
    match arg {
        Some(raw) => raw
            .parse::<u16>()
            .with_context(|| format!("invalid dimension {raw:?}")),
        None => Ok(default),
    }
}
