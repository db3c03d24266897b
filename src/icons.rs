use std::collections::BTreeMap;

/// Glyph-by-name lookup supplied by whoever owns the icon assets.
pub trait IconResolver {
    fn resolve(&self, glyph_name: &str) -> Option<&str>;
}

/// Table-backed resolver. Starts empty; callers fill it from their own assets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: BTreeMap<String, String>,
}

impl GlyphTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_glyph(mut self, name: impl Into<String>, glyph: impl Into<String>) -> Self {
        self.glyphs.insert(name.into(), glyph.into());
        self
    }
}

impl From<&BTreeMap<String, String>> for GlyphTable {
    fn from(glyphs: &BTreeMap<String, String>) -> Self {
        Self {
            glyphs: glyphs.clone(),
        }
    }
}

impl IconResolver for GlyphTable {
    fn resolve(&self, glyph_name: &str) -> Option<&str> {
        self.glyphs.get(glyph_name).map(String::as_str)
    }
}

/// Resolves `name` and appends a separating space, or yields nothing.
pub fn glyph_prefix(icons: &dyn IconResolver, name: &str) -> String {
    icons
        .resolve(name)
        .map(|glyph| format!("{glyph} "))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_glyph_yields_empty_prefix() {
        let table = GlyphTable::new().with_glyph("at", "@");
        assert_eq!(glyph_prefix(&table, "at"), "@ ");
        assert_eq!(glyph_prefix(&table, "football-ball"), "");
    }
}
