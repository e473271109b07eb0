//! Typeface JSON descriptor (the facetype.js format). Only the metrics are
//! used: the family name for the label font stack and glyph advances for
//! estimating label widths before layout.

use fnv::FnvHashMap;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("invalid typeface descriptor: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Deserialize)]
pub struct Glyph {
    /// Horizontal advance in font units.
    pub ha: f32,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypefaceFont {
    pub family_name: String,
    pub resolution: f32,
    #[serde(default)]
    pub ascender: f32,
    #[serde(default)]
    pub descender: f32,
    #[serde(default)]
    pub glyphs: FnvHashMap<String, Glyph>,
}

impl TypefaceFont {
    pub fn parse(json: &str) -> Result<Self, FontError> {
        let font: TypefaceFont = serde_json::from_str(json)?;
        log::debug!(
            "[loader] font {} with {} glyphs",
            font.family_name,
            font.glyphs.len()
        );
        Ok(font)
    }

    /// CSS `font-family` value that prefers this face.
    pub fn font_stack(&self) -> String {
        format!("'{}', Helvetica, Arial, sans-serif", self.family_name)
    }

    /// Width of `text` at `size` px; unknown characters advance by half an em.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        if self.resolution <= 0.0 {
            return 0.0;
        }
        let scale = size / self.resolution;
        let mut buf = [0u8; 4];
        text.chars()
            .map(|ch| {
                self.glyphs
                    .get(ch.encode_utf8(&mut buf) as &str)
                    .map(|g| g.ha)
                    .unwrap_or(self.resolution * 0.5)
            })
            .sum::<f32>()
            * scale
    }
}
