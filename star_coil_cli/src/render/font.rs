use super::RenderError;
use ab_glyph::{FontVec, PxScale};
use font8x8::UnicodeFonts;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::path::Path;

/// Width and height of a built-in glyph in pixels.
const BUILTIN_GLYPH_SIZE: u32 = 8;

/// Font used for point labels and annotations.
pub enum LabelFont {
    /// Font loaded from a TrueType/OpenType file (or the first face of a collection).
    TrueType { font: FontVec, scale: PxScale },
    /// Built-in 8x8 bitmap font, used when no font file could be loaded.
    Builtin,
}

impl LabelFont {
    /// Load the font at `path`, falling back to [LabelFont::Builtin] with a warning if it is
    /// missing or unreadable.
    pub fn load(path: &Path, size: f32) -> Self {
        match Self::try_load(path, size) {
            Ok(font) => font,
            Err(e) => {
                log::warn!("{e}, using built-in font");
                LabelFont::Builtin
            }
        }
    }

    pub fn try_load(path: &Path, size: f32) -> Result<Self, RenderError> {
        let unavailable = |reason: String| RenderError::FontUnavailable {
            path: path.to_path_buf(),
            reason,
        };

        let data = std::fs::read(path).map_err(|e| unavailable(e.to_string()))?;
        // index 0 works for single fonts as well as collections (.ttc)
        let font =
            FontVec::try_from_vec_and_index(data, 0).map_err(|e| unavailable(e.to_string()))?;
        log::debug!("loaded font {}", path.display());
        Ok(LabelFont::TrueType {
            font,
            scale: PxScale::from(size),
        })
    }

    /// Draw `text` with its top left corner at (`x`, `y`). Parts outside the image are clipped.
    pub fn draw_text(&self, img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, text: &str) {
        match self {
            LabelFont::TrueType { font, scale } => {
                draw_text_mut(img, color, x, y, *scale, font, text);
            }
            LabelFont::Builtin => draw_builtin_text(img, x, y, color, text),
        }
    }

    /// Width in pixels `text` takes up when drawn.
    pub fn text_width(&self, text: &str) -> u32 {
        match self {
            LabelFont::TrueType { font, scale } => text_size(*scale, font, text).0,
            LabelFont::Builtin => text.chars().count() as u32 * BUILTIN_GLYPH_SIZE,
        }
    }
}

fn draw_builtin_text(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, text: &str) {
    let (width, height) = (img.width() as i64, img.height() as i64);
    for (n, c) in text.chars().enumerate() {
        // unknown characters still advance the cursor
        let Some(glyph) = font8x8::BASIC_FONTS.get(c) else {
            continue;
        };

        let left = x as i64 + n as i64 * BUILTIN_GLYPH_SIZE as i64;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..BUILTIN_GLYPH_SIZE {
                if bits & (1u8 << col) == 0 {
                    continue;
                }
                let px = left + col as i64;
                let py = y as i64 + row as i64;
                if px >= 0 && px < width && py >= 0 && py < height {
                    img.put_pixel(px as u32, py as u32, color);
                }
            }
        }
    }
}
