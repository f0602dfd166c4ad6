//! Draws star patterns onto raster images and writes them out as JPEG files.
mod annotation;
mod font;

use annotation::annotation_lines;
pub use font::LabelFont;

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use star_coil::{core::math::Vector2, CircleLayout, StarPattern, StarPatternSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const INK: Rgb<u8> = Rgb([0, 0, 0]);

/// Left edge and top of the first annotation line.
const ANNOTATION_ORIGIN: (i32, i32) = (20, 20);
const ANNOTATION_LINE_HEIGHT: i32 = 10;

/// Errors that can occur while rendering and writing pattern images.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Encoding or writing the image failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Font file missing or unreadable, recovered from by using the built-in font.
    #[error("font {} unavailable: {reason}", path.display())]
    FontUnavailable { path: PathBuf, reason: String },
}

/// What to draw besides the star itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw the annotation text block in the top left corner.
    pub include_text: bool,
    /// Draw a line from the center to every point.
    pub include_lines: bool,
    /// Width and height of the square image in pixels.
    pub size: u32,
}

impl RenderOptions {
    pub const DEFAULT_SIZE: u32 = 800;
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_text: true,
            include_lines: false,
            size: Self::DEFAULT_SIZE,
        }
    }
}

pub struct Renderer {
    options: RenderOptions,
    font: LabelFont,
}

impl Renderer {
    pub fn new(options: RenderOptions, font: LabelFont) -> Self {
        Self { options, font }
    }

    /// Render `pattern` to a new image.
    pub fn render(&self, pattern: &StarPattern) -> RgbImage {
        let size = self.options.size;
        let mut img = RgbImage::from_pixel(size, size, BACKGROUND);
        let layout = CircleLayout::<f32>::for_image(pattern.point_count(), size);
        let center = to_pixel(layout.center());

        for (index, pos) in layout.positions() {
            if self.options.include_lines {
                draw_line_segment_mut(&mut img, center, to_pixel(pos), INK);
            }
            self.font
                .draw_text(&mut img, pos.x as i32, pos.y as i32, INK, &index.to_string());
            log::trace!("point {index} at ({:.1}, {:.1})", pos.x, pos.y);
        }

        match layout.path_points(pattern.path()) {
            Some(path) => {
                for seg in path.windows(2) {
                    draw_wide_line(&mut img, to_pixel(seg[0]), to_pixel(seg[1]));
                }
            }
            None => log::warn!(
                "star pattern {} has points outside 1..={}, edges not drawn",
                pattern.index(),
                pattern.point_count()
            ),
        }

        if self.options.include_text {
            self.draw_annotations(&mut img, pattern);
        }

        img
    }

    fn draw_annotations(&self, img: &mut RgbImage, pattern: &StarPattern) {
        let (x, mut y) = ANNOTATION_ORIGIN;
        let max_width = self.options.size.saturating_sub(2 * x as u32);
        let lines = annotation_lines(pattern, max_width, |s| self.font.text_width(s));
        for line in &lines {
            self.font.draw_text(img, x, y, INK, line);
            y += ANNOTATION_LINE_HEIGHT;
        }
    }

    /// Render `pattern` and save it as a JPEG named by [StarPattern::file_name] in `dir`.
    pub fn render_to_file(&self, pattern: &StarPattern, dir: &Path) -> Result<PathBuf, RenderError> {
        let path = dir.join(pattern.file_name());
        let img = self.render(pattern);
        img.save_with_format(&path, image::ImageFormat::Jpeg)
            .map_err(|source| RenderError::Write {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }
}

/// Render every pattern in `patterns` into `dir` in pattern order, returning the written paths.
///
/// Stops at the first write failure, files written before it are left in place.
pub fn render_all(
    renderer: &Renderer,
    patterns: &StarPatternSet,
    dir: &Path,
) -> Result<Vec<PathBuf>, RenderError> {
    let mut written = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        log::info!("Generating star graphics {}", pattern.index());
        let path = renderer.render_to_file(pattern, dir)?;
        log::info!("{}", path.display());
        written.push(path);
    }

    Ok(written)
}

#[inline]
fn to_pixel(v: Vector2<f32>) -> (f32, f32) {
    (v.x, v.y)
}

/// Draw a line 2 pixels wide by doubling it one pixel across its dominant direction.
fn draw_wide_line(img: &mut RgbImage, start: (f32, f32), end: (f32, f32)) {
    draw_line_segment_mut(img, start, end, INK);
    let (dx, dy) = ((end.0 - start.0).abs(), (end.1 - start.1).abs());
    let (ox, oy) = if dx >= dy { (0.0, 1.0) } else { (1.0, 0.0) };
    draw_line_segment_mut(
        img,
        (start.0 + ox, start.1 + oy),
        (end.0 + ox, end.1 + oy),
        INK,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use star_coil::PointCount;

    fn renderer(include_text: bool, include_lines: bool) -> Renderer {
        let options = RenderOptions {
            include_text,
            include_lines,
            size: 200,
        };
        Renderer::new(options, LabelFont::Builtin)
    }

    fn pentagram() -> StarPattern {
        StarPattern::new(2, PointCount::new(5).unwrap(), 2)
    }

    fn is_ink(img: &RgbImage, x: u32, y: u32) -> bool {
        *img.get_pixel(x, y) == INK
    }

    #[test]
    fn default_options() {
        let img = Renderer::new(RenderOptions::default(), LabelFont::Builtin).render(&pentagram());
        assert_eq!(img.dimensions(), (800, 800));
        // annotations on, center guide lines off
        assert!(!is_ink(&img, 400, 400));
        assert!((20..35)
            .flat_map(|y| (20..200).map(move |x| (x, y)))
            .any(|(x, y)| is_ink(&img, x, y)));
    }

    #[test]
    fn image_has_requested_size() {
        let img = renderer(true, false).render(&pentagram());
        assert_eq!(img.dimensions(), (200, 200));
    }

    #[test]
    fn center_lines_are_optional() {
        // pentagram edges never pass through the center, the guide lines do
        let without = renderer(false, false).render(&pentagram());
        assert!(!is_ink(&without, 100, 100));

        let with = renderer(false, true).render(&pentagram());
        assert!(is_ink(&with, 100, 100));
    }

    #[test]
    fn text_block_is_optional() {
        let without = renderer(false, false).render(&pentagram());
        let with = renderer(true, false).render(&pentagram());
        // first annotation line, above the top point and its edges
        let ink_in_corner = |img: &RgbImage| {
            (20..35)
                .flat_map(|y| (20..100).map(move |x| (x, y)))
                .any(|(x, y)| is_ink(img, x, y))
        };
        assert!(!ink_in_corner(&without));
        assert!(ink_in_corner(&with));
    }

    #[test]
    fn star_edges_are_drawn() {
        let img = renderer(false, false).render(&pentagram());
        // midpoint of the edge from point 1 (top) to point 3
        let layout = CircleLayout::<f32>::for_image(PointCount::new(5).unwrap(), 200);
        let p1 = layout.position(1).unwrap();
        let p3 = layout.position(3).unwrap();
        let (mx, my) = ((p1.x + p3.x) / 2.0, (p1.y + p3.y) / 2.0);
        let near = (-1..=1).any(|d: i32| {
            is_ink(&img, (mx.round() as i32 + d) as u32, my.round() as u32)
                || is_ink(&img, mx.round() as u32, (my.round() as i32 + d) as u32)
        });
        assert!(near);
    }

    #[test]
    fn writes_named_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let set = StarPatternSet::enumerate(PointCount::new(10).unwrap());
        let written = render_all(&renderer(true, true), &set, dir.path()).unwrap();
        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "P010-S002-T005-I002.jpg",
                "P010-S003-T010-I003.jpg",
                "P010-S004-T005-I004.jpg",
            ]
        );

        let decoded = image::open(&written[1]).unwrap();
        assert_eq!(decoded.width(), 200);
        assert_eq!(decoded.height(), 200);
    }

    #[test]
    fn write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = renderer(false, false)
            .render_to_file(&pentagram(), &missing)
            .unwrap_err();
        assert!(matches!(err, RenderError::Write { .. }));
    }

    #[test]
    fn render_all_stops_at_first_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        // a directory in place of the second image makes its write fail
        let blocked = dir.path().join("P010-S003-T010-I003.jpg");
        std::fs::create_dir(&blocked).unwrap();

        let set = StarPatternSet::enumerate(PointCount::new(10).unwrap());
        let err = render_all(&renderer(false, false), &set, dir.path()).unwrap_err();
        match err {
            RenderError::Write { path, .. } => assert_eq!(path, blocked),
            other => panic!("unexpected error: {other}"),
        }

        assert!(dir.path().join("P010-S002-T005-I002.jpg").is_file());
        assert!(blocked.is_dir());
        assert!(!dir.path().join("P010-S004-T005-I004.jpg").exists());
    }
}
