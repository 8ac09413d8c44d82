use ab_glyph::{point, Font, FontArc, FontVec, Glyph, GlyphId, PxScale, ScaleFont};
use fontdb::{Database, Family, Query};
use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::config::Configuration;
use crate::error::Error;

/// Which canvas edge a caption hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Top,
    Bottom,
}

/// Resolves a caption font from the system database. A requested family that
/// cannot be found falls back to sans-serif, then serif; an empty database is
/// an error.
pub fn load_font(family: Option<&str>) -> Result<FontArc, Error> {
    let mut db = Database::new();
    db.load_system_fonts();

    if let Some(name) = family {
        if let Some(font) = query_font(&db, Family::Name(name)) {
            return Ok(font);
        }
        debug!(family = name, "requested font family not found, falling back");
    }

    query_font(&db, Family::SansSerif)
        .or_else(|| query_font(&db, Family::Serif))
        .ok_or_else(|| Error::Font("no usable system font found".into()))
}

fn query_font(db: &Database, family: Family<'_>) -> Option<FontArc> {
    let query = Query {
        families: &[family],
        ..Default::default()
    };
    let id = db.query(&query)?;
    db.with_face_data(id, |data, index| {
        FontVec::try_from_vec_and_index(data.to_vec(), index)
            .ok()
            .map(FontArc::new)
    })
    .flatten()
}

/// Advance width of a single line at the given scale, kerning included.
pub fn line_width(font: &FontArc, scale: PxScale, text: &str) -> f32 {
    let scaled = font.as_scaled(scale);
    let mut width = 0.0;
    let mut last: Option<GlyphId> = None;
    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(prev) = last {
            width += scaled.kern(prev, id);
        }
        width += scaled.h_advance(id);
        last = Some(id);
    }
    width
}

/// Draws one caption line onto the canvas, horizontally centered.
///
/// Top captions sit `caption-margin-px` below the top edge; bottom captions
/// sit the same margin above the bottom edge. Text wider than the canvas is
/// drawn anyway and clipped at the canvas bounds.
pub fn draw_caption(
    canvas: &mut RgbaImage,
    font: &FontArc,
    cfg: &Configuration,
    text: &str,
    anchor: Anchor,
) {
    if text.is_empty() {
        return;
    }

    let scale = PxScale::from(cfg.font_size_px);
    let scaled = font.as_scaled(scale);
    let margin = cfg.caption_margin_px as f32;
    let start_x = (canvas.width() as f32 - line_width(font, scale, text)) / 2.0;
    // ascent reaches up from the baseline, descent below it (negative).
    let baseline_y = match anchor {
        Anchor::Top => margin + scaled.ascent(),
        Anchor::Bottom => canvas.height() as f32 - margin + scaled.descent(),
    };

    let mut caret = point(start_x, baseline_y);
    let mut last: Option<GlyphId> = None;
    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(prev) = last {
            caret.x += scaled.kern(prev, id);
        }
        let glyph: Glyph = id.with_scale_and_position(scale, caret);
        caret.x += scaled.h_advance(id);
        last = Some(id);

        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        outlined.draw(|gx, gy, coverage| {
            let x = bounds.min.x as i32 + gx as i32;
            let y = bounds.min.y as i32 + gy as i32;
            if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
                return;
            }
            blend(canvas.get_pixel_mut(x as u32, y as u32), cfg.text_color, coverage);
        });
    }
}

fn blend(px: &mut Rgba<u8>, color: [u8; 3], coverage: f32) {
    let a = coverage.clamp(0.0, 1.0);
    for i in 0..3 {
        let src = color[i] as f32;
        let dst = px[i] as f32;
        px[i] = (src * a + dst * (1.0 - a)).round() as u8;
    }
    // the canvas stays opaque
    px[3] = 255;
}
