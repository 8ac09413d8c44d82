use fast_image_resize as fir;
use image::{imageops, Rgba, RgbaImage};
use tracing::debug;

use crate::caption::{self, Anchor};
use crate::config::Configuration;
use crate::error::Error;
use crate::layout::{compute_fit, Placement};

/// Top and bottom caption text. Empty strings draw nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captions {
    pub top: String,
    pub bottom: String,
}

impl Captions {
    pub fn new(top: impl Into<String>, bottom: impl Into<String>) -> Self {
        Self {
            top: top.into(),
            bottom: bottom.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.bottom.is_empty()
    }
}

/// Fills the canvas with the background color and overlays the source image
/// at its computed placement. Caption text is not drawn here.
pub fn render_base(source: &RgbaImage, cfg: &Configuration) -> Result<RgbaImage, Error> {
    let [r, g, b] = cfg.background_color;
    let mut canvas = RgbaImage::from_pixel(cfg.canvas_width, cfg.canvas_height, Rgba([r, g, b, 255]));

    let placement = compute_fit(
        cfg.canvas_width as f32,
        cfg.canvas_height as f32,
        source.width() as f32,
        source.height() as f32,
    );
    debug!(
        width = placement.width,
        height = placement.height,
        start_x = placement.start_x,
        start_y = placement.start_y,
        "computed placement"
    );

    let (dest_w, dest_h) = placement_pixels(&placement);
    if dest_w == 0 || dest_h == 0 || source.width() == 0 || source.height() == 0 {
        // Degenerate source: nothing to overlay, the bare canvas stands.
        return Ok(canvas);
    }

    let resized = resize_rgba(source, dest_w, dest_h)?;
    imageops::overlay(
        &mut canvas,
        &resized,
        placement.start_x.round() as i64,
        placement.start_y.round() as i64,
    );
    Ok(canvas)
}

/// Full meme render: base composition plus both captions. The font is only
/// resolved when at least one caption is non-empty.
pub fn render_meme(
    source: &RgbaImage,
    cfg: &Configuration,
    captions: &Captions,
) -> Result<RgbaImage, Error> {
    let mut canvas = render_base(source, cfg)?;
    if captions.is_empty() {
        return Ok(canvas);
    }
    let font = caption::load_font(cfg.font_family.as_deref())?;
    caption::draw_caption(&mut canvas, &font, cfg, &captions.top, Anchor::Top);
    caption::draw_caption(&mut canvas, &font, cfg, &captions.bottom, Anchor::Bottom);
    Ok(canvas)
}

/// Rounds a placement to whole pixels. Positive fractional dimensions never
/// round below one pixel; zero and non-finite dimensions map to zero so the
/// caller can skip the overlay.
fn placement_pixels(placement: &Placement) -> (u32, u32) {
    let round = |v: f32| {
        if v > 0.0 && v.is_finite() {
            v.round().max(1.0) as u32
        } else {
            0
        }
    };
    (round(placement.width), round(placement.height))
}

fn resize_rgba(source: &RgbaImage, target_w: u32, target_h: u32) -> Result<RgbaImage, Error> {
    if source.width() == target_w && source.height() == target_h {
        return Ok(source.clone());
    }

    let src_view = fir::images::ImageRef::new(
        source.width(),
        source.height(),
        source.as_raw(),
        fir::PixelType::U8x4,
    )
    .map_err(|err| Error::Resize(format!("bad source view: {err}")))?;
    let mut dst_image = fir::images::Image::new(target_w, target_h, fir::PixelType::U8x4);
    let options = fir::ResizeOptions::new()
        .resize_alg(fir::ResizeAlg::Convolution(fir::FilterType::CatmullRom));
    let mut resizer = fir::Resizer::new();
    resizer
        .resize(&src_view, &mut dst_image, Some(&options))
        .map_err(|err| Error::Resize(err.to_string()))?;
    RgbaImage::from_raw(target_w, target_h, dst_image.into_vec())
        .ok_or_else(|| Error::Resize("failed to construct resized RGBA image".into()))
}
