use crate::error::Error;

/// Scaled size and top-left offset used to draw a source image onto the canvas.
///
/// Exactly one canvas axis is filled by the scaled image; the other axis is
/// centered with equal slack on both sides. For a source whose aspect ratio
/// matches the canvas both axes are filled and every offset is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub width: f32,
    pub height: f32,
    pub start_x: f32,
    pub start_y: f32,
}

/// Computes where a source image lands inside a fixed-size canvas while
/// keeping its aspect ratio.
///
/// Portrait sources (aspect ratio below 1) fill the canvas height and center
/// horizontally. Landscape and square sources fill the canvas width and
/// center vertically. Square sources deliberately share the landscape branch:
/// on a non-square canvas they fit the width, not the height, and downstream
/// output depends on that choice.
///
/// The function is total. A zero source height yields an infinite aspect
/// ratio, which takes the landscape branch and places a zero-height image
/// centered vertically. Callers that want rejection instead use
/// [`checked_fit`].
pub fn compute_fit(canvas_w: f32, canvas_h: f32, image_w: f32, image_h: f32) -> Placement {
    let aspect_ratio = image_w / image_h;

    if aspect_ratio < 1.0 {
        // Taller than wide: height is the max possible given the canvas,
        // width follows proportionally and is centered.
        let height = canvas_h;
        let width = canvas_h * aspect_ratio;
        Placement {
            width,
            height,
            start_x: (canvas_w - width) / 2.0,
            start_y: 0.0,
        }
    } else {
        let width = canvas_w;
        let height = canvas_w / aspect_ratio;
        Placement {
            width,
            height,
            start_x: 0.0,
            start_y: (canvas_h - height) / 2.0,
        }
    }
}

/// Validating front for [`compute_fit`]: every dimension must be finite and
/// strictly positive. Results for accepted inputs are identical to the
/// unchecked function.
pub fn checked_fit(
    canvas_w: f32,
    canvas_h: f32,
    image_w: f32,
    image_h: f32,
) -> Result<Placement, Error> {
    for (name, value) in [
        ("canvas width", canvas_w),
        ("canvas height", canvas_h),
        ("image width", image_w),
        ("image height", image_h),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::InvalidDimension(format!("{name} must be a positive finite number, got {value}")));
        }
    }
    Ok(compute_fit(canvas_w, canvas_h, image_w, image_h))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: &[f32] = &[1.0, 37.0, 100.0, 255.0, 400.0, 1080.0, 1920.0, 4032.0];

    #[test]
    fn aspect_ratio_is_preserved() {
        for &iw in SIZES {
            for &ih in SIZES {
                let p = compute_fit(400.0, 300.0, iw, ih);
                let src = iw / ih;
                let out = p.width / p.height;
                assert!(
                    (src - out).abs() / src < 1e-5,
                    "aspect changed for {iw}x{ih}: {src} vs {out}"
                );
            }
        }
    }

    #[test]
    fn slack_axis_is_centered() {
        for &iw in SIZES {
            for &ih in SIZES {
                let p = compute_fit(640.0, 480.0, iw, ih);
                if iw / ih < 1.0 {
                    assert_eq!(p.height, 480.0);
                    assert_eq!(p.start_y, 0.0);
                    assert!((2.0 * p.start_x + p.width - 640.0).abs() < 1e-3);
                } else {
                    assert_eq!(p.width, 640.0);
                    assert_eq!(p.start_x, 0.0);
                    assert!((2.0 * p.start_y + p.height - 480.0).abs() < 1e-3);
                }
            }
        }
    }

    #[test]
    fn repeated_calls_agree() {
        let a = compute_fit(400.0, 300.0, 800.0, 400.0);
        let b = compute_fit(400.0, 300.0, 800.0, 400.0);
        assert_eq!(a, b);
    }

    #[test]
    fn checked_fit_matches_unchecked_on_valid_input() {
        let unchecked = compute_fit(400.0, 400.0, 100.0, 200.0);
        let checked = checked_fit(400.0, 400.0, 100.0, 200.0).unwrap();
        assert_eq!(unchecked, checked);
    }

    #[test]
    fn checked_fit_rejects_bad_dimensions() {
        assert!(checked_fit(400.0, 400.0, 100.0, 0.0).is_err());
        assert!(checked_fit(400.0, 400.0, -5.0, 100.0).is_err());
        assert!(checked_fit(0.0, 400.0, 100.0, 100.0).is_err());
        assert!(checked_fit(400.0, f32::NAN, 100.0, 100.0).is_err());
        assert!(checked_fit(400.0, 400.0, f32::INFINITY, 100.0).is_err());
    }
}
