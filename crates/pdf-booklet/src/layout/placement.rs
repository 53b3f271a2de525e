//! Content placement within a sheet half
//!
//! Maps a source page box onto the half it is drawn into:
//! - Display rotation from the page's `/Rotate`
//! - Scaling according to the [`ScalingMode`]
//! - Centering when the aspect ratio is preserved

use crate::types::ScalingMode;

use super::{PagePlacement, PageRotation, Rect};

/// Calculate where a source page box lands inside `region`.
///
/// The page is scaled as it is displayed, so a page rotated by a quarter
/// turn is fitted with its width and height exchanged.
///
/// # Arguments
/// * `source_box` - The source page's MediaBox (may have a non-zero origin)
/// * `rotation` - The source page's display rotation
/// * `region` - The sheet half the page is drawn into
/// * `scaling_mode` - How to scale the source page
pub fn place_page(
    source_box: &Rect,
    rotation: PageRotation,
    region: &Rect,
    scaling_mode: ScalingMode,
) -> PagePlacement {
    let Rect {
        x: bx,
        y: by,
        width: bw,
        height: bh,
    } = *source_box;
    let (shown_width, shown_height) = if rotation.swaps_axes() {
        (bh, bw)
    } else {
        (bw, bh)
    };

    let (sx, sy) = calculate_scale(
        shown_width,
        shown_height,
        region.width,
        region.height,
        scaling_mode,
    );

    // Center the scaled box; for Stretch this is exactly the region origin
    let x = region.x + (region.width - shown_width * sx) / 2.0;
    let y = region.y + (region.height - shown_height * sy) / 2.0;

    let matrix = match rotation {
        PageRotation::Upright => [sx, 0.0, 0.0, sy, x - sx * bx, y - sy * by],
        PageRotation::Clockwise90 => [0.0, -sy, sx, 0.0, x - sx * by, y + sy * (bx + bw)],
        PageRotation::Clockwise180 => [-sx, 0.0, 0.0, -sy, x + sx * (bx + bw), y + sy * (by + bh)],
        PageRotation::Clockwise270 => [0.0, sy, -sx, 0.0, x + sx * (by + bh), y - sy * bx],
    };

    PagePlacement {
        matrix,
        clip: *region,
    }
}

/// Calculate (x, y) scale factors for fitting source to target dimensions.
fn calculate_scale(
    src_width: f32,
    src_height: f32,
    target_width: f32,
    target_height: f32,
    mode: ScalingMode,
) -> (f32, f32) {
    if src_width <= 0.0 || src_height <= 0.0 {
        return (1.0, 1.0);
    }

    let scale_w = target_width / src_width;
    let scale_h = target_height / src_height;

    match mode {
        ScalingMode::Stretch => (scale_w, scale_h),
        ScalingMode::Fit => {
            let scale = scale_w.min(scale_h);
            (scale, scale)
        }
        ScalingMode::Fill => {
            let scale = scale_w.max(scale_h);
            (scale, scale)
        }
        ScalingMode::None => (1.0, 1.0),
    }
}
