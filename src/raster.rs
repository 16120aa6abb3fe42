//! PNG Rasterizer - Offline rendering of segment lists
//!
//! Fits the segment bounding box into the image with a uniform scale and
//! a margin, then plots each segment by stepping one pixel along its
//! longer axis.

use image::{Rgba, RgbaImage};

use crate::vector::Vec2;
use crate::walk::Segment;

const MARGIN: u32 = 16;
const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
const FOREGROUND: Rgba<u8> = Rgba([230, 230, 230, 255]);

/// Render segments into a width x height RGBA image
pub fn render_png(segments: &[Segment], width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, BACKGROUND);
    if segments.is_empty() {
        return img;
    }

    let (min, max) = bounds(segments);
    let span_x = max.x - min.x;
    let span_y = max.y - min.y;

    let usable_w = width.saturating_sub(2 * MARGIN).max(1) as f64;
    let usable_h = height.saturating_sub(2 * MARGIN).max(1) as f64;

    let scale_x = if span_x > 0.0 { usable_w / span_x } else { f64::INFINITY };
    let scale_y = if span_y > 0.0 { usable_h / span_y } else { f64::INFINITY };
    let mut scale = scale_x.min(scale_y);
    if !scale.is_finite() {
        scale = 1.0; // all endpoints coincide
    }

    // Center the scaled bounding box
    let offset_x = MARGIN as f64 + (usable_w - span_x * scale) / 2.0;
    let offset_y = MARGIN as f64 + (usable_h - span_y * scale) / 2.0;
    let to_pixel = |p: Vec2| -> (f64, f64) {
        (
            (p.x - min.x) * scale + offset_x,
            (p.y - min.y) * scale + offset_y,
        )
    };

    for segment in segments {
        draw_line(&mut img, to_pixel(segment.from), to_pixel(segment.to));
    }

    img
}

/// Bounding box over all segment endpoints
fn bounds(segments: &[Segment]) -> (Vec2, Vec2) {
    let mut min = Vec2::new(f64::INFINITY, f64::INFINITY);
    let mut max = Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);

    for segment in segments {
        for p in [segment.from, segment.to] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
    }

    (min, max)
}

fn draw_line(img: &mut RgbaImage, from: (f64, f64), to: (f64, f64)) {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;

    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = (from.0 + dx * t).round();
        let y = (from.1 + dy * t).round();
        if x >= 0.0 && y >= 0.0 && (x as u32) < img.width() && (y as u32) < img.height() {
            img.put_pixel(x as u32, y as u32, FOREGROUND);
        }
    }
}
