//! Pixel rasterization shared by the stroke tools.
//!
//! Everything here paints hard-edged, non-antialiased pixels so that stroke
//! output matches the flat-color semantics of the flood fill. Integer image
//! coordinates name pixel centers.

use egui::{Color32, Pos2};

use crate::buffer::PixelBuffer;

/// Paints a filled circular dab of the given diameter centered at `center`.
///
/// This is what a single click with a stroke tool leaves behind.
pub fn stamp_dab(buffer: &mut PixelBuffer, center: Pos2, diameter: f32, color: Color32) {
    paint_disc(buffer, center, radius_for(diameter), color);
}

/// Paints a solid segment of the given width from `from` to `to` with round
/// caps, by stamping overlapping discs along the segment.
///
/// Consecutive segments sharing an endpoint get a round join for free, since
/// both stamp a disc at the shared point.
pub fn stroke_segment(buffer: &mut PixelBuffer, from: Pos2, to: Pos2, width: f32, color: Color32) {
    let radius = radius_for(width);
    let length = from.distance(to);
    if length == 0.0 {
        paint_disc(buffer, from, radius, color);
        return;
    }

    // Step at most half a radius so the discs overlap into a solid line.
    let spacing = (radius * 0.5).max(0.25);
    let steps = (length / spacing).ceil() as u32;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        paint_disc(buffer, from.lerp(to, t), radius, color);
    }
}

/// Radius of the disc stamped for a tool of the given size.
///
/// Sizes below one pixel still paint a single pixel.
fn radius_for(size: f32) -> f32 {
    (size * 0.5).max(0.5)
}

fn paint_disc(buffer: &mut PixelBuffer, center: Pos2, radius: f32, color: Color32) {
    let min_x = (center.x - radius).floor() as i32;
    let max_x = (center.x + radius).ceil() as i32;
    let min_y = (center.y - radius).floor() as i32;
    let max_y = (center.y + radius).ceil() as i32;
    let r_sq = radius * radius;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = x as f32 - center.x;
            let dy = y as f32 - center.y;
            if dx * dx + dy * dy <= r_sq {
                buffer.set(x, y, color);
            }
        }
    }
}
