use std::collections::VecDeque;

use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use super::super::trait_def::Tool;
use crate::buffer::PixelBuffer;

/// The flood fill tool: recolors the 4-connected region of uniform color
/// around the activation point.
///
/// A single-shot action: everything happens in `on_activate`, and `on_move`
/// is always a no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillTool {
    /// Color the region is filled with
    pub color: Color32,
    /// Whether an activation is in progress
    #[serde(skip)]
    active: bool,
}

impl Default for FillTool {
    fn default() -> Self {
        Self::new(Color32::BLACK)
    }
}

impl FillTool {
    pub fn new(color: Color32) -> Self {
        Self {
            color,
            active: false,
        }
    }
}

impl Tool for FillTool {
    fn on_activate(&mut self, buffer: &mut PixelBuffer, pos: Pos2) {
        if self.active {
            return;
        }
        self.active = true;

        let x = pos.x.round() as i32;
        let y = pos.y.round() as i32;
        if !buffer.in_bounds(x, y) {
            self.active = false;
            return;
        }
        let Some(target) = buffer.get(x, y) else {
            return;
        };
        if target == self.color {
            // Filling a region with its own color changes nothing
            self.active = false;
            return;
        }
        flood_fill(buffer, x as usize, y as usize, target, self.color);
    }

    fn on_move(&mut self, _buffer: &mut PixelBuffer, _pos: Pos2) {}

    fn on_deactivate(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl PartialEq for FillTool {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
    }
}

/// Breadth-first 4-connected flood fill on the packed pixel storage.
///
/// Works directly on the raw byte view with flat indices rather than the
/// checked accessors; the seed is bounds-checked by the caller and neighbor
/// coordinates are checked against the edges before indexing. Pixels are
/// painted *before* being enqueued: a painted pixel no longer matches
/// `target`, so no visited set is needed and no pixel is enqueued twice.
/// Requires `target != fill`.
fn flood_fill(buffer: &mut PixelBuffer, seed_x: usize, seed_y: usize, target: Color32, fill: Color32) {
    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    let stride = buffer.stride();
    let target = target.to_array();
    let fill = fill.to_array();
    let data = buffer.as_raw_mut();

    #[inline(always)]
    fn pixel_at(data: &[u8], offset: usize) -> [u8; 4] {
        [data[offset], data[offset + 1], data[offset + 2], data[offset + 3]]
    }

    let seed_offset = seed_y * stride + seed_x * 4;
    data[seed_offset..seed_offset + 4].copy_from_slice(&fill);

    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    queue.push_back((seed_x, seed_y));

    while let Some((x, y)) = queue.pop_front() {
        // Left
        if x > 0 {
            let offset = y * stride + (x - 1) * 4;
            if pixel_at(data, offset) == target {
                data[offset..offset + 4].copy_from_slice(&fill);
                queue.push_back((x - 1, y));
            }
        }
        // Right
        if x + 1 < width {
            let offset = y * stride + (x + 1) * 4;
            if pixel_at(data, offset) == target {
                data[offset..offset + 4].copy_from_slice(&fill);
                queue.push_back((x + 1, y));
            }
        }
        // Up
        if y > 0 {
            let offset = (y - 1) * stride + x * 4;
            if pixel_at(data, offset) == target {
                data[offset..offset + 4].copy_from_slice(&fill);
                queue.push_back((x, y - 1));
            }
        }
        // Down
        if y + 1 < height {
            let offset = (y + 1) * stride + x * 4;
            if pixel_at(data, offset) == target {
                data[offset..offset + 4].copy_from_slice(&fill);
                queue.push_back((x, y + 1));
            }
        }
    }
}
