use egui::Pos2;
use serde::{Deserialize, Serialize};

use super::super::trait_def::Tool;
use crate::buffer::{BACKGROUND, PixelBuffer};
use crate::raster;

/// State for the eraser tool's current stroke
#[derive(Debug, Clone)]
struct StrokeState {
    last_position: Pos2,
}

/// The eraser tool: the brush stroke algorithm with the color pinned to the
/// canvas background, whatever color is configured elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EraserTool {
    /// Stroke width in pixels, independent of the brush size
    pub size: f32,
    /// Current stroke state
    #[serde(skip)]
    current_stroke: Option<StrokeState>,
}

impl Default for EraserTool {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl EraserTool {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            current_stroke: None,
        }
    }
}

impl Tool for EraserTool {
    fn on_activate(&mut self, buffer: &mut PixelBuffer, pos: Pos2) {
        raster::stamp_dab(buffer, pos, self.size, BACKGROUND);
        self.current_stroke = Some(StrokeState { last_position: pos });
    }

    fn on_move(&mut self, buffer: &mut PixelBuffer, pos: Pos2) {
        let Some(stroke) = &mut self.current_stroke else {
            return;
        };
        raster::stroke_segment(
            buffer,
            stroke.last_position,
            pos,
            self.size,
            BACKGROUND,
        );
        stroke.last_position = pos;
    }

    fn on_deactivate(&mut self) {
        self.current_stroke = None;
    }

    fn is_active(&self) -> bool {
        self.current_stroke.is_some()
    }
}

impl PartialEq for EraserTool {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
    }
}
