use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use super::super::trait_def::Tool;
use crate::buffer::PixelBuffer;
use crate::raster;

/// State for the brush tool's current stroke
#[derive(Debug, Clone)]
struct StrokeState {
    last_position: Pos2,
}

/// The brush tool for freehand drawing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrushTool {
    /// Current brush color
    pub color: Color32,
    /// Stroke width in pixels
    pub size: f32,
    /// Current stroke state
    #[serde(skip)]
    current_stroke: Option<StrokeState>,
}

impl Default for BrushTool {
    fn default() -> Self {
        Self::new(Color32::BLACK, 2.0)
    }
}

impl BrushTool {
    pub fn new(color: Color32, size: f32) -> Self {
        Self {
            color,
            size,
            current_stroke: None,
        }
    }
}

impl Tool for BrushTool {
    fn on_activate(&mut self, buffer: &mut PixelBuffer, pos: Pos2) {
        // Paint a dab right away so a click with no movement leaves a mark
        raster::stamp_dab(buffer, pos, self.size, self.color);
        self.current_stroke = Some(StrokeState { last_position: pos });
    }

    fn on_move(&mut self, buffer: &mut PixelBuffer, pos: Pos2) {
        let Some(stroke) = &mut self.current_stroke else {
            return;
        };
        raster::stroke_segment(buffer, stroke.last_position, pos, self.size, self.color);
        stroke.last_position = pos;
    }

    fn on_deactivate(&mut self) {
        self.current_stroke = None;
    }

    fn is_active(&self) -> bool {
        self.current_stroke.is_some()
    }
}

impl PartialEq for BrushTool {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color && self.size == other.size
        // Intentionally skip comparing current_stroke as it's transient
    }
}
