pub mod brush;
pub mod eraser;
pub mod fill;

pub use brush::BrushTool;
pub use eraser::EraserTool;
pub use fill::FillTool;

use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use super::trait_def::Tool;
use crate::buffer::PixelBuffer;

/// The set of tools a canvas can hold, dispatching the [`Tool`] protocol by
/// variant. Exactly one instance is bound to a canvas at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolType {
    Brush(BrushTool),
    Eraser(EraserTool),
    Fill(FillTool),
}

impl Default for ToolType {
    fn default() -> Self {
        Self::Brush(BrushTool::default())
    }
}

impl ToolType {
    /// Display name of the tool variant.
    pub fn name(&self) -> &'static str {
        match self {
            ToolType::Brush(_) => "Brush",
            ToolType::Eraser(_) => "Eraser",
            ToolType::Fill(_) => "Fill",
        }
    }

    /// Sets the color on tools that have one; the eraser ignores it.
    pub fn set_color(&mut self, color: Color32) {
        match self {
            ToolType::Brush(brush) => brush.color = color,
            ToolType::Eraser(_) => {}
            ToolType::Fill(fill) => fill.color = color,
        }
    }

    /// Sets the stroke size on tools that have one; the fill ignores it.
    pub fn set_size(&mut self, size: f32) {
        match self {
            ToolType::Brush(brush) => brush.size = size,
            ToolType::Eraser(eraser) => eraser.size = size,
            ToolType::Fill(_) => {}
        }
    }
}

impl Tool for ToolType {
    fn on_activate(&mut self, buffer: &mut PixelBuffer, pos: Pos2) {
        match self {
            ToolType::Brush(tool) => tool.on_activate(buffer, pos),
            ToolType::Eraser(tool) => tool.on_activate(buffer, pos),
            ToolType::Fill(tool) => tool.on_activate(buffer, pos),
        }
    }

    fn on_move(&mut self, buffer: &mut PixelBuffer, pos: Pos2) {
        match self {
            ToolType::Brush(tool) => tool.on_move(buffer, pos),
            ToolType::Eraser(tool) => tool.on_move(buffer, pos),
            ToolType::Fill(tool) => tool.on_move(buffer, pos),
        }
    }

    fn on_deactivate(&mut self) {
        match self {
            ToolType::Brush(tool) => tool.on_deactivate(),
            ToolType::Eraser(tool) => tool.on_deactivate(),
            ToolType::Fill(tool) => tool.on_deactivate(),
        }
    }

    fn is_active(&self) -> bool {
        match self {
            ToolType::Brush(tool) => tool.is_active(),
            ToolType::Eraser(tool) => tool.is_active(),
            ToolType::Fill(tool) => tool.is_active(),
        }
    }
}
