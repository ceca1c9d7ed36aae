pub mod trait_def;
pub mod types;

pub use trait_def::Tool;
pub use types::{BrushTool, EraserTool, FillTool, ToolType};
