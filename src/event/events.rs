use egui::Vec2;

/// Notifications the canvas emits for the UI collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// Pixel contents changed; a repaint is needed
    Changed,
    /// Undo or redo availability flipped; controls should update
    HistoryChanged { can_undo: bool, can_redo: bool },
    /// The view transform changed (pan or zoom)
    ViewChanged { zoom: f32, pan: Vec2 },
    /// A new image replaced the buffer (new, loaded, or resized)
    ImageReplaced { width: u32, height: u32 },
    /// The image was written to disk
    ImageSaved,
}
