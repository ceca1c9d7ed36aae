use egui::Pos2;

use crate::buffer::PixelBuffer;

/// The stroke protocol shared by every tool.
///
/// A tool is active between `on_activate` and `on_deactivate`; its per-stroke
/// state is only valid inside that window. Implementations must ignore
/// `on_move` while inactive and treat repeated `on_deactivate` as a no-op,
/// so the canvas can deactivate defensively when gestures end abnormally.
///
/// Tools borrow the pixel buffer only for the duration of each call; they
/// never hold on to it.
pub trait Tool: Send {
    /// Begins a stroke or action at an image-space position. May paint
    /// immediately (a click with no following move still leaves a mark).
    fn on_activate(&mut self, buffer: &mut PixelBuffer, pos: Pos2);

    /// Extends the active stroke from the last recorded point to `pos`.
    fn on_move(&mut self, buffer: &mut PixelBuffer, pos: Pos2);

    /// Ends the stroke and clears per-stroke state.
    fn on_deactivate(&mut self);

    /// Returns true while a stroke or action is in progress.
    fn is_active(&self) -> bool;
}
