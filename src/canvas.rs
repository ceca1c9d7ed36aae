//! The canvas orchestrator: the one component the UI collaborator talks to.
//!
//! `Canvas` owns the pixel buffer, the view transform, the undo/redo history
//! and the active tool, and routes pointer input between them. Drawing and
//! panning are mutually exclusive gestures; a tool can only be activated from
//! the idle state, and a pan cannot start mid-stroke.
//!
//! Every operation that is about to mutate pixels records a whole-buffer
//! snapshot first, so undo always restores the exact pre-operation state.

use std::path::{Path, PathBuf};

use egui::{Color32, PointerButton, Pos2};

use crate::buffer::{BACKGROUND, PixelBuffer};
use crate::error::{PaintError, PaintResult};
use crate::event::{CanvasEvent, EventBus, EventHandler};
use crate::file_handler;
use crate::history::HistoryManager;
use crate::input::InputEvent;
use crate::tool::{Tool, ToolType};
use crate::view::ViewTransform;

/// Zoom factor applied per wheel notch.
const ZOOM_STEP: f32 = 1.25;

/// The gesture the canvas is currently tracking.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    /// No pointer interaction in progress
    Idle,
    /// A tool stroke driven by the primary button
    Drawing,
    /// A view pan driven by the middle button, or primary with the pan
    /// modifier held
    Panning { last_position: Pos2 },
}

/// A resizable raster canvas with interchangeable tools, pan/zoom viewing
/// and bounded undo/redo.
pub struct Canvas {
    buffer: PixelBuffer,
    view: ViewTransform,
    history: HistoryManager,
    tool: ToolType,
    gesture: Gesture,
    background: Color32,
    /// Where the image was last loaded from or saved to
    file_path: Option<PathBuf>,
    events: EventBus,
    /// Last (can_undo, can_redo) pair reported to handlers
    history_flags: (bool, bool),
}

impl Canvas {
    /// Creates a canvas holding a `width` x `height` image filled with the
    /// background color.
    pub fn new(width: u32, height: u32) -> PaintResult<Self> {
        Ok(Self {
            buffer: PixelBuffer::new(width, height, BACKGROUND)?,
            view: ViewTransform::identity(),
            history: HistoryManager::new(),
            tool: ToolType::default(),
            gesture: Gesture::Idle,
            background: BACKGROUND,
            file_path: None,
            events: EventBus::new(),
            history_flags: (false, false),
        })
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn tool(&self) -> &ToolType {
        &self.tool
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Subscribe a handler to canvas events (repaint requests, history
    /// availability, view changes).
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    // ---- input routing ----

    /// Routes a UI input event to the active gesture.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown {
                position,
                button,
                pan_modifier,
            } => self.pointer_down(position, button, pan_modifier),
            InputEvent::PointerMove {
                position,
                held_buttons,
            } => self.pointer_move(position, &held_buttons),
            InputEvent::PointerUp { button } => self.pointer_up(button),
            InputEvent::Wheel { position, delta } => self.wheel(position, delta),
        }
    }

    fn pointer_down(&mut self, position: Pos2, button: PointerButton, pan_modifier: bool) {
        if self.gesture != Gesture::Idle {
            // A stroke cannot start mid-pan and a pan cannot start mid-stroke
            log::debug!("Ignoring {:?} press during {:?}", button, self.gesture);
            return;
        }

        let wants_pan =
            button == PointerButton::Middle || (button == PointerButton::Primary && pan_modifier);
        if wants_pan {
            self.gesture = Gesture::Panning {
                last_position: position,
            };
        } else if button == PointerButton::Primary {
            // Pre-image snapshot, before the tool touches any pixel
            self.history.record(self.buffer.clone());
            self.gesture = Gesture::Drawing;
            let image_pos = self.view.to_image(position);
            self.tool.on_activate(&mut self.buffer, image_pos);
            self.sync_history_flags();
            self.events.emit(CanvasEvent::Changed);
        }
    }

    fn pointer_move(&mut self, position: Pos2, held_buttons: &[PointerButton]) {
        match self.gesture {
            Gesture::Drawing => {
                if !held_buttons.contains(&PointerButton::Primary) {
                    // The release happened outside the canvas; end the stroke
                    self.end_stroke();
                    return;
                }
                let image_pos = self.view.to_image(position);
                self.tool.on_move(&mut self.buffer, image_pos);
                self.events.emit(CanvasEvent::Changed);
            }
            Gesture::Panning { last_position } => {
                if !held_buttons.contains(&PointerButton::Middle)
                    && !held_buttons.contains(&PointerButton::Primary)
                {
                    self.gesture = Gesture::Idle;
                    return;
                }
                self.view.pan(position - last_position);
                self.gesture = Gesture::Panning {
                    last_position: position,
                };
                self.emit_view_changed();
            }
            Gesture::Idle => {}
        }
    }

    fn pointer_up(&mut self, button: PointerButton) {
        match self.gesture {
            Gesture::Drawing if button == PointerButton::Primary => self.end_stroke(),
            Gesture::Panning { .. }
                if matches!(button, PointerButton::Primary | PointerButton::Middle) =>
            {
                self.gesture = Gesture::Idle;
            }
            _ => {}
        }
    }

    fn wheel(&mut self, position: Pos2, delta: f32) {
        if delta == 0.0 {
            return;
        }
        let factor = if delta > 0.0 {
            ZOOM_STEP
        } else {
            1.0 / ZOOM_STEP
        };
        self.view.zoom_at(position, factor);
        self.emit_view_changed();
    }

    fn end_stroke(&mut self) {
        self.tool.on_deactivate();
        self.gesture = Gesture::Idle;
    }

    // ---- image operations ----

    /// Replaces the image with a fresh `width` x `height` buffer filled with
    /// `color`. Clears the history, resets the view and forgets the file path.
    pub fn new_image(&mut self, width: u32, height: u32, color: Color32) -> PaintResult<()> {
        let fresh = PixelBuffer::new(width, height, color)?;
        self.end_stroke();
        self.buffer = fresh;
        self.history.clear();
        self.view.reset();
        self.file_path = None;
        self.sync_history_flags();
        self.events.emit(CanvasEvent::ImageReplaced { width, height });
        self.events.emit(CanvasEvent::Changed);
        Ok(())
    }

    /// Loads an image file into the canvas, clearing the history, resetting
    /// the view and remembering the path for [`Canvas::save_image`].
    ///
    /// On failure the canvas is left exactly as it was.
    pub fn load_image(&mut self, path: &Path) -> PaintResult<()> {
        let loaded = file_handler::load(path)?;
        let (width, height) = (loaded.width(), loaded.height());
        self.end_stroke();
        self.buffer = loaded;
        self.history.clear();
        self.view.reset();
        self.file_path = Some(path.to_owned());
        self.sync_history_flags();
        self.events.emit(CanvasEvent::ImageReplaced { width, height });
        self.events.emit(CanvasEvent::Changed);
        Ok(())
    }

    /// Saves the image to the remembered path.
    pub fn save_image(&self) -> PaintResult<()> {
        let path = self.file_path.as_ref().ok_or(PaintError::NoFilePath)?;
        file_handler::save(&self.buffer, path)?;
        self.events.emit(CanvasEvent::ImageSaved);
        Ok(())
    }

    /// Saves the image to `path` and remembers it for later saves.
    pub fn save_image_as(&mut self, path: &Path) -> PaintResult<()> {
        file_handler::save(&self.buffer, path)?;
        self.file_path = Some(path.to_owned());
        self.events.emit(CanvasEvent::ImageSaved);
        Ok(())
    }

    /// Resizes the image, keeping the existing content anchored at the
    /// origin and filling newly exposed area with the background color.
    /// Records an undo snapshot first; rejects zero-sized dimensions
    /// without touching anything.
    pub fn resize(&mut self, width: u32, height: u32) -> PaintResult<()> {
        let resized = self.buffer.resized(width, height, self.background)?;
        self.end_stroke();
        self.history.record(self.buffer.clone());
        self.buffer = resized;
        self.view.reset();
        self.sync_history_flags();
        self.events.emit(CanvasEvent::ImageReplaced { width, height });
        self.events.emit(CanvasEvent::Changed);
        Ok(())
    }

    // ---- history ----

    /// Restores the previous snapshot, if any. A no-op with empty history.
    pub fn undo(&mut self) {
        self.end_stroke();
        if let Some(previous) = self.history.undo(&self.buffer) {
            self.buffer = previous;
            self.sync_history_flags();
            self.events.emit(CanvasEvent::Changed);
        }
    }

    /// Restores the most recently undone snapshot, if any.
    pub fn redo(&mut self) {
        self.end_stroke();
        if let Some(next) = self.history.redo(&self.buffer) {
            self.buffer = next;
            self.sync_history_flags();
            self.events.emit(CanvasEvent::Changed);
        }
    }

    // ---- tool management ----

    /// Binds a new active tool, deactivating the outgoing one first if it is
    /// mid-stroke.
    pub fn set_tool(&mut self, tool: ToolType) {
        self.end_stroke();
        log::debug!("Tool changed to {}", tool.name());
        self.tool = tool;
    }

    /// Sets the color of the active tool; the eraser ignores it.
    pub fn set_color(&mut self, color: Color32) {
        self.tool.set_color(color);
    }

    /// Sets the stroke size of the active tool; the fill ignores it.
    pub fn set_tool_size(&mut self, size: f32) {
        self.tool.set_size(size);
    }

    pub(crate) fn set_file_path(&mut self, path: Option<PathBuf>) {
        self.file_path = path;
    }

    // ---- notifications ----

    fn sync_history_flags(&mut self) {
        let flags = (self.history.can_undo(), self.history.can_redo());
        if flags != self.history_flags {
            self.history_flags = flags;
            self.events.emit(CanvasEvent::HistoryChanged {
                can_undo: flags.0,
                can_redo: flags.1,
            });
        }
    }

    fn emit_view_changed(&self) {
        self.events.emit(CanvasEvent::ViewChanged {
            zoom: self.view.zoom(),
            pan: self.view.pan_offset(),
        });
    }
}
