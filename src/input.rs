use egui::{PointerButton, Pos2};

/// Input events the canvas consumes, as delivered by the UI collaborator.
///
/// Positions are in screen coordinates; the canvas converts them to image
/// coordinates through its view transform. Key-to-tool shortcut mapping
/// stays in the collaborator, which also translates its pan modifier key
/// (typically space) into `pan_modifier`.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        position: Pos2,
        button: PointerButton,
        /// Whether the pan modifier key is held, turning a primary-button
        /// press into a pan gesture instead of a tool stroke
        pan_modifier: bool,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove {
        position: Pos2,
        /// Buttons that are currently held down
        held_buttons: Vec<PointerButton>,
    },
    /// Mouse button was released
    PointerUp { button: PointerButton },
    /// Scroll wheel turned over the canvas
    Wheel {
        position: Pos2,
        /// Vertical scroll amount; positive means zoom in
        delta: f32,
    },
}
