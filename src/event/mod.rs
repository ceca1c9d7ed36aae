mod bus;
mod events;

pub use bus::EventBus;
pub use events::CanvasEvent;

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &CanvasEvent);
}

/// Plain closures can subscribe directly, which is how a UI layer typically
/// wires its repaint and enable/disable callbacks.
impl<F: FnMut(&CanvasEvent) + Send> EventHandler for F {
    fn handle_event(&mut self, event: &CanvasEvent) {
        self(event)
    }
}
