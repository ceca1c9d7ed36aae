use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

/// Smallest allowed zoom factor.
pub const MIN_ZOOM: f32 = 0.1;
/// Largest allowed zoom factor.
pub const MAX_ZOOM: f32 = 10.0;

/// Maps between screen coordinates and image coordinates.
///
/// The forward map is `screen = pan + image * zoom`; `to_image` is its exact
/// inverse, so round-tripping a point returns it unchanged up to float
/// rounding. Owned by the canvas and reset to identity whenever the image is
/// created, loaded, or resized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pan: Vec2,
    zoom: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ViewTransform {
    /// Creates the identity transform: zoom 1, no pan.
    pub fn identity() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn pan_offset(&self) -> Vec2 {
        self.pan
    }

    /// Forward map: image coordinates to screen coordinates.
    pub fn to_screen(&self, image_point: Pos2) -> Pos2 {
        (image_point.to_vec2() * self.zoom + self.pan).to_pos2()
    }

    /// Inverse map: screen coordinates to image coordinates.
    pub fn to_image(&self, screen_point: Pos2) -> Pos2 {
        ((screen_point.to_vec2() - self.pan) / self.zoom).to_pos2()
    }

    /// Shifts the view by `delta` screen pixels.
    pub fn pan(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Rescales the zoom by `factor`, clamped to [`MIN_ZOOM`, `MAX_ZOOM`],
    /// keeping the image point under `anchor` fixed on screen.
    pub fn zoom_at(&mut self, anchor: Pos2, factor: f32) {
        let pivot = self.to_image(anchor);
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.pan = anchor.to_vec2() - pivot.to_vec2() * self.zoom;
    }

    /// Resets to zoom 1 and pan (0, 0).
    pub fn reset(&mut self) {
        *self = Self::identity();
    }
}
