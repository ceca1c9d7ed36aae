use egui::Color32;

use crate::error::{PaintError, PaintResult};

/// The background color of a canvas: the color new images start with,
/// the color exposed by resizing, and the color the eraser paints.
pub const BACKGROUND: Color32 = Color32::WHITE;

/// A flat raster of packed 32-bit RGBA pixels.
///
/// The buffer owns `height * stride` bytes of contiguous storage, where
/// `stride` is the byte length of one row. All coordinate-taking methods
/// are bounds-checked and turn out-of-range access into a no-op or `None`;
/// the flood fill routine is the one caller that goes through the raw view
/// instead, pre-checking bounds itself.
#[derive(Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a buffer of the given size with every pixel set to `fill`.
    ///
    /// Rejects zero-sized dimensions.
    pub fn new(width: u32, height: u32, fill: Color32) -> PaintResult<Self> {
        if width < 1 || height < 1 {
            return Err(PaintError::InvalidDimensions { width, height });
        }
        let stride = width as usize * 4;
        let mut buffer = Self {
            width,
            height,
            stride,
            data: vec![0; stride * height as usize],
        };
        buffer.fill(fill);
        Ok(buffer)
    }

    /// Creates a buffer from raw RGBA bytes, row-major, tightly packed.
    ///
    /// The decode path guarantees `data` is exactly `width * height * 4`
    /// bytes; anything else is a programming error, not a recoverable one.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> PaintResult<Self> {
        if width < 1 || height < 1 {
            return Err(PaintError::InvalidDimensions { width, height });
        }
        let stride = width as usize * 4;
        assert_eq!(
            data.len(),
            stride * height as usize,
            "pixel data length does not match {}x{} RGBA dimensions",
            width,
            height
        );
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Byte length of one row of pixels.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns true if `(x, y)` names a pixel inside the buffer.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Reads the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Color32> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let i = self.index_of(x as u32, y as u32);
        let px = &self.data[i..i + 4];
        Some(Color32::from_rgba_premultiplied(px[0], px[1], px[2], px[3]))
    }

    /// Writes the pixel at `(x, y)`. Out-of-bounds writes are a no-op;
    /// returns whether the pixel was written.
    pub fn set(&mut self, x: i32, y: i32, color: Color32) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let i = self.index_of(x as u32, y as u32);
        self.data[i..i + 4].copy_from_slice(&color.to_array());
        true
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Color32) {
        let px = color.to_array();
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Byte offset of the pixel at `(x, y)` in the raw view.
    ///
    /// The caller must have checked bounds; this only indexes.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride + x as usize * 4
    }

    /// Raw view of the backing storage, one row per `stride()` bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw view of the backing storage.
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns a new buffer of the given size with this buffer's content
    /// blitted at the origin and any newly exposed area set to `background`.
    ///
    /// Rejects zero-sized dimensions, leaving this buffer untouched.
    pub fn resized(&self, width: u32, height: u32, background: Color32) -> PaintResult<Self> {
        let mut resized = Self::new(width, height, background)?;
        let rows = self.height.min(height) as usize;
        let row_bytes = (self.width.min(width) as usize) * 4;
        for y in 0..rows {
            let src = y * self.stride;
            let dst = y * resized.stride;
            resized.data[dst..dst + row_bytes].copy_from_slice(&self.data[src..src + row_bytes]);
        }
        Ok(resized)
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("data", &format!("<{} bytes>", self.data.len()))
            .finish()
    }
}
