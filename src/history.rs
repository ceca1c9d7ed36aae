use std::collections::VecDeque;

use crate::buffer::PixelBuffer;

/// Default number of undo steps kept before the oldest is evicted.
pub const DEFAULT_CAPACITY: usize = 30;

/// Manages the undo and redo stacks for the canvas.
///
/// Each entry is a whole-buffer snapshot taken immediately *before* a
/// mutating operation. Both stacks are bounded: pushing onto a full stack
/// evicts the oldest entry first.
pub struct HistoryManager {
    /// Snapshots that can be restored by undo, most recent last
    undo_stack: VecDeque<PixelBuffer>,
    /// Snapshots that can be restored by redo, most recent last
    redo_stack: VecDeque<PixelBuffer>,
    capacity: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryManager {
    /// Creates an empty history with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty history holding at most `capacity` snapshots per stack.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Records a pre-mutation snapshot on the undo stack.
    ///
    /// Any redo history is invalidated by a new edit and cleared.
    pub fn record(&mut self, snapshot: PixelBuffer) {
        push_bounded(&mut self.undo_stack, snapshot, self.capacity);
        self.redo_stack.clear();
    }

    /// Performs an undo: pushes `current` onto the redo stack and returns the
    /// most recent undo snapshot, or `None` if there is nothing to undo.
    pub fn undo(&mut self, current: &PixelBuffer) -> Option<PixelBuffer> {
        let previous = self.undo_stack.pop_back()?;
        push_bounded(&mut self.redo_stack, current.clone(), self.capacity);
        Some(previous)
    }

    /// Performs a redo: pushes `current` onto the undo stack and returns the
    /// most recent redo snapshot, or `None` if there is nothing to redo.
    pub fn redo(&mut self, current: &PixelBuffer) -> Option<PixelBuffer> {
        let next = self.redo_stack.pop_back()?;
        push_bounded(&mut self.undo_stack, current.clone(), self.capacity);
        Some(next)
    }

    /// Returns true if there are snapshots on the undo stack.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are snapshots on the redo stack.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clears both stacks. Used when a new image is created or loaded.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

fn push_bounded(stack: &mut VecDeque<PixelBuffer>, snapshot: PixelBuffer, capacity: usize) {
    if stack.len() == capacity {
        stack.pop_front();
    }
    stack.push_back(snapshot);
}
