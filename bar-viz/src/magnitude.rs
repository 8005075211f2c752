use alloc::vec::Vec;

/// Trailing buffer slots reserved for the upstream smoothing window.
/// They exist in every channel buffer but are never rendered.
pub const DEAD_BAR_OFFSET: usize = 4;

/// Per-channel band magnitudes, overwritten each frame by the upstream
/// audio analysis stage. Both channels always have equal length,
/// `detail + DEAD_BAR_OFFSET`. The right channel is only read in stereo
/// modes but is kept sized so the writer never has to care.
#[derive(Debug, Clone, Default)]
pub struct MagnitudeBuffer {
    left: Vec<f32>,
    right: Vec<f32>,
}

impl MagnitudeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resizes both channels to `detail + DEAD_BAR_OFFSET` if they are not
    /// that length already. Growing zero-fills the new slots, shrinking
    /// truncates, and a matching size is a no-op that leaves contents
    /// untouched. Always succeeds.
    pub fn ensure_capacity(&mut self, detail: usize) {
        let len = detail + DEAD_BAR_OFFSET;
        if self.left.len() != len {
            self.left.resize(len, 0.0);
        }
        if self.right.len() != len {
            self.right.resize(len, 0.0);
        }
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    pub fn left(&self) -> &[f32] {
        &self.left
    }

    pub fn right(&self) -> &[f32] {
        &self.right
    }

    pub fn left_mut(&mut self) -> &mut [f32] {
        &mut self.left
    }

    pub fn right_mut(&mut self) -> &mut [f32] {
        &mut self.right
    }
}
