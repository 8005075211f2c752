use crate::color::Rgba;

/// How bars get their color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    /// Every bar is filled with the primary color.
    Solid,
    /// A vertical blend between the two colors, baked once per
    /// reconfiguration and shared by all bars.
    Gradient,
    /// A blend keyed to the instantaneous bar height, resolved per bar at
    /// draw time. Louder bands shift toward the primary color.
    Range,
}

/// Immutable per-frame render parameters, published by the host's
/// configuration subsystem. All pixel sizes are integers.
///
/// Preconditions (checked only in debug builds): `bar_width`, `bar_height`
/// and `detail` must be positive. Violations are caller contract bugs, not
/// runtime errors; the layout math clamps everything else.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub bar_width: u32,
    pub bar_height: u32,
    pub bar_space: u32,
    /// Vertical gap between the mirrored channel halves in stereo modes.
    pub stereo_space: u32,
    /// Number of rendered bars, excluding the dead trailing padding.
    pub detail: usize,
    pub stereo: bool,
    pub rounded_corners: bool,
    /// Corner tessellation resolution for rounded bars. A backend with its
    /// own tessellator may ignore it.
    pub corner_points: u32,
    pub paint_mode: PaintMode,
    pub color_primary: Rgba,
    pub color_secondary: Rgba,
    /// Canvas height in pixels. The stereo rectangular mid-line sits at
    /// `cy / 2`.
    pub cy: u32,
}

impl LayoutConfig {
    /// Half the stereo gap, applied to each side of the mid-line.
    pub fn stereo_offset(&self) -> u32 {
        self.stereo_space / 2
    }

    /// Horizontal mid-line of the canvas for stereo rectangular layout.
    pub fn center(&self) -> u32 {
        self.cy / 2
    }

    /// Fixed horizontal distance between the left edges of adjacent bars.
    pub fn bar_pitch(&self) -> u32 {
        self.bar_width + self.bar_space
    }

    /// Canvas width implied by the bar layout: `detail` bars at fixed pitch,
    /// without the trailing gap.
    pub fn canvas_width(&self) -> u32 {
        (self.detail as u32 * self.bar_pitch()).saturating_sub(self.bar_space)
    }

    pub(crate) fn debug_validate(&self) {
        debug_assert!(self.bar_width > 0, "bar_width must be positive");
        debug_assert!(self.bar_height > 0, "bar_height must be positive");
        debug_assert!(self.detail > 0, "detail must be positive");
    }
}
