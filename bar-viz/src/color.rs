use alloc::vec::Vec;

use crate::config::LayoutConfig;

#[cfg(feature = "logging")]
use defmt::info;
#[cfg(feature = "logging")]
use defmt_rtt as _;

/// Straight-alpha RGBA color with `f32` channels in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Unpacks a host color in `0xAABBGGRR` byte order.
    pub fn from_packed(rgba: u32) -> Self {
        Self {
            r: (rgba & 0xff) as f32 / 255.0,
            g: ((rgba >> 8) & 0xff) as f32 / 255.0,
            b: ((rgba >> 16) & 0xff) as f32 / 255.0,
            a: ((rgba >> 24) & 0xff) as f32 / 255.0,
        }
    }

    /// Component-wise blend: `from * (1 - t) + to * t`. Callers keep `t`
    /// in `[0, 1]`, so no clamping happens here.
    pub fn lerp(from: Rgba, to: Rgba, t: f32) -> Rgba {
        let mix = |from: f32, to: f32| from * (1.0 - t) + to * t;
        Rgba {
            r: mix(from.r, to.r),
            g: mix(from.g, to.g),
            b: mix(from.b, to.b),
            a: mix(from.a, to.a),
        }
    }
}

/// Range paint: the taller the bar, the closer its fill sits to the
/// primary color. `height` never exceeds `bar_height`, so the factor is
/// already in `[0, 1]`.
pub fn range_color(cfg: &LayoutConfig, height: u32) -> Rgba {
    let factor = height as f32 / cfg.bar_height as f32;
    Rgba::lerp(cfg.color_secondary, cfg.color_primary, factor)
}

/// Vertical gradient baked once per reconfiguration and shared by every
/// bar of the frame, one row per pixel of the full bar height. Row 0 is
/// the bottom of a bar (secondary color), the last row the top (primary).
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStrip {
    rows: Vec<Rgba>,
}

impl GradientStrip {
    pub fn render(cfg: &LayoutConfig) -> Self {
        cfg.debug_validate();
        let mut rows = Vec::with_capacity(cfg.bar_height as usize + 1);
        for y in 0..=cfg.bar_height {
            let factor = y as f32 / cfg.bar_height as f32;
            rows.push(Rgba::lerp(cfg.color_secondary, cfg.color_primary, factor));
        }
        #[cfg(feature = "logging")]
        info!("gradient strip rebuilt with {} rows", rows.len());
        Self { rows }
    }

    /// Number of rows, `bar_height + 1`.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Samples the strip `y` pixels above the bar bottom. Past-the-end
    /// rows clamp to the top row instead of panicking.
    pub fn row_from_bottom(&self, y: u32) -> Rgba {
        let idx = (y as usize).min(self.rows.len() - 1);
        self.rows[idx]
    }
}
