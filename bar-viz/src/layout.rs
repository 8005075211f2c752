use crate::config::LayoutConfig;
use crate::magnitude::{MagnitudeBuffer, DEAD_BAR_OFFSET};

#[allow(unused_imports)]
use micromath::F32Ext;

/// Which half of the canvas a bar belongs to. Mono layouts only ever
/// produce `Mono`; stereo layouts alternate `Top` (left channel) and
/// `Bottom` (right channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Mono,
    Top,
    Bottom,
}

/// One positioned bar in screen coordinates (origin top-left, y grows
/// downward). `y` is the top edge of the bar's bounding box;
/// `flip_vertical` marks the mirrored bottom channel in stereo
/// rectangular mode so a textured backend can flip its sampling, it is
/// not a geometric transform on `y`/`height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub index: usize,
    pub x: i32,
    pub y: i32,
    pub height: u32,
    pub channel: Channel,
    pub flip_vertical: bool,
}

/// Restartable, pure mapping from magnitudes to positioned bars. Yields
/// `detail` bars in mono modes and `2 * detail` (a top/bottom pair per
/// index) in stereo modes, left to right, never touching the dead
/// trailing padding.
///
/// Magnitudes at or below 1.0 floor to a height of 1 pixel (or
/// `bar_width` for rounded bars, so the end caps stay circular);
/// everything above clamps to the mode's ceiling. Rounding is
/// half-away-from-zero.
pub struct BarLayout<'a> {
    left: &'a [f32],
    right: &'a [f32],
    cfg: &'a LayoutConfig,
    index: usize,
    count: usize,
    pending: Option<Bar>,
}

impl<'a> BarLayout<'a> {
    pub fn new(buffer: &'a MagnitudeBuffer, cfg: &'a LayoutConfig) -> Self {
        cfg.debug_validate();
        // The buffer adapter resizes to detail + padding before every
        // frame; the min() guards against reading past a stale buffer.
        let count = cfg
            .detail
            .min(buffer.len().saturating_sub(DEAD_BAR_OFFSET));
        Self {
            left: buffer.left(),
            right: buffer.right(),
            cfg,
            index: 0,
            count,
            pending: None,
        }
    }

    /// Magnitude floor, round, clamp. `floor`/`ceiling` come from the
    /// active layout mode; when the config makes floor exceed ceiling
    /// the ceiling wins.
    fn clamp_height(magnitude: f32, floor: u32, ceiling: u32) -> u32 {
        let val = if magnitude > 1.0 { magnitude } else { 1.0 };
        (val.round() as u32).max(floor).min(ceiling)
    }

    fn mono_bar(&self, index: usize, x: i32) -> Bar {
        let cfg = self.cfg;
        let (floor, ceiling, baseline) = if cfg.rounded_corners {
            // At least a square so the end-cap circle fits.
            (cfg.bar_width, cfg.bar_height, cfg.bar_height as i32)
        } else {
            (1, cfg.bar_height, cfg.cy as i32)
        };
        let height = Self::clamp_height(self.left[index], floor, ceiling);
        Bar {
            index,
            x,
            y: baseline - height as i32,
            height,
            channel: Channel::Mono,
            flip_vertical: false,
        }
    }

    fn stereo_pair(&self, index: usize, x: i32) -> (Bar, Bar) {
        let cfg = self.cfg;
        let offset = cfg.stereo_offset() as i32;
        let (floor, ceiling, mid) = if cfg.rounded_corners {
            (cfg.bar_width, cfg.bar_height / 2, (cfg.bar_height / 2) as i32)
        } else {
            let center = cfg.center() as i32;
            let ceiling = (center - offset).max(1) as u32;
            (1, ceiling, center)
        };
        let height_l = Self::clamp_height(self.left[index], floor, ceiling);
        let height_r = Self::clamp_height(self.right[index], floor, ceiling);

        let (top_y, bottom_y) = if cfg.rounded_corners {
            // Rounded halves hug the gap around bar_height / 2.
            (mid - height_l as i32, mid + 2 * offset)
        } else {
            (mid - offset - height_l as i32, mid + offset)
        };

        let top = Bar {
            index,
            x,
            y: top_y,
            height: height_l,
            channel: Channel::Top,
            flip_vertical: false,
        };
        let bottom = Bar {
            index,
            x,
            y: bottom_y,
            height: height_r,
            channel: Channel::Bottom,
            // Rounded bars are vertically symmetric, nothing to mirror.
            flip_vertical: !cfg.rounded_corners,
        };
        (top, bottom)
    }
}

impl Iterator for BarLayout<'_> {
    type Item = Bar;

    fn next(&mut self) -> Option<Bar> {
        if let Some(bar) = self.pending.take() {
            return Some(bar);
        }
        if self.index >= self.count {
            return None;
        }
        let index = self.index;
        self.index += 1;
        let x = (index as u32 * self.cfg.bar_pitch()) as i32;

        if self.cfg.stereo {
            let (top, bottom) = self.stereo_pair(index, x);
            self.pending = Some(bottom);
            Some(top)
        } else {
            Some(self.mono_bar(index, x))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let per_index = if self.cfg.stereo { 2 } else { 1 };
        let remaining =
            (self.count - self.index) * per_index + usize::from(self.pending.is_some());
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::config::PaintMode;
    use alloc::vec::Vec;

    fn config() -> LayoutConfig {
        LayoutConfig {
            bar_width: 4,
            bar_height: 50,
            bar_space: 2,
            stereo_space: 10,
            detail: 8,
            stereo: false,
            rounded_corners: false,
            corner_points: 8,
            paint_mode: PaintMode::Solid,
            color_primary: Rgba::new(1.0, 1.0, 1.0, 1.0),
            color_secondary: Rgba::new(0.0, 0.0, 0.0, 1.0),
            cy: 50,
        }
    }

    fn buffer_with_left(cfg: &LayoutConfig, values: &[f32]) -> MagnitudeBuffer {
        let mut buffer = MagnitudeBuffer::new();
        buffer.ensure_capacity(cfg.detail);
        buffer.left_mut()[..values.len()].copy_from_slice(values);
        buffer
    }

    #[test]
    fn test_mono_rectangular_heights_and_positions() {
        let cfg = config();
        let buffer = buffer_with_left(&cfg, &[0.5, 60.0, 25.0, 1.0]);
        let bars: Vec<Bar> = BarLayout::new(&buffer, &cfg).collect();

        assert_eq!(bars.len(), 8);
        let heights: Vec<u32> = bars.iter().map(|b| b.height).collect();
        assert_eq!(heights, [1, 50, 25, 1, 1, 1, 1, 1]);
        let xs: Vec<i32> = bars.iter().map(|b| b.x).collect();
        assert_eq!(xs, [0, 6, 12, 18, 24, 30, 36, 42]);
        // bottom-aligned on the canvas
        assert_eq!(bars[1].y, 0);
        assert_eq!(bars[2].y, 25);
        assert!(bars.iter().all(|b| b.channel == Channel::Mono));
        assert!(bars.iter().all(|b| !b.flip_vertical));
    }

    #[test]
    fn test_adjacent_bars_keep_fixed_pitch() {
        let cfg = config();
        let buffer = buffer_with_left(&cfg, &[10.0; 8]);
        let bars: Vec<Bar> = BarLayout::new(&buffer, &cfg).collect();
        for pair in bars.windows(2) {
            assert_eq!(pair[1].x - pair[0].x, cfg.bar_pitch() as i32);
        }
    }

    #[test]
    fn test_low_magnitudes_floor_to_one_pixel() {
        let cfg = config();
        let buffer = buffer_with_left(&cfg, &[0.0, 0.3, 1.0, -5.0]);
        let bars: Vec<Bar> = BarLayout::new(&buffer, &cfg).collect();
        assert!(bars.iter().all(|b| b.height == 1));
    }

    #[test]
    fn test_oversized_magnitudes_clamp_to_bar_height() {
        let cfg = config();
        let buffer = buffer_with_left(&cfg, &[1000.0, 50.4, 51.0]);
        let bars: Vec<Bar> = BarLayout::new(&buffer, &cfg).collect();
        assert_eq!(bars[0].height, 50);
        assert_eq!(bars[1].height, 50);
        assert_eq!(bars[2].height, 50);
    }

    #[test]
    fn test_mono_rounded_floors_to_bar_width() {
        let mut cfg = config();
        cfg.rounded_corners = true;
        let buffer = buffer_with_left(&cfg, &[0.5, 2.0, 30.0]);
        let bars: Vec<Bar> = BarLayout::new(&buffer, &cfg).collect();
        assert_eq!(bars[0].height, 4);
        assert_eq!(bars[1].height, 4);
        assert_eq!(bars[2].height, 30);
        // bottom-aligned against the bar_height baseline
        assert_eq!(bars[2].y, 20);
    }

    #[test]
    fn test_stereo_rectangular_mirrored_pair() {
        let mut cfg = config();
        cfg.stereo = true;
        cfg.detail = 1;
        cfg.cy = 100;
        let mut buffer = MagnitudeBuffer::new();
        buffer.ensure_capacity(cfg.detail);
        buffer.left_mut()[0] = 80.0;
        buffer.right_mut()[0] = 5.0;

        let bars: Vec<Bar> = BarLayout::new(&buffer, &cfg).collect();
        assert_eq!(bars.len(), 2);

        // center 50, offset 5: left clamps to 45 and fills up to the gap
        let top = bars[0];
        assert_eq!(top.channel, Channel::Top);
        assert_eq!(top.height, 45);
        assert_eq!(top.y, 0);
        assert!(!top.flip_vertical);

        let bottom = bars[1];
        assert_eq!(bottom.channel, Channel::Bottom);
        assert_eq!(bottom.height, 5);
        assert_eq!(bottom.y, 55);
        assert!(bottom.flip_vertical);
    }

    #[test]
    fn test_stereo_heights_never_cross_the_gap() {
        let mut cfg = config();
        cfg.stereo = true;
        cfg.cy = 100;
        let mut buffer = MagnitudeBuffer::new();
        buffer.ensure_capacity(cfg.detail);
        for (i, slot) in buffer.left_mut().iter_mut().enumerate() {
            *slot = (i as f32) * 37.0;
        }
        for (i, slot) in buffer.right_mut().iter_mut().enumerate() {
            *slot = 500.0 - i as f32;
        }
        let cap = cfg.center() - cfg.stereo_offset();
        for bar in BarLayout::new(&buffer, &cfg) {
            assert!(bar.height <= cap);
        }
    }

    #[test]
    fn test_stereo_rounded_placement() {
        let mut cfg = config();
        cfg.stereo = true;
        cfg.rounded_corners = true;
        cfg.detail = 1;
        cfg.bar_height = 40;
        cfg.stereo_space = 10;
        cfg.cy = 90;
        let mut buffer = MagnitudeBuffer::new();
        buffer.ensure_capacity(cfg.detail);
        buffer.left_mut()[0] = 100.0;
        buffer.right_mut()[0] = 0.0;

        let bars: Vec<Bar> = BarLayout::new(&buffer, &cfg).collect();
        // left clamps to bar_height / 2, right floors to bar_width
        assert_eq!(bars[0].height, 20);
        assert_eq!(bars[0].y, 0);
        assert_eq!(bars[1].height, 4);
        assert_eq!(bars[1].y, 30);
        // no texture mirroring for symmetric rounded bars
        assert!(!bars[1].flip_vertical);
    }

    #[test]
    fn test_layout_is_restartable() {
        let cfg = config();
        let buffer = buffer_with_left(&cfg, &[5.0, 15.0, 25.0]);
        let first: Vec<Bar> = BarLayout::new(&buffer, &cfg).collect();
        let second: Vec<Bar> = BarLayout::new(&buffer, &cfg).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_stale_short_buffer_yields_no_out_of_bounds_reads() {
        let cfg = config();
        let mut buffer = MagnitudeBuffer::new();
        buffer.ensure_capacity(2); // shorter than cfg.detail
        let bars: Vec<Bar> = BarLayout::new(&buffer, &cfg).collect();
        assert_eq!(bars.len(), 2);
    }

    #[test]
    fn test_size_hint_matches_emitted_bars() {
        let mut cfg = config();
        cfg.stereo = true;
        let buffer = buffer_with_left(&cfg, &[3.0; 8]);
        let layout = BarLayout::new(&buffer, &cfg);
        assert_eq!(layout.size_hint(), (16, Some(16)));
        assert_eq!(layout.count(), 16);
    }
}
