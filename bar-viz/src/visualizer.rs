use crate::color::{range_color, GradientStrip};
use crate::config::{LayoutConfig, PaintMode};
use crate::layout::BarLayout;
use crate::magnitude::MagnitudeBuffer;
use crate::sink::{Paint, RenderSink};

#[cfg(feature = "logging")]
use defmt::info;
#[cfg(feature = "logging")]
use defmt_rtt as _;

/// Per-frame capability set shared by all spectrum visualizer variants.
/// The host calls `update` then `render` once per frame tick, never
/// concurrently and never re-entered; the upstream analysis stage must
/// have published a consistent magnitude snapshot before `render` runs.
pub trait SpectrumVisualizer {
    /// Recomputes configuration-dependent resources (buffer sizing, baked
    /// gradient). Must not fail; if a resource cannot be rebuilt the
    /// previous frame's resource stays in place.
    fn update(&mut self, cfg: &LayoutConfig);

    /// Emits this frame's draw commands against the sink. The only
    /// failure path is the backend's own error, propagated unchanged.
    fn render<S: RenderSink>(&mut self, cfg: &LayoutConfig, sink: &mut S)
        -> Result<(), S::Error>;

    /// Magnitude storage for the upstream audio collaborator to overwrite
    /// each frame. Write after `update` so the buffer is already sized.
    fn buffer_mut(&mut self) -> &mut MagnitudeBuffer;
}

/// Bar graph variant: one rectangle or rounded bar per band (two in
/// stereo modes), colored per the configured paint mode.
#[derive(Debug, Default)]
pub struct BarVisualizer {
    buffer: MagnitudeBuffer,
    gradient: Option<GradientStrip>,
}

impl BarVisualizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &MagnitudeBuffer {
        &self.buffer
    }

    fn bar_paint<'a>(&'a self, cfg: &LayoutConfig, height: u32) -> Paint<'a> {
        match cfg.paint_mode {
            PaintMode::Solid => Paint::Color(cfg.color_primary),
            PaintMode::Range => Paint::Color(range_color(cfg, height)),
            PaintMode::Gradient => match self.gradient.as_ref() {
                Some(strip) => Paint::Gradient(strip),
                // precompute was skipped, hold a flat fill for this frame
                None => Paint::Color(cfg.color_primary),
            },
        }
    }
}

impl SpectrumVisualizer for BarVisualizer {
    fn update(&mut self, cfg: &LayoutConfig) {
        cfg.debug_validate();
        self.buffer.ensure_capacity(cfg.detail);
        match cfg.paint_mode {
            PaintMode::Gradient => {
                self.gradient = Some(GradientStrip::render(cfg));
                #[cfg(feature = "std")]
                std::println!(
                    "BarVisualizer::update rebuilt gradient for bar_height {}",
                    cfg.bar_height
                );
                #[cfg(feature = "logging")]
                info!("bar visualizer gradient rebuilt, bar_height {}", cfg.bar_height);
            }
            // Solid needs no precompute; Range resolves at draw time
            // because the color tracks the instantaneous bar height.
            _ => self.gradient = None,
        }
    }

    fn render<S: RenderSink>(
        &mut self,
        cfg: &LayoutConfig,
        sink: &mut S,
    ) -> Result<(), S::Error> {
        // Just in case the host skipped update after a detail change.
        self.buffer.ensure_capacity(cfg.detail);

        let this = &*self;
        for bar in BarLayout::new(&this.buffer, cfg) {
            let paint = this.bar_paint(cfg, bar.height);
            if cfg.rounded_corners {
                sink.draw_rounded(
                    bar.x,
                    bar.y,
                    cfg.bar_width,
                    bar.height,
                    cfg.corner_points,
                    paint,
                )?;
            } else {
                sink.draw_rectangle(
                    bar.x,
                    bar.y,
                    cfg.bar_width,
                    bar.height,
                    bar.flip_vertical,
                    paint,
                )?;
            }
        }
        Ok(())
    }

    fn buffer_mut(&mut self) -> &mut MagnitudeBuffer {
        &mut self.buffer
    }
}

/// Line variant: instead of filled bars, draws a one-pixel cap at each
/// band's layout height. Shares the bar layout math; gradient paint
/// collapses to the height-keyed blend since only the top row is shown.
#[derive(Debug, Default)]
pub struct LineVisualizer {
    buffer: MagnitudeBuffer,
}

impl LineVisualizer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpectrumVisualizer for LineVisualizer {
    fn update(&mut self, cfg: &LayoutConfig) {
        cfg.debug_validate();
        self.buffer.ensure_capacity(cfg.detail);
    }

    fn render<S: RenderSink>(
        &mut self,
        cfg: &LayoutConfig,
        sink: &mut S,
    ) -> Result<(), S::Error> {
        self.buffer.ensure_capacity(cfg.detail);
        for bar in BarLayout::new(&self.buffer, cfg) {
            let color = match cfg.paint_mode {
                PaintMode::Solid => cfg.color_primary,
                PaintMode::Range | PaintMode::Gradient => range_color(cfg, bar.height),
            };
            sink.draw_rectangle(bar.x, bar.y, cfg.bar_width, 1, false, Paint::Color(color))?;
        }
        Ok(())
    }

    fn buffer_mut(&mut self) -> &mut MagnitudeBuffer {
        &mut self.buffer
    }
}
