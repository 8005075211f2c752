//! Audio spectrum bar graph core: turns per-band magnitudes into a stream of
//! clamped, pixel-positioned draw commands against a backend-agnostic sink.
//!
//! The crate is split along the frame pipeline: [`MagnitudeBuffer`] holds the
//! per-channel band magnitudes published by the upstream analysis stage,
//! [`BarLayout`] maps them to positioned bars, the color module resolves a
//! paint per bar, and [`RenderSink`] receives the resulting primitives.
#![no_std]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod color;
pub mod config;
pub mod layout;
pub mod magnitude;
pub mod sink;
pub mod visualizer;

pub use color::{range_color, GradientStrip, Rgba};
pub use config::{LayoutConfig, PaintMode};
pub use layout::{Bar, BarLayout, Channel};
pub use magnitude::{MagnitudeBuffer, DEAD_BAR_OFFSET};
pub use sink::{DrawTargetSink, Paint, RenderSink};
pub use visualizer::{BarVisualizer, LineVisualizer, SpectrumVisualizer};
