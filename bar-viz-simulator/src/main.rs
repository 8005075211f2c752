use bar_viz::{
    BarVisualizer, DrawTargetSink, LayoutConfig, PaintMode, Rgba, SpectrumVisualizer,
};
use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use std::{thread, time::Duration};

pub const FRAME_DELAY_MS: u64 = 16;

/// Synthetic per-band magnitude: a travelling sine so the bars sweep
/// instead of sitting still. Scaled to pixel heights like the real
/// analysis stage would produce.
pub fn calculate_magnitude(band: usize, time: f32, max_height: f32) -> f32 {
    let phase = time + band as f32 * 0.35;
    (phase.sin() * 0.5 + 0.5) * max_height
}

fn main() -> Result<(), std::convert::Infallible> {
    let config = LayoutConfig {
        bar_width: 6,
        bar_height: 128,
        bar_space: 2,
        stereo_space: 8,
        detail: 32,
        stereo: true,
        rounded_corners: false,
        corner_points: 8,
        paint_mode: PaintMode::Gradient,
        color_primary: Rgba::new(1.0, 0.25, 0.1, 1.0),
        color_secondary: Rgba::new(0.1, 0.3, 1.0, 1.0),
        cy: 264,
    };

    let mut display: SimulatorDisplay<Rgb888> =
        SimulatorDisplay::new(Size::new(config.canvas_width(), config.cy));

    let mut window = Window::new("bar-viz simulator", &OutputSettingsBuilder::new().build());

    let mut visualizer = BarVisualizer::new();
    let cap = (config.center() - config.stereo_offset()) as f32;
    let mut time: f32 = 0.0;

    loop {
        display.clear(Rgb888::BLACK)?;

        visualizer.update(&config);

        // Stand-in for the audio analysis handoff: overwrite the
        // magnitude snapshot, right channel slightly out of phase.
        let detail = config.detail;
        let buffer = visualizer.buffer_mut();
        for band in 0..detail {
            buffer.left_mut()[band] = calculate_magnitude(band, time, cap);
            buffer.right_mut()[band] = calculate_magnitude(band, time * 1.3 + 1.0, cap);
        }

        let mut sink = DrawTargetSink::new(&mut display);
        visualizer.render(&config, &mut sink)?;

        window.update(&display);

        time += 0.05;
        thread::sleep(Duration::from_millis(FRAME_DELAY_MS));

        if let Some(event) = window.events().next() {
            if let SimulatorEvent::Quit = event {
                break;
            }
        }
    }

    Ok(())
}
