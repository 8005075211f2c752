use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Point, Size},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, RoundedRectangle},
};

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::color::{GradientStrip, Rgba};

/// Fill source for one draw command: either a resolved color or the
/// frame's shared baked gradient.
#[derive(Debug, Clone, Copy)]
pub enum Paint<'a> {
    Color(Rgba),
    Gradient(&'a GradientStrip),
}

/// Draw command sink implemented by the rendering backend. The core only
/// emits against this interface; it never owns a graphics context.
///
/// Coordinates are screen pixels, origin top-left. `flip_vertical` asks
/// the backend to mirror its paint sampling for the bottom channel of a
/// stereo rectangular layout. `corner_points` is the corner tessellation
/// resolution for rounded shapes; backends with their own tessellator may
/// ignore it.
pub trait RenderSink {
    type Error;

    fn draw_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        flip_vertical: bool,
        paint: Paint<'_>,
    ) -> Result<(), Self::Error>;

    fn draw_rounded(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        corner_points: u32,
        paint: Paint<'_>,
    ) -> Result<(), Self::Error>;
}

/// Concrete sink over any embedded-graphics draw target. Gradient paint
/// is rasterized as one-pixel scanline rectangles sampling the strip,
/// stretched over the bar height the way a scaled texture sprite would
/// be. Alpha is composited against a black cleared background.
pub struct DrawTargetSink<'a, D> {
    target: &'a mut D,
}

impl<'a, D> DrawTargetSink<'a, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }
}

fn to_rgb888(color: Rgba) -> Rgb888 {
    let quantize = |channel: f32| (channel * color.a * 255.0).clamp(0.0, 255.0) as u8;
    Rgb888::new(quantize(color.r), quantize(color.g), quantize(color.b))
}

/// Strip row shown on scanline `row` (0 = top of the bar) when the full
/// strip is stretched over `height` pixels.
fn sample_row(strip: &GradientStrip, row: u32, height: u32, flip_vertical: bool) -> Rgb888 {
    let from_bottom = if flip_vertical { row } else { height - 1 - row };
    let top_row = strip.len() as u32 - 1;
    let idx = if height > 1 {
        from_bottom * top_row / (height - 1)
    } else {
        0
    };
    to_rgb888(strip.row_from_bottom(idx))
}

/// Horizontal inset of a rounded end cap `dy` pixels from the cap's
/// center line, for a cap of the given radius.
fn cap_inset(radius: u32, dy: f32) -> u32 {
    let r = radius as f32;
    (r - (r * r - dy * dy).max(0.0).sqrt()).round() as u32
}

impl<D> RenderSink for DrawTargetSink<'_, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    type Error = D::Error;

    fn draw_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        flip_vertical: bool,
        paint: Paint<'_>,
    ) -> Result<(), Self::Error> {
        match paint {
            Paint::Color(color) => Rectangle::new(Point::new(x, y), Size::new(width, height))
                .into_styled(PrimitiveStyle::with_fill(to_rgb888(color)))
                .draw(self.target),
            Paint::Gradient(strip) => {
                for row in 0..height {
                    let color = sample_row(strip, row, height, flip_vertical);
                    Rectangle::new(Point::new(x, y + row as i32), Size::new(width, 1))
                        .into_styled(PrimitiveStyle::with_fill(color))
                        .draw(self.target)?;
                }
                Ok(())
            }
        }
    }

    fn draw_rounded(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        _corner_points: u32,
        paint: Paint<'_>,
    ) -> Result<(), Self::Error> {
        let radius = (width / 2).min(height / 2);
        match paint {
            Paint::Color(color) => RoundedRectangle::with_equal_corners(
                Rectangle::new(Point::new(x, y), Size::new(width, height)),
                Size::new(radius, radius),
            )
            .into_styled(PrimitiveStyle::with_fill(to_rgb888(color)))
            .draw(self.target),
            Paint::Gradient(strip) => {
                for row in 0..height {
                    // distance from the nearest cap's center line, mid rows
                    // get no inset
                    let dy = if row < radius {
                        radius as f32 - (row as f32 + 0.5)
                    } else if row + radius >= height {
                        (row as f32 + 0.5) - (height - radius) as f32
                    } else {
                        0.0
                    };
                    let inset = cap_inset(radius, dy);
                    let row_width = width.saturating_sub(inset * 2);
                    if row_width == 0 {
                        continue;
                    }
                    let color = sample_row(strip, row, height, false);
                    Rectangle::new(
                        Point::new(x + inset as i32, y + row as i32),
                        Size::new(row_width, 1),
                    )
                    .into_styled(PrimitiveStyle::with_fill(color))
                    .draw(self.target)?;
                }
                Ok(())
            }
        }
    }
}
