//! Low-level drawing primitives shared by the widgets.
//!
//! These mirror the small set of operations a MicroOLED-style driver
//! offers (vertical/horizontal runs, segments, circles, single pixels) on
//! top of `embedded-graphics`. Pass a target obtained from
//! [`InvertPixels::inverting`](crate::InvertPixels::inverting) to draw in
//! inverting mode.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};

fn stroke() -> PrimitiveStyle<BinaryColor> {
    PrimitiveStyle::with_stroke(BinaryColor::On, 1)
}

/// Draw a vertical run of `len` pixels starting at `(x, y)` and going down.
pub fn line_v<D>(display: &mut D, x: i32, y: i32, len: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    if len == 0 {
        return Ok(());
    }
    segment(display, Point::new(x, y), Point::new(x, y + len as i32 - 1))
}

/// Draw a horizontal run of `len` pixels starting at `(x, y)` and going right.
pub fn line_h<D>(display: &mut D, x: i32, y: i32, len: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    if len == 0 {
        return Ok(());
    }
    segment(display, Point::new(x, y), Point::new(x + len as i32 - 1, y))
}

/// Draw a one-pixel wide segment between two points (both inclusive).
pub fn segment<D>(display: &mut D, from: Point, to: Point) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Line::new(from, to).into_styled(stroke()).draw(display)
}

/// Draw a circle outline centred on `centre`.
pub fn circle<D>(display: &mut D, centre: Point, radius: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Circle::with_center(centre, 2 * radius + 1)
        .into_styled(stroke())
        .draw(display)
}

/// Light a single pixel.
pub fn pixel<D>(display: &mut D, point: Point) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Pixel(point, BinaryColor::On).draw(display)
}
