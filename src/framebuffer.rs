//! In-memory monochrome frame buffer with an inverting draw mode.
//!
//! Widgets erase and redraw their pointer by toggling pixels: drawing the
//! same pointer twice through [`Inverting`] restores the previous buffer
//! contents, so no separate clear pass is needed. [`FrameBuffer`] is the
//! canonical target for this; it can be copied to any other
//! `DrawTarget<Color = BinaryColor>` (e.g. the SSD1306) with
//! [`FrameBuffer::blit`].

use core::convert::Infallible;

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::Rectangle,
};

// ── InvertPixels ─────────────────────────────────────────────────────────

/// A monochrome draw target that can toggle individual pixels.
pub trait InvertPixels: DrawTarget<Color = BinaryColor> {
    /// Flip the pixel at `point`. Points outside the target are ignored.
    fn invert_pixel(&mut self, point: Point) -> Result<(), Self::Error>;

    /// Borrow this target in inverting mode.
    ///
    /// Every `On` pixel drawn through the returned adapter toggles the
    /// underlying pixel; `Off` pixels are skipped.
    fn inverting(&mut self) -> Inverting<'_, Self>
    where
        Self: Sized,
    {
        Inverting { target: self }
    }
}

/// Inverting (XOR) view of an [`InvertPixels`] target.
pub struct Inverting<'a, T> {
    target: &'a mut T,
}

impl<T> Dimensions for Inverting<'_, T>
where
    T: InvertPixels,
{
    fn bounding_box(&self) -> Rectangle {
        self.target.bounding_box()
    }
}

impl<T> DrawTarget for Inverting<'_, T>
where
    T: InvertPixels,
{
    type Color = BinaryColor;
    type Error = T::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if color.is_on() {
                self.target.invert_pixel(point)?;
            }
        }
        Ok(())
    }
}

// ── FrameBuffer ──────────────────────────────────────────────────────────

/// Fixed-size monochrome frame buffer.
///
/// Storage is one `u64` bit mask per column (bit `y` = row `y`), which
/// caps the height at 64 rows, the largest SSD1306 panel. No heap
/// allocation.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer<const W: usize, const H: usize> {
    columns: [u64; W],
}

/// Frame buffer matching the 64×48 MicroOLED panel.
pub type MicroOledBuffer = FrameBuffer<64, 48>;

impl<const W: usize, const H: usize> Default for FrameBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    const HEIGHT_OK: () = assert!(H <= 64, "FrameBuffer height is limited to 64 rows");

    /// Create a blank (all pixels off) buffer.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::HEIGHT_OK;
        Self { columns: [0; W] }
    }

    /// Turn every pixel off.
    pub fn clear_all(&mut self) {
        self.columns = [0; W];
    }

    /// Map a point to `(column, bit)`, or `None` if it lies outside.
    fn locate(point: Point) -> Option<(usize, u32)> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        if x < W && y < H {
            Some((x, y as u32))
        } else {
            None
        }
    }

    /// Returns `true` if the pixel at `point` is lit. Out-of-bounds points
    /// read as off.
    pub fn pixel(&self, point: Point) -> bool {
        match Self::locate(point) {
            Some((x, bit)) => self.columns[x] & (1u64 << bit) != 0,
            None => false,
        }
    }

    /// Set or clear the pixel at `point`. Out-of-bounds points are ignored.
    pub fn set_pixel(&mut self, point: Point, on: bool) {
        if let Some((x, bit)) = Self::locate(point) {
            if on {
                self.columns[x] |= 1u64 << bit;
            } else {
                self.columns[x] &= !(1u64 << bit);
            }
        }
    }

    /// Number of lit pixels in the whole buffer.
    pub fn count_lit(&self) -> u32 {
        self.columns.iter().map(|c| c.count_ones()).sum()
    }

    /// Copy every pixel of this buffer (lit and unlit) onto `target`.
    pub fn blit<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let area = Rectangle::new(Point::zero(), self.size());
        target.fill_contiguous(
            &area,
            area.points().map(|p| BinaryColor::from(self.pixel(p))),
        )
    }
}

impl<const W: usize, const H: usize> OriginDimensions for FrameBuffer<W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl<const W: usize, const H: usize> DrawTarget for FrameBuffer<W, H> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point, color.is_on());
        }
        Ok(())
    }
}

impl<const W: usize, const H: usize> InvertPixels for FrameBuffer<W, H> {
    fn invert_pixel(&mut self, point: Point) -> Result<(), Self::Error> {
        if let Some((x, bit)) = Self::locate(point) {
            self.columns[x] ^= 1u64 << bit;
        }
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
