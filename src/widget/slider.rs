//! Linear slider: a tick-marked track with a small arrow pointer.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use super::style::SliderStyle;
use super::WidgetCore;
use crate::primitives::{line_h, line_v, pixel};

/// Slider-specific state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Slider {
    style: SliderStyle,
    show_value: bool,
    /// Value the pointer is currently drawn at.
    prev_value: i16,
}

impl Slider {
    pub(crate) fn new(style: SliderStyle, show_value: bool, initial: i16) -> Self {
        Self {
            style,
            show_value,
            prev_value: initial,
        }
    }

    pub fn style(&self) -> SliderStyle {
        self.style
    }

    pub fn total_ticks(&self) -> u8 {
        self.style.total_ticks()
    }

    /// Returns `false` if the numeric label is suppressed.
    pub fn shows_value(&self) -> bool {
        self.show_value
    }

    /// Value the pointer was last drawn at.
    pub fn prev_value(&self) -> i16 {
        self.prev_value
    }

    pub(crate) fn set_prev_value(&mut self, value: i16) {
        self.prev_value = value;
    }

    /// Pointer offset along the track for `value`, in `0..=total_ticks`
    /// for values inside the range.
    ///
    /// Vertical sliders count from the top, so the maximum sits at offset 0.
    pub fn tick_position(&self, core: &WidgetCore, value: i16) -> i32 {
        let fraction = if self.style.is_horizontal() {
            core.fraction(value)
        } else {
            core.fraction_from_top(value)
        };
        libm::roundf(fraction * f32::from(self.total_ticks())) as i32
    }

    /// Draw the static track: minor ticks every 2 px, major extensions
    /// every 10 px.
    pub(crate) fn draw_face<D>(&self, core: &WidgetCore, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let (x, y) = (core.x(), core.y());
        let total = i32::from(self.total_ticks());

        if self.style.is_horizontal() {
            let end = x + total + 2;
            for i in (x + 1..end).step_by(2) {
                line_v(display, i, y + 5, 3)?;
            }
            for i in (x + 1..end).step_by(10) {
                line_v(display, i, y + 3, 2)?;
            }
        } else {
            let end = y + total + 2;
            for i in (y + 1..=end).step_by(2) {
                line_h(display, x, i, 3)?;
            }
            for i in (y + 1..=end).step_by(10) {
                line_h(display, x + 3, i, 2)?;
            }
        }
        Ok(())
    }

    /// Draw the pointer for `prev_value`. `display` is expected to be an
    /// inverting view so a second call erases the first.
    pub(crate) fn draw_pointer<D>(&self, core: &WidgetCore, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let (x, y) = (core.x(), core.y());
        let tick = self.tick_position(core, self.prev_value);

        if self.style.is_horizontal() {
            line_h(display, x + tick, y, 3)?;
            pixel(display, Point::new(x + 1 + tick, y + 1))
        } else {
            line_v(display, x + 7, y + tick, 3)?;
            pixel(display, Point::new(x + 6, y + 1 + tick))
        }
    }

    /// Top-left corner of the numeric label.
    pub fn label_origin(&self, core: &WidgetCore) -> Point {
        let (x, y) = (core.x(), core.y());
        let total = i32::from(self.total_ticks());
        match self.style {
            SliderStyle::Horizontal => Point::new(x + total + 4, y + 1),
            SliderStyle::HorizontalWide => Point::new(x, y + 10),
            SliderStyle::Vertical => Point::new(x + 1, y + total + 4),
            SliderStyle::VerticalTall => Point::new(x + 9, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::{InvertPixels, MicroOledBuffer};

    fn core(min: i16, max: i16) -> WidgetCore {
        WidgetCore::new(Point::zero(), min, max)
    }

    #[test]
    fn midpoint_lands_on_middle_tick() {
        let c = core(0, 100);
        let s = Slider::new(SliderStyle::Horizontal, true, 0);
        assert_eq!(s.tick_position(&c, 50), 15);
        assert_eq!(s.tick_position(&c, 0), 0);
        assert_eq!(s.tick_position(&c, 100), 30);
    }

    #[test]
    fn horizontal_position_is_monotonic() {
        let c = core(-50, 250);
        let s = Slider::new(SliderStyle::HorizontalWide, true, -50);
        let mut last = s.tick_position(&c, -50);
        assert_eq!(last, 0);
        for v in -49..=250 {
            let pos = s.tick_position(&c, v);
            assert!(pos >= last, "position dropped at {}", v);
            assert!(pos <= 60);
            last = pos;
        }
        assert_eq!(last, 60);
    }

    #[test]
    fn vertical_position_is_inverted() {
        let c = core(0, 100);
        let s = Slider::new(SliderStyle::Vertical, true, 0);
        assert_eq!(s.tick_position(&c, 100), 0);
        assert_eq!(s.tick_position(&c, 0), 20);
        assert_eq!(s.tick_position(&c, 25), 15);
    }

    #[test]
    fn vertical_half_tick_rounds_up() {
        // (max - v) / span * 20 = 11 / 40 * 20 = 5.5
        let c = core(-60, -20);
        let s = Slider::new(SliderStyle::Vertical, true, -60);
        assert_eq!(s.tick_position(&c, -31), 6);
    }

    #[test]
    fn vertical_position_matches_distance_from_max() {
        for style in [SliderStyle::Vertical, SliderStyle::VerticalTall] {
            let s = Slider::new(style, true, 0);
            let total = f32::from(style.total_ticks());
            for (min, max) in [(-60, -20), (-13, 87), (0, 7), (-200, 0)] {
                let c = core(min, max);
                for v in min..=max {
                    let span = (i32::from(max) - i32::from(min)) as f32;
                    let expected = libm::roundf((i32::from(max) - i32::from(v)) as f32 / span * total);
                    assert_eq!(
                        s.tick_position(&c, v),
                        expected as i32,
                        "range [{}, {}], value {}, {:?}",
                        min,
                        max,
                        v,
                        style
                    );
                }
            }
        }
    }

    #[test]
    fn full_i16_range_does_not_overflow() {
        let c = core(i16::MIN, i16::MAX);
        let s = Slider::new(SliderStyle::Horizontal, true, 0);
        assert_eq!(s.tick_position(&c, i16::MIN), 0);
        assert_eq!(s.tick_position(&c, i16::MAX), 30);
        assert_eq!(s.tick_position(&c, 0), 15);
    }

    #[test]
    fn horizontal_face_layout() {
        let mut fb = MicroOledBuffer::new();
        let c = core(0, 100);
        let s = Slider::new(SliderStyle::Horizontal, true, 0);
        s.draw_face(&c, &mut fb).unwrap();

        // 16 minor ticks of 3 px at x = 1, 3, ..., 31.
        for x in (1..32).step_by(2) {
            assert!(fb.pixel(Point::new(x, 5)));
            assert!(fb.pixel(Point::new(x, 7)));
        }
        assert!(!fb.pixel(Point::new(33, 5)));
        // Major extensions at x = 1, 11, 21, 31.
        for x in [1, 11, 21, 31] {
            assert!(fb.pixel(Point::new(x, 3)));
            assert!(fb.pixel(Point::new(x, 4)));
        }
        assert!(!fb.pixel(Point::new(3, 3)));
        assert_eq!(fb.count_lit(), 16 * 3 + 4 * 2);
    }

    #[test]
    fn vertical_face_includes_end_tick() {
        let mut fb = MicroOledBuffer::new();
        let c = core(0, 100);
        let s = Slider::new(SliderStyle::Vertical, true, 0);
        s.draw_face(&c, &mut fb).unwrap();

        // y = 1, 3, ..., 21 (end offset 22 is inclusive but even).
        for y in (1..=21).step_by(2) {
            assert!(fb.pixel(Point::new(0, y)));
            assert!(fb.pixel(Point::new(2, y)));
        }
        for y in [1, 11, 21] {
            assert!(fb.pixel(Point::new(3, y)));
            assert!(fb.pixel(Point::new(4, y)));
        }
        assert_eq!(fb.count_lit(), 11 * 3 + 3 * 2);
    }

    #[test]
    fn horizontal_pointer_shape() {
        let mut fb = MicroOledBuffer::new();
        let c = WidgetCore::new(Point::new(2, 4), 0, 100);
        let s = Slider::new(SliderStyle::Horizontal, true, 50);
        s.draw_pointer(&c, &mut fb.inverting()).unwrap();

        // tick 15 → run at x = 17..=19, y = 4, plus tip at (18, 5).
        assert!(fb.pixel(Point::new(17, 4)));
        assert!(fb.pixel(Point::new(19, 4)));
        assert!(fb.pixel(Point::new(18, 5)));
        assert_eq!(fb.count_lit(), 4);
    }

    #[test]
    fn vertical_pointer_shape() {
        let mut fb = MicroOledBuffer::new();
        let c = core(0, 100);
        let s = Slider::new(SliderStyle::VerticalTall, true, 100);
        s.draw_pointer(&c, &mut fb.inverting()).unwrap();

        assert!(fb.pixel(Point::new(7, 0)));
        assert!(fb.pixel(Point::new(7, 2)));
        assert!(fb.pixel(Point::new(6, 1)));
        assert_eq!(fb.count_lit(), 4);
    }

    #[test]
    fn pointer_drawn_twice_cancels() {
        let mut fb = MicroOledBuffer::new();
        let c = core(0, 100);
        let s = Slider::new(SliderStyle::Horizontal, true, 37);
        s.draw_face(&c, &mut fb).unwrap();
        let before = fb.clone();

        s.draw_pointer(&c, &mut fb.inverting()).unwrap();
        s.draw_pointer(&c, &mut fb.inverting()).unwrap();
        assert!(fb == before);
    }

    #[test]
    fn label_origins_per_style() {
        let c = WidgetCore::new(Point::new(10, 20), 0, 100);
        let origin = |style| Slider::new(style, true, 0).label_origin(&c);
        assert_eq!(origin(SliderStyle::Horizontal), Point::new(44, 21));
        assert_eq!(origin(SliderStyle::HorizontalWide), Point::new(10, 30));
        assert_eq!(origin(SliderStyle::Vertical), Point::new(11, 44));
        assert_eq!(origin(SliderStyle::VerticalTall), Point::new(19, 20));
    }
}
