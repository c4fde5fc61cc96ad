//! Numeric label layout and rendering.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle, MonoTextStyleBuilder},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::Rectangle,
    text::{Baseline, Text},
};
use heapless::String;

/// Horizontal advance of one label character in pixels.
pub const CHAR_WIDTH: i32 = 6;

/// Number of characters `value` occupies when printed in decimal,
/// including the leading minus sign for negatives.
///
/// # Examples
///
/// ```
/// use oled_widgets_rs::print_len;
///
/// assert_eq!(print_len(0), 1);
/// assert_eq!(print_len(-9999), 5);
/// assert_eq!(print_len(-10000), 6);
/// assert_eq!(print_len(10000), 5);
/// ```
pub fn print_len(value: i16) -> u8 {
    if value >= 10_000 {
        return 5;
    }
    if value <= -10_000 {
        return 6;
    }

    let (mut count, magnitude) = if value >= 0 {
        (1, value)
    } else {
        (2, -value)
    };

    let mut threshold: i16 = 10;
    while magnitude >= threshold {
        count += 1;
        // |value| < 10000 here, so this stops at 10000 without overflowing.
        threshold *= 10;
    }
    count
}

fn label_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .background_color(BinaryColor::Off)
        .build()
}

/// Longest decimal rendering of an `i16` (`-32768`).
pub const MAX_PRINT_LEN: usize = 6;

/// Draw `value` right-justified in a field `field_width` characters wide,
/// with its top-left corner at `origin`.
///
/// The padding cells are filled with the background colour, so a shorter
/// value fully replaces a longer one printed at the same place. A field
/// narrower than the value grows to fit it.
pub fn draw_num_value<D>(
    display: &mut D,
    origin: Point,
    value: i16,
    field_width: u8,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let padding = i32::from(field_width.saturating_sub(print_len(value)));
    if padding > 0 {
        let cell = FONT_6X10.character_size;
        let area = Rectangle::new(origin, Size::new(padding as u32 * cell.width, cell.height));
        display.fill_solid(&area, BinaryColor::Off)?;
    }

    let mut digits: String<MAX_PRINT_LEN> = String::new();
    let written = write!(digits, "{}", value);
    debug_assert!(written.is_ok(), "{} does not fit the label buffer", value);

    let digits_origin = origin + Point::new(padding * CHAR_WIDTH, 0);
    Text::with_baseline(digits.as_str(), digits_origin, label_style(), Baseline::Top)
        .draw(display)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::MicroOledBuffer;

    fn formatted_len(value: i16) -> usize {
        let mut buf: String<8> = String::new();
        write!(buf, "{}", value).unwrap();
        buf.len()
    }

    #[test]
    fn print_len_matches_decimal_formatting() {
        for value in i16::MIN..=i16::MAX {
            assert_eq!(print_len(value) as usize, formatted_len(value), "value {}", value);
        }
    }

    #[test]
    fn print_len_boundaries() {
        assert_eq!(print_len(9), 1);
        assert_eq!(print_len(10), 2);
        assert_eq!(print_len(-1), 2);
        assert_eq!(print_len(-10), 3);
        assert_eq!(print_len(9999), 4);
        assert_eq!(print_len(-9999), 5);
        assert_eq!(print_len(10000), 5);
        assert_eq!(print_len(-10000), 6);
        assert_eq!(print_len(i16::MAX), 5);
        assert_eq!(print_len(i16::MIN), 6);
    }

    #[test]
    fn padded_value_covers_whole_field() {
        let mut fb = MicroOledBuffer::new();
        // Something to be overwritten by the padding.
        fb.set_pixel(Point::new(2, 3), true);

        draw_num_value(&mut fb, Point::zero(), 7, 3).unwrap();

        // The two padding cells are background only.
        for x in 0..2 * CHAR_WIDTH {
            for y in 0..10 {
                assert!(!fb.pixel(Point::new(x, y)), "pixel ({}, {}) lit", x, y);
            }
        }
        // The digit itself lights something in the third cell.
        let lit_in_digit = (2 * CHAR_WIDTH..3 * CHAR_WIDTH)
            .flat_map(|x| (0..10).map(move |y| Point::new(x, y)))
            .filter(|p| fb.pixel(*p))
            .count();
        assert!(lit_in_digit > 0);
        // Nothing beyond the field.
        assert!(!fb.pixel(Point::new(3 * CHAR_WIDTH + 1, 4)));
    }

    #[test]
    fn wide_field_still_draws_digits() {
        let mut fb = MicroOledBuffer::new();
        // Something inside the padding that must be blanked.
        fb.set_pixel(Point::new(10, 5), true);

        draw_num_value(&mut fb, Point::zero(), 123, 10).unwrap();

        let lit_left_of_digits = (0..7 * CHAR_WIDTH)
            .flat_map(|x| (0..10).map(move |y| Point::new(x, y)))
            .filter(|p| fb.pixel(*p))
            .count();
        assert_eq!(lit_left_of_digits, 0);
        assert!(fb.count_lit() > 0);

        let mut digits_only = MicroOledBuffer::new();
        draw_num_value(&mut digits_only, Point::new(7 * CHAR_WIDTH, 0), 123, 3).unwrap();
        assert!(fb == digits_only);
    }

    #[test]
    fn narrow_field_grows_to_fit_value() {
        let mut fb = MicroOledBuffer::new();
        draw_num_value(&mut fb, Point::zero(), i16::MIN, 0).unwrap();

        let mut exact = MicroOledBuffer::new();
        draw_num_value(&mut exact, Point::zero(), i16::MIN, MAX_PRINT_LEN as u8).unwrap();
        assert!(fb == exact);
        assert!(fb.count_lit() > 0);
    }

    #[test]
    fn shorter_value_replaces_longer_one() {
        let mut reference = MicroOledBuffer::new();
        draw_num_value(&mut reference, Point::new(4, 4), 5, 3).unwrap();

        let mut fb = MicroOledBuffer::new();
        draw_num_value(&mut fb, Point::new(4, 4), -88, 3).unwrap();
        draw_num_value(&mut fb, Point::new(4, 4), 5, 3).unwrap();

        assert!(fb == reference);
    }
}
