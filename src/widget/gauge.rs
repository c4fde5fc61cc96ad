//! Radial gauge: a 240° dial with a needle.

use core::f32::consts::PI;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use super::style::GaugeStyle;
use super::WidgetCore;
use crate::primitives::{circle, segment};

/// Dial angle of the minimum value, in degrees (0° = 3 o'clock, clockwise).
pub const START_ANGLE: f32 = 150.0;
/// Angle covered by the dial between minimum and maximum.
pub const SWEEP_ANGLE: f32 = 240.0;

/// Gauge-specific state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Gauge {
    style: GaugeStyle,
    show_value: bool,
    /// Value the needle is currently drawn at.
    prev_value: i16,
}

/// Point at `radius` along `degrees` from `centre`, shifted by one pixel
/// right and down. Coordinates are truncated.
fn polar(centre: Point, degrees: f32, radius: f32) -> Point {
    let rad = degrees * (PI / 180.0);
    Point::new(
        (1.0 + centre.x as f32 + libm::cosf(rad) * radius) as i32,
        (1.0 + centre.y as f32 + libm::sinf(rad) * radius) as i32,
    )
}

impl Gauge {
    pub(crate) fn new(style: GaugeStyle, show_value: bool, initial: i16) -> Self {
        Self {
            style,
            show_value,
            prev_value: initial,
        }
    }

    pub fn style(&self) -> GaugeStyle {
        self.style
    }

    pub fn radius(&self) -> u8 {
        self.style.radius()
    }

    /// Returns `false` if the numeric label is suppressed.
    pub fn shows_value(&self) -> bool {
        self.show_value
    }

    /// Value the needle was last drawn at.
    pub fn prev_value(&self) -> i16 {
        self.prev_value
    }

    pub(crate) fn set_prev_value(&mut self, value: i16) {
        self.prev_value = value;
    }

    /// Needle angle in degrees for `value`: 150° at the minimum, 390° at
    /// the maximum.
    pub fn pointer_angle(&self, core: &WidgetCore, value: i16) -> f32 {
        START_ANGLE + SWEEP_ANGLE * core.fraction(value)
    }

    /// Draw the dial: outline, major ticks every 30° and, on the large
    /// dial, minor ticks halfway between them.
    pub(crate) fn draw_face<D>(&self, core: &WidgetCore, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let centre = core.position();
        let radius = f32::from(self.radius());

        circle(display, centre, u32::from(self.radius()))?;

        for deg in (150..=390).step_by(30) {
            let deg = deg as f32;
            segment(
                display,
                polar(centre, deg, radius / 1.5),
                polar(centre, deg, radius),
            )?;
        }

        if self.radius() > 15 {
            for deg in (165..=375).step_by(30) {
                let deg = deg as f32;
                segment(
                    display,
                    polar(centre, deg, radius / 1.3),
                    polar(centre, deg, radius),
                )?;
            }
        }
        Ok(())
    }

    /// Draw the needle for `prev_value`. `display` is expected to be an
    /// inverting view so a second call erases the first.
    pub(crate) fn draw_pointer<D>(&self, core: &WidgetCore, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let angle = self.pointer_angle(core, self.prev_value);
        let tip = polar(core.position(), angle, f32::from(self.radius()) / 1.2);
        segment(display, core.position(), tip)
    }

    /// Top-left corner of the numeric label, centred under the hub.
    pub fn label_origin(&self, core: &WidgetCore) -> Point {
        let half_field = i32::from(core.max_val_len()) * 3 - 1;
        let dy = match self.style {
            GaugeStyle::Small => 11,
            GaugeStyle::Large => 10,
        };
        Point::new(core.x() - half_field, core.y() + dy)
    }
}
