//! Instrument widgets bound to an `i16` value range.
//!
//! A [`Widget`] is a [`WidgetCore`] (position, range, current value) plus
//! one of two variant payloads: a linear [`Slider`] or a radial [`Gauge`].
//!
//! # Redraw model
//!
//! The face is drawn once at construction. Afterwards every accepted
//! [`Widget::set_value`] call:
//!
//! 1. draws the pointer at the previously drawn value through an
//!    inverting view, which erases it;
//! 2. records the new value as the previously drawn value;
//! 3. draws the pointer again, now at the new value;
//! 4. prints the numeric label unless it is suppressed.
//!
//! Only the pointer pixels and the label field are touched, so the rest of
//! the screen is never repainted.
//!
//! # Example
//!
//! ```
//! use embedded_graphics::prelude::*;
//! use oled_widgets_rs::{MicroOledBuffer, Widget, WIDGET_STYLE1};
//!
//! let mut screen = MicroOledBuffer::new();
//! let mut slider = Widget::slider(&mut screen, Point::new(0, 0), 0, 100).unwrap();
//! let mut gauge =
//!     Widget::gauge_with_style(&mut screen, Point::new(40, 24), -50, 50, WIDGET_STYLE1).unwrap();
//!
//! slider.set_value(&mut screen, 50).unwrap();
//! gauge.set_value(&mut screen, 25).unwrap();
//! assert_eq!(slider.value(), 50);
//! ```

mod gauge;
mod slider;
mod style;

pub use gauge::{Gauge, START_ANGLE, SWEEP_ANGLE};
pub use slider::Slider;
pub use style::{
    shows_value, GaugeStyle, SliderStyle, WIDGET_NO_VALUE, WIDGET_STYLE0, WIDGET_STYLE1,
    WIDGET_STYLE2, WIDGET_STYLE3,
};

use embedded_graphics::prelude::*;

use crate::framebuffer::InvertPixels;
use crate::text::{draw_num_value, print_len};

// ── WidgetCore ───────────────────────────────────────────────────────────

/// State shared by every widget variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WidgetCore {
    x: i32,
    y: i32,
    min_value: i16,
    max_value: i16,
    /// Always within `[min_value, max_value]` after `set_value`. Bound
    /// changes do not re-clamp it.
    value: i16,
    val_len: u8,
    max_val_len: u8,
}

impl WidgetCore {
    /// Create a core at `origin` for the range `[min, max]`. The value
    /// starts at `min`.
    pub fn new(origin: Point, min: i16, max: i16) -> Self {
        let mut core = Self {
            x: origin.x,
            y: origin.y,
            min_value: min,
            max_value: max,
            value: min,
            val_len: print_len(min),
            max_val_len: 0,
        };
        core.update_max_val_len();
        core
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn min_value(&self) -> i16 {
        self.min_value
    }

    pub fn max_value(&self) -> i16 {
        self.max_value
    }

    pub fn value(&self) -> i16 {
        self.value
    }

    /// Print length of the current value.
    pub fn val_len(&self) -> u8 {
        self.val_len
    }

    /// Widest print length of any value in the range; the label field width.
    pub fn max_val_len(&self) -> u8 {
        self.max_val_len
    }

    /// Position of `value` within the range, `0.0` at the minimum and
    /// `1.0` at the maximum. A degenerate range maps everything to `0.0`.
    pub fn fraction(&self, value: i16) -> f32 {
        self.ratio(i32::from(value) - i32::from(self.min_value))
    }

    /// Position of `value` measured down from the maximum: `0.0` at the
    /// maximum and `1.0` at the minimum. A degenerate range maps everything
    /// to `0.0`.
    pub fn fraction_from_top(&self, value: i16) -> f32 {
        self.ratio(i32::from(self.max_value) - i32::from(value))
    }

    fn ratio(&self, distance: i32) -> f32 {
        let span = i32::from(self.max_value) - i32::from(self.min_value);
        if span <= 0 {
            return 0.0;
        }
        distance as f32 / span as f32
    }

    /// Store `value` if it lies within the range. Returns `false` (and
    /// changes nothing) otherwise.
    fn accept(&mut self, value: i16) -> bool {
        if value < self.min_value || value > self.max_value {
            return false;
        }
        self.value = value;
        self.val_len = print_len(value);
        true
    }

    fn update_max_val_len(&mut self) {
        self.max_val_len = print_len(self.min_value).max(print_len(self.max_value));
    }
}

// ── Widget ───────────────────────────────────────────────────────────────

/// Variant payload of a [`Widget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WidgetKind {
    Slider(Slider),
    Gauge(Gauge),
}

/// A slider or gauge drawn on a monochrome display.
///
/// The widget does not hold on to the display; every drawing operation
/// borrows it. Drawing errors from the target are propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Widget {
    core: WidgetCore,
    kind: WidgetKind,
}

impl Widget {
    /// Create a default-style slider (horizontal, 30 ticks, label shown)
    /// and draw it.
    pub fn slider<D>(display: &mut D, origin: Point, min: i16, max: i16) -> Result<Self, D::Error>
    where
        D: InvertPixels,
    {
        Self::slider_with_style(display, origin, min, max, WIDGET_STYLE0)
    }

    /// Create a slider from a style byte (`WIDGET_STYLE0..=3`, optionally
    /// `| WIDGET_NO_VALUE`) and draw it. Unknown style codes select style 0.
    pub fn slider_with_style<D>(
        display: &mut D,
        origin: Point,
        min: i16,
        max: i16,
        style: u8,
    ) -> Result<Self, D::Error>
    where
        D: InvertPixels,
    {
        let core = WidgetCore::new(origin, min, max);
        let slider = Slider::new(SliderStyle::from_code(style), shows_value(style), core.value());
        Self::build(display, core, WidgetKind::Slider(slider))
    }

    /// Create a default-style gauge (radius 15, label shown) and draw it.
    pub fn gauge<D>(display: &mut D, origin: Point, min: i16, max: i16) -> Result<Self, D::Error>
    where
        D: InvertPixels,
    {
        Self::gauge_with_style(display, origin, min, max, WIDGET_STYLE0)
    }

    /// Create a gauge from a style byte and draw it. `origin` is the dial
    /// centre. Any style code other than 0 selects the large dial.
    pub fn gauge_with_style<D>(
        display: &mut D,
        origin: Point,
        min: i16,
        max: i16,
        style: u8,
    ) -> Result<Self, D::Error>
    where
        D: InvertPixels,
    {
        let core = WidgetCore::new(origin, min, max);
        let gauge = Gauge::new(GaugeStyle::from_code(style), shows_value(style), core.value());
        Self::build(display, core, WidgetKind::Gauge(gauge))
    }

    fn build<D>(display: &mut D, core: WidgetCore, kind: WidgetKind) -> Result<Self, D::Error>
    where
        D: InvertPixels,
    {
        let mut widget = Self { core, kind };
        widget.re_draw(display)?;
        Ok(widget)
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    pub fn x(&self) -> i32 {
        self.core.x
    }

    pub fn y(&self) -> i32 {
        self.core.y
    }

    /// Move the widget. Nothing is redrawn; call [`re_draw`](Self::re_draw)
    /// on a cleared display afterwards.
    pub fn set_x(&mut self, x: i32) {
        self.core.x = x;
    }

    /// See [`set_x`](Self::set_x).
    pub fn set_y(&mut self, y: i32) {
        self.core.y = y;
    }

    pub fn min_value(&self) -> i16 {
        self.core.min_value
    }

    pub fn max_value(&self) -> i16 {
        self.core.max_value
    }

    pub fn value(&self) -> i16 {
        self.core.value
    }

    pub fn val_len(&self) -> u8 {
        self.core.val_len
    }

    pub fn max_val_len(&self) -> u8 {
        self.core.max_val_len
    }

    /// Value the pointer is currently drawn at.
    pub fn prev_value(&self) -> i16 {
        match &self.kind {
            WidgetKind::Slider(s) => s.prev_value(),
            WidgetKind::Gauge(g) => g.prev_value(),
        }
    }

    /// Replace the lower bound. The current value is not re-clamped.
    pub fn set_min_value(&mut self, min: i16) {
        self.core.min_value = min;
        self.core.update_max_val_len();
    }

    /// Replace the upper bound. The current value is not re-clamped.
    pub fn set_max_value(&mut self, max: i16) {
        self.core.max_value = max;
        self.core.update_max_val_len();
    }

    // ── Drawing ──────────────────────────────────────────────────────

    /// Set the value and redraw the pointer and label.
    ///
    /// Values outside `[min_value, max_value]` are silently ignored: the
    /// value, the drawn pointer and the display stay as they were.
    pub fn set_value<D>(&mut self, display: &mut D, value: i16) -> Result<(), D::Error>
    where
        D: InvertPixels,
    {
        if !self.core.accept(value) {
            #[cfg(feature = "defmt")]
            defmt::trace!(
                "set_value: {} outside [{}, {}], ignored",
                value,
                self.core.min_value,
                self.core.max_value
            );
            return Ok(());
        }
        self.draw(display)
    }

    /// Move the pointer from the previously drawn value to the current one
    /// and print the label.
    pub fn draw<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: InvertPixels,
    {
        self.draw_pointer(display)?;
        let value = self.core.value;
        match &mut self.kind {
            WidgetKind::Slider(s) => s.set_prev_value(value),
            WidgetKind::Gauge(g) => g.set_prev_value(value),
        }
        self.draw_pointer(display)?;

        let label = match &self.kind {
            WidgetKind::Slider(s) => s.shows_value().then(|| s.label_origin(&self.core)),
            WidgetKind::Gauge(g) => g.shows_value().then(|| g.label_origin(&self.core)),
        };
        if let Some(origin) = label {
            self.draw_num_value(display, origin, value)?;
        }
        Ok(())
    }

    /// Draw the static face (ticks, dial).
    pub fn draw_face<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: InvertPixels,
    {
        match &self.kind {
            WidgetKind::Slider(s) => s.draw_face(&self.core, display),
            WidgetKind::Gauge(g) => g.draw_face(&self.core, display),
        }
    }

    /// Toggle the pointer at the previously drawn value.
    fn draw_pointer<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: InvertPixels,
    {
        let mut inverted = display.inverting();
        match &self.kind {
            WidgetKind::Slider(s) => s.draw_pointer(&self.core, &mut inverted),
            WidgetKind::Gauge(g) => g.draw_pointer(&self.core, &mut inverted),
        }
    }

    /// Repaint the whole widget: face, an initial pointer (erased again by
    /// the following draw), then the pointer at the current value.
    ///
    /// Expects the widget's area to be blank, e.g. after clearing the
    /// display or moving the widget.
    pub fn re_draw<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: InvertPixels,
    {
        self.draw_face(display)?;
        self.draw_pointer(display)?;
        self.draw(display)
    }

    /// Print `value` at `origin`, right-justified in a field of
    /// [`max_val_len`](Self::max_val_len) characters.
    pub fn draw_num_value<D>(&self, display: &mut D, origin: Point, value: i16) -> Result<(), D::Error>
    where
        D: InvertPixels,
    {
        draw_num_value(display, origin, value, self.core.max_val_len)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
