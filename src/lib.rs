//! Slider and gauge widgets for the SSD1306 64×48 MicroOLED.
//!
//! This crate provides [`Widget`], an instrument-style control (linear
//! slider or radial gauge) bound to an `i16` range. Widgets draw their face
//! once and afterwards only move their pointer, erasing it by drawing it
//! again through an inverting view of a [`FrameBuffer`]. [`OledDriver`]
//! pushes the finished frame to the panel.
//!
//! # Quick Start
//!
//! ```ignore
//! use oled_widgets_rs::{DisplayConfig, MicroOledBuffer, OledDriver, Widget, WIDGET_STYLE2};
//!
//! let mut oled = OledDriver::new(i2c, DisplayConfig::default());
//! oled.init().await?;
//!
//! let mut screen = MicroOledBuffer::new();
//! let mut level = Widget::slider_with_style(&mut screen, Point::new(0, 0), 0, 255, WIDGET_STYLE2)?;
//!
//! loop {
//!     level.set_value(&mut screen, read_level())?;
//!     oled.present(&screen).await?;
//! }
//! ```
//!
//! `demos/widget-panel` runs a slider and a gauge on an RP2350 board.
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`](https://docs.rs/defmt).

#![no_std]

pub mod config;
pub mod driver;
pub mod error;
pub mod framebuffer;
pub mod primitives;
pub mod text;
pub mod widget;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use config::{DisplayConfig, MICRO_OLED_SIZE};
pub use driver::OledDriver;
pub use error::OledError;
pub use framebuffer::{FrameBuffer, InvertPixels, Inverting, MicroOledBuffer};
pub use text::{draw_num_value, print_len};
pub use widget::{
    Gauge, GaugeStyle, Slider, SliderStyle, Widget, WidgetCore, WidgetKind, WIDGET_NO_VALUE,
    WIDGET_STYLE0, WIDGET_STYLE1, WIDGET_STYLE2, WIDGET_STYLE3,
};
