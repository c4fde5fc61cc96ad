//! Panel configuration.

use embedded_graphics::prelude::*;

/// Visible area of the SparkFun MicroOLED in pixels.
pub const MICRO_OLED_SIZE: Size = Size::new(64, 48);

/// Configuration for [`OledDriver`](crate::OledDriver).
///
/// [`DisplayConfig::default()`] matches the SparkFun MicroOLED breakout
/// with its address jumper in the factory position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// 7-bit I2C device address (`0x3D` or `0x3C`). Default: `0x3D`.
    pub address: u8,
    /// Mount the panel upside down. Default: `false`.
    pub rotate_180: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            address: 0x3D,
            rotate_180: false,
        }
    }
}

impl DisplayConfig {
    /// Panel size in pixels. Rotation does not change it.
    pub fn panel_size(&self) -> Size {
        MICRO_OLED_SIZE
    }
}
