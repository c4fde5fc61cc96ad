//! SSD1306 64×48 driver wrapper in async buffered graphics mode.
//!
//! [`OledDriver`] manages the panel lifecycle: construction without I2C
//! traffic, explicit async initialisation, and presenting a
//! [`FrameBuffer`](crate::FrameBuffer) that the widgets were drawn into.

use display_interface_i2c::I2CInterface;
use embedded_hal_async::i2c::I2c;
use ssd1306::{
    mode::BufferedGraphicsModeAsync, prelude::*, I2CDisplayInterface, Ssd1306Async,
};

use crate::config::DisplayConfig;
use crate::error::OledError;
use crate::framebuffer::MicroOledBuffer;

/// Concrete display type used internally by [`OledDriver`].
type Display<I2C> = Ssd1306Async<
    I2CInterface<I2C>,
    DisplaySize64x48,
    BufferedGraphicsModeAsync<DisplaySize64x48>,
>;

/// Async driver for an SSD1306 64×48 OLED (MicroOLED) over I2C.
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`] — constructs the driver without any I2C traffic.
/// 2. [`OledDriver::init()`] — sends the SSD1306 initialisation sequence.
/// 3. Draw widgets into a [`MicroOledBuffer`].
/// 4. [`OledDriver::present()`] — copies the buffer and flushes it.
///
/// # Example
///
/// ```no_run
/// use embedded_graphics::prelude::*;
/// use oled_widgets_rs::{DisplayConfig, MicroOledBuffer, OledDriver, Widget};
///
/// # async fn example(i2c: impl embedded_hal_async::i2c::I2c) {
/// let mut oled = OledDriver::new(i2c, DisplayConfig::default());
/// oled.init().await.unwrap();
///
/// let mut screen = MicroOledBuffer::new();
/// let mut gauge = Widget::gauge(&mut screen, Point::new(32, 20), 0, 100).unwrap();
/// gauge.set_value(&mut screen, 75).unwrap();
/// oled.present(&screen).await.unwrap();
/// # }
/// ```
pub struct OledDriver<I2C> {
    display: Display<I2C>,
    /// Set to `true` after a successful `init()` call.
    initialized: bool,
}

impl<I2C> OledDriver<I2C>
where
    I2C: I2c,
{
    /// Construct an uninitialised driver.
    ///
    /// No I2C traffic is generated. You **must** call [`init()`](Self::init)
    /// before presenting frames.
    pub fn new(i2c: I2C, config: DisplayConfig) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, config.address);
        let rotation = if config.rotate_180 {
            DisplayRotation::Rotate180
        } else {
            DisplayRotation::Rotate0
        };
        let display =
            Ssd1306Async::new(interface, DisplaySize64x48, rotation).into_buffered_graphics_mode();

        Self {
            display,
            initialized: false,
        }
    }

    /// Initialise the SSD1306 hardware.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::InitializationFailed`] if the display does not
    /// respond.
    pub async fn init(&mut self) -> Result<(), OledError> {
        self.display
            .init()
            .await
            .map_err(|_| OledError::InitializationFailed)?;
        self.initialized = true;

        #[cfg(feature = "defmt")]
        defmt::info!("MicroOLED initialised");

        Ok(())
    }

    /// Check whether the display has been successfully initialised.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Copy `frame` into the SSD1306 buffer and transfer it to the panel.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::NotInitialized`] if [`init()`](Self::init) has
    /// not succeeded, or [`OledError::Display`] on a bus-level failure.
    pub async fn present(&mut self, frame: &MicroOledBuffer) -> Result<(), OledError> {
        if !self.initialized {
            #[cfg(feature = "defmt")]
            defmt::warn!("present called before init");
            return Err(OledError::NotInitialized);
        }
        frame.blit(&mut self.display)?;
        self.display.flush().await?;
        Ok(())
    }
}
