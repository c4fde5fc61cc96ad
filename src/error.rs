//! Failures while driving the MicroOLED panel.
//!
//! Widget drawing is generic over the draw target and propagates the
//! target's own error type, so the only crate-level error is the one
//! raised while talking to the panel.

use display_interface::DisplayError;

/// Why a call on [`OledDriver`](crate::OledDriver) failed.
///
/// Bus failures reach us already wrapped by `ssd1306` as a
/// [`DisplayError`], so the enum does not carry the I2C error type.
#[derive(Debug)]
pub enum OledError {
    /// Writing a frame to the panel failed on the bus.
    Display(DisplayError),
    /// The panel did not accept the power-up command sequence.
    InitializationFailed,
    /// [`present()`](crate::OledDriver::present) was called before
    /// [`init()`](crate::OledDriver::init) succeeded.
    NotInitialized,
}

impl From<DisplayError> for OledError {
    fn from(e: DisplayError) -> Self {
        OledError::Display(e)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OledError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            OledError::Display(_e) => defmt::write!(f, "MicroOLED bus write failed"),
            OledError::InitializationFailed => defmt::write!(f, "MicroOLED did not initialise"),
            OledError::NotInitialized => defmt::write!(f, "frame presented before init"),
        }
    }
}
