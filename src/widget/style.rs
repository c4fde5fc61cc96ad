//! Style byte decoding.
//!
//! A style byte combines one of the `WIDGET_STYLE*` codes with the optional
//! [`WIDGET_NO_VALUE`] bit, e.g. `WIDGET_STYLE2 | WIDGET_NO_VALUE`.

/// Default style: small horizontal slider / small gauge.
pub const WIDGET_STYLE0: u8 = 0;
/// Large horizontal slider / large gauge.
pub const WIDGET_STYLE1: u8 = 1;
/// Like style 0, but vertical (sliders only).
pub const WIDGET_STYLE2: u8 = 2;
/// Like style 1, but vertical (sliders only).
pub const WIDGET_STYLE3: u8 = 3;
/// Suppress the numeric value label.
pub const WIDGET_NO_VALUE: u8 = 0x80;

/// Returns `true` unless the style byte carries [`WIDGET_NO_VALUE`].
pub fn shows_value(style: u8) -> bool {
    style & WIDGET_NO_VALUE == 0
}

/// Slider layout variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SliderStyle {
    /// Horizontal, 30 ticks, label to the right.
    #[default]
    Horizontal,
    /// Horizontal, 60 ticks, label below.
    HorizontalWide,
    /// Vertical, 20 ticks, label below.
    Vertical,
    /// Vertical, 40 ticks, label to the right.
    VerticalTall,
}

impl SliderStyle {
    /// Decode the style code of a style byte. Unknown codes fall back to
    /// [`SliderStyle::Horizontal`].
    pub fn from_code(style: u8) -> Self {
        match style & !WIDGET_NO_VALUE {
            WIDGET_STYLE1 => SliderStyle::HorizontalWide,
            WIDGET_STYLE2 => SliderStyle::Vertical,
            WIDGET_STYLE3 => SliderStyle::VerticalTall,
            _code => {
                #[cfg(feature = "defmt")]
                if _code != WIDGET_STYLE0 {
                    defmt::trace!("unknown slider style {}, using style 0", _code);
                }
                SliderStyle::Horizontal
            }
        }
    }

    /// Numeric style code (0–3).
    pub fn code(self) -> u8 {
        match self {
            SliderStyle::Horizontal => WIDGET_STYLE0,
            SliderStyle::HorizontalWide => WIDGET_STYLE1,
            SliderStyle::Vertical => WIDGET_STYLE2,
            SliderStyle::VerticalTall => WIDGET_STYLE3,
        }
    }

    /// Track length in pixels between the first and last pointer position.
    pub fn total_ticks(self) -> u8 {
        match self {
            SliderStyle::Horizontal => 30,
            SliderStyle::HorizontalWide => 60,
            SliderStyle::Vertical => 20,
            SliderStyle::VerticalTall => 40,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, SliderStyle::Horizontal | SliderStyle::HorizontalWide)
    }
}

/// Gauge dial sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GaugeStyle {
    /// Radius 15, major ticks only.
    #[default]
    Small,
    /// Radius 23, major and minor ticks.
    Large,
}

impl GaugeStyle {
    /// Decode the style code of a style byte. Code 0 is the small dial,
    /// every other code selects the large one.
    pub fn from_code(style: u8) -> Self {
        if style & !WIDGET_NO_VALUE == WIDGET_STYLE0 {
            GaugeStyle::Small
        } else {
            GaugeStyle::Large
        }
    }

    pub fn code(self) -> u8 {
        match self {
            GaugeStyle::Small => WIDGET_STYLE0,
            GaugeStyle::Large => WIDGET_STYLE1,
        }
    }

    /// Dial radius in pixels.
    pub fn radius(self) -> u8 {
        match self {
            GaugeStyle::Small => 15,
            GaugeStyle::Large => 23,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_value_bit_is_detected() {
        assert!(shows_value(WIDGET_STYLE1));
        assert!(!shows_value(WIDGET_STYLE1 | WIDGET_NO_VALUE));
        assert!(!shows_value(WIDGET_NO_VALUE));
    }

    #[test]
    fn slider_codes_decode() {
        assert_eq!(SliderStyle::from_code(0), SliderStyle::Horizontal);
        assert_eq!(SliderStyle::from_code(1), SliderStyle::HorizontalWide);
        assert_eq!(SliderStyle::from_code(2), SliderStyle::Vertical);
        assert_eq!(SliderStyle::from_code(3 | WIDGET_NO_VALUE), SliderStyle::VerticalTall);
    }

    #[test]
    fn unknown_slider_code_falls_back_to_default() {
        assert_eq!(SliderStyle::from_code(4), SliderStyle::Horizontal);
        assert_eq!(SliderStyle::from_code(0x7F), SliderStyle::Horizontal);
    }

    #[test]
    fn slider_tick_counts() {
        assert_eq!(SliderStyle::Horizontal.total_ticks(), 30);
        assert_eq!(SliderStyle::HorizontalWide.total_ticks(), 60);
        assert_eq!(SliderStyle::Vertical.total_ticks(), 20);
        assert_eq!(SliderStyle::VerticalTall.total_ticks(), 40);
    }

    #[test]
    fn slider_code_round_trips() {
        for code in 0..4 {
            assert_eq!(SliderStyle::from_code(code).code(), code);
        }
    }

    #[test]
    fn gauge_codes_decode() {
        assert_eq!(GaugeStyle::from_code(0), GaugeStyle::Small);
        assert_eq!(GaugeStyle::from_code(WIDGET_NO_VALUE), GaugeStyle::Small);
        assert_eq!(GaugeStyle::from_code(1), GaugeStyle::Large);
        assert_eq!(GaugeStyle::from_code(3), GaugeStyle::Large);
        assert_eq!(GaugeStyle::Small.radius(), 15);
        assert_eq!(GaugeStyle::Large.radius(), 23);
    }
}
