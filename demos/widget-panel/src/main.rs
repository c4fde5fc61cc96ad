//! Widget panel demo
//!
//! Drives one vertical slider and one small gauge on a SparkFun MicroOLED
//! through [`OledDriver`]. Both widgets sweep their range back and forth so
//! pointer erase, label repaint and frame presentation can be checked on
//! real hardware.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                    |
//! |-----------|------------|--------------------------|
//! | I2C0 SDA  | GP4        |                          |
//! | I2C0 SCL  | GP5        |                          |
//! | OLED VCC  | 3V3        |                          |
//! | OLED GND  | GND        |                          |
//! | OLED D/C  | 3V3        | selects address `0x3D`   |
//!
//! # Layout
//!
//! | Widget | Origin    | Range     | Style                 |
//! |--------|-----------|-----------|-----------------------|
//! | Slider | (0, 0)    | 0–100     | `WIDGET_STYLE2`, 20 ticks, label below |
//! | Gauge  | (46, 17)  | -40–85    | `WIDGET_STYLE0`, radius 15, label inside |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use embedded_graphics::prelude::*;

use oled_widgets_rs::{
    DisplayConfig, MicroOledBuffer, OledDriver, Widget, WIDGET_STYLE0, WIDGET_STYLE2,
};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

const SLIDER_MIN: i16 = 0;
const SLIDER_MAX: i16 = 100;
const GAUGE_MIN: i16 = -40;
const GAUGE_MAX: i16 = 85;

/// Step `value` by `step`, reversing direction at either bound.
fn bounce(value: &mut i16, step: &mut i16, min: i16, max: i16) {
    let next = *value + *step;
    if next > max || next < min {
        *step = -*step;
    }
    *value += *step;
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Widget panel demo starting");

    // --- I2C bus (GP4 = SDA, GP5 = SCL) ---
    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_5, // SCL
        p.PIN_4, // SDA
        Irqs,
        i2c::Config::default(),
    );

    let mut oled = OledDriver::new(i2c, DisplayConfig::default());
    oled.init().await.expect("OLED init failed");

    // Drawing into the frame buffer cannot fail.
    let mut screen = MicroOledBuffer::new();
    let mut level = Widget::slider_with_style(
        &mut screen,
        Point::new(0, 0),
        SLIDER_MIN,
        SLIDER_MAX,
        WIDGET_STYLE2,
    )
    .expect("slider draw failed");
    let mut temp = Widget::gauge_with_style(
        &mut screen,
        Point::new(46, 17),
        GAUGE_MIN,
        GAUGE_MAX,
        WIDGET_STYLE0,
    )
    .expect("gauge draw failed");

    let (mut level_value, mut level_step) = (SLIDER_MIN, 1);
    let (mut temp_value, mut temp_step) = (GAUGE_MIN, 3);

    loop {
        level.set_value(&mut screen, level_value).ok();
        temp.set_value(&mut screen, temp_value).ok();

        if let Err(e) = oled.present(&screen).await {
            warn!("present failed: {}", e);
        }

        bounce(&mut level_value, &mut level_step, SLIDER_MIN, SLIDER_MAX);
        bounce(&mut temp_value, &mut temp_step, GAUGE_MIN, GAUGE_MAX);

        Timer::after(Duration::from_millis(33)).await; // ~30 Hz
    }
}
