//! Press-interval trait implementations for NUCLEO-F072RB peripherals.

use embedded_hal::digital::v2::{InputPin, OutputPin};
use press_interval::{DigitalInput, FreeRunningCounter, IndicatorLed, Level, ReportSink};
use rtt_target::rprintln;
use stm32f0xx_hal::pac;

/// Button input wrapper for any HAL input pin
pub struct ButtonPin<P: InputPin> {
    pin: P,
}

impl<P: InputPin> ButtonPin<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> DigitalInput for ButtonPin<P> {
    fn read_level(&mut self) -> Level {
        // GPIO reads on this part cannot fail; treat an error as released.
        match self.pin.is_high() {
            Ok(high) => Level::from(high),
            Err(_) => Level::High,
        }
    }
}

/// Status LED wrapper for any HAL output pin (active high)
pub struct StatusLed<P: OutputPin> {
    pin: P,
}

impl<P: OutputPin> StatusLed<P> {
    /// Wraps the pin and turns the LED off.
    pub fn new(pin: P) -> Self {
        let mut led = Self { pin };
        led.turn_off();
        led
    }
}

impl<P: OutputPin> IndicatorLed for StatusLed<P> {
    fn turn_on(&mut self) {
        let _ = self.pin.set_high();
    }

    fn turn_off(&mut self) {
        let _ = self.pin.set_low();
    }
}

/// TIM2 running as a free 32-bit up-counter
///
/// TIM2 is the only 32-bit timer on the F072, so it stands in for a cascaded
/// pair of 16-bit stages: its count wraps at 2^32 like the combined value.
pub struct Tim2Counter {
    tim: pac::TIM2,
}

impl Tim2Counter {
    /// Starts TIM2 counting at `timer_clock_hz / (prescaler + 1)`.
    ///
    /// The TIM2 clock must already be enabled in RCC.
    pub fn start(tim: pac::TIM2, prescaler: u16) -> Self {
        tim.cr1.modify(|_, w| w.cen().clear_bit());
        tim.psc.write(|w| unsafe { w.bits(prescaler as u32) });
        tim.arr.write(|w| unsafe { w.bits(u32::MAX) });
        tim.cnt.write(|w| unsafe { w.bits(0) });
        // Update event loads the prescaler.
        tim.egr.write(|w| w.ug().set_bit());
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Self { tim }
    }

    /// Stops the timer and returns the peripheral.
    pub fn free(self) -> pac::TIM2 {
        self.tim.cr1.modify(|_, w| w.cen().clear_bit());
        self.tim
    }
}

impl FreeRunningCounter for Tim2Counter {
    fn read_count(&mut self) -> u32 {
        self.tim.cnt.read().bits()
    }
}

/// Report sink that prints each line over RTT
pub struct RttSink;

impl ReportSink for RttSink {
    fn write_line(&mut self, line: &str) {
        rprintln!("{}", line);
    }
}
