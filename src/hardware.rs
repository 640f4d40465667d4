//! Hardware abstraction traits for platform-agnostic press timing.
//!
//! Implement these for your board's GPIO, delay and counter peripherals. All
//! reads are treated as infallible once the peripheral has been initialized;
//! handle any HAL error inside the implementation.

/// Electrical level of a digital pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Pin reads low.
    Low,
    /// Pin reads high.
    High,
}

impl Level {
    /// Returns the opposite level.
    #[inline]
    pub const fn inverted(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

/// Trait for abstracting the button input pin.
pub trait DigitalInput {
    /// Returns the instantaneous level of the pin (electrically filtered only).
    fn read_level(&mut self) -> Level;
}

/// Trait for abstracting the status LED.
pub trait IndicatorLed {
    /// Turns the LED on.
    fn turn_on(&mut self);

    /// Turns the LED off.
    fn turn_off(&mut self);
}

/// Trait for abstracting a blocking millisecond delay.
pub trait DelayMs {
    /// Blocks for approximately `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Trait for abstracting a free-running 32-bit counter.
///
/// The counter increments at a fixed frequency and wraps to zero after
/// `u32::MAX`.
pub trait FreeRunningCounter {
    /// Returns the current counter value.
    fn read_count(&mut self) -> u32;
}

/// Trait for abstracting one 16-bit stage of a cascaded counter.
pub trait CounterStage {
    /// Returns the current value of this stage.
    fn read_stage(&mut self) -> u16;
}

/// Combines the two halves of a cascaded counter into its logical value.
#[inline]
pub const fn combine_halves(low: u16, high: u16) -> u32 {
    ((high as u32) << 16) | (low as u32)
}

/// A 32-bit counter built from two cascaded 16-bit stages.
///
/// The high stage increments once per full cycle of the low stage. Because
/// the stages are separate registers, [`read_count`](FreeRunningCounter::read_count)
/// samples the high stage on both sides of the low stage and retries when a
/// low-stage rollover happened in between.
pub struct CascadedCounter<Lo: CounterStage, Hi: CounterStage> {
    low: Lo,
    high: Hi,
}

impl<Lo: CounterStage, Hi: CounterStage> CascadedCounter<Lo, Hi> {
    /// Creates a counter from its low and high stages.
    pub fn new(low: Lo, high: Hi) -> Self {
        Self { low, high }
    }

    /// Releases the underlying stages.
    pub fn release(self) -> (Lo, Hi) {
        (self.low, self.high)
    }
}

impl<Lo: CounterStage, Hi: CounterStage> FreeRunningCounter for CascadedCounter<Lo, Hi> {
    fn read_count(&mut self) -> u32 {
        loop {
            let high = self.high.read_stage();
            let low = self.low.read_stage();
            if self.high.read_stage() == high {
                return combine_halves(low, high);
            }
            trace!("cascaded counter rolled over during read, retrying");
        }
    }
}
