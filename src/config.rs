//! Timing configuration for debouncing and counter conversion.

use crate::hardware::Level;
use core::num::NonZeroU32;

/// Sampling period of the debounce poll, in milliseconds.
pub const SAMPLE_PERIOD_MS: u32 = 1;

/// Number of sampling periods a level must hold before it is accepted.
pub const DEBOUNCE_THRESHOLD_TICKS: u32 = 80;

/// Frequency of the free-running counter (32.768 kHz watch crystal).
pub const COUNTER_FREQUENCY_HZ: u32 = 32_768;

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Sample period of zero milliseconds.
    ZeroSamplePeriod,

    /// Debounce threshold of zero ticks.
    ZeroDebounceThreshold,

    /// Counter frequency of zero hertz.
    ZeroCounterFrequency,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroSamplePeriod => {
                write!(f, "sample period must be at least 1 ms")
            }
            ConfigError::ZeroDebounceThreshold => {
                write!(f, "debounce threshold must be at least 1 tick")
            }
            ConfigError::ZeroCounterFrequency => {
                write!(f, "counter frequency must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Fixed timing parameters of a press timer.
///
/// These are design constants rather than runtime settings; boards only
/// change them when their counter runs from a different clock or their
/// button is wired active-high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    sample_period_ms: u32,
    debounce_threshold_ticks: u32,
    counter_frequency_hz: NonZeroU32,
    pressed_level: Level,
}

impl TimingConfig {
    /// 1 ms sampling, 80-tick debounce, 32768 Hz counter, active-low button.
    pub const DEFAULT: Self = Self {
        sample_period_ms: SAMPLE_PERIOD_MS,
        debounce_threshold_ticks: DEBOUNCE_THRESHOLD_TICKS,
        counter_frequency_hz: match NonZeroU32::new(COUNTER_FREQUENCY_HZ) {
            Some(hz) => hz,
            None => panic!("counter frequency must be non-zero"),
        },
        pressed_level: Level::Low,
    };

    /// Creates a validated configuration.
    ///
    /// # Returns
    /// * `Ok(config)` - All parameters are non-zero
    /// * `Err` - The first zero parameter found
    pub const fn new(
        sample_period_ms: u32,
        debounce_threshold_ticks: u32,
        counter_frequency_hz: u32,
        pressed_level: Level,
    ) -> Result<Self, ConfigError> {
        if sample_period_ms == 0 {
            return Err(ConfigError::ZeroSamplePeriod);
        }
        if debounce_threshold_ticks == 0 {
            return Err(ConfigError::ZeroDebounceThreshold);
        }
        let counter_frequency_hz = match NonZeroU32::new(counter_frequency_hz) {
            Some(hz) => hz,
            None => return Err(ConfigError::ZeroCounterFrequency),
        };

        Ok(Self {
            sample_period_ms,
            debounce_threshold_ticks,
            counter_frequency_hz,
            pressed_level,
        })
    }

    /// Returns the debounce sampling period in milliseconds.
    pub const fn sample_period_ms(&self) -> u32 {
        self.sample_period_ms
    }

    /// Returns the number of stable samples required to accept a level.
    pub const fn debounce_threshold_ticks(&self) -> u32 {
        self.debounce_threshold_ticks
    }

    /// Returns the counter frequency in hertz.
    pub const fn counter_frequency_hz(&self) -> NonZeroU32 {
        self.counter_frequency_hz
    }

    /// Returns the pin level that means the button is held down.
    pub const fn pressed_level(&self) -> Level {
        self.pressed_level
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
