#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`DebounceSampler`**: Blocking debouncer that reports one event per press-and-release gesture
//! - **`ElapsedTimeEstimator`**: Converts counter samples of consecutive presses into whole seconds
//! - **`ElapsedResult`**: Either an elapsed time or an overflow (counter did not move forward)
//! - **`PressTimer`**: Runs the sample → estimate → report loop over your hardware
//! - **`TimingConfig`**: Sampling period, debounce threshold, counter frequency and button polarity
//! - **`DigitalInput`**, **`DelayMs`**, **`FreeRunningCounter`**, **`ReportSink`**: Traits to implement for your board
//! - **`CascadedCounter`**: Builds a 32-bit counter from two cascaded 16-bit stages
//! - **`halt`** / **`OrHalt`**: Terminal handling for failed peripheral initialization
//!
//! Counter arithmetic is integer-only. Intervals are floor-divided to whole
//! seconds, and a sample that is not strictly greater than the previous one
//! is reported as an overflow instead of being corrected.

#[macro_use]
mod logging;

pub mod config;
pub mod hardware;
pub mod debounce;
pub mod estimator;
pub mod report;
pub mod press_timer;
pub mod halt;

pub use config::{
    COUNTER_FREQUENCY_HZ, ConfigError, DEBOUNCE_THRESHOLD_TICKS, SAMPLE_PERIOD_MS, TimingConfig,
};
pub use hardware::{
    CascadedCounter, CounterStage, DelayMs, DigitalInput, FreeRunningCounter, IndicatorLed, Level,
    combine_halves,
};
pub use debounce::{DebounceSampler, SampleOutcome, SamplerState};
pub use estimator::{ElapsedResult, ElapsedTimeEstimator, EstimatorState, classify};
pub use report::{OVERFLOW_MESSAGE, ReportLine, ReportSink, format_result};
pub use press_timer::PressTimer;
pub use halt::{OrHalt, enter_halt_state, halt};
