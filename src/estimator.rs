//! Elapsed time between press events.
//!
//! The estimator keeps the counter samples of the last two press events and
//! converts their difference to whole seconds. It does not try to correct for
//! counter wraparound: when the newer sample is not strictly greater than the
//! older one the result is [`ElapsedResult::Overflow`], since a single wrap
//! cannot be told apart from a counter that went backwards.

use crate::hardware::FreeRunningCounter;
use core::num::NonZeroU32;

/// Classification of the interval between two press events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ElapsedResult {
    /// Whole seconds between the two samples (sub-second remainder dropped).
    Elapsed {
        /// Elapsed seconds, floor-divided.
        seconds: u32,
    },
    /// The newer sample is not greater than the older one.
    Overflow,
}

impl ElapsedResult {
    /// Returns the elapsed seconds, or zero for [`ElapsedResult::Overflow`].
    pub fn seconds(&self) -> u32 {
        match self {
            ElapsedResult::Elapsed { seconds } => *seconds,
            ElapsedResult::Overflow => 0,
        }
    }

    /// Returns true if the interval could not be measured.
    pub fn is_overflow(&self) -> bool {
        matches!(self, ElapsedResult::Overflow)
    }
}

/// Whether the estimator has seen a press event yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EstimatorState {
    /// No press recorded. Both samples are zero.
    AwaitingFirstEvent,
    /// At least one press recorded.
    HaveBaseline,
}

/// Classifies the interval between two counter samples.
///
/// Compares before subtracting, so the subtraction never wraps.
#[inline]
pub fn classify(previous: u32, current: u32, frequency_hz: NonZeroU32) -> ElapsedResult {
    if current > previous {
        ElapsedResult::Elapsed {
            seconds: (current - previous) / frequency_hz.get(),
        }
    } else {
        ElapsedResult::Overflow
    }
}

/// Tracks counter samples of consecutive press events.
///
/// The first event is measured against a zero baseline, so it reports the
/// time since the counter started rather than being suppressed.
#[derive(Debug, Clone)]
pub struct ElapsedTimeEstimator {
    previous_event_count: u32,
    current_event_count: u32,
    frequency_hz: NonZeroU32,
    state: EstimatorState,
}

impl ElapsedTimeEstimator {
    /// Creates an estimator with both samples at zero.
    pub fn new(frequency_hz: NonZeroU32) -> Self {
        Self {
            previous_event_count: 0,
            current_event_count: 0,
            frequency_hz,
            state: EstimatorState::AwaitingFirstEvent,
        }
    }

    /// Reads the counter for a new press event and classifies the interval.
    pub fn on_press_event<C: FreeRunningCounter>(&mut self, counter: &mut C) -> ElapsedResult {
        let sample = counter.read_count();
        self.record(sample)
    }

    /// Records an already-read counter sample as the newest press event.
    pub fn record(&mut self, sample: u32) -> ElapsedResult {
        self.previous_event_count = self.current_event_count;
        self.current_event_count = sample;
        self.state = EstimatorState::HaveBaseline;

        let result = classify(
            self.previous_event_count,
            self.current_event_count,
            self.frequency_hz,
        );

        match result {
            ElapsedResult::Elapsed { seconds } => {
                debug!(
                    "press at count {} after {} s",
                    self.current_event_count, seconds
                );
            }
            ElapsedResult::Overflow => {
                warn!(
                    "counter went from {} to {}, treating as overflow",
                    self.previous_event_count, self.current_event_count
                );
            }
        }

        result
    }

    /// Returns the counter sample of the event before the latest one.
    pub fn previous_event_count(&self) -> u32 {
        self.previous_event_count
    }

    /// Returns the counter sample of the latest event.
    pub fn current_event_count(&self) -> u32 {
        self.current_event_count
    }

    /// Returns the counter frequency used for conversion.
    pub fn frequency_hz(&self) -> NonZeroU32 {
        self.frequency_hz
    }

    /// Returns whether any event has been recorded.
    pub fn state(&self) -> EstimatorState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hz(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    #[test]
    fn classify_floors_partial_seconds() {
        assert_eq!(classify(0, 32_767, hz(32_768)), ElapsedResult::Elapsed { seconds: 0 });
        assert_eq!(classify(0, 32_768, hz(32_768)), ElapsedResult::Elapsed { seconds: 1 });
        assert_eq!(classify(100, 100 + 3 * 32_768 - 1, hz(32_768)).seconds(), 2);
    }

    #[test]
    fn classify_flags_equal_and_backwards_samples() {
        assert_eq!(classify(5, 5, hz(32_768)), ElapsedResult::Overflow);
        assert_eq!(classify(u32::MAX, 0, hz(32_768)), ElapsedResult::Overflow);
        assert_eq!(classify(98_304, 50_000, hz(32_768)).seconds(), 0);
    }

    #[test]
    fn classify_handles_full_counter_range() {
        assert_eq!(classify(0, u32::MAX, hz(1)).seconds(), u32::MAX);
        assert_eq!(classify(0, u32::MAX, hz(32_768)).seconds(), 131_071);
    }

    #[test]
    fn record_shifts_samples() {
        let mut estimator = ElapsedTimeEstimator::new(hz(32_768));
        assert_eq!(estimator.state(), EstimatorState::AwaitingFirstEvent);

        estimator.record(10);
        assert_eq!(estimator.state(), EstimatorState::HaveBaseline);
        assert_eq!(estimator.previous_event_count(), 0);
        assert_eq!(estimator.current_event_count(), 10);

        estimator.record(20);
        assert_eq!(estimator.previous_event_count(), 10);
        assert_eq!(estimator.current_event_count(), 20);
    }

    #[test]
    fn first_event_measures_from_zero() {
        let mut estimator = ElapsedTimeEstimator::new(hz(32_768));
        assert_eq!(estimator.record(5 * 32_768), ElapsedResult::Elapsed { seconds: 5 });
    }

    #[test]
    fn first_event_at_zero_is_overflow() {
        let mut estimator = ElapsedTimeEstimator::new(hz(32_768));
        assert!(estimator.record(0).is_overflow());
    }
}
