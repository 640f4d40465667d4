//! Blocking button debouncer.
//!
//! Provides [`DebounceSampler`], which turns raw pin samples into a single
//! "pressed and released" gesture once both edges have stopped bouncing.
//!
//! A press is confirmed after the pressed level has been read on more than
//! `threshold` consecutive samples. The sampler then waits for the level to
//! leave the pressed state and confirms the release after `threshold`
//! consecutive released samples. A pressed reading during release
//! confirmation restarts it; a released reading during press confirmation
//! discards the press as bounce.

use crate::config::TimingConfig;
use crate::hardware::{DelayMs, DigitalInput, Level};

/// The debounce phase of a sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SamplerState {
    /// Button is not held. Waiting for a pressed sample.
    Idle,
    /// Counting consecutive pressed samples.
    ConfirmingPress {
        /// Consecutive pressed samples seen so far.
        ticks: u32,
    },
    /// Press confirmed. Waiting for the pin to leave the pressed level.
    AwaitingRelease,
    /// Counting consecutive released samples.
    ConfirmingRelease {
        /// Consecutive released samples seen so far.
        ticks: u32,
    },
}

/// Result of feeding one pin sample into the sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleOutcome {
    /// No press in progress, or a press was absorbed as bounce.
    NoGesture,
    /// A press or release is being debounced. Sample again after one period.
    Pending,
    /// A full press-then-release gesture has been confirmed.
    Gesture,
}

/// Debounces a single button into press-and-release gestures.
#[derive(Debug, Clone)]
pub struct DebounceSampler {
    state: SamplerState,
    threshold: u32,
    sample_period_ms: u32,
    pressed_level: Level,
}

impl DebounceSampler {
    /// Creates an idle sampler.
    pub fn new(config: &TimingConfig) -> Self {
        Self {
            state: SamplerState::Idle,
            threshold: config.debounce_threshold_ticks(),
            sample_period_ms: config.sample_period_ms(),
            pressed_level: config.pressed_level(),
        }
    }

    /// Feeds one pin sample into the state machine.
    ///
    /// Does not wait; callers are expected to sample again one period later
    /// while the outcome is [`SampleOutcome::Pending`].
    pub fn step(&mut self, level: Level) -> SampleOutcome {
        let pressed = level == self.pressed_level;

        match (self.state, pressed) {
            (SamplerState::Idle, false) => SampleOutcome::NoGesture,
            (SamplerState::Idle, true) => self.count_pressed(1),
            (SamplerState::ConfirmingPress { ticks }, true) => self.count_pressed(ticks + 1),
            (SamplerState::ConfirmingPress { ticks }, false) => {
                trace!("press absorbed as bounce after {} ticks", ticks);
                self.state = SamplerState::Idle;
                SampleOutcome::NoGesture
            }
            (SamplerState::AwaitingRelease, true) => SampleOutcome::Pending,
            (SamplerState::AwaitingRelease, false) => self.count_released(1),
            (SamplerState::ConfirmingRelease { ticks }, false) => self.count_released(ticks + 1),
            (SamplerState::ConfirmingRelease { ticks }, true) => {
                trace!("release bounced after {} ticks", ticks);
                self.state = SamplerState::AwaitingRelease;
                SampleOutcome::Pending
            }
        }
    }

    /// Blocks until a gesture is confirmed or no press is in progress.
    ///
    /// Reads the pin once per sampling period. While the button is held or
    /// bouncing this does not return.
    ///
    /// # Returns
    /// * `true` - A press and its release were both confirmed
    /// * `false` - The button was not held, or the press was shorter than the
    ///   debounce threshold
    pub fn sample_press_event<B: DigitalInput, D: DelayMs>(
        &mut self,
        input: &mut B,
        delay: &mut D,
    ) -> bool {
        loop {
            let outcome = self.step(input.read_level());
            delay.delay_ms(self.sample_period_ms);

            match outcome {
                SampleOutcome::Pending => continue,
                SampleOutcome::Gesture => return true,
                SampleOutcome::NoGesture => return false,
            }
        }
    }

    /// Returns the current debounce phase.
    pub fn state(&self) -> SamplerState {
        self.state
    }

    /// Returns the number of stable samples required to accept a level.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    fn count_pressed(&mut self, ticks: u32) -> SampleOutcome {
        if ticks > self.threshold {
            debug!("press confirmed after {} ticks", ticks);
            self.state = SamplerState::AwaitingRelease;
        } else {
            self.state = SamplerState::ConfirmingPress { ticks };
        }
        SampleOutcome::Pending
    }

    fn count_released(&mut self, ticks: u32) -> SampleOutcome {
        if ticks >= self.threshold {
            debug!("release confirmed after {} ticks", ticks);
            self.state = SamplerState::Idle;
            SampleOutcome::Gesture
        } else {
            self.state = SamplerState::ConfirmingRelease { ticks };
            SampleOutcome::Pending
        }
    }
}
