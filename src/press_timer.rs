//! Press timer application loop.
//!
//! Provides [`PressTimer`], which owns the button, delay, counter and report
//! sink and runs sample → estimate → report in a single blocking loop.

use crate::config::TimingConfig;
use crate::debounce::DebounceSampler;
use crate::estimator::{ElapsedResult, ElapsedTimeEstimator};
use crate::hardware::{DelayMs, DigitalInput, FreeRunningCounter};
use crate::report::{ReportSink, format_result, write_banner};

/// Measures and reports the time between successive button presses.
///
/// Board code initializes the peripherals (counter running, pin configured as
/// input, sink ready) before constructing the timer; the timer itself never
/// fails.
///
/// # Type Parameters
/// * `B` - Button input implementation type
/// * `D` - Delay implementation type
/// * `C` - Free-running counter implementation type
/// * `S` - Report sink implementation type
pub struct PressTimer<B: DigitalInput, D: DelayMs, C: FreeRunningCounter, S: ReportSink> {
    button: B,
    delay: D,
    counter: C,
    sink: S,
    sampler: DebounceSampler,
    estimator: ElapsedTimeEstimator,
    presses: u32,
}

impl<B: DigitalInput, D: DelayMs, C: FreeRunningCounter, S: ReportSink> PressTimer<B, D, C, S> {
    /// Creates a timer with no recorded presses.
    pub fn new(config: TimingConfig, button: B, delay: D, counter: C, sink: S) -> Self {
        Self {
            button,
            delay,
            counter,
            sink,
            sampler: DebounceSampler::new(&config),
            estimator: ElapsedTimeEstimator::new(config.counter_frequency_hz()),
            presses: 0,
        }
    }

    /// Clears the terminal and prints the startup banner.
    pub fn announce(&mut self) {
        write_banner(&mut self.sink);
    }

    /// Runs one pass of the loop.
    ///
    /// Blocks while a press is being debounced. When a full gesture is
    /// confirmed the counter is sampled and the result reported.
    ///
    /// # Returns
    /// * `Some(result)` - A press was measured and reported
    /// * `None` - No press this pass
    pub fn poll(&mut self) -> Option<ElapsedResult> {
        if !self
            .sampler
            .sample_press_event(&mut self.button, &mut self.delay)
        {
            return None;
        }

        self.presses = self.presses.wrapping_add(1);
        let result = self.estimator.on_press_event(&mut self.counter);
        info!("press {} measured: {}", self.presses, result.seconds());

        self.sink.write_line(&format_result(&result));
        Some(result)
    }

    /// Prints the banner and polls forever.
    pub fn run(mut self) -> ! {
        self.announce();
        loop {
            self.poll();
        }
    }

    /// Returns the number of presses measured so far.
    pub fn presses(&self) -> u32 {
        self.presses
    }

    /// Returns the debounce sampler.
    pub fn sampler(&self) -> &DebounceSampler {
        &self.sampler
    }

    /// Returns the elapsed-time estimator.
    pub fn estimator(&self) -> &ElapsedTimeEstimator {
        &self.estimator
    }

    /// Returns the report sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the timer and returns its peripherals.
    pub fn release(self) -> (B, D, C, S) {
        (self.button, self.delay, self.counter, self.sink)
    }
}
