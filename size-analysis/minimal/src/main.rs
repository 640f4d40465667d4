#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use press_interval::{
    CascadedCounter, CounterStage, DelayMs, DigitalInput, ElapsedTimeEstimator,
    FreeRunningCounter, Level, PressTimer, ReportSink, TimingConfig,
};

// ============================================================================
// Minimal Hardware
// ============================================================================

/// Button that reads back whatever level was last stored
pub struct MinimalButton(Level);

impl DigitalInput for MinimalButton {
    fn read_level(&mut self) -> Level {
        core::hint::black_box(self.0)
    }
}

/// No-op delay for measuring library overhead
pub struct MinimalDelay;

impl DelayMs for MinimalDelay {
    fn delay_ms(&mut self, ms: u32) {
        core::hint::black_box(ms);
    }
}

/// 16-bit counter stage that advances on every read
pub struct MinimalStage(u16);

impl CounterStage for MinimalStage {
    fn read_stage(&mut self) -> u16 {
        self.0 = self.0.wrapping_add(1);
        core::hint::black_box(self.0)
    }
}

/// Sink that discards lines after touching them
pub struct MinimalSink;

impl ReportSink for MinimalSink {
    fn write_line(&mut self, line: &str) {
        core::hint::black_box(line);
    }
}

// ============================================================================
// Library Usage
// ============================================================================

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn exercise_press_timer() {
    let counter = CascadedCounter::new(MinimalStage(0), MinimalStage(0));

    let mut timer = PressTimer::new(
        TimingConfig::DEFAULT,
        MinimalButton(Level::High),
        MinimalDelay,
        counter,
        MinimalSink,
    );
    timer.announce();
    core::hint::black_box(timer.poll());

    // Standalone estimator over a combined 32-bit counter
    let mut stage = MinimalStage(7);
    let mut estimator = ElapsedTimeEstimator::new(TimingConfig::DEFAULT.counter_frequency_hz());
    let sample = stage.read_stage() as u32;
    core::hint::black_box(estimator.record(sample));

    let (_, _, mut counter, _) = timer.release();
    core::hint::black_box(counter.read_count());
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    exercise_press_timer();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
