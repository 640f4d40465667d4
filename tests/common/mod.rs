//! Shared test infrastructure for press-interval integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use press_interval::{DelayMs, DigitalInput, FreeRunningCounter, IndicatorLed, Level, ReportSink};

// ============================================================================
// Mock Clock
// ============================================================================

/// Millisecond clock shared between the mock button and the mock delay
pub struct MockClock {
    now_ms: Cell<u32>,
}

impl MockClock {
    pub fn new() -> Self {
        Self { now_ms: Cell::new(0) }
    }

    pub fn now(&self) -> u32 {
        self.now_ms.get()
    }

    pub fn advance(&self, ms: u32) {
        self.now_ms.set(self.now_ms.get() + ms);
    }

    pub fn set(&self, ms: u32) {
        self.now_ms.set(ms);
    }
}

// ============================================================================
// Mock Button
// ============================================================================

/// Active-low button whose level is scripted as pressed windows on the clock
///
/// Each window `(start, end)` holds the pin low for `start <= now < end`.
pub struct ScriptedButton<'a> {
    clock: &'a MockClock,
    pressed_windows: heapless::Vec<(u32, u32), 32>,
    reads: u32,
}

impl<'a> ScriptedButton<'a> {
    pub fn new(clock: &'a MockClock) -> Self {
        Self {
            clock,
            pressed_windows: heapless::Vec::new(),
            reads: 0,
        }
    }

    /// Hold the button down for `duration_ms` starting at `start_ms`
    pub fn press(mut self, start_ms: u32, duration_ms: u32) -> Self {
        self.pressed_windows
            .push((start_ms, start_ms + duration_ms))
            .unwrap();
        self
    }

    /// Press with contact bounce: `bounces` short pulses of `pulse_ms`
    /// separated by `pulse_ms` gaps, then a steady hold of `hold_ms`
    pub fn bouncy_press(mut self, start_ms: u32, bounces: u32, pulse_ms: u32, hold_ms: u32) -> Self {
        let mut t = start_ms;
        for _ in 0..bounces {
            self = self.press(t, pulse_ms);
            t += 2 * pulse_ms;
        }
        self.press(t, hold_ms)
    }

    pub fn is_pressed_at(&self, ms: u32) -> bool {
        self.pressed_windows
            .iter()
            .any(|&(start, end)| start <= ms && ms < end)
    }

    pub fn reads(&self) -> u32 {
        self.reads
    }
}

impl DigitalInput for ScriptedButton<'_> {
    fn read_level(&mut self) -> Level {
        self.reads += 1;
        if self.is_pressed_at(self.clock.now()) {
            Level::Low
        } else {
            Level::High
        }
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay that advances the shared mock clock instead of blocking
pub struct MockDelay<'a> {
    clock: &'a MockClock,
}

impl<'a> MockDelay<'a> {
    pub fn new(clock: &'a MockClock) -> Self {
        Self { clock }
    }
}

impl DelayMs for MockDelay<'_> {
    fn delay_ms(&mut self, ms: u32) {
        self.clock.advance(ms);
    }
}

// ============================================================================
// Mock Counter
// ============================================================================

/// Counter that returns a scripted sequence of values, one per read
pub struct ScriptedCounter {
    values: heapless::Vec<u32, 16>,
    next: usize,
}

impl ScriptedCounter {
    pub fn new(values: &[u32]) -> Self {
        let mut script: heapless::Vec<u32, 16> = heapless::Vec::new();
        script.extend_from_slice(values).unwrap();
        Self {
            values: script,
            next: 0,
        }
    }

    pub fn reads(&self) -> usize {
        self.next
    }
}

impl FreeRunningCounter for ScriptedCounter {
    fn read_count(&mut self) -> u32 {
        let value = self.values[self.next];
        self.next += 1;
        value
    }
}

/// Counter derived from the mock clock at a given frequency
pub struct ClockCounter<'a> {
    clock: &'a MockClock,
    ticks_per_ms: u32,
}

impl<'a> ClockCounter<'a> {
    pub fn new(clock: &'a MockClock, ticks_per_ms: u32) -> Self {
        Self {
            clock,
            ticks_per_ms,
        }
    }
}

impl FreeRunningCounter for ClockCounter<'_> {
    fn read_count(&mut self) -> u32 {
        self.clock.now().wrapping_mul(self.ticks_per_ms)
    }
}

// ============================================================================
// Mock Sink and LED
// ============================================================================

/// Sink that records every line written to it
pub struct RecordingSink {
    lines: heapless::Vec<heapless::String<96>, 32>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            lines: heapless::Vec::new(),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.as_str())
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(|line| line.as_str())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

impl ReportSink for RecordingSink {
    fn write_line(&mut self, line: &str) {
        let mut owned: heapless::String<96> = heapless::String::new();
        owned.push_str(line).unwrap();
        self.lines.push(owned).unwrap();
    }
}

/// LED that remembers whether it is lit
pub struct MockLed {
    lit: bool,
}

impl MockLed {
    pub fn new() -> Self {
        Self { lit: false }
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }
}

impl IndicatorLed for MockLed {
    fn turn_on(&mut self) {
        self.lit = true;
    }

    fn turn_off(&mut self) {
        self.lit = false;
    }
}
