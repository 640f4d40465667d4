use core::cell::Cell;
use critical_section::Mutex;
use press_interval::DelayMs;

/// Global millisecond counter incremented by SysTick interrupt
///
/// Wraps after ~49.7 days; [`TickDelay`] compares with wrapping arithmetic.
static MILLIS_COUNTER: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

/// Increments the global millisecond counter.
///
/// Call this from the SysTick interrupt handler every 1ms.
pub fn tick() {
    critical_section::with(|cs| {
        let counter = MILLIS_COUNTER.borrow(cs);
        counter.set(counter.get().wrapping_add(1));
    });
}

/// Returns milliseconds since SysTick was started.
pub fn millis() -> u32 {
    critical_section::with(|cs| MILLIS_COUNTER.borrow(cs).get())
}

/// Busy-wait delay paced by the SysTick millisecond counter
///
/// Used for the debounce sampling cadence. The free-running counter used for
/// measurements is a separate peripheral.
pub struct TickDelay;

impl TickDelay {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TickDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayMs for TickDelay {
    fn delay_ms(&mut self, ms: u32) {
        let start = millis();
        while millis().wrapping_sub(start) < ms {
            cortex_m::asm::nop();
        }
    }
}
