//! Terminal halt for unrecoverable initialization failures.
//!
//! There is no recoverable error type for board bring-up: a peripheral that
//! fails to initialize stops the firmware with interrupts masked and the
//! indicator LED lit.

use crate::hardware::IndicatorLed;

/// Runs the bounded cleanup before halting: masks interrupts, then lights
/// the LED.
pub fn enter_halt_state<L: IndicatorLed, F: FnOnce()>(led: &mut L, disable_interrupts: F) {
    disable_interrupts();
    led.turn_on();
    error!("initialization failed, halting");
}

/// Enters the halt state and never returns.
pub fn halt<L: IndicatorLed, F: FnOnce()>(led: &mut L, disable_interrupts: F) -> ! {
    enter_halt_state(led, disable_interrupts);
    loop {
        core::hint::spin_loop();
    }
}

/// Extension trait that halts on a failed initialization step.
pub trait OrHalt<T> {
    /// Returns the value, or halts if initialization failed.
    fn or_halt<L: IndicatorLed, F: FnOnce()>(self, led: &mut L, disable_interrupts: F) -> T;
}

impl<T, E> OrHalt<T> for Result<T, E> {
    fn or_halt<L: IndicatorLed, F: FnOnce()>(self, led: &mut L, disable_interrupts: F) -> T {
        match self {
            Ok(value) => value,
            Err(_) => halt(led, disable_interrupts),
        }
    }
}

impl<T> OrHalt<T> for Option<T> {
    fn or_halt<L: IndicatorLed, F: FnOnce()>(self, led: &mut L, disable_interrupts: F) -> T {
        match self {
            Some(value) => value,
            None => halt(led, disable_interrupts),
        }
    }
}
