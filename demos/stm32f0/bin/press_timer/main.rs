#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};

use press_interval::PressTimer;
use stm32f0_demos::board::RttSink;
use stm32f0_demos::tick_delay::TickDelay;

mod hardware_setup;

/// SysTick interrupt handler - called every 1ms
#[cortex_m_rt::exception]
fn SysTick() {
    stm32f0_demos::tick_delay::tick();
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Press Interval Timer ===");
    rprintln!("Starting initialization...");

    let hw = hardware_setup::init_hardware();
    rprintln!("Hardware initialized successfully");

    // The LED is only needed for the halt path during bring-up.
    let _led = hw.led;

    let timer = PressTimer::new(hw.config, hw.button, TickDelay::new(), hw.counter, RttSink);

    // Prints the banner and polls forever
    timer.run()
}
