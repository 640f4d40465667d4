use cortex_m::peripheral::SYST;
use rtt_target::rprintln;
use stm32f0xx_hal::{
    gpio::{Floating, Input, Output, PullUp, PushPull, gpioa, gpioc},
    pac,
    prelude::*,
};

use press_interval::{
    DEBOUNCE_THRESHOLD_TICKS, Level, OrHalt, SAMPLE_PERIOD_MS, TimingConfig, halt,
};
use stm32f0_demos::board::{ButtonPin, StatusLed, Tim2Counter};

/// Counter rate for TIM2; divides the 8 MHz default clock exactly.
pub const COUNTER_FREQUENCY_HZ: u32 = 32_000;

/// Button type (user button on PC13, low when pressed)
pub type Button = ButtonPin<gpioc::PC13<Input<PullUp>>>;

/// Onboard LED type (PA5)
pub type OnboardLed = StatusLed<gpioa::PA5<Output<PushPull>>>;

/// Container for all initialized hardware peripherals
pub struct HardwareContext {
    pub config: TimingConfig,
    pub button: Button,
    pub led: OnboardLed,
    pub counter: Tim2Counter,
}

/// Initialize all hardware peripherals
///
/// Any failure is fatal: interrupts are masked, the onboard LED is lit and
/// the CPU spins. Before the LED exists there is nothing to light, so a
/// failure to take the peripherals just masks interrupts and spins.
pub fn init_hardware() -> HardwareContext {
    let (Some(mut dp), Some(mut cp)) = (pac::Peripherals::take(), cortex_m::Peripherals::take())
    else {
        cortex_m::interrupt::disable();
        loop {
            cortex_m::asm::nop();
        }
    };

    // TIM2 clock must be on before RCC is handed to the HAL.
    dp.RCC.apb1enr.modify(|_, w| w.tim2en().set_bit());

    let mut rcc = configure_clock(&mut dp.FLASH, dp.RCC);
    configure_systick(&rcc, &mut cp.SYST);

    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpioc = dp.GPIOC.split(&mut rcc);

    let mut led = setup_onboard_led(gpioa.pa5);
    let button = setup_button(gpioc.pc13);

    let config = TimingConfig::new(
        SAMPLE_PERIOD_MS,
        DEBOUNCE_THRESHOLD_TICKS,
        COUNTER_FREQUENCY_HZ,
        Level::Low,
    )
    .or_halt(&mut led, cortex_m::interrupt::disable);

    let timer_clock = rcc.clocks.pclk().0;
    if timer_clock % COUNTER_FREQUENCY_HZ != 0 {
        rprintln!("Timer clock {} Hz cannot produce {} Hz", timer_clock, COUNTER_FREQUENCY_HZ);
        halt(&mut led, cortex_m::interrupt::disable);
    }
    let prescaler = u16::try_from(timer_clock / COUNTER_FREQUENCY_HZ - 1)
        .or_halt(&mut led, cortex_m::interrupt::disable);
    let counter = Tim2Counter::start(dp.TIM2, prescaler);
    rprintln!("TIM2 counting at {} Hz (prescaler {})", COUNTER_FREQUENCY_HZ, prescaler);

    HardwareContext {
        config,
        button,
        led,
        counter,
    }
}

/// Configure the system clock
///
/// # Returns
/// The configured RCC (Reset and Clock Control) peripheral
fn configure_clock(flash: &mut pac::FLASH, rcc: pac::RCC) -> stm32f0xx_hal::rcc::Rcc {
    let rcc = rcc.configure().freeze(flash);

    let sysclk_freq = rcc.clocks.sysclk();
    rprintln!("System clock configured: {} Hz", sysclk_freq.0);

    rcc
}

/// Configure SysTick timer for 1ms interrupts
///
/// The SysTick interrupt paces the debounce delay; it is the only interrupt
/// the firmware enables.
fn configure_systick(rcc: &stm32f0xx_hal::rcc::Rcc, syst: &mut SYST) {
    let sysclk_freq = rcc.clocks.sysclk();

    syst.set_clock_source(cortex_m::peripheral::syst::SystClkSource::Core);
    syst.set_reload((sysclk_freq.0 / 1_000) - 1);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();

    rprintln!("SysTick configured for 1ms interrupts");
}

/// Configure user button (PC13) with pull-up
fn setup_button(pc13: gpioc::PC13<Input<Floating>>) -> Button {
    let pin = cortex_m::interrupt::free(|cs| pc13.into_pull_up_input(cs));

    rprintln!("Button configured on PC13");
    ButtonPin::new(pin)
}

/// Configure onboard LED (PA5) as output, initially off
fn setup_onboard_led(pa5: gpioa::PA5<Input<Floating>>) -> OnboardLed {
    let pin = cortex_m::interrupt::free(|cs| pa5.into_push_pull_output(cs));

    rprintln!("Onboard LED configured on PA5");
    StatusLed::new(pin)
}
