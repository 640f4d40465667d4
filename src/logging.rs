//! Logging shims.
//!
//! With the `defmt` feature enabled these forward to the `defmt` macros of the
//! same name. Without it they expand to nothing beyond borrowing their
//! arguments, so call sites compile identically in both configurations.

#![allow(unused_macros)]

#[cfg(feature = "defmt")]
macro_rules! trace {
    ($($arg:tt)+) => { defmt::trace!($($arg)+) };
}

#[cfg(feature = "defmt")]
macro_rules! debug {
    ($($arg:tt)+) => { defmt::debug!($($arg)+) };
}

#[cfg(feature = "defmt")]
macro_rules! info {
    ($($arg:tt)+) => { defmt::info!($($arg)+) };
}

#[cfg(feature = "defmt")]
macro_rules! warn {
    ($($arg:tt)+) => { defmt::warn!($($arg)+) };
}

#[cfg(feature = "defmt")]
macro_rules! error {
    ($($arg:tt)+) => { defmt::error!($($arg)+) };
}

#[cfg(not(feature = "defmt"))]
macro_rules! trace {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{ $( let _ = &$arg; )* }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{ $( let _ = &$arg; )* }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! info {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{ $( let _ = &$arg; )* }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! warn {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{ $( let _ = &$arg; )* }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! error {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{ $( let _ = &$arg; )* }};
}
