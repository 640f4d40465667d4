#![no_std]

pub mod board;
pub mod tick_delay;
