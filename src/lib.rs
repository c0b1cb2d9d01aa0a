#![cfg_attr(not(any(test, feature = "std")), no_std)]

// MUST be the first module
mod fmt;

mod adapters;
mod clock;
pub mod config;
pub mod drivers;
mod frequency;
mod meter;
mod meter_drv;
mod tally;

pub use self::{
    adapters::display::DisplaySink,
    adapters::pulse::{PulseCounter, PulseOverflow},
    adapters::window::WindowTimer,
    clock::{Clock, Clock16MHz, Clock20MHz, Clock25MHz},
    config::{ConfigError, MeterConfig},
    frequency::Frequency,
    meter::{Meter, Mode},
    meter_drv::MeterDrv,
    tally::OverflowTracker,
};
