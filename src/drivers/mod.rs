#[cfg(feature = "atmega328p")]
mod atmega328p;

#[cfg(feature = "atmega328p")]
pub use self::atmega328p::{Edge, Tc1PulseDrv, Tc2WindowDrv};
