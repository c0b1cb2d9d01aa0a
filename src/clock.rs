/// Marker for the system clock rate that feeds the window timer.
pub trait Clock: Send {
    /// The clock frequency, i.e. the number of clock cycles per second.
    const FREQ: u32;
}

/// The stock 16 MHz crystal.
pub struct Clock16MHz;

impl Clock for Clock16MHz {
    const FREQ: u32 = 16_000_000;
}

/// A 20 MHz crystal.
pub struct Clock20MHz;

impl Clock for Clock20MHz {
    const FREQ: u32 = 20_000_000;
}

/// A 25 MHz crystal. On most parts this is an overclock and may need a raised
/// supply voltage, but it extends the countable input range accordingly.
pub struct Clock25MHz;

impl Clock for Clock25MHz {
    const FREQ: u32 = 25_000_000;
}
