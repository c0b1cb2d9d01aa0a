/// The fixed-rate timer marking sub-window boundaries.
///
/// The timer runs off an internal clock and raises one interrupt per
/// sub-window. It never counts input transitions.
pub trait WindowTimer: Send {
    /// Sub-window ticks per second of wall time, fixed by the timer's clock
    /// and divisor. Multiplying pulses-per-sub-window by this rate yields
    /// Hz, so it doubles as the calibration constant of the meter.
    const TICK_RATE: f64;

    /// Enable the sub-window tick interrupt.
    fn tick_int_enable(&mut self);

    /// Reset the timer's counting register to zero.
    fn reset(&mut self);

    /// Let the timer run on its fixed clock.
    fn start(&mut self);

    /// Freeze the timer.
    fn stop(&mut self);
}

#[cfg(test)]
pub mod fakes {
    use super::*;

    /// A window timer that only records what was done to it. Ticks are
    /// delivered by calling the driver's handler directly.
    pub struct FakeWindowTimer {
        pub running: bool,
        pub resets: usize,
        pub tick_int_enabled: bool,
    }

    impl WindowTimer for FakeWindowTimer {
        // The 16 MHz preset rate.
        const TICK_RATE: f64 = 61.03515625;

        fn tick_int_enable(&mut self) {
            self.tick_int_enabled = true;
        }

        fn reset(&mut self) {
            self.resets += 1;
        }

        fn start(&mut self) {
            self.running = true;
        }

        fn stop(&mut self) {
            self.running = false;
        }
    }
}
