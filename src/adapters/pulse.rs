/// The hardware counter clocked by the measured signal.
///
/// The counter increments once per input transition with no software in the
/// loop. Reads are only meaningful while the counter is stopped; the meter
/// driver stops it before sampling and restarts it afterwards. Input faster
/// than the counter can resolve loses counts silently.
pub trait PulseCounter: Send {
    /// Get the current counter value.
    fn value(&self) -> u32;

    /// Reset the counter to zero.
    fn reset(&mut self);

    /// Connect the counter to the input signal.
    fn start(&mut self);

    /// Disconnect the counter from the input signal, freezing its value.
    fn stop(&mut self);
}

/// The overflow interrupt control backing a pulse counter.
pub trait PulseOverflow: Send {
    /// The maximum counter value.
    const MAX: u32;

    /// The counter modulus.
    const MODULUS: u64 = Self::MAX as u64 + 1;

    /// Enable the counter overflow interrupt.
    fn overflow_int_enable(&mut self);

    /// Get whether an overflow is latched but not yet serviced.
    fn is_pending_overflow(&self) -> bool;

    /// Clear the latched overflow flag.
    fn clear_pending_overflow(&mut self);
}

#[cfg(test)]
pub mod fakes {
    use super::*;

    /// A pulse counter scripted by tests. `counter` plays the frozen
    /// register value; `pending_overflow` plays a wrap latched at freeze
    /// time whose handler has not run.
    pub struct FakePulseCounter {
        pub counter: u32,
        pub running: bool,
        pub resets: usize,
        pub pending_overflow: bool,
        pub overflow_int_enabled: bool,
    }

    impl PulseCounter for FakePulseCounter {
        fn value(&self) -> u32 {
            self.counter
        }

        fn reset(&mut self) {
            self.counter = 0;
            self.resets += 1;
        }

        fn start(&mut self) {
            self.running = true;
        }

        fn stop(&mut self) {
            self.running = false;
        }
    }

    impl PulseOverflow for FakePulseCounter {
        const MAX: u32 = 0xFFFF; // TC1-sized, 16 bit.

        fn overflow_int_enable(&mut self) {
            self.overflow_int_enabled = true;
        }

        fn is_pending_overflow(&self) -> bool {
            self.pending_overflow
        }

        fn clear_pending_overflow(&mut self) {
            self.pending_overflow = false;
        }
    }
}
