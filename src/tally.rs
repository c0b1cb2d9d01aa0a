/// Software extension of the pulse counter's width: one increment per
/// hardware wrap, folded back in when the window handler samples.
///
/// The overflow handler and the window handler never run concurrently, so a
/// recorded wrap is final by the time the window handler takes the tally.
pub struct OverflowTracker {
    overflows: u32,
}

impl OverflowTracker {
    pub const fn new() -> Self {
        Self { overflows: 0 }
    }

    /// Record one counter wrap. Saturates at `u32::MAX`.
    pub fn record_overflow(&mut self) {
        self.overflows = self.overflows.saturating_add(1);
    }

    /// The number of wraps recorded since the last take.
    pub fn overflows(&self) -> u32 {
        self.overflows
    }

    /// Fold the recorded wraps and the frozen raw counter value into the
    /// effective transition count for this sub-window, and zero the wrap
    /// count for the next one.
    pub fn take_tally(&mut self, raw: u32, modulus: u64) -> u64 {
        let tally = self.overflows as u64 * modulus + raw as u64;
        self.overflows = 0;
        tally
    }
}

impl Default for OverflowTracker {
    fn default() -> Self {
        Self::new()
    }
}
