use core::fmt::Write;

use heapless::String;

use crate::adapters::display::DisplaySink;
use crate::adapters::pulse::{PulseCounter, PulseOverflow};
use crate::adapters::window::WindowTimer;
use crate::config::{ConfigError, MeterConfig};
use crate::meter::Meter;
use crate::tally::OverflowTracker;

/// What the display shows until the first window completes.
const BOOT_TEXT: &str = "starting...";

/// Room for one formatted reading.
const LINE_CAPACITY: usize = 25;

/// Binds a pulse counter, a window timer and a display sink into a running
/// meter.
///
/// The two `on_*` entry points are the interrupt handlers. They must not
/// preempt each other; on a flat interrupt priority scheme that holds by
/// construction.
pub struct MeterDrv<P, W, D>
where
    P: PulseCounter + PulseOverflow,
    W: WindowTimer,
    D: DisplaySink,
{
    pulse: P,
    window: W,
    display: D,
    tracker: OverflowTracker,
    meter: Meter,
}

impl<P, W, D> MeterDrv<P, W, D>
where
    P: PulseCounter + PulseOverflow,
    W: WindowTimer,
    D: DisplaySink,
{
    /// Create the driver. The hardware is not touched until
    /// [`start`](Self::start).
    pub fn new(pulse: P, window: W, display: D, config: MeterConfig) -> Result<Self, ConfigError> {
        let meter = Meter::new(config, W::TICK_RATE)?;
        Ok(Self {
            pulse,
            window,
            display,
            tracker: OverflowTracker::new(),
            meter,
        })
    }

    /// Show the boot text, wire the two interrupts and start counting.
    pub fn start(&mut self) {
        self.display.clear();
        self.display.print(BOOT_TEXT);

        self.pulse.overflow_int_enable();
        self.window.tick_int_enable();

        self.pulse.reset();
        self.window.reset();
        self.pulse.start();
        self.window.start();
    }

    /// The pulse counter wrapped. Call from the counter's overflow handler.
    pub fn on_pulse_overflow(&mut self) {
        self.tracker.record_overflow();
    }

    /// A sub-window elapsed. Call from the window timer's tick handler.
    ///
    /// Runs the freeze, sample, reset, restart steps as one straight-line
    /// sequence; both counters are running again when it returns. Pulses
    /// arriving while the counters are frozen are lost, which bounds the
    /// instrument's precision rather than its correctness.
    pub fn on_window_tick(&mut self) {
        self.pulse.stop();
        self.window.stop();

        // A wrap latched right before the freeze has not run its handler
        // yet. Fold it in now so the tally does not lose a full period.
        if self.pulse.is_pending_overflow() {
            self.pulse.clear_pending_overflow();
            self.tracker.record_overflow();
        }

        let raw = self.pulse.value();
        let tally = self.tracker.take_tally(raw, P::MODULUS);
        self.pulse.reset();

        let mode = self.meter.mode();
        if let Some(frequency) = self.meter.subwindow(tally) {
            debug!("window complete: {} Hz ({:?})", frequency.hz(), self.meter.mode());
            if self.meter.mode() != mode {
                info!("mode change: {:?} -> {:?}", mode, self.meter.mode());
            }

            let mut line = String::<LINE_CAPACITY>::new();
            let _ = write!(line, "{}", frequency);
            self.display.clear();
            self.display.print(&line);
        }

        self.window.reset();
        self.pulse.start();
        self.window.start();
    }
}

#[cfg(test)]
pub mod tests {
    use crate::adapters::display::fakes::FakeDisplay;
    use crate::adapters::pulse::fakes::FakePulseCounter;
    use crate::adapters::window::fakes::FakeWindowTimer;
    use crate::meter::Mode;

    use super::*;

    fn drv(config: MeterConfig) -> MeterDrv<FakePulseCounter, FakeWindowTimer, FakeDisplay> {
        let pulse = FakePulseCounter {
            counter: 0,
            running: false,
            resets: 0,
            pending_overflow: false,
            overflow_int_enabled: false,
        };
        let window = FakeWindowTimer {
            running: false,
            resets: 0,
            tick_int_enabled: false,
        };
        let display = FakeDisplay {
            clears: 0,
            lines: Vec::new(),
        };
        MeterDrv::new(pulse, window, display, config).unwrap()
    }

    fn unit_config() -> MeterConfig {
        MeterConfig {
            normal_window_ticks: 1,
            tuning_window_ticks: 1,
            ..MeterConfig::default()
        }
    }

    #[test]
    fn start_shows_the_boot_text_and_starts_both_counters() {
        let mut drv = drv(MeterConfig::default());
        drv.start();

        assert!(drv.pulse.overflow_int_enabled);
        assert!(drv.window.tick_int_enabled);
        assert!(drv.pulse.running);
        assert!(drv.window.running);
        assert_eq!(1, drv.pulse.resets);
        assert_eq!(1, drv.window.resets);
        assert_eq!(vec!["starting..."], drv.display.lines);
        assert_eq!(1, drv.display.clears);
    }

    #[test]
    fn a_partial_window_restarts_counting_without_touching_the_display() {
        let mut drv = drv(MeterConfig::default());
        drv.start();

        drv.pulse.counter = 5000;
        drv.on_window_tick();

        assert_eq!(0, drv.pulse.counter);
        assert!(drv.pulse.running);
        assert!(drv.window.running);
        assert_eq!(2, drv.pulse.resets);
        assert_eq!(2, drv.window.resets);
        assert_eq!(vec!["starting..."], drv.display.lines);
    }

    #[test]
    fn overflow_events_extend_the_tally() {
        let mut drv = drv(unit_config());
        drv.start();

        drv.on_pulse_overflow();
        drv.on_pulse_overflow();
        drv.pulse.counter = 346;
        drv.on_window_tick();

        assert_eq!(
            (2.0 * 65_536.0 + 346.0) * 61.03515625,
            drv.meter.previous().hz()
        );
        assert_eq!(0, drv.tracker.overflows());
    }

    #[test]
    fn a_wrap_latched_at_freeze_time_is_folded_into_the_tally() {
        let mut drv = drv(unit_config());
        drv.start();

        drv.pulse.counter = 100;
        drv.pulse.pending_overflow = true;
        drv.on_window_tick();

        assert!(!drv.pulse.pending_overflow);
        assert_eq!((65_536.0 + 100.0) * 61.03515625, drv.meter.previous().hz());
    }

    #[test]
    fn a_constant_input_reads_803_094_khz_on_the_long_window() {
        let mut drv = drv(MeterConfig::default());
        drv.start();

        // Two settled short windows first, so the long window takes effect.
        for _ in 0..50 {
            drv.pulse.counter = 13_158;
            drv.on_window_tick();
        }
        assert_eq!(Mode::Normal, drv.meter.mode());

        // 1,000,000 pulses spread over the 76 ticks of one long window.
        for tick in 0..76 {
            drv.pulse.counter = if tick < 75 { 13_158 } else { 13_150 };
            drv.on_window_tick();
        }

        assert_eq!(
            vec!["starting...", "803.101 kHz", "803.101 kHz", "803.094 kHz"],
            drv.display.lines
        );
        assert_eq!(4, drv.display.clears);
        assert_eq!(Mode::Normal, drv.meter.mode());
    }
}
