use crate::config::{ConfigError, MeterConfig};
use crate::frequency::Frequency;

/// Averaging state, i.e. which window length is in effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Short window. The estimate is moving, favor responsiveness.
    Tuning,
    /// Long window. The estimate is settled, favor precision.
    Normal,
}

/// The averaging engine, independent of any hardware.
///
/// Feed it one effective pulse tally per sub-window tick. Tallies accumulate
/// until enough ticks complete one averaging window; the completing tick
/// yields a calibrated estimate and re-evaluates the mode. A mode change
/// only affects the length of the next window, never the running one.
///
/// Powers up in [`Mode::Tuning`] with a previous estimate of zero.
pub struct Meter {
    config: MeterConfig,
    tick_rate: f64,
    mode: Mode,
    accumulated: u64,
    subwindow_ticks: u16,
    previous: Frequency,
}

impl Meter {
    /// Create a meter over a window timer ticking `tick_rate` times per
    /// second of wall time.
    pub fn new(config: MeterConfig, tick_rate: f64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            tick_rate,
            mode: Mode::Tuning,
            accumulated: 0,
            subwindow_ticks: 0,
            previous: Frequency::ZERO,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The estimate emitted at the last completed window.
    pub fn previous(&self) -> Frequency {
        self.previous
    }

    fn window_ticks(&self) -> u16 {
        match self.mode {
            Mode::Tuning => self.config.tuning_window_ticks,
            Mode::Normal => self.config.normal_window_ticks,
        }
    }

    /// Fold one sub-window pulse tally into the running window.
    ///
    /// Returns the calibrated estimate when this tick completes the window
    /// and `None` while the window is still accumulating.
    pub fn subwindow(&mut self, tally: u64) -> Option<Frequency> {
        self.accumulated += tally;
        self.subwindow_ticks += 1;
        if self.subwindow_ticks < self.window_ticks() {
            return None;
        }

        let pulses_per_tick = self.accumulated as f64 / self.window_ticks() as f64;
        let estimate =
            Frequency::from_hz(pulses_per_tick * self.tick_rate * self.config.error_adjustment);
        self.accumulated = 0;
        self.subwindow_ticks = 0;

        self.mode = if estimate.deviates_from(self.previous, self.config.stability_threshold) {
            Mode::Tuning
        } else {
            Mode::Normal
        };
        self.previous = estimate;

        Some(estimate)
    }
}
