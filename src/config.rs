//! Averaging and calibration knobs.

/// Sub-windows folded into one reading once the estimate has settled.
pub const NORMAL_WINDOW_TICKS: u16 = 76;

/// Sub-windows folded into one reading while the estimate is still moving.
pub const TUNING_WINDOW_TICKS: u16 = 25;

/// Relative deviation from the previous reading beyond which the meter falls
/// back to the short window.
pub const STABILITY_THRESHOLD: f64 = 0.0025;

/// Default multiplicative correction applied on top of the window timer's
/// tick rate. `1.0` trusts the crystal; a per-unit measured value (for
/// example `1.000136814232641724`) can be dialed in after calibration.
pub const ERROR_ADJUSTMENT: f64 = 1.0;

/// Configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A window length of zero ticks.
    ZeroWindow,
    /// The stability threshold is not a finite, non-negative number.
    InvalidThreshold,
    /// The error adjustment is not a finite, positive number.
    InvalidAdjustment,
}

/// Averaging parameters for a [`Meter`](crate::Meter).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeterConfig {
    /// Window length, in sub-window ticks, while the estimate is settled.
    pub normal_window_ticks: u16,
    /// Window length, in sub-window ticks, while the estimate is moving.
    pub tuning_window_ticks: u16,
    /// Relative deviation separating "settled" from "moving".
    pub stability_threshold: f64,
    /// Multiplicative calibration correction, `1.0` for none.
    pub error_adjustment: f64,
}

impl MeterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.normal_window_ticks == 0 || self.tuning_window_ticks == 0 {
            return Err(ConfigError::ZeroWindow);
        }
        if !self.stability_threshold.is_finite() || self.stability_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold);
        }
        if !self.error_adjustment.is_finite() || self.error_adjustment <= 0.0 {
            return Err(ConfigError::InvalidAdjustment);
        }
        Ok(())
    }
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            normal_window_ticks: NORMAL_WINDOW_TICKS,
            tuning_window_ticks: TUNING_WINDOW_TICKS,
            stability_threshold: STABILITY_THRESHOLD,
            error_adjustment: ERROR_ADJUSTMENT,
        }
    }
}
