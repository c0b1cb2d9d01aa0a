use core::fmt;

/// A frequency estimate in Hz.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frequency(f64);

impl Frequency {
    pub const ZERO: Self = Self(0.0);

    pub const fn from_hz(hz: f64) -> Self {
        Self(hz)
    }

    pub const fn hz(self) -> f64 {
        self.0
    }

    pub fn khz(self) -> f64 {
        self.0 / 1000.0
    }

    /// Whether `self` differs from `previous` by more than `fraction` of
    /// `previous`. An exact hit on the bound counts as stable.
    ///
    /// With `previous` at zero the bound is zero too, so any nonzero reading
    /// deviates. That is what makes the very first estimate after power-up
    /// register as unstable.
    pub fn deviates_from(self, previous: Frequency, fraction: f64) -> bool {
        fabs(self.0 - previous.0) > previous.0 * fraction
    }
}

// f64::abs lives in std, not core.
fn fabs(value: f64) -> f64 {
    if value < 0.0 {
        -value
    } else {
        value
    }
}

impl fmt::Display for Frequency {
    /// Renders as kHz with up to three decimals and trailing zeros trimmed,
    /// e.g. `803.094 kHz`, `12.5 kHz`, `1 kHz`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hz = if self.0 < 0.0 { 0.0 } else { self.0 };
        // Rounded Hz doubles as milli-kHz.
        let milli_khz = (hz + 0.5) as u64;
        let whole = milli_khz / 1000;
        let mut frac = milli_khz % 1000;
        if frac == 0 {
            write!(f, "{} kHz", whole)
        } else {
            let mut width = 3;
            while frac % 10 == 0 {
                frac /= 10;
                width -= 1;
            }
            write!(f, "{}.{:0width$} kHz", whole, frac, width = width)
        }
    }
}
