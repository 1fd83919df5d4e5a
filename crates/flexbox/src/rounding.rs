//! Fractional pixel rounding with carried error.

/// Residual error treated as a whole pixel when deciding compensation.
/// Absorbs binary floating point drift such as `3 * (100 / 3)` summing to
/// slightly less than the exact remainder.
const COMPENSATION_TOLERANCE: f64 = 1e-6;

/// Round half up, matching the integer rounding the layout is specified with
/// (`-2.5` rounds to `-2`, `2.5` rounds to `3`).
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds a sequence of fractional sizes to whole pixels so that the rounded
/// parts always add up to the rounded whole.
///
/// Every call to [`Self::round`] records the difference between the raw and the
/// rounded value; [`Self::compensate`] hands back a whole pixel once that
/// difference reaches one in either direction.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RoundingErrorAccumulator {
    /// Sum of `raw - rounded` over every value seen so far.
    error: f64,
}

impl RoundingErrorAccumulator {
    /// Create an accumulator with no carried error.
    #[inline]
    pub const fn new() -> Self {
        Self { error: 0.0 }
    }

    /// Round `value` half up and record the rounding error.
    #[inline]
    pub fn round(&mut self, value: f64) -> i32 {
        let rounded = round_half_up(value);
        self.error += value - rounded;
        rounded as i32
    }

    /// Return `+1`/`-1` when the carried error reached a whole pixel, consuming
    /// it; `0` otherwise.
    #[inline]
    pub fn compensate(&mut self) -> i32 {
        if self.error >= 1.0 - COMPENSATION_TOLERANCE {
            self.error -= 1.0;
            1
        } else if self.error <= -1.0 + COMPENSATION_TOLERANCE {
            self.error += 1.0;
            -1
        } else {
            0
        }
    }

    /// Round `value` and immediately apply any pending compensation.
    #[inline]
    pub fn round_and_compensate(&mut self, value: f64) -> i32 {
        let rounded = self.round(value);
        rounded + self.compensate()
    }

    /// Error carried so far (`raw - rounded`, summed).
    #[inline]
    pub const fn error(&self) -> f64 {
        self.error
    }
}
