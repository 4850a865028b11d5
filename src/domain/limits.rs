use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Operating envelope of one generating unit: power output bounds and
/// the gas/heat values calibrated at minimum and maximum load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingLimits {
    pub power_min: f64,
    pub power_max: f64,
    pub gas_min: f64,
    pub gas_max: f64,
    pub heat_min: f64,
    pub heat_max: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum LimitsError {
    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },

    #[error("power_min must be >= 0, got {0}")]
    NegativePowerMin(f64),

    #[error("power_max ({power_max}) must be strictly greater than power_min ({power_min})")]
    DegeneratePowerRange { power_min: f64, power_max: f64 },

    #[error("{quantity}_min ({min}) must not exceed {quantity}_max ({max})")]
    InvertedRange { quantity: &'static str, min: f64, max: f64 },

    #[error("{quantity}_min must be >= 0, got {value}")]
    NegativeFlowMin { quantity: &'static str, value: f64 },
}

impl OperatingLimits {
    /// Checks the invariants the model derivation relies on. The affine
    /// couplings divide by `power_max - power_min`, so a degenerate power
    /// range must be rejected before any model is built.
    pub fn validate(&self) -> Result<(), LimitsError> {
        let fields = [
            ("power_min", self.power_min),
            ("power_max", self.power_max),
            ("gas_min", self.gas_min),
            ("gas_max", self.gas_max),
            ("heat_min", self.heat_min),
            ("heat_max", self.heat_max),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(LimitsError::NonFinite { field });
            }
        }
        if self.power_min < 0.0 {
            return Err(LimitsError::NegativePowerMin(self.power_min));
        }
        if self.power_max <= self.power_min {
            return Err(LimitsError::DegeneratePowerRange {
                power_min: self.power_min,
                power_max: self.power_max,
            });
        }
        for (quantity, min, max) in [
            ("gas", self.gas_min, self.gas_max),
            ("heat", self.heat_min, self.heat_max),
        ] {
            if min < 0.0 {
                return Err(LimitsError::NegativeFlowMin { quantity, value: min });
            }
            if min > max {
                return Err(LimitsError::InvertedRange { quantity, min, max });
            }
        }
        Ok(())
    }

    /// Affine gas-power coupling through `(power_min, gas_min)` and
    /// `(power_max, gas_max)`.
    pub fn gas_coupling(&self) -> AffineCoupling {
        AffineCoupling::through(
            (self.power_min, self.gas_min),
            (self.power_max, self.gas_max),
        )
    }

    /// Affine heat-power coupling through `(power_min, heat_min)` and
    /// `(power_max, heat_max)`.
    pub fn heat_coupling(&self) -> AffineCoupling {
        AffineCoupling::through(
            (self.power_min, self.heat_min),
            (self.power_max, self.heat_max),
        )
    }
}

/// The unique affine function through two calibration points, used to tie
/// part-load gas consumption and heat output to electrical power output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineCoupling {
    pub slope: f64,
    pub intercept: f64,
}

impl AffineCoupling {
    /// Caller guarantees `x_max != x_min` (see [`OperatingLimits::validate`]).
    pub fn through((x_min, y_min): (f64, f64), (x_max, y_max): (f64, f64)) -> Self {
        let slope = (y_max - y_min) / (x_max - x_min);
        let intercept = y_max - slope * x_max;
        Self { slope, intercept }
    }

    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
