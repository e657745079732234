use serde::Deserialize;

use crate::error::{FernError, Result};

/// The three numbers that shape one fern.
///
/// ### Fields
/// - `primary_size` - Length in pixels of the root tendril's segments.
/// - `reduction` - Multiplicative shrink per segment, strictly inside `(0, 1)`.
/// - `turn_bias` - Signed drift of direction; children mirror its sign.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationParameters {
    pub primary_size: f64,
    pub reduction: f64,
    pub turn_bias: f64,
}

impl GenerationParameters {
    pub fn new(primary_size: f64, reduction: f64, turn_bias: f64) -> Self {
        Self {
            primary_size,
            reduction,
            turn_bias,
        }
    }

    /// Checks the preconditions that keep the growth loop finite.
    ///
    /// A `reduction` of `1` or more never shrinks a tendril below the
    /// termination threshold, so it is rejected up front.
    pub fn validate(&self) -> Result<()> {
        if !self.primary_size.is_finite() || self.primary_size <= 0.0 {
            return Err(FernError::invalid(
                "primary_size",
                self.primary_size,
                "must be a finite value above zero",
            ));
        }
        if !self.reduction.is_finite() || self.reduction <= 0.0 || self.reduction >= 1.0 {
            return Err(FernError::invalid(
                "reduction",
                self.reduction,
                "must lie strictly between 0 and 1",
            ));
        }
        if !self.turn_bias.is_finite() {
            return Err(FernError::invalid(
                "turn_bias",
                self.turn_bias,
                "must be finite",
            ));
        }
        Ok(())
    }
}

/// Run-wide tuning that is not part of the fern's shape parameters.
///
/// ### Fields
/// - `max_draw_calls` - Upper bound on lines plus triangles in one run.
/// - `branch_jitter` - Half-width of the random offset added to the
///   direction handed to child tendrils. `0.0` disables it.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_draw_calls: usize,
    pub branch_jitter: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_draw_calls: 250_000,
            branch_jitter: 0.0,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.max_draw_calls == 0 {
            return Err(FernError::invalid(
                "max_draw_calls",
                0.0,
                "must allow at least one draw call",
            ));
        }
        if !self.branch_jitter.is_finite() || self.branch_jitter < 0.0 {
            return Err(FernError::invalid(
                "branch_jitter",
                self.branch_jitter,
                "must be finite and not negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected_name(params: GenerationParameters) -> &'static str {
        match params.validate() {
            Err(FernError::InvalidParameter { name, .. }) => name,
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn accepts_typical_parameters() {
        assert!(GenerationParameters::new(40.0, 0.8, 0.3).validate().is_ok());
        assert!(GenerationParameters::new(3.01, 0.01, -2.0).validate().is_ok());
        assert!(GenerationParameters::new(10.0, 0.5, 0.0).validate().is_ok());
    }

    #[test]
    fn rejects_reduction_outside_open_unit_interval() {
        for r in [0.0, -0.5, 1.0, 1.5, f64::NAN, f64::INFINITY] {
            assert_eq!(
                rejected_name(GenerationParameters::new(40.0, r, 0.3)),
                "reduction",
                "reduction {r} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_positive_primary_size() {
        for s in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert_eq!(
                rejected_name(GenerationParameters::new(s, 0.8, 0.3)),
                "primary_size"
            );
        }
    }

    #[test]
    fn rejects_non_finite_turn_bias() {
        assert_eq!(
            rejected_name(GenerationParameters::new(40.0, 0.8, f64::NAN)),
            "turn_bias"
        );
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.branch_jitter, 0.0);
    }

    #[test]
    fn config_rejects_zero_budget_and_negative_jitter() {
        let cfg = Config {
            max_draw_calls: 0,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = Config {
            branch_jitter: -0.1,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }
}
