//! Gross / net pay computation.

use crate::config::PayValidation;
use crate::errors::{AppError, AppResult};
use crate::models::pay::{PayInput, PayResult};

/// Parse one numeric field. Whitespace is ignored; `inf`/`NaN` are not numbers here.
pub fn parse_field(field: &'static str, raw: &str) -> AppResult<f64> {
    let invalid = || AppError::InvalidInput {
        field,
        value: raw.to_string(),
    };

    let v: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !v.is_finite() {
        return Err(invalid());
    }
    Ok(v)
}

impl PayInput {
    pub fn parse(hours: &str, rate: &str, deduction_percent: &str) -> AppResult<Self> {
        Ok(Self {
            hours: parse_field("hours", hours)?,
            rate: parse_field("rate", rate)?,
            deduction_percent: parse_field("deduction", deduction_percent)?,
        })
    }

    /// Bounds check applied under `PayValidation::Strict`.
    pub fn check_bounds(&self) -> AppResult<()> {
        if self.hours < 0.0 {
            return Err(AppError::OutOfRange {
                field: "hours",
                value: self.hours,
            });
        }
        if self.rate < 0.0 {
            return Err(AppError::OutOfRange {
                field: "rate",
                value: self.rate,
            });
        }
        if !(0.0..=100.0).contains(&self.deduction_percent) {
            return Err(AppError::OutOfRange {
                field: "deduction",
                value: self.deduction_percent,
            });
        }
        Ok(())
    }
}

/// gross = hours × rate; net = gross − gross × deduction / 100.
pub fn compute(input: &PayInput) -> PayResult {
    let gross = input.hours * input.rate;
    let net = gross - gross * input.deduction_percent / 100.0;
    PayResult { gross, net }
}

/// Parse the three textual inputs and compute the result.
///
/// Any unparseable field yields `AppError::InvalidInput` and no result.
pub fn calculate(hours: &str, rate: &str, deduction_percent: &str) -> AppResult<PayResult> {
    calculate_with(hours, rate, deduction_percent, PayValidation::Permissive)
}

pub fn calculate_with(
    hours: &str,
    rate: &str,
    deduction_percent: &str,
    validation: PayValidation,
) -> AppResult<PayResult> {
    let input = PayInput::parse(hours, rate, deduction_percent)?;
    if validation == PayValidation::Strict {
        input.check_bounds()?;
    }
    Ok(compute(&input))
}
