use crate::error::{Result, ValidationError, ValidationErrorCode};
use crate::model::FirFilter;

/// Unit name both sides of a digital FIR stage must carry
pub const FIR_REQUIRED_UNITS: &str = "COUNTS";

/// Allowed deviation of the effective coefficient sum from unity
pub const FIR_SUM_TOLERANCE: f64 = 0.02;

/// Validates one FIR filter stage: unit names and coefficient-sum
/// plausibility, accounting for the symmetric listing convention.
pub struct FirStageValidator;

impl FirStageValidator {
    /// Validate a FIR stage's units and coefficient sum
    pub fn validate(fir: &FirFilter) -> Result<()> {
        if fir.input_units != FIR_REQUIRED_UNITS {
            return Err(ValidationError::new(
                ValidationErrorCode::FirUnitMismatch,
                Some(format!(
                    "input units '{}' must be '{}'",
                    fir.input_units, FIR_REQUIRED_UNITS
                )),
            )
            .with_detail("side", serde_json::json!("input")));
        }

        if fir.output_units != FIR_REQUIRED_UNITS {
            return Err(ValidationError::new(
                ValidationErrorCode::FirUnitMismatch,
                Some(format!(
                    "output units '{}' must be '{}'",
                    fir.output_units, FIR_REQUIRED_UNITS
                )),
            )
            .with_detail("side", serde_json::json!("output")));
        }

        // A symmetric listing omits the mirrored half, so the written
        // coefficients carry only half the effective sum.
        let raw_sum: f64 = fir.coefficients.iter().sum();
        let effective_sum = if fir.symmetry.is_symmetric() {
            2.0 * raw_sum
        } else {
            raw_sum
        };

        let deviation = (1.0 - effective_sum).abs();
        if deviation > FIR_SUM_TOLERANCE {
            return Err(ValidationError::new(
                ValidationErrorCode::FirCoefficientSumOutOfTolerance,
                Some(format!(
                    "effective coefficient sum {} deviates from unity by {} (tolerance {})",
                    effective_sum, deviation, FIR_SUM_TOLERANCE
                )),
            )
            .with_detail("observed", serde_json::json!(deviation)));
        }

        Ok(())
    }
}
