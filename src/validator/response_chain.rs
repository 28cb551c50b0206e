use crate::error::{Result, ValidationError, ValidationErrorCode};
use crate::model::Response;
use crate::validator::fir_stage::FirStageValidator;

/// Allowed symmetric relative difference between the declared instrument
/// sensitivity and the computed stage-gain product
pub const SENSITIVITY_TOLERANCE: f64 = 0.001;

/// Validates a channel's response stage sequence: per-stage gains, FIR
/// sub-stages, and the end-to-end sensitivity cross-check.
pub struct ResponseChainValidator;

impl ResponseChainValidator {
    /// Validate the stage chain of a single response element
    pub fn validate(response: &Response) -> Result<()> {
        if response.stages.is_empty() {
            return Err(ValidationError::new(
                ValidationErrorCode::EmptyResponseChain,
                None,
            ));
        }

        let mut per_stage_gain = 1.0_f64;
        for (index, stage) in response.stages.iter().enumerate() {
            if stage.gain == 0.0 {
                return Err(ValidationError::new(
                    ValidationErrorCode::ZeroStageGain,
                    Some(format!("stage {} has zero gain", index)),
                )
                .with_detail("stageIndex", serde_json::json!(index)));
            }
            per_stage_gain *= stage.gain;

            if let Some(fir) = &stage.fir {
                FirStageValidator::validate(fir)
                    .map_err(|e| e.with_detail("stageIndex", serde_json::json!(index)))?;
            }
        }

        Self::cross_check_sensitivity(response.instrument_sensitivity, per_stage_gain)
    }

    /// Symmetric relative-difference test between the reported sensitivity
    /// and the computed gain product. Tolerant to which operand is larger;
    /// both operands are nonzero by the time this runs.
    fn cross_check_sensitivity(reported: f64, computed: f64) -> Result<()> {
        let relative_difference = 1.0 - reported.min(computed) / reported.max(computed);
        if relative_difference > SENSITIVITY_TOLERANCE {
            return Err(ValidationError::new(
                ValidationErrorCode::SensitivityMismatch,
                Some(format!(
                    "reported sensitivity {} differs from computed stage product {} (relative difference {})",
                    reported, computed, relative_difference
                )),
            )
            .with_detail("reported", serde_json::json!(reported))
            .with_detail("computed", serde_json::json!(computed)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FirFilter, FirSymmetry, Stage};

    #[test]
    fn test_matching_chain_passes() {
        let response = Response::new(4000.0)
            .with_stage(Stage::new(2000.0))
            .with_stage(Stage::new(2.0));
        assert!(ResponseChainValidator::validate(&response).is_ok());
    }

    #[test]
    fn test_empty_chain_fails() {
        let response = Response::new(1000.0);
        let error = ResponseChainValidator::validate(&response).unwrap_err();
        assert_eq!(error.code, ValidationErrorCode::EmptyResponseChain);
    }

    #[test]
    fn test_zero_gain_carries_stage_index() {
        let response = Response::new(1000.0)
            .with_stage(Stage::new(1000.0))
            .with_stage(Stage::new(0.0));
        let error = ResponseChainValidator::validate(&response).unwrap_err();
        assert_eq!(error.code, ValidationErrorCode::ZeroStageGain);
        assert!(error.message.contains("stage 1"));
    }

    #[test]
    fn test_sensitivity_within_tolerance_passes() {
        // Relative difference 0.0005, inside the 0.001 tolerance.
        let response = Response::new(100.0).with_stage(Stage::new(100.05));
        assert!(ResponseChainValidator::validate(&response).is_ok());
    }

    #[test]
    fn test_sensitivity_mismatch_fails() {
        let response = Response::new(100.0).with_stage(Stage::new(102.0));
        let error = ResponseChainValidator::validate(&response).unwrap_err();
        assert_eq!(error.code, ValidationErrorCode::SensitivityMismatch);
    }

    #[test]
    fn test_sensitivity_check_is_symmetric() {
        let larger_reported = Response::new(102.0).with_stage(Stage::new(100.0));
        assert_eq!(
            ResponseChainValidator::validate(&larger_reported).unwrap_err().code,
            ValidationErrorCode::SensitivityMismatch
        );

        let larger_computed = Response::new(100.0).with_stage(Stage::new(102.0));
        assert_eq!(
            ResponseChainValidator::validate(&larger_computed).unwrap_err().code,
            ValidationErrorCode::SensitivityMismatch
        );
    }

    #[test]
    fn test_fir_failure_propagates_with_stage_index() {
        let bad_fir = FirFilter::new("COUNTS", "COUNTS", FirSymmetry::None)
            .with_coefficients(vec![0.4, 0.4]);
        let response = Response::new(1000.0)
            .with_stage(Stage::new(1000.0))
            .with_stage(Stage::new(1.0).with_fir(bad_fir));

        let error = ResponseChainValidator::validate(&response).unwrap_err();
        assert_eq!(error.code, ValidationErrorCode::FirCoefficientSumOutOfTolerance);
        let details = error.context.unwrap().details.unwrap();
        assert_eq!(details.get("stageIndex"), Some(&serde_json::json!(1)));
    }
}
