use crate::config::ValidatorConfig;
use crate::error::{Result, ValidationError, ValidationErrorCode};
use crate::model::{Channel, Station};
use crate::validator::band_code::BandCodeClassifier;
use crate::validator::response_chain::ResponseChainValidator;

/// Per-channel validation outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelOutcome {
    /// True when the channel was the administrative logging channel and
    /// was therefore exempted from all data-channel checks
    pub is_log: bool,
}

/// Validates one channel: geometry against the parent station, sample rate
/// and band code, and the response chain.
pub struct ChannelValidator;

impl ChannelValidator {
    /// Validate a channel against its parent station. Every failure carries
    /// the full channel identity (NET.STA.LOC.CHA).
    pub fn validate(
        channel: &Channel,
        station: &Station,
        network_code: &str,
        config: &ValidatorConfig,
    ) -> Result<ChannelOutcome> {
        if channel.is_log() {
            return Ok(ChannelOutcome { is_log: true });
        }

        Self::validate_data_channel(channel, station, config)
            .map_err(|e| e.in_channel(channel.identity(network_code, &station.code)))?;

        Ok(ChannelOutcome { is_log: false })
    }

    fn validate_data_channel(
        channel: &Channel,
        station: &Station,
        config: &ValidatorConfig,
    ) -> Result<()> {
        // Exact equality: channels sit at the station's reference
        // coordinates, any offset at all is a metadata defect.
        if channel.latitude != station.latitude || channel.longitude != station.longitude {
            return Err(ValidationError::new(
                ValidationErrorCode::ChannelOffsetFromStation,
                Some(format!(
                    "channel at ({}, {}) but station at ({}, {})",
                    channel.latitude, channel.longitude, station.latitude, station.longitude
                )),
            ));
        }

        if !channel.sample_rate.is_finite() || channel.sample_rate <= 0.0 {
            return Err(ValidationError::new(
                ValidationErrorCode::InvalidSampleRate,
                Some(format!("sample rate {} is not a finite positive number", channel.sample_rate)),
            ));
        }

        // The letter is always computed (an unclassifiable rate is a defect
        // regardless of policy); only the code comparison is configurable.
        let expected_band = BandCodeClassifier::classify(channel.sample_rate)?;
        if config.enforce_band_code {
            let actual_band = channel.band_code().ok_or_else(|| {
                ValidationError::new(
                    ValidationErrorCode::BandCodeMismatch,
                    Some("channel code is empty".to_string()),
                )
            })?;
            if actual_band != expected_band {
                return Err(ValidationError::new(
                    ValidationErrorCode::BandCodeMismatch,
                    Some(format!(
                        "band code '{}' does not match the '{}' class of {} Hz",
                        actual_band, expected_band, channel.sample_rate
                    )),
                )
                .with_detail("expected", serde_json::json!(expected_band))
                .with_detail("actual", serde_json::json!(actual_band)));
            }
        }

        match channel.responses.len() {
            0 => {
                return Err(ValidationError::new(
                    ValidationErrorCode::MissingResponse,
                    None,
                ))
            }
            1 => {}
            count => {
                return Err(ValidationError::new(
                    ValidationErrorCode::DuplicateResponse,
                    Some(format!("{} response elements found", count)),
                ))
            }
        }

        ResponseChainValidator::validate(&channel.responses[0])
    }
}
