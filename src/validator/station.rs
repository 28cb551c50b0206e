use crate::config::ValidatorConfig;
use crate::error::{Result, ValidationError, ValidationErrorCode};
use crate::model::{StagedStation, Station};
use crate::session::StationRegistry;
use crate::validator::channel::ChannelValidator;
use log::debug;
use regex::Regex;

/// Station code format: 1-5 alphanumeric characters
const STATION_CODE_PATTERN: &str = r"^[A-Za-z0-9]{1,5}$";

/// Validates one station: code format, geometry ranges, and every channel
/// in document order, stopping at the first violation.
pub struct StationValidator;

impl StationValidator {
    /// Validate a station and, on success, return its staging descriptor
    /// with the registry-derived is-new flag.
    pub fn validate(
        station: &Station,
        network_code: &str,
        registry: &StationRegistry,
        config: &ValidatorConfig,
    ) -> Result<StagedStation> {
        debug!(
            "Validating station '{}' with {} channels",
            station.code,
            station.channels.len()
        );

        Self::validate_station(station, network_code, config)
            .map_err(|e| e.in_station(station.code.clone()).in_network(network_code.to_string()))?;

        let is_new = !registry.is_known(&station.code);
        debug!(
            "✓ Station '{}' is valid ({})",
            station.code,
            if is_new { "new" } else { "known" }
        );

        Ok(StagedStation::new(
            network_code.to_string(),
            station.code.clone(),
            is_new,
        ))
    }

    fn validate_station(
        station: &Station,
        network_code: &str,
        config: &ValidatorConfig,
    ) -> Result<()> {
        let code_pattern = Regex::new(STATION_CODE_PATTERN).map_err(|e| {
            ValidationError::new(
                ValidationErrorCode::InvalidStationCode,
                Some(format!("station code pattern failed to compile: {}", e)),
            )
        })?;
        if !code_pattern.is_match(&station.code) {
            return Err(ValidationError::new(
                ValidationErrorCode::InvalidStationCode,
                Some(format!(
                    "code '{}' must be 1-5 alphanumeric characters",
                    station.code
                )),
            ));
        }

        if !(-90.0..=90.0).contains(&station.latitude) {
            return Err(ValidationError::new(
                ValidationErrorCode::CoordinateOutOfRange,
                Some(format!("latitude {} outside [-90, 90]", station.latitude)),
            ));
        }

        if !(-180.0..=180.0).contains(&station.longitude) {
            return Err(ValidationError::new(
                ValidationErrorCode::CoordinateOutOfRange,
                Some(format!("longitude {} outside [-180, 180]", station.longitude)),
            ));
        }

        if station.channels.is_empty() {
            return Err(ValidationError::new(
                ValidationErrorCode::NoChannels,
                Some(format!("station '{}' defines no channels", station.code)),
            ));
        }

        for channel in &station.channels {
            ChannelValidator::validate(channel, station, network_code, config)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Channel, Response, Stage};

    fn valid_station() -> Station {
        let mut station = Station::new("HGN", 50.764, 5.9317);
        station.add_channel(
            Channel::new("BHZ", 50.764, 5.9317, 40.0)
                .with_response(Response::new(1000.0).with_stage(Stage::new(1000.0))),
        );
        station
    }

    #[test]
    fn test_valid_station_is_staged_as_new() {
        let staged = StationValidator::validate(
            &valid_station(),
            "NL",
            &StationRegistry::new(),
            &ValidatorConfig::default(),
        )
        .unwrap();
        assert_eq!(staged.network_code, "NL");
        assert_eq!(staged.station_code, "HGN");
        assert!(staged.is_new);
    }

    #[test]
    fn test_known_station_is_not_new() {
        let registry = StationRegistry::new().with_station("HGN");
        let staged = StationValidator::validate(
            &valid_station(),
            "NL",
            &registry,
            &ValidatorConfig::default(),
        )
        .unwrap();
        assert!(!staged.is_new);
    }

    #[test]
    fn test_invalid_code_fails() {
        let mut station = valid_station();
        station.code = "TOOLONG".to_string();
        let error = StationValidator::validate(
            &station,
            "NL",
            &StationRegistry::new(),
            &ValidatorConfig::default(),
        )
        .unwrap_err();
        assert_eq!(error.code, ValidationErrorCode::InvalidStationCode);
    }

    #[test]
    fn test_out_of_range_geometry_fails() {
        let mut station = valid_station();
        station.latitude = 90.5;
        let error = StationValidator::validate(
            &station,
            "NL",
            &StationRegistry::new(),
            &ValidatorConfig::default(),
        )
        .unwrap_err();
        assert_eq!(error.code, ValidationErrorCode::CoordinateOutOfRange);
    }

    #[test]
    fn test_station_without_channels_fails() {
        let station = Station::new("HGN", 50.764, 5.9317);
        let error = StationValidator::validate(
            &station,
            "NL",
            &StationRegistry::new(),
            &ValidatorConfig::default(),
        )
        .unwrap_err();
        assert_eq!(error.code, ValidationErrorCode::NoChannels);
    }

    #[test]
    fn test_channel_failure_gains_station_identity() {
        let mut station = valid_station();
        station.channels[0].latitude += 0.1;
        let error = StationValidator::validate(
            &station,
            "NL",
            &StationRegistry::new(),
            &ValidatorConfig::default(),
        )
        .unwrap_err();
        assert_eq!(error.code, ValidationErrorCode::ChannelOffsetFromStation);
        let context = error.context.unwrap();
        assert_eq!(context.station.as_deref(), Some("HGN"));
        assert_eq!(context.network.as_deref(), Some("NL"));
        assert_eq!(context.channel.as_deref(), Some("NL.HGN..BHZ"));
    }
}
