use crate::config::ValidatorConfig;
use crate::error::{Result, ValidationError, ValidationErrorCode};
use crate::model::{Network, StagedStation};
use crate::session::{OperatorSession, StationRegistry};
use crate::validator::station::StationValidator;
use chrono::{DateTime, Utc};
use log::debug;
use regex::Regex;

/// Network code format: 1-2 alphanumeric characters
const NETWORK_CODE_PATTERN: &str = r"^[A-Za-z0-9]{1,2}$";

/// Validates one network entry: code format, ownership and epoch identity
/// against the session, then every station in document order.
pub struct NetworkValidator;

impl NetworkValidator {
    /// Validate a network and return the staged-station records of all its
    /// stations, in document order.
    pub fn validate(
        network: &Network,
        session: &OperatorSession,
        registry: &StationRegistry,
        config: &ValidatorConfig,
    ) -> Result<Vec<StagedStation>> {
        debug!(
            "Validating network '{}' with {} stations",
            network.code,
            network.stations.len()
        );

        Self::validate_identity(network, session, config)
            .map_err(|e| e.in_network(network.code.clone()))?;

        let mut staged = Vec::with_capacity(network.stations.len());
        for station in &network.stations {
            staged.push(StationValidator::validate(
                station,
                &network.code,
                registry,
                config,
            )?);
        }

        debug!("✓ Network '{}' is valid", network.code);
        Ok(staged)
    }

    fn validate_identity(
        network: &Network,
        session: &OperatorSession,
        config: &ValidatorConfig,
    ) -> Result<()> {
        let code_pattern = Regex::new(NETWORK_CODE_PATTERN).map_err(|e| {
            ValidationError::new(
                ValidationErrorCode::InvalidNetworkCode,
                Some(format!("network code pattern failed to compile: {}", e)),
            )
        })?;
        if !code_pattern.is_match(&network.code) {
            return Err(ValidationError::new(
                ValidationErrorCode::InvalidNetworkCode,
                Some(format!(
                    "code '{}' must be 1-2 alphanumeric characters",
                    network.code
                )),
            ));
        }

        if !session.owns_network(&network.code) {
            return Err(ValidationError::new(
                ValidationErrorCode::NetworkNotOwned,
                Some(format!(
                    "network '{}' is not owned by operator of '{}'",
                    network.code, session.network_code
                )),
            ));
        }

        let start = Self::normalize_timestamp(&network.start)?;
        if start != session.network_start {
            return Err(ValidationError::new(
                ValidationErrorCode::StartTimeMismatch,
                Some(format!(
                    "document start {} does not match registered start {}",
                    start, session.network_start
                )),
            ));
        }

        if config.enforce_end_time {
            let end = network
                .end
                .as_deref()
                .map(Self::normalize_timestamp)
                .transpose()?;
            if end != session.network_end {
                return Err(ValidationError::new(
                    ValidationErrorCode::EndTimeMismatch,
                    Some(format!(
                        "document end {:?} does not match registered end {:?}",
                        end, session.network_end
                    )),
                ));
            }
        }

        Ok(())
    }

    /// Normalize an epoch timestamp to a canonical UTC instant. A value
    /// without a zone designator is treated as UTC (trailing `Z` appended).
    pub fn normalize_timestamp(raw: &str) -> Result<DateTime<Utc>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::new(
                ValidationErrorCode::InvalidTimestamp,
                Some("timestamp is empty".to_string()),
            ));
        }

        let has_zone = match trimmed.split_once('T') {
            Some((_, time)) => {
                time.ends_with('Z') || time.ends_with('z') || time.contains('+') || time.contains('-')
            }
            None => false,
        };
        let candidate = if has_zone {
            trimmed.to_string()
        } else {
            format!("{}Z", trimmed)
        };

        DateTime::parse_from_rfc3339(&candidate)
            .map(|instant| instant.with_timezone(&Utc))
            .map_err(|e| {
                ValidationError::new(
                    ValidationErrorCode::InvalidTimestamp,
                    Some(format!("'{}' cannot be normalized: {}", raw, e)),
                )
            })
    }
}
