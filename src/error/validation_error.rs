use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad error families surfaced to submitters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    Structural,
    Format,
    Ownership,
    Geometry,
    Rate,
    Response,
    Fir,
    Parse,
}

impl ErrorCategory {
    /// Returns the string representation of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Structural => "STRUCTURAL_ERROR",
            ErrorCategory::Format => "FORMAT_ERROR",
            ErrorCategory::Ownership => "OWNERSHIP_ERROR",
            ErrorCategory::Geometry => "GEOMETRY_ERROR",
            ErrorCategory::Rate => "RATE_ERROR",
            ErrorCategory::Response => "RESPONSE_ERROR",
            ErrorCategory::Fir => "FIR_ERROR",
            ErrorCategory::Parse => "PARSE_ERROR",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every distinct way a submitted batch can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationErrorCode {
    // Structural errors
    SchemaMismatch,
    MissingElement,
    NoChannels,

    // Format errors
    InvalidNetworkCode,
    InvalidStationCode,

    // Ownership errors
    NetworkNotOwned,
    StartTimeMismatch,
    EndTimeMismatch,
    InvalidTimestamp,

    // Geometry errors
    CoordinateOutOfRange,
    ChannelOffsetFromStation,

    // Sample-rate errors
    InvalidSampleRate,
    UnclassifiableSampleRate,
    BandCodeMismatch,

    // Response-chain errors
    MissingResponse,
    DuplicateResponse,
    EmptyResponseChain,
    ZeroStageGain,
    SensitivityMismatch,

    // FIR stage errors
    FirUnitMismatch,
    FirCoefficientSumOutOfTolerance,

    // Document ingestion errors
    DocumentParseFailed,
    OversizedDocument,
}

impl ValidationErrorCode {
    /// Returns the string representation of the error code
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationErrorCode::SchemaMismatch => "SCHEMA_MISMATCH",
            ValidationErrorCode::MissingElement => "MISSING_ELEMENT",
            ValidationErrorCode::NoChannels => "NO_CHANNELS",
            ValidationErrorCode::InvalidNetworkCode => "INVALID_NETWORK_CODE",
            ValidationErrorCode::InvalidStationCode => "INVALID_STATION_CODE",
            ValidationErrorCode::NetworkNotOwned => "NETWORK_NOT_OWNED",
            ValidationErrorCode::StartTimeMismatch => "START_TIME_MISMATCH",
            ValidationErrorCode::EndTimeMismatch => "END_TIME_MISMATCH",
            ValidationErrorCode::InvalidTimestamp => "INVALID_TIMESTAMP",
            ValidationErrorCode::CoordinateOutOfRange => "COORDINATE_OUT_OF_RANGE",
            ValidationErrorCode::ChannelOffsetFromStation => "CHANNEL_OFFSET_FROM_STATION",
            ValidationErrorCode::InvalidSampleRate => "INVALID_SAMPLE_RATE",
            ValidationErrorCode::UnclassifiableSampleRate => "UNCLASSIFIABLE_SAMPLE_RATE",
            ValidationErrorCode::BandCodeMismatch => "BAND_CODE_MISMATCH",
            ValidationErrorCode::MissingResponse => "MISSING_RESPONSE",
            ValidationErrorCode::DuplicateResponse => "DUPLICATE_RESPONSE",
            ValidationErrorCode::EmptyResponseChain => "EMPTY_RESPONSE_CHAIN",
            ValidationErrorCode::ZeroStageGain => "ZERO_STAGE_GAIN",
            ValidationErrorCode::SensitivityMismatch => "SENSITIVITY_MISMATCH",
            ValidationErrorCode::FirUnitMismatch => "FIR_UNIT_MISMATCH",
            ValidationErrorCode::FirCoefficientSumOutOfTolerance => {
                "FIR_COEFFICIENT_SUM_OUT_OF_TOLERANCE"
            }
            ValidationErrorCode::DocumentParseFailed => "DOCUMENT_PARSE_FAILED",
            ValidationErrorCode::OversizedDocument => "OVERSIZED_DOCUMENT",
        }
    }

    /// Returns the standard human-readable message for the error code
    pub fn message(&self) -> &'static str {
        match self {
            ValidationErrorCode::SchemaMismatch => "Document root is not a StationXML schema element",
            ValidationErrorCode::MissingElement => "Required element is missing",
            ValidationErrorCode::NoChannels => "Station defines no channels",
            ValidationErrorCode::InvalidNetworkCode => "Network code format is invalid",
            ValidationErrorCode::InvalidStationCode => "Station code format is invalid",
            ValidationErrorCode::NetworkNotOwned => "Network is not owned by the submitting operator",
            ValidationErrorCode::StartTimeMismatch => "Network start time does not match the registered epoch",
            ValidationErrorCode::EndTimeMismatch => "Network end time does not match the registered epoch",
            ValidationErrorCode::InvalidTimestamp => "Timestamp cannot be normalized",
            ValidationErrorCode::CoordinateOutOfRange => "Coordinate is outside the valid range",
            ValidationErrorCode::ChannelOffsetFromStation => "Channel coordinates differ from the station coordinates",
            ValidationErrorCode::InvalidSampleRate => "Sample rate is not a finite positive number",
            ValidationErrorCode::UnclassifiableSampleRate => "Sample rate exceeds the classifiable range",
            ValidationErrorCode::BandCodeMismatch => "Channel band code does not match the sample rate",
            ValidationErrorCode::MissingResponse => "Channel has no response element",
            ValidationErrorCode::DuplicateResponse => "Channel has more than one response element",
            ValidationErrorCode::EmptyResponseChain => "Response defines no stages",
            ValidationErrorCode::ZeroStageGain => "Response stage gain is zero",
            ValidationErrorCode::SensitivityMismatch => "Instrument sensitivity does not match the stage gain product",
            ValidationErrorCode::FirUnitMismatch => "FIR stage units are not COUNTS",
            ValidationErrorCode::FirCoefficientSumOutOfTolerance => "FIR coefficient sum deviates from unity",
            ValidationErrorCode::DocumentParseFailed => "Document could not be parsed",
            ValidationErrorCode::OversizedDocument => "Document exceeds the size limit",
        }
    }

    /// Returns the error family this code belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            ValidationErrorCode::SchemaMismatch
            | ValidationErrorCode::MissingElement
            | ValidationErrorCode::NoChannels => ErrorCategory::Structural,

            ValidationErrorCode::InvalidNetworkCode
            | ValidationErrorCode::InvalidStationCode => ErrorCategory::Format,

            ValidationErrorCode::NetworkNotOwned
            | ValidationErrorCode::StartTimeMismatch
            | ValidationErrorCode::EndTimeMismatch
            | ValidationErrorCode::InvalidTimestamp => ErrorCategory::Ownership,

            ValidationErrorCode::CoordinateOutOfRange
            | ValidationErrorCode::ChannelOffsetFromStation => ErrorCategory::Geometry,

            ValidationErrorCode::InvalidSampleRate
            | ValidationErrorCode::UnclassifiableSampleRate
            | ValidationErrorCode::BandCodeMismatch => ErrorCategory::Rate,

            ValidationErrorCode::MissingResponse
            | ValidationErrorCode::DuplicateResponse
            | ValidationErrorCode::EmptyResponseChain
            | ValidationErrorCode::ZeroStageGain
            | ValidationErrorCode::SensitivityMismatch => ErrorCategory::Response,

            ValidationErrorCode::FirUnitMismatch
            | ValidationErrorCode::FirCoefficientSumOutOfTolerance => ErrorCategory::Fir,

            ValidationErrorCode::DocumentParseFailed
            | ValidationErrorCode::OversizedDocument => ErrorCategory::Parse,
        }
    }
}

impl fmt::Display for ValidationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity of the offending element, filled in as the error propagates
/// back up the Batch -> Network -> Station -> Channel descent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ErrorContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<std::collections::HashMap<String, serde_json::Value>>,
}

impl ErrorContext {
    /// Creates a new empty error context
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a detail key-value pair
    pub fn with_detail<S: Into<String>>(mut self, key: S, value: serde_json::Value) -> Self {
        self.details
            .get_or_insert_with(std::collections::HashMap::new)
            .insert(key.into(), value);
        self
    }
}

/// Validation error value: a code, a human-readable message, and the
/// identity of the element that violated the check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationError {
    pub code: ValidationErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,
}

impl ValidationError {
    /// Creates a new validation error with the standard message for the code
    pub fn new(code: ValidationErrorCode, details: Option<String>) -> Self {
        let message = match details {
            Some(details) => format!("{}: {}", code.message(), details),
            None => code.message().to_string(),
        };
        Self {
            code,
            message,
            context: None,
        }
    }

    /// Creates a validation error with a pre-built context
    pub fn with_context(code: ValidationErrorCode, details: Option<String>, context: ErrorContext) -> Self {
        let mut error = Self::new(code, details);
        error.context = Some(context);
        error
    }

    /// Returns the error family of the carried code
    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    /// Attaches the source document name, without overwriting one set deeper
    pub fn in_source<S: Into<String>>(mut self, source: S) -> Self {
        let context = self.context.get_or_insert_with(ErrorContext::new);
        if context.source.is_none() {
            context.source = Some(source.into());
        }
        self
    }

    /// Attaches the network code, without overwriting one set deeper
    pub fn in_network<S: Into<String>>(mut self, code: S) -> Self {
        let context = self.context.get_or_insert_with(ErrorContext::new);
        if context.network.is_none() {
            context.network = Some(code.into());
        }
        self
    }

    /// Attaches the station code, without overwriting one set deeper
    pub fn in_station<S: Into<String>>(mut self, code: S) -> Self {
        let context = self.context.get_or_insert_with(ErrorContext::new);
        if context.station.is_none() {
            context.station = Some(code.into());
        }
        self
    }

    /// Attaches the full channel identity (NET.STA.LOC.CHA)
    pub fn in_channel<S: Into<String>>(mut self, identity: S) -> Self {
        let context = self.context.get_or_insert_with(ErrorContext::new);
        if context.channel.is_none() {
            context.channel = Some(identity.into());
        }
        self
    }

    /// Adds a detail key-value pair to the context
    pub fn with_detail<S: Into<String>>(mut self, key: S, value: serde_json::Value) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_detail(key, value));
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(context) = &self.context {
            let identity = context
                .channel
                .as_deref()
                .or(context.station.as_deref())
                .or(context.network.as_deref())
                .or(context.source.as_deref());
            if let Some(identity) = identity {
                return write!(f, "{} [{}]: {} ({})", self.category(), self.code, self.message, identity);
            }
        }
        write!(f, "{} [{}]: {}", self.category(), self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_categories() {
        assert_eq!(ValidationErrorCode::SchemaMismatch.category(), ErrorCategory::Structural);
        assert_eq!(ValidationErrorCode::NetworkNotOwned.category(), ErrorCategory::Ownership);
        assert_eq!(ValidationErrorCode::BandCodeMismatch.category(), ErrorCategory::Rate);
        assert_eq!(ValidationErrorCode::SensitivityMismatch.category(), ErrorCategory::Response);
        assert_eq!(ValidationErrorCode::FirUnitMismatch.category(), ErrorCategory::Fir);
    }

    #[test]
    fn test_error_creation() {
        let error = ValidationError::new(
            ValidationErrorCode::InvalidStationCode,
            Some("code 'TOOLONG1' exceeds 5 characters".to_string()),
        );

        assert_eq!(error.code, ValidationErrorCode::InvalidStationCode);
        assert!(error.message.starts_with("Station code format is invalid"));
        assert!(error.message.contains("TOOLONG1"));
        assert!(error.context.is_none());
    }

    #[test]
    fn test_context_enrichment_preserves_inner_identity() {
        let error = ValidationError::new(ValidationErrorCode::ZeroStageGain, None)
            .in_channel("NL.HGN.00.BHZ")
            .in_station("HGN")
            .in_network("NL");

        let context = error.context.unwrap();
        assert_eq!(context.channel.as_deref(), Some("NL.HGN.00.BHZ"));
        assert_eq!(context.station.as_deref(), Some("HGN"));
        assert_eq!(context.network.as_deref(), Some("NL"));
    }

    #[test]
    fn test_enrichment_does_not_overwrite() {
        let error = ValidationError::new(ValidationErrorCode::ZeroStageGain, None)
            .in_station("HGN")
            .in_station("OUTER");

        assert_eq!(error.context.unwrap().station.as_deref(), Some("HGN"));
    }

    #[test]
    fn test_display_includes_identity() {
        let error = ValidationError::new(ValidationErrorCode::SensitivityMismatch, None)
            .in_channel("NL.HGN.00.BHZ");

        let rendered = error.to_string();
        assert!(rendered.contains("RESPONSE_ERROR"));
        assert!(rendered.contains("SENSITIVITY_MISMATCH"));
        assert!(rendered.contains("NL.HGN.00.BHZ"));
    }

    #[test]
    fn test_json_serialization() {
        let error = ValidationError::new(ValidationErrorCode::BandCodeMismatch, None)
            .with_detail("expected", serde_json::json!("B"))
            .with_detail("actual", serde_json::json!("H"));

        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"BandCodeMismatch\""));
        assert!(json.contains("\"expected\":\"B\""));
    }
}
