use crate::error::{Result, ValidationError, ValidationErrorCode};

/// Sampling-rate breakpoints and the band-code letter for each bucket.
/// Ascending, inclusive upper bounds; the first satisfied bound wins, so
/// boundary rates fall into the lower-letter bucket.
const BAND_CODE_TABLE: [(f64, char); 9] = [
    (0.001, 'R'),
    (0.01, 'U'),
    (0.1, 'V'),
    (1.0, 'L'),
    (10.0, 'M'),
    (80.0, 'B'),
    (250.0, 'H'),
    (1000.0, 'C'),
    (5000.0, 'F'),
];

/// Maps a sampling rate to the band-code letter its channel code must lead
/// with. Total over (0, 5000] Hz; anything above the top breakpoint is an
/// error, never a silent default.
pub struct BandCodeClassifier;

impl BandCodeClassifier {
    /// Classify a sampling rate into its band-code letter
    pub fn classify(sample_rate_hz: f64) -> Result<char> {
        if !sample_rate_hz.is_finite() || sample_rate_hz <= 0.0 {
            return Err(ValidationError::new(
                ValidationErrorCode::InvalidSampleRate,
                Some(format!("sample rate {} is not a finite positive number", sample_rate_hz)),
            ));
        }

        for (upper_bound, letter) in BAND_CODE_TABLE {
            if sample_rate_hz <= upper_bound {
                return Ok(letter);
            }
        }

        Err(ValidationError::new(
            ValidationErrorCode::UnclassifiableSampleRate,
            Some(format!(
                "sample rate {} Hz exceeds the {} Hz classification ceiling",
                sample_rate_hz, 5000.0
            )),
        )
        .with_detail("sampleRate", serde_json::json!(sample_rate_hz)))
    }
}
