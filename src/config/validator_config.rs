/// Configuration for the validation engine.
///
/// The two policy toggles exist because observed deployments disagree on
/// whether the checks are enforced; both default to enabled and the system
/// owner decides per installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Enforce exact network end-time equality against the registered
    /// epoch (Default: true)
    pub enforce_end_time: bool,

    /// Enforce the sample-rate-to-band-code match on channel codes
    /// (Default: true)
    pub enforce_band_code: bool,

    /// Maximum submitted document size in bytes (Default: 10MB)
    pub max_document_size: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            enforce_end_time: true,
            enforce_band_code: true,
            max_document_size: 10_000_000, // 10MB
        }
    }
}

impl ValidatorConfig {
    /// Create a new configuration with all default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with every optional check enforced
    pub fn strict() -> Self {
        Self {
            enforce_end_time: true,
            enforce_band_code: true,
            max_document_size: 10_000_000, // 10MB
        }
    }

    /// Create a configuration matching the most permissive observed
    /// deployment (optional checks disabled, larger documents accepted)
    pub fn lenient() -> Self {
        Self {
            enforce_end_time: false,
            enforce_band_code: false,
            max_document_size: 50_000_000, // 50MB
        }
    }

    /// Validate the configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.max_document_size == 0 {
            return Err("max_document_size must be greater than 0".to_string());
        }

        Ok(())
    }
}
