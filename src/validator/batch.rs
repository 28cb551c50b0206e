use crate::config::ValidatorConfig;
use crate::error::{Result, ValidationError, ValidationErrorCode};
use crate::model::{Document, StagedStation, SCHEMA_ROOT_TAG};
use crate::parser::{DocumentParser, SubmittedFile};
use crate::session::{OperatorSession, StationRegistry};
use crate::validator::network::NetworkValidator;
use log::{debug, error, info};
use uuid::Uuid;

/// Top-level entry point: validates a whole submitted batch against the
/// operator session and the known-station registry snapshot.
///
/// The descent is strictly fail-fast: the first violation anywhere aborts
/// the call and no staged-station records are returned for any file.
pub struct BatchValidator {
    config: ValidatorConfig,
}

impl BatchValidator {
    /// Create a batch validator with the given configuration
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Access the active configuration
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a batch of submitted files in submission order. On success
    /// returns one staged-station record per validated station, across all
    /// files; on the first failure returns that error and nothing else.
    pub fn validate_batch(
        &self,
        files: &[SubmittedFile],
        parser: &dyn DocumentParser,
        session: &OperatorSession,
        registry: &StationRegistry,
    ) -> Result<Vec<StagedStation>> {
        let submission_id = Uuid::new_v4();
        info!(
            "Validating submission {} ({} files) for operator network '{}'",
            submission_id,
            files.len(),
            session.network_code
        );

        let mut staged = Vec::new();
        for file in files {
            debug!("Submission {}: processing file '{}'", submission_id, file.name);

            if file.content.len() > self.config.max_document_size {
                error!(
                    "Submission {}: file '{}' exceeds size limit ({} > {} bytes)",
                    submission_id,
                    file.name,
                    file.content.len(),
                    self.config.max_document_size
                );
                return Err(ValidationError::new(
                    ValidationErrorCode::OversizedDocument,
                    Some(format!(
                        "{} bytes exceeds the {} byte limit",
                        file.content.len(),
                        self.config.max_document_size
                    )),
                )
                .in_source(file.name.clone()));
            }

            let document = parser
                .parse(&file.content, Some(&file.name))
                .map_err(|e| e.in_source(file.name.clone()))?;

            let records = self
                .validate_document(&document, session, registry)
                .map_err(|e| e.in_source(file.name.clone()))?;
            staged.extend(records);
        }

        info!(
            "✓ Submission {} accepted: {} stations staged",
            submission_id,
            staged.len()
        );
        Ok(staged)
    }

    /// Validate one already-parsed document: root schema identifier, then
    /// every network in document order.
    pub fn validate_document(
        &self,
        document: &Document,
        session: &OperatorSession,
        registry: &StationRegistry,
    ) -> Result<Vec<StagedStation>> {
        if document.root_tag != SCHEMA_ROOT_TAG {
            return Err(ValidationError::new(
                ValidationErrorCode::SchemaMismatch,
                Some(format!(
                    "root element '{}' is not '{}'",
                    document.root_tag, SCHEMA_ROOT_TAG
                )),
            ));
        }

        let mut staged = Vec::new();
        for network in &document.networks {
            staged.extend(NetworkValidator::validate(
                network,
                session,
                registry,
                &self.config,
            )?);
        }
        Ok(staged)
    }
}

impl Default for BatchValidator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}
