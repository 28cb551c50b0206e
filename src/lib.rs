//! # StationXML Validator
//!
//! Validation engine for seismic-network station-metadata submissions.
//! Operators upload StationXML documents describing their networks,
//! stations, channels, and instrument response chains; this crate decides
//! whether a submitted batch is accepted into the staging pipeline or
//! rejected with a precise diagnostic.
//!
//! ## Features
//!
//! - **Fail-fast descent**: Batch -> Network -> Station -> Channel ->
//!   Response -> FIR stage; the first violation aborts the whole batch
//! - **Ownership checks**: network code and epoch identity against the
//!   authenticated operator session, with an administrator bypass
//! - **Domain checks**: sampling-rate band-code classification, gain-chain
//!   and sensitivity cross-checks, FIR coefficient-sum accounting
//! - **Snapshot collaborators**: session and known-station registry are
//!   immutable parameters, so concurrent validations share no state
//! - **Typed document tree**: the parser boundary is a trait; the engine
//!   never performs string-keyed element lookups
//!
//! ## Quick Start
//!
//! ```rust
//! use stationxml_validator::{
//!     BatchValidator, JsonDocumentParser, OperatorSession, StationRegistry, SubmittedFile,
//! };
//! use chrono::{TimeZone, Utc};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Session and registry snapshots come from the surrounding service
//!     let session = OperatorSession::new("NL", Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap());
//!     let registry = StationRegistry::from_codes(["HGN"]);
//!
//!     let file = SubmittedFile::new(
//!         "upload.json",
//!         r#"{
//!             "rootTag": "FDSNStationXML",
//!             "networks": [{
//!                 "code": "NL",
//!                 "start": "2010-01-01T00:00:00Z",
//!                 "stations": [{
//!                     "code": "DBN",
//!                     "latitude": 52.1017,
//!                     "longitude": 5.1783,
//!                     "channels": [{
//!                         "code": "BHZ",
//!                         "latitude": 52.1017,
//!                         "longitude": 5.1783,
//!                         "sampleRate": 40.0,
//!                         "responses": [{
//!                             "instrumentSensitivity": 1500.0,
//!                             "stages": [{"gain": 1500.0}]
//!                         }]
//!                     }]
//!                 }]
//!             }]
//!         }"#,
//!     );
//!
//!     let validator = BatchValidator::default();
//!     let staged = validator.validate_batch(&[file], &JsonDocumentParser::new(), &session, &registry)?;
//!
//!     assert_eq!(staged.len(), 1);
//!     assert!(staged[0].is_new); // DBN is absent from the registry snapshot
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod model;
pub mod parser;
pub mod session;
pub mod config;
pub mod validator;

// Validation engine exports
pub use validator::{
    BandCodeClassifier, BatchValidator, ChannelOutcome, ChannelValidator,
    FirStageValidator, NetworkValidator, ResponseChainValidator, StationValidator,
};

// Document tree exports
pub use model::{
    Channel, Document, FirFilter, FirSymmetry, Network, Response, StagedStation,
    Stage, Station, LOG_CHANNEL_CODE, SCHEMA_ROOT_TAG,
};

// Parser boundary exports
pub use parser::{DocumentParser, JsonDocumentParser, SubmittedFile};

// Collaborator snapshot exports
pub use session::{OperatorSession, StationRegistry};

// Configuration exports
pub use config::ValidatorConfig;

// Error exports
pub use error::{ErrorCategory, ErrorContext, ValidationError, ValidationErrorCode};

// Result type alias
pub type Result<T> = std::result::Result<T, ValidationError>;

// Re-export common dependencies for convenience
pub use chrono::{DateTime, Utc};

/// Prelude module for convenient importing
pub mod prelude {
    pub use crate::{
        BandCodeClassifier, BatchValidator, Channel, ChannelValidator, Document,
        DocumentParser, ErrorCategory, FirFilter, FirStageValidator, FirSymmetry,
        JsonDocumentParser, Network, NetworkValidator, OperatorSession, Response,
        ResponseChainValidator, Result, StagedStation, Stage, Station, StationRegistry,
        StationValidator, SubmittedFile, ValidationError, ValidationErrorCode,
        ValidatorConfig,
    };
    pub use chrono::{DateTime, Utc};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
