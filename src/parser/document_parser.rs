use crate::error::{Result, ValidationError, ValidationErrorCode};
use crate::model::Document;
use log::{debug, error, info, warn};
use tokio::fs;

/// One submitted metadata file: the operator-supplied name and raw content
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedFile {
    /// Name the file was submitted under
    pub name: String,

    /// Raw file content
    pub content: String,
}

impl SubmittedFile {
    /// Create a submitted file from in-memory content
    pub fn new<S: Into<String>>(name: S, content: S) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Load one submission file from disk
    pub async fn from_path(path: &str) -> Result<Self> {
        info!("Loading submission file: {}", path);

        if path.trim().is_empty() {
            error!("Submission file path is empty");
            return Err(ValidationError::new(
                ValidationErrorCode::DocumentParseFailed,
                Some("file path cannot be empty".to_string()),
            ));
        }

        match fs::metadata(path).await {
            Ok(metadata) => {
                debug!("File found: {} ({} bytes)", path, metadata.len());
                if metadata.len() == 0 {
                    warn!("Submission file is empty: {}", path);
                }
            }
            Err(e) => {
                error!("Cannot access submission file '{}': {}", path, e);
                return Err(ValidationError::new(
                    ValidationErrorCode::DocumentParseFailed,
                    Some(format!("failed to access file {}: {}", path, e)),
                )
                .in_source(path));
            }
        }

        let content = match fs::read_to_string(path).await {
            Ok(content) => {
                debug!("Successfully read {} bytes from {}", content.len(), path);
                content
            }
            Err(e) => {
                error!("Failed to read submission file '{}': {}", path, e);
                return Err(ValidationError::new(
                    ValidationErrorCode::DocumentParseFailed,
                    Some(format!("failed to read file {}: {}", path, e)),
                )
                .in_source(path));
            }
        };

        let name = std::path::Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string());

        Ok(Self { name, content })
    }

    /// Load a batch of submission files from disk, in submission order
    pub async fn load_submission(paths: &[String]) -> Result<Vec<Self>> {
        if paths.is_empty() {
            return Err(ValidationError::new(
                ValidationErrorCode::DocumentParseFailed,
                Some("no files provided".to_string()),
            ));
        }

        info!("Loading {} submission files", paths.len());
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            files.push(Self::from_path(path).await?);
        }
        Ok(files)
    }
}

/// Boundary to the external document-tree parser. Implementations turn one
/// submitted file's raw content into a typed [`Document`]; the validation
/// engine never performs string-keyed element lookups itself.
pub trait DocumentParser {
    /// Parse raw content into a document tree
    fn parse(&self, content: &str, source: Option<&str>) -> Result<Document>;
}

/// Built-in parser for the JSON rendering of the document tree, used by the
/// staging pipeline's internal round trips and by tests. The StationXML
/// front end implements [`DocumentParser`] on top of its own XML reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDocumentParser;

impl JsonDocumentParser {
    /// Create a new JSON document parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a document tree from a JSON string
    pub fn from_json(json_str: &str) -> Result<Document> {
        Self::from_json_with_context(json_str, None)
    }

    /// Parse a document tree from a JSON string with file context
    pub fn from_json_with_context(json_str: &str, source: Option<&str>) -> Result<Document> {
        let context = source.map(|s| format!(" (file: {})", s)).unwrap_or_default();
        debug!(
            "Attempting to parse document from JSON{} ({} bytes)",
            context,
            json_str.len()
        );

        if json_str.trim().is_empty() {
            error!("Document JSON string is empty{}", context);
            return Err(ValidationError::new(
                ValidationErrorCode::DocumentParseFailed,
                Some(format!("JSON parsing error{}: input string is empty", context)),
            ));
        }

        match serde_json::from_str::<Document>(json_str) {
            Ok(mut document) => {
                info!("Successfully parsed document from JSON{}", context);
                debug!(
                    "Parsed document root tag '{}' with {} networks",
                    document.root_tag,
                    document.networks.len()
                );
                if document.source.is_none() {
                    document.source = source.map(|s| s.to_string());
                }
                Ok(document)
            }
            Err(e) => {
                error!("Failed to parse document from JSON{}: {}", context, e);

                let detailed_error = match e.classify() {
                    serde_json::error::Category::Io => {
                        format!("JSON parsing error{} - I/O issue: {}", context, e)
                    }
                    serde_json::error::Category::Syntax => {
                        format!(
                            "JSON parsing error{} - Syntax error at line {}, column {}: {}",
                            context,
                            e.line(),
                            e.column(),
                            e
                        )
                    }
                    serde_json::error::Category::Data => {
                        format!("JSON parsing error{} - Invalid data structure: {}", context, e)
                    }
                    serde_json::error::Category::Eof => {
                        format!("JSON parsing error{} - Unexpected end of file: {}", context, e)
                    }
                };

                let mut parse_error = ValidationError::new(
                    ValidationErrorCode::DocumentParseFailed,
                    Some(detailed_error),
                );
                if let Some(source) = source {
                    parse_error = parse_error.in_source(source);
                }
                Err(parse_error)
            }
        }
    }

    /// Serialize a document tree to a JSON string
    pub fn to_json(document: &Document) -> Result<String> {
        debug!("Serializing document to JSON");
        serde_json::to_string_pretty(document).map_err(|e| {
            error!("Failed to serialize document to JSON: {}", e);
            ValidationError::new(
                ValidationErrorCode::DocumentParseFailed,
                Some(format!("JSON serialization error: {}", e)),
            )
        })
    }
}

impl DocumentParser for JsonDocumentParser {
    fn parse(&self, content: &str, source: Option<&str>) -> Result<Document> {
        Self::from_json_with_context(content, source)
    }
}
