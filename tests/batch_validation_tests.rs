use stationxml_validator::*;
use test_utils::*;

/// Batch Validation Tests
/// Multi-file aggregation, fail-fast with no partial results, idempotence,
/// schema root gating, and the document size limit.

fn validate(
    files: &[SubmittedFile],
    registry: &StationRegistry,
) -> Result<Vec<StagedStation>> {
    BatchValidator::default().validate_batch(
        files,
        &JsonDocumentParser::new(),
        &test_session(),
        registry,
    )
}

#[test]
fn test_records_aggregate_across_files_in_order() {
    let files = vec![
        valid_submission_file("first.json", "HGN"),
        valid_submission_file("second.json", "DBN"),
    ];
    let staged = validate(&files, &test_registry()).unwrap();
    assert_eq!(
        staged,
        vec![
            StagedStation::new("NL", "HGN", false),
            StagedStation::new("NL", "DBN", true),
        ]
    );
}

#[test]
fn test_failure_in_any_file_yields_no_records_at_all() {
    // The second file's station carries an invalid sample rate; the first
    // file and nothing else about the second may leak through.
    let mut broken = valid_document("DBN");
    broken.networks[0].stations[0].channels[0].sample_rate = -1.0;

    let files = vec![
        valid_submission_file("first.json", "HGN"),
        SubmittedFile::new(
            "second.json".to_string(),
            JsonDocumentParser::to_json(&broken).unwrap(),
        ),
    ];

    let error = validate(&files, &test_registry()).unwrap_err();
    assert_eq!(error.code, ValidationErrorCode::InvalidSampleRate);
    let context = error.context.unwrap();
    assert_eq!(context.source.as_deref(), Some("second.json"));
    assert_eq!(context.station.as_deref(), Some("DBN"));
}

#[test]
fn test_revalidation_is_idempotent() {
    let files = vec![valid_submission_file("upload.json", "HGN")];
    let registry = test_registry();

    let first = validate(&files, &registry).unwrap();
    let second = validate(&files, &registry).unwrap();
    assert_eq!(first, second);
    assert!(!second[0].is_new); // HGN stays known across identical runs
}

#[test]
fn test_root_tag_is_checked_before_networks() {
    let mut document = valid_document("HGN");
    document.root_tag = "SeisComPML".to_string();
    // Break the network too: the schema check must still win.
    document.networks[0].code = "XX".to_string();

    let files = vec![SubmittedFile::new(
        "upload.json".to_string(),
        JsonDocumentParser::to_json(&document).unwrap(),
    )];
    let error = validate(&files, &test_registry()).unwrap_err();
    assert_eq!(error.code, ValidationErrorCode::SchemaMismatch);
    assert_eq!(error.category(), ErrorCategory::Structural);
}

#[test]
fn test_parse_failure_carries_file_name() {
    let files = vec![SubmittedFile::new("broken.json", "{ not json")];
    let error = validate(&files, &test_registry()).unwrap_err();
    assert_eq!(error.code, ValidationErrorCode::DocumentParseFailed);
    assert_eq!(error.context.unwrap().source.as_deref(), Some("broken.json"));
}

#[test]
fn test_oversized_document_rejected_before_parsing() {
    let config = ValidatorConfig {
        max_document_size: 64,
        ..ValidatorConfig::default()
    };
    let validator = BatchValidator::new(config);

    let files = vec![valid_submission_file("upload.json", "HGN")];
    let error = validator
        .validate_batch(
            &files,
            &JsonDocumentParser::new(),
            &test_session(),
            &test_registry(),
        )
        .unwrap_err();
    assert_eq!(error.code, ValidationErrorCode::OversizedDocument);
}

#[test]
fn test_empty_batch_stages_nothing() {
    let staged = validate(&[], &test_registry()).unwrap();
    assert!(staged.is_empty());
}

#[test]
fn test_multiple_networks_per_document() {
    let mut document = valid_document("HGN");
    document.add_network(network_with_stations(vec![valid_station("DBN")]));

    let files = vec![SubmittedFile::new(
        "upload.json".to_string(),
        JsonDocumentParser::to_json(&document).unwrap(),
    )];
    let staged = validate(&files, &test_registry()).unwrap();
    assert_eq!(staged.len(), 2);
}
