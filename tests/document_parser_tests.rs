use stationxml_validator::*;
use test_utils::*;
use std::io::Write;

/// Document Parser Tests
/// JSON tree parsing through the DocumentParser boundary and async
/// submission-file loading.

#[test]
fn test_parse_valid_document_through_trait() {
    let parser = JsonDocumentParser::new();
    let json = valid_document_json("HGN");
    let document = parser.parse(&json, Some("upload.json")).unwrap();

    assert_eq!(document.root_tag, SCHEMA_ROOT_TAG);
    assert_eq!(document.networks.len(), 1);
    assert_eq!(document.source.as_deref(), Some("upload.json"));
}

#[test]
fn test_parse_reports_syntax_position() {
    let error = JsonDocumentParser::from_json("{\"rootTag\": \"FDSNStationXML\",\n  []").unwrap_err();
    assert_eq!(error.code, ValidationErrorCode::DocumentParseFailed);
    assert!(error.message.contains("line"));
}

#[test]
fn test_parse_rejects_wrong_shape() {
    // Valid JSON, wrong data structure for the tree.
    let error = JsonDocumentParser::from_json("[1, 2, 3]").unwrap_err();
    assert_eq!(error.code, ValidationErrorCode::DocumentParseFailed);
}

#[test]
fn test_document_roundtrip_preserves_tree() {
    let document = valid_document("HGN");
    let json = JsonDocumentParser::to_json(&document).unwrap();
    assert_eq!(JsonDocumentParser::from_json(&json).unwrap(), document);
}

#[tokio::test]
async fn test_load_submission_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("station_upload.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(valid_document_json("HGN").as_bytes()).unwrap();

    let submitted = SubmittedFile::from_path(path.to_str().unwrap()).await.unwrap();
    assert_eq!(submitted.name, "station_upload.json");

    let document = JsonDocumentParser::new()
        .parse(&submitted.content, Some(&submitted.name))
        .unwrap();
    assert_eq!(document.networks[0].code, "NL");
}

#[tokio::test]
async fn test_missing_file_is_reported_with_path() {
    let error = SubmittedFile::from_path("/nonexistent/upload.json")
        .await
        .unwrap_err();
    assert_eq!(error.code, ValidationErrorCode::DocumentParseFailed);
    assert!(error.message.contains("/nonexistent/upload.json"));
}

#[tokio::test]
async fn test_load_submission_preserves_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut paths = Vec::new();
    for name in ["a.json", "b.json", "c.json"] {
        let path = dir.path().join(name);
        std::fs::write(&path, valid_document_json("HGN")).unwrap();
        paths.push(path.to_str().unwrap().to_string());
    }

    let files = SubmittedFile::load_submission(&paths).await.unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a.json", "b.json", "c.json"]);
}

#[tokio::test]
async fn test_empty_submission_rejected() {
    let error = SubmittedFile::load_submission(&[]).await.unwrap_err();
    assert_eq!(error.code, ValidationErrorCode::DocumentParseFailed);
    assert!(error.message.contains("no files provided"));
}
