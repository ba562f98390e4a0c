//! Tests for suggestion payload parsing

use super::*;

#[test]
fn test_parse_string_ids_in_order() {
    let body = r#"{"results": [["42", "Dune"], ["7", "Foundation"]]}"#;
    let suggestions = parse_results(body).unwrap();

    assert_eq!(
        suggestions,
        vec![Suggestion::new("42", "Dune"), Suggestion::new("7", "Foundation")]
    );
}

#[test]
fn test_parse_integer_ids() {
    let body = r#"{"results": [[1001, "Dune by Frank Herbert"]]}"#;
    let suggestions = parse_results(body).unwrap();

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].id, "1001");
    assert_eq!(suggestions[0].label, "Dune by Frank Herbert");
}

#[test]
fn test_parse_empty_results() {
    let suggestions = parse_results(r#"{"results": []}"#).unwrap();
    assert!(suggestions.is_empty());
}

#[test]
fn test_extra_top_level_fields_are_ignored() {
    let body = r#"{"results": [["1", "Emma"]], "took_ms": 3}"#;
    assert_eq!(parse_results(body).unwrap().len(), 1);
}

#[test]
fn test_missing_results_field_is_parse_error() {
    let result = parse_results(r#"{"items": []}"#);
    assert!(matches!(result, Err(SuggestError::Parse(_))));
}

#[test]
fn test_not_json_is_parse_error() {
    let result = parse_results("<html>Internal Server Error</html>");
    assert!(matches!(result, Err(SuggestError::Parse(_))));
}

#[test]
fn test_entry_with_wrong_arity_is_parse_error() {
    assert!(parse_results(r#"{"results": [["1"]]}"#).is_err());
    assert!(parse_results(r#"{"results": [["1", "Emma", "extra"]]}"#).is_err());
}

#[test]
fn test_non_string_label_is_parse_error() {
    let result = parse_results(r#"{"results": [["1", 5]]}"#);
    assert!(matches!(result, Err(SuggestError::Parse(_))));
}

#[test]
fn test_labels_are_kept_verbatim() {
    let body = r#"{"results": [["3", "  The Hobbit <illustrated>  "]]}"#;
    let suggestions = parse_results(body).unwrap();
    assert_eq!(suggestions[0].label, "  The Hobbit <illustrated>  ");
}
