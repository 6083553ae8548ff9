//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use itemproc::core::services::BatchReport;
use itemproc::output::{
    ABSENT_LABEL, LoadResult, OperationResult, OutputMode, RunResult, format_item,
};

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn format_item_text_and_absent() {
    assert_eq!(format_item(&Some("hello".to_string())), "hello");
    assert_eq!(format_item(&None), ABSENT_LABEL);
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn run_result_serialization() {
    let report = BatchReport {
        items: vec![Some("hello".to_string()), None],
        dropped: 1,
    };
    let result = RunResult::from_report(report, "noop");

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"items\":[\"hello\",null]"));
    assert!(json.contains("\"dropped\":1"));
    assert!(json.contains("\"store\":\"noop\""));
    assert!(json.contains("completed_at"));
}

#[test]
fn load_result_serialization() {
    let result = LoadResult {
        query: "he".to_string(),
        items: vec![Some("hello".to_string())],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"query\":\"he\""));
    assert!(json.contains("\"hello\""));
}

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: false,
        message: "invalid settings".to_string(),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":false"));
}
