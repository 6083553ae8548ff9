//! Parameterized tests using test-case
//!
//! These tests run the same normalization logic with different inputs.

use itemproc::core::models::{Item, ItemKind, ProcessingError};
use itemproc::core::ports::StoreBackend;
use itemproc::core::services::normalize;
use test_case::test_case;

// =============================================================================
// Normalization Tests
// =============================================================================

#[test_case("  Hello  ", "hello" ; "surrounding spaces")]
#[test_case("WORLD", "world" ; "upper case")]
#[test_case("\tTabbed\n", "tabbed" ; "tabs and newlines")]
#[test_case("already done", "already done" ; "already normalized")]
#[test_case("  Inner  Space  ", "inner  space" ; "inner whitespace kept")]
#[test_case("   ", "" ; "whitespace only")]
fn test_normalize_text(input: &str, expected: &str) {
    assert_eq!(normalize(&Item::text(input)), Ok(Some(expected.to_string())));
}

#[test_case("null" ; "null")]
#[test_case("\"\"" ; "empty string")]
#[test_case("false" ; "false")]
#[test_case("0" ; "zero")]
#[test_case("[]" ; "empty list")]
#[test_case("{}" ; "empty object")]
fn test_falsy_maps_to_absent(json: &str) {
    let item: Item = serde_json::from_str(json).unwrap();
    assert_eq!(normalize(&item), Ok(None));
}

#[test_case("42", ItemKind::Number ; "number")]
#[test_case("1.5", ItemKind::Number ; "float")]
#[test_case("true", ItemKind::Bool ; "true")]
#[test_case("[\"a\"]", ItemKind::List ; "list")]
#[test_case("{\"a\": 1}", ItemKind::Object ; "object")]
fn test_unsupported_kinds(json: &str, kind: ItemKind) {
    let item: Item = serde_json::from_str(json).unwrap();
    assert_eq!(normalize(&item), Err(ProcessingError::Unsupported { kind }));
}

// =============================================================================
// Store Backend Parsing
// =============================================================================

#[test_case("noop", StoreBackend::Noop ; "noop")]
#[test_case("NONE", StoreBackend::Noop ; "none upper")]
#[test_case("memory", StoreBackend::Memory ; "memory")]
#[test_case("file", StoreBackend::File ; "file")]
#[test_case("Json", StoreBackend::File ; "json alias")]
fn test_store_backend_parse(input: &str, expected: StoreBackend) {
    assert_eq!(input.parse::<StoreBackend>().unwrap(), expected);
}

#[test]
fn test_store_backend_unknown() {
    let err = "postgres".parse::<StoreBackend>().unwrap_err();
    assert!(err.contains("Unknown store"));
}

#[test]
fn test_store_backend_default_and_display() {
    assert_eq!(StoreBackend::default(), StoreBackend::Noop);
    assert_eq!(StoreBackend::File.to_string(), "file");
}
