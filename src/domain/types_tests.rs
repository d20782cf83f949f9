//! Tests for the shared domain enumerations

use super::*;

#[test]
fn test_build_status_is_success() {
    assert!(BuildStatus::Success.is_success());
    assert!(!BuildStatus::Failure.is_success());
    assert!(!BuildStatus::Error.is_success());
    assert!(!BuildStatus::Unknown.is_success());
}

#[test]
fn test_build_status_is_failure() {
    assert!(!BuildStatus::Success.is_failure());
    assert!(BuildStatus::Failure.is_failure());
    assert!(BuildStatus::Error.is_failure());
    assert!(!BuildStatus::Unknown.is_failure());
}

#[test]
fn test_build_status_display() {
    assert_eq!(BuildStatus::Success.to_string(), "SUCCESS");
    assert_eq!(BuildStatus::Failure.to_string(), "FAILURE");
    assert_eq!(BuildStatus::Error.to_string(), "ERROR");
    assert_eq!(BuildStatus::Unknown.to_string(), "UNKNOWN");
}

#[test]
fn test_build_status_from_str_ignores_case() {
    assert_eq!("success".parse::<BuildStatus>(), Ok(BuildStatus::Success));
    assert_eq!("Failure".parse::<BuildStatus>(), Ok(BuildStatus::Failure));
    assert!("green".parse::<BuildStatus>().is_err());
}

#[test]
fn test_build_status_serialize() {
    let json = serde_json::to_string(&BuildStatus::Success).unwrap();
    assert_eq!(json, r#""SUCCESS""#);
}

#[test]
fn test_build_status_deserialize() {
    let status: BuildStatus = serde_json::from_str(r#""ERROR""#).unwrap();
    assert_eq!(status, BuildStatus::Error);
}

#[test]
fn test_unrecognised_build_status_is_unknown() {
    let status: BuildStatus = serde_json::from_str(r#""QUEUED_SOMETHING""#).unwrap();
    assert_eq!(status, BuildStatus::Unknown);
}

#[test]
fn test_build_state_roundtrip_names() {
    let state: BuildState = serde_json::from_str(r#""running""#).unwrap();
    assert_eq!(state, BuildState::Running);
    assert_eq!(state.to_string(), "running");
}
