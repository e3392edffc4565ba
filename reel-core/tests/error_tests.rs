//! Integration tests for error handling

use reel_core::error::{ReelError, Result, ResultExt};

#[test]
fn test_error_context_chaining() {
    let base_error = ReelError::encoder("Parameter set rejected");
    let with_context = base_error.with_context("Failed to initialize encoder");

    let msg = format!("{}", with_context);
    assert!(msg.contains("Failed to initialize encoder"));
    assert!(msg.contains("Parameter set rejected"));
}

#[test]
fn test_result_ext_context() {
    let result: Result<()> = Err(ReelError::capture("Display disconnected"));
    let with_context = result.context("Recording frame");

    assert!(with_context.is_err());
    let msg = format!("{}", with_context.unwrap_err());
    assert!(msg.contains("Recording frame"));
    assert!(msg.contains("Display disconnected"));
}

#[test]
fn test_unsupported_profile_message_matches_contract() {
    // Callers display this verbatim, keep the shape stable
    let err = ReelError::UnsupportedProfile("7.3".to_string());
    assert_eq!(err.to_string(), "Profile 7.3 not supported");
}

#[test]
fn test_io_errors_convert() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: ReelError = io.into();
    assert!(matches!(err, ReelError::Io(_)));
    assert!(err.to_string().contains("denied"));
}
