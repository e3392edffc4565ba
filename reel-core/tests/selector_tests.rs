//! Integration tests for profile size selection
//!
//! The unit tests in `profile.rs` pin the algorithm's branches; these cover
//! the selector as callers see it, across the whole supported table.

use reel_core::profile::{H264_SUPPORTED_PROFILE, best_size_for_profile, supported_sizes};
use reel_core::types::Resolution;
use reel_core::ReelError;

#[test]
fn test_default_profile_is_in_the_table() {
    assert!(supported_sizes(H264_SUPPORTED_PROFILE).is_some());
    assert_eq!(
        supported_sizes(H264_SUPPORTED_PROFILE).unwrap(),
        &[
            Resolution::new(1280, 720),
            Resolution::new(720, 576),
            Resolution::new(720, 480),
        ]
    );
}

#[test]
fn test_selection_for_common_displays() {
    // 16:9 displays divide evenly into 1280x720
    for source in [
        Resolution::new(1920, 1080),
        Resolution::new(2560, 1440),
        Resolution::new(3840, 2160),
    ] {
        assert_eq!(
            best_size_for_profile("3.1", source).unwrap(),
            Resolution::new(1280, 720),
            "for source {source}"
        );
    }
}

#[test]
fn test_selection_always_comes_from_the_table() {
    let table = supported_sizes("3.1").unwrap();
    for source in [
        Resolution::new(1366, 768),
        Resolution::new(1440, 900),
        Resolution::new(1680, 1050),
        Resolution::new(3440, 1440),
        Resolution::new(800, 600),
        Resolution::new(1, 1),
    ] {
        let best = best_size_for_profile("3.1", source).unwrap();
        assert!(table.contains(&best), "{best} not in table for {source}");
    }
}

#[test]
fn test_unknown_profiles_fail_without_a_resolution() {
    for profile in ["", "4.0", "baseline", "3.1 "] {
        let result = best_size_for_profile(profile, Resolution::new(1920, 1080));
        assert!(
            matches!(result, Err(ReelError::UnsupportedProfile(_))),
            "profile {profile:?} should be unsupported"
        );
    }
}

#[test]
fn test_error_message_names_the_profile() {
    let err = best_size_for_profile("9.9", Resolution::new(1920, 1080)).unwrap_err();
    assert_eq!(err.to_string(), "Profile 9.9 not supported");
}
