use super::*;

#[test]
fn ui_state_default_dark_mode_off() {
    assert!(!UiState::default().dark_mode);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_preference_is_light_without_browser() {
    assert_eq!(UiState::from_preference(), UiState::default());
}

#[test]
fn toggle_dark_mode_flips_flag() {
    let mut state = UiState::default();
    state.toggle_dark_mode();
    assert!(state.dark_mode);
    state.toggle_dark_mode();
    assert!(!state.dark_mode);
}
