use super::*;

#[test]
fn centers_once_on_mobile() {
    let mut state = PricingRevealState::default();
    assert!(state.should_center(true, 390.0));
    assert!(state.has_animated);
    assert!(!state.should_center(true, 390.0));
}

#[test]
fn ignores_non_intersecting_events() {
    let mut state = PricingRevealState::default();
    assert!(!state.should_center(false, 390.0));
    assert!(!state.has_animated);
    assert!(state.should_center(true, 390.0));
}

#[test]
fn desktop_never_animates_or_consumes_the_shot() {
    let mut state = PricingRevealState::default();
    assert!(!state.should_center(true, 1280.0));
    assert!(!state.has_animated);
}
