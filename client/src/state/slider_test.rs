use super::*;

const LEFT: f64 = 40.0;
const WIDTH: f64 = 800.0;

#[test]
fn default_is_centered_and_idle() {
    let state = SliderState::default();
    assert_eq!(state.position, 50.0);
    assert!(!state.dragging);
}

#[test]
fn begin_drag_jumps_to_pointer() {
    let mut state = SliderState::default();
    state.begin_drag(LEFT + 200.0, LEFT, WIDTH);
    assert!(state.dragging);
    assert_eq!(state.position, 25.0);
}

#[test]
fn drag_to_is_ignored_without_active_drag() {
    let mut state = SliderState::default();
    assert!(!state.drag_to(LEFT, LEFT, WIDTH));
    assert_eq!(state.position, 50.0);
}

#[test]
fn drag_past_edges_stays_in_range() {
    let mut state = SliderState::default();
    state.begin_drag(LEFT + 400.0, LEFT, WIDTH);
    assert!(state.drag_to(-10_000.0, LEFT, WIDTH));
    assert_eq!(state.position, 0.0);
    assert!(state.drag_to(10_000.0, LEFT, WIDTH));
    assert_eq!(state.position, 100.0);
    assert!(!state.drag_to(20_000.0, LEFT, WIDTH));
}

#[test]
fn drag_on_collapsed_container_keeps_position() {
    let mut state = SliderState::default();
    state.begin_drag(300.0, LEFT, 0.0);
    assert!(state.dragging);
    assert_eq!(state.position, 50.0);
    assert!(!state.drag_to(500.0, LEFT, 0.0));
}

#[test]
fn end_drag_reports_whether_drag_was_live() {
    let mut state = SliderState::default();
    assert!(!state.end_drag());
    state.begin_drag(LEFT, LEFT, WIDTH);
    assert!(state.end_drag());
    assert!(!state.dragging);
    assert!(!state.drag_to(LEFT + WIDTH, LEFT, WIDTH));
}

#[test]
fn keyboard_steps_and_jumps_are_clamped() {
    let mut state = SliderState::default();
    state.apply_key(SliderKey::Right);
    assert_eq!(state.position, 55.0);
    state.apply_key(SliderKey::End);
    state.apply_key(SliderKey::Right);
    assert_eq!(state.position, 100.0);
    state.apply_key(SliderKey::Home);
    state.apply_key(SliderKey::Left);
    assert_eq!(state.position, 0.0);
}

#[test]
fn set_position_clamps_and_rejects_nan() {
    let mut state = SliderState::default();
    state.set_position(250.0);
    assert_eq!(state.position, 100.0);
    state.set_position(f64::NAN);
    assert_eq!(state.position, 50.0);
}

#[test]
fn dom_keys_map_to_commands() {
    assert_eq!(SliderKey::from_dom_key("ArrowLeft"), Some(SliderKey::Left));
    assert_eq!(SliderKey::from_dom_key("ArrowUp"), Some(SliderKey::Right));
    assert_eq!(SliderKey::from_dom_key("End"), Some(SliderKey::End));
    assert_eq!(SliderKey::from_dom_key("Enter"), None);
}
