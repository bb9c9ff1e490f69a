use super::*;

#[test]
fn clamp_position_pins_to_bounds() {
    assert_eq!(clamp_position(-12.0), SLIDER_MIN);
    assert_eq!(clamp_position(140.0), SLIDER_MAX);
    assert_eq!(clamp_position(37.5), 37.5);
}

#[test]
fn clamp_position_recovers_from_non_finite() {
    assert_eq!(clamp_position(f64::NAN), SLIDER_DEFAULT);
    assert_eq!(clamp_position(f64::INFINITY), SLIDER_DEFAULT);
}

#[test]
fn pointer_inside_box_maps_linearly() {
    assert_eq!(position_from_pointer(100.0, 100.0, 400.0), Some(0.0));
    assert_eq!(position_from_pointer(300.0, 100.0, 400.0), Some(50.0));
    assert_eq!(position_from_pointer(500.0, 100.0, 400.0), Some(100.0));
    assert_eq!(position_from_pointer(200.0, 100.0, 400.0), Some(25.0));
}

#[test]
fn pointer_outside_box_pins_to_edges() {
    assert_eq!(position_from_pointer(-50.0, 100.0, 400.0), Some(0.0));
    assert_eq!(position_from_pointer(9_000.0, 100.0, 400.0), Some(100.0));
}

#[test]
fn degenerate_box_yields_none() {
    assert_eq!(position_from_pointer(10.0, 0.0, 0.0), None);
    assert_eq!(position_from_pointer(10.0, 0.0, -5.0), None);
    assert_eq!(position_from_pointer(f64::NAN, 0.0, 100.0), None);
    assert_eq!(position_from_pointer(10.0, 0.0, f64::INFINITY), None);
}

#[test]
fn sweep_never_leaves_range() {
    let mut x = -500.0;
    while x < 1_500.0 {
        let p = position_from_pointer(x, 37.0, 613.0).unwrap();
        assert!((SLIDER_MIN..=SLIDER_MAX).contains(&p), "x={x} p={p}");
        x += 7.3;
    }
}

#[test]
fn styles_format_whole_and_fractional_percentages() {
    assert_eq!(after_clip_style(50.0), "clip-path: inset(0 0 0 50%);");
    assert_eq!(after_clip_style(33.333), "clip-path: inset(0 0 0 33.33%);");
    assert_eq!(handle_left_style(120.0), "left: 100%;");
    assert_eq!(handle_left_style(-3.0), "left: 0%;");
}
