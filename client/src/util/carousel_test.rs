use super::*;

#[test]
fn carousel_applies_below_breakpoint_only() {
    assert!(is_carousel_viewport(375.0));
    assert!(is_carousel_viewport(1023.9));
    assert!(!is_carousel_viewport(1024.0));
    assert!(!is_carousel_viewport(1440.0));
    assert!(!is_carousel_viewport(f64::NAN));
}

#[test]
fn center_scroll_left_centers_card() {
    // Card at 340px, 320px wide, in a 375px container.
    assert_eq!(center_scroll_left(340.0, 320.0, 375.0), 312.5);
}

#[test]
fn center_scroll_left_never_negative() {
    assert_eq!(center_scroll_left(0.0, 100.0, 800.0), 0.0);
    assert_eq!(center_scroll_left(f64::NAN, 100.0, 800.0), 0.0);
}
