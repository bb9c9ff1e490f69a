use super::*;

#[test]
fn exactly_one_tier_is_highlighted() {
    assert_eq!(highlighted_count(&TIERS), 1);
}

#[test]
fn broker_pack_is_the_highlighted_tier() {
    let idx = highlighted_index(&TIERS).expect("a highlighted tier");
    assert_eq!(idx, 1);
    assert_eq!(TIERS[idx].name, "Broker Pack");
}

#[test]
fn highlighted_index_is_none_without_highlight() {
    let plain = [TIERS[0], TIERS[2]];
    assert_eq!(highlighted_index(&plain), None);
    assert_eq!(highlighted_count(&plain), 0);
    assert_eq!(highlighted_index(&[]), None);
}

#[test]
fn highlighted_index_returns_first_of_several() {
    let mut doubled = TIERS;
    doubled[2].highlight = true;
    assert_eq!(highlighted_index(&doubled), Some(1));
    assert_eq!(highlighted_count(&doubled), 2);
}

#[test]
fn only_bundles_carry_per_unit_price() {
    assert_eq!(TIERS[0].price_per_unit, None);
    assert_eq!(TIERS[1].price_per_unit, Some("500€ per boat"));
    assert_eq!(TIERS[2].price_per_unit, Some("400€ per boat"));
}

#[test]
fn every_tier_lists_includes_and_features() {
    for tier in &TIERS {
        assert_eq!(tier.includes.len(), 5, "{}", tier.name);
        assert_eq!(tier.features.len(), 3, "{}", tier.name);
        assert!(!tier.cta.is_empty());
    }
}

#[test]
fn tier_by_name_matches_exactly() {
    assert_eq!(tier_by_name("Dealer Fleet").map(|t| t.price), Some("6,000€"));
    assert!(tier_by_name("dealer fleet").is_none());
}
