//! Volume pricing tiers.
//!
//! Prices are display strings; nothing on the site does arithmetic on them.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use crate::components::icons::IconKind;

/// A purchasable bundle of listing transformations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub unit: &'static str,
    pub price_per_unit: Option<&'static str>,
    pub icon: IconKind,
    pub description: &'static str,
    pub includes: &'static [&'static str],
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub highlight: bool,
}

pub const TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Single Asset",
        price: "590€",
        unit: "Total",
        price_per_unit: None,
        icon: IconKind::Anchor,
        description: "Ideal for testing the impact of MVS optimization on a single listing.",
        includes: &[
            "1 Full Listing Transformation",
            "Exterior & Interior Enhancement",
            "Digital Staging (1 Key Area)",
            "Sky & Water Correction",
            "48-Hour Delivery",
        ],
        features: &["Standard Resolution", "Email Support", "1 Revision Round"],
        cta: "Optimize 1 Boat",
        highlight: false,
    },
    PricingTier {
        name: "Broker Pack",
        price: "2,500€",
        unit: "Total",
        price_per_unit: Some("500€ per boat"),
        icon: IconKind::Briefcase,
        description: "The growth standard. Covers your monthly intake of premium inventory.",
        includes: &[
            "5 Full Listing Transformations",
            "Priority 'Rush' Queue (24h)",
            "Digital Staging (2 Key Areas)",
            "Marketing Copywriting",
            "Social Media Vertical Cuts",
        ],
        features: &["Save 450€ vs Single", "Dedicated Account Manager", "Unlimited Revisions"],
        cta: "Purchase Pack of 5",
        highlight: true,
    },
    PricingTier {
        name: "Dealer Fleet",
        price: "6,000€",
        unit: "Total",
        price_per_unit: Some("400€ per boat"),
        icon: IconKind::Trophy,
        description: "Enterprise volume for agencies dominating the market.",
        includes: &[
            "15 Full Listing Transformations",
            "Highest Priority Processing",
            "Custom Brokerage Branding",
            "White-Label Delivery Portal",
            "Bulk Upload Support",
        ],
        features: &["Save 2,850€ vs Single", "Direct WhatsApp Line", "Monthly Strategy Call"],
        cta: "Purchase Pack of 15",
        highlight: false,
    },
];

/// Index of the first highlighted tier, if any.
#[must_use]
pub fn highlighted_index(tiers: &[PricingTier]) -> Option<usize> {
    tiers.iter().position(|t| t.highlight)
}

#[must_use]
pub fn highlighted_count(tiers: &[PricingTier]) -> usize {
    tiers.iter().filter(|t| t.highlight).count()
}

/// Find a tier by its display name.
#[must_use]
pub fn tier_by_name(name: &str) -> Option<&'static PricingTier> {
    TIERS.iter().find(|t| t.name == name)
}
