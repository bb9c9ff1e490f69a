//! Before/after staging modules shown in the engine showcase.

#[cfg(test)]
#[path = "staging_test.rs"]
mod staging_test;

use serde::{Deserialize, Serialize};

use crate::components::icons::IconKind;

/// Stable identifier for a staging module.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleId {
    #[default]
    Hull,
    Weather,
    Interior,
    Twilight,
    Eraser,
}

impl ModuleId {
    /// Every module id in display order.
    pub const ALL: [ModuleId; 5] = [
        ModuleId::Hull,
        ModuleId::Weather,
        ModuleId::Interior,
        ModuleId::Twilight,
        ModuleId::Eraser,
    ];

    /// Slug used for element ids and logging.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hull => "hull",
            Self::Weather => "weather",
            Self::Interior => "interior",
            Self::Twilight => "twilight",
            Self::Eraser => "eraser",
        }
    }

    /// Parse a slug back into an id. Case-insensitive, surrounding
    /// whitespace ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(raw))
    }

    fn index(self) -> usize {
        match self {
            Self::Hull => 0,
            Self::Weather => 1,
            Self::Interior => 2,
            Self::Twilight => 3,
            Self::Eraser => 4,
        }
    }
}

/// One before/after transformation illustrated in the showcase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StagingModule {
    pub id: ModuleId,
    pub label: &'static str,
    pub icon: IconKind,
    pub before_label: &'static str,
    pub after_label: &'static str,
    pub image_before: &'static str,
    pub image_after: &'static str,
    pub description: &'static str,
}

/// All staging modules, indexed in `ModuleId::ALL` order.
pub const MODULES: [StagingModule; 5] = [
    StagingModule {
        id: ModuleId::Hull,
        label: "Hull Extraction",
        icon: IconKind::Droplets,
        before_label: "Dry Dock",
        after_label: "Deep Ocean",
        image_before: "/images/img11.png",
        image_after: "/images/img1.jpeg",
        description: "Proprietary algorithm that separates the vessel from concrete/cradles and composites it into a physics-accurate ocean plate.",
    },
    StagingModule {
        id: ModuleId::Weather,
        label: "Atmosphere",
        icon: IconKind::Sun,
        before_label: "Overcast",
        after_label: "Golden Hour",
        image_before: "/images/img22.png",
        image_after: "/images/img2.jpeg",
        description: "Full environmental replacement. We delete grey skies and flat lighting, synthesizing \"Golden Hour\" solar coordinates.",
    },
    StagingModule {
        id: ModuleId::Interior,
        label: "Virtual Refit",
        icon: IconKind::Layers,
        before_label: "Empty/Dated",
        after_label: "Modern Luxury",
        image_before: "/images/33img.png",
        image_after: "/images/img3.jpeg",
        description: "Digitally reupholster furniture, declutter surfaces, and stage lifestyle elements to modernize older inventory.",
    },
    StagingModule {
        id: ModuleId::Twilight,
        label: "Twilight Activation",
        icon: IconKind::Moon,
        before_label: "Daylight",
        after_label: "Evening Party",
        image_before: "/images/img44.png",
        image_after: "/images/img4.jpeg",
        description: "We turn lights on. Transforming standard day shots into \"Evening Entertainment\" setups with warm interior glows and underwater lights.",
    },
    StagingModule {
        id: ModuleId::Eraser,
        label: "Smart Eraser",
        icon: IconKind::Eraser,
        before_label: "Cluttered",
        after_label: "Pristine",
        image_before: "/images/img55.png",
        image_after: "/images/img5.jpeg",
        description: "AI-driven removal of fenders, hoses, crew members, and neighboring boats to isolate the asset in perfect condition.",
    },
];

/// Look up the module for `id`.
#[must_use]
pub fn module(id: ModuleId) -> &'static StagingModule {
    &MODULES[id.index()]
}

/// Module shown before the visitor picks one.
#[must_use]
pub fn default_module() -> &'static StagingModule {
    module(ModuleId::default())
}
