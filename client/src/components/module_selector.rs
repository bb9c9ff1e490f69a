//! Selector strip for choosing the active staging module.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::staging::{MODULES, StagingModule};
use crate::state::staging::StagingState;

#[component]
fn ModuleButton(module: &'static StagingModule, staging: RwSignal<StagingState>) -> impl IntoView {
    let is_active = move || staging.get().is_active(module.id);
    let card_class = move || {
        if is_active() {
            "lens-card lens-card--active"
        } else {
            "lens-card"
        }
    };
    let icon_class = move || {
        if is_active() {
            "lens-card__icon lens-card__icon--active"
        } else {
            "lens-card__icon"
        }
    };
    let on_click = move |_| {
        let changed = staging.try_update(|s| s.select(module.id)).unwrap_or(false);
        #[cfg(feature = "hydrate")]
        {
            if changed {
                log::debug!("staging module selected: {}", module.id.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = changed;
    };

    view! {
        <button
            type="button"
            class="lens-rack__button"
            id=format!("module-{}", module.id.as_str())
            aria-pressed=move || if is_active() { "true" } else { "false" }
            on:click=on_click
        >
            <div class=card_class>
                <Show when=is_active>
                    <div class="lens-card__dot"></div>
                </Show>
                <div class=icon_class>
                    <Icon kind=module.icon class="lens-card__glyph"/>
                </div>
                <span class="lens-card__label">{module.label}</span>
                <div class="lens-card__transition">
                    <span class="lens-card__from">{module.before_label}</span>
                    <Icon kind=IconKind::ArrowRight class="lens-card__arrow"/>
                    <span class="lens-card__to">{module.after_label}</span>
                </div>
            </div>
        </button>
    }
}

/// One button per configured module; clicking makes it active.
#[component]
pub fn ModuleSelector(staging: RwSignal<StagingState>) -> impl IntoView {
    view! {
        <div class="lens-rack" role="group" aria-label="Staging modules">
            {MODULES.iter().map(|module| view! { <ModuleButton module=module staging=staging/> }).collect_view()}
        </div>
    }
}
