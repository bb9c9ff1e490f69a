//! Volume pricing section.
//!
//! SYSTEM CONTEXT
//! ==============
//! Below the desktop breakpoint the cards form a horizontal snap carousel.
//! The first time the carousel scrolls into view it glides the highlighted
//! card to the center, once per page view.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::pricing_card::PricingCard;
use crate::content::pricing::TIERS;
#[cfg(feature = "hydrate")]
use crate::state::pricing::PricingRevealState;

#[cfg(feature = "hydrate")]
mod reveal {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions};

    use crate::content::pricing::{TIERS, highlighted_index};
    use crate::state::pricing::PricingRevealState;
    use crate::util::carousel::{CENTER_DELAY_MS, REVEAL_THRESHOLD, center_scroll_left};

    pub(super) type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    fn viewport_width() -> f64 {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(f64::INFINITY)
    }

    fn center_highlighted(grid: &web_sys::HtmlElement) {
        let Some(idx) = highlighted_index(&TIERS) else {
            return;
        };
        let Ok(idx) = u32::try_from(idx) else {
            return;
        };
        let Some(card) = grid
            .children()
            .item(idx)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let left = center_scroll_left(
            f64::from(card.offset_left()),
            f64::from(card.client_width()),
            f64::from(grid.client_width()),
        );
        let opts = ScrollToOptions::new();
        opts.set_left(left);
        opts.set_behavior(ScrollBehavior::Smooth);
        grid.scroll_to_with_scroll_to_options(&opts);
    }

    /// Start observing `grid`; returns the observer and the callback that
    /// must stay alive as long as it.
    pub(super) fn observe(
        grid: web_sys::HtmlElement,
        reveal: RwSignal<PricingRevealState>,
    ) -> Option<(IntersectionObserver, ObserverCallback)> {
        let target = grid.clone();
        let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, _observer| {
            let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() else {
                return;
            };
            let fire = reveal
                .try_update(|r| r.should_center(entry.is_intersecting(), viewport_width()))
                .unwrap_or(false);
            if !fire {
                return;
            }
            let grid = target.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(CENTER_DELAY_MS)).await;
                center_highlighted(&grid);
            });
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&grid);
                Some((observer, callback))
            }
            Err(e) => {
                log::warn!("intersection observer unavailable: {e:?}");
                None
            }
        }
    }
}

#[component]
fn Guarantee(icon: IconKind, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="guarantee">
            <div class="guarantee__icon">
                <Icon kind=icon class="guarantee__glyph"/>
            </div>
            <div>
                <h4 class="guarantee__title">{title}</h4>
                <p class="guarantee__text">{text}</p>
            </div>
        </div>
    }
}

#[component]
pub fn PricingSection() -> impl IntoView {
    let grid_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let reveal_state = RwSignal::new(PricingRevealState::default());
        let observer = StoredValue::new_local(None::<(web_sys::IntersectionObserver, reveal::ObserverCallback)>);
        Effect::new(move || {
            let Some(grid) = grid_ref.get() else {
                return;
            };
            if observer.with_value(Option::is_some) {
                return;
            }
            let grid: web_sys::HtmlElement = grid.into();
            let started = reveal::observe(grid, reveal_state);
            observer.set_value(started);
        });
        on_cleanup(move || {
            if let Some(Some((obs, _callback))) = observer.try_update_value(Option::take) {
                obs.disconnect();
            }
        });
    }

    view! {
        <section id="pricing" class="section section--pricing">
            <div class="section__glow"></div>
            <div class="container">
                <header class="section-header">
                    <span class="eyebrow">"Flexible Volume Pricing"</span>
                    <h2 class="section-title">
                        "Scale Your " <br/>
                        <span class="section-title__muted">"Inventory Velocity."</span>
                    </h2>
                    <p class="section-lede">
                        "No monthly subscriptions. Credits never expire. Buy bundles to lower your cost per listing."
                    </p>
                </header>

                <div class="tier-grid" node_ref=grid_ref>
                    {TIERS.iter().map(|tier| view! { <PricingCard tier=tier/> }).collect_view()}
                </div>

                <div class="guarantees">
                    <Guarantee
                        icon=IconKind::ShieldCheck
                        title="Credits Never Expire"
                        text="Buy a pack today, use them whenever you get a new listing."
                    />
                    <Guarantee
                        icon=IconKind::Layers
                        title="Bulk Processing"
                        text="Upload 5+ boats at once and get everything back in 48h."
                    />
                </div>
            </div>
        </section>
    }
}
