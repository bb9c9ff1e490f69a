//! Top-of-page hero with the headline offer.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::pricing::TIERS;

#[component]
pub fn HeroSection() -> impl IntoView {
    // Cheapest entry point, shown as the "from" price.
    let entry_price = TIERS.first().map_or("", |t| t.price);

    view! {
        <header class="hero">
            <div class="hero__backdrop"></div>
            <div class="container hero__inner">
                <span class="eyebrow">"Marine Visual Studio"</span>
                <h1 class="hero__title">
                    "Sell The Boat " <br/>
                    <span class="hero__title-accent">"Before The Viewing."</span>
                </h1>
                <p class="hero__lede">
                    "Listing photos and video re-composited for the water: ocean plates, golden-hour skies, "
                    "staged interiors and clean decks. Delivered in 48 hours."
                </p>
                <div class="hero__actions">
                    <a href="#pricing" class="button button--primary">
                        "From " {entry_price} " per listing"
                        <Icon kind=IconKind::ArrowRight class="button__icon"/>
                    </a>
                    <a href="#engine" class="button button--ghost">"See the transformations"</a>
                </div>
            </div>
        </header>
    }
}
