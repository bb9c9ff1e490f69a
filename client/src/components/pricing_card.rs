//! Single pricing tier card.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::pricing::PricingTier;

#[component]
pub fn PricingCard(tier: &'static PricingTier) -> impl IntoView {
    let variant = if tier.highlight { "tier-card tier-card--highlight" } else { "tier-card" };
    let icon_class = if tier.highlight { "tier-card__icon tier-card__icon--highlight" } else { "tier-card__icon" };
    let bullet_class = if tier.highlight { "tier-card__bullet tier-card__bullet--highlight" } else { "tier-card__bullet" };
    let cta_class = if tier.highlight { "tier-card__cta tier-card__cta--highlight" } else { "tier-card__cta" };

    view! {
        <article class=variant>
            {tier.highlight.then(|| view! { <div class="tier-card__badge">"Best Seller"</div> })}

            <div class="tier-card__body">
                <div class=icon_class>
                    <Icon kind=tier.icon class="tier-card__glyph"/>
                </div>

                <div class="tier-card__heading">
                    <h3 class="tier-card__name">{tier.name}</h3>
                    <div class="tier-card__price-row">
                        <span class="tier-card__price">{tier.price}</span>
                        <span class="tier-card__unit">{tier.unit}</span>
                    </div>
                    {tier.price_per_unit.map(|per_unit| view! { <div class="tier-card__per-unit">{per_unit}</div> })}
                </div>

                <p class="tier-card__description">{tier.description}</p>

                <div class="tier-card__includes">
                    <span class="tier-card__includes-label">"Includes:"</span>
                    <ul>
                        {tier
                            .includes
                            .iter()
                            .map(|item| {
                                view! {
                                    <li class="tier-card__include">
                                        <div class=bullet_class></div>
                                        {*item}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>

            <div class="tier-card__footer">
                <ul class="tier-card__features">
                    {tier
                        .features
                        .iter()
                        .map(|feat| {
                            view! {
                                <li class="tier-card__feature">
                                    <Icon kind=IconKind::Check class="tier-card__check"/>
                                    {*feat}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <a href="#contact" class=cta_class>{tier.cta}</a>
            </div>
        </article>
    }
}
