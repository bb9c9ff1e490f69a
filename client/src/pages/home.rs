//! Landing page: hero, staging showcase, pricing, contact.

use leptos::prelude::*;

use crate::components::contact_section::ContactSection;
use crate::components::hero::HeroSection;
use crate::components::pricing_section::PricingSection;
use crate::components::staging_section::StagingSection;
use crate::components::theme_toggle::ThemeToggle;

#[component]
fn SiteNav() -> impl IntoView {
    view! {
        <nav class="site-nav">
            <div class="container site-nav__inner">
                <a href="#" class="site-nav__brand">
                    <span class="site-nav__mark">"MVS"</span>
                    <span class="site-nav__name">"Marine Visual Studio"</span>
                </a>
                <div class="site-nav__links">
                    <a href="#engine" class="site-nav__link">"Engine"</a>
                    <a href="#pricing" class="site-nav__link">"Pricing"</a>
                    <a href="#contact" class="site-nav__cta">"Get a Sample"</a>
                    <ThemeToggle/>
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SiteNav/>
        <main>
            <HeroSection/>
            <StagingSection/>
            <PricingSection/>
            <ContactSection/>
        </main>
        <footer class="site-footer">
            <div class="container">
                <p>"© Marine Visual Studio. Listing imagery for brokers and dealers."</p>
            </div>
        </footer>
    }
}
