//! "Select your transformation" showcase: viewport plus module selector.

use leptos::prelude::*;

use crate::components::comparison_slider::ComparisonSlider;
use crate::components::icons::{Icon, IconKind};
use crate::components::module_selector::ModuleSelector;
use crate::state::staging::StagingState;

#[component]
pub fn StagingSection() -> impl IntoView {
    let staging = RwSignal::new(StagingState::default());
    let active = Signal::derive(move || staging.get().active_module());

    view! {
        <section id="engine" class="section section--engine">
            <div class="section__ambience"></div>
            <div class="container">
                <header class="section-header">
                    <div class="badge badge--pulse">
                        <span class="badge__dot"></span>
                        <span class="badge__text">"MVS Engine V2.4"</span>
                    </div>
                    <h2 class="section-title">
                        "Select Your " <br/>
                        <span class="section-title__shimmer">"Transformation."</span>
                    </h2>
                    <p class="section-lede">
                        "A modular compositing pipeline handling the five critical factors of nautical presentation."
                    </p>
                </header>

                <div class="engine">
                    <div class="engine__viewport">
                        <div class="engine__hud">
                            <div class="engine__hud-status">
                                <Icon kind=IconKind::ScanLine class="engine__hud-icon"/>
                                <span>"Processing: " {move || active.get().label.to_uppercase()}</span>
                            </div>
                            <div class="engine__hud-dots">
                                <span></span>
                                <span></span>
                                <span></span>
                            </div>
                        </div>

                        <ComparisonSlider module=active/>

                        <div class="engine__caption">
                            <div class="engine__caption-bar"></div>
                            <div>
                                <h4 class="engine__caption-title">{move || active.get().label}</h4>
                                <p class="engine__caption-text">{move || active.get().description}</p>
                            </div>
                        </div>
                    </div>

                    <ModuleSelector staging=staging/>
                </div>
            </div>
        </section>
    }
}
