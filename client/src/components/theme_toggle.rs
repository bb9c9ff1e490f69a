//! Light/dark switch in the page chrome.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::state::ui::UiState;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let dark = move || ui.get().dark_mode;

    view! {
        <button
            type="button"
            class="theme-toggle"
            title=move || if dark() { "Switch to light mode" } else { "Switch to dark mode" }
            aria-pressed=move || if dark() { "true" } else { "false" }
            on:click=move |_| ui.update(UiState::toggle_dark_mode)
        >
            <Show when=dark fallback=|| view! { <Icon kind=IconKind::Moon class="theme-toggle__icon"/> }>
                <Icon kind=IconKind::Sun class="theme-toggle__icon"/>
            </Show>
        </button>
    }
}
