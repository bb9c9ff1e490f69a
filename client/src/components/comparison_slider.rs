//! Before/after comparison slider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two images are stacked; the "after" image is clipped so only the part
//! right of the handle shows. Dragging anywhere in the frame moves the handle.
//!
//! While a drag is live, `pointermove`/`pointerup`/`pointercancel` listeners
//! sit on `window` so the drag keeps tracking outside the frame. They are
//! removed on release and on unmount.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::staging::StagingModule;
use crate::state::slider::{SliderKey, SliderState};
use crate::util::slider_math::{after_clip_style, handle_left_style};

#[cfg(feature = "hydrate")]
fn container_rect(container: NodeRef<leptos::html::Div>) -> Option<(f64, f64)> {
    let el = container.get_untracked()?;
    let rect = el.get_bounding_client_rect();
    Some((rect.left(), rect.width()))
}

#[cfg(feature = "hydrate")]
fn detach_listeners(listeners: StoredValue<Vec<WindowListenerHandle>, LocalStorage>) {
    if let Some(handles) = listeners.try_update_value(std::mem::take) {
        for handle in handles {
            handle.remove();
        }
    }
}

#[cfg(feature = "hydrate")]
fn finish_drag(slider: RwSignal<SliderState>, listeners: StoredValue<Vec<WindowListenerHandle>, LocalStorage>) {
    slider.update(|s| {
        s.end_drag();
    });
    detach_listeners(listeners);
}

#[cfg(feature = "hydrate")]
fn attach_listeners(
    container: NodeRef<leptos::html::Div>,
    slider: RwSignal<SliderState>,
    listeners: StoredValue<Vec<WindowListenerHandle>, LocalStorage>,
) {
    // A stray pointerdown without a matching up must not stack listeners.
    detach_listeners(listeners);

    let on_move = window_event_listener(leptos::ev::pointermove, move |ev| {
        let Some((left, width)) = container_rect(container) else {
            return;
        };
        slider.update(|s| {
            s.drag_to(f64::from(ev.client_x()), left, width);
        });
    });
    let on_up = window_event_listener(leptos::ev::pointerup, move |_| finish_drag(slider, listeners));
    let on_cancel = window_event_listener(leptos::ev::pointercancel, move |_| finish_drag(slider, listeners));

    listeners.update_value(|l| l.extend([on_move, on_up, on_cancel]));
}

/// Draggable before/after viewer for one staging module.
#[component]
pub fn ComparisonSlider(#[prop(into)] module: Signal<&'static StagingModule>) -> impl IntoView {
    let slider = RwSignal::new(SliderState::default());
    let container_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    let listeners = StoredValue::new_local(Vec::<WindowListenerHandle>::new());
    #[cfg(feature = "hydrate")]
    on_cleanup(move || detach_listeners(listeners));

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let Some((left, width)) = container_rect(container_ref) else {
                return;
            };
            slider.update(|s| s.begin_drag(f64::from(ev.client_x()), left, width));
            attach_listeners(container_ref, slider, listeners);
        }
    };

    let on_key_down = move |ev: leptos::ev::KeyboardEvent| {
        if let Some(key) = SliderKey::from_dom_key(&ev.key()) {
            ev.prevent_default();
            slider.update(|s| s.apply_key(key));
        }
    };

    let position = move || slider.get().position;
    let frame_class = move || {
        if slider.get().dragging {
            "compare compare--dragging"
        } else {
            "compare"
        }
    };

    view! {
        <div class=frame_class node_ref=container_ref on:pointerdown=on_pointer_down>
            <img
                class="compare__image"
                src=move || module.get().image_before
                alt=move || module.get().before_label
                draggable="false"
            />
            <img
                class="compare__image compare__image--after"
                src=move || module.get().image_after
                alt=move || module.get().after_label
                style=move || after_clip_style(position())
                draggable="false"
            />

            <div class="compare__tag compare__tag--before">
                <span class="compare__tag-kind">"BEFORE"</span>
                {move || module.get().before_label}
            </div>
            <div class="compare__tag compare__tag--after">
                <span class="compare__tag-kind">"AFTER"</span>
                {move || module.get().after_label}
            </div>

            <div class="compare__divider" style=move || handle_left_style(position())>
                <div
                    class="compare__handle"
                    role="slider"
                    tabindex="0"
                    aria-label="Reveal before and after"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=move || format!("{:.0}", position())
                    on:keydown=on_key_down
                >
                    <Icon kind=IconKind::ChevronsLeftRight class="compare__handle-icon"/>
                </div>
            </div>
        </div>
    }
}
