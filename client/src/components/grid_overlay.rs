//! Decorative layout grid, toggled from the keyboard.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
fn is_editable(target: Option<web_sys::EventTarget>) -> bool {
    use wasm_bindgen::JsCast;

    let Some(el) = target.and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok()) else {
        return false;
    };
    matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT") || el.is_content_editable()
}

#[component]
pub fn GridOverlay(ui: RwSignal<UiState>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::ui::{KeyPress, is_grid_toggle};

        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            let key = ev.key();
            let press = KeyPress {
                key: &key,
                ctrl: ev.ctrl_key(),
                meta: ev.meta_key(),
                alt: ev.alt_key(),
                editable_target: is_editable(ev.target()),
            };
            if is_grid_toggle(press) {
                ui.update(UiState::toggle_grid);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="grid-overlay" class:grid-overlay--visible=move || ui.get().grid_visible aria-hidden="true"></div>
    }
}
