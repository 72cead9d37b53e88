//! Cosmetic dot trailing the pointer.

use leptos::prelude::*;

use crate::state::ui::{UiState, cursor_style};

#[component]
pub fn CursorDot(ui: RwSignal<UiState>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
            ui.update(|u| u.track_cursor(x, y));
        });
        on_cleanup(move || handle.remove());
    }

    let style = move || ui.get().cursor.map(|(x, y)| cursor_style(x, y)).unwrap_or_default();

    view! {
        <Show when=move || ui.get().cursor_visible()>
            <div class="cursor-dot" style=style aria-hidden="true"></div>
        </Show>
    }
}
