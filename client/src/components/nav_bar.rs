//! Top navigation bar with section links, theme toggle, and mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hides while the visitor scrolls down and returns on the first upward
//! scroll. Section jumps are delegated to the composition root through
//! `on_navigate` so the menu state and scrolling stay in one place.

use leptos::prelude::*;

use crate::content::{INITIALS, RESUME_PATH};
use crate::state::nav::{NavState, SECTIONS, TOP_ANCHOR};
use crate::state::theme::Theme;

#[component]
pub fn NavBar(
    nav: RwSignal<NavState>,
    #[prop(into)] theme: Signal<Theme>,
    /// Whether the notes section rendered; its link is hidden otherwise.
    #[prop(into)]
    has_notes: Signal<bool>,
    on_toggle_theme: Callback<()>,
    on_navigate: Callback<&'static str>,
) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::platform::{BrowserPlatform, Platform};

        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = BrowserPlatform.scroll_y();
            nav.update(|n| n.on_scroll(y));
        });
        on_cleanup(move || handle.remove());
    }

    let links = move || {
        let show_notes = has_notes.get();
        SECTIONS
            .iter()
            .filter(move |(id, _)| show_notes || *id != "notes")
            .map(|&(id, label)| {
                view! {
                    <a
                        class="nav__link"
                        href=format!("#{id}")
                        on:click=move |ev| {
                            ev.prevent_default();
                            on_navigate.run(id);
                        }
                    >
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header
            class="nav"
            class:nav--hidden=move || nav.get().hidden
            class:nav--scrolled=move || nav.get().scrolled
        >
            <a
                class="nav__brand"
                href="#top"
                on:click=move |ev| {
                    ev.prevent_default();
                    on_navigate.run(TOP_ANCHOR);
                }
            >
                {INITIALS}
            </a>

            <nav class="nav__links" class:nav__links--open=move || nav.get().menu_open>
                {links}
                <a class="nav__link nav__link--resume" href=RESUME_PATH download="resume.pdf">
                    "Résumé"
                </a>
            </nav>

            <span class="nav__spacer"></span>

            <button
                class="btn nav__theme"
                on:click=move |_| on_toggle_theme.run(())
                title="Toggle dark mode"
            >
                {move || if theme.get().is_dark() { "☀" } else { "☾" }}
            </button>

            <button
                class="btn nav__menu"
                aria-label="Toggle menu"
                aria-expanded=move || if nav.get().menu_open { "true" } else { "false" }
                on:click=move |_| nav.update(NavState::toggle_menu)
            >
                {move || if nav.get().menu_open { "✕" } else { "☰" }}
            </button>
        </header>
    }
}
