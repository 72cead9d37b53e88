//! Page footer.

use leptos::prelude::*;

use crate::content::{NAME, SOCIALS, copyright_year};
use crate::state::nav::TOP_ANCHOR;

#[component]
pub fn Footer(on_navigate: Callback<&'static str>) -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer__copy">"© " {copyright_year()} " " {NAME}</p>
            <ul class="footer__socials">
                {SOCIALS
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.url target="_blank" rel="noopener noreferrer">{link.label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class="btn btn--ghost footer__top" on:click=move |_| on_navigate.run(TOP_ANCHOR)>
                "Back to top ↑"
            </button>
            <p class="footer__hint">"Press " <kbd>"G"</kbd> " for the grid."</p>
        </footer>
    }
}
