//! Single-page home route and composition root.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns every state container on the page. Sections receive the signals they
//! render plus callbacks for the few cross-section actions (theme toggle,
//! section jumps), so data flows one way from here.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact_form::ContactForm;
use crate::components::cursor_dot::CursorDot;
use crate::components::footer::Footer;
use crate::components::grid_overlay::GridOverlay;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::posts_list::PostsList;
use crate::components::project_gallery::ProjectGallery;
use crate::state::contact::ContactState;
use crate::state::nav::{NavState, scroll_to_section};
use crate::state::posts::PostsState;
use crate::state::projects::ProjectsState;
use crate::state::theme::{self as theme_pref, Theme, ThemeOptions, ThemeResolution};
use crate::state::ui::UiState;
use crate::util::platform::{BrowserPlatform, Platform};

fn report_theme_override(resolution: ThemeResolution) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(preferred) = resolution.overridden {
            log::warn!(
                "FOLIO_FORCE_DARK is set: forcing dark theme over the {} preference",
                preferred.as_str()
            );
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = resolution;
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let theme = RwSignal::new(Theme::default());
    let nav = RwSignal::new(NavState::default());
    let ui = RwSignal::new(UiState::default());
    let projects = RwSignal::new(ProjectsState::default());
    let posts = RwSignal::new(PostsState::default());
    let contact = RwSignal::new(ContactState::default());

    // Effects only run in the browser, after hydration, so the server render
    // and the first client render agree on the default theme.
    Effect::new(move || {
        let platform = BrowserPlatform;
        let resolution = theme_pref::initialize(&platform, ThemeOptions::from_build_env());
        report_theme_override(resolution);
        theme.set(resolution.theme);
        ui.update(|u| u.reduced_motion = platform.prefers_reduced_motion());
    });

    let on_toggle_theme = Callback::new(move |()| {
        let next = theme_pref::toggle(&BrowserPlatform, theme.get_untracked());
        theme.set(next);
    });

    let on_navigate = Callback::new(move |anchor: &'static str| {
        nav.update(NavState::close_menu);
        scroll_to_section(&BrowserPlatform, anchor);
    });

    let has_notes = Signal::derive(move || posts.get().is_visible());

    view! {
        <GridOverlay ui=ui/>
        <CursorDot ui=ui/>
        <NavBar
            nav=nav
            theme=theme
            has_notes=has_notes
            on_toggle_theme=on_toggle_theme
            on_navigate=on_navigate
        />
        <main class="page">
            <Hero on_navigate=on_navigate/>
            <ProjectGallery projects=projects/>
            <About/>
            <PostsList posts=posts/>
            <ContactForm contact=contact/>
        </main>
        <Footer on_navigate=on_navigate/>
    }
}
