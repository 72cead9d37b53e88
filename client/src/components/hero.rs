//! Landing banner: name, animated role line, calls to action, 3D backdrop.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use leptos::prelude::*;

use crate::content::{NAME, RESUME_PATH, ROLES, TAGLINE, hero_scene_url};

#[component]
pub fn Hero(on_navigate: Callback<&'static str>) -> impl IntoView {
    // Server render shows the first role in full; the typewriter takes over
    // after hydration unless the visitor prefers reduced motion.
    let role = RwSignal::new(ROLES.first().copied().unwrap_or_default().to_owned());

    #[cfg(feature = "hydrate")]
    {
        use crate::util::liveness::Liveness;
        use crate::util::platform::{BrowserPlatform, Platform};
        use crate::util::typewriter::Typewriter;

        let live = Liveness::new();
        let task_live = live.clone();
        leptos::task::spawn_local(async move {
            if BrowserPlatform.prefers_reduced_motion() {
                return;
            }
            let mut typewriter = Typewriter::new(ROLES.iter().copied());
            loop {
                let delay = typewriter.tick();
                if !task_live.is_alive() {
                    break;
                }
                role.set(typewriter.text());
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay))).await;
            }
        });
        on_cleanup(move || live.retire());
    }

    view! {
        <section id="top" class="hero">
            {hero_scene_url()
                .map(|src| {
                    view! {
                        <div class="hero__scene" aria-hidden="true">
                            <iframe src=src title="Decorative 3D scene" tabindex="-1"></iframe>
                        </div>
                    }
                })}
            <div class="hero__content">
                <p class="hero__greeting">"Hi, I'm"</p>
                <h1 class="hero__name">{NAME}</h1>
                <p class="hero__role">
                    <span>{move || role.get()}</span>
                    <span class="hero__caret" aria-hidden="true">"|"</span>
                </p>
                <p class="hero__tagline">{TAGLINE}</p>
                <div class="hero__actions">
                    <button class="btn btn--primary" on:click=move |_| on_navigate.run("projects")>
                        "View projects"
                    </button>
                    <button class="btn" on:click=move |_| on_navigate.run("contact")>
                        "Get in touch"
                    </button>
                    <a class="btn btn--ghost" href=RESUME_PATH download="resume.pdf">
                        "Download résumé"
                    </a>
                </div>
            </div>
        </section>
    }
}
