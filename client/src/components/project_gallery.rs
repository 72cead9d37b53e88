//! Filterable project gallery.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches `/api/projects` once on mount. Tag chips filter the in-memory
//! collection; a failed fetch shows a static message in place of the grid.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::project_card::ProjectCard;
use crate::state::projects::ProjectsState;

#[component]
pub fn ProjectGallery(projects: RwSignal<ProjectsState>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::liveness::Liveness;

        let live = Liveness::new();
        let task_live = live.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_projects().await;
            let Some(result) = task_live.admit(result) else {
                return;
            };
            match result {
                Ok(items) => projects.update(|s| s.loaded(items)),
                Err(e) => {
                    log::warn!("project fetch failed: {e}");
                    projects.update(ProjectsState::failed);
                }
            }
        });
        on_cleanup(move || live.retire());
    }

    let filters = move || {
        let state = projects.get();
        state
            .filter_options()
            .into_iter()
            .map(|option| {
                let active = state.filter == option;
                let label = option.label().to_owned();
                view! {
                    <button
                        class="chip"
                        class:chip--active=active
                        aria-pressed=if active { "true" } else { "false" }
                        on:click=move |_| projects.update(|s| s.select(option.clone()))
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    let grid = move || {
        let state = projects.get();
        let visible = state.visible();
        if visible.is_empty() {
            let message = if state.items.is_empty() { "No projects yet." } else { "No projects match this tag." };
            return view! { <p class="projects__status">{message}</p> }.into_any();
        }
        view! {
            <div class="projects__grid">
                {visible.into_iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section id="projects" class="section projects">
            <h2 class="section__title">"Projects"</h2>
            <Show
                when=move || !projects.get().loading
                fallback=|| view! { <p class="projects__status">"Loading projects..."</p> }
            >
                {move || match projects.get().error {
                    Some(message) => view! { <p class="projects__status projects__status--error">{message}</p> }.into_any(),
                    None => view! {
                        <div class="projects__filters" role="toolbar" aria-label="Filter projects by tag">
                            {filters}
                        </div>
                        {grid}
                    }
                    .into_any(),
                }}
            </Show>
        </section>
    }
}
