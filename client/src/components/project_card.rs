//! Single project tile.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use leptos::prelude::*;

use crate::net::types::Project;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let Project { title, description, cover, tags, stack, links, featured, impact, .. } = project;
    let cover_alt = format!("{title} cover");

    view! {
        <article class="project-card" class:project-card--featured=featured>
            {cover.map(|src| view! { <img class="project-card__cover" src=src alt=cover_alt loading="lazy"/> })}
            <div class="project-card__body">
                <header class="project-card__header">
                    <h3 class="project-card__title">{title}</h3>
                    {featured.then(|| view! { <span class="project-card__badge">"Featured"</span> })}
                </header>
                <ul class="project-card__tags" aria-label="Tags">
                    {tags.into_iter().map(|tag| view! { <li class="project-card__tag">{tag}</li> }).collect_view()}
                </ul>
                <p class="project-card__description">{description}</p>
                {impact.map(|note| view! { <p class="project-card__impact">{note}</p> })}
                <ul class="project-card__stack">
                    {stack.into_iter().map(|label| view! { <li>{label}</li> }).collect_view()}
                </ul>
                <div class="project-card__links">
                    {links
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a href=link.url target="_blank" rel="noopener noreferrer">
                                    {link.label}
                                    " ↗"
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
