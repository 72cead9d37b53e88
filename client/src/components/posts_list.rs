//! Notes list fetched from `/api/posts`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Emits no container at all until the fetch settles with at least one post.
//! Failures are logged and otherwise silent.

#[cfg(test)]
#[path = "posts_list_test.rs"]
mod posts_list_test;

use leptos::prelude::*;

use crate::net::types::Post;
use crate::state::posts::PostsState;
use crate::util::markdown;

#[component]
pub fn PostsList(posts: RwSignal<PostsState>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::liveness::Liveness;

        let live = Liveness::new();
        let task_live = live.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_posts().await;
            let Some(result) = task_live.admit(result) else {
                return;
            };
            match result {
                Ok(items) => posts.update(|s| s.loaded(items)),
                Err(e) => {
                    log::warn!("post fetch failed: {e}");
                    posts.update(PostsState::failed);
                }
            }
        });
        on_cleanup(move || live.retire());
    }

    view! {
        <Show when=move || posts.get().is_visible()>
            <section id="notes" class="section notes">
                <h2 class="section__title">"Notes"</h2>
                <ul class="notes__list">
                    {move || {
                        posts
                            .get()
                            .items
                            .into_iter()
                            .map(|post| view! { <PostItem post=post posts=posts/> })
                            .collect_view()
                    }}
                </ul>
            </section>
        </Show>
    }
}

#[component]
fn PostItem(post: Post, posts: RwSignal<PostsState>) -> impl IntoView {
    let Post { slug, title, excerpt, content, published_at } = post;
    let body_html = markdown::render(&content);
    let expanded = {
        let slug = slug.clone();
        move || posts.get().is_expanded(&slug)
    };
    let is_expanded = expanded.clone();
    let show_body = expanded.clone();

    view! {
        <li class="note" class:note--expanded=expanded>
            <button
                class="note__header"
                aria-expanded=move || if is_expanded() { "true" } else { "false" }
                on:click=move |_| posts.update(|s| s.toggle_expanded(&slug))
            >
                <h3 class="note__title">{title}</h3>
                {published_at.map(|date| view! { <time class="note__date">{date}</time> })}
            </button>
            {excerpt.map(|text| view! { <p class="note__excerpt">{text}</p> })}
            <Show when=show_body>
                <div class="note__body" inner_html=body_html.clone()></div>
            </Show>
        </li>
    }
}
