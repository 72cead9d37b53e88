use super::*;

use leptos::tachys::view::RenderHtml;

fn post(slug: &str, title: &str) -> Post {
    Post {
        slug: slug.to_owned(),
        title: title.to_owned(),
        excerpt: None,
        content: "Body text.".to_owned(),
        published_at: None,
    }
}

fn render_list(state: PostsState) -> String {
    Owner::new().with(|| {
        let posts = RwSignal::new(state);
        view! { <PostsList posts=posts/> }.to_html()
    })
}

#[test]
fn loading_emits_no_container() {
    let html = render_list(PostsState::default());
    assert!(!html.contains("id=\"notes\""));
    assert!(!html.contains("notes__list"));
}

#[test]
fn failed_fetch_emits_no_container() {
    let mut state = PostsState::default();
    state.failed();
    assert!(!render_list(state).contains("id=\"notes\""));
}

#[test]
fn empty_collection_emits_no_container() {
    let mut state = PostsState::default();
    state.loaded(Vec::new());
    assert!(!render_list(state).contains("id=\"notes\""));
}

#[test]
fn loaded_posts_render_collapsed() {
    let mut state = PostsState::default();
    state.loaded(vec![post("first", "First note"), post("second", "Second note")]);
    let html = render_list(state);
    assert!(html.contains("id=\"notes\""));
    assert!(html.contains("First note"));
    assert!(html.contains("Second note"));
    assert!(!html.contains("note__body"));
}

#[test]
fn expanded_post_renders_markdown_body() {
    let mut state = PostsState::default();
    state.loaded(vec![post("first", "First note")]);
    state.toggle_expanded("first");
    let html = render_list(state);
    assert!(html.contains("note__body"));
    assert!(html.contains("<p>Body text.</p>"));
}
