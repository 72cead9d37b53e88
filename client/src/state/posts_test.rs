use super::*;

fn post(slug: &str) -> Post {
    Post {
        slug: slug.to_owned(),
        title: slug.to_owned(),
        excerpt: None,
        content: format!("# {slug}"),
        published_at: None,
    }
}

#[test]
fn default_is_loading_and_hidden() {
    let state = PostsState::default();
    assert!(state.loading);
    assert!(!state.is_visible());
}

#[test]
fn empty_collection_emits_no_section() {
    let mut state = PostsState::default();
    state.loaded(Vec::new());
    assert!(!state.loading);
    assert!(!state.is_visible());
}

#[test]
fn failed_fetch_emits_no_section() {
    let mut state = PostsState::default();
    state.failed();
    assert!(!state.is_visible());
}

#[test]
fn non_empty_collection_is_visible() {
    let mut state = PostsState::default();
    state.loaded(vec![post("a"), post("b")]);
    assert!(state.is_visible());
    assert_eq!(state.items.len(), 2);
}

#[test]
fn toggle_expanded_keeps_one_post_open() {
    let mut state = PostsState::default();
    state.loaded(vec![post("a"), post("b")]);
    state.toggle_expanded("a");
    assert!(state.is_expanded("a"));
    state.toggle_expanded("b");
    assert!(!state.is_expanded("a"));
    assert!(state.is_expanded("b"));
    state.toggle_expanded("b");
    assert!(state.expanded.is_none());
}
