use super::*;

// =============================================================
// Project
// =============================================================

#[test]
fn project_deserializes_with_only_required_fields() {
    let raw = r#"{"slug":"lsm","title":"LSM store","description":"An embedded KV store."}"#;
    let project: Project = serde_json::from_str(raw).unwrap();
    assert_eq!(project.slug, "lsm");
    assert!(project.cover.is_none());
    assert!(project.tags.is_empty());
    assert!(project.stack.is_empty());
    assert!(project.links.is_empty());
    assert!(!project.featured);
    assert!(project.impact.is_none());
}

#[test]
fn project_deserializes_full_record() {
    let raw = r#"{
        "slug": "folio",
        "title": "Folio",
        "description": "This site.",
        "cover": "/img/folio.png",
        "tags": ["web", "rust"],
        "stack": ["Leptos", "Axum"],
        "links": [{"label": "Source", "url": "https://example.com/folio"}],
        "featured": true,
        "impact": "Ships as 180KB of WASM"
    }"#;
    let project: Project = serde_json::from_str(raw).unwrap();
    assert_eq!(project.cover.as_deref(), Some("/img/folio.png"));
    assert_eq!(project.tags, vec!["web", "rust"]);
    assert_eq!(project.stack, vec!["Leptos", "Axum"]);
    assert_eq!(
        project.links,
        vec![ProjectLink { label: "Source".to_owned(), url: "https://example.com/folio".to_owned() }]
    );
    assert!(project.featured);
    assert_eq!(project.impact.as_deref(), Some("Ships as 180KB of WASM"));
}

#[test]
fn project_has_tag_is_exact_membership() {
    let raw = r#"{"slug":"a","title":"A","description":"","tags":["rust","web"]}"#;
    let project: Project = serde_json::from_str(raw).unwrap();
    assert!(project.has_tag("rust"));
    assert!(project.has_tag("web"));
    assert!(!project.has_tag("ru"));
    assert!(!project.has_tag("Rust"));
}

#[test]
fn project_list_rejects_missing_title() {
    let raw = r#"[{"slug":"a","description":"x"}]"#;
    assert!(serde_json::from_str::<Vec<Project>>(raw).is_err());
}

// =============================================================
// Post
// =============================================================

#[test]
fn post_defaults_optional_fields() {
    let raw = r#"{"slug":"hello","title":"Hello"}"#;
    let post: Post = serde_json::from_str(raw).unwrap();
    assert_eq!(post.title, "Hello");
    assert!(post.excerpt.is_none());
    assert!(post.content.is_empty());
    assert!(post.published_at.is_none());
}

// =============================================================
// ContactMessage
// =============================================================

#[test]
fn contact_message_serializes_three_fields() {
    let msg = ContactMessage {
        name: "Ann".to_owned(),
        email: "ann@x.io".to_owned(),
        message: "Hello there".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&msg).unwrap(),
        serde_json::json!({ "name": "Ann", "email": "ann@x.io", "message": "Hello there" })
    );
}
