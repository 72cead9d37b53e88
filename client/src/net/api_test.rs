use super::*;

// =============================================================
// Base address resolution
// =============================================================

#[test]
fn resolve_api_base_defaults_when_unset() {
    assert_eq!(resolve_api_base(None), DEFAULT_API_BASE);
}

#[test]
fn resolve_api_base_defaults_when_blank() {
    assert_eq!(resolve_api_base(Some("")), DEFAULT_API_BASE);
    assert_eq!(resolve_api_base(Some("   ")), DEFAULT_API_BASE);
}

#[test]
fn resolve_api_base_defaults_when_scheme_missing() {
    assert_eq!(resolve_api_base(Some("api.example.com")), DEFAULT_API_BASE);
    assert_eq!(resolve_api_base(Some("ftp://api.example.com")), DEFAULT_API_BASE);
    assert_eq!(resolve_api_base(Some("https://")), DEFAULT_API_BASE);
}

#[test]
fn resolve_api_base_trims_whitespace_and_trailing_slashes() {
    assert_eq!(
        resolve_api_base(Some("  https://api.example.com//  ")),
        "https://api.example.com"
    );
}

#[test]
fn resolve_api_base_keeps_path_prefix() {
    assert_eq!(
        resolve_api_base(Some("http://localhost:8080/backend")),
        "http://localhost:8080/backend"
    );
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn endpoints_format_expected_paths() {
    let base = "http://localhost:5000";
    assert_eq!(projects_endpoint(base), "http://localhost:5000/api/projects");
    assert_eq!(posts_endpoint(base), "http://localhost:5000/api/posts");
    assert_eq!(contact_endpoint(base), "http://localhost:5000/api/contact");
}

// =============================================================
// Status handling
// =============================================================

#[test]
fn check_status_accepts_any_2xx() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(201), Ok(()));
    assert_eq!(check_status(204), Ok(()));
}

#[test]
fn check_status_rejects_everything_else() {
    assert_eq!(check_status(199), Err(ApiError::Status(199)));
    assert_eq!(check_status(302), Err(ApiError::Status(302)));
    assert_eq!(check_status(422), Err(ApiError::Status(422)));
    assert_eq!(check_status(500), Err(ApiError::Status(500)));
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status(503).to_string(), "unexpected status: 503");
    assert_eq!(ApiError::Transport("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

// =============================================================
// Non-hydrate stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetches_are_unavailable_without_browser() {
    futures::executor::block_on(async {
        assert_eq!(fetch_projects().await, Err(ApiError::Unavailable));
        assert_eq!(fetch_posts().await, Err(ApiError::Unavailable));
    });
}
