//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only renders the portfolio page and serves files. Project, post,
//! and contact data live behind the external content API that the browser
//! calls directly, so there are no `/api` routes here.
//!
//! Layout:
//! - `/healthz` liveness probe
//! - Leptos SSR routes generated from `client::app::App`
//! - `/pkg` compiled WASM, JS, and CSS from the site root
//! - everything else (`/resume.pdf`, favicons) from the site root


use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};

/// Load Leptos options from `[workspace.metadata.leptos]` / `LEPTOS_*`.
///
/// # Errors
///
/// Returns [`ConfigError::Leptos`] if the configuration cannot be read.
pub fn leptos_options() -> Result<LeptosOptions, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    Ok(conf.leptos_options)
}

/// Full application router: SSR page plus static files.
pub fn app(leptos_options: LeptosOptions, config: ServerConfig) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = leptos_options.site_root.to_string();
    layered(leptos_router.merge(static_routes(Path::new(&site_root))), config)
}

/// Health probe plus the site-root file services.
pub(crate) fn static_routes(site_root: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root))
}

fn layered(router: Router, config: ServerConfig) -> Router {
    let router = router.layer(TraceLayer::new_for_http());
    if config.compress {
        router.layer(CompressionLayer::new())
    } else {
        router
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
