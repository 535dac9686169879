use axum::{
    extract::State,
    http::{Method, Uri},
    response::Html,
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::state::AppState;
use crate::views::View;

#[derive(Serialize)]
pub struct RouteInfo {
    pub name: &'static str,
    pub path: &'static str,
    pub href: String,
    pub view: View,
    pub loaded: bool,
}

#[derive(Serialize)]
pub struct RouteListResponse {
    pub base: String,
    pub routes: Vec<RouteInfo>,
}

/// GET /api/v1/routes
pub async fn handle_list_routes(State(state): State<AppState>) -> Json<RouteListResponse> {
    let routes = state
        .routes
        .routes()
        .iter()
        .map(|route| RouteInfo {
            name: route.name,
            path: route.path,
            href: state.routes.href(route),
            view: route.view,
            loaded: state.views.is_loaded(route.view),
        })
        .collect();

    Json(RouteListResponse {
        base: state.routes.base().to_string(),
        routes,
    })
}

/// Fallback for every path not claimed by the API: resolves the route and
/// serves its view, loading it on first navigation. Only GET and HEAD navigate.
pub async fn handle_navigate(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    let path = uri.path();
    if method != Method::GET && method != Method::HEAD {
        return Err(AppError::MethodNotAllowed(format!("{method} {path}")));
    }

    let route = state
        .routes
        .resolve(path)
        .ok_or_else(|| AppError::NotFound(format!("No route for {path}")))?;

    debug!("Navigating to {} ({path})", route.name);
    let doc = state.views.load(route.view).await?;
    Ok(Html(with_base_href(&doc, &state.routes.base_href())))
}

/// Inserts `<base href>` right after `<head>`. Documents without a head are
/// returned unchanged.
fn with_base_href(doc: &str, href: &str) -> String {
    match doc.find("<head>") {
        Some(pos) => {
            let at = pos + "<head>".len();
            format!("{}\n  <base href=\"{href}\">{}", &doc[..at], &doc[at..])
        }
        None => doc.to_string(),
    }
}
