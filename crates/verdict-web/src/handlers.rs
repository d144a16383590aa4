// Request handling
//
// Every page request runs through the route table. A full request gets the
// page wrapped in the shell document; an htmx request (navigation from a
// link already inside the shell) gets only the page fragment, so the
// header and side panel are never re-sent.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use tracing::debug;

use verdict_ui::{not_found, routes, shell};

/// Parsed client metadata from incoming headers.
pub struct ClientRequest {
    /// `true` when the `HX-Request` header is present: the request came from
    /// an in-shell navigation and wants a bare fragment.
    pub is_htmx: bool,
}

impl ClientRequest {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            is_htmx: headers.get("hx-request").is_some(),
        }
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for ClientRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

/// `GET /`
pub async fn root(client: ClientRequest) -> Response {
    let (status, markup) = respond("/", client.is_htmx);
    (status, Html(markup)).into_response()
}

/// `GET /*path`
pub async fn page(Path(path): Path<String>, client: ClientRequest) -> Response {
    let (status, markup) = respond(&format!("/{path}"), client.is_htmx);
    (status, Html(markup)).into_response()
}

/// Resolves a path and renders it, as a fragment or a full document.
fn respond(path: &str, fragment: bool) -> (StatusCode, String) {
    match routes().resolve(path) {
        Some(hit) => {
            let page = hit.target();
            debug!(path, page = page.slug(), param = hit.param(), "route matched");

            let content = page.render(hit.param());
            let markup = if fragment {
                content
            } else {
                shell::document(page.title(), content)
            };

            (StatusCode::OK, markup.into_string())
        }
        None => {
            debug!(path, "no route matched");

            let page = not_found();
            let content = page.render(None);
            let markup = if fragment {
                content
            } else {
                shell::document(page.title(), content)
            };

            (StatusCode::NOT_FOUND, markup.into_string())
        }
    }
}
