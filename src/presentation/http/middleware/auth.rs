// src/presentation/http/middleware/auth.rs
//
// Per-request authentication. Runs after routing so the matched route
// template is available, maps it to an operation and lets the resolver
// apply the route policy. A resolved viewer is attached to the request
// extensions for the extractors downstream.

use crate::application::auth::Operation;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    extract::{MatchedPath, Request},
    http::{header::AUTHORIZATION, Method},
    middleware::Next,
    response::Response,
    Extension,
};

pub async fn authenticate(
    Extension(state): Extension<HttpState>,
    matched: MatchedPath,
    mut request: Request,
    next: Next,
) -> Result<Response, HttpError> {
    let Some(operation) = route_operation(request.method(), matched.as_str()) else {
        return Ok(next.run(request).await);
    };

    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match state.services.auth.resolve(operation, header) {
        Ok(Some(viewer)) => {
            request.extensions_mut().insert(viewer);
        }
        Ok(None) => {}
        Err(err) => return Err(HttpError::from_auth(err)),
    }

    Ok(next.run(request).await)
}

/// Map a method and matched route template to its operation.
fn route_operation(method: &Method, path: &str) -> Option<Operation> {
    let operation = match (method, path) {
        (&Method::POST, "/api/users") => Operation::Register,
        (&Method::POST, "/api/users/login") => Operation::Login,
        (&Method::GET, "/api/user") => Operation::GetCurrentUser,
        (&Method::PUT, "/api/user") => Operation::UpdateUser,
        (&Method::GET, "/api/profiles/{username}") => Operation::GetProfile,
        (&Method::GET, "/api/articles") => Operation::ListArticles,
        (&Method::POST, "/api/articles") => Operation::CreateArticle,
        (&Method::GET, "/api/articles/feed") => Operation::FeedArticles,
        (&Method::GET, "/api/articles/{slug}") => Operation::GetArticle,
        (&Method::PUT, "/api/articles/{slug}") => Operation::UpdateArticle,
        (&Method::DELETE, "/api/articles/{slug}") => Operation::DeleteArticle,
        (&Method::POST, "/api/articles/{slug}/favorite") => Operation::FavoriteArticle,
        (&Method::DELETE, "/api/articles/{slug}/favorite") => Operation::UnfavoriteArticle,
        (&Method::GET, "/api/articles/{slug}/comments") => Operation::GetComments,
        (&Method::POST, "/api/articles/{slug}/comments") => Operation::AddComment,
        (&Method::DELETE, "/api/articles/{slug}/comments/{id}") => Operation::DeleteComment,
        (&Method::GET, "/api/tags") => Operation::GetTags,
        _ => return None,
    };
    Some(operation)
}
