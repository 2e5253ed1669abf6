// src/presentation/http/extractors.rs
//
// Handler-side access to the viewer resolved by the auth middleware.
// The middleware has already rejected bad credentials; these only read
// what it attached to the request.

use crate::application::auth::Viewer;
use crate::application::error::ApplicationError;
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

#[derive(Debug, Clone, Copy)]
pub struct RequireViewer(pub Viewer);

#[derive(Debug, Clone, Copy)]
pub struct MaybeViewer(pub Option<Viewer>);

impl<S> FromRequestParts<S> for RequireViewer
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Viewer>()
            .copied()
            .map(Self)
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "authorization header is required",
                ))
            })
    }
}

impl<S> FromRequestParts<S> for MaybeViewer
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<Viewer>().copied()))
    }
}
