// src/application/auth/mod.rs
//
// Request authentication: takes the raw Authorization header for an
// operation, applies the route policy, and resolves the viewer identity.
// Route policy is built once at startup and read-only afterwards.

use crate::application::ports::security::{TokenCodec, TokenError};
use crate::domain::user::UserId;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// Scheme word expected in `Authorization: Token <jwt>`, matched
/// case-insensitively.
pub const TOKEN_SCHEME: &str = "Token";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("authorization header is required")]
    Missing,
    #[error("malformed authorization header")]
    Malformed,
    #[error("invalid token: {0}")]
    Invalid(#[from] TokenError),
}

/// Identity resolved from the current request's credentials. Derived once
/// per request and discarded with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub id: UserId,
}

/// Every routed operation, used as the key into the route policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Register,
    Login,
    GetCurrentUser,
    UpdateUser,
    GetProfile,
    CreateArticle,
    GetArticle,
    UpdateArticle,
    DeleteArticle,
    FavoriteArticle,
    UnfavoriteArticle,
    ListArticles,
    FeedArticles,
    AddComment,
    DeleteComment,
    GetComments,
    GetTags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequirement {
    /// A valid token must be present.
    Required,
    /// Public data, personalized when a valid token is present.
    Optional,
    /// Public by design; the resolver is skipped entirely.
    None,
}

/// Static optional-auth / no-auth sets. Constructed once at startup and
/// shared by reference, never mutated.
#[derive(Debug, Clone)]
pub struct AuthPolicy {
    optional: HashSet<Operation>,
    open: HashSet<Operation>,
}

impl AuthPolicy {
    pub fn new(
        optional: impl IntoIterator<Item = Operation>,
        open: impl IntoIterator<Item = Operation>,
    ) -> Self {
        Self {
            optional: optional.into_iter().collect(),
            open: open.into_iter().collect(),
        }
    }

    /// The policy used by the Conduit API.
    pub fn conduit() -> Self {
        Self::new(
            [
                Operation::GetProfile,
                Operation::GetComments,
                Operation::ListArticles,
                Operation::GetTags,
            ],
            [Operation::Login, Operation::Register, Operation::GetArticle],
        )
    }

    pub fn requirement_for(&self, operation: Operation) -> AuthRequirement {
        if self.open.contains(&operation) {
            AuthRequirement::None
        } else if self.optional.contains(&operation) {
            AuthRequirement::Optional
        } else {
            AuthRequirement::Required
        }
    }
}

/// Per-request authentication state machine.
///
/// - no header: proceed unauthenticated on optional routes, otherwise fail
///   with `Missing`;
/// - header present but not `<scheme> <token>` with the expected scheme
///   word: `Malformed`, even on optional routes — a failed attempt is never
///   silently ignored;
/// - token rejected by the codec: `Invalid`;
/// - otherwise the embedded viewer id is attached to the request context.
pub struct AuthResolver {
    codec: Arc<dyn TokenCodec>,
    policy: AuthPolicy,
}

impl AuthResolver {
    pub fn new(codec: Arc<dyn TokenCodec>, policy: AuthPolicy) -> Self {
        Self { codec, policy }
    }

    pub fn policy(&self) -> &AuthPolicy {
        &self.policy
    }

    pub fn resolve(
        &self,
        operation: Operation,
        header: Option<&str>,
    ) -> Result<Option<Viewer>, AuthError> {
        let requirement = self.policy.requirement_for(operation);
        if requirement == AuthRequirement::None {
            return Ok(None);
        }

        let Some(raw) = header else {
            return match requirement {
                AuthRequirement::Optional => Ok(None),
                _ => Err(AuthError::Missing),
            };
        };

        let token = parse_token_header(raw)?;
        let id = self.codec.verify(token)?;
        Ok(Some(Viewer { id }))
    }
}

/// Split `<scheme> <token>` into exactly two parts and check the scheme word.
fn parse_token_header(raw: &str) -> Result<&str, AuthError> {
    let mut parts = raw.splitn(2, ' ');
    let scheme = parts.next().unwrap_or_default();
    let token = parts.next().ok_or(AuthError::Malformed)?;
    if token.is_empty() || !scheme.eq_ignore_ascii_case(TOKEN_SCHEME) {
        return Err(AuthError::Malformed);
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubCodec {
        accept: &'static str,
    }

    impl TokenCodec for StubCodec {
        fn issue(&self, _viewer: UserId) -> String {
            self.accept.to_string()
        }

        fn verify(&self, token: &str) -> Result<UserId, TokenError> {
            if token == self.accept {
                UserId::new(42).map_err(|_| TokenError::Malformed)
            } else {
                Err(TokenError::InvalidSignature)
            }
        }
    }

    fn resolver() -> AuthResolver {
        AuthResolver::new(Arc::new(StubCodec { accept: "good" }), AuthPolicy::conduit())
    }

    #[test]
    fn missing_header_on_required_route_fails() {
        let err = resolver()
            .resolve(Operation::CreateArticle, None)
            .unwrap_err();
        assert_eq!(err, AuthError::Missing);
    }

    #[test]
    fn missing_header_on_optional_route_proceeds_unauthenticated() {
        let viewer = resolver().resolve(Operation::ListArticles, None).unwrap();
        assert!(viewer.is_none());
    }

    #[test]
    fn open_route_skips_verification_even_with_garbage_header() {
        let viewer = resolver()
            .resolve(Operation::GetArticle, Some("complete nonsense"))
            .unwrap();
        assert!(viewer.is_none());
    }

    #[test]
    fn malformed_header_fails_even_on_optional_route() {
        let resolver = resolver();
        for raw in ["Token", "Token ", "Bearer good"] {
            let err = resolver
                .resolve(Operation::ListArticles, Some(raw))
                .unwrap_err();
            assert_eq!(err, AuthError::Malformed, "header {raw:?}");
        }
    }

    #[test]
    fn scheme_word_is_case_insensitive() {
        let viewer = resolver()
            .resolve(Operation::ListArticles, Some("tOkEn good"))
            .unwrap();
        assert_eq!(viewer.unwrap().id, UserId::new(42).unwrap());
    }

    #[test]
    fn bad_token_is_invalid_not_malformed() {
        let err = resolver()
            .resolve(Operation::ListArticles, Some("Token forged"))
            .unwrap_err();
        assert_eq!(err, AuthError::Invalid(TokenError::InvalidSignature));
    }

    #[test]
    fn valid_token_attaches_viewer() {
        let viewer = resolver()
            .resolve(Operation::CreateArticle, Some("Token good"))
            .unwrap()
            .unwrap();
        assert_eq!(viewer.id, UserId::new(42).unwrap());
    }
}
