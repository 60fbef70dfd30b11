// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError, domain::account::AccountId,
    presentation::http::state::HttpState,
};
use axum::{extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Caller holding the management token. Carries the account recorded as
/// author of the writes it performs.
#[derive(Debug, Clone, Copy)]
pub struct AdminActor(pub Option<AccountId>);

impl<S> FromRequestParts<S> for AdminActor
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })?;

        let expected = app_state.admin.token.as_deref().ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized(
                "management API is disabled",
            ))
        })?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        if !tokens_match(header.token(), expected) {
            return Err(HttpError::from_error(ApplicationError::unauthorized(
                "invalid token",
            )));
        }

        Ok(Self(app_state.admin.account_id))
    }
}

// Compares every byte so the timing does not depend on the common prefix.
fn tokens_match(given: &str, expected: &str) -> bool {
    let (given, expected) = (given.as_bytes(), expected.as_bytes());
    if given.len() != expected.len() {
        return false;
    }
    given
        .iter()
        .zip(expected)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
