//! Caller identity resolution.
//!
//! Token issuance lives outside this service. An [`Authenticator`] turns
//! request headers into an optional [`OwnerId`]; the [`authenticate`]
//! middleware stores the result as a [`Caller`] extension, and handlers
//! receive it as an explicit extractor argument.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, HeaderName, request::Parts},
    middleware::Next,
    response::Response,
};
use thiserror::Error;

use super::{error::ApiErrorResponse, handlers::AppState};
use crate::todo::domain::OwnerId;

/// Default header carrying the identity established by an upstream gateway.
pub const DEFAULT_IDENTITY_HEADER: &str = "x-user-id";

/// Errors raised while resolving the caller identity.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthenticationError {
    /// The identity header is present but unusable.
    #[error("identity header '{0}' is empty or not valid UTF-8")]
    MalformedIdentity(String),
}

/// Resolves the caller identity for a request.
pub trait Authenticator: Send + Sync {
    /// Returns the caller, or `None` for an anonymous request.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticationError`] when identity material is present but
    /// invalid.
    fn authenticate(&self, headers: &HeaderMap) -> Result<Option<OwnerId>, AuthenticationError>;
}

/// Trusts an identity header set by an authenticating reverse proxy.
#[derive(Debug, Clone)]
pub struct TrustedHeaderAuthenticator {
    header: HeaderName,
}

impl TrustedHeaderAuthenticator {
    /// Creates an authenticator reading `header`.
    #[must_use]
    pub const fn new(header: HeaderName) -> Self {
        Self { header }
    }

    /// Returns the header this authenticator reads.
    #[must_use]
    pub const fn header(&self) -> &HeaderName {
        &self.header
    }
}

impl Default for TrustedHeaderAuthenticator {
    fn default() -> Self {
        Self::new(HeaderName::from_static(DEFAULT_IDENTITY_HEADER))
    }
}

impl Authenticator for TrustedHeaderAuthenticator {
    fn authenticate(&self, headers: &HeaderMap) -> Result<Option<OwnerId>, AuthenticationError> {
        let Some(value) = headers.get(&self.header) else {
            return Ok(None);
        };
        let malformed = || AuthenticationError::MalformedIdentity(self.header.as_str().to_owned());
        let raw = value.to_str().map_err(|_| malformed())?;
        OwnerId::new(raw).map(Some).map_err(|_| malformed())
    }
}

/// Identity of the caller, if any, for the current request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller(pub Option<OwnerId>);

impl Caller {
    /// Returns the caller identity, if any.
    #[must_use]
    pub const fn owner(&self) -> Option<&OwnerId> {
        self.0.as_ref()
    }
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Self>().cloned().unwrap_or_default())
    }
}

/// Middleware resolving the caller and attaching it to the request.
///
/// # Errors
///
/// Returns a 401 response when the identity material is malformed.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiErrorResponse> {
    let owner = state.authenticator.authenticate(request.headers())?;
    request.extensions_mut().insert(Caller(owner));
    Ok(next.run(request).await)
}
