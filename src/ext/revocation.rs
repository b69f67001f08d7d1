//! Token Revocation
//!
//! RFC 7009. A single form POST hands a token back to the authorization
//! server. Success carries no body contract; failure is the standard
//! error-shaped JSON.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;
use url::Url;

use crate::ext::TokenRevocationRequestExtension;
use crate::http::HttpRequest;
use crate::optional::Optional;
use crate::params::ParameterCollection;

/// A hint for the type of the token submitted for revocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenTypeHint {
    AccessToken,
    RefreshToken,
}

impl TokenTypeHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccessToken => "access_token",
            Self::RefreshToken => "refresh_token",
        }
    }
}

impl fmt::Display for TokenTypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A revocation request, encoded as a form POST to the revocation endpoint.
#[derive(Debug, Default)]
pub struct TokenRevocationRequest {
    /// The token to revoke.
    pub token: String,
    /// A hint for the type of the submitted token.
    pub token_type_hint: Optional<TokenTypeHint>,
    /// Extensions contributing additional parameters, applied in order.
    pub extensions: Vec<Box<dyn TokenRevocationRequestExtension>>,
}

impl TokenRevocationRequest {
    /// Create a request for the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    /// Build the HTTP request for the given revocation endpoint.
    pub fn to_request(&self, revocation_endpoint: &Url) -> HttpRequest {
        let mut params = ParameterCollection::new();
        params.push("token", self.token.as_str());
        params.push_optional("token_type_hint", &self.token_type_hint);

        for extension in &self.extensions {
            extension.add_parameters(&mut params);
        }

        trace!(endpoint = %revocation_endpoint, "built revocation request");
        HttpRequest::post_form(revocation_endpoint.clone(), params.to_form_body())
    }
}

/// The error-shaped JSON returned when revocation fails.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenRevocationErrorResponse {
    /// The error code.
    pub error: String,
    /// The human-readable error description.
    #[serde(default, skip_serializing_if = "Optional::is_absent")]
    pub error_description: Optional<String>,
    /// The URI at which more detailed error information is available.
    #[serde(default, skip_serializing_if = "Optional::is_absent")]
    pub error_uri: Optional<String>,
}
