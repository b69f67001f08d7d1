//! Client Credentials Grant
//!
//! RFC 6749 Section 4.4. The client requests a token for itself; client
//! authentication travels out-of-band (HTTP Basic or an extension), so the
//! form body carries only the grant type and an optional scope. The token
//! endpoint answers with `crate::token::AccessTokenResponse` or
//! `crate::token::AccessTokenErrorResponse`; no refresh token is issued for
//! this grant.

use tracing::trace;
use url::Url;

use crate::ext::AccessTokenRequestExtension;
use crate::http::HttpRequest;
use crate::optional::Optional;
use crate::params::ParameterCollection;

/// The fixed grant type.
pub const GRANT_TYPE: &str = "client_credentials";

/// An access token request, encoded as a form POST to the token endpoint.
#[derive(Debug, Default)]
pub struct AccessTokenRequest {
    /// The requested scope of the access token.
    pub scope: Optional<Vec<String>>,
    /// Extensions contributing additional parameters, applied in order.
    pub extensions: Vec<Box<dyn AccessTokenRequestExtension>>,
}

impl AccessTokenRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the HTTP request for the given token endpoint.
    pub fn to_request(&self, token_endpoint: &Url) -> HttpRequest {
        let mut params = ParameterCollection::new();
        params.push("grant_type", GRANT_TYPE);
        params.push_optional_list("scope", &self.scope);

        for extension in &self.extensions {
            extension.add_parameters(&mut params);
        }

        trace!(endpoint = %token_endpoint, "built access token request");
        HttpRequest::post_form(token_endpoint.clone(), params.to_form_body())
    }
}
