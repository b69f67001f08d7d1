//! Resource Owner Password Credentials Grant
//!
//! RFC 6749 Section 4.3. The client exchanges the resource owner's
//! credentials for a token directly. The token endpoint answers with
//! `crate::token::RefreshAccessTokenResponse` or
//! `crate::token::AccessTokenErrorResponse`.

use std::fmt;

use tracing::trace;
use url::Url;

use crate::ext::AccessTokenRequestExtension;
use crate::http::HttpRequest;
use crate::optional::Optional;
use crate::params::ParameterCollection;

/// The fixed grant type.
pub const GRANT_TYPE: &str = "password";

/// An access token request, encoded as a form POST to the token endpoint.
#[derive(Default)]
pub struct AccessTokenRequest {
    /// The username of the resource owner.
    pub username: String,
    /// The password of the resource owner.
    pub password: String,
    /// The requested scope of the access token.
    pub scope: Optional<Vec<String>>,
    /// Extensions contributing additional parameters, applied in order.
    pub extensions: Vec<Box<dyn AccessTokenRequestExtension>>,
}

impl AccessTokenRequest {
    /// Create a request for the given resource owner credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Build the HTTP request for the given token endpoint.
    pub fn to_request(&self, token_endpoint: &Url) -> HttpRequest {
        let mut params = ParameterCollection::new();
        params.push("grant_type", GRANT_TYPE);
        params.push("username", self.username.as_str());
        params.push("password", self.password.as_str());
        params.push_optional_list("scope", &self.scope);

        for extension in &self.extensions {
            extension.add_parameters(&mut params);
        }

        trace!(endpoint = %token_endpoint, "built access token request");
        HttpRequest::post_form(token_endpoint.clone(), params.to_form_body())
    }
}

impl fmt::Debug for AccessTokenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessTokenRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("scope", &self.scope)
            .field("extensions", &self.extensions)
            .finish()
    }
}
