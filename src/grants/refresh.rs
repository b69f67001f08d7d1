//! Token Refresh
//!
//! RFC 6749 Section 6. A previously issued refresh token is exchanged for a
//! fresh access token, optionally narrowing the scope. The token endpoint
//! answers with `crate::token::RefreshAccessTokenResponse` or
//! `crate::token::AccessTokenErrorResponse`.

use tracing::trace;
use url::Url;

use crate::ext::AccessTokenRequestExtension;
use crate::http::HttpRequest;
use crate::optional::Optional;
use crate::params::ParameterCollection;

/// The fixed grant type.
pub const GRANT_TYPE: &str = "refresh_token";

/// An access token request, encoded as a form POST to the token endpoint.
#[derive(Debug, Default)]
pub struct AccessTokenRequest {
    /// The refresh token issued alongside the original access token.
    pub refresh_token: String,
    /// The requested scope; must not exceed the originally granted scope.
    pub scope: Optional<Vec<String>>,
    /// Extensions contributing additional parameters, applied in order.
    pub extensions: Vec<Box<dyn AccessTokenRequestExtension>>,
}

impl AccessTokenRequest {
    /// Create a request for the given refresh token.
    pub fn new(refresh_token: impl Into<String>) -> Self {
        Self {
            refresh_token: refresh_token.into(),
            ..Self::default()
        }
    }

    /// Build the HTTP request for the given token endpoint.
    pub fn to_request(&self, token_endpoint: &Url) -> HttpRequest {
        let mut params = ParameterCollection::new();
        params.push("grant_type", GRANT_TYPE);
        params.push("refresh_token", self.refresh_token.as_str());
        params.push_optional_list("scope", &self.scope);

        for extension in &self.extensions {
            extension.add_parameters(&mut params);
        }

        trace!(endpoint = %token_endpoint, "built refresh request");
        HttpRequest::post_form(token_endpoint.clone(), params.to_form_body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Url {
        Url::parse("https://unit-test.net/token").unwrap()
    }

    #[test]
    fn test_request_has_fixed_grant_type() {
        let request = AccessTokenRequest::new("some token").to_request(&endpoint());

        assert_eq!(
            request.form_pairs(),
            vec![
                ("grant_type".to_string(), "refresh_token".to_string()),
                ("refresh_token".to_string(), "some token".to_string()),
            ]
        );
    }

    #[test]
    fn test_request_omits_absent_scope() {
        let request = AccessTokenRequest::new("t").to_request(&endpoint());
        assert!(!request.form_pairs().iter().any(|(name, _)| name == "scope"));
    }

    #[test]
    fn test_request_encodes_scope_when_present() {
        let mut request = AccessTokenRequest::new("t");
        request.scope = Optional::Present(vec!["read".into()]);
        let request = request.to_request(&endpoint());

        assert_eq!(
            request.form_pairs().last(),
            Some(&("scope".to_string(), "read".to_string()))
        );
    }
}
