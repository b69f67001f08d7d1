//! Authorization Code Grant
//!
//! RFC 6749 Section 4.1. The client redirects the user agent to the
//! authorization endpoint, receives a code back in the redirect URI's query
//! string, and exchanges the code for tokens at the token endpoint. The
//! token endpoint answers with `crate::token::RefreshAccessTokenResponse`
//! or `crate::token::AccessTokenErrorResponse`.

use tracing::trace;
use url::Url;

use crate::error::ParseResult;
use crate::ext::{AccessTokenRequestExtension, AuthorizationRequestExtension};
use crate::fields::{parse_uri_reference, query_parameters, require};
use crate::http::HttpRequest;
use crate::optional::Optional;
use crate::params::ParameterCollection;

/// The fixed response type for this grant.
pub const RESPONSE_TYPE: &str = "code";

/// The fixed grant type for the code exchange.
pub const GRANT_TYPE: &str = "authorization_code";

/// An authorization request, encoded onto the authorization endpoint as a
/// GET with query parameters.
#[derive(Debug, Default)]
pub struct AuthorizationRequest {
    /// The identifier of the client.
    pub client_id: String,
    /// The URI the user agent should be redirected back to.
    pub redirect_uri: Optional<Url>,
    /// The requested scope of the access token.
    pub scope: Optional<Vec<String>>,
    /// An opaque value echoed back in the response.
    pub state: Optional<String>,
    /// Extensions contributing additional parameters, applied in order.
    pub extensions: Vec<Box<dyn AuthorizationRequestExtension>>,
}

impl AuthorizationRequest {
    /// Create a request with only the required client identifier set.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            ..Self::default()
        }
    }

    /// Build the HTTP request for the given authorization endpoint. Query
    /// parameters already present on the endpoint are retained.
    pub fn to_request(&self, authorization_endpoint: &Url) -> HttpRequest {
        let mut params = ParameterCollection::from_url_query(authorization_endpoint);
        params.push("response_type", RESPONSE_TYPE);
        params.push("client_id", self.client_id.as_str());
        params.push_optional("redirect_uri", &self.redirect_uri);
        params.push_optional_list("scope", &self.scope);
        params.push_optional("state", &self.state);

        for extension in &self.extensions {
            extension.add_parameters(&mut params);
        }

        let mut url = authorization_endpoint.clone();
        url.set_query(Some(&params.to_query_string()));

        trace!(endpoint = %authorization_endpoint, "built authorization request");
        HttpRequest::get(url)
    }
}

/// A successful authorization response, decoded from the redirect URI's
/// query string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationResponse {
    /// The authorization code issued by the authorization server.
    pub code: String,
    /// The opaque state echoed from the original request.
    pub state: Optional<String>,
}

impl AuthorizationResponse {
    /// Decode a response from the URI the user agent was redirected to.
    pub fn from_redirect_uri(location: &Url) -> ParseResult<Self> {
        let parameters = query_parameters(location);
        let code = require(&parameters, "code")?.to_string();
        let state = crate::fields::find(&parameters, "state")
            .map(String::from)
            .into();

        trace!("decoded authorization response");
        Ok(Self { code, state })
    }
}

/// A protocol-level authorization error, decoded from the redirect URI's
/// query string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationErrorResponse {
    /// The error code.
    pub error: String,
    /// The human-readable error description.
    pub error_description: Optional<String>,
    /// The URI at which more detailed error information is available.
    pub error_uri: Optional<Url>,
    /// The opaque state echoed from the original request.
    pub state: Optional<String>,
}

impl AuthorizationErrorResponse {
    /// Decode an error response from the URI the user agent was redirected
    /// to. A malformed `error_uri` fails the whole decode.
    pub fn from_redirect_uri(location: &Url) -> ParseResult<Self> {
        let parameters = query_parameters(location);
        let error = require(&parameters, "error")?.to_string();

        let error_description = crate::fields::find(&parameters, "error_description")
            .map(String::from)
            .into();

        let error_uri = match crate::fields::find(&parameters, "error_uri") {
            Some(raw) => Optional::Present(parse_uri_reference("error_uri", raw, location)?),
            None => Optional::Absent,
        };

        let state = crate::fields::find(&parameters, "state")
            .map(String::from)
            .into();

        Ok(Self {
            error,
            error_description,
            error_uri,
            state,
        })
    }
}

/// A code-for-token exchange request, encoded as a form POST to the token
/// endpoint.
#[derive(Debug, Default)]
pub struct AccessTokenRequest {
    /// The authorization code received from the authorization server.
    pub code: String,
    /// The redirect URI used in the original authorization request.
    pub redirect_uri: Optional<Url>,
    /// The identifier of the client making the request.
    pub client_id: Optional<String>,
    /// Extensions contributing additional parameters, applied in order.
    pub extensions: Vec<Box<dyn AccessTokenRequestExtension>>,
}

impl AccessTokenRequest {
    /// Create a request with only the required authorization code set.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    /// Build the HTTP request for the given token endpoint. The endpoint URL
    /// is used as-is; all parameters travel in the form body.
    pub fn to_request(&self, token_endpoint: &Url) -> HttpRequest {
        let mut params = ParameterCollection::new();
        params.push("grant_type", GRANT_TYPE);
        params.push("code", self.code.as_str());
        params.push_optional("redirect_uri", &self.redirect_uri);
        params.push_optional("client_id", &self.client_id);

        for extension in &self.extensions {
            extension.add_parameters(&mut params);
        }

        trace!(endpoint = %token_endpoint, "built access token request");
        HttpRequest::post_form(token_endpoint.clone(), params.to_form_body())
    }
}
