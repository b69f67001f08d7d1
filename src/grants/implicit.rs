//! Implicit Grant
//!
//! RFC 6749 Section 4.2. The access token is issued directly from the
//! authorization endpoint and arrives encoded in the redirect URI's
//! fragment; no token endpoint is involved and no JSON is exchanged.

use std::time::Duration;

use tracing::trace;
use url::Url;

use crate::error::ParseResult;
use crate::ext::AuthorizationRequestExtension;
use crate::fields::{
    find, fragment_parameters, parse_lifetime, parse_uri_reference, require, split_scope,
};
use crate::http::HttpRequest;
use crate::optional::Optional;
use crate::params::ParameterCollection;

/// The fixed response type for this grant.
pub const RESPONSE_TYPE: &str = "token";

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
    /// An opaque value echoed back in the response fragment.
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

/// A successful access token response, decoded from the redirect URI's
/// fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessTokenResponse {
    /// The access token issued by the authorization server.
    pub access_token: String,
    /// The type of the token issued.
    pub token_type: String,
    /// The lifetime of the access token from the point of generation.
    pub expires_in: Optional<Duration>,
    /// The scope the token encompasses.
    pub scope: Optional<Vec<String>>,
    /// The opaque state echoed from the original request.
    pub state: Optional<String>,
}

impl AccessTokenResponse {
    /// Decode a response from the URI the user agent was redirected to. A
    /// URI without a fragment never decodes, regardless of its query.
    pub fn from_redirect_uri(location: &Url) -> ParseResult<Self> {
        let parameters = fragment_parameters(location)?;

        let access_token = require(&parameters, "access_token")?.to_string();
        let token_type = require(&parameters, "token_type")?.to_string();

        let expires_in = match find(&parameters, "expires_in") {
            Some(raw) => Optional::Present(parse_lifetime("expires_in", raw)?),
            None => Optional::Absent,
        };

        let scope = find(&parameters, "scope").map(split_scope).into();
        let state = find(&parameters, "state").map(String::from).into();

        trace!("decoded implicit access token response");
        Ok(Self {
            access_token,
            token_type,
            expires_in,
            scope,
            state,
        })
    }
}

/// A protocol-level error response, decoded from the redirect URI's
/// fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessTokenErrorResponse {
    /// The error code.
    pub error: String,
    /// The human-readable error description.
    pub error_description: Optional<String>,
    /// The URI at which more detailed error information is available.
    pub error_uri: Optional<Url>,
    /// The opaque state echoed from the original request.
    pub state: Optional<String>,
}

impl AccessTokenErrorResponse {
    /// Decode an error response from the URI the user agent was redirected
    /// to. A malformed `error_uri` fails the whole decode.
    pub fn from_redirect_uri(location: &Url) -> ParseResult<Self> {
        let parameters = fragment_parameters(location)?;
        let error = require(&parameters, "error")?.to_string();

        let error_description = find(&parameters, "error_description").map(String::from).into();

        let error_uri = match find(&parameters, "error_uri") {
            Some(raw) => Optional::Present(parse_uri_reference("error_uri", raw, location)?),
            None => Optional::Absent,
        };

        let state = find(&parameters, "state").map(String::from).into();

        Ok(Self {
            error,
            error_description,
            error_uri,
            state,
        })
    }
}
