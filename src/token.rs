//! Token Endpoint Responses
//!
//! JSON bodies returned by the token endpoint for the POST-based grants
//! (code exchange, client credentials, password, refresh, device polling).
//! These are distinct from the fragment-encoded response of the implicit
//! grant, which never touches JSON (see `grants::implicit`).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::json;
use crate::optional::Optional;

/// A successful access token response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    /// The access token issued by the authorization server.
    pub access_token: String,
    /// The type of the token issued.
    pub token_type: String,
    /// The lifetime of the access token from the point of generation.
    #[serde(
        with = "json::optional_duration_secs",
        default,
        skip_serializing_if = "Optional::is_absent"
    )]
    pub expires_in: Optional<Duration>,
    /// The scope the token encompasses. May be omitted when identical to the
    /// client's original request.
    #[serde(
        with = "json::scope_list",
        default,
        skip_serializing_if = "Optional::is_absent"
    )]
    pub scope: Optional<Vec<String>>,
}

/// A successful access token response from a refresh-capable grant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RefreshAccessTokenResponse {
    /// The access token issued by the authorization server.
    pub access_token: String,
    /// The type of the token issued.
    pub token_type: String,
    /// The lifetime of the access token from the point of generation.
    #[serde(
        with = "json::optional_duration_secs",
        default,
        skip_serializing_if = "Optional::is_absent"
    )]
    pub expires_in: Optional<Duration>,
    /// The refresh token, usable for obtaining new access tokens under the
    /// same authorization grant.
    #[serde(default, skip_serializing_if = "Optional::is_absent")]
    pub refresh_token: Optional<String>,
    /// The scope the token encompasses.
    #[serde(
        with = "json::scope_list",
        default,
        skip_serializing_if = "Optional::is_absent"
    )]
    pub scope: Optional<Vec<String>>,
}

/// A protocol-level error response from the token endpoint.
///
/// A well-formed error body is a successful decode of this type; callers
/// check which of the two shapes they received rather than treating errors
/// as malformed input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessTokenErrorResponse {
    /// The error code.
    pub error: String,
    /// The human-readable error description.
    #[serde(default, skip_serializing_if = "Optional::is_absent")]
    pub error_description: Optional<String>,
    /// The URI at which more detailed error information is available.
    #[serde(default, skip_serializing_if = "Optional::is_absent")]
    pub error_uri: Optional<String>,
}
