//! Device Authorization Grant
//!
//! RFC 8628. The client asks the device authorization endpoint for a device
//! code and a user code, shows the user code out-of-band, and polls the
//! token endpoint with the device code. Only the request/response codec
//! lives here; the polling loop itself belongs to the caller.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;
use url::Url;

use crate::ext::{AccessTokenRequestExtension, DeviceAuthorizationRequestExtension};
use crate::http::HttpRequest;
use crate::json;
use crate::optional::Optional;
use crate::params::ParameterCollection;

/// The fixed grant type used when polling the token endpoint.
pub const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:device_code";

/// Token-endpoint error code: the user has not yet completed authorization.
pub const ERROR_AUTHORIZATION_PENDING: &str = "authorization_pending";

/// Token-endpoint error code: the client is polling too fast.
pub const ERROR_SLOW_DOWN: &str = "slow_down";

/// Token-endpoint error code: the user declined the request.
pub const ERROR_ACCESS_DENIED: &str = "access_denied";

/// Token-endpoint error code: the device code has expired.
pub const ERROR_EXPIRED_TOKEN: &str = "expired_token";

/// An initiation request for the device authorization endpoint, encoded as
/// a form POST.
#[derive(Debug, Default)]
pub struct DeviceAuthorizationRequest {
    /// The identifier of the client.
    pub client_id: Optional<String>,
    /// The requested scope of the access token.
    pub scope: Optional<Vec<String>>,
    /// Extensions contributing additional parameters, applied in order.
    pub extensions: Vec<Box<dyn DeviceAuthorizationRequestExtension>>,
}

impl DeviceAuthorizationRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the HTTP request for the given device authorization endpoint.
    pub fn to_request(&self, device_authorization_endpoint: &Url) -> HttpRequest {
        let mut params = ParameterCollection::new();
        params.push_optional("client_id", &self.client_id);
        params.push_optional_list("scope", &self.scope);

        for extension in &self.extensions {
            extension.add_parameters(&mut params);
        }

        trace!(endpoint = %device_authorization_endpoint, "built device authorization request");
        HttpRequest::post_form(
            device_authorization_endpoint.clone(),
            params.to_form_body(),
        )
    }
}

/// The JSON response from the device authorization endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceAuthorizationResponse {
    /// The device verification code.
    pub device_code: String,
    /// The end-user verification code.
    pub user_code: String,
    /// The end-user verification URI on the authorization server.
    pub verification_uri: Url,
    /// A verification URI that embeds the user code.
    #[serde(default, skip_serializing_if = "Optional::is_absent")]
    pub verification_uri_complete: Optional<Url>,
    /// The lifetime of the device and user codes.
    #[serde(with = "json::duration_secs")]
    pub expires_in: Duration,
    /// The minimum interval between polling requests. Genuinely optional on
    /// the wire; see [`Self::polling_interval`] for the client-side default.
    #[serde(
        with = "json::optional_duration_secs",
        default,
        skip_serializing_if = "Optional::is_absent"
    )]
    pub interval: Optional<Duration>,
}

impl DeviceAuthorizationResponse {
    /// The interval to poll at: the wire value when present, otherwise the
    /// 5-second default RFC 8628 instructs clients to assume.
    pub fn polling_interval(&self) -> Duration {
        self.interval.unwrap_or(Duration::from_secs(5))
    }
}

/// A polling request for the token endpoint, encoded as a form POST.
#[derive(Debug, Default)]
pub struct DeviceAccessTokenRequest {
    /// The device verification code.
    pub device_code: String,
    /// The identifier of the client.
    pub client_id: Optional<String>,
    /// Extensions contributing additional parameters, applied in order.
    pub extensions: Vec<Box<dyn AccessTokenRequestExtension>>,
}

impl DeviceAccessTokenRequest {
    /// Create a request with only the required device code set.
    pub fn new(device_code: impl Into<String>) -> Self {
        Self {
            device_code: device_code.into(),
            ..Self::default()
        }
    }

    /// Build the HTTP request for the given token endpoint.
    pub fn to_request(&self, token_endpoint: &Url) -> HttpRequest {
        let mut params = ParameterCollection::new();
        params.push("grant_type", GRANT_TYPE);
        params.push("device_code", self.device_code.as_str());
        params.push_optional("client_id", &self.client_id);

        for extension in &self.extensions {
            extension.add_parameters(&mut params);
        }

        trace!(endpoint = %token_endpoint, "built device access token request");
        HttpRequest::post_form(token_endpoint.clone(), params.to_form_body())
    }
}

/// The JSON error shape returned while the device flow is incomplete, with
/// the device-specific error codes layered on the standard error fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceAccessTokenErrorResponse {
    /// The error code.
    pub error: String,
    /// The human-readable error description.
    #[serde(default, skip_serializing_if = "Optional::is_absent")]
    pub error_description: Optional<String>,
    /// The URI at which more detailed error information is available.
    #[serde(default, skip_serializing_if = "Optional::is_absent")]
    pub error_uri: Optional<String>,
}

impl DeviceAccessTokenErrorResponse {
    /// Whether the client should keep polling (pending, or told to slow
    /// down).
    pub fn should_continue_polling(&self) -> bool {
        self.error == ERROR_AUTHORIZATION_PENDING || self.error == ERROR_SLOW_DOWN
    }

    /// Whether the server asked for a longer interval between polls.
    pub fn is_slow_down(&self) -> bool {
        self.error == ERROR_SLOW_DOWN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    fn endpoint() -> Url {
        Url::parse("https://unit-test.net/device").unwrap()
    }

    #[derive(Debug)]
    struct FakeExtension;

    impl DeviceAuthorizationRequestExtension for FakeExtension {
        fn add_parameters(&self, params: &mut ParameterCollection) {
            params.push("fake", "value");
        }
    }

    #[test]
    fn test_initiation_request_is_a_form_post() {
        let mut request = DeviceAuthorizationRequest::new();
        request.client_id = "some client id".into();
        let request = request.to_request(&endpoint());

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            request.form_pairs(),
            vec![("client_id".to_string(), "some client id".to_string())]
        );
    }

    #[test]
    fn test_initiation_request_encodes_scope_space_joined() {
        let mut request = DeviceAuthorizationRequest::new();
        request.scope = Optional::Present(vec!["some".into(), "scope".into(), "values".into()]);
        let request = request.to_request(&endpoint());

        assert_eq!(
            request.form_pairs(),
            vec![("scope".to_string(), "some scope values".to_string())]
        );
    }

    #[test]
    fn test_initiation_request_runs_extensions_last() {
        let mut request = DeviceAuthorizationRequest::new();
        request.client_id = "c".into();
        request.extensions = vec![Box::new(FakeExtension)];
        let request = request.to_request(&endpoint());

        assert_eq!(
            request.form_pairs(),
            vec![
                ("client_id".to_string(), "c".to_string()),
                ("fake".to_string(), "value".to_string()),
            ]
        );
    }

    #[test]
    fn test_token_request_has_device_grant_type() {
        let request = DeviceAccessTokenRequest::new("some code")
            .to_request(&Url::parse("https://unit-test.net/token").unwrap());

        assert_eq!(
            request.form_pairs(),
            vec![
                (
                    "grant_type".to_string(),
                    "urn:ietf:params:oauth:grant-type:device_code".to_string()
                ),
                ("device_code".to_string(), "some code".to_string()),
            ]
        );
    }

    #[test]
    fn test_token_request_retains_endpoint_query() {
        let endpoint = Url::parse("https://unit-test.net/token?parameter=value").unwrap();
        let request = DeviceAccessTokenRequest::new("c").to_request(&endpoint);

        assert_eq!(request.url, endpoint);
    }

    #[test]
    fn test_response_parses_sample_payload() {
        let json = r#"{
            "device_code": "GmRhmhcxhwAzkoEqiMEg_DnyEysNkuNhszIySk9eS",
            "user_code": "WDJB-MJHT",
            "verification_uri": "https://example.com/device",
            "verification_uri_complete": "https://example.com/device?user_code=WDJB-MJHT",
            "expires_in": 1800,
            "interval": 5
        }"#;

        let response: DeviceAuthorizationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.user_code, "WDJB-MJHT");
        assert_eq!(response.expires_in, Duration::from_secs(1800));
        assert_eq!(response.interval, Optional::Present(Duration::from_secs(5)));
        assert_eq!(
            response.verification_uri,
            Url::parse("https://example.com/device").unwrap()
        );
    }

    #[test]
    fn test_response_interval_stays_absent_and_default_is_client_side() {
        let json = r#"{
            "device_code": "d",
            "user_code": "u",
            "verification_uri": "https://example.com/device",
            "expires_in": 1800
        }"#;

        let response: DeviceAuthorizationResponse = serde_json::from_str(json).unwrap();
        assert!(response.interval.is_absent());
        assert_eq!(response.polling_interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_response_without_expiry_fails() {
        let json = r#"{
            "device_code": "d",
            "user_code": "u",
            "verification_uri": "https://example.com/device"
        }"#;

        assert!(serde_json::from_str::<DeviceAuthorizationResponse>(json).is_err());
    }

    #[test]
    fn test_response_survives_byte_level_round_trip() {
        let sample = r#"{"device_code":"d","user_code":"u","verification_uri":"https://example.com/device","expires_in":1800}"#;

        let response: DeviceAuthorizationResponse = serde_json::from_str(sample).unwrap();
        assert_eq!(serde_json::to_string(&response).unwrap(), sample);
    }

    #[test]
    fn test_error_response_polling_decisions() {
        let pending = DeviceAccessTokenErrorResponse {
            error: ERROR_AUTHORIZATION_PENDING.to_string(),
            error_description: Optional::Absent,
            error_uri: Optional::Absent,
        };
        assert!(pending.should_continue_polling());
        assert!(!pending.is_slow_down());

        let slow_down = DeviceAccessTokenErrorResponse {
            error: ERROR_SLOW_DOWN.to_string(),
            ..pending.clone()
        };
        assert!(slow_down.should_continue_polling());
        assert!(slow_down.is_slow_down());

        let denied = DeviceAccessTokenErrorResponse {
            error: ERROR_ACCESS_DENIED.to_string(),
            ..pending
        };
        assert!(!denied.should_continue_polling());
    }
}
