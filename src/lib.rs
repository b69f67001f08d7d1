//! OAuth2 Wire Formats
//!
//! Typed encoders and decoders for the OAuth2 request/response shapes that
//! cross the wire. The crate builds HTTP requests and parses redirect URIs
//! and JSON bodies; it never performs I/O, so any HTTP client can carry the
//! [`HttpRequest`] values it produces.
//!
//! # Features
//!
//! - Authorization Code Grant (RFC 6749 Section 4.1)
//! - Implicit Grant (RFC 6749 Section 4.2)
//! - Resource Owner Password Credentials Grant (RFC 6749 Section 4.3)
//! - Client Credentials Grant (RFC 6749 Section 4.4)
//! - Token Refresh (RFC 6749 Section 6)
//! - Device Authorization Grant (RFC 8628)
//! - Proof Key for Code Exchange (RFC 7636)
//! - Token Revocation (RFC 7009)
//!
//! # Example
//!
//! ```rust
//! use oauth2_wire::grants::authorization_code::AuthorizationRequest;
//! use oauth2_wire::Optional;
//! use url::Url;
//!
//! let endpoint = Url::parse("https://provider.example/authorize").unwrap();
//!
//! let mut request = AuthorizationRequest::new("my-client-id");
//! request.scope = Optional::Present(vec!["openid".to_string(), "profile".to_string()]);
//! request.state = Optional::Present("opaque-state".to_string());
//!
//! let http = request.to_request(&endpoint);
//! assert!(http.url.as_str().starts_with("https://provider.example/authorize?response_type=code"));
//! ```
//!
//! # Architecture
//!
//! - [`optional`]: tri-state [`Optional`] distinguishing absent from present
//! - [`params`]: ordered, duplicate-permitting wire parameter collection
//! - [`grants`]: the four RFC 6749 grants plus token refresh
//! - [`ext`]: protocol extensions (PKCE, device flow, revocation)
//! - [`token`]: JSON token and error response bodies
//! - [`json`]: serde converters for scope lists and second-granular durations
//! - [`fields`]: shared field-level parsing (scope, lifetimes, URI references)
//! - [`error`]: parse failures
//! - [`http`]: the I/O-free HTTP request description encoders emit

pub mod error;
pub mod ext;
pub mod fields;
pub mod grants;
pub mod http;
pub mod json;
pub mod optional;
pub mod params;
pub mod token;

pub use error::{ParseError, ParseResult};
pub use ext::{
    AccessTokenRequestExtension, AuthorizationRequestExtension,
    DeviceAuthorizationRequestExtension, TokenRevocationRequestExtension,
};
pub use http::{HttpMethod, HttpRequest};
pub use optional::Optional;
pub use params::ParameterCollection;
pub use token::{AccessTokenErrorResponse, AccessTokenResponse, RefreshAccessTokenResponse};
