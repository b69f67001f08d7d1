//! Proof Key for Code Exchange
//!
//! RFC 7636. Two extension values carry the challenge and verifier into the
//! authorization-code grant's requests, plus helpers for generating a
//! verifier and computing its challenge.

use std::fmt;

use base64::Engine;
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::ext::{AccessTokenRequestExtension, AuthorizationRequestExtension};
use crate::optional::Optional;
use crate::params::ParameterCollection;

/// PKCE challenge method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PkceMethod {
    /// SHA-256 hash (recommended).
    #[default]
    S256,
    /// Plain text (not recommended).
    Plain,
}

impl PkceMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S256 => "S256",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for PkceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authorization-request half of the exchange: contributes the code
/// challenge. Servers default the method to "plain" when it is absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PkceAuthorizationRequest {
    /// The code challenge derived from the verifier.
    pub code_challenge: String,
    /// The method used to derive the challenge.
    pub code_challenge_method: Optional<PkceMethod>,
}

impl PkceAuthorizationRequest {
    /// Create an extension for the given challenge and method.
    pub fn new(code_challenge: impl Into<String>, method: PkceMethod) -> Self {
        Self {
            code_challenge: code_challenge.into(),
            code_challenge_method: Optional::Present(method),
        }
    }

    /// Generate a fresh verifier and build the matching extension. Returns
    /// the extension and the verifier, which the caller must retain for the
    /// token exchange.
    pub fn generate(method: PkceMethod) -> (Self, String) {
        let verifier = generate_verifier(DEFAULT_VERIFIER_LENGTH);
        let challenge = compute_challenge(&verifier, method);
        (Self::new(challenge, method), verifier)
    }
}

impl AuthorizationRequestExtension for PkceAuthorizationRequest {
    fn add_parameters(&self, params: &mut ParameterCollection) {
        params.push("code_challenge", self.code_challenge.as_str());
        params.push_optional("code_challenge_method", &self.code_challenge_method);
    }
}

/// The token-request half of the exchange: contributes the code verifier.
#[derive(Clone, PartialEq, Eq)]
pub struct PkceAccessTokenRequest {
    /// The code verifier matching the challenge sent earlier.
    pub code_verifier: String,
}

impl PkceAccessTokenRequest {
    /// Create an extension for the given verifier.
    pub fn new(code_verifier: impl Into<String>) -> Self {
        Self {
            code_verifier: code_verifier.into(),
        }
    }
}

impl AccessTokenRequestExtension for PkceAccessTokenRequest {
    fn add_parameters(&self, params: &mut ParameterCollection) {
        params.push("code_verifier", self.code_verifier.as_str());
    }
}

impl fmt::Debug for PkceAccessTokenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PkceAccessTokenRequest")
            .field("code_verifier", &"[REDACTED]")
            .finish()
    }
}

/// Default verifier length in characters.
pub const DEFAULT_VERIFIER_LENGTH: usize = 64;

/// Generate a random code verifier of the given length.
///
/// # Panics
/// Panics if the length is not between 43 and 128 (RFC 7636 requirement).
pub fn generate_verifier(length: usize) -> String {
    assert!(
        (43..=128).contains(&length),
        "PKCE verifier length must be between 43 and 128"
    );

    let mut rng = rand::thread_rng();
    let bytes_needed = (length * 3 + 3) / 4;
    let random_bytes: Vec<u8> = (0..bytes_needed).map(|_| rng.gen()).collect();

    let encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&random_bytes);
    encoded[..length].to_string()
}

/// Compute the challenge for a verifier.
pub fn compute_challenge(verifier: &str, method: PkceMethod) -> String {
    match method {
        PkceMethod::Plain => verifier.to_string(),
        PkceMethod::S256 => {
            // S256: BASE64URL(SHA256(code_verifier))
            let hash = Sha256::digest(verifier.as_bytes());
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(hash)
        }
    }
}

/// Validate a verifier's format: 43-128 characters from the unreserved set
/// `[A-Za-z0-9-._~]`.
pub fn is_valid_verifier(verifier: &str) -> bool {
    if !(43..=128).contains(&verifier.len()) {
        return false;
    }

    verifier
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_' || c == '~')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_extension_adds_challenge_parameters() {
        let extension = PkceAuthorizationRequest::new("some challenge", PkceMethod::S256);

        let mut params = ParameterCollection::new();
        extension.add_parameters(&mut params);

        assert_eq!(params.get("code_challenge"), Some("some challenge"));
        assert_eq!(params.get("code_challenge_method"), Some("S256"));
    }

    #[test]
    fn test_authorization_extension_omits_absent_method() {
        let extension = PkceAuthorizationRequest {
            code_challenge: "some challenge".to_string(),
            code_challenge_method: Optional::Absent,
        };

        let mut params = ParameterCollection::new();
        extension.add_parameters(&mut params);

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("code_challenge_method"), None);
    }

    #[test]
    fn test_token_extension_adds_verifier() {
        let extension = PkceAccessTokenRequest::new("some verifier");

        let mut params = ParameterCollection::new();
        extension.add_parameters(&mut params);

        assert_eq!(params.get("code_verifier"), Some("some verifier"));
    }

    #[test]
    fn test_s256_challenge_matches_rfc_test_vector() {
        let challenge = compute_challenge(
            "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk",
            PkceMethod::S256,
        );
        assert_eq!(challenge, "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
    }

    #[test]
    fn test_plain_challenge_is_the_verifier() {
        assert_eq!(compute_challenge("v", PkceMethod::Plain), "v");
    }

    #[test]
    fn test_generated_verifier_is_valid() {
        let verifier = generate_verifier(DEFAULT_VERIFIER_LENGTH);
        assert_eq!(verifier.len(), DEFAULT_VERIFIER_LENGTH);
        assert!(is_valid_verifier(&verifier));
    }

    #[test]
    fn test_generate_pairs_challenge_with_verifier() {
        let (extension, verifier) = PkceAuthorizationRequest::generate(PkceMethod::S256);
        assert_eq!(
            extension.code_challenge,
            compute_challenge(&verifier, PkceMethod::S256)
        );
        assert_eq!(
            extension.code_challenge_method,
            Optional::Present(PkceMethod::S256)
        );
    }

    #[test]
    fn test_verifier_validation() {
        assert!(is_valid_verifier("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk"));
        assert!(!is_valid_verifier("short"));
        assert!(!is_valid_verifier("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOE!@#"));
    }

    #[test]
    #[should_panic(expected = "PKCE verifier length must be between 43 and 128")]
    fn test_invalid_verifier_length_panics() {
        generate_verifier(42);
    }

    #[test]
    fn test_debug_redacts_verifier() {
        let extension = PkceAccessTokenRequest::new("secret-verifier");
        let rendered = format!("{extension:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("secret-verifier"));
    }
}
