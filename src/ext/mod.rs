//! Protocol Extensions
//!
//! Optional OAuth2 add-ons that contribute extra parameters to a base
//! request without the base request knowing about them. A request owns its
//! extensions as an ordered list; encoders invoke them after all fixed
//! fields, in list order.
//!
//! Contribution is not transactional: an extension that panics mid-way
//! leaves the collection partially populated. Each encode call owns a fresh
//! collection, so a failed encode never contaminates another request.

use std::fmt;

use crate::params::ParameterCollection;

pub mod device;
pub mod pkce;
pub mod revocation;

/// An extension contributing parameters to an authorization request's query
/// string.
pub trait AuthorizationRequestExtension: fmt::Debug + Send + Sync {
    /// Add the extension's parameters to the given collection.
    fn add_parameters(&self, params: &mut ParameterCollection);
}

/// An extension contributing parameters to an access token request's form
/// body.
pub trait AccessTokenRequestExtension: fmt::Debug + Send + Sync {
    /// Add the extension's parameters to the given collection.
    fn add_parameters(&self, params: &mut ParameterCollection);
}

/// An extension contributing parameters to a device authorization
/// initiation request's form body.
pub trait DeviceAuthorizationRequestExtension: fmt::Debug + Send + Sync {
    /// Add the extension's parameters to the given collection.
    fn add_parameters(&self, params: &mut ParameterCollection);
}

/// An extension contributing parameters to a token revocation request's form
/// body.
pub trait TokenRevocationRequestExtension: fmt::Debug + Send + Sync {
    /// Add the extension's parameters to the given collection.
    fn add_parameters(&self, params: &mut ParameterCollection);
}
