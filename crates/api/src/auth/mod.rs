//! Validation of access tokens minted by the external identity provider.

pub mod jwt;
