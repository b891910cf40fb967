//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `profiles.role`. Roles are
//! resolved by profile lookup on every privileged request, never read from
//! the session token, so a revocation takes effect on the next request.

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";
