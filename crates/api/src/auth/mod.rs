//! Authentication primitives.
//!
//! - [`session`] -- cookie-backed sessions and the sign-in entry point used by
//!   the identity-provider callback.

pub mod session;
