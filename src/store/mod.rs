//! Data access over a single storage session.
//!
//! Every function takes the connection the caller acquired for the request and
//! runs exactly one statement on it. Nothing is cached between calls.

pub mod attendance;
pub mod employee;
