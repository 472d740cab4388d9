// Gateway module.
// Request-level logic: username validation and cache-backed profile lookup.

pub mod lookup;
pub mod username;

pub use lookup::{Lookup, ProfileGateway};
