// Profile module.
// Combines the GitHub user and repository payloads into the served record.

#![allow(dead_code)]

pub mod assemble;
pub mod date;
pub mod model;

pub use assemble::assemble;
pub use model::Profile;
