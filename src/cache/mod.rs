// Cache module for process-local profile caching.
// Keeps the last good profile per username to serve when GitHub is failing.

pub mod store;

pub use store::ProfileCache;
