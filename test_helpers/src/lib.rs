//! Test helpers shared across crates in the tributary workspace.
//!
//! Provides environment variable guards and `figment::Jail` wrappers so
//! tests can mutate process state without leaking it into other tests.

pub mod env;
pub mod jail;
