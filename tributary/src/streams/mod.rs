//! Built-in stream implementations.
//!
//! Each type here is one convention-based variant of the [`crate::Stream`]
//! capability; the aggregator treats them no differently from streams
//! registered by callers.

mod env;
mod file;
mod fixture;

pub use env::EnvStream;
pub use file::FileStream;
pub use fixture::FixtureStream;
