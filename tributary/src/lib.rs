//! `tributary` aggregates configuration from named, prioritized streams.
//!
//! A bootstrap document declares the available streams; each enabled stream
//! is resolved to an implementation, queried for a flat key/value
//! contribution, and folded into the result under an earlier-wins merge.
//! The bootstrap document seeds the fold, so its values always win, and a
//! lower-priority stream beats a higher-priority one on overlapping keys.
//!
//! The pass is synchronous and all-or-nothing: construction either returns
//! a fully assembled [`ConfigSnapshot`] or fails with a [`TributaryError`]
//! naming the offending file, stream, or module identifier.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tributary::LoadOptions;
//!
//! # fn main() -> tributary::TributaryResult<()> {
//! let snapshot = tributary::load(LoadOptions::new("app.toml").debug(true))?;
//! if let Some(host) = snapshot.get("host") {
//!     println!("host = {host}");
//! }
//! # Ok(())
//! # }
//! ```

mod aggregate;
pub mod document;
mod error;
mod merge;
mod plan;
mod resolver;
mod snapshot;
mod stream;
pub mod streams;

pub use aggregate::{Aggregator, LoadOptions, load};
pub use error::{TributaryError, TributaryResult};
pub use merge::merge_keep_first;
pub use plan::{ExecutionPlan, StreamDeclaration};
pub use resolver::{STREAM_NAMESPACE, StreamFactory, StreamResolver, factory};
pub use snapshot::ConfigSnapshot;
pub use stream::{Contribution, Stream};
