//! Mapping module identifiers to stream implementations.
//!
//! A [`StreamResolver`] is an explicit, injectable registry rather than
//! process-global load state, so tests can build and discard resolvers
//! freely. Resolution is a pure lookup: it never invokes a stream's `get`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use camino::Utf8PathBuf;

use crate::error::{TributaryError, TributaryResult};
use crate::plan::StreamDeclaration;
use crate::stream::Stream;
use crate::streams::{EnvStream, FileStream, FixtureStream};

/// Namespace prefix under which built-in streams are registered.
///
/// Short module identifiers such as `"Env"` resolve by convention to
/// `"tributary::Env"` before the bare identifier is tried, so declared names
/// stay short while fully-qualified external implementations remain
/// addressable directly.
pub const STREAM_NAMESPACE: &str = "tributary";

/// Factory producing a stream instance for a declaration.
///
/// The declaration is the only input: a factory derives whatever
/// stream-specific configuration it needs from the declared name.
pub type StreamFactory = Arc<dyn Fn(&StreamDeclaration) -> Box<dyn Stream> + Send + Sync>;

/// Registry mapping module identifiers to stream factories.
pub struct StreamResolver {
    factories: HashMap<String, StreamFactory>,
    // Append-only memo of identifier -> registered key; resolving an
    // identifier a second time skips the candidate search.
    memo: Mutex<HashMap<String, String>>,
}

impl StreamResolver {
    /// A resolver with no registrations at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
            memo: Mutex::new(HashMap::new()),
        }
    }

    /// A resolver pre-populated with the built-in stream types, each under
    /// its namespaced key.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut resolver = Self::empty();
        resolver.register(
            format!("{STREAM_NAMESPACE}::Fixture"),
            factory(|decl| Box::new(FixtureStream::empty(&decl.name))),
        );
        resolver.register(
            format!("{STREAM_NAMESPACE}::File"),
            factory(|decl| Box::new(FileStream::new(Utf8PathBuf::from("."), &decl.name))),
        );
        resolver.register(
            format!("{STREAM_NAMESPACE}::Env"),
            factory(|decl| {
                let prefix = format!("{}_", decl.name.to_uppercase());
                Box::new(EnvStream::prefixed(&decl.name, prefix))
            }),
        );
        resolver
    }

    /// Register a factory under `key`, replacing any previous registration.
    pub fn register(&mut self, key: impl Into<String>, factory: StreamFactory) {
        self.factories.insert(key.into(), factory);
    }

    /// Resolve a declared module identifier to a factory.
    ///
    /// Tries the namespaced form first, then the bare identifier, and
    /// memoizes the winning key for the lifetime of this resolver.
    ///
    /// # Errors
    ///
    /// Returns [`TributaryError::StreamNotFound`] naming both candidate
    /// forms when neither is registered.
    pub fn resolve(&self, module: &str) -> TributaryResult<StreamFactory> {
        let mut memo = self.memo.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(key) = memo.get(module) {
            if let Some(found) = self.factories.get(key) {
                return Ok(Arc::clone(found));
            }
        }
        let namespaced = format!("{STREAM_NAMESPACE}::{module}");
        for candidate in [namespaced.as_str(), module] {
            if let Some(found) = self.factories.get(candidate) {
                memo.insert(module.to_owned(), candidate.to_owned());
                return Ok(Arc::clone(found));
            }
        }
        Err(TributaryError::StreamNotFound {
            module: module.to_owned(),
            namespaced,
        })
    }
}

impl Default for StreamResolver {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl std::fmt::Debug for StreamResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<_> = self.factories.keys().collect();
        keys.sort();
        f.debug_struct("StreamResolver").field("keys", &keys).finish()
    }
}

/// Wrap a closure as a [`StreamFactory`].
pub fn factory<F>(f: F) -> StreamFactory
where
    F: Fn(&StreamDeclaration) -> Box<dyn Stream> + Send + Sync + 'static,
{
    Arc::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaration(name: &str, module: &str) -> StreamDeclaration {
        StreamDeclaration {
            name: name.to_owned(),
            module: module.to_owned(),
            enabled: true,
            priority: 0,
            tag: None,
        }
    }

    #[test]
    fn namespaced_builtins_win_over_nothing_registered_bare() {
        let resolver = StreamResolver::with_builtins();
        let found = resolver.resolve("Fixture").expect("resolve builtin");
        let stream = found(&declaration("empty", "Fixture"));
        assert_eq!(stream.name(), "empty");
    }

    #[test]
    fn memoized_identifiers_resolve_again() {
        let resolver = StreamResolver::with_builtins();
        resolver.resolve("Fixture").expect("first resolve");
        resolver.resolve("Fixture").expect("memoized resolve");
    }
}
