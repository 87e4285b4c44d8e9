//! The staged aggregation pass: load, normalize, resolve, query, fold.

use camino::{Utf8Path, Utf8PathBuf};

use crate::document;
use crate::error::{TributaryError, TributaryResult};
use crate::merge::merge_keep_first;
use crate::plan::ExecutionPlan;
use crate::resolver::StreamResolver;
use crate::snapshot::ConfigSnapshot;

/// Options accepted by the construction entry point.
///
/// Converts from a bare path for the common case; `debug` opts the
/// snapshot's diagnostic sink in.
#[derive(Clone, Debug)]
pub struct LoadOptions {
    file: Utf8PathBuf,
    debug: bool,
}

impl LoadOptions {
    /// Options pointing at a bootstrap document, debug off.
    #[must_use]
    pub fn new(file: impl Into<Utf8PathBuf>) -> Self {
        Self {
            file: file.into(),
            debug: false,
        }
    }

    /// Set the debug flag.
    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl From<&str> for LoadOptions {
    fn from(file: &str) -> Self {
        Self::new(file)
    }
}

impl From<String> for LoadOptions {
    fn from(file: String) -> Self {
        Self::new(file)
    }
}

impl From<&Utf8Path> for LoadOptions {
    fn from(file: &Utf8Path) -> Self {
        Self::new(file)
    }
}

impl From<Utf8PathBuf> for LoadOptions {
    fn from(file: Utf8PathBuf) -> Self {
        Self::new(file)
    }
}

/// Staged builder for one aggregation pass.
///
/// The pass is synchronous and all-or-nothing: the bootstrap document is
/// loaded, the declared streams are normalized into an [`ExecutionPlan`],
/// and each stream is resolved, queried, and folded into the accumulating
/// result in plan order. Any failure at any stage surfaces immediately; no
/// partial snapshot is ever produced.
#[derive(Debug)]
pub struct Aggregator {
    options: LoadOptions,
    resolver: StreamResolver,
}

impl Aggregator {
    /// An aggregator over the built-in stream registry.
    #[must_use]
    pub fn new(options: impl Into<LoadOptions>) -> Self {
        Self {
            options: options.into(),
            resolver: StreamResolver::with_builtins(),
        }
    }

    /// Replace the stream registry, typically to register caller-supplied
    /// stream implementations.
    #[must_use]
    pub fn with_resolver(mut self, resolver: StreamResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Run the pass and assemble the snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`TributaryError`] identifying the failing stage: the
    /// bootstrap path, a malformed stream list, an unresolvable module
    /// identifier, or a stream's own retrieval failure, which propagates
    /// untranslated.
    pub fn load(self) -> TributaryResult<ConfigSnapshot> {
        let LoadOptions { file, debug } = self.options;
        // Fail fast, before any stream is touched.
        if !file.is_file() {
            return Err(TributaryError::file(
                &file,
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "bootstrap document is missing or not readable",
                ),
            ));
        }
        let mut accumulated = document::load_document(&file)?;
        let plan = ExecutionPlan::normalize(accumulated.remove("streams"))?;
        tracing::debug!(file = %file, streams = plan.len(), "bootstrap document loaded");
        for declaration in &plan {
            let construct = self.resolver.resolve(&declaration.module)?;
            let stream = construct(declaration);
            let contribution = stream.get()?;
            tracing::debug!(
                stream = %declaration.name,
                keys = contribution.len(),
                "folding contribution"
            );
            merge_keep_first(&mut accumulated, contribution);
        }
        Ok(ConfigSnapshot::assemble(accumulated, file, debug, plan))
    }
}

/// Run one aggregation pass over the built-in stream registry.
///
/// # Errors
///
/// See [`Aggregator::load`].
pub fn load(options: impl Into<LoadOptions>) -> TributaryResult<ConfigSnapshot> {
    Aggregator::new(options).load()
}
