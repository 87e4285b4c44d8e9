//! In-memory fixture stream.

use crate::error::TributaryResult;
use crate::stream::{Contribution, Stream};

/// A stream backed by a fixed in-memory contribution.
///
/// Primarily useful in tests and examples, where deterministic inputs matter
/// more than provenance.
#[derive(Clone, Debug, Default)]
pub struct FixtureStream {
    name: String,
    values: Contribution,
}

impl FixtureStream {
    /// A fixture returning `values` on every query.
    #[must_use]
    pub fn new(name: impl Into<String>, values: Contribution) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// A fixture contributing nothing.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Contribution::new())
    }
}

impl Stream for FixtureStream {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self) -> TributaryResult<Contribution> {
        Ok(self.values.clone())
    }
}
