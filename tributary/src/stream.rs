//! The stream capability: one polymorphic operation, `get`.

use serde_json::{Map, Value};

use crate::error::{TributaryError, TributaryResult};

/// The flat key/value data one stream returns from a single query.
///
/// "Flat" is a merge property, not a shape restriction: values may be
/// nested, but the aggregator only ever reconciles them at the top level.
pub type Contribution = Map<String, Value>;

/// A named, independently implemented source of configuration data.
///
/// The aggregator depends on nothing beyond this contract. The default
/// `get` body fails with [`TributaryError::NotImplemented`], so a stream
/// type that forgets the capability errors loudly by name instead of
/// contributing a silent empty map.
pub trait Stream {
    /// The stream's name, used in diagnostics and error messages.
    fn name(&self) -> &str;

    /// Produce this stream's contribution.
    ///
    /// # Errors
    ///
    /// Returns [`TributaryError::NotImplemented`] unless overridden.
    /// Implementations may fail with any [`TributaryError`], typically
    /// [`TributaryError::Stream`] wrapping an implementation-defined cause;
    /// such failures abort the whole aggregation pass.
    fn get(&self) -> TributaryResult<Contribution> {
        Err(TributaryError::NotImplemented {
            stream: self.name().to_owned(),
        })
    }
}
