//! Environment-variable stream.

use figment::{Figment, providers::Env};

use crate::error::{TributaryError, TributaryResult};
use crate::stream::{Contribution, Stream};

/// A stream that contributes prefix-filtered environment variables.
///
/// Variables are gathered through figment's [`Env`] provider, so keys are
/// lowercased with the prefix stripped and values are parsed leniently
/// (numbers and booleans are recognised, everything else stays a string).
#[derive(Clone, Debug)]
pub struct EnvStream {
    name: String,
    prefix: String,
}

impl EnvStream {
    /// An environment stream reading variables starting with `prefix`.
    #[must_use]
    pub fn prefixed(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
        }
    }
}

impl Stream for EnvStream {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self) -> TributaryResult<Contribution> {
        Figment::from(Env::prefixed(&self.prefix))
            .extract()
            .map_err(|e| TributaryError::stream(&self.name, e))
    }
}
