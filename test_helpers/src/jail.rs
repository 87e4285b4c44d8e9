//! Wrappers around `figment::Jail` for filesystem-isolated tests.
//!
//! A jail gives a test a scratch working directory and scoped environment
//! variables. These helpers propagate the closure's return value as an
//! `anyhow::Result` instead of forcing callers to plumb an `Option` out of
//! the closure by hand.

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// The jail is torn down once the closure completes, even on error.
///
/// # Errors
///
/// Returns an error if jail initialisation fails or the closure returns a
/// [`figment::error::Error`].
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Converts any error implementing [`ToString`] into a [`figment::Error`].
///
/// Useful when a jail closure needs to surface a non-figment failure.
pub fn figment_error<E: ToString>(err: &E) -> figment::Error {
    figment::Error::from(err.to_string())
}
