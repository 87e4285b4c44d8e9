//! The assembled configuration snapshot.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value};

use crate::plan::ExecutionPlan;

/// The result of one aggregation pass: the merged key/value data plus the
/// bookkeeping retained for introspection.
///
/// A snapshot is assembled once, after every stream has contributed, and is
/// owned exclusively by the caller. Cloning produces a fully independent
/// deep copy.
#[derive(Debug)]
pub struct ConfigSnapshot {
    data: Map<String, Value>,
    file: Utf8PathBuf,
    debug_enabled: bool,
    plan: ExecutionPlan,
    is_clone: bool,
}

impl ConfigSnapshot {
    pub(crate) fn assemble(
        data: Map<String, Value>,
        file: Utf8PathBuf,
        debug_enabled: bool,
        plan: ExecutionPlan,
    ) -> Self {
        Self {
            data,
            file,
            debug_enabled,
            plan,
            is_clone: false,
        }
    }

    /// Top-level value for `key`. No dotted-path traversal; one lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Mutable access to the top-level value for `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.data.get_mut(key)
    }

    /// The full merged mapping.
    #[must_use]
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Path of the bootstrap document this snapshot was built from.
    #[must_use]
    pub fn file(&self) -> &Utf8Path {
        &self.file
    }

    /// The execution plan that produced this snapshot, in application order.
    #[must_use]
    pub fn plan(&self) -> &ExecutionPlan {
        &self.plan
    }

    /// Whether this snapshot was produced by cloning another.
    #[must_use]
    pub fn is_clone(&self) -> bool {
        self.is_clone
    }

    /// Whether the diagnostic sink is active.
    #[must_use]
    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    /// Emit a diagnostic line when the debug flag was set at construction.
    ///
    /// Best-effort and infallible: with the flag unset (or no subscriber
    /// installed) the call is a no-op.
    pub fn debug(&self, message: &str) {
        if self.debug_enabled {
            tracing::debug!(file = %self.file, "{message}");
        }
    }
}

impl Clone for ConfigSnapshot {
    /// Structural deep copy sharing no mutable state with the original.
    ///
    /// The copy carries `is_clone() == true`; every other field is deeply
    /// equal to the original's.
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            file: self.file.clone(),
            debug_enabled: self.debug_enabled,
            plan: self.plan.clone(),
            is_clone: true,
        }
    }
}
