//! Stream declarations and the execution plan built from them.
//!
//! The bootstrap document declares its streams as a sequence of records.
//! [`ExecutionPlan::normalize`] turns that raw sequence into the ordered,
//! filtered list of enabled streams the aggregator will query.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{TributaryError, TributaryResult};

/// One stream entry from the bootstrap document.
///
/// Declarations are immutable once parsed; only the filtered, sorted list
/// survives as an [`ExecutionPlan`].
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct StreamDeclaration {
    /// Stream name, unique within its declaring group by convention.
    pub name: String,
    /// Module identifier resolved to an implementation.
    pub module: String,
    /// Whether the stream participates in the pass. Only a literal boolean
    /// `true` enables a stream; truthy-looking values leave it disabled.
    #[serde(default, deserialize_with = "bool_exact")]
    pub enabled: bool,
    /// Application order: lower priorities are applied earlier and therefore
    /// win overlapping keys under the earlier-wins merge.
    #[serde(default)]
    pub priority: i64,
    /// Reserved metadata for hierarchical grouping. Currently inert.
    #[serde(default)]
    pub tag: Option<String>,
}

fn bool_exact<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(matches!(value, Value::Bool(true)))
}

/// The ordered sequence of enabled stream declarations, ascending by
/// priority, ties broken by declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionPlan {
    entries: Vec<StreamDeclaration>,
}

impl ExecutionPlan {
    /// Build a plan from already-parsed declarations: drop everything not
    /// explicitly enabled, then stable-sort by ascending priority.
    #[must_use]
    pub fn from_declarations(declarations: Vec<StreamDeclaration>) -> Self {
        let mut entries: Vec<_> = declarations.into_iter().filter(|d| d.enabled).collect();
        // Vec::sort_by_key is stable: equal priorities keep declaration order.
        entries.sort_by_key(|d| d.priority);
        Self { entries }
    }

    /// Build a plan from the raw `streams` value of a bootstrap document.
    ///
    /// A missing value yields the empty plan; anything other than a sequence
    /// of declaration records is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TributaryError::InvalidStreamList`] when `raw` is not a
    /// sequence or an entry does not parse as a declaration.
    pub fn normalize(raw: Option<Value>) -> TributaryResult<Self> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };
        let Value::Array(entries) = raw else {
            return Err(TributaryError::InvalidStreamList {
                found: format!("expected a sequence, found {}", value_kind(&raw)),
            });
        };
        let declarations = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_value::<StreamDeclaration>(entry).map_err(|e| {
                    TributaryError::InvalidStreamList {
                        found: format!("entry {index} is not a stream declaration: {e}"),
                    }
                })
            })
            .collect::<TributaryResult<Vec<_>>>()?;
        Ok(Self::from_declarations(declarations))
    }

    /// Iterate the plan in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, StreamDeclaration> {
        self.entries.iter()
    }

    /// Number of streams in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the plan contains no streams.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ExecutionPlan {
    type Item = &'a StreamDeclaration;
    type IntoIter = std::slice::Iter<'a, StreamDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
