//! Shared fixtures for aggregation and resolution tests.

use serde_json::Value;
use tributary::streams::FixtureStream;
use tributary::{Contribution, StreamResolver, factory};

/// Unwraps a `json!` literal into a contribution map.
pub fn object(value: Value) -> Contribution {
    value.as_object().cloned().expect("object literal")
}

/// Registers a fixture stream under `module` contributing `values`.
pub fn register_fixture(resolver: &mut StreamResolver, module: &str, values: Value) {
    let values = object(values);
    resolver.register(
        module.to_owned(),
        factory(move |decl| Box::new(FixtureStream::new(decl.name.clone(), values.clone()))),
    );
}
