//! Various test utils.

use crate::OfType;
use crate::Type;

/// Decodes a `__Type` node from a JSON value, panicking on failure.
pub fn type_from_json(value: serde_json::Value) -> Type {
    serde_json::from_value(value.clone())
        .unwrap_or_else(|err| panic!("failed to decode type from {value}: {err}"))
}

/// Decodes a type reference from a JSON value, panicking on failure.
pub fn of_type_from_json(value: serde_json::Value) -> OfType {
    serde_json::from_value(value.clone())
        .unwrap_or_else(|err| panic!("failed to decode type reference from {value}: {err}"))
}
