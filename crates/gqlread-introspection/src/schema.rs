use crate::Directive;
use crate::IntrospectionError;
use crate::Type;

/// A [`__Schema`](https://spec.graphql.org/October2021/#sec-The-__Schema-Type)
/// node: the full decoded introspection result.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub description: Option<String>,
    pub types: Vec<Type>,
    pub query_type: RootTypeRef,
    pub mutation_type: Option<RootTypeRef>,
    pub subscription_type: Option<RootTypeRef>,
    #[serde(default)]
    pub directives: Vec<Directive>,
}

/// A root operation type reference (`queryType` and friends).
///
/// Only the name matters here; some servers also send a `kind` (and
/// other) key, which is ignored.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct RootTypeRef {
    pub name: String,
}

#[derive(serde::Deserialize)]
struct Response {
    data: ResponseData,
}

#[derive(serde::Deserialize)]
struct ResponseData {
    #[serde(rename = "__schema")]
    schema: Schema,
}

impl Schema {
    /// Decodes a full introspection response envelope,
    /// `{"data": {"__schema": {...}}}`, from a JSON string.
    pub fn from_response_str(json: &str) -> Result<Schema, IntrospectionError> {
        let response: Response = serde_json::from_str(json)
            .map_err(|err| IntrospectionError::general(err.to_string()))?;
        Ok(response.data.schema)
    }

    /// Decodes a full introspection response envelope from JSON bytes.
    pub fn from_response_slice(json: &[u8]) -> Result<Schema, IntrospectionError> {
        let response: Response = serde_json::from_slice(json)
            .map_err(|err| IntrospectionError::general(err.to_string()))?;
        Ok(response.data.schema)
    }

    /// Looks up a type by name.
    pub fn type_named(&self, name: &str) -> Option<&Type> {
        self.types
            .iter()
            .find(|ty| ty.name.as_deref() == Some(name))
    }
}
