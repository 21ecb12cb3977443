use crate::InputValue;
use crate::OfType;

/// A [`__Field`](https://spec.graphql.org/October2021/#sec-The-__Field-Type)
/// node: one output field of an object or interface type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub args: Vec<InputValue>,
    #[serde(rename = "type")]
    pub ty: OfType,
    #[serde(default)]
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}
