use crate::OfType;

/// An [`__InputValue`](https://spec.graphql.org/October2021/#sec-The-__InputValue-Type)
/// node: a field or directive argument, or an input object field.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValue {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: OfType,

    /// The default value as a GraphQL-language-encoded string, exactly
    /// as the server sent it. A string-typed default keeps its embedded
    /// quotes (`"\"No longer supported\""`); the text is never re-decoded
    /// into a semantic value here.
    pub default_value: Option<String>,
}
