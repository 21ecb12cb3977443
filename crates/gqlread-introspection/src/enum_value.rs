/// An [`__EnumValue`](https://spec.graphql.org/October2021/#sec-The-__EnumValue-Type)
/// node: one possible value of an enum type.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}
