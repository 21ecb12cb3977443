use crate::InputValue;

/// A [`__Directive`](https://spec.graphql.org/October2021/#sec-The-__Directive-Type)
/// node: a directive the schema supports.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directive {
    pub name: String,
    pub description: Option<String>,
    pub locations: Vec<DirectiveLocation>,
    #[serde(default)]
    pub args: Vec<InputValue>,

    /// Absent on servers predating repeatable directives.
    pub is_repeatable: Option<bool>,
}

/// A [`__DirectiveLocation`](https://spec.graphql.org/October2021/#sec-The-__DirectiveLocation-Type)
/// value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}
