use crate::ast::Name;
use crate::ast::Value;
use crate::Constness;

/// An [input object value](https://spec.graphql.org/October2021/#sec-Input-Object-Values):
/// `{ name: value ... }`. May be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue<C: Constness> {
    pub fields: Vec<ObjectField<C>>,
}

/// One `name: value` entry of an [`ObjectValue`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<C: Constness> {
    pub name: Name,
    pub value: Value<C>,
}
