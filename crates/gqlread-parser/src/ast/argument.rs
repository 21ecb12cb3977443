use crate::ast::Name;
use crate::ast::Value;
use crate::Constness;

/// An [argument](https://spec.graphql.org/October2021/#Argument):
/// `name: value`.
///
/// A parenthesized argument list carries at least one argument; `()` is a
/// grammar error.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<C: Constness> {
    pub name: Name,
    pub value: Value<C>,
}
