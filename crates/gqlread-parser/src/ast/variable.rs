use crate::ast::Name;

/// A [variable](https://spec.graphql.org/October2021/#Variable)
/// reference: `$name`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Variable {
    pub name: Name,
}

impl Variable {
    pub fn new(name: impl Into<Name>) -> Self {
        Variable { name: name.into() }
    }
}
