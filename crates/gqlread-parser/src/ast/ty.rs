use crate::ast::Name;

/// A [named type](https://spec.graphql.org/October2021/#NamedType)
/// reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NamedType {
    pub name: Name,
}

impl NamedType {
    pub fn new(name: impl Into<Name>) -> Self {
        NamedType { name: name.into() }
    }
}

/// A [type](https://spec.graphql.org/October2021/#Type) reference:
/// named, list, or non-null.
///
/// The grammar guarantees `NonNull` never wraps another `NonNull`: the
/// non-null production only accepts a named or list inner type, so the
/// invariant holds by construction rather than by post-parse validation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Named(NamedType),
    List(Box<Type>),
    NonNull(Box<Type>),
}
