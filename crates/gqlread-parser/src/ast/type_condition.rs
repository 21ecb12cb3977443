use crate::ast::NamedType;

/// A [type condition](https://spec.graphql.org/October2021/#TypeCondition):
/// `on NamedType`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeCondition {
    pub name: NamedType,
}
