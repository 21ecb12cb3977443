use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;

/// An [executable document](https://spec.graphql.org/October2021/#ExecutableDocument):
/// a sequence of operation and fragment definitions, in source order.
/// An all-trivia input parses as an empty document.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutableDocument {
    pub definitions: Vec<ExecutableDefinition>,
}

/// One definition of an executable document.
#[derive(Clone, Debug, PartialEq)]
pub enum ExecutableDefinition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}
