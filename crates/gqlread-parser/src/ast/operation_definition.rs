use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::OperationType;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::VarAllowed;

/// An [operation definition](https://spec.graphql.org/October2021/#sec-Language.Operations):
/// `query Name($vars) @directives { selections }` (or `mutation` /
/// `subscription`).
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub operation: OperationType,
    pub name: Option<Name>,
    pub variable_definitions: Option<Vec<VariableDefinition>>,
    pub directives: Option<Vec<Directive<VarAllowed>>>,
    pub selection_set: SelectionSet,
}
