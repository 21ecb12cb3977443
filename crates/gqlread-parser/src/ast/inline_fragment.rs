use crate::ast::Directive;
use crate::ast::SelectionSet;
use crate::ast::TypeCondition;
use crate::VarAllowed;

/// An [inline fragment](https://spec.graphql.org/October2021/#InlineFragment):
/// `... on Type @directives { selections }`, with the type condition and
/// directives optional and the selection set required.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<TypeCondition>,
    pub directives: Option<Vec<Directive<VarAllowed>>>,
    pub selection_set: SelectionSet,
}
