use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::ast::TypeCondition;
use crate::VarAllowed;

/// A [fragment definition](https://spec.graphql.org/October2021/#FragmentDefinition):
/// `fragment Name on Type @directives { selections }`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub name: Name,
    pub type_condition: TypeCondition,
    pub directives: Option<Vec<Directive<VarAllowed>>>,
    pub selection_set: SelectionSet,
}
