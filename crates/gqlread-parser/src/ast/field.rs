use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::VarAllowed;

/// A [field](https://spec.graphql.org/October2021/#sec-Language.Fields)
/// selection: `alias: name(args) @directives { selections }`, everything
/// but the name optional.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Option<Vec<Argument<VarAllowed>>>,
    pub directives: Option<Vec<Directive<VarAllowed>>>,
    pub selection_set: Option<SelectionSet>,
}
