use crate::ast::Directive;
use crate::ast::Name;
use crate::VarAllowed;

/// A [fragment spread](https://spec.graphql.org/October2021/#FragmentSpread):
/// `...FragmentName @directives`.
///
/// The fragment name may not be `on` (that spelling introduces an inline
/// fragment's type condition). Spreads reference fragments by name only;
/// resolution is a caller concern.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub name: Name,
    pub directives: Option<Vec<Directive<VarAllowed>>>,
}
