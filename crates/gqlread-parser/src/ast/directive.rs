use crate::ast::Argument;
use crate::ast::Name;
use crate::Constness;

/// A [directive](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// annotation: `@name` with optional arguments.
///
/// Directive order is significant (the same directives in a different
/// order may have different semantic meaning), so directive lists preserve
/// source order.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive<C: Constness> {
    pub name: Name,
    pub arguments: Option<Vec<Argument<C>>>,
}
