use crate::ast::Directive;
use crate::ast::Type;
use crate::ast::Value;
use crate::ast::Variable;
use crate::Const;

/// A [variable definition](https://spec.graphql.org/October2021/#VariableDefinition):
/// `$name: Type = defaultValue @directives`.
///
/// The default value and any attached directives are const grammar
/// positions: a variable cannot appear inside another variable's
/// default.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub variable: Variable,
    pub ty: Type,
    pub default_value: Option<Value<Const>>,
    pub directives: Option<Vec<Directive<Const>>>,
}
