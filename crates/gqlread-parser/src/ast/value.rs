use crate::ast::Name;
use crate::ast::ObjectValue;
use crate::Constness;

/// A GraphQL [input value](https://spec.graphql.org/October2021/#Value),
/// parameterized over the constness of its grammar position.
///
/// In a const position (`Value<Const>`) the `Variable` case holds an
/// uninhabited type and cannot be constructed; in a variable-legal
/// position (`Value<VarAllowed>`) it holds a [`Variable`].
///
/// The parser resolves values by ordered alternation; see
/// [`DocumentParser`](crate::DocumentParser) for the trial order, which is
/// semantically load-bearing (e.g. the keyword `null` wins over an enum
/// name).
///
/// [`Variable`]: crate::ast::Variable
#[derive(Clone, Debug, PartialEq)]
pub enum Value<C: Constness> {
    Variable(C::VariableRef),
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
    /// An [enum value](https://spec.graphql.org/October2021/#sec-Enum-Value):
    /// a name other than `true`, `false`, or `null`.
    Enum(Name),
    List(Vec<Value<C>>),
    Object(ObjectValue<C>),
}
