//! AST nodes for GraphQL executable documents.
//!
//! Nodes are plain owned values with structural equality: a parse
//! produces the tree once and nothing in it is shared or mutated
//! afterwards. Recursive cases (nested values, wrapped types, nested
//! selection sets) own their children through `Box`/`Vec`; the only
//! by-name indirection in the grammar is a fragment spread, which this
//! crate does not resolve.

mod argument;
mod directive;
mod document;
mod field;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod name;
mod object_value;
mod operation_definition;
mod operation_type;
mod selection_set;
mod ty;
mod type_condition;
mod value;
mod variable;
mod variable_definition;

pub use argument::Argument;
pub use directive::Directive;
pub use document::ExecutableDefinition;
pub use document::ExecutableDocument;
pub use field::Field;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use name::Name;
pub use object_value::ObjectField;
pub use object_value::ObjectValue;
pub use operation_definition::OperationDefinition;
pub use operation_type::OperationType;
pub use selection_set::Selection;
pub use selection_set::SelectionSet;
pub use ty::NamedType;
pub use ty::Type;
pub use type_condition::TypeCondition;
pub use value::Value;
pub use variable::Variable;
pub use variable_definition::VariableDefinition;
