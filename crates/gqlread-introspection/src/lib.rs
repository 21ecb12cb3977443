//! A decoder for GraphQL
//! [introspection](https://spec.graphql.org/October2021/#sec-Introspection)
//! JSON responses.
//!
//! The wire model ([`Schema`], [`Type`], [`OfType`], ...) mirrors the
//! `__Schema`/`__Type` introspection types. A `__Type` node is
//! kind-discriminated: its `kind` tag is read before any kind-specific
//! field, and fields that are not legal for that kind decode as absent.
//! The [`refine`] module then projects a generic [`Type`] node into a
//! precisely-typed per-kind view ([`refine::ObjectType`],
//! [`refine::EnumType`], ...), failing with
//! [`IntrospectionError::TypeConstruction`] when the node's actual kind
//! differs.

mod directive;
mod enum_value;
mod error;
mod field;
mod input_value;
mod of_type;
pub mod refine;
mod schema;
mod ty;
mod type_kind;

pub use directive::Directive;
pub use directive::DirectiveLocation;
pub use enum_value::EnumValue;
pub use error::IntrospectionError;
pub use field::Field;
pub use input_value::InputValue;
pub use of_type::OfType;
pub use of_type::TypeRef;
pub use schema::RootTypeRef;
pub use schema::Schema;
pub use ty::Type;
pub use type_kind::TypeKind;

#[cfg(test)]
mod tests;
