//! Kind-refinement projections.
//!
//! A decoded [`Type`](crate::Type) node is generic over all eight kinds;
//! each projection here turns it into a precisely-typed per-kind view
//! via `TryFrom<&Type>`. A node of the wrong kind fails with
//! [`IntrospectionError::TypeConstruction`](crate::IntrospectionError::TypeConstruction)
//! naming the kind the projection required; a node of the right kind
//! missing a required field fails with
//! [`IntrospectionError::General`](crate::IntrospectionError::General)
//! rather than panicking.

mod enum_type;
mod input_object_type;
mod interface_type;
mod list_type;
mod non_null_type;
mod object_type;
mod scalar_name;
mod scalar_type;
mod union_type;

pub use enum_type::EnumType;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub use list_type::ListType;
pub use non_null_type::NonNullType;
pub use object_type::ObjectType;
pub use scalar_name::ScalarName;
pub use scalar_type::ScalarType;
pub use union_type::UnionType;

use crate::IntrospectionError;
use crate::Type;
use crate::TypeKind;

/// Checks the node's kind, the gate every projection goes through.
fn require_kind(ty: &Type, expected: TypeKind) -> Result<(), IntrospectionError> {
    if ty.kind == expected {
        Ok(())
    } else {
        Err(IntrospectionError::TypeConstruction { expected })
    }
}

/// Extracts the node's name, required by every named kind.
fn require_name(ty: &Type) -> Result<String, IntrospectionError> {
    ty.name.clone().ok_or_else(|| {
        IntrospectionError::general(format!("{} type is missing its `name`", ty.kind))
    })
}
