use crate::refine::require_kind;
use crate::IntrospectionError;
use crate::OfType;
use crate::Type;
use crate::TypeKind;

/// The `NON_NULL` refinement of a [`Type`] node.
///
/// The wrapped reference must not itself be `NON_NULL`; non-null is not
/// nestable in the GraphQL type system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NonNullType {
    pub of_type: OfType,
}

impl TryFrom<&Type> for NonNullType {
    type Error = IntrospectionError;

    fn try_from(ty: &Type) -> Result<Self, Self::Error> {
        require_kind(ty, TypeKind::NonNull)?;
        let of_type = ty.of_type.clone().ok_or_else(|| {
            IntrospectionError::general("NON_NULL type is missing its `ofType`")
        })?;
        if matches!(of_type, OfType::NonNull(_)) {
            return Err(IntrospectionError::general(
                "NON_NULL type cannot wrap another NON_NULL type",
            ));
        }
        Ok(NonNullType { of_type })
    }
}
