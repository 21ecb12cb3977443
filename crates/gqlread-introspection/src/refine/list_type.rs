use crate::refine::require_kind;
use crate::IntrospectionError;
use crate::OfType;
use crate::Type;
use crate::TypeKind;

/// The `LIST` refinement of a [`Type`] node: an anonymous wrapper whose
/// only payload is the wrapped reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListType {
    pub of_type: OfType,
}

impl TryFrom<&Type> for ListType {
    type Error = IntrospectionError;

    fn try_from(ty: &Type) -> Result<Self, Self::Error> {
        require_kind(ty, TypeKind::List)?;
        let of_type = ty.of_type.clone().ok_or_else(|| {
            IntrospectionError::general("LIST type is missing its `ofType`")
        })?;
        Ok(ListType { of_type })
    }
}
