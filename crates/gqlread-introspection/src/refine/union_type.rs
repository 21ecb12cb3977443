use crate::refine::require_kind;
use crate::refine::require_name;
use crate::IntrospectionError;
use crate::OfType;
use crate::Type;
use crate::TypeKind;

/// The `UNION` refinement of a [`Type`] node.
///
/// `possibleTypes` is required but may be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
    pub possible_types: Vec<OfType>,
}

impl TryFrom<&Type> for UnionType {
    type Error = IntrospectionError;

    fn try_from(ty: &Type) -> Result<Self, Self::Error> {
        require_kind(ty, TypeKind::Union)?;
        let name = require_name(ty)?;
        let possible_types = ty.possible_types.clone().ok_or_else(|| {
            IntrospectionError::general(format!(
                "UNION type `{name}` is missing its `possibleTypes`"
            ))
        })?;
        Ok(UnionType {
            name,
            description: ty.description.clone(),
            possible_types,
        })
    }
}
