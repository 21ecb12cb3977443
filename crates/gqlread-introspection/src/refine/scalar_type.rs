use crate::refine::require_kind;
use crate::refine::require_name;
use crate::refine::ScalarName;
use crate::IntrospectionError;
use crate::Type;
use crate::TypeKind;

/// The `SCALAR` refinement of a [`Type`] node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScalarType {
    pub name: ScalarName,
    pub description: Option<String>,
    pub specified_by_url: Option<String>,
}

impl TryFrom<&Type> for ScalarType {
    type Error = IntrospectionError;

    fn try_from(ty: &Type) -> Result<Self, Self::Error> {
        require_kind(ty, TypeKind::Scalar)?;
        Ok(ScalarType {
            name: ScalarName::from(require_name(ty)?),
            description: ty.description.clone(),
            specified_by_url: ty.specified_by_url.clone(),
        })
    }
}
