use crate::refine::require_kind;
use crate::refine::require_name;
use crate::InputValue;
use crate::IntrospectionError;
use crate::Type;
use crate::TypeKind;

/// The `INPUT_OBJECT` refinement of a [`Type`] node.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub input_fields: Vec<InputValue>,
}

impl TryFrom<&Type> for InputObjectType {
    type Error = IntrospectionError;

    fn try_from(ty: &Type) -> Result<Self, Self::Error> {
        require_kind(ty, TypeKind::InputObject)?;
        let name = require_name(ty)?;
        let input_fields = ty.input_fields.clone().ok_or_else(|| {
            IntrospectionError::general(format!(
                "INPUT_OBJECT type `{name}` is missing its `inputFields`"
            ))
        })?;
        Ok(InputObjectType {
            name,
            description: ty.description.clone(),
            input_fields,
        })
    }
}
