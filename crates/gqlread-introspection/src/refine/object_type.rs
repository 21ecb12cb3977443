use crate::refine::require_kind;
use crate::refine::require_name;
use crate::Field;
use crate::IntrospectionError;
use crate::OfType;
use crate::Type;
use crate::TypeKind;

/// The `OBJECT` refinement of a [`Type`] node.
///
/// `fields` and `interfaces` are required for an object type; a node
/// missing either fails the projection.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    pub interfaces: Vec<OfType>,
}

impl TryFrom<&Type> for ObjectType {
    type Error = IntrospectionError;

    fn try_from(ty: &Type) -> Result<Self, Self::Error> {
        require_kind(ty, TypeKind::Object)?;
        let name = require_name(ty)?;
        let fields = ty.fields.clone().ok_or_else(|| {
            IntrospectionError::general(format!("OBJECT type `{name}` is missing its `fields`"))
        })?;
        let interfaces = ty.interfaces.clone().ok_or_else(|| {
            IntrospectionError::general(format!(
                "OBJECT type `{name}` is missing its `interfaces`"
            ))
        })?;
        Ok(ObjectType {
            name,
            description: ty.description.clone(),
            fields,
            interfaces,
        })
    }
}
