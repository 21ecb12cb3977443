use crate::refine::require_kind;
use crate::refine::require_name;
use crate::Field;
use crate::IntrospectionError;
use crate::OfType;
use crate::Type;
use crate::TypeKind;

/// The `INTERFACE` refinement of a [`Type`] node.
///
/// `fields` is required; `interfaces` and `possibleTypes` may be absent
/// on the wire and are treated as empty.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    pub interfaces: Vec<OfType>,
    pub possible_types: Vec<OfType>,
}

impl TryFrom<&Type> for InterfaceType {
    type Error = IntrospectionError;

    fn try_from(ty: &Type) -> Result<Self, Self::Error> {
        require_kind(ty, TypeKind::Interface)?;
        let name = require_name(ty)?;
        let fields = ty.fields.clone().ok_or_else(|| {
            IntrospectionError::general(format!(
                "INTERFACE type `{name}` is missing its `fields`"
            ))
        })?;
        Ok(InterfaceType {
            name,
            description: ty.description.clone(),
            fields,
            interfaces: ty.interfaces.clone().unwrap_or_default(),
            possible_types: ty.possible_types.clone().unwrap_or_default(),
        })
    }
}
