use crate::refine::require_kind;
use crate::refine::require_name;
use crate::EnumValue;
use crate::IntrospectionError;
use crate::Type;
use crate::TypeKind;
use std::collections::HashSet;

/// The `ENUM` refinement of a [`Type`] node.
///
/// `enumValues` is required, must be non-empty, and its value names must
/// be unique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub enum_values: Vec<EnumValue>,
}

impl TryFrom<&Type> for EnumType {
    type Error = IntrospectionError;

    fn try_from(ty: &Type) -> Result<Self, Self::Error> {
        require_kind(ty, TypeKind::Enum)?;
        let name = require_name(ty)?;
        let enum_values = ty.enum_values.clone().ok_or_else(|| {
            IntrospectionError::general(format!(
                "ENUM type `{name}` is missing its `enumValues`"
            ))
        })?;
        if enum_values.is_empty() {
            return Err(IntrospectionError::general(format!(
                "ENUM type `{name}` has no values"
            )));
        }

        let mut seen = HashSet::new();
        for value in &enum_values {
            if !seen.insert(value.name.as_str()) {
                return Err(IntrospectionError::general(format!(
                    "ENUM type `{name}` has a duplicate value `{}`",
                    value.name,
                )));
            }
        }

        Ok(EnumType {
            name,
            description: ty.description.clone(),
            enum_values,
        })
    }
}
