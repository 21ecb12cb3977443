use crate::EnumValue;
use crate::Field;
use crate::InputValue;
use crate::OfType;
use crate::TypeKind;

/// A [`__Type`](https://spec.graphql.org/October2021/#sec-The-__Type-Type)
/// node.
///
/// Every field other than `kind` is optional on the wire; which of them
/// are meaningful is governed entirely by `kind`. Decoding reads `kind`
/// first and retains only the fields legal for that kind, so e.g. a
/// `SCALAR` node never carries `fields` even when a server sends some.
/// The [`refine`](crate::refine) projections turn a `Type` into a
/// per-kind view with precise requiredness.
#[derive(Clone, Debug, PartialEq)]
pub struct Type {
    pub kind: TypeKind,
    pub name: Option<String>,
    pub description: Option<String>,
    pub fields: Option<Vec<Field>>,
    pub interfaces: Option<Vec<OfType>>,
    pub possible_types: Option<Vec<OfType>>,
    pub enum_values: Option<Vec<EnumValue>>,
    pub input_fields: Option<Vec<InputValue>>,
    pub of_type: Option<OfType>,
    pub specified_by_url: Option<String>,
}

/// The wire shape of a `__Type` node, before kind discrimination.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawType {
    kind: TypeKind,
    name: Option<String>,
    description: Option<String>,
    fields: Option<Vec<Field>>,
    interfaces: Option<Vec<OfType>>,
    possible_types: Option<Vec<OfType>>,
    enum_values: Option<Vec<EnumValue>>,
    input_fields: Option<Vec<InputValue>>,
    of_type: Option<OfType>,
    // Spelled with a capital URL on the wire, which `camelCase` cannot
    // produce.
    #[serde(rename = "specifiedByURL")]
    specified_by_url: Option<String>,
}

impl RawType {
    /// Keeps only the fields legal for `kind`; the rest become absent.
    fn discriminate(self) -> Type {
        let kind = self.kind;
        let mut ty = Type {
            kind,
            name: None,
            description: self.description,
            fields: None,
            interfaces: None,
            possible_types: None,
            enum_values: None,
            input_fields: None,
            of_type: None,
            specified_by_url: None,
        };
        match kind {
            TypeKind::Scalar => {
                ty.name = self.name;
                ty.specified_by_url = self.specified_by_url;
            }
            TypeKind::Object => {
                ty.name = self.name;
                ty.fields = self.fields;
                ty.interfaces = self.interfaces;
            }
            TypeKind::Interface => {
                ty.name = self.name;
                ty.fields = self.fields;
                ty.interfaces = self.interfaces;
                ty.possible_types = self.possible_types;
            }
            TypeKind::Union => {
                ty.name = self.name;
                ty.possible_types = self.possible_types;
            }
            TypeKind::Enum => {
                ty.name = self.name;
                ty.enum_values = self.enum_values;
            }
            TypeKind::InputObject => {
                ty.name = self.name;
                ty.input_fields = self.input_fields;
            }
            TypeKind::List | TypeKind::NonNull => {
                ty.of_type = self.of_type;
            }
        }
        ty
    }
}

impl<'de> serde::Deserialize<'de> for Type {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(RawType::deserialize(deserializer)?.discriminate())
    }
}
