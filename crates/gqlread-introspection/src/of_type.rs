use crate::TypeKind;
use serde::de::Error as _;

/// The named-leaf payload of a type reference: `kind`, `name`, and an
/// optional `description`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub kind: TypeKind,
    pub name: String,
    pub description: Option<String>,
}

/// A recursive type reference (the introspection `ofType` chain).
///
/// `LIST` and `NON_NULL` wrap a nested reference; every other kind is a
/// named leaf that terminates the chain. Decoding is keyed on `kind`: a
/// wrapper kind requires a nested `ofType`, a leaf kind requires a
/// `name`, and either one missing is a decode error rather than a panic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum OfType {
    Scalar(TypeRef),
    Object(TypeRef),
    Interface(TypeRef),
    Union(TypeRef),
    Enum(TypeRef),
    InputObject(TypeRef),
    List(Box<OfType>),
    NonNull(Box<OfType>),
}

impl OfType {
    /// The kind of the outermost reference.
    pub fn kind(&self) -> TypeKind {
        match self {
            OfType::Scalar(_) => TypeKind::Scalar,
            OfType::Object(_) => TypeKind::Object,
            OfType::Interface(_) => TypeKind::Interface,
            OfType::Union(_) => TypeKind::Union,
            OfType::Enum(_) => TypeKind::Enum,
            OfType::InputObject(_) => TypeKind::InputObject,
            OfType::List(_) => TypeKind::List,
            OfType::NonNull(_) => TypeKind::NonNull,
        }
    }

    /// The name of the outermost reference, or `None` for a wrapper.
    pub fn name(&self) -> Option<&str> {
        match self {
            OfType::Scalar(type_ref)
            | OfType::Object(type_ref)
            | OfType::Interface(type_ref)
            | OfType::Union(type_ref)
            | OfType::Enum(type_ref)
            | OfType::InputObject(type_ref) => Some(&type_ref.name),
            OfType::List(_) | OfType::NonNull(_) => None,
        }
    }

    /// The reference wrapped by a `LIST`/`NON_NULL`, or `None` for a
    /// leaf.
    pub fn of_type(&self) -> Option<&OfType> {
        match self {
            OfType::List(inner) | OfType::NonNull(inner) => Some(inner),
            _ => None,
        }
    }

    /// The named leaf at the end of the wrapper chain.
    pub fn unwrapped(&self) -> &OfType {
        match self {
            OfType::List(inner) | OfType::NonNull(inner) => inner.unwrapped(),
            leaf => leaf,
        }
    }
}

/// The wire shape of a reference, before kind discrimination.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOfType {
    kind: TypeKind,
    name: Option<String>,
    description: Option<String>,
    of_type: Option<Box<RawOfType>>,
}

impl RawOfType {
    fn refine(self) -> Result<OfType, String> {
        match self.kind {
            TypeKind::List | TypeKind::NonNull => {
                let inner = self
                    .of_type
                    .ok_or_else(|| {
                        format!("{} type reference is missing its `ofType`", self.kind)
                    })?
                    .refine()?;
                Ok(match self.kind {
                    TypeKind::List => OfType::List(Box::new(inner)),
                    _ => OfType::NonNull(Box::new(inner)),
                })
            }
            leaf_kind => {
                let name = self.name.ok_or_else(|| {
                    format!("{leaf_kind} type reference is missing its `name`")
                })?;
                let type_ref = TypeRef {
                    kind: leaf_kind,
                    name,
                    description: self.description,
                };
                Ok(match leaf_kind {
                    TypeKind::Scalar => OfType::Scalar(type_ref),
                    TypeKind::Object => OfType::Object(type_ref),
                    TypeKind::Interface => OfType::Interface(type_ref),
                    TypeKind::Union => OfType::Union(type_ref),
                    TypeKind::Enum => OfType::Enum(type_ref),
                    _ => OfType::InputObject(type_ref),
                })
            }
        }
    }
}

impl<'de> serde::Deserialize<'de> for OfType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        RawOfType::deserialize(deserializer)?
            .refine()
            .map_err(D::Error::custom)
    }
}
