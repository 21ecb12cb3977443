use crate::TypeKind;

/// An error produced while decoding an introspection response or
/// refining a decoded type node.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntrospectionError {
    /// A free-form decode problem: malformed JSON, a malformed
    /// `__schema` shape, or a node violating the per-kind field
    /// contract (e.g. an `ENUM` type with no values).
    #[error("{0}")]
    General(String),

    /// A kind-refinement projection was applied to a type node whose
    /// actual kind differs from the one the projection requires.
    #[error("kind of type is not {expected}")]
    TypeConstruction {
        /// The kind the projection required.
        expected: TypeKind,
    },
}

impl IntrospectionError {
    pub(crate) fn general(message: impl Into<String>) -> Self {
        IntrospectionError::General(message.into())
    }
}
