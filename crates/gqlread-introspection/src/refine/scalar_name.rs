use std::fmt;

/// A scalar type name: one of the five
/// [built-in scalars](https://spec.graphql.org/October2021/#sec-Scalars),
/// or a custom scalar carrying its raw name.
///
/// The raw name round-trips exactly: `ScalarName::from("DateTime")`
/// prints as `DateTime`, and each built-in prints as its canonical
/// spelling.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScalarName {
    Int,
    Float,
    String,
    Boolean,
    Id,
    Custom(std::string::String),
}

impl ScalarName {
    pub fn as_str(&self) -> &str {
        match self {
            ScalarName::Int => "Int",
            ScalarName::Float => "Float",
            ScalarName::String => "String",
            ScalarName::Boolean => "Boolean",
            ScalarName::Id => "ID",
            ScalarName::Custom(name) => name,
        }
    }

    /// Whether this is one of the five built-in scalars.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, ScalarName::Custom(_))
    }
}

impl From<&str> for ScalarName {
    fn from(name: &str) -> Self {
        match name {
            "Int" => ScalarName::Int,
            "Float" => ScalarName::Float,
            "String" => ScalarName::String,
            "Boolean" => ScalarName::Boolean,
            "ID" => ScalarName::Id,
            custom => ScalarName::Custom(custom.to_string()),
        }
    }
}

impl From<std::string::String> for ScalarName {
    fn from(name: std::string::String) -> Self {
        ScalarName::from(name.as_str())
    }
}

impl fmt::Display for ScalarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
