use std::fmt;

/// A GraphQL [name](https://spec.graphql.org/October2021/#Name)
/// (identifier).
///
/// A name is a non-empty run of `[0-9A-Za-z_]`. Names compare and hash by
/// their string value, and `Name` is the one node whose printed form is
/// defined to be the exact inverse of parsing: `Display` emits the source
/// text the parser consumed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Name(pub String);

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Name(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name(value.to_string())
    }
}
