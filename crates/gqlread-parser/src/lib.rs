//! A parsing library for GraphQL *executable* documents (queries,
//! mutations, subscriptions, and fragments).
//!
//! The parser is a backtracking recursive descent parser over an in-memory
//! UTF-8 source: each grammar production attempts its alternatives in a
//! documented order from the same cursor snapshot and commits to the first
//! alternative that fully succeeds. The produced AST is a plain owned value
//! tree with structural equality; source positions appear only in errors.
//!
//! Type-system (SDL) documents are out of scope; see the GraphQL spec's
//! [executable document grammar](https://spec.graphql.org/October2021/#ExecutableDocument).

pub mod ast;
mod constness;
mod numeric;
mod parse_error;
mod parser;
mod source_cursor;
mod source_position;
mod trivia;

pub use constness::Const;
pub use constness::Constness;
pub use constness::NoVariable;
pub use constness::VarAllowed;
pub use parse_error::ParseError;
pub use parser::parse_executable_document;
pub use parser::DocumentParser;
pub use source_cursor::CursorSnapshot;
pub use source_cursor::SourceCursor;
pub use source_position::SourcePosition;

#[cfg(test)]
mod tests;
