//! Various test utils.

use crate::ast::ExecutableDefinition;
use crate::ast::ExecutableDocument;
use crate::ast::Field;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::Value;
use crate::parse_executable_document;
use crate::Constness;
use crate::DocumentParser;
use crate::ParseError;
use crate::VarAllowed;

/// Parses a full executable document, panicking on failure.
pub fn parse_document(source: &str) -> ExecutableDocument {
    parse_executable_document(source)
        .unwrap_or_else(|err| panic!("failed to parse `{source}`: {err}"))
}

/// Parses a document expected to contain exactly one operation definition
/// and returns it.
pub fn extract_operation(source: &str) -> OperationDefinition {
    let document = parse_document(source);
    assert_eq!(
        document.definitions.len(),
        1,
        "expected exactly one definition in `{source}`",
    );
    match document.definitions.into_iter().next() {
        Some(ExecutableDefinition::Operation(operation)) => operation,
        other => panic!("Expected an operation definition, got: {other:?}"),
    }
}

/// Returns the first selection of a selection set, which must be a field.
pub fn first_field(selection_set: &SelectionSet) -> &Field {
    match selection_set.selections.first() {
        Some(Selection::Field(field)) => field,
        other => panic!("Expected a field selection, got: {other:?}"),
    }
}

/// Returns the value of a field's first argument.
pub fn first_arg_value(field: &Field) -> &Value<VarAllowed> {
    let arguments = field
        .arguments
        .as_ref()
        .unwrap_or_else(|| panic!("Expected arguments on field `{}`", field.name));
    &arguments
        .first()
        .unwrap_or_else(|| panic!("Expected at least one argument on field `{}`", field.name))
        .value
}

/// Parses a standalone value production, panicking on failure.
pub fn parse_value<C: Constness>(source: &str) -> Value<C> {
    DocumentParser::new(source)
        .parse_value::<C>()
        .unwrap_or_else(|err| panic!("failed to parse value `{source}`: {err}"))
}

/// Parses a standalone value production, panicking on success.
pub fn parse_value_err<C: Constness>(source: &str) -> ParseError {
    match DocumentParser::new(source).parse_value::<C>() {
        Ok(value) => panic!("Expected `{source}` to fail, got: {value:?}"),
        Err(err) => err,
    }
}
