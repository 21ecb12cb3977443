//! Tests for operation definitions, fragment definitions, and the
//! top-level executable document.

use crate::ast::ExecutableDefinition;
use crate::ast::OperationType;
use crate::parse_executable_document;
use crate::tests::utils::extract_operation;
use crate::tests::utils::parse_document;

// =============================================================================
// Operation definitions
// =============================================================================

#[test]
fn operation_named_query() {
    let operation = extract_operation("query HeroQuery { hero }");
    assert_eq!(operation.operation, OperationType::Query);
    assert_eq!(operation.name.as_ref().unwrap().as_str(), "HeroQuery");
}

#[test]
fn operation_anonymous() {
    let operation = extract_operation("query { hero }");
    assert_eq!(operation.operation, OperationType::Query);
    assert!(operation.name.is_none());
    assert!(operation.variable_definitions.is_none());
    assert!(operation.directives.is_none());
}

#[test]
fn operation_mutation_and_subscription() {
    let mutation = extract_operation("mutation AddReview { createReview }");
    assert_eq!(mutation.operation, OperationType::Mutation);

    let subscription = extract_operation("subscription OnReview { reviewAdded }");
    assert_eq!(subscription.operation, OperationType::Subscription);
}

#[test]
fn operation_with_directives() {
    let operation = extract_operation("query Hero @cached { hero }");
    assert_eq!(operation.directives.as_ref().unwrap()[0].name.as_str(), "cached");
}

/// The operation keyword is required; the selection-set shorthand is not
/// part of this grammar.
#[test]
fn operation_requires_keyword() {
    assert!(parse_executable_document("{ hero }").is_err());
}

#[test]
fn operation_requires_selection_set() {
    assert!(parse_executable_document("query Hero").is_err());
}

// =============================================================================
// Fragment definitions
// =============================================================================

#[test]
fn fragment_definition() {
    let document = parse_document("fragment heroFields on Character { name appearsIn }");
    match &document.definitions[0] {
        ExecutableDefinition::Fragment(fragment) => {
            assert_eq!(fragment.name.as_str(), "heroFields");
            assert_eq!(fragment.type_condition.name.name.as_str(), "Character");
            assert_eq!(fragment.selection_set.selections.len(), 2);
        }
        other => panic!("Expected a fragment definition, got: {other:?}"),
    }
}

/// A fragment definition's name must not be `on`.
#[test]
fn fragment_definition_named_on_fails() {
    assert!(parse_executable_document("fragment on on Character { name }").is_err());
}

#[test]
fn fragment_definition_requires_type_condition() {
    assert!(parse_executable_document("fragment heroFields { name }").is_err());
}

// =============================================================================
// Documents
// =============================================================================

/// Definitions separate by trivia alone.
#[test]
fn document_multiple_definitions() {
    let document = parse_document(
        "query Hero { hero { ...heroFields } }\n\n\
         fragment heroFields on Character { name }\n",
    );
    assert_eq!(document.definitions.len(), 2);
    assert!(matches!(
        document.definitions[0],
        ExecutableDefinition::Operation(_),
    ));
    assert!(matches!(
        document.definitions[1],
        ExecutableDefinition::Fragment(_),
    ));
}

/// Leading and trailing trivia (comments included) are permitted.
#[test]
fn document_surrounding_trivia() {
    let document = parse_document("# header\n\nquery { hero }\n\n# footer\n");
    assert_eq!(document.definitions.len(), 1);
}

/// An input of nothing but trivia is an empty document.
#[test]
fn document_empty() {
    assert!(parse_document("").definitions.is_empty());
    assert!(parse_document("  # just a comment\n").definitions.is_empty());
}

/// Anything after the last definition that is not trivia fails the whole
/// parse; there is no partial-result mode.
#[test]
fn document_trailing_garbage_fails() {
    assert!(parse_executable_document("query { hero } %%%").is_err());
}

#[test]
fn document_unknown_keyword_fails() {
    assert!(parse_executable_document("type Query { hero: Hero }").is_err());
}

/// A fuller document exercising most productions at once.
#[test]
fn document_kitchen_sink() {
    let source = r#"
        # Star Wars, naturally.
        query HeroForEpisode($ep: Episode = JEDI, $withFriends: Boolean!) {
            hero(episode: $ep) {
                name
                ... on Droid {
                    primaryFunction
                }
                ...friendFields @include(if: $withFriends)
            }
            search(text: "r2", filters: { kinds: [DROID, HUMAN], limit: 2.5 })
        }

        mutation CreateReview($review: ReviewInput!) {
            createReview(episode: $ep, review: $review) {
                stars
                commentary
            }
        }

        fragment friendFields on Character {
            friends {
                totalCount: count
            }
        }
    "#;
    let document = parse_document(source);
    assert_eq!(document.definitions.len(), 3);
}
