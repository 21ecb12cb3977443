//! Tests for the kind-refinement projections.

use crate::refine::EnumType;
use crate::refine::InputObjectType;
use crate::refine::InterfaceType;
use crate::refine::ListType;
use crate::refine::NonNullType;
use crate::refine::ObjectType;
use crate::refine::ScalarName;
use crate::refine::ScalarType;
use crate::refine::UnionType;
use crate::tests::utils::type_from_json;
use crate::IntrospectionError;
use crate::TypeKind;
use proptest::prelude::*;
use serde_json::json;

// =============================================================================
// Wrong-kind gating
// =============================================================================

/// Every projection fails with `TypeConstruction` naming the kind it
/// required when handed a node of a different kind.
#[test]
fn wrong_kind_names_expected_kind() {
    let scalar = type_from_json(json!({ "kind": "SCALAR", "name": "Int" }));
    let enum_node = type_from_json(json!({
        "kind": "ENUM",
        "name": "Episode",
        "enumValues": [{ "name": "JEDI" }],
    }));

    assert_eq!(
        ObjectType::try_from(&scalar).unwrap_err(),
        IntrospectionError::TypeConstruction { expected: TypeKind::Object },
    );
    assert_eq!(
        UnionType::try_from(&scalar).unwrap_err(),
        IntrospectionError::TypeConstruction { expected: TypeKind::Union },
    );
    assert_eq!(
        ScalarType::try_from(&enum_node).unwrap_err(),
        IntrospectionError::TypeConstruction { expected: TypeKind::Scalar },
    );
    assert_eq!(
        NonNullType::try_from(&enum_node).unwrap_err(),
        IntrospectionError::TypeConstruction { expected: TypeKind::NonNull },
    );
}

/// The error message names the expected kind on the wire spelling.
#[test]
fn type_construction_message() {
    let err = IntrospectionError::TypeConstruction { expected: TypeKind::InputObject };
    assert_eq!(err.to_string(), "kind of type is not INPUT_OBJECT");
}

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn scalar_projection() {
    let ty = type_from_json(json!({
        "kind": "SCALAR",
        "name": "DateTime",
        "specifiedByURL": "https://scalars.example/date-time",
    }));
    let scalar = ScalarType::try_from(&ty).unwrap();
    assert_eq!(scalar.name, ScalarName::Custom("DateTime".to_string()));
    assert!(scalar.specified_by_url.is_some());
}

/// The five built-in scalar names map to their recognized variants; any
/// other name is custom and round-trips exactly.
#[test]
fn scalar_name_union() {
    assert_eq!(ScalarName::from("Int"), ScalarName::Int);
    assert_eq!(ScalarName::from("Float"), ScalarName::Float);
    assert_eq!(ScalarName::from("String"), ScalarName::String);
    assert_eq!(ScalarName::from("Boolean"), ScalarName::Boolean);
    assert_eq!(ScalarName::from("ID"), ScalarName::Id);
    assert!(ScalarName::from("Int").is_builtin());

    let custom = ScalarName::from("JSON");
    assert_eq!(custom, ScalarName::Custom("JSON".to_string()));
    assert!(!custom.is_builtin());
    assert_eq!(custom.to_string(), "JSON");
}

proptest! {
    /// Any name survives the closed-or-open union unchanged.
    #[test]
    fn scalar_name_round_trips(name in "[0-9A-Za-z_]{1,24}") {
        prop_assert_eq!(ScalarName::from(name.as_str()).to_string(), name);
    }
}

#[test]
fn scalar_missing_name_fails() {
    let ty = type_from_json(json!({ "kind": "SCALAR" }));
    assert!(matches!(
        ScalarType::try_from(&ty),
        Err(IntrospectionError::General(_)),
    ));
}

// =============================================================================
// Objects, interfaces, unions
// =============================================================================

#[test]
fn object_projection() {
    let ty = type_from_json(json!({
        "kind": "OBJECT",
        "name": "Droid",
        "fields": [
            { "name": "name", "type": { "kind": "SCALAR", "name": "String" } },
        ],
        "interfaces": [{ "kind": "INTERFACE", "name": "Character" }],
    }));
    let object = ObjectType::try_from(&ty).unwrap();
    assert_eq!(object.name, "Droid");
    assert_eq!(object.fields.len(), 1);
    assert_eq!(object.interfaces.len(), 1);
}

/// Objects require both `fields` and `interfaces`.
#[test]
fn object_missing_required_fields_fails() {
    let ty = type_from_json(json!({ "kind": "OBJECT", "name": "Droid" }));
    assert!(matches!(
        ObjectType::try_from(&ty),
        Err(IntrospectionError::General(_)),
    ));

    let ty = type_from_json(json!({
        "kind": "OBJECT",
        "name": "Droid",
        "fields": [],
    }));
    let err = ObjectType::try_from(&ty).unwrap_err();
    assert!(err.to_string().contains("interfaces"), "unexpected error: {err}");
}

/// Interfaces require `fields`; absent `interfaces`/`possibleTypes`
/// project as empty.
#[test]
fn interface_projection_defaults() {
    let ty = type_from_json(json!({
        "kind": "INTERFACE",
        "name": "Node",
        "fields": [
            { "name": "id", "type": { "kind": "SCALAR", "name": "ID" } },
        ],
    }));
    let interface = InterfaceType::try_from(&ty).unwrap();
    assert!(interface.interfaces.is_empty());
    assert!(interface.possible_types.is_empty());

    let ty = type_from_json(json!({ "kind": "INTERFACE", "name": "Node" }));
    assert!(InterfaceType::try_from(&ty).is_err());
}

/// A union's `possibleTypes` must be present but may be empty.
#[test]
fn union_projection() {
    let ty = type_from_json(json!({
        "kind": "UNION",
        "name": "SearchResult",
        "possibleTypes": [
            { "kind": "OBJECT", "name": "Human" },
            { "kind": "OBJECT", "name": "Droid" },
        ],
    }));
    let union = UnionType::try_from(&ty).unwrap();
    assert_eq!(union.possible_types.len(), 2);

    let empty = type_from_json(json!({
        "kind": "UNION",
        "name": "Nothing",
        "possibleTypes": [],
    }));
    assert!(UnionType::try_from(&empty).unwrap().possible_types.is_empty());

    let missing = type_from_json(json!({ "kind": "UNION", "name": "Broken" }));
    assert!(UnionType::try_from(&missing).is_err());
}

// =============================================================================
// Enums & input objects
// =============================================================================

#[test]
fn enum_projection() {
    let ty = type_from_json(json!({
        "kind": "ENUM",
        "name": "Episode",
        "enumValues": [
            { "name": "NEWHOPE" },
            { "name": "EMPIRE" },
            { "name": "JEDI" },
        ],
    }));
    let enum_type = EnumType::try_from(&ty).unwrap();
    assert_eq!(enum_type.enum_values.len(), 3);
}

/// An enum must have at least one value.
#[test]
fn enum_without_values_fails() {
    let ty = type_from_json(json!({
        "kind": "ENUM",
        "name": "Empty",
        "enumValues": [],
    }));
    let err = EnumType::try_from(&ty).unwrap_err();
    assert!(err.to_string().contains("no values"), "unexpected error: {err}");
}

/// Enum value names must be unique.
#[test]
fn enum_with_duplicate_values_fails() {
    let ty = type_from_json(json!({
        "kind": "ENUM",
        "name": "Episode",
        "enumValues": [{ "name": "JEDI" }, { "name": "JEDI" }],
    }));
    let err = EnumType::try_from(&ty).unwrap_err();
    assert!(err.to_string().contains("duplicate"), "unexpected error: {err}");
}

#[test]
fn input_object_projection() {
    let ty = type_from_json(json!({
        "kind": "INPUT_OBJECT",
        "name": "ReviewInput",
        "inputFields": [
            {
                "name": "stars",
                "type": {
                    "kind": "NON_NULL",
                    "ofType": { "kind": "SCALAR", "name": "Int" },
                },
            },
        ],
    }));
    let input_object = InputObjectType::try_from(&ty).unwrap();
    assert_eq!(input_object.input_fields[0].name, "stars");

    let missing = type_from_json(json!({ "kind": "INPUT_OBJECT", "name": "Broken" }));
    assert!(InputObjectType::try_from(&missing).is_err());
}

// =============================================================================
// Wrappers
// =============================================================================

#[test]
fn list_projection() {
    let ty = type_from_json(json!({
        "kind": "LIST",
        "ofType": { "kind": "SCALAR", "name": "Int" },
    }));
    let list = ListType::try_from(&ty).unwrap();
    assert_eq!(list.of_type.name(), Some("Int"));
}

#[test]
fn non_null_projection() {
    let ty = type_from_json(json!({
        "kind": "NON_NULL",
        "ofType": {
            "kind": "LIST",
            "ofType": { "kind": "SCALAR", "name": "Int" },
        },
    }));
    let non_null = NonNullType::try_from(&ty).unwrap();
    assert_eq!(non_null.of_type.kind(), TypeKind::List);
}

/// Non-null does not nest.
#[test]
fn non_null_of_non_null_fails() {
    let ty = type_from_json(json!({
        "kind": "NON_NULL",
        "ofType": {
            "kind": "NON_NULL",
            "ofType": { "kind": "SCALAR", "name": "Int" },
        },
    }));
    let err = NonNullType::try_from(&ty).unwrap_err();
    assert!(
        err.to_string().contains("NON_NULL"),
        "unexpected error: {err}",
    );
}
