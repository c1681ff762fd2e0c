use serde_json::json;

use super::support::{graph, property};
use crate::generator::{
  errors::GeneratorError,
  type_mapper::{PrimitiveType, TypeDescriptor, TypeMapper},
};

#[test]
fn scalars_map_to_canonical_primitives() {
  let graph = graph(json!({
    "Sample": {
      "type": "object",
      "properties": {
        "name": { "type": "string" },
        "count": { "type": "integer" },
        "active": { "type": "boolean" },
        "ratio": { "type": "number" },
        "weight": { "type": "number", "format": "double" },
        "day": { "type": "string", "format": "date" },
        "at": { "type": "string", "format": "date-time" }
      }
    }
  }));

  let cases = [
    ("name", PrimitiveType::String),
    ("count", PrimitiveType::Int),
    ("active", PrimitiveType::Bool),
    ("ratio", PrimitiveType::Float),
    ("weight", PrimitiveType::Float),
    ("day", PrimitiveType::DateTime),
    ("at", PrimitiveType::DateTime),
  ];

  for (name, expected) in cases {
    let descriptor = TypeMapper::map_type(property(&graph, "Sample", name), name, "Sample").unwrap();
    assert_eq!(descriptor, TypeDescriptor::Primitive(expected), "property '{name}'");
  }
}

#[test]
fn reference_property_maps_to_named_type() {
  let graph = graph(json!({
    "Error": { "type": "object", "properties": { "message": { "type": "string" } } },
    "Response": {
      "type": "object",
      "properties": {
        "error": { "$ref": "#/components/schemas/Error" }
      }
    }
  }));

  let descriptor = TypeMapper::map_type(property(&graph, "Response", "error"), "error", "Response").unwrap();
  assert_eq!(descriptor, TypeDescriptor::Named("Error".to_string()));
}

#[test]
fn any_of_references_produce_union_in_first_seen_order() {
  let graph = graph(json!({
    "Me": { "type": "object" },
    "User": { "type": "object" },
    "Event": {
      "type": "object",
      "properties": {
        "origin": {
          "anyOf": [
            { "$ref": "#/components/schemas/Me" },
            { "$ref": "#/components/schemas/User" }
          ]
        }
      }
    }
  }));

  let descriptor = TypeMapper::map_type(property(&graph, "Event", "origin"), "origin", "Event").unwrap();
  assert_eq!(
    descriptor,
    TypeDescriptor::Union(vec!["Me".to_string(), "User".to_string()])
  );
}

#[test]
fn union_member_order_is_stable_across_runs() {
  let graph = graph(json!({
    "User": { "type": "object" },
    "Me": { "type": "object" },
    "Event": {
      "type": "object",
      "properties": {
        "origin": {
          "oneOf": [
            { "$ref": "#/components/schemas/User" },
            { "$ref": "#/components/schemas/Me" }
          ]
        }
      }
    }
  }));

  for _ in 0..3 {
    let descriptor = TypeMapper::map_type(property(&graph, "Event", "origin"), "origin", "Event").unwrap();
    assert_eq!(
      descriptor,
      TypeDescriptor::Union(vec!["User".to_string(), "Me".to_string()])
    );
  }
}

#[test]
fn duplicate_union_members_collapse_to_named() {
  let graph = graph(json!({
    "Me": { "type": "object" },
    "Event": {
      "type": "object",
      "properties": {
        "origin": {
          "anyOf": [
            { "$ref": "#/components/schemas/Me" },
            { "$ref": "#/components/schemas/Me" }
          ]
        }
      }
    }
  }));

  let descriptor = TypeMapper::map_type(property(&graph, "Event", "origin"), "origin", "Event").unwrap();
  assert_eq!(descriptor, TypeDescriptor::Named("Me".to_string()));
}

#[test]
fn scalar_union_members_contribute_primitive_names() {
  let graph = graph(json!({
    "Me": { "type": "object" },
    "Event": {
      "type": "object",
      "properties": {
        "origin": {
          "anyOf": [
            { "$ref": "#/components/schemas/Me" },
            { "type": "string" }
          ]
        }
      }
    }
  }));

  let descriptor = TypeMapper::map_type(property(&graph, "Event", "origin"), "origin", "Event").unwrap();
  assert_eq!(
    descriptor,
    TypeDescriptor::Union(vec!["Me".to_string(), "string".to_string()])
  );
}

#[test]
fn inline_object_union_member_takes_property_derived_name() {
  let graph = graph(json!({
    "Me": { "type": "object" },
    "Event": {
      "type": "object",
      "properties": {
        "payload_body": {
          "anyOf": [
            { "$ref": "#/components/schemas/Me" },
            { "type": "object", "properties": { "raw": { "type": "string" } } }
          ]
        }
      }
    }
  }));

  let descriptor = TypeMapper::map_type(property(&graph, "Event", "payload_body"), "payload_body", "Event").unwrap();
  assert_eq!(
    descriptor,
    TypeDescriptor::Union(vec!["Me".to_string(), "PayloadBody".to_string()])
  );
}

#[test]
fn inline_object_property_maps_to_normalized_property_name() {
  let graph = graph(json!({
    "Account": {
      "type": "object",
      "properties": {
        "billing_address": {
          "type": "object",
          "properties": { "street": { "type": "string" } }
        }
      }
    }
  }));

  let descriptor =
    TypeMapper::map_type(property(&graph, "Account", "billing_address"), "billing_address", "Account").unwrap();
  assert_eq!(descriptor, TypeDescriptor::Named("BillingAddress".to_string()));
}

#[test]
fn absent_type_is_an_unhandled_type_error() {
  let graph = graph(json!({
    "Mystery": {
      "type": "object",
      "properties": {
        "blob": { "description": "no type declared" }
      }
    }
  }));

  let err = TypeMapper::map_type(property(&graph, "Mystery", "blob"), "blob", "Mystery").unwrap_err();
  assert_eq!(
    err,
    GeneratorError::UnhandledType {
      type_name: "<absent>".to_string(),
      property: "blob".to_string(),
      schema: "Mystery".to_string(),
    }
  );
}

#[test]
fn unrecognized_type_reports_the_declared_string() {
  let graph = graph(json!({
    "Mystery": {
      "type": "object",
      "properties": {
        "blob": { "type": "binary" }
      }
    }
  }));

  let err = TypeMapper::map_type(property(&graph, "Mystery", "blob"), "blob", "Mystery").unwrap_err();
  assert_eq!(
    err,
    GeneratorError::UnhandledType {
      type_name: "binary".to_string(),
      property: "blob".to_string(),
      schema: "Mystery".to_string(),
    }
  );
}

#[test]
fn not_keyword_on_a_property_is_unsupported() {
  let graph = graph(json!({
    "Strange": {
      "type": "object",
      "properties": {
        "never": { "not": { "type": "string" } }
      }
    }
  }));

  let err = TypeMapper::map_type(property(&graph, "Strange", "never"), "never", "Strange").unwrap_err();
  assert_eq!(
    err,
    GeneratorError::UnsupportedComposition {
      schema: "Strange".to_string(),
      keyword: "not".to_string(),
    }
  );
}
