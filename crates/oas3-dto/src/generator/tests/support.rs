use serde_json::json;

use crate::{
  generator::{
    errors::GeneratorError,
    schema_graph::{SchemaGraph, SchemaKind, SchemaNode},
  },
  utils::spec::RawDocument,
};

pub(super) fn document(value: serde_json::Value) -> RawDocument {
  serde_json::from_value(value).expect("test document should deserialize")
}

/// Builds a graph from a `components.schemas` JSON object, going through the
/// real document model so tests exercise the same path as production input.
pub(super) fn graph(schemas: serde_json::Value) -> SchemaGraph {
  try_graph(schemas).expect("test graph should build")
}

pub(super) fn try_graph(schemas: serde_json::Value) -> Result<SchemaGraph, GeneratorError> {
  let document = document(json!({ "components": { "schemas": schemas } }));
  SchemaGraph::from_document(&document)
}

/// Fetches a named schema's property node for type-mapper tests.
pub(super) fn property<'g>(graph: &'g SchemaGraph, schema: &str, property: &str) -> &'g SchemaNode {
  let node = graph.get(schema).expect("schema should exist");
  match &node.kind {
    SchemaKind::Object { properties } => properties.get(property).expect("property should exist"),
    SchemaKind::Composed { inline, .. } => inline.get(property).expect("inline property should exist"),
    _ => panic!("schema '{schema}' has no properties"),
  }
}
