use indexmap::IndexMap;

use super::errors::GeneratorError;
use crate::utils::spec::{RawDocument, RawSchema};

const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// Scalar shapes the type mapper knows how to translate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub(crate) enum ScalarType {
  #[strum(serialize = "string")]
  String,
  #[strum(serialize = "integer")]
  Integer,
  #[strum(serialize = "boolean")]
  Boolean,
  #[strum(serialize = "number")]
  Number,
  #[strum(serialize = "date")]
  Date,
  #[strum(serialize = "dateTime")]
  DateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub(crate) enum CompositionKind {
  #[strum(serialize = "allOf")]
  AllOf,
  #[strum(serialize = "anyOf")]
  AnyOf,
  #[strum(serialize = "oneOf")]
  OneOf,
  #[strum(serialize = "not")]
  Not,
}

/// Shape discriminant of a schema node, set exactly once at graph
/// construction. All downstream logic switches on this tag rather than
/// probing for keyword presence.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SchemaKind {
  Scalar(ScalarType),
  Object {
    properties: IndexMap<String, SchemaNode>,
  },
  Array {
    items: Option<Box<SchemaNode>>,
  },
  /// A composition keyword with its member schemas. `inline` holds direct
  /// `properties` co-declared alongside the keyword, which the resolver
  /// surfaces as a trailing leaf.
  Composed {
    kind: CompositionKind,
    members: Vec<SchemaNode>,
    inline: IndexMap<String, SchemaNode>,
  },
  Reference {
    target: String,
  },
  /// Declared type absent or unrecognized. Kept in the graph so the type
  /// mapper can report it with the property and enclosing schema names.
  Unknown {
    declared: Option<String>,
  },
}

/// A node in the resolved schema graph.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SchemaNode {
  /// Present for named component schemas; anonymous nodes occur inside
  /// properties and composition members.
  pub(crate) name: Option<String>,
  pub(crate) kind: SchemaKind,
  pub(crate) description: Option<String>,
  pub(crate) default_value: Option<serde_json::Value>,
  pub(crate) nullable: Option<bool>,
}

/// The read-only graph of named schemas, in document declaration order.
#[derive(Debug, Clone)]
pub(crate) struct SchemaGraph {
  schemas: IndexMap<String, SchemaNode>,
}

impl SchemaGraph {
  pub(crate) fn from_document(document: &RawDocument) -> Result<Self, GeneratorError> {
    let mut schemas = IndexMap::new();

    for (name, raw) in &document.components.schemas {
      let node = convert_schema(Some(name.clone()), raw, name)?;
      schemas.insert(name.clone(), node);
    }

    let graph = Self { schemas };
    graph.validate_references()?;
    Ok(graph)
  }

  pub(crate) fn get(&self, name: &str) -> Option<&SchemaNode> {
    self.schemas.get(name)
  }

  pub(crate) fn contains(&self, name: &str) -> bool {
    self.schemas.contains_key(name)
  }

  /// Named schemas in declaration order.
  pub(crate) fn schema_names(&self) -> impl Iterator<Item = &String> {
    self.schemas.keys()
  }

  pub(crate) fn len(&self) -> usize {
    self.schemas.len()
  }

  /// Every reference in the graph must point at a named schema in this
  /// document. Checked once up front so the resolver can treat a missing
  /// target as unreachable-by-construction rather than a late surprise.
  fn validate_references(&self) -> Result<(), GeneratorError> {
    for (name, node) in &self.schemas {
      self.validate_node(node, name)?;
    }
    Ok(())
  }

  fn validate_node(&self, node: &SchemaNode, path: &str) -> Result<(), GeneratorError> {
    match &node.kind {
      SchemaKind::Reference { target } => {
        if !self.contains(target) {
          return Err(GeneratorError::UnresolvableReference {
            reference: format!("{SCHEMA_REF_PREFIX}{target}"),
            path: path.to_string(),
          });
        }
      }
      SchemaKind::Object { properties } => {
        for (prop_name, prop) in properties {
          self.validate_node(prop, &format!("{path}.{prop_name}"))?;
        }
      }
      SchemaKind::Array { items } => {
        if let Some(items) = items {
          self.validate_node(items, &format!("{path}.items"))?;
        }
      }
      SchemaKind::Composed { kind, members, inline } => {
        for (i, member) in members.iter().enumerate() {
          self.validate_node(member, &format!("{path}.{kind}[{i}]"))?;
        }
        for (prop_name, prop) in inline {
          self.validate_node(prop, &format!("{path}.{prop_name}"))?;
        }
      }
      SchemaKind::Scalar(_) | SchemaKind::Unknown { .. } => {}
    }
    Ok(())
  }
}

/// Extract the schema name from a `$ref` string. Anything outside the
/// document's own components section is a hard error.
fn extract_ref_name(ref_string: &str, path: &str) -> Result<String, GeneratorError> {
  ref_string
    .strip_prefix(SCHEMA_REF_PREFIX)
    .map(ToString::to_string)
    .ok_or_else(|| GeneratorError::UnresolvableReference {
      reference: ref_string.to_string(),
      path: path.to_string(),
    })
}

fn convert_schema(name: Option<String>, raw: &RawSchema, path: &str) -> Result<SchemaNode, GeneratorError> {
  let kind = classify(raw, path)?;

  Ok(SchemaNode {
    name,
    kind,
    description: raw.description.clone(),
    default_value: raw.default_value.clone(),
    nullable: raw.nullable,
  })
}

fn convert_properties(raw: &IndexMap<String, RawSchema>, path: &str) -> Result<IndexMap<String, SchemaNode>, GeneratorError> {
  let mut properties = IndexMap::with_capacity(raw.len());
  for (prop_name, prop) in raw {
    let node = convert_schema(None, prop, &format!("{path}.{prop_name}"))?;
    properties.insert(prop_name.clone(), node);
  }
  Ok(properties)
}

fn convert_members(raw: &[RawSchema], path: &str, keyword: CompositionKind) -> Result<Vec<SchemaNode>, GeneratorError> {
  raw
    .iter()
    .enumerate()
    .map(|(i, member)| convert_schema(None, member, &format!("{path}.{keyword}[{i}]")))
    .collect()
}

/// Classifies a raw schema into its kind tag. When several composition
/// keywords are co-declared, `not` wins so it can never be masked, then
/// `allOf`, `oneOf`, `anyOf`.
fn classify(raw: &RawSchema, path: &str) -> Result<SchemaKind, GeneratorError> {
  if let Some(reference) = &raw.reference {
    let target = extract_ref_name(reference, path)?;
    return Ok(SchemaKind::Reference { target });
  }

  if let Some(negated) = &raw.not {
    let member = convert_schema(None, negated, &format!("{path}.not"))?;
    return Ok(SchemaKind::Composed {
      kind: CompositionKind::Not,
      members: vec![member],
      inline: convert_properties(&raw.properties, path)?,
    });
  }

  for (keyword, members) in [
    (CompositionKind::AllOf, &raw.all_of),
    (CompositionKind::OneOf, &raw.one_of),
    (CompositionKind::AnyOf, &raw.any_of),
  ] {
    if !members.is_empty() {
      return Ok(SchemaKind::Composed {
        kind: keyword,
        members: convert_members(members, path, keyword)?,
        inline: convert_properties(&raw.properties, path)?,
      });
    }
  }

  if raw.schema_type.as_deref() == Some("object") || !raw.properties.is_empty() {
    return Ok(SchemaKind::Object {
      properties: convert_properties(&raw.properties, path)?,
    });
  }

  if raw.schema_type.as_deref() == Some("array") {
    let items = match &raw.items {
      Some(items) => Some(Box::new(convert_schema(None, items, &format!("{path}.items"))?)),
      None => None,
    };
    return Ok(SchemaKind::Array { items });
  }

  let scalar = match (raw.schema_type.as_deref(), raw.format.as_deref()) {
    (Some("string"), Some("date")) => Some(ScalarType::Date),
    (Some("string"), Some("date-time")) => Some(ScalarType::DateTime),
    (Some("string"), _) => Some(ScalarType::String),
    (Some("integer"), _) => Some(ScalarType::Integer),
    (Some("boolean"), _) => Some(ScalarType::Boolean),
    (Some("number" | "float" | "double"), _) => Some(ScalarType::Number),
    _ => None,
  };

  match scalar {
    Some(scalar) => Ok(SchemaKind::Scalar(scalar)),
    None => Ok(SchemaKind::Unknown {
      declared: raw.schema_type.clone(),
    }),
  }
}
