use super::{
  errors::GeneratorError,
  schema_graph::{CompositionKind, SchemaKind, SchemaNode, ScalarType},
};
use crate::naming::identifiers::normalize;

/// Canonical primitive names shared by the engine and the printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub(crate) enum PrimitiveType {
  #[strum(serialize = "string")]
  String,
  #[strum(serialize = "int")]
  Int,
  #[strum(serialize = "bool")]
  Bool,
  #[strum(serialize = "float")]
  Float,
  #[strum(serialize = "date-time")]
  DateTime,
}

/// Canonical output type for one field.
///
/// `Union` always holds at least two distinct names in first-seen order;
/// single-member unions collapse to `Named` at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TypeDescriptor {
  Primitive(PrimitiveType),
  Named(String),
  Union(Vec<String>),
}

impl TypeDescriptor {
  /// Builds a descriptor from an ordered name set, collapsing single-member
  /// unions.
  fn from_names(mut names: Vec<String>) -> Self {
    if names.len() == 1 {
      Self::Named(names.remove(0))
    } else {
      Self::Union(names)
    }
  }
}

/// Maps a single property's declared shape to a [`TypeDescriptor`].
pub(crate) struct TypeMapper;

impl TypeMapper {
  /// Mapping rules, in priority order: composition members become a union
  /// (or a single named type), scalars map to canonical primitives,
  /// references and object/array shapes become named types. Anything left
  /// over is an `UnhandledType` error.
  pub(crate) fn map_type(
    property: &SchemaNode,
    property_name: &str,
    enclosing_schema: &str,
  ) -> Result<TypeDescriptor, GeneratorError> {
    if let SchemaKind::Composed { kind, members, .. } = &property.kind {
      if *kind == CompositionKind::Not {
        return Err(GeneratorError::UnsupportedComposition {
          schema: enclosing_schema.to_string(),
          keyword: kind.to_string(),
        });
      }

      if !members.is_empty() {
        let mut names: Vec<String> = Vec::with_capacity(members.len());
        for member in members {
          let name = Self::referenced_type_name(member, property_name, enclosing_schema)?;
          if !names.contains(&name) {
            names.push(name);
          }
        }
        return Ok(TypeDescriptor::from_names(names));
      }
    }

    match &property.kind {
      SchemaKind::Scalar(scalar) => Ok(TypeDescriptor::Primitive(map_scalar(*scalar))),
      SchemaKind::Reference { target } => Ok(TypeDescriptor::Named(normalize(target))),
      SchemaKind::Object { .. } | SchemaKind::Array { .. } => {
        let name = property.name.as_deref().unwrap_or(property_name);
        Ok(TypeDescriptor::Named(normalize(name)))
      }
      SchemaKind::Unknown { declared } => Err(GeneratorError::UnhandledType {
        type_name: declared.clone().unwrap_or_else(|| "<absent>".to_string()),
        property: property_name.to_string(),
        schema: enclosing_schema.to_string(),
      }),
      // Reached only with empty members; the resolver defines empty members
      // for schema-level resolution, a property needs a concrete shape.
      SchemaKind::Composed { .. } => Err(GeneratorError::UnhandledType {
        type_name: "<empty composition>".to_string(),
        property: property_name.to_string(),
        schema: enclosing_schema.to_string(),
      }),
    }
  }

  /// The type name a composition member contributes to a union: the last
  /// `$ref` path segment for references, the schema's own name for named
  /// nodes, the name derived from the property for inline composed/object
  /// members, and the canonical primitive name for scalars.
  fn referenced_type_name(
    member: &SchemaNode,
    property_name: &str,
    enclosing_schema: &str,
  ) -> Result<String, GeneratorError> {
    if let Some(name) = &member.name {
      return Ok(normalize(name));
    }

    match &member.kind {
      SchemaKind::Reference { target } => Ok(normalize(target)),
      SchemaKind::Composed { .. } | SchemaKind::Object { .. } | SchemaKind::Array { .. } => Ok(normalize(property_name)),
      SchemaKind::Scalar(scalar) => Ok(map_scalar(*scalar).to_string()),
      SchemaKind::Unknown { declared } => Err(GeneratorError::UnhandledType {
        type_name: declared.clone().unwrap_or_else(|| "<absent>".to_string()),
        property: property_name.to_string(),
        schema: enclosing_schema.to_string(),
      }),
    }
  }
}

const fn map_scalar(scalar: ScalarType) -> PrimitiveType {
  match scalar {
    ScalarType::String => PrimitiveType::String,
    ScalarType::Integer => PrimitiveType::Int,
    ScalarType::Boolean => PrimitiveType::Bool,
    ScalarType::Number => PrimitiveType::Float,
    ScalarType::Date | ScalarType::DateTime => PrimitiveType::DateTime,
  }
}
