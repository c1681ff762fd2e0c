use indexmap::IndexMap;

use super::{
  assembler::ClassDefinition,
  errors::GeneratorError,
  resolver::CompositionResolver,
  schema_graph::{SchemaGraph, SchemaKind, SchemaNode},
  type_mapper::{TypeDescriptor, TypeMapper},
};
use crate::naming::identifiers::{normalize, to_property_name};

/// One generated DTO field.
///
/// `read_only` is always true: generated fields are immutable by design.
/// `nullable` defaults to true unless the source marks the property
/// otherwise.
#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub(crate) struct FieldDefinition {
  /// Property key as declared in the source document.
  #[builder(into)]
  pub(crate) name: String,
  /// Sanitized target-language property name.
  #[builder(into)]
  pub(crate) php_name: String,
  pub(crate) ty: TypeDescriptor,
  #[builder(default = true)]
  pub(crate) nullable: bool,
  #[builder(default = true)]
  pub(crate) read_only: bool,
  pub(crate) description: Option<String>,
  pub(crate) default_value: Option<serde_json::Value>,
}

pub(crate) struct SynthesisOutput {
  pub(crate) fields: Vec<FieldDefinition>,
  /// Classes extracted from inline object properties, in discovery order.
  pub(crate) nested: Vec<ClassDefinition>,
}

/// Merges the properties contributed by a schema's resolved composition
/// branches into one ordered field list.
pub(crate) struct PropertySynthesizer<'g> {
  resolver: CompositionResolver<'g>,
}

impl<'g> PropertySynthesizer<'g> {
  pub(crate) fn new(graph: &'g SchemaGraph) -> Self {
    Self {
      resolver: CompositionResolver::new(graph),
    }
  }

  /// Field merge is last-write-wins on name collision: a later `allOf`
  /// branch refines what an earlier one declared. The first occurrence keeps
  /// its position in the field order.
  ///
  /// Inline object properties are never flattened into the parent; each
  /// becomes its own class under the derived name, and the parent field
  /// references that class by name.
  pub(crate) fn synthesize(&self, schema_name: &str, schema: &'g SchemaNode) -> Result<SynthesisOutput, GeneratorError> {
    let leaves = self.resolver.resolve(schema)?;

    let mut merged: IndexMap<&'g str, &'g SchemaNode> = IndexMap::new();
    for leaf in leaves {
      let properties = match &leaf.kind {
        SchemaKind::Object { properties } => properties,
        SchemaKind::Composed { inline, .. } => inline,
        _ => continue,
      };
      for (prop_name, prop) in properties {
        merged.insert(prop_name.as_str(), prop);
      }
    }

    let mut fields = Vec::with_capacity(merged.len());
    let mut nested = Vec::new();

    for (prop_name, prop) in merged {
      let ty = match &prop.kind {
        SchemaKind::Object { .. } => {
          let derived = normalize(prop.name.as_deref().unwrap_or(prop_name));
          let output = self.synthesize(&derived, prop)?;
          nested.push(ClassDefinition {
            name: derived.clone(),
            description: prop.description.clone(),
            fields: output.fields,
          });
          nested.extend(output.nested);
          TypeDescriptor::Named(derived)
        }
        _ => TypeMapper::map_type(prop, prop_name, schema_name)?,
      };

      fields.push(
        FieldDefinition::builder()
          .name(prop_name)
          .php_name(to_property_name(prop_name))
          .ty(ty)
          .nullable(prop.nullable.unwrap_or(true))
          .maybe_description(prop.description.clone())
          .maybe_default_value(prop.default_value.clone())
          .build(),
      );
    }

    Ok(SynthesisOutput { fields, nested })
  }
}
