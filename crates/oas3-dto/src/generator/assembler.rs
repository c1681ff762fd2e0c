use std::collections::HashMap;

use super::{errors::GeneratorError, schema_graph::SchemaGraph, synthesizer::{FieldDefinition, PropertySynthesizer}};
use crate::naming::identifiers::normalize;

/// One canonical type definition, ready for the printer. Built once, never
/// mutated afterward.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ClassDefinition {
  pub(crate) name: String,
  pub(crate) description: Option<String>,
  pub(crate) fields: Vec<FieldDefinition>,
}

/// Builds one [`ClassDefinition`] per named schema, in the document's
/// declaration order. Nested classes discovered during synthesis are
/// appended directly after their parent.
///
/// Output is deterministic: re-running on an unchanged graph produces an
/// identical sequence. Errors from lower layers propagate unchanged; a
/// single schema's failure aborts the whole run.
pub(crate) struct ClassAssembler<'g> {
  graph: &'g SchemaGraph,
}

impl<'g> ClassAssembler<'g> {
  pub(crate) fn new(graph: &'g SchemaGraph) -> Self {
    Self { graph }
  }

  pub(crate) fn assemble(&self) -> Result<Vec<ClassDefinition>, GeneratorError> {
    let synthesizer = PropertySynthesizer::new(self.graph);

    let mut classes = Vec::with_capacity(self.graph.len());
    // class name -> source schema, for collision reporting
    let mut origins: HashMap<String, String> = HashMap::with_capacity(self.graph.len());

    for schema_name in self.graph.schema_names() {
      let Some(schema) = self.graph.get(schema_name) else {
        continue;
      };

      let output = synthesizer.synthesize(schema_name, schema)?;
      let class = ClassDefinition {
        name: normalize(schema_name),
        description: schema.description.clone(),
        fields: output.fields,
      };

      for class in std::iter::once(class).chain(output.nested) {
        if let Some(existing) = origins.insert(class.name.clone(), schema_name.clone()) {
          return Err(GeneratorError::DuplicateClassName {
            name: class.name,
            schema: schema_name.clone(),
            existing,
          });
        }
        classes.push(class);
      }
    }

    Ok(classes)
  }
}
