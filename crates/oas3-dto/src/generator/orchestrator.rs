//! Orchestration for the schema-to-DTO generation pipeline.
//!
//! The orchestrator owns the full run: build the schema graph, assemble one
//! class per named schema, render every class through the PHP printer. All
//! rendering happens in memory; the caller only writes files once the whole
//! run has succeeded, so a failing schema never leaves partial output behind.

use super::{assembler::ClassAssembler, errors::GeneratorError, schema_graph::SchemaGraph, type_mapper::TypeDescriptor};
use crate::{printer::php::PhpPrinter, utils::spec::RawDocument};

#[derive(Debug)]
pub struct Orchestrator {
  graph: SchemaGraph,
  namespace: String,
}

/// One rendered source unit, named by the 1:1 class/file contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
  pub name: String,
  pub source: String,
}

/// Statistics about the generation run.
#[derive(Debug)]
pub struct GenerationStats {
  /// Total classes generated, including extracted inline classes
  pub classes_generated: usize,
  /// Total fields across all generated classes
  pub fields_generated: usize,
  /// Classes extracted from inline object properties
  pub nested_classes: usize,
  /// Fields typed as a union
  pub union_fields: usize,
}

impl Orchestrator {
  /// Builds the schema graph up front; reference and format errors surface
  /// here, before any per-schema work starts.
  pub fn new(document: &RawDocument, namespace: impl Into<String>) -> Result<Self, GeneratorError> {
    Ok(Self {
      graph: SchemaGraph::from_document(document)?,
      namespace: namespace.into(),
    })
  }

  pub fn schema_count(&self) -> usize {
    self.graph.len()
  }

  pub fn generate(&self) -> Result<(Vec<GeneratedFile>, GenerationStats), GeneratorError> {
    let classes = ClassAssembler::new(&self.graph).assemble()?;
    let printer = PhpPrinter::new(self.namespace.clone());

    let files = classes
      .iter()
      .map(|class| GeneratedFile {
        name: PhpPrinter::file_name(class),
        source: printer.render(class),
      })
      .collect();

    let fields_generated = classes.iter().map(|c| c.fields.len()).sum();
    let union_fields = classes
      .iter()
      .flat_map(|c| &c.fields)
      .filter(|f| matches!(f.ty, TypeDescriptor::Union(_)))
      .count();

    let stats = GenerationStats {
      classes_generated: classes.len(),
      fields_generated,
      nested_classes: classes.len() - self.graph.len(),
      union_fields,
    };

    Ok((files, stats))
  }
}
