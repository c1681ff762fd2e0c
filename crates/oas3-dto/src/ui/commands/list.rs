use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::schema_graph::{SchemaGraph, SchemaKind},
  ui::{Colors, colors::IntoComfyColor, term_width},
  utils::spec::SpecLoader,
};

fn describe_kind(kind: &SchemaKind) -> (String, usize) {
  match kind {
    SchemaKind::Scalar(scalar) => (format!("scalar ({scalar})"), 0),
    SchemaKind::Object { properties } => ("object".to_string(), properties.len()),
    SchemaKind::Array { .. } => ("array".to_string(), 0),
    SchemaKind::Composed { kind, members, inline } => (format!("{kind} ({} members)", members.len()), inline.len()),
    SchemaKind::Reference { target } => (format!("ref -> {target}"), 0),
    SchemaKind::Unknown { .. } => ("unknown".to_string(), 0),
  }
}

pub async fn list_schemas(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let document = SpecLoader::open(input).await?.parse()?;
  let graph = SchemaGraph::from_document(&document)?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  header.add_cell(Cell::new("SCHEMA").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("KIND").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("PROPERTIES").fg(IntoComfyColor::into(colors.label())));
  table.set_header(header);

  for name in graph.schema_names() {
    let Some(schema) = graph.get(name) else {
      continue;
    };
    let (kind, property_count) = describe_kind(&schema.kind);

    let mut row = Row::new();
    row.add_cell(
      Cell::new(name)
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(kind).fg(IntoComfyColor::into(colors.primary())));
    row.add_cell(
      Cell::new(property_count)
        .fg(IntoComfyColor::into(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
