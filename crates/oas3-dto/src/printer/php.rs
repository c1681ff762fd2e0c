use std::fmt::Write as _;

use itertools::Itertools;

use crate::generator::{
  assembler::ClassDefinition,
  synthesizer::FieldDefinition,
  type_mapper::{PrimitiveType, TypeDescriptor},
};

const INDENT: &str = "    ";

/// Renders a [`ClassDefinition`] into one PHP source unit: a `final class`
/// with a promoted-readonly constructor, one parameter per field.
///
/// The printer is the only module that knows PHP syntax; the engine hands it
/// finished class definitions and a pass-through namespace.
pub(crate) struct PhpPrinter {
  namespace: String,
}

impl PhpPrinter {
  pub(crate) fn new(namespace: impl Into<String>) -> Self {
    Self {
      namespace: namespace.into(),
    }
  }

  /// Output file name for a class. Type and file naming is 1:1 with the
  /// class name, so downstream code resolves types purely by name matching.
  pub(crate) fn file_name(class: &ClassDefinition) -> String {
    format!("{}.php", class.name)
  }

  pub(crate) fn render(&self, class: &ClassDefinition) -> String {
    let mut out = String::new();

    out.push_str("<?php\n\n");
    out.push_str("declare(strict_types=1);\n\n");
    let _ = writeln!(out, "namespace {};\n", self.namespace);

    if let Some(description) = &class.description {
      push_docblock(&mut out, description, "");
    }

    let _ = writeln!(out, "final class {}", class.name);
    out.push_str("{\n");

    if class.fields.is_empty() {
      out.push_str("}\n");
      return out;
    }

    let _ = writeln!(out, "{INDENT}public function __construct(");
    for field in &class.fields {
      if let Some(description) = &field.description {
        push_docblock(&mut out, description, &INDENT.repeat(2));
      }
      let _ = writeln!(out, "{INDENT}{INDENT}{},", render_parameter(field));
    }
    let _ = writeln!(out, "{INDENT}) {{");
    let _ = writeln!(out, "{INDENT}}}");
    out.push_str("}\n");

    out
  }
}

fn render_parameter(field: &FieldDefinition) -> String {
  let ty = render_type(&field.ty, field.nullable);
  let modifier = if field.read_only { "public readonly " } else { "public " };

  let mut parameter = format!("{modifier}{ty} ${}", field.php_name);

  if let Some(default) = &field.default_value {
    let _ = write!(parameter, " = {}", render_literal(default));
  } else if field.nullable {
    parameter.push_str(" = null");
  }

  parameter
}

fn render_type(ty: &TypeDescriptor, nullable: bool) -> String {
  match ty {
    TypeDescriptor::Primitive(primitive) => {
      let name = render_primitive(*primitive);
      if nullable { format!("?{name}") } else { name.to_string() }
    }
    TypeDescriptor::Named(name) => {
      if nullable {
        format!("?{name}")
      } else {
        name.clone()
      }
    }
    // PHP forbids `?` on union types; nullability joins the union instead.
    TypeDescriptor::Union(names) => {
      let union = names.iter().join("|");
      if nullable { format!("{union}|null") } else { union }
    }
  }
}

const fn render_primitive(primitive: PrimitiveType) -> &'static str {
  match primitive {
    PrimitiveType::String => "string",
    PrimitiveType::Int => "int",
    PrimitiveType::Bool => "bool",
    PrimitiveType::Float => "float",
    PrimitiveType::DateTime => "\\DateTimeInterface",
  }
}

fn render_literal(value: &serde_json::Value) -> String {
  match value {
    serde_json::Value::Null => "null".to_string(),
    serde_json::Value::Bool(b) => b.to_string(),
    serde_json::Value::Number(n) => n.to_string(),
    serde_json::Value::String(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
    // array/object defaults have no literal form in a readonly signature
    serde_json::Value::Array(_) | serde_json::Value::Object(_) => "null".to_string(),
  }
}

fn push_docblock(out: &mut String, description: &str, indent: &str) {
  let _ = writeln!(out, "{indent}/**");
  for line in description.lines() {
    let line = line.trim_end();
    if line.is_empty() {
      let _ = writeln!(out, "{indent} *");
    } else {
      let _ = writeln!(out, "{indent} * {line}");
    }
  }
  let _ = writeln!(out, "{indent} */");
}
