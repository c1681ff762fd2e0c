use thiserror::Error;

/// Terminal errors for a generation run.
///
/// Every variant aborts the run before any file is written; the CLI layer
/// reports the message and chooses the exit status. These are static-input
/// errors, so there is no retry or partial-output path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
  /// A `$ref` that cannot be located inside the document, including any
  /// cross-document reference.
  #[error("unresolvable reference '{reference}' at '{path}'")]
  UnresolvableReference { reference: String, path: String },

  /// A composition shape the resolver cannot reduce to leaf objects. The
  /// `not` keyword always lands here: the target type system has no
  /// negation types.
  #[error("unsupported composition keyword '{keyword}' in schema '{schema}'")]
  UnsupportedComposition { schema: String, keyword: String },

  /// A property whose declared type is absent or unrecognized.
  #[error("unhandled type '{type_name}' for property '{property}' in schema '{schema}'")]
  UnhandledType {
    type_name: String,
    property: String,
    schema: String,
  },

  /// Two generated classes would share one name. Output file and type naming
  /// is 1:1 with the class name, so this is terminal like `UnhandledType`.
  #[error("generated class name '{name}' from schema '{schema}' collides with '{existing}'")]
  DuplicateClassName {
    name: String,
    schema: String,
    existing: String,
  },

  /// The composition graph contains a cycle.
  #[error("cyclic schema composition: {}", cycle.join(" -> "))]
  CyclicSchema { cycle: Vec<String> },
}
