use super::{
  errors::GeneratorError,
  schema_graph::{CompositionKind, SchemaGraph, SchemaKind, SchemaNode},
};

/// Unwinds composition keywords into the ordered sequence of leaf nodes a
/// schema is composed from.
///
/// Depth-first, leftmost-first: `allOf` members resolve in declaration order,
/// `oneOf` resolves only its first member (a deliberate, documented
/// limitation), and `anyOf` members are left unexpanded because they surface
/// as a union type, not as merged fields.
/// A composed node that co-declares inline `properties` contributes itself as
/// a trailing leaf so those properties are not lost.
pub(crate) struct CompositionResolver<'g> {
  graph: &'g SchemaGraph,
}

impl<'g> CompositionResolver<'g> {
  pub(crate) fn new(graph: &'g SchemaGraph) -> Self {
    Self { graph }
  }

  /// Resolves `node` into leaf nodes (`kind != composed`, except for
  /// composed nodes standing in for their own inline properties).
  ///
  /// The cycle-detection stack lives for exactly one call and is discarded
  /// on return.
  pub(crate) fn resolve(&self, node: &'g SchemaNode) -> Result<Vec<&'g SchemaNode>, GeneratorError> {
    let mut in_progress = Vec::new();
    self.resolve_inner(node, &mut in_progress)
  }

  fn resolve_inner(&self, node: &'g SchemaNode, in_progress: &mut Vec<String>) -> Result<Vec<&'g SchemaNode>, GeneratorError> {
    // every named node on the current path is tracked before recursing, so
    // pure `$ref` cycles are caught the same way composition cycles are
    if let Some(name) = &node.name {
      if let Some(start) = in_progress.iter().position(|n| n == name) {
        let mut cycle = in_progress[start..].to_vec();
        cycle.push(name.clone());
        return Err(GeneratorError::CyclicSchema { cycle });
      }
      in_progress.push(name.clone());
    }

    let leaves = self.resolve_kind(node, in_progress);

    if node.name.is_some() {
      in_progress.pop();
    }

    leaves
  }

  fn resolve_kind(&self, node: &'g SchemaNode, in_progress: &mut Vec<String>) -> Result<Vec<&'g SchemaNode>, GeneratorError> {
    let SchemaKind::Composed { kind, members, inline } = &node.kind else {
      if let SchemaKind::Reference { target } = &node.kind {
        let resolved = self.deref(target, node)?;
        return self.resolve_inner(resolved, in_progress);
      }
      return Ok(vec![node]);
    };

    let mut leaves = match kind {
      CompositionKind::Not => {
        return Err(GeneratorError::UnsupportedComposition {
          schema: describe(node),
          keyword: kind.to_string(),
        });
      }
      CompositionKind::OneOf => match members.first() {
        Some(first) => self.resolve_inner(first, in_progress)?,
        None => vec![],
      },
      CompositionKind::AllOf => {
        let mut collected = Vec::new();
        for member in members {
          collected.extend(self.resolve_inner(member, in_progress)?);
        }
        collected
      }
      // anyOf is union-producing: the type mapper consumes the members, the
      // resolver contributes no leaves for them.
      CompositionKind::AnyOf => vec![],
    };

    if !inline.is_empty() {
      leaves.push(node);
    }

    Ok(leaves)
  }

  fn deref(&self, target: &str, referrer: &SchemaNode) -> Result<&'g SchemaNode, GeneratorError> {
    self
      .graph
      .get(target)
      .ok_or_else(|| GeneratorError::UnresolvableReference {
        reference: target.to_string(),
        path: describe(referrer),
      })
  }
}

fn describe(node: &SchemaNode) -> String {
  node.name.clone().unwrap_or_else(|| "<anonymous>".to_string())
}
