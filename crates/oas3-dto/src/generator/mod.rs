pub(crate) mod assembler;
pub(crate) mod errors;
pub mod orchestrator;
pub(crate) mod resolver;
pub(crate) mod schema_graph;
pub(crate) mod synthesizer;
pub(crate) mod type_mapper;

#[cfg(test)]
mod tests;
