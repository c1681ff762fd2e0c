pub mod generate;
pub mod list;

pub use generate::{GenerateConfig, generate_dtos};
pub use list::list_schemas;
