use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "oas3-dto")]
#[command(author, version, about = "OpenAPI schema to PHP DTO generator")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from an OpenAPI schema document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate PHP DTO classes from an OpenAPI schema document
  Generate(GenerateCommand),
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path to the OpenAPI JSON or YAML document
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Directory where the generated PHP classes will be written
  #[arg(short, long, value_name = "DIR")]
  pub output: PathBuf,

  /// PHP namespace for generated classes (passed through to the printer)
  #[arg(short, long, value_name = "NAMESPACE", default_value = "App\\Dto")]
  pub namespace: String,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all named schemas defined in the document
  Schemas {
    /// Path to the OpenAPI JSON or YAML document
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}
