use std::path::PathBuf;

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::orchestrator::{GeneratedFile, GenerationStats, Orchestrator},
  ui::{Colors, GenerateCommand},
  utils::spec::{RawDocument, RawInfo, SpecLoader},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

/// One-line label for the loaded document, from its `info` block.
fn describe_document(info: &RawInfo) -> String {
  match (info.title.is_empty(), info.version.is_empty()) {
    (true, _) => "untitled document".to_string(),
    (false, true) => info.title.clone(),
    (false, false) => format!("{} v{}", info.title, info.version),
  }
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub namespace: String,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> Self {
    let GenerateCommand {
      input,
      output,
      namespace,
      verbose,
      quiet,
    } = command;

    Self {
      input,
      output,
      namespace,
      verbose,
      quiet,
    }
  }

  async fn load_document(&self) -> anyhow::Result<RawDocument> {
    SpecLoader::open(&self.input).await?.parse()
  }

  /// Writes all rendered files. Called only after the whole run succeeded,
  /// so a failed run leaves no files behind.
  async fn write_output(&self, files: &[GeneratedFile]) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(&self.output).await?;
    for file in files {
      tokio::fs::write(self.output.join(&file.name), &file.source).await?;
    }
    Ok(())
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading OpenAPI document from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_loaded(&self, info: &RawInfo) {
    self.info(
      &format!("Loaded: {}", describe_document(info))
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self, schema_count: usize) {
    self.info(
      &format!("Generating PHP DTO classes for {schema_count} schemas...")
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Classes generated:", stats.classes_generated.to_string());
    if stats.nested_classes > 0 {
      self.stat("", format!("{} extracted from inline objects", stats.nested_classes));
    }
    self.stat("Fields generated:", stats.fields_generated.to_string());
    if self.config.verbose && stats.union_fields > 0 {
      self.stat("", format!("{} union-typed fields", stats.union_fields));
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated PHP DTO classes".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_dtos(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let document = config.load_document().await?;
  logger.log_loaded(&document.info);

  let orchestrator = Orchestrator::new(&document, config.namespace.clone())?;
  logger.log_generating(orchestrator.schema_count());

  let (files, stats) = orchestrator.generate()?;
  logger.print_statistics(&stats);

  logger.log_writing();
  config.write_output(&files).await?;

  logger.log_success();
  Ok(())
}
