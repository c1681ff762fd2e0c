use std::{ffi::OsStr, path::Path};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use indexmap::IndexMap;
use serde::Deserialize;

/// Raw schema node as it appears in the source document.
///
/// Only the keywords the engine consumes are modeled; everything else in the
/// document is ignored during deserialization. Property and schema maps use
/// `IndexMap` because declaration order is semantic for generated output.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSchema {
  #[serde(rename = "$ref")]
  pub reference: Option<String>,
  #[serde(rename = "type")]
  pub schema_type: Option<String>,
  pub format: Option<String>,
  pub properties: IndexMap<String, RawSchema>,
  pub items: Option<Box<RawSchema>>,
  pub all_of: Vec<RawSchema>,
  pub any_of: Vec<RawSchema>,
  pub one_of: Vec<RawSchema>,
  pub not: Option<Box<RawSchema>>,
  pub description: Option<String>,
  #[serde(rename = "default")]
  pub default_value: Option<serde_json::Value>,
  pub nullable: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawComponents {
  pub schemas: IndexMap<String, RawSchema>,
}

/// In-memory form of an OpenAPI document, reduced to the parts the generator
/// reads: `info` for logging and `components.schemas` for type synthesis.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDocument {
  pub info: RawInfo,
  pub components: RawComponents,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawInfo {
  pub title: String,
  pub version: String,
  pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }
}

pub struct SpecLoader {
  file: AsyncMmapFile,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let format = path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(SpecFormat::default(), SpecFormat::from_extension);

    let file = AsyncMmapFile::open(path).await?;

    Ok(Self { file, format })
  }

  pub fn parse(&self) -> anyhow::Result<RawDocument> {
    match self.format {
      SpecFormat::Json => Ok(serde_json::from_slice::<RawDocument>(self.file.as_slice())?),
      SpecFormat::Yaml => Ok(serde_yaml::from_slice::<RawDocument>(self.file.as_slice())?),
    }
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  fn spec_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
      .suffix(suffix)
      .tempfile()
      .expect("temp file should be created");
    file.write_all(contents.as_bytes()).expect("write should succeed");
    file.flush().expect("flush should succeed");
    file
  }

  #[test]
  fn format_detection_follows_the_extension() {
    assert_eq!(SpecFormat::from_extension("yaml"), SpecFormat::Yaml);
    assert_eq!(SpecFormat::from_extension("yml"), SpecFormat::Yaml);
    assert_eq!(SpecFormat::from_extension("json"), SpecFormat::Json);
    assert_eq!(SpecFormat::from_extension("txt"), SpecFormat::Json);
  }

  #[tokio::test]
  async fn loads_a_json_document() {
    let file = spec_file(
      ".json",
      r#"{
        "openapi": "3.0.3",
        "info": { "title": "Petstore", "version": "1.0.0" },
        "components": {
          "schemas": {
            "Pet": { "type": "object", "properties": { "name": { "type": "string" } } }
          }
        }
      }"#,
    );

    let loader = SpecLoader::open(file.path()).await.unwrap();
    let document = loader.parse().unwrap();
    assert_eq!(document.info.title, "Petstore");
    assert!(document.components.schemas.contains_key("Pet"));
  }

  #[tokio::test]
  async fn loads_a_yaml_document() {
    let file = spec_file(
      ".yaml",
      concat!(
        "openapi: 3.0.3\n",
        "info:\n",
        "  title: Petstore\n",
        "  version: 1.0.0\n",
        "components:\n",
        "  schemas:\n",
        "    Pet:\n",
        "      type: object\n",
        "      properties:\n",
        "        name:\n",
        "          type: string\n",
      ),
    );

    let loader = SpecLoader::open(file.path()).await.unwrap();
    let document = loader.parse().unwrap();
    assert_eq!(document.info.version, "1.0.0");
    let pet = &document.components.schemas["Pet"];
    assert_eq!(pet.schema_type.as_deref(), Some("object"));
    assert!(pet.properties.contains_key("name"));
  }

  #[tokio::test]
  async fn schema_order_matches_the_document() {
    let file = spec_file(
      ".json",
      r#"{
        "components": {
          "schemas": {
            "Zebra": {},
            "Aardvark": {},
            "Mongoose": {}
          }
        }
      }"#,
    );

    let loader = SpecLoader::open(file.path()).await.unwrap();
    let document = loader.parse().unwrap();
    let names: Vec<&String> = document.components.schemas.keys().collect();
    assert_eq!(names, ["Zebra", "Aardvark", "Mongoose"]);
  }

  #[tokio::test]
  async fn malformed_input_is_an_error() {
    let file = spec_file(".json", "{ not json");

    let loader = SpecLoader::open(file.path()).await.unwrap();
    assert!(loader.parse().is_err());
  }
}
