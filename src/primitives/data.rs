//! JSON and YAML data views.
//!
//! The payload is serialized when the builder is created, so a built diagram
//! holds text only and rendering cannot fail.

use serde::{Deserialize, Serialize};

use crate::builder::{JsonDiagramBuilder, YamlDiagramBuilder};
use crate::error::Result;
use crate::types::DiagramMeta;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataDiagram {
    pub(crate) meta: DiagramMeta,
    pub(crate) format: DataFormat,
    /// Key paths to highlight, e.g. `["address", "city"]`.
    pub(crate) highlights: Vec<Vec<String>>,
    pub(crate) body: String,
}

impl DataDiagram {
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<JsonDiagramBuilder> {
        JsonDiagramBuilder::new(value)
    }

    pub fn yaml<T: Serialize + ?Sized>(value: &T) -> Result<YamlDiagramBuilder> {
        YamlDiagramBuilder::new(value)
    }

    pub fn format(&self) -> DataFormat {
        self.format
    }

    pub fn highlights(&self) -> &[Vec<String>] {
        &self.highlights
    }

    /// The serialized payload.
    pub fn body(&self) -> &str {
        &self.body
    }
}
