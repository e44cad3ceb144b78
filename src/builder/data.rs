use std::io;

use log::debug;
use serde::Serialize;
use serde_json::ser::Formatter;

use super::{require_text, DiagramBuilder};
use crate::error::{Error, Result};
use crate::primitives::data::{DataDiagram, DataFormat};

/// Serialized JSON payload carried by [`JsonDiagramBuilder`].
#[derive(Debug, Clone, Default)]
pub struct JsonBody(String);

/// Serialized YAML payload carried by [`YamlDiagramBuilder`].
#[derive(Debug, Clone, Default)]
pub struct YamlBody(String);

pub type JsonDiagramBuilder = DiagramBuilder<DataScope, JsonBody>;
pub type YamlDiagramBuilder = DiagramBuilder<DataScope, YamlBody>;

/// Single-line JSON with a space after `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|err| Error::Serialization(err.to_string()))
}

fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let text = serde_yaml::to_string(value)?;
    Ok(text.trim_end().to_string())
}

impl JsonDiagramBuilder {
    pub fn new<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let mut builder = Self::default();
        builder.options = JsonBody(to_json(value)?);
        Ok(builder)
    }

    pub fn build(self) -> DataDiagram {
        let (meta, JsonBody(body), scope) = self.into_parts();
        debug!(kind = "json", highlights = scope.highlights.len(); "Built diagram");
        DataDiagram {
            meta,
            format: DataFormat::Json,
            highlights: scope.highlights,
            body,
        }
    }
}

impl YamlDiagramBuilder {
    pub fn new<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let mut builder = Self::default();
        builder.options = YamlBody(to_yaml(value)?);
        Ok(builder)
    }

    pub fn build(self) -> DataDiagram {
        let (meta, YamlBody(body), scope) = self.into_parts();
        debug!(kind = "yaml", highlights = scope.highlights.len(); "Built diagram");
        DataDiagram {
            meta,
            format: DataFormat::Yaml,
            highlights: scope.highlights,
            body,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DataScope {
    highlights: Vec<Vec<String>>,
}

impl DataScope {
    pub fn highlights(&self) -> &[Vec<String>] {
        &self.highlights
    }

    /// Highlight the value at a key path (`#highlight "a" / "b"`).
    pub fn highlight(&mut self, path: &[&str]) -> Result<&mut Self> {
        if path.is_empty() {
            return Err(Error::Validation {
                field: "highlight path",
                reason: "needs at least one key",
            });
        }
        for segment in path {
            require_text("highlight key", segment)?;
        }
        self.highlights.push(path.iter().map(|segment| segment.to_string()).collect());
        Ok(self)
    }
}
