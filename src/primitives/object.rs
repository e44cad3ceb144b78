//! Object diagram IR: object instances and `map` tables linked with the class
//! relationship vocabulary.

use serde::{Deserialize, Serialize};

use crate::builder::ObjectDiagramBuilder;
use crate::primitives::class::RelationKind;
use crate::types::{DiagramMeta, Link, Note, Style};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDiagram {
    pub(crate) meta: DiagramMeta,
    pub(crate) elements: Vec<ObjectElement>,
}

impl ObjectDiagram {
    pub fn builder() -> ObjectDiagramBuilder {
        ObjectDiagramBuilder::new()
    }

    pub fn elements(&self) -> &[ObjectElement] {
        &self.elements
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectElement {
    Object(ObjectNode),
    Map(MapNode),
    Relation(Link<RelationKind>),
    Note(Note),
}

/// `object Name {` with `field = value` rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectNode {
    pub name: String,
    pub alias: Option<String>,
    pub fields: Vec<(String, String)>,
    pub style: Style,
}

impl ObjectNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            fields: Vec::new(),
            style: Style::default(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl From<&str> for ObjectNode {
    fn from(name: &str) -> Self {
        ObjectNode::new(name)
    }
}

/// `map Name {` with `key => value` rows. A value may instead link to another
/// object: `key *-> target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapNode {
    pub name: String,
    pub alias: Option<String>,
    pub entries: Vec<MapEntry>,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapEntry {
    Value { key: String, value: String },
    Link { key: String, target: String },
}

impl MapNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            entries: Vec::new(),
            style: Style::default(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(MapEntry::Value {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    pub fn link(mut self, key: impl Into<String>, target: impl Into<String>) -> Self {
        self.entries.push(MapEntry::Link {
            key: key.into(),
            target: target.into(),
        });
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl From<&str> for MapNode {
    fn from(name: &str) -> Self {
        MapNode::new(name)
    }
}
