//! Deployment diagram IR.

use serde::{Deserialize, Serialize};

use crate::builder::DeploymentDiagramBuilder;
use crate::types::{DiagramMeta, Link, Note, Style};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentDiagram {
    pub(crate) meta: DiagramMeta,
    pub(crate) options: DeploymentOptions,
    pub(crate) elements: Vec<DeploymentElement>,
}

impl DeploymentDiagram {
    pub fn builder() -> DeploymentDiagramBuilder {
        DeploymentDiagramBuilder::new()
    }

    pub fn options(&self) -> &DeploymentOptions {
        &self.options
    }

    pub fn elements(&self) -> &[DeploymentElement] {
        &self.elements
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentOptions {
    pub left_to_right: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeploymentElement {
    Node(DeploymentNode),
    Link(Link<DeploymentLinkKind>),
    Note(Note),
}

/// Shape keywords of the deployment dialect. Network members reuse this
/// table for their `shape = …` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentKind {
    Actor,
    Agent,
    Artifact,
    Boundary,
    Card,
    Circle,
    Cloud,
    Collections,
    Component,
    Control,
    Database,
    Entity,
    File,
    Folder,
    Frame,
    Hexagon,
    Interface,
    Label,
    #[default]
    Node,
    Package,
    Person,
    Queue,
    Rectangle,
    Stack,
    Storage,
    Usecase,
}

impl DeploymentKind {
    pub const ALL: [DeploymentKind; 26] = [
        DeploymentKind::Actor,
        DeploymentKind::Agent,
        DeploymentKind::Artifact,
        DeploymentKind::Boundary,
        DeploymentKind::Card,
        DeploymentKind::Circle,
        DeploymentKind::Cloud,
        DeploymentKind::Collections,
        DeploymentKind::Component,
        DeploymentKind::Control,
        DeploymentKind::Database,
        DeploymentKind::Entity,
        DeploymentKind::File,
        DeploymentKind::Folder,
        DeploymentKind::Frame,
        DeploymentKind::Hexagon,
        DeploymentKind::Interface,
        DeploymentKind::Label,
        DeploymentKind::Node,
        DeploymentKind::Package,
        DeploymentKind::Person,
        DeploymentKind::Queue,
        DeploymentKind::Rectangle,
        DeploymentKind::Stack,
        DeploymentKind::Storage,
        DeploymentKind::Usecase,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            DeploymentKind::Actor => "actor",
            DeploymentKind::Agent => "agent",
            DeploymentKind::Artifact => "artifact",
            DeploymentKind::Boundary => "boundary",
            DeploymentKind::Card => "card",
            DeploymentKind::Circle => "circle",
            DeploymentKind::Cloud => "cloud",
            DeploymentKind::Collections => "collections",
            DeploymentKind::Component => "component",
            DeploymentKind::Control => "control",
            DeploymentKind::Database => "database",
            DeploymentKind::Entity => "entity",
            DeploymentKind::File => "file",
            DeploymentKind::Folder => "folder",
            DeploymentKind::Frame => "frame",
            DeploymentKind::Hexagon => "hexagon",
            DeploymentKind::Interface => "interface",
            DeploymentKind::Label => "label",
            DeploymentKind::Node => "node",
            DeploymentKind::Package => "package",
            DeploymentKind::Person => "person",
            DeploymentKind::Queue => "queue",
            DeploymentKind::Rectangle => "rectangle",
            DeploymentKind::Stack => "stack",
            DeploymentKind::Storage => "storage",
            DeploymentKind::Usecase => "usecase",
        }
    }

    /// Whether the shape can enclose other elements.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            DeploymentKind::Artifact
                | DeploymentKind::Card
                | DeploymentKind::Cloud
                | DeploymentKind::Component
                | DeploymentKind::Database
                | DeploymentKind::File
                | DeploymentKind::Folder
                | DeploymentKind::Frame
                | DeploymentKind::Hexagon
                | DeploymentKind::Node
                | DeploymentKind::Package
                | DeploymentKind::Queue
                | DeploymentKind::Rectangle
                | DeploymentKind::Stack
                | DeploymentKind::Storage
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentNode {
    pub kind: DeploymentKind,
    pub name: String,
    pub alias: Option<String>,
    pub style: Style,
    pub elements: Vec<DeploymentElement>,
}

impl DeploymentNode {
    pub fn new(kind: DeploymentKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            alias: None,
            style: Style::default(),
            elements: Vec::new(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl From<&str> for DeploymentNode {
    fn from(name: &str) -> Self {
        DeploymentNode::new(DeploymentKind::Node, name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentLinkKind {
    Line,
    Dotted,
    Wavy,
    Double,
    Arrow,
    DottedArrow,
    Composition,
    Aggregation,
    Plus,
    Hash,
    OpenArrow,
    Circle,
    Caret,
}
