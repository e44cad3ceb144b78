//! Component diagram IR.

use serde::{Deserialize, Serialize};

use crate::builder::ComponentDiagramBuilder;
use crate::types::{DiagramMeta, Link, Note, Style};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDiagram {
    pub(crate) meta: DiagramMeta,
    pub(crate) options: ComponentOptions,
    pub(crate) elements: Vec<ComponentElement>,
}

impl ComponentDiagram {
    pub fn builder() -> ComponentDiagramBuilder {
        ComponentDiagramBuilder::new()
    }

    pub fn options(&self) -> &ComponentOptions {
        &self.options
    }

    pub fn elements(&self) -> &[ComponentElement] {
        &self.elements
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStyle {
    Uml1,
    Uml2,
    Rectangle,
}

impl ComponentStyle {
    pub fn keyword(&self) -> &'static str {
        match self {
            ComponentStyle::Uml1 => "uml1",
            ComponentStyle::Uml2 => "uml2",
            ComponentStyle::Rectangle => "rectangle",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentOptions {
    pub left_to_right: bool,
    pub component_style: Option<ComponentStyle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentElement {
    Component(Component),
    Interface(Interface),
    Port(Port),
    Container(ComponentContainer),
    Link(Link<ComponentLinkKind>),
    Note(Note),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub alias: Option<String>,
    pub style: Style,
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            style: Style::default(),
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

impl From<&str> for Component {
    fn from(name: &str) -> Self {
        Component::new(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    pub alias: Option<String>,
    pub style: Style,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            style: Style::default(),
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

impl From<&str> for Interface {
    fn from(name: &str) -> Self {
        Interface::new(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    #[default]
    Both,
    In,
    Out,
}

impl PortDirection {
    pub fn keyword(&self) -> &'static str {
        match self {
            PortDirection::Both => "port",
            PortDirection::In => "portin",
            PortDirection::Out => "portout",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub name: String,
    pub direction: PortDirection,
}

impl Port {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: PortDirection::Both,
        }
    }

    pub fn input(name: impl Into<String>) -> Self {
        Self {
            direction: PortDirection::In,
            ..Self::new(name)
        }
    }

    pub fn output(name: impl Into<String>) -> Self {
        Self {
            direction: PortDirection::Out,
            ..Self::new(name)
        }
    }
}

impl From<&str> for Port {
    fn from(name: &str) -> Self {
        Port::new(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    #[default]
    Package,
    Node,
    Folder,
    Frame,
    Cloud,
    Database,
    Rectangle,
    Component,
}

impl ContainerKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            ContainerKind::Package => "package",
            ContainerKind::Node => "node",
            ContainerKind::Folder => "folder",
            ContainerKind::Frame => "frame",
            ContainerKind::Cloud => "cloud",
            ContainerKind::Database => "database",
            ContainerKind::Rectangle => "rectangle",
            ContainerKind::Component => "component",
        }
    }
}

/// Grouping shape; a `component` container is how ports get attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentContainer {
    pub name: String,
    pub kind: ContainerKind,
    pub alias: Option<String>,
    pub style: Style,
    pub elements: Vec<ComponentElement>,
}

impl ComponentContainer {
    pub fn new(kind: ContainerKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
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

impl From<&str> for ComponentContainer {
    fn from(name: &str) -> Self {
        ComponentContainer::new(ContainerKind::Package, name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentLinkKind {
    Association,
    Directed,
    Dependency,
    Dotted,
    Realization,
}
