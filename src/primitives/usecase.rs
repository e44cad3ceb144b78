//! Use case diagram IR.

use serde::{Deserialize, Serialize};

use crate::builder::UsecaseDiagramBuilder;
use crate::types::{DiagramMeta, Link, Note, Style};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsecaseDiagram {
    pub(crate) meta: DiagramMeta,
    pub(crate) options: UsecaseOptions,
    pub(crate) elements: Vec<UsecaseElement>,
}

impl UsecaseDiagram {
    pub fn builder() -> UsecaseDiagramBuilder {
        UsecaseDiagramBuilder::new()
    }

    pub fn options(&self) -> &UsecaseOptions {
        &self.options
    }

    pub fn elements(&self) -> &[UsecaseElement] {
        &self.elements
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorStyle {
    Default,
    Awesome,
    Hollow,
}

impl ActorStyle {
    pub fn keyword(&self) -> &'static str {
        match self {
            ActorStyle::Default => "default",
            ActorStyle::Awesome => "awesome",
            ActorStyle::Hollow => "hollow",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsecaseOptions {
    pub left_to_right: bool,
    pub actor_style: Option<ActorStyle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsecaseElement {
    Actor(Actor),
    Usecase(Usecase),
    Boundary(Boundary),
    Link(Link<UsecaseLinkKind>),
    Note(Note),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    pub alias: Option<String>,
    /// Business actor (`actor/`).
    pub business: bool,
    pub style: Style,
}

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            business: false,
            style: Style::default(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn business(mut self) -> Self {
        self.business = true;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl From<&str> for Actor {
    fn from(name: &str) -> Self {
        Actor::new(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usecase {
    pub name: String,
    pub alias: Option<String>,
    /// Business use case (`usecase/`).
    pub business: bool,
    pub style: Style,
}

impl Usecase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            business: false,
            style: Style::default(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn business(mut self) -> Self {
        self.business = true;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl From<&str> for Usecase {
    fn from(name: &str) -> Self {
        Usecase::new(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryKind {
    #[default]
    Rectangle,
    Package,
}

impl BoundaryKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            BoundaryKind::Rectangle => "rectangle",
            BoundaryKind::Package => "package",
        }
    }
}

/// System boundary grouping actors and use cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundary {
    pub name: String,
    pub kind: BoundaryKind,
    pub style: Style,
    pub elements: Vec<UsecaseElement>,
}

impl Boundary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: BoundaryKind::default(),
            style: Style::default(),
            elements: Vec::new(),
        }
    }

    pub fn package(name: impl Into<String>) -> Self {
        Self {
            kind: BoundaryKind::Package,
            ..Self::new(name)
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl From<&str> for Boundary {
    fn from(name: &str) -> Self {
        Boundary::new(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsecaseLinkKind {
    Association,
    Directed,
    Generalization,
    /// Labelled `<<include>>` unless the link has its own label.
    Include,
    /// Labelled `<<extend>>` unless the link has its own label.
    Extend,
    Dependency,
}
