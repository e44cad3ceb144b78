//! Work breakdown structure IR.

use serde::{Deserialize, Serialize};

use crate::builder::WbsDiagramBuilder;
use crate::types::{DiagramMeta, Style};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WbsDiagram {
    pub(crate) meta: DiagramMeta,
    pub(crate) elements: Vec<WbsElement>,
}

impl WbsDiagram {
    pub fn builder() -> WbsDiagramBuilder {
        WbsDiagramBuilder::new()
    }

    pub fn elements(&self) -> &[WbsElement] {
        &self.elements
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WbsElement {
    /// A root node with its subtree.
    Node(WbsNode),
    /// `(A) -> (B)` between aliased nodes.
    Link { from: String, to: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WbsSide {
    Left,
    Right,
}

impl WbsSide {
    pub fn marker(&self) -> char {
        match self {
            WbsSide::Left => '<',
            WbsSide::Right => '>',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WbsNode {
    pub text: String,
    /// Target for arrows, written `(alias)`.
    pub alias: Option<String>,
    pub side: Option<WbsSide>,
    pub boxless: bool,
    pub style: Style,
    pub children: Vec<WbsNode>,
}

impl WbsNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alias: None,
            side: None,
            boxless: false,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn left(mut self) -> Self {
        self.side = Some(WbsSide::Left);
        self
    }

    pub fn right(mut self) -> Self {
        self.side = Some(WbsSide::Right);
        self
    }

    pub fn boxless(mut self) -> Self {
        self.boxless = true;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl From<&str> for WbsNode {
    fn from(text: &str) -> Self {
        WbsNode::new(text)
    }
}
