//! Mindmap diagram IR.

use serde::{Deserialize, Serialize};

use crate::builder::MindmapDiagramBuilder;
use crate::types::{DiagramMeta, Style};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindmapDiagram {
    pub(crate) meta: DiagramMeta,
    pub(crate) options: MindmapOptions,
    /// Root nodes; usually exactly one.
    pub(crate) elements: Vec<MindmapNode>,
}

impl MindmapDiagram {
    pub fn builder() -> MindmapDiagramBuilder {
        MindmapDiagramBuilder::new()
    }

    pub fn options(&self) -> &MindmapOptions {
        &self.options
    }

    pub fn elements(&self) -> &[MindmapNode] {
        &self.elements
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MindmapDirection {
    TopToBottom,
    LeftToRight,
    RightToLeft,
}

impl MindmapDirection {
    pub fn directive(&self) -> &'static str {
        match self {
            MindmapDirection::TopToBottom => "top to bottom direction",
            MindmapDirection::LeftToRight => "left to right direction",
            MindmapDirection::RightToLeft => "right to left direction",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindmapOptions {
    pub direction: Option<MindmapDirection>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Right,
    Left,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindmapNode {
    pub text: String,
    /// Which side of the root the branch grows on. Read on the root's
    /// children; deeper nodes follow their branch.
    pub side: Side,
    /// Drawn without a surrounding box.
    pub boxless: bool,
    pub style: Style,
    pub children: Vec<MindmapNode>,
}

impl MindmapNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            side: Side::Right,
            boxless: false,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    pub fn left(mut self) -> Self {
        self.side = Side::Left;
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

impl From<&str> for MindmapNode {
    fn from(text: &str) -> Self {
        MindmapNode::new(text)
    }
}
