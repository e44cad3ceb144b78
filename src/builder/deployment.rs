use log::debug;

use super::{check_alias, check_link, check_note, check_style, require_text, scoped, DiagramBuilder, StyleAxes};
use crate::error::{Error, Result};
use crate::primitives::deployment::{
    DeploymentDiagram, DeploymentElement, DeploymentLinkKind, DeploymentNode, DeploymentOptions,
};
use crate::types::{Link, Note};

pub type DeploymentDiagramBuilder = DiagramBuilder<DeploymentScope, DeploymentOptions>;

impl DeploymentDiagramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left_to_right(&mut self) -> &mut Self {
        self.options.left_to_right = true;
        self
    }

    pub fn build(self) -> DeploymentDiagram {
        let (meta, options, scope) = self.into_parts();
        debug!(kind = "deployment", elements = scope.elements.len(); "Built diagram");
        DeploymentDiagram {
            meta,
            options,
            elements: scope.elements,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeploymentScope {
    elements: Vec<DeploymentElement>,
}

impl DeploymentScope {
    pub fn elements(&self) -> &[DeploymentElement] {
        &self.elements
    }

    fn check_node(node: &DeploymentNode) -> Result<()> {
        require_text("element name", &node.name)?;
        check_alias(node.alias.as_deref())?;
        check_style(&node.style, node.kind.keyword(), StyleAxes::ALL)
    }

    /// A leaf element of any shape.
    pub fn element(&mut self, node: impl Into<DeploymentNode>) -> Result<&mut Self> {
        let node = node.into();
        Self::check_node(&node)?;
        self.elements.push(DeploymentElement::Node(node));
        Ok(self)
    }

    /// An element enclosing others; only container shapes accept children.
    pub fn container<F>(&mut self, header: impl Into<DeploymentNode>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut DeploymentScope) -> Result<()>,
    {
        let mut node = header.into();
        Self::check_node(&node)?;
        if !node.kind.is_container() {
            return Err(Error::Validation {
                field: node.kind.keyword(),
                reason: "cannot contain other elements",
            });
        }
        node.elements = scoped::<DeploymentScope, _>(build)?.elements;
        self.elements.push(DeploymentElement::Node(node));
        Ok(self)
    }

    pub fn link(&mut self, link: Link<DeploymentLinkKind>) -> Result<&mut Self> {
        check_link(&link)?;
        self.elements.push(DeploymentElement::Link(link));
        Ok(self)
    }

    pub fn note(&mut self, note: impl Into<Note>) -> Result<&mut Self> {
        let note = note.into();
        check_note(&note)?;
        self.elements.push(DeploymentElement::Note(note));
        Ok(self)
    }
}
