use log::debug;

use super::{check_alias, check_style, require_text, required, scoped, DiagramBuilder, StyleAxes};
use crate::error::Result;
use crate::primitives::wbs::{WbsDiagram, WbsElement, WbsNode};

pub type WbsDiagramBuilder = DiagramBuilder<WbsScope>;

impl WbsDiagramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> WbsDiagram {
        let (meta, (), scope) = self.into_parts();
        debug!(kind = "wbs", elements = scope.elements.len(); "Built diagram");
        WbsDiagram {
            meta,
            elements: scope.elements,
        }
    }
}

fn check_node(node: &WbsNode) -> Result<()> {
    require_text("node text", &node.text)?;
    check_alias(node.alias.as_deref())?;
    check_style(&node.style, "wbs node", StyleAxes::BACKGROUND_STEREOTYPE)
}

#[derive(Debug, Clone, Default)]
pub struct WbsScope {
    elements: Vec<WbsElement>,
}

impl WbsScope {
    pub fn elements(&self) -> &[WbsElement] {
        &self.elements
    }

    pub fn root<F>(&mut self, header: impl Into<WbsNode>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut WbsBranch) -> Result<()>,
    {
        let mut node = header.into();
        check_node(&node)?;
        node.children = scoped::<WbsBranch, _>(build)?.children;
        self.elements.push(WbsElement::Node(node));
        Ok(self)
    }

    /// Arrow between two aliased nodes.
    pub fn link(&mut self, from: impl Into<String>, to: impl Into<String>) -> Result<&mut Self> {
        let from = required("link source", from)?;
        let to = required("link target", to)?;
        self.elements.push(WbsElement::Link { from, to });
        Ok(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct WbsBranch {
    children: Vec<WbsNode>,
}

impl WbsBranch {
    pub fn node<F>(&mut self, header: impl Into<WbsNode>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut WbsBranch) -> Result<()>,
    {
        let mut node = header.into();
        check_node(&node)?;
        node.children = scoped::<WbsBranch, _>(build)?.children;
        self.children.push(node);
        Ok(self)
    }

    pub fn leaf(&mut self, header: impl Into<WbsNode>) -> Result<&mut Self> {
        self.node(header, |_| Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_alias_and_link_rejected() {
        let mut builder = WbsDiagramBuilder::new();
        assert!(builder.root(WbsNode::new("Root").alias(" "), |_| Ok(())).is_err());
        assert!(builder.link("", "b").is_err());
        assert!(builder.elements().is_empty());
    }
}
