use log::debug;

use super::{check_style, require_text, scoped, DiagramBuilder, StyleAxes};
use crate::error::Result;
use crate::primitives::mindmap::{MindmapDiagram, MindmapDirection, MindmapNode, MindmapOptions};

pub type MindmapDiagramBuilder = DiagramBuilder<MindmapScope, MindmapOptions>;

impl MindmapDiagramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&mut self, direction: MindmapDirection) -> &mut Self {
        self.options.direction = Some(direction);
        self
    }

    pub fn build(self) -> MindmapDiagram {
        let (meta, options, scope) = self.into_parts();
        debug!(kind = "mindmap", elements = scope.roots.len(); "Built diagram");
        MindmapDiagram {
            meta,
            options,
            elements: scope.roots,
        }
    }
}

fn check_node(node: &MindmapNode) -> Result<()> {
    require_text("node text", &node.text)?;
    check_style(&node.style, "mindmap node", StyleAxes::BACKGROUND_STEREOTYPE)
}

#[derive(Debug, Clone, Default)]
pub struct MindmapScope {
    roots: Vec<MindmapNode>,
}

impl MindmapScope {
    pub fn roots(&self) -> &[MindmapNode] {
        &self.roots
    }

    pub fn root<F>(&mut self, header: impl Into<MindmapNode>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut MindmapBranch) -> Result<()>,
    {
        let mut node = header.into();
        check_node(&node)?;
        node.children = scoped::<MindmapBranch, _>(build)?.children;
        self.roots.push(node);
        Ok(self)
    }
}

/// Children of one node.
#[derive(Debug, Clone, Default)]
pub struct MindmapBranch {
    children: Vec<MindmapNode>,
}

impl MindmapBranch {
    pub fn node<F>(&mut self, header: impl Into<MindmapNode>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut MindmapBranch) -> Result<()>,
    {
        let mut node = header.into();
        check_node(&node)?;
        node.children = scoped::<MindmapBranch, _>(build)?.children;
        self.children.push(node);
        Ok(self)
    }

    pub fn leaf(&mut self, header: impl Into<MindmapNode>) -> Result<&mut Self> {
        self.node(header, |_| Ok(()))
    }
}
