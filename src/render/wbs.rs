use super::mindmap::node_line;
use super::render_document;
use super::writer::Writer;
use crate::diagram::{sealed::Sealed, DiagramKind, Document};
use crate::primitives::wbs::{WbsDiagram, WbsElement, WbsNode};
use crate::types::DiagramMeta;

impl Sealed for WbsDiagram {
    fn meta_slot(&mut self) -> &mut DiagramMeta {
        &mut self.meta
    }
}

impl Document for WbsDiagram {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Wbs
    }

    fn meta(&self) -> &DiagramMeta {
        &self.meta
    }

    fn render_with(&self, options: &super::RenderOptions) -> String {
        render_document(self.kind(), &self.meta, self.elements.len(), options, |w| {
            for element in &self.elements {
                match element {
                    WbsElement::Node(node) => write_node(node, 1, w),
                    WbsElement::Link { from, to } => w.line(format!("({}) -> ({})", from, to)),
                }
            }
        })
    }
}

fn write_node(node: &WbsNode, depth: usize, w: &mut Writer) {
    let mut prefix = "*".repeat(depth);
    if let Some(side) = node.side {
        prefix.push(side.marker());
    }
    let text = match &node.alias {
        Some(alias) => format!("({}) {}", alias, node.text),
        None => node.text.clone(),
    };
    w.line(node_line(&prefix, node.boxless, &node.style, &text));
    for child in &node.children {
        write_node(child, depth + 1, w);
    }
}
