use super::color::{render_background, render_stereotype, ColorMode};
use super::render_document;
use super::writer::Writer;
use crate::diagram::{sealed::Sealed, DiagramKind, Document};
use crate::primitives::mindmap::{MindmapDiagram, MindmapNode, Side};
use crate::types::{DiagramMeta, Style};

impl Sealed for MindmapDiagram {
    fn meta_slot(&mut self) -> &mut DiagramMeta {
        &mut self.meta
    }
}

impl Document for MindmapDiagram {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Mindmap
    }

    fn meta(&self) -> &DiagramMeta {
        &self.meta
    }

    fn render_with(&self, options: &super::RenderOptions) -> String {
        render_document(self.kind(), &self.meta, self.elements.len(), options, |w| {
            if let Some(direction) = &self.options.direction {
                w.line(direction.directive());
            }
            let sided = self
                .elements
                .iter()
                .flat_map(|root| root.children.iter())
                .any(|branch| branch.side == Side::Left);
            for root in &self.elements {
                let marker = if sided { '+' } else { '*' };
                write_node(root, 1, marker, sided, w);
            }
        })
    }
}

fn write_node(node: &MindmapNode, depth: usize, marker: char, sided: bool, w: &mut Writer) {
    w.line(node_line(&marker.to_string().repeat(depth), node.boxless, &node.style, &node.text));
    for child in &node.children {
        // the root's children pick the side for their whole branch
        let marker = match (sided, depth) {
            (true, 1) if child.side == Side::Left => '-',
            (true, 1) => '+',
            _ => marker,
        };
        write_node(child, depth + 1, marker, sided, w);
    }
}

/// `**[#color]_ text <<stereotype>>`, or `**:multi\nline;` for multi-line text.
/// Shared with WBS, whose prefix also carries side and alias.
pub(crate) fn node_line(prefix: &str, boxless: bool, style: &Style, text: &str) -> String {
    let mut line = prefix.to_string();
    if let Some(background) = &style.background {
        line.push_str(&format!("[{}]", render_background(background, ColorMode::Hashed)));
    }
    if boxless {
        line.push('_');
    }
    if text.contains('\n') {
        line.push(':');
        line.push_str(text);
        line.push(';');
    } else {
        line.push(' ');
        line.push_str(text);
    }
    if let Some(stereotype) = &style.stereotype {
        line.push(' ');
        line.push_str(&render_stereotype(stereotype));
    }
    line
}
