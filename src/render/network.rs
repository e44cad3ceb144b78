use super::color::render_color;
use super::common::quote_name;
use super::render_document;
use super::writer::Writer;
use crate::diagram::{sealed::Sealed, DiagramKind, Document};
use crate::primitives::network::{Network, NetworkDiagram, NetworkElement, NetworkNode, NodeGroup};
use crate::types::DiagramMeta;

impl Sealed for NetworkDiagram {
    fn meta_slot(&mut self) -> &mut DiagramMeta {
        &mut self.meta
    }
}

impl Document for NetworkDiagram {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Network
    }

    fn meta(&self) -> &DiagramMeta {
        &self.meta
    }

    fn render_with(&self, options: &super::RenderOptions) -> String {
        render_document(self.kind(), &self.meta, self.elements.len(), options, |w| {
            w.block("nwdiag {", "}", |w| {
                for element in &self.elements {
                    match element {
                        NetworkElement::Network(network) => write_network(network, w),
                        NetworkElement::Group(group) => write_group(group, w),
                        NetworkElement::Node(node) => w.line(node_line(node)),
                        NetworkElement::Peer { from, to } => {
                            w.line(format!("{} -- {};", quote_name(from), quote_name(to)))
                        }
                    }
                }
            });
        })
    }
}

fn write_network(network: &Network, w: &mut Writer) {
    w.block(format!("network {} {{", quote_name(&network.name)), "}", |w| {
        if let Some(address) = &network.address {
            w.line(format!("address = \"{}\"", address));
        }
        if let Some(color) = &network.color {
            w.line(format!("color = \"{}\"", render_color(color)));
        }
        if let Some(description) = &network.description {
            w.line(format!("description = \"{}\"", description));
        }
        if network.full_width {
            w.line("width = full");
        }
        for member in &network.members {
            w.line(node_line(member));
        }
    });
}

/// `name [address = "…", description = "…", shape = …, color = "…"];`
fn node_line(node: &NetworkNode) -> String {
    let name = quote_name(&node.name);
    if !node.has_attributes() {
        return format!("{};", name);
    }
    let mut attributes = Vec::new();
    if let Some(address) = &node.address {
        attributes.push(format!("address = \"{}\"", address));
    }
    if let Some(description) = &node.description {
        attributes.push(format!("description = \"{}\"", description));
    }
    if let Some(shape) = &node.shape {
        attributes.push(format!("shape = {}", shape.keyword()));
    }
    if let Some(color) = &node.color {
        attributes.push(format!("color = \"{}\"", render_color(color)));
    }
    format!("{} [{}];", name, attributes.join(", "))
}

fn write_group(group: &NodeGroup, w: &mut Writer) {
    let open = match &group.name {
        Some(name) => format!("group {} {{", quote_name(name)),
        None => "group {".to_string(),
    };
    w.block(open, "}", |w| {
        if let Some(color) = &group.color {
            w.line(format!("color = \"{}\";", render_color(color)));
        }
        if let Some(description) = &group.description {
            w.line(format!("description = \"{}\";", description));
        }
        for member in &group.members {
            w.line(format!("{};", quote_name(member)));
        }
    });
}
