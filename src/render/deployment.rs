use super::common::{
    compose_glyph, declaration, decorations, render_link, write_note, LinkGlyph, Quoting,
};
use super::render_document;
use super::writer::Writer;
use crate::diagram::{sealed::Sealed, DiagramKind, Document};
use crate::primitives::deployment::{DeploymentDiagram, DeploymentElement, DeploymentLinkKind};
use crate::types::{ArrowDirection, DiagramMeta};

impl LinkGlyph for DeploymentLinkKind {
    fn glyph(&self, direction: Option<ArrowDirection>) -> String {
        let (line, tail) = match self {
            DeploymentLinkKind::Line => ('-', ""),
            DeploymentLinkKind::Dotted => ('.', ""),
            DeploymentLinkKind::Wavy => ('~', ""),
            DeploymentLinkKind::Double => ('=', ""),
            DeploymentLinkKind::Arrow => ('-', ">"),
            DeploymentLinkKind::DottedArrow => ('.', ">"),
            DeploymentLinkKind::Composition => ('-', "*"),
            DeploymentLinkKind::Aggregation => ('-', "o"),
            DeploymentLinkKind::Plus => ('-', "+"),
            DeploymentLinkKind::Hash => ('-', "#"),
            DeploymentLinkKind::OpenArrow => ('-', ">>"),
            DeploymentLinkKind::Circle => ('-', "0"),
            DeploymentLinkKind::Caret => ('-', "^"),
        };
        compose_glyph("", line, tail, direction)
    }
}

impl Sealed for DeploymentDiagram {
    fn meta_slot(&mut self) -> &mut DiagramMeta {
        &mut self.meta
    }
}

impl Document for DeploymentDiagram {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Deployment
    }

    fn meta(&self) -> &DiagramMeta {
        &self.meta
    }

    fn render_with(&self, options: &super::RenderOptions) -> String {
        render_document(self.kind(), &self.meta, self.elements.len(), options, |w| {
            if self.options.left_to_right {
                w.line("left to right direction");
            }
            write_elements(&self.elements, w);
        })
    }
}

fn write_elements(elements: &[DeploymentElement], w: &mut Writer) {
    for element in elements {
        match element {
            DeploymentElement::Node(node) => {
                let head = format!(
                    "{}{}",
                    declaration(node.kind.keyword(), &node.name, node.alias.as_deref(), Quoting::General),
                    decorations(&node.style)
                );
                if node.elements.is_empty() {
                    w.line(head);
                } else {
                    w.block(format!("{} {{", head), "}", |w| write_elements(&node.elements, w));
                }
            }
            DeploymentElement::Link(link) => w.line(render_link(link, Quoting::General)),
            DeploymentElement::Note(note) => write_note(note, Quoting::General, w),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::deployment::{DeploymentKind, DeploymentNode};
    use crate::types::{Link, Style};

    #[test]
    fn test_deployment_glyph_table() {
        let glyphs: Vec<String> = [
            DeploymentLinkKind::Line,
            DeploymentLinkKind::Dotted,
            DeploymentLinkKind::Wavy,
            DeploymentLinkKind::Double,
            DeploymentLinkKind::Arrow,
            DeploymentLinkKind::DottedArrow,
            DeploymentLinkKind::Composition,
            DeploymentLinkKind::Aggregation,
            DeploymentLinkKind::Plus,
            DeploymentLinkKind::Hash,
            DeploymentLinkKind::OpenArrow,
            DeploymentLinkKind::Circle,
            DeploymentLinkKind::Caret,
        ]
        .iter()
        .map(|kind| kind.glyph(None))
        .collect();
        assert_eq!(
            glyphs,
            ["--", "..", "~~", "==", "-->", "..>", "--*", "--o", "--+", "--#", "-->>", "--0", "--^"]
        );
        assert_eq!(DeploymentLinkKind::Arrow.glyph(Some(ArrowDirection::Down)), "-down->");
    }

    #[test]
    fn test_nested_nodes() {
        let mut builder = DeploymentDiagram::builder();
        builder
            .container(DeploymentNode::new(DeploymentKind::Cloud, "AWS"), |s| {
                s.container(DeploymentNode::new(DeploymentKind::Node, "Web Tier").alias("web"), |s| {
                    s.element(DeploymentNode::new(DeploymentKind::Artifact, "app.jar"))?;
                    Ok(())
                })?;
                s.element(DeploymentNode::new(DeploymentKind::Database, "Postgres").alias("db"))?;
                Ok(())
            })
            .unwrap();
        builder
            .element(DeploymentNode::new(DeploymentKind::Actor, "User").style(Style::new().stereotype("human")))
            .unwrap();
        builder
            .link(Link::new("web", DeploymentLinkKind::Arrow, "db").label("JDBC"))
            .unwrap();
        assert_eq!(
            builder.build().render(),
            "@startuml\ncloud AWS {\n  node \"Web Tier\" as web {\n    artifact app.jar\n  }\n  database Postgres as db\n}\nactor User <<human>>\nweb --> db : JDBC\n@enduml"
        );
    }
}
