use super::common::{
    compose_glyph, declaration, decorations, render_link, write_note, LinkGlyph, Quoting,
};
use super::render_document;
use super::writer::Writer;
use crate::diagram::{sealed::Sealed, DiagramKind, Document};
use crate::primitives::component::{ComponentDiagram, ComponentElement, ComponentLinkKind};
use crate::types::{ArrowDirection, DiagramMeta};

impl LinkGlyph for ComponentLinkKind {
    fn glyph(&self, direction: Option<ArrowDirection>) -> String {
        match self {
            ComponentLinkKind::Association => compose_glyph("", '-', "", direction),
            ComponentLinkKind::Directed => compose_glyph("", '-', ">", direction),
            ComponentLinkKind::Dependency => compose_glyph("", '.', ">", direction),
            ComponentLinkKind::Dotted => compose_glyph("", '.', "", direction),
            ComponentLinkKind::Realization => compose_glyph("<|", '.', "", direction),
        }
    }
}

impl Sealed for ComponentDiagram {
    fn meta_slot(&mut self) -> &mut DiagramMeta {
        &mut self.meta
    }
}

impl Document for ComponentDiagram {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Component
    }

    fn meta(&self) -> &DiagramMeta {
        &self.meta
    }

    fn render_with(&self, options: &super::RenderOptions) -> String {
        render_document(self.kind(), &self.meta, self.elements.len(), options, |w| {
            if self.options.left_to_right {
                w.line("left to right direction");
            }
            if let Some(style) = &self.options.component_style {
                w.line(format!("skinparam componentStyle {}", style.keyword()));
            }
            write_elements(&self.elements, w);
        })
    }
}

fn write_elements(elements: &[ComponentElement], w: &mut Writer) {
    for element in elements {
        match element {
            ComponentElement::Component(component) => w.line(format!(
                "{}{}",
                declaration("component", &component.name, component.alias.as_deref(), Quoting::General),
                decorations(&component.style)
            )),
            ComponentElement::Interface(interface) => w.line(format!(
                "{}{}",
                declaration("interface", &interface.name, interface.alias.as_deref(), Quoting::General),
                decorations(&interface.style)
            )),
            ComponentElement::Port(port) => {
                w.line(declaration(port.direction.keyword(), &port.name, None, Quoting::General))
            }
            ComponentElement::Container(container) => {
                let head = format!(
                    "{}{}",
                    declaration(
                        container.kind.keyword(),
                        &container.name,
                        container.alias.as_deref(),
                        Quoting::General
                    ),
                    decorations(&container.style)
                );
                if container.elements.is_empty() {
                    w.line(head);
                } else {
                    w.block(format!("{} {{", head), "}", |w| {
                        write_elements(&container.elements, w)
                    });
                }
            }
            ComponentElement::Link(link) => w.line(render_link(link, Quoting::General)),
            ComponentElement::Note(note) => write_note(note, Quoting::General, w),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::component::{
        Component, ComponentContainer, ComponentStyle, ContainerKind, Interface, Port,
    };
    use crate::types::{Link, Note, Style};

    #[test]
    fn test_component_link_glyphs() {
        assert_eq!(ComponentLinkKind::Realization.glyph(None), "<|..");
        assert_eq!(ComponentLinkKind::Dependency.glyph(Some(ArrowDirection::Left)), ".left.>");
        assert_eq!(ComponentLinkKind::Dotted.glyph(None), "..");
    }

    #[test]
    fn test_nested_containers_and_ports() {
        let mut builder = ComponentDiagram::builder();
        builder.component_style(ComponentStyle::Uml2);
        builder
            .container(ComponentContainer::new(ContainerKind::Node, "App Server"), |s| {
                s.container(ComponentContainer::new(ContainerKind::Component, "API").alias("api"), |s| {
                    s.port(Port::input("http"))?;
                    s.port(Port::output("db"))?;
                    Ok(())
                })?;
                s.component(Component::new("Worker").style(Style::fill("#EEE")))?;
                Ok(())
            })
            .unwrap();
        builder.container(ComponentContainer::new(ContainerKind::Cloud, "Internet"), |_| Ok(())).unwrap();
        builder.interface(Interface::new("REST").alias("rest")).unwrap();
        builder
            .link(Link::new("rest", ComponentLinkKind::Association, "api"))
            .unwrap();
        builder.note(Note::new("entry point").right().of("api")).unwrap();
        assert_eq!(
            builder.build().render(),
            "@startuml\nskinparam componentStyle uml2\nnode \"App Server\" {\n  component API as api {\n    portin http\n    portout db\n  }\n  component Worker #EEE\n}\ncloud Internet\ninterface REST as rest\nrest -- api\nnote right of api : entry point\n@enduml"
        );
    }
}
