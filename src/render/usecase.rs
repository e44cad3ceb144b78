use super::common::{
    compose_glyph, declaration, decorations, quote_name, render_link, write_note, LinkGlyph,
    Quoting,
};
use super::render_document;
use super::writer::Writer;
use crate::diagram::{sealed::Sealed, DiagramKind, Document};
use crate::primitives::usecase::{UsecaseDiagram, UsecaseElement, UsecaseLinkKind};
use crate::types::{ArrowDirection, DiagramMeta};

impl LinkGlyph for UsecaseLinkKind {
    fn glyph(&self, direction: Option<ArrowDirection>) -> String {
        match self {
            UsecaseLinkKind::Association => compose_glyph("", '-', "", direction),
            UsecaseLinkKind::Directed => compose_glyph("", '-', ">", direction),
            UsecaseLinkKind::Generalization => compose_glyph("<|", '-', "", direction),
            UsecaseLinkKind::Include | UsecaseLinkKind::Extend | UsecaseLinkKind::Dependency => {
                compose_glyph("", '.', ">", direction)
            }
        }
    }

    fn default_label(&self) -> Option<&'static str> {
        match self {
            UsecaseLinkKind::Include => Some("<<include>>"),
            UsecaseLinkKind::Extend => Some("<<extend>>"),
            _ => None,
        }
    }
}

impl Sealed for UsecaseDiagram {
    fn meta_slot(&mut self) -> &mut DiagramMeta {
        &mut self.meta
    }
}

impl Document for UsecaseDiagram {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Usecase
    }

    fn meta(&self) -> &DiagramMeta {
        &self.meta
    }

    fn render_with(&self, options: &super::RenderOptions) -> String {
        render_document(self.kind(), &self.meta, self.elements.len(), options, |w| {
            if self.options.left_to_right {
                w.line("left to right direction");
            }
            if let Some(style) = &self.options.actor_style {
                w.line(format!("skinparam actorStyle {}", style.keyword()));
            }
            write_elements(&self.elements, w);
        })
    }
}

fn write_elements(elements: &[UsecaseElement], w: &mut Writer) {
    for element in elements {
        match element {
            UsecaseElement::Actor(actor) => {
                let keyword = if actor.business { "actor/" } else { "actor" };
                w.line(format!(
                    "{}{}",
                    declaration(keyword, &actor.name, actor.alias.as_deref(), Quoting::General),
                    decorations(&actor.style)
                ));
            }
            UsecaseElement::Usecase(usecase) => {
                let keyword = if usecase.business { "usecase/" } else { "usecase" };
                w.line(format!(
                    "{}{}",
                    declaration(keyword, &usecase.name, usecase.alias.as_deref(), Quoting::General),
                    decorations(&usecase.style)
                ));
            }
            UsecaseElement::Boundary(boundary) => {
                let open = format!(
                    "{} {}{} {{",
                    boundary.kind.keyword(),
                    quote_name(&boundary.name),
                    decorations(&boundary.style)
                );
                w.block(open, "}", |w| write_elements(&boundary.elements, w));
            }
            UsecaseElement::Link(link) => w.line(render_link(link, Quoting::General)),
            UsecaseElement::Note(note) => write_note(note, Quoting::General, w),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::usecase::{Actor, ActorStyle, Boundary, Usecase};
    use crate::types::{Link, Style};

    #[test]
    fn test_include_and_extend_carry_default_labels() {
        let include = Link::new("Checkout", UsecaseLinkKind::Include, "Pay");
        assert_eq!(render_link(&include, Quoting::General), "Checkout ..> Pay : <<include>>");
        let extend = Link::new("Gift", UsecaseLinkKind::Extend, "Checkout").label("optional");
        assert_eq!(render_link(&extend, Quoting::General), "Gift ..> Checkout : optional");
        assert_eq!(UsecaseLinkKind::Generalization.glyph(Some(ArrowDirection::Up)), "<|-up-");
    }

    #[test]
    fn test_boundary_with_actors_and_usecases() {
        let mut builder = UsecaseDiagram::builder();
        builder.left_to_right().actor_style(ActorStyle::Awesome);
        builder.actor(Actor::new("Customer").business()).unwrap();
        builder
            .boundary(Boundary::new("Online Shop").style(Style::fill("AliceBlue")), |s| {
                s.usecase(Usecase::new("Place order").alias("UC1"))?;
                Ok(())
            })
            .unwrap();
        builder
            .link(Link::new("Customer", UsecaseLinkKind::Association, "UC1"))
            .unwrap();
        builder
            .link(Link::new(":Customer:", UsecaseLinkKind::Directed, "(Track parcel)"))
            .unwrap();
        assert_eq!(
            builder.build().render(),
            "@startuml\nleft to right direction\nskinparam actorStyle awesome\nactor/ Customer\nrectangle \"Online Shop\" #AliceBlue {\n  usecase \"Place order\" as UC1\n}\nCustomer -- UC1\n:Customer: --> (Track parcel)\n@enduml"
        );
    }
}
