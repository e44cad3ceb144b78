use super::common::{
    compose_glyph, decorations, quote_class_name, quote_name, render_link, write_note, LinkGlyph,
    Quoting,
};
use super::render_document;
use super::writer::Writer;
use crate::diagram::{sealed::Sealed, DiagramKind, Document};
use crate::primitives::class::{
    Class, ClassBodyItem, ClassDiagram, ClassElement, ClassPackage, Member, RelationKind,
};
use crate::types::{ArrowDirection, DiagramMeta};

impl LinkGlyph for RelationKind {
    fn glyph(&self, direction: Option<ArrowDirection>) -> String {
        match self {
            RelationKind::Extension => compose_glyph("<|", '-', "", direction),
            RelationKind::Implementation => compose_glyph("<|", '.', "", direction),
            RelationKind::Composition => compose_glyph("*", '-', "", direction),
            RelationKind::Aggregation => compose_glyph("o", '-', "", direction),
            RelationKind::Association => compose_glyph("", '-', "", direction),
            RelationKind::DirectedAssociation => compose_glyph("", '-', ">", direction),
            RelationKind::Dependency => compose_glyph("", '.', ">", direction),
            RelationKind::Dotted => compose_glyph("", '.', "", direction),
            RelationKind::Nested => compose_glyph("+", '-', "", direction),
        }
    }
}

impl Sealed for ClassDiagram {
    fn meta_slot(&mut self) -> &mut DiagramMeta {
        &mut self.meta
    }
}

impl Document for ClassDiagram {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Class
    }

    fn meta(&self) -> &DiagramMeta {
        &self.meta
    }

    fn render_with(&self, options: &super::RenderOptions) -> String {
        render_document(self.kind(), &self.meta, self.elements.len(), options, |w| {
            if self.options.hide_empty_members {
                w.line("hide empty members");
            }
            if self.options.hide_circle {
                w.line("hide circle");
            }
            if self.options.left_to_right {
                w.line("left to right direction");
            }
            write_elements(&self.elements, w);
        })
    }
}

fn write_elements(elements: &[ClassElement], w: &mut Writer) {
    for element in elements {
        match element {
            ClassElement::Class(class) => write_class(class, w),
            ClassElement::Package(package) => write_package(package, w),
            ClassElement::Together(children) => {
                w.block("together {", "}", |w| write_elements(children, w));
            }
            ClassElement::Relation(link) => w.line(render_link(link, Quoting::Class)),
            ClassElement::Note(note) => write_note(note, Quoting::Class, w),
        }
    }
}

fn class_head(class: &Class) -> String {
    let mut head = format!("{} {}", class.kind.keyword(), quote_class_name(&class.name));
    if let Some(generics) = &class.generics {
        head.push_str(&format!("<{}>", generics));
    }
    if let Some(alias) = &class.alias {
        head.push_str(" as ");
        head.push_str(alias);
    }
    head.push_str(&decorations(&class.style));
    head
}

fn member_line(member: &Member) -> String {
    let mut line = String::new();
    if let Some(modifier) = &member.modifier {
        line.push_str(modifier.keyword());
        line.push(' ');
    }
    if let Some(visibility) = &member.visibility {
        line.push(visibility.to_char());
    }
    line.push_str(&member.text);
    line
}

fn write_class(class: &Class, w: &mut Writer) {
    let head = class_head(class);
    if class.body.is_empty() {
        w.line(head);
        return;
    }
    w.block(format!("{} {{", head), "}", |w| {
        for item in &class.body {
            match item {
                ClassBodyItem::Member(member) => w.line(member_line(member)),
                ClassBodyItem::Separator { style, title } => match title {
                    Some(title) => w.line(format!("{} {} {}", style.token(), title, style.token())),
                    None => w.line(style.token()),
                },
            }
        }
    });
}

fn write_package(package: &ClassPackage, w: &mut Writer) {
    let open = format!(
        "{} {}{} {{",
        package.kind.keyword(),
        quote_name(&package.name),
        decorations(&package.style)
    );
    w.block(open, "}", |w| write_elements(&package.elements, w));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::class::{ClassKind, SeparatorStyle};
    use crate::types::{Link, Note, Style};

    #[test]
    fn test_glyph_table() {
        assert_eq!(RelationKind::Extension.glyph(None), "<|--");
        assert_eq!(RelationKind::Implementation.glyph(None), "<|..");
        assert_eq!(RelationKind::Composition.glyph(None), "*--");
        assert_eq!(RelationKind::Aggregation.glyph(None), "o--");
        assert_eq!(RelationKind::DirectedAssociation.glyph(None), "-->");
        assert_eq!(RelationKind::Dependency.glyph(Some(ArrowDirection::Left)), ".left.>");
        assert_eq!(RelationKind::Extension.glyph(Some(ArrowDirection::Up)), "<|-up-");
        assert_eq!(RelationKind::Nested.glyph(None), "+--");
    }

    #[test]
    fn test_class_with_body() {
        let class = Class::new("Repository")
            .kind(ClassKind::Abstract)
            .generics("T")
            .style(Style::new().stereotype("service"))
            .member(Member::new("items : List<T>").private())
            .titled_separator(SeparatorStyle::Dotted, "queries")
            .member(Member::new("count() : int").public().is_static());
        let mut builder = ClassDiagram::builder();
        builder.class(class).unwrap();
        assert_eq!(
            builder.build().render(),
            "@startuml\nabstract class Repository<T> <<service>> {\n  -items : List<T>\n  .. queries ..\n  {static} +count() : int\n}\n@enduml"
        );
    }

    #[test]
    fn test_namespaced_name_is_quoted() {
        let class = Class::new("net.example.User").alias("User");
        assert_eq!(class_head(&class), "class \"net.example.User\" as User");
    }

    #[test]
    fn test_relationship_style_forms_never_mix() {
        let short = Link::new("A", RelationKind::Association, "B").style(Style::new().line_color("red"));
        assert_eq!(render_link(&short, Quoting::Class), "A -- B #red");
        let extended = Link::new("A", RelationKind::Association, "B")
            .style(Style::new().line_color("red").text_color("blue"));
        assert_eq!(render_link(&extended, Quoting::Class), "A -- B #line:red;text:blue");
    }

    #[test]
    fn test_packages_together_and_notes() {
        let mut builder = ClassDiagram::builder();
        builder.hide_empty_members();
        builder
            .package(ClassPackage::namespace("net.shop"), |s| {
                s.together(|s| {
                    s.class("Order")?;
                    s.class("Invoice")?;
                    Ok(())
                })?;
                Ok(())
            })
            .unwrap();
        builder
            .relation(Link::new("Order", RelationKind::Composition, "Invoice").cardinality("1", "*"))
            .unwrap();
        builder.note(Note::new("paid upfront").top().of("Invoice")).unwrap();
        assert_eq!(
            builder.build().render(),
            "@startuml\nhide empty members\nnamespace net.shop {\n  together {\n    class Order\n    class Invoice\n  }\n}\nOrder \"1\" *-- \"*\" Invoice\nnote top of Invoice : paid upfront\n@enduml"
        );
    }
}
