use super::common::{declaration, decorations, reference, render_link, write_note, Quoting};
use super::render_document;
use super::writer::Writer;
use crate::diagram::{sealed::Sealed, DiagramKind, Document};
use crate::primitives::object::{MapEntry, MapNode, ObjectDiagram, ObjectElement, ObjectNode};
use crate::types::DiagramMeta;

impl Sealed for ObjectDiagram {
    fn meta_slot(&mut self) -> &mut DiagramMeta {
        &mut self.meta
    }
}

impl Document for ObjectDiagram {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Object
    }

    fn meta(&self) -> &DiagramMeta {
        &self.meta
    }

    fn render_with(&self, options: &super::RenderOptions) -> String {
        render_document(self.kind(), &self.meta, self.elements.len(), options, |w| {
            for element in &self.elements {
                match element {
                    ObjectElement::Object(object) => write_object(object, w),
                    ObjectElement::Map(map) => write_map(map, w),
                    ObjectElement::Relation(link) => w.line(render_link(link, Quoting::Class)),
                    ObjectElement::Note(note) => write_note(note, Quoting::Class, w),
                }
            }
        })
    }
}

fn write_object(object: &ObjectNode, w: &mut Writer) {
    let head = format!(
        "{}{}",
        declaration("object", &object.name, object.alias.as_deref(), Quoting::Class),
        decorations(&object.style)
    );
    if object.fields.is_empty() {
        w.line(head);
        return;
    }
    w.block(format!("{} {{", head), "}", |w| {
        for (name, value) in &object.fields {
            w.line(format!("{} = {}", name, value));
        }
    });
}

fn write_map(map: &MapNode, w: &mut Writer) {
    let head = format!(
        "{}{} {{",
        declaration("map", &map.name, map.alias.as_deref(), Quoting::Class),
        decorations(&map.style)
    );
    w.block(head, "}", |w| {
        for entry in &map.entries {
            match entry {
                MapEntry::Value { key, value } => w.line(format!("{} => {}", key, value)),
                MapEntry::Link { key, target } => {
                    w.line(format!("{} *-> {}", key, reference(target, Quoting::Class)))
                }
            }
        }
    });
}
