use log::debug;

use super::{check_alias, check_link, check_note, check_style, require_text, DiagramBuilder, StyleAxes};
use crate::error::Result;
use crate::primitives::class::RelationKind;
use crate::primitives::object::{MapEntry, MapNode, ObjectDiagram, ObjectElement, ObjectNode};
use crate::types::{Link, Note};

pub type ObjectDiagramBuilder = DiagramBuilder<ObjectScope>;

impl ObjectDiagramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> ObjectDiagram {
        let (meta, (), scope) = self.into_parts();
        debug!(kind = "object", elements = scope.elements.len(); "Built diagram");
        ObjectDiagram {
            meta,
            elements: scope.elements,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ObjectScope {
    elements: Vec<ObjectElement>,
}

impl ObjectScope {
    pub fn elements(&self) -> &[ObjectElement] {
        &self.elements
    }

    pub fn object(&mut self, object: impl Into<ObjectNode>) -> Result<&mut Self> {
        let object = object.into();
        require_text("object name", &object.name)?;
        check_alias(object.alias.as_deref())?;
        for (name, _) in &object.fields {
            require_text("field name", name)?;
        }
        check_style(&object.style, "object", StyleAxes::ALL)?;
        self.elements.push(ObjectElement::Object(object));
        Ok(self)
    }

    pub fn map(&mut self, map: impl Into<MapNode>) -> Result<&mut Self> {
        let map = map.into();
        require_text("map name", &map.name)?;
        check_alias(map.alias.as_deref())?;
        for entry in &map.entries {
            match entry {
                MapEntry::Value { key, .. } => require_text("map key", key)?,
                MapEntry::Link { key, target } => {
                    require_text("map key", key)?;
                    require_text("map link target", target)?;
                }
            }
        }
        check_style(&map.style, "map", StyleAxes::ALL)?;
        self.elements.push(ObjectElement::Map(map));
        Ok(self)
    }

    pub fn relation(&mut self, link: Link<RelationKind>) -> Result<&mut Self> {
        check_link(&link)?;
        self.elements.push(ObjectElement::Relation(link));
        Ok(self)
    }

    pub fn note(&mut self, note: impl Into<Note>) -> Result<&mut Self> {
        let note = note.into();
        check_note(&note)?;
        self.elements.push(ObjectElement::Note(note));
        Ok(self)
    }
}
