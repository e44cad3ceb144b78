use log::debug;

use super::{check_alias, check_link, check_note, check_style, require_optional, require_text, scoped, DiagramBuilder, StyleAxes};
use crate::error::Result;
use crate::primitives::class::{
    Class, ClassBodyItem, ClassDiagram, ClassElement, ClassOptions, ClassPackage, RelationKind,
};
use crate::types::{Link, Note};

pub type ClassDiagramBuilder = DiagramBuilder<ClassScope, ClassOptions>;

impl ClassDiagramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hide_empty_members(&mut self) -> &mut Self {
        self.options.hide_empty_members = true;
        self
    }

    pub fn hide_circle(&mut self) -> &mut Self {
        self.options.hide_circle = true;
        self
    }

    pub fn left_to_right(&mut self) -> &mut Self {
        self.options.left_to_right = true;
        self
    }

    pub fn build(self) -> ClassDiagram {
        let (meta, options, scope) = self.into_parts();
        debug!(kind = "class", elements = scope.elements.len(); "Built diagram");
        ClassDiagram {
            meta,
            options,
            elements: scope.elements,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClassScope {
    elements: Vec<ClassElement>,
}

impl ClassScope {
    pub fn elements(&self) -> &[ClassElement] {
        &self.elements
    }

    pub fn class(&mut self, class: impl Into<Class>) -> Result<&mut Self> {
        let class = class.into();
        require_text("class name", &class.name)?;
        check_alias(class.alias.as_deref())?;
        require_optional("generics", class.generics.as_deref())?;
        for item in &class.body {
            match item {
                ClassBodyItem::Member(member) => require_text("member", &member.text)?,
                ClassBodyItem::Separator { title, .. } => {
                    require_optional("separator title", title.as_deref())?
                }
            }
        }
        check_style(&class.style, "class", StyleAxes::ALL)?;
        self.elements.push(ClassElement::Class(class));
        Ok(self)
    }

    /// A `package` or `namespace` block, depending on the header's kind.
    pub fn package<F>(&mut self, header: impl Into<ClassPackage>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut ClassScope) -> Result<()>,
    {
        let mut package = header.into();
        require_text("package name", &package.name)?;
        check_style(&package.style, "package", StyleAxes::BACKGROUND_STEREOTYPE)?;
        package.elements = scoped::<ClassScope, _>(build)?.elements;
        self.elements.push(ClassElement::Package(package));
        Ok(self)
    }

    pub fn together<F>(&mut self, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut ClassScope) -> Result<()>,
    {
        let scope = scoped::<ClassScope, _>(build)?;
        self.elements.push(ClassElement::Together(scope.elements));
        Ok(self)
    }

    pub fn relation(&mut self, link: Link<RelationKind>) -> Result<&mut Self> {
        check_link(&link)?;
        self.elements.push(ClassElement::Relation(link));
        Ok(self)
    }

    /// Shorthand for an unlabelled, unstyled relation.
    pub fn relate(&mut self, source: &str, kind: RelationKind, target: &str) -> Result<&mut Self> {
        self.relation(Link::new(source, kind, target))
    }

    pub fn note(&mut self, note: impl Into<Note>) -> Result<&mut Self> {
        let note = note.into();
        check_note(&note)?;
        self.elements.push(ClassElement::Note(note));
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::primitives::class::Member;
    use crate::types::Style;

    #[test]
    fn test_blank_member_rejects_the_class() {
        let mut builder = ClassDiagramBuilder::new();
        let class = Class::new("User").member("id : u64").member(Member::new(" "));
        assert_eq!(builder.class(class).unwrap_err(), Error::empty("member"));
        assert!(builder.elements().is_empty());
    }

    #[test]
    fn test_relation_rejects_background() {
        let mut builder = ClassDiagramBuilder::new();
        let link = Link::new("A", RelationKind::Association, "B").style(Style::fill("red"));
        assert_eq!(
            builder.relation(link).unwrap_err(),
            Error::unsupported("relationship", "background")
        );
        assert!(builder.relate("A", RelationKind::Extension, "").is_err());
        assert!(builder.elements().is_empty());
    }

    #[test]
    fn test_nested_package_error_propagates() {
        let mut builder = ClassDiagramBuilder::new();
        let result = builder.package("model", |s| {
            s.class("User")?;
            s.package("inner", |s| {
                s.class("")?;
                Ok(())
            })?;
            Ok(())
        });
        assert!(result.is_err());
        assert!(builder.elements().is_empty());
    }
}
