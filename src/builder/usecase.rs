use log::debug;

use super::{check_alias, check_link, check_note, check_style, require_text, scoped, DiagramBuilder, StyleAxes};
use crate::error::Result;
use crate::primitives::usecase::{
    Actor, ActorStyle, Boundary, Usecase, UsecaseDiagram, UsecaseElement, UsecaseLinkKind,
    UsecaseOptions,
};
use crate::types::{Link, Note};

pub type UsecaseDiagramBuilder = DiagramBuilder<UsecaseScope, UsecaseOptions>;

impl UsecaseDiagramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left_to_right(&mut self) -> &mut Self {
        self.options.left_to_right = true;
        self
    }

    pub fn actor_style(&mut self, style: ActorStyle) -> &mut Self {
        self.options.actor_style = Some(style);
        self
    }

    pub fn build(self) -> UsecaseDiagram {
        let (meta, options, scope) = self.into_parts();
        debug!(kind = "usecase", elements = scope.elements.len(); "Built diagram");
        UsecaseDiagram {
            meta,
            options,
            elements: scope.elements,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UsecaseScope {
    elements: Vec<UsecaseElement>,
}

impl UsecaseScope {
    pub fn elements(&self) -> &[UsecaseElement] {
        &self.elements
    }

    pub fn actor(&mut self, actor: impl Into<Actor>) -> Result<&mut Self> {
        let actor = actor.into();
        require_text("actor name", &actor.name)?;
        check_alias(actor.alias.as_deref())?;
        check_style(&actor.style, "actor", StyleAxes::ALL)?;
        self.elements.push(UsecaseElement::Actor(actor));
        Ok(self)
    }

    pub fn usecase(&mut self, usecase: impl Into<Usecase>) -> Result<&mut Self> {
        let usecase = usecase.into();
        require_text("use case name", &usecase.name)?;
        check_alias(usecase.alias.as_deref())?;
        check_style(&usecase.style, "use case", StyleAxes::ALL)?;
        self.elements.push(UsecaseElement::Usecase(usecase));
        Ok(self)
    }

    /// A system boundary (`rectangle` or `package`) around nested elements.
    pub fn boundary<F>(&mut self, header: impl Into<Boundary>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut UsecaseScope) -> Result<()>,
    {
        let mut boundary = header.into();
        require_text("boundary name", &boundary.name)?;
        check_style(&boundary.style, "boundary", StyleAxes::ALL)?;
        boundary.elements = scoped::<UsecaseScope, _>(build)?.elements;
        self.elements.push(UsecaseElement::Boundary(boundary));
        Ok(self)
    }

    pub fn link(&mut self, link: Link<UsecaseLinkKind>) -> Result<&mut Self> {
        check_link(&link)?;
        self.elements.push(UsecaseElement::Link(link));
        Ok(self)
    }

    pub fn note(&mut self, note: impl Into<Note>) -> Result<&mut Self> {
        let note = note.into();
        check_note(&note)?;
        self.elements.push(UsecaseElement::Note(note));
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_are_rejected() {
        let mut builder = UsecaseDiagramBuilder::new();
        assert!(builder.actor(" ").is_err());
        assert!(builder.usecase(Usecase::new("Login").alias("")).is_err());
        assert!(builder.boundary("", |_| Ok(())).is_err());
        assert!(builder.elements().is_empty());
    }
}
