use log::debug;

use super::{check_alias, check_link, check_note, check_style, require_text, scoped, DiagramBuilder, StyleAxes};
use crate::error::Result;
use crate::primitives::component::{
    Component, ComponentContainer, ComponentDiagram, ComponentElement, ComponentLinkKind,
    ComponentOptions, ComponentStyle, Interface, Port,
};
use crate::types::{Link, Note};

pub type ComponentDiagramBuilder = DiagramBuilder<ComponentScope, ComponentOptions>;

impl ComponentDiagramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left_to_right(&mut self) -> &mut Self {
        self.options.left_to_right = true;
        self
    }

    /// `skinparam componentStyle …`
    pub fn component_style(&mut self, style: ComponentStyle) -> &mut Self {
        self.options.component_style = Some(style);
        self
    }

    pub fn build(self) -> ComponentDiagram {
        let (meta, options, scope) = self.into_parts();
        debug!(kind = "component", elements = scope.elements.len(); "Built diagram");
        ComponentDiagram {
            meta,
            options,
            elements: scope.elements,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ComponentScope {
    elements: Vec<ComponentElement>,
}

impl ComponentScope {
    pub fn elements(&self) -> &[ComponentElement] {
        &self.elements
    }

    pub fn component(&mut self, component: impl Into<Component>) -> Result<&mut Self> {
        let component = component.into();
        require_text("component name", &component.name)?;
        check_alias(component.alias.as_deref())?;
        check_style(&component.style, "component", StyleAxes::ALL)?;
        self.elements.push(ComponentElement::Component(component));
        Ok(self)
    }

    pub fn interface(&mut self, interface: impl Into<Interface>) -> Result<&mut Self> {
        let interface = interface.into();
        require_text("interface name", &interface.name)?;
        check_alias(interface.alias.as_deref())?;
        check_style(&interface.style, "interface", StyleAxes::ALL)?;
        self.elements.push(ComponentElement::Interface(interface));
        Ok(self)
    }

    pub fn port(&mut self, port: impl Into<Port>) -> Result<&mut Self> {
        let port = port.into();
        require_text("port name", &port.name)?;
        self.elements.push(ComponentElement::Port(port));
        Ok(self)
    }

    pub fn container<F>(&mut self, header: impl Into<ComponentContainer>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut ComponentScope) -> Result<()>,
    {
        let mut container = header.into();
        require_text("container name", &container.name)?;
        check_alias(container.alias.as_deref())?;
        check_style(&container.style, container.kind.keyword(), StyleAxes::ALL)?;
        container.elements = scoped::<ComponentScope, _>(build)?.elements;
        self.elements.push(ComponentElement::Container(container));
        Ok(self)
    }

    pub fn link(&mut self, link: Link<ComponentLinkKind>) -> Result<&mut Self> {
        check_link(&link)?;
        self.elements.push(ComponentElement::Link(link));
        Ok(self)
    }

    pub fn note(&mut self, note: impl Into<Note>) -> Result<&mut Self> {
        let note = note.into();
        check_note(&note)?;
        self.elements.push(ComponentElement::Note(note));
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_failed_container_appends_nothing() {
        let mut builder = ComponentDiagramBuilder::new();
        let result = builder.container("Backend", |s| {
            s.component("Api")?;
            s.port("")?;
            Ok(())
        });
        assert_eq!(result.unwrap_err(), Error::empty("port name"));
        assert!(builder.elements().is_empty());
    }

    #[test]
    fn test_relationship_rejects_background() {
        let mut builder = ComponentDiagramBuilder::new();
        let link = Link::new("A", ComponentLinkKind::Directed, "B")
            .style(crate::types::Style::fill("red"));
        assert_eq!(
            builder.link(link).unwrap_err(),
            Error::unsupported("relationship", "background")
        );
    }
}
