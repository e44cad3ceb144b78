use log::debug;

use super::{check_alias, check_note, check_style, require_optional, require_text, required, scoped, DiagramBuilder, StyleAxes};
use crate::error::{Error, Result};
use crate::primitives::state::{
    CompositeState, PseudoKind, PseudoState, State, StateDiagram, StateElement, StateOptions,
    Transition, INITIAL_FINAL,
};
use crate::types::Note;

pub type StateDiagramBuilder = DiagramBuilder<StateScope, StateOptions>;

impl StateDiagramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hide_empty_description(&mut self) -> &mut Self {
        self.options.hide_empty_description = true;
        self
    }

    pub fn left_to_right(&mut self) -> &mut Self {
        self.options.left_to_right = true;
        self
    }

    pub fn build(self) -> StateDiagram {
        let (meta, options, scope) = self.into_parts();
        debug!(kind = "state", elements = scope.elements.len(); "Built diagram");
        StateDiagram {
            meta,
            options,
            elements: scope.elements,
        }
    }
}

/// Element vocabulary of a state diagram, at top level and inside composites.
#[derive(Debug, Clone, Default)]
pub struct StateScope {
    elements: Vec<StateElement>,
}

impl StateScope {
    pub fn elements(&self) -> &[StateElement] {
        &self.elements
    }

    pub fn state(&mut self, state: impl Into<State>) -> Result<&mut Self> {
        let state = state.into();
        require_text("state name", &state.name)?;
        check_alias(state.alias.as_deref())?;
        for line in &state.descriptions {
            require_text("state description", line)?;
        }
        check_style(&state.style, "state", StyleAxes::ALL)?;
        self.elements.push(StateElement::State(state));
        Ok(self)
    }

    /// A composite state with a single region.
    pub fn composite<F>(&mut self, header: impl Into<CompositeState>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut StateScope) -> Result<()>,
    {
        let mut composite = check_composite(header.into())?;
        let region = scoped::<StateScope, _>(build)?;
        composite.regions = vec![region.elements];
        self.elements.push(StateElement::Composite(composite));
        Ok(self)
    }

    /// A composite state split into concurrent regions.
    pub fn concurrent<F>(&mut self, header: impl Into<CompositeState>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut RegionBuilder) -> Result<()>,
    {
        let mut composite = check_composite(header.into())?;
        let regions = scoped::<RegionBuilder, _>(build)?;
        if regions.regions.is_empty() {
            return Err(Error::Validation {
                field: "composite state",
                reason: "needs at least one region",
            });
        }
        composite.regions = regions.regions;
        self.elements.push(StateElement::Composite(composite));
        Ok(self)
    }

    pub fn pseudo(&mut self, name: impl Into<String>, kind: PseudoKind) -> Result<&mut Self> {
        let name = required("pseudo state name", name)?;
        self.elements
            .push(StateElement::Pseudo(PseudoState { name, kind }));
        Ok(self)
    }

    pub fn transition(&mut self, transition: impl Into<Transition>) -> Result<&mut Self> {
        let transition = transition.into();
        require_text("transition source", &transition.source)?;
        require_text("transition target", &transition.target)?;
        require_optional("transition label", transition.label.as_deref())?;
        check_style(&transition.style, "transition", StyleAxes::LINE)?;
        self.elements.push(StateElement::Transition(transition));
        Ok(self)
    }

    /// `[*] --> target`
    pub fn initial(&mut self, target: &str) -> Result<&mut Self> {
        self.transition(Transition::new(INITIAL_FINAL, target))
    }

    /// `source --> [*]`
    pub fn terminal(&mut self, source: &str) -> Result<&mut Self> {
        self.transition(Transition::new(source, INITIAL_FINAL))
    }

    pub fn note(&mut self, note: impl Into<Note>) -> Result<&mut Self> {
        let note = note.into();
        check_note(&note)?;
        self.elements.push(StateElement::Note(note));
        Ok(self)
    }
}

fn check_composite(composite: CompositeState) -> Result<CompositeState> {
    require_text("state name", &composite.name)?;
    check_alias(composite.alias.as_deref())?;
    check_style(&composite.style, "composite state", StyleAxes::ALL)?;
    Ok(composite)
}

/// Collects the concurrent regions of a composite state.
#[derive(Debug, Clone, Default)]
pub struct RegionBuilder {
    regions: Vec<Vec<StateElement>>,
}

impl RegionBuilder {
    pub fn region<F>(&mut self, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut StateScope) -> Result<()>,
    {
        let scope = scoped::<StateScope, _>(build)?;
        self.regions.push(scope.elements);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Style;

    #[test]
    fn test_failed_call_appends_nothing() {
        let mut builder = StateDiagramBuilder::new();
        builder.state("Idle").unwrap();
        assert!(builder.state("").is_err());
        assert!(builder.transition(("Idle", " ")).is_err());
        assert_eq!(builder.elements().len(), 1);
    }

    #[test]
    fn test_failed_callback_drops_the_composite() {
        let mut builder = StateDiagramBuilder::new();
        let result = builder.composite("Outer", |s| {
            s.state("Inner")?;
            s.state("   ")?;
            Ok(())
        });
        assert!(result.is_err());
        assert!(builder.elements().is_empty());
    }

    #[test]
    fn test_transition_rejects_text_color() {
        let mut builder = StateDiagramBuilder::new();
        let transition = Transition::new("A", "B").style(Style::new().text_color("red"));
        assert_eq!(
            builder.transition(transition).unwrap_err(),
            Error::unsupported("transition", "text color")
        );
    }

    #[test]
    fn test_concurrent_needs_a_region() {
        let mut builder = StateDiagramBuilder::new();
        assert!(builder.concurrent("Active", |_| Ok(())).is_err());
    }
}
