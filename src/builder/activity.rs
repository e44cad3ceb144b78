use log::debug;

use super::{check_style, require_optional, require_text, required, scoped, DiagramBuilder, StyleAxes};
use crate::error::{Error, Result};
use crate::primitives::activity::{
    Action, ActivityArrow, ActivityDiagram, ActivityElement, ActivityNote, Branch, Conditional,
    ElseBranch, Fork, ForkKind, Group, Partition, RepeatLoop, Swimlane, WhileLoop,
};
use crate::types::{Background, Style};

pub type ActivityDiagramBuilder = DiagramBuilder<ActivityScope>;

impl ActivityDiagramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> ActivityDiagram {
        let (meta, (), scope) = self.into_parts();
        debug!(kind = "activity", elements = scope.elements.len(); "Built diagram");
        ActivityDiagram {
            meta,
            elements: scope.elements,
        }
    }
}

/// Element vocabulary of an activity diagram. Every nested block (branches,
/// loops, partitions, groups) receives a fresh scope of this same type.
#[derive(Debug, Clone, Default)]
pub struct ActivityScope {
    elements: Vec<ActivityElement>,
}

impl ActivityScope {
    pub fn elements(&self) -> &[ActivityElement] {
        &self.elements
    }

    fn push(&mut self, element: ActivityElement) -> Result<&mut Self> {
        self.elements.push(element);
        Ok(self)
    }

    pub fn start(&mut self) -> Result<&mut Self> {
        self.push(ActivityElement::Start)
    }

    pub fn stop(&mut self) -> Result<&mut Self> {
        self.push(ActivityElement::Stop)
    }

    pub fn end(&mut self) -> Result<&mut Self> {
        self.push(ActivityElement::End)
    }

    pub fn kill(&mut self) -> Result<&mut Self> {
        self.push(ActivityElement::Kill)
    }

    pub fn detach(&mut self) -> Result<&mut Self> {
        self.push(ActivityElement::Detach)
    }

    /// `break` out of the enclosing loop.
    pub fn break_loop(&mut self) -> Result<&mut Self> {
        self.push(ActivityElement::Break)
    }

    pub fn action(&mut self, action: impl Into<Action>) -> Result<&mut Self> {
        let action = action.into();
        require_text("action text", &action.text)?;
        check_style(&action.style, "action", StyleAxes::BACKGROUND_STEREOTYPE)?;
        self.push(ActivityElement::Action(action))
    }

    pub fn arrow(&mut self, arrow: impl Into<ActivityArrow>) -> Result<&mut Self> {
        let arrow = arrow.into();
        require_optional("arrow label", arrow.label.as_deref())?;
        check_style(&arrow.style, "arrow", StyleAxes::LINE)?;
        self.push(ActivityElement::Arrow(arrow))
    }

    pub fn conditional<F>(&mut self, condition: impl Into<String>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut ConditionalBuilder) -> Result<()>,
    {
        let condition = required("if condition", condition)?;
        let mut builder = ConditionalBuilder::new(condition);
        build(&mut builder)?;
        let conditional = builder.finish()?;
        self.push(ActivityElement::If(conditional))
    }

    pub fn while_loop<F>(&mut self, header: impl Into<WhileLoop>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut ActivityScope) -> Result<()>,
    {
        let mut while_loop = header.into();
        require_text("while condition", &while_loop.condition)?;
        require_optional("while label", while_loop.label.as_deref())?;
        require_optional("while exit label", while_loop.exit_label.as_deref())?;
        while_loop.elements = scoped::<ActivityScope, _>(build)?.elements;
        self.push(ActivityElement::While(while_loop))
    }

    pub fn repeat_loop<F>(&mut self, header: impl Into<RepeatLoop>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut ActivityScope) -> Result<()>,
    {
        let mut repeat = header.into();
        require_text("repeat condition", &repeat.condition)?;
        require_optional("repeat label", repeat.label.as_deref())?;
        require_optional("repeat exit label", repeat.exit_label.as_deref())?;
        repeat.elements = scoped::<ActivityScope, _>(build)?.elements;
        self.push(ActivityElement::Repeat(repeat))
    }

    /// Parallel branches; `fork` joins them with a bar, `split` does not.
    pub fn parallel<F>(&mut self, kind: ForkKind, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut ForkBuilder) -> Result<()>,
    {
        let builder = scoped::<ForkBuilder, _>(build)?;
        if builder.branches.is_empty() {
            return Err(Error::Validation {
                field: kind.keyword(),
                reason: "needs at least one branch",
            });
        }
        self.push(ActivityElement::Fork(Fork {
            kind,
            branches: builder.branches,
        }))
    }

    pub fn fork<F>(&mut self, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut ForkBuilder) -> Result<()>,
    {
        self.parallel(ForkKind::Fork, build)
    }

    pub fn split<F>(&mut self, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut ForkBuilder) -> Result<()>,
    {
        self.parallel(ForkKind::Split, build)
    }

    pub fn partition<F>(&mut self, header: impl Into<Partition>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut ActivityScope) -> Result<()>,
    {
        let mut partition = header.into();
        require_text("partition name", &partition.name)?;
        check_style(&partition.style, "partition", StyleAxes::BACKGROUND)?;
        check_solid(&partition.style, "partition")?;
        partition.elements = scoped::<ActivityScope, _>(build)?.elements;
        self.push(ActivityElement::Partition(partition))
    }

    pub fn group<F>(&mut self, name: impl Into<String>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut ActivityScope) -> Result<()>,
    {
        let name = required("group name", name)?;
        let elements = scoped::<ActivityScope, _>(build)?.elements;
        self.push(ActivityElement::Group(Group { name, elements }))
    }

    /// Switch lanes. Accepted inside partitions and groups too; whether the
    /// result makes sense there is up to the rendering engine.
    pub fn swimlane(&mut self, lane: impl Into<Swimlane>) -> Result<&mut Self> {
        let lane = lane.into();
        require_text("swimlane name", &lane.name)?;
        check_style(&lane.style, "swimlane", StyleAxes::BACKGROUND)?;
        check_solid(&lane.style, "swimlane")?;
        self.push(ActivityElement::Swimlane(lane))
    }

    pub fn note(&mut self, note: impl Into<ActivityNote>) -> Result<&mut Self> {
        let note = note.into();
        require_text("note content", &note.content)?;
        check_style(&note.style, "note", StyleAxes::BACKGROUND)?;
        self.push(ActivityElement::Note(note))
    }

    pub fn connector(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        let name = required("connector name", name)?;
        self.push(ActivityElement::Connector(name))
    }
}

/// Lane and partition headers have no room for the `|` a gradient is
/// written with.
fn check_solid(style: &Style, element: &'static str) -> Result<()> {
    match style.background {
        Some(Background::Gradient(_)) => Err(Error::unsupported(element, "gradient")),
        _ => Ok(()),
    }
}

/// Collects the branches of one `if` block.
#[derive(Debug, Clone)]
pub struct ConditionalBuilder {
    condition: String,
    then: Option<Branch>,
    elseifs: Vec<Branch>,
    otherwise: Option<ElseBranch>,
}

impl ConditionalBuilder {
    fn new(condition: String) -> Self {
        Self {
            condition,
            then: None,
            elseifs: Vec::new(),
            otherwise: None,
        }
    }

    pub fn then<F>(&mut self, label: Option<&str>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut ActivityScope) -> Result<()>,
    {
        if self.then.is_some() {
            return Err(Error::Validation {
                field: "if",
                reason: "already has a then branch",
            });
        }
        require_optional("then label", label)?;
        let elements = scoped::<ActivityScope, _>(build)?.elements;
        self.then = Some(Branch {
            condition: self.condition.clone(),
            label: label.map(str::to_string),
            elements,
        });
        Ok(self)
    }

    pub fn elseif<F>(&mut self, condition: &str, label: Option<&str>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut ActivityScope) -> Result<()>,
    {
        require_text("elseif condition", condition)?;
        require_optional("elseif label", label)?;
        let elements = scoped::<ActivityScope, _>(build)?.elements;
        self.elseifs.push(Branch {
            condition: condition.to_string(),
            label: label.map(str::to_string),
            elements,
        });
        Ok(self)
    }

    pub fn otherwise<F>(&mut self, label: Option<&str>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut ActivityScope) -> Result<()>,
    {
        if self.otherwise.is_some() {
            return Err(Error::Validation {
                field: "if",
                reason: "already has an else branch",
            });
        }
        require_optional("else label", label)?;
        let elements = scoped::<ActivityScope, _>(build)?.elements;
        self.otherwise = Some(ElseBranch {
            label: label.map(str::to_string),
            elements,
        });
        Ok(self)
    }

    fn finish(self) -> Result<Conditional> {
        let then = self.then.ok_or(Error::Validation {
            field: "if",
            reason: "needs a then branch",
        })?;
        let mut branches = Vec::with_capacity(self.elseifs.len() + 1);
        branches.push(then);
        branches.extend(self.elseifs);
        Ok(Conditional {
            branches,
            otherwise: self.otherwise,
        })
    }
}

/// Collects the branches of a `fork` or `split`.
#[derive(Debug, Clone, Default)]
pub struct ForkBuilder {
    branches: Vec<Vec<ActivityElement>>,
}

impl ForkBuilder {
    pub fn branch<F>(&mut self, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut ActivityScope) -> Result<()>,
    {
        let scope = scoped::<ActivityScope, _>(build)?;
        self.branches.push(scope.elements);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Gradient;

    #[test]
    fn test_if_without_then_is_rejected() {
        let mut builder = ActivityDiagramBuilder::new();
        let result = builder.conditional("ready?", |c| {
            c.otherwise(None, |s| {
                s.action("wait")?;
                Ok(())
            })?;
            Ok(())
        });
        assert!(result.is_err());
        assert!(builder.elements().is_empty());
    }

    #[test]
    fn test_empty_action_leaves_scope_unchanged() {
        let mut builder = ActivityDiagramBuilder::new();
        builder.start().unwrap();
        assert_eq!(builder.action("  ").unwrap_err(), Error::empty("action text"));
        assert_eq!(builder.elements(), &[ActivityElement::Start]);
    }

    #[test]
    fn test_swimlane_accepts_background_only() {
        let mut builder = ActivityDiagramBuilder::new();
        let lane = Swimlane::new("Ops").style(Style::fill("red").line_color("blue"));
        assert_eq!(
            builder.swimlane(lane).unwrap_err(),
            Error::unsupported("swimlane", "line")
        );
    }

    #[test]
    fn test_gradient_lane_is_rejected() {
        let mut builder = ActivityDiagramBuilder::new();
        let lane = Swimlane::new("Ops").style(Style::fill(Gradient::horizontal("red", "green")));
        assert_eq!(
            builder.swimlane(lane).unwrap_err(),
            Error::unsupported("swimlane", "gradient")
        );
        assert!(builder.elements().is_empty());
        builder.swimlane(Swimlane::new("Ops").style(Style::fill("red"))).unwrap();
    }

    #[test]
    fn test_gradient_partition_is_rejected() {
        let mut builder = ActivityDiagramBuilder::new();
        let header = Partition::new("P").style(Style::fill(Gradient::horizontal("red", "green")));
        let err = builder
            .partition(header, |s| {
                s.action("work")?;
                Ok(())
            })
            .unwrap_err();
        assert_eq!(err, Error::unsupported("partition", "gradient"));
        assert!(builder.elements().is_empty());
    }

    #[test]
    fn test_swimlane_inside_partition_is_constructible() {
        let mut builder = ActivityDiagramBuilder::new();
        builder
            .partition("P", |s| {
                s.swimlane("Lane")?;
                Ok(())
            })
            .unwrap();
        assert_eq!(builder.elements().len(), 1);
    }

    #[test]
    fn test_fork_needs_a_branch() {
        let mut builder = ActivityDiagramBuilder::new();
        assert!(builder.fork(|_| Ok(())).is_err());
    }
}
