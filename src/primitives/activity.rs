//! Activity diagram IR (the "new" activity syntax: `:action;`, `if`, `fork`, …).

use serde::{Deserialize, Serialize};

use crate::builder::ActivityDiagramBuilder;
use crate::types::{DiagramMeta, Style};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDiagram {
    pub(crate) meta: DiagramMeta,
    pub(crate) elements: Vec<ActivityElement>,
}

impl ActivityDiagram {
    pub fn builder() -> ActivityDiagramBuilder {
        ActivityDiagramBuilder::new()
    }

    pub fn elements(&self) -> &[ActivityElement] {
        &self.elements
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityElement {
    Start,
    Stop,
    End,
    Kill,
    Detach,
    Break,
    Action(Action),
    Arrow(ActivityArrow),
    If(Conditional),
    While(WhileLoop),
    Repeat(RepeatLoop),
    Fork(Fork),
    Partition(Partition),
    Group(Group),
    Swimlane(Swimlane),
    Note(ActivityNote),
    /// `(A)` goto/connector circle.
    Connector(String),
}

/// `#color:text; <<stereotype>>`. The stereotype selects the SDL shape
/// (`input`, `output`, `procedure`, `load`, `save`, `continuous`, `task`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub text: String,
    pub style: Style,
}

impl Action {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl From<&str> for Action {
    fn from(text: &str) -> Self {
        Action::new(text)
    }
}

/// `-> label;` or `-[#red,dashed]-> label;`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityArrow {
    pub label: Option<String>,
    pub style: Style,
}

impl ActivityArrow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl From<&str> for ActivityArrow {
    fn from(label: &str) -> Self {
        ActivityArrow::new().label(label)
    }
}

/// One guarded branch: `if (condition) then (label)` or `elseif …`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub condition: String,
    pub label: Option<String>,
    pub elements: Vec<ActivityElement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElseBranch {
    pub label: Option<String>,
    pub elements: Vec<ActivityElement>,
}

/// `if` / `elseif`* / `else`? / `endif`. The first branch is the `if`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditional {
    pub branches: Vec<Branch>,
    pub otherwise: Option<ElseBranch>,
}

/// `while (condition) is (label)` … `endwhile (exit_label)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhileLoop {
    pub condition: String,
    pub label: Option<String>,
    pub exit_label: Option<String>,
    pub elements: Vec<ActivityElement>,
}

impl WhileLoop {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            label: None,
            exit_label: None,
            elements: Vec::new(),
        }
    }

    pub fn is(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn exit(mut self, label: impl Into<String>) -> Self {
        self.exit_label = Some(label.into());
        self
    }
}

impl From<&str> for WhileLoop {
    fn from(condition: &str) -> Self {
        WhileLoop::new(condition)
    }
}

/// `repeat` … `repeat while (condition) is (label) not (exit_label)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatLoop {
    pub condition: String,
    pub label: Option<String>,
    pub exit_label: Option<String>,
    pub elements: Vec<ActivityElement>,
}

impl RepeatLoop {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            label: None,
            exit_label: None,
            elements: Vec::new(),
        }
    }

    pub fn is(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn not(mut self, label: impl Into<String>) -> Self {
        self.exit_label = Some(label.into());
        self
    }
}

impl From<&str> for RepeatLoop {
    fn from(condition: &str) -> Self {
        RepeatLoop::new(condition)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForkKind {
    /// Parallel branches joined by a bar.
    Fork,
    /// Parallel branches without the join bar.
    Split,
}

impl ForkKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            ForkKind::Fork => "fork",
            ForkKind::Split => "split",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fork {
    pub kind: ForkKind,
    pub branches: Vec<Vec<ActivityElement>>,
}

/// `partition "Name" #color {` … `}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub name: String,
    pub style: Style,
    pub elements: Vec<ActivityElement>,
}

impl Partition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: Style::default(),
            elements: Vec::new(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl From<&str> for Partition {
    fn from(name: &str) -> Self {
        Partition::new(name)
    }
}

/// `group Name` … `end group`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub elements: Vec<ActivityElement>,
}

/// Switches the lane for the following elements: `|Name|` or `|#color|Name|`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swimlane {
    pub name: String,
    pub style: Style,
}

impl Swimlane {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl From<&str> for Swimlane {
    fn from(name: &str) -> Self {
        Swimlane::new(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteSide {
    Left,
    #[default]
    Right,
}

impl NoteSide {
    pub fn keyword(&self) -> &'static str {
        match self {
            NoteSide::Left => "left",
            NoteSide::Right => "right",
        }
    }
}

/// A note next to the previous action, or floating beside the flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityNote {
    pub content: String,
    pub side: NoteSide,
    pub floating: bool,
    pub style: Style,
}

impl ActivityNote {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            side: NoteSide::default(),
            floating: false,
            style: Style::default(),
        }
    }

    pub fn left(mut self) -> Self {
        self.side = NoteSide::Left;
        self
    }

    pub fn right(mut self) -> Self {
        self.side = NoteSide::Right;
        self
    }

    pub fn floating(mut self) -> Self {
        self.floating = true;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl From<&str> for ActivityNote {
    fn from(content: &str) -> Self {
        ActivityNote::new(content)
    }
}
