//! State diagram IR.

use serde::{Deserialize, Serialize};

use crate::builder::StateDiagramBuilder;
use crate::types::{ArrowDirection, DiagramMeta, Note, Style};

/// Initial and final pseudo state reference.
pub const INITIAL_FINAL: &str = "[*]";
/// Shallow history reference.
pub const HISTORY: &str = "[H]";
/// Deep history reference.
pub const DEEP_HISTORY: &str = "[H*]";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDiagram {
    pub(crate) meta: DiagramMeta,
    pub(crate) options: StateOptions,
    pub(crate) elements: Vec<StateElement>,
}

impl StateDiagram {
    pub fn builder() -> StateDiagramBuilder {
        StateDiagramBuilder::new()
    }

    pub fn options(&self) -> &StateOptions {
        &self.options
    }

    pub fn elements(&self) -> &[StateElement] {
        &self.elements
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateOptions {
    pub hide_empty_description: bool,
    pub left_to_right: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateElement {
    State(State),
    Composite(CompositeState),
    Pseudo(PseudoState),
    Transition(Transition),
    Note(Note),
}

/// A simple state with optional description lines (`A : line`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub name: String,
    pub alias: Option<String>,
    pub descriptions: Vec<String>,
    pub style: Style,
}

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            descriptions: Vec::new(),
            style: Style::default(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn description(mut self, line: impl Into<String>) -> Self {
        self.descriptions.push(line.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The name transitions should use.
    pub fn reference(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

impl From<&str> for State {
    fn from(name: &str) -> Self {
        State::new(name)
    }
}

/// Separator drawn between concurrent regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionSeparator {
    /// `--`
    #[default]
    Horizontal,
    /// `||`
    Vertical,
}

impl RegionSeparator {
    pub fn token(&self) -> &'static str {
        match self {
            RegionSeparator::Horizontal => "--",
            RegionSeparator::Vertical => "||",
        }
    }
}

/// A state containing sub-states, split into one or more concurrent regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeState {
    pub name: String,
    pub alias: Option<String>,
    pub style: Style,
    pub separator: RegionSeparator,
    pub regions: Vec<Vec<StateElement>>,
}

impl CompositeState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            style: Style::default(),
            separator: RegionSeparator::default(),
            regions: Vec::new(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn separator(mut self, separator: RegionSeparator) -> Self {
        self.separator = separator;
        self
    }
}

impl From<&str> for CompositeState {
    fn from(name: &str) -> Self {
        CompositeState::new(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PseudoKind {
    Choice,
    Fork,
    Join,
    End,
    History,
    DeepHistory,
    EntryPoint,
    ExitPoint,
    InputPin,
    OutputPin,
    ExpansionInput,
    ExpansionOutput,
}

impl PseudoKind {
    pub fn stereotype(&self) -> &'static str {
        match self {
            PseudoKind::Choice => "choice",
            PseudoKind::Fork => "fork",
            PseudoKind::Join => "join",
            PseudoKind::End => "end",
            PseudoKind::History => "history",
            PseudoKind::DeepHistory => "history*",
            PseudoKind::EntryPoint => "entryPoint",
            PseudoKind::ExitPoint => "exitPoint",
            PseudoKind::InputPin => "inputPin",
            PseudoKind::OutputPin => "outputPin",
            PseudoKind::ExpansionInput => "expansionInput",
            PseudoKind::ExpansionOutput => "expansionOutput",
        }
    }
}

/// A named pseudo state: `state name <<choice>>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PseudoState {
    pub name: String,
    pub kind: PseudoKind,
}

/// `source --> target : label`. Endpoints may be `[*]`, `[H]` or `[H*]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub source: String,
    pub target: String,
    pub label: Option<String>,
    pub direction: Option<ArrowDirection>,
    /// Line axes only; written as `-[#red,dashed]->`.
    pub style: Style,
}

impl Transition {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: None,
            direction: None,
            style: Style::default(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn direction(mut self, direction: ArrowDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl From<(&str, &str)> for Transition {
    fn from((source, target): (&str, &str)) -> Self {
        Transition::new(source, target)
    }
}

impl From<(&str, &str, &str)> for Transition {
    fn from((source, target, label): (&str, &str, &str)) -> Self {
        Transition::new(source, target).label(label)
    }
}
