//! Sequence diagram IR.

use serde::{Deserialize, Serialize};

use crate::builder::SequenceDiagramBuilder;
use crate::types::{DiagramMeta, Style};

/// Endpoint for a message arriving from outside the diagram (`[-> A`).
pub const FOUND: &str = "[";
/// Endpoint for a message leaving the diagram (`A ->]`).
pub const LOST: &str = "]";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceDiagram {
    pub(crate) meta: DiagramMeta,
    pub(crate) options: SequenceOptions,
    pub(crate) elements: Vec<SequenceElement>,
}

impl SequenceDiagram {
    pub fn builder() -> SequenceDiagramBuilder {
        SequenceDiagramBuilder::new()
    }

    pub fn options(&self) -> &SequenceOptions {
        &self.options
    }

    pub fn elements(&self) -> &[SequenceElement] {
        &self.elements
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceOptions {
    pub autonumber: Option<Autonumber>,
    pub hide_footbox: bool,
}

/// `autonumber [start [step]] ["format"]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Autonumber {
    pub start: Option<u32>,
    pub step: Option<u32>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceElement {
    Participant(Participant),
    Message(Message),
    Activate(String),
    Deactivate(String),
    Destroy(String),
    Fragment(Fragment),
    /// `== text ==`
    Divider(String),
    /// `...` or `...text...`
    Delay(Option<String>),
    /// `|||` or `||N||`
    Spacing(Option<u32>),
    Note(SequenceNote),
    Reference(Reference),
    Box(ParticipantBox),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantKind {
    #[default]
    Participant,
    Actor,
    Boundary,
    Control,
    Entity,
    Database,
    Collections,
    Queue,
}

impl ParticipantKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            ParticipantKind::Participant => "participant",
            ParticipantKind::Actor => "actor",
            ParticipantKind::Boundary => "boundary",
            ParticipantKind::Control => "control",
            ParticipantKind::Entity => "entity",
            ParticipantKind::Database => "database",
            ParticipantKind::Collections => "collections",
            ParticipantKind::Queue => "queue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub kind: ParticipantKind,
    pub alias: Option<String>,
    /// Explicit left-to-right ordering.
    pub order: Option<i32>,
    pub style: Style,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParticipantKind::default(),
            alias: None,
            order: None,
            style: Style::default(),
        }
    }

    pub fn kind(mut self, kind: ParticipantKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn actor(name: impl Into<String>) -> Self {
        Self::new(name).kind(ParticipantKind::Actor)
    }

    pub fn database(name: impl Into<String>) -> Self {
        Self::new(name).kind(ParticipantKind::Database)
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl From<&str> for Participant {
    fn from(name: &str) -> Self {
        Participant::new(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    #[default]
    Sync,
    Async,
    Reply,
    AsyncReply,
    /// Ends in a cross.
    Lost,
    Bidirectional,
}

impl MessageKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            MessageKind::Sync => "->",
            MessageKind::Async => "->>",
            MessageKind::Reply => "-->",
            MessageKind::AsyncReply => "-->>",
            MessageKind::Lost => "->x",
            MessageKind::Bidirectional => "<->",
        }
    }
}

/// Lifeline change written right after the target: `A -> B ++ : call`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Activate,
    Deactivate,
    Create,
    Destroy,
}

impl Activation {
    pub fn suffix(&self) -> &'static str {
        match self {
            Activation::Activate => "++",
            Activation::Deactivate => "--",
            Activation::Create => "**",
            Activation::Destroy => "!!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub from: String,
    pub to: String,
    pub kind: MessageKind,
    pub label: Option<String>,
    /// Line axes only; written inside the arrow as `-[#red]>`.
    pub style: Style,
    pub activation: Option<Activation>,
}

impl Message {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: MessageKind::default(),
            label: None,
            style: Style::default(),
            activation: None,
        }
    }

    pub fn kind(mut self, kind: MessageKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn reply(self) -> Self {
        self.kind(MessageKind::Reply)
    }

    pub fn asynchronous(self) -> Self {
        self.kind(MessageKind::Async)
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn activation(mut self, activation: Activation) -> Self {
        self.activation = Some(activation);
        self
    }
}

impl From<(&str, &str)> for Message {
    fn from((from, to): (&str, &str)) -> Self {
        Message::new(from, to)
    }
}

impl From<(&str, &str, &str)> for Message {
    fn from((from, to, label): (&str, &str, &str)) -> Self {
        Message::new(from, to).label(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentKind {
    Alt,
    Loop,
    Opt,
    Par,
    Break,
    Critical,
    Group,
}

impl FragmentKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            FragmentKind::Alt => "alt",
            FragmentKind::Loop => "loop",
            FragmentKind::Opt => "opt",
            FragmentKind::Par => "par",
            FragmentKind::Break => "break",
            FragmentKind::Critical => "critical",
            FragmentKind::Group => "group",
        }
    }
}

/// A combined fragment. The first section's label goes in the header; every
/// further section opens with `else label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub sections: Vec<FragmentSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentSection {
    pub label: Option<String>,
    pub elements: Vec<SequenceElement>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteShape {
    #[default]
    Note,
    /// Hexagonal.
    Hnote,
    /// Rectangular.
    Rnote,
}

impl NoteShape {
    pub fn keyword(&self) -> &'static str {
        match self {
            NoteShape::Note => "note",
            NoteShape::Hnote => "hnote",
            NoteShape::Rnote => "rnote",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotePlacement {
    Left(String),
    Right(String),
    Over(Vec<String>),
    /// Spans every participant.
    Across,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceNote {
    pub content: String,
    pub shape: NoteShape,
    pub placement: NotePlacement,
    pub style: Style,
}

impl SequenceNote {
    pub fn new(content: impl Into<String>, placement: NotePlacement) -> Self {
        Self {
            content: content.into(),
            shape: NoteShape::default(),
            placement,
            style: Style::default(),
        }
    }

    pub fn left_of(participant: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(content, NotePlacement::Left(participant.into()))
    }

    pub fn right_of(participant: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(content, NotePlacement::Right(participant.into()))
    }

    pub fn over<I, S>(participants: I, content: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            content,
            NotePlacement::Over(participants.into_iter().map(Into::into).collect()),
        )
    }

    pub fn across(content: impl Into<String>) -> Self {
        Self::new(content, NotePlacement::Across)
    }

    pub fn shape(mut self, shape: NoteShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// `ref over A, B : text`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub participants: Vec<String>,
    pub content: String,
}

/// `box "Title" #color` … `end box` grouping participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantBox {
    pub title: Option<String>,
    pub style: Style,
    pub elements: Vec<SequenceElement>,
}

impl ParticipantBox {
    pub fn new() -> Self {
        Self {
            title: None,
            style: Style::default(),
            elements: Vec::new(),
        }
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::new()
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Default for ParticipantBox {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for ParticipantBox {
    fn from(title: &str) -> Self {
        ParticipantBox::titled(title)
    }
}
