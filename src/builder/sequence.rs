use log::debug;

use super::{check_alias, check_style, require_optional, require_text, required, scoped, DiagramBuilder, StyleAxes};
use crate::error::{Error, Result};
use crate::primitives::sequence::{
    Autonumber, Fragment, FragmentKind, FragmentSection, Message, NotePlacement, Participant,
    ParticipantBox, Reference, SequenceDiagram, SequenceElement, SequenceNote, SequenceOptions,
};

pub type SequenceDiagramBuilder = DiagramBuilder<SequenceScope, SequenceOptions>;

impl SequenceDiagramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number messages, optionally from `start` in increments of `step`,
    /// formatted with `format` (`"<b>[000]"`).
    pub fn autonumber(&mut self, start: Option<u32>, step: Option<u32>, format: Option<&str>) -> &mut Self {
        self.options.autonumber = Some(Autonumber {
            start,
            step,
            format: format
                .filter(|format| !format.trim().is_empty())
                .map(str::to_string),
        });
        self
    }

    pub fn hide_footbox(&mut self) -> &mut Self {
        self.options.hide_footbox = true;
        self
    }

    pub fn build(self) -> SequenceDiagram {
        let (meta, options, scope) = self.into_parts();
        debug!(kind = "sequence", elements = scope.elements.len(); "Built diagram");
        SequenceDiagram {
            meta,
            options,
            elements: scope.elements,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SequenceScope {
    elements: Vec<SequenceElement>,
}

impl SequenceScope {
    pub fn elements(&self) -> &[SequenceElement] {
        &self.elements
    }

    fn push(&mut self, element: SequenceElement) -> Result<&mut Self> {
        self.elements.push(element);
        Ok(self)
    }

    pub fn participant(&mut self, participant: impl Into<Participant>) -> Result<&mut Self> {
        let participant = participant.into();
        require_text("participant name", &participant.name)?;
        check_alias(participant.alias.as_deref())?;
        check_style(&participant.style, "participant", StyleAxes::BACKGROUND_STEREOTYPE)?;
        self.push(SequenceElement::Participant(participant))
    }

    pub fn message(&mut self, message: impl Into<Message>) -> Result<&mut Self> {
        let message = message.into();
        require_text("message sender", &message.from)?;
        require_text("message receiver", &message.to)?;
        require_optional("message label", message.label.as_deref())?;
        check_style(&message.style, "message", StyleAxes::LINE)?;
        self.push(SequenceElement::Message(message))
    }

    pub fn activate(&mut self, participant: impl Into<String>) -> Result<&mut Self> {
        let participant = required("participant", participant)?;
        self.push(SequenceElement::Activate(participant))
    }

    pub fn deactivate(&mut self, participant: impl Into<String>) -> Result<&mut Self> {
        let participant = required("participant", participant)?;
        self.push(SequenceElement::Deactivate(participant))
    }

    pub fn destroy(&mut self, participant: impl Into<String>) -> Result<&mut Self> {
        let participant = required("participant", participant)?;
        self.push(SequenceElement::Destroy(participant))
    }

    /// A fragment with one or more sections (`alt` / `else` / `end`).
    pub fn fragment<F>(&mut self, kind: FragmentKind, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut FragmentBuilder) -> Result<()>,
    {
        let builder = scoped::<FragmentBuilder, _>(build)?;
        if builder.sections.is_empty() {
            return Err(Error::Validation {
                field: kind.keyword(),
                reason: "needs at least one section",
            });
        }
        self.push(SequenceElement::Fragment(Fragment {
            kind,
            sections: builder.sections,
        }))
    }

    /// A single-section fragment such as `loop 1000 times` … `end`.
    pub fn simple_fragment<F>(&mut self, kind: FragmentKind, label: Option<&str>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut SequenceScope) -> Result<()>,
    {
        self.fragment(kind, |f| {
            f.section(label, build)?;
            Ok(())
        })
    }

    pub fn divider(&mut self, text: impl Into<String>) -> Result<&mut Self> {
        let text = required("divider text", text)?;
        self.push(SequenceElement::Divider(text))
    }

    pub fn delay(&mut self, text: Option<&str>) -> Result<&mut Self> {
        require_optional("delay text", text)?;
        self.push(SequenceElement::Delay(text.map(str::to_string)))
    }

    pub fn spacing(&mut self, pixels: Option<u32>) -> Result<&mut Self> {
        self.push(SequenceElement::Spacing(pixels))
    }

    pub fn note(&mut self, note: SequenceNote) -> Result<&mut Self> {
        require_text("note content", &note.content)?;
        match &note.placement {
            NotePlacement::Left(target) | NotePlacement::Right(target) => {
                require_text("note target", target)?
            }
            NotePlacement::Over(targets) => check_participants(targets)?,
            NotePlacement::Across => {}
        }
        check_style(&note.style, "note", StyleAxes::BACKGROUND)?;
        self.push(SequenceElement::Note(note))
    }

    /// `ref over A, B : content`
    pub fn reference(&mut self, participants: &[&str], content: impl Into<String>) -> Result<&mut Self> {
        let participants: Vec<String> = participants.iter().map(|p| p.to_string()).collect();
        check_participants(&participants)?;
        let content = required("reference content", content)?;
        self.push(SequenceElement::Reference(Reference {
            participants,
            content,
        }))
    }

    pub fn participant_box<F>(&mut self, header: impl Into<ParticipantBox>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut SequenceScope) -> Result<()>,
    {
        let mut participant_box = header.into();
        require_optional("box title", participant_box.title.as_deref())?;
        check_style(&participant_box.style, "box", StyleAxes::BACKGROUND)?;
        participant_box.elements = scoped::<SequenceScope, _>(build)?.elements;
        self.push(SequenceElement::Box(participant_box))
    }
}

fn check_participants(participants: &[String]) -> Result<()> {
    if participants.is_empty() {
        return Err(Error::Validation {
            field: "participants",
            reason: "needs at least one participant",
        });
    }
    for participant in participants {
        require_text("participant", participant)?;
    }
    Ok(())
}

/// Collects the sections of a fragment.
#[derive(Debug, Clone, Default)]
pub struct FragmentBuilder {
    sections: Vec<FragmentSection>,
}

impl FragmentBuilder {
    pub fn section<F>(&mut self, label: Option<&str>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut SequenceScope) -> Result<()>,
    {
        require_optional("fragment label", label)?;
        let scope = scoped::<SequenceScope, _>(build)?;
        self.sections.push(FragmentSection {
            label: label.map(str::to_string),
            elements: scope.elements,
        });
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::Document;
    use crate::types::Style;

    #[test]
    fn test_message_rejects_background() {
        let mut builder = SequenceDiagramBuilder::new();
        let message = Message::new("A", "B").style(Style::fill("red"));
        assert_eq!(
            builder.message(message).unwrap_err(),
            Error::unsupported("message", "background")
        );
        assert!(builder.elements().is_empty());
    }

    #[test]
    fn test_note_over_nobody_is_rejected() {
        let mut builder = SequenceDiagramBuilder::new();
        let empty: [&str; 0] = [];
        assert!(builder.note(SequenceNote::over(empty, "text")).is_err());
        assert!(builder.reference(&[], "text").is_err());
        assert!(builder.elements().is_empty());
    }

    #[test]
    fn test_simple_fragment() {
        let mut builder = SequenceDiagramBuilder::new();
        builder
            .simple_fragment(FragmentKind::Loop, Some("1000 times"), |s| {
                s.message(("A", "B", "ping"))?;
                s.activate("B")?;
                Ok(())
            })
            .unwrap();
        assert_eq!(
            builder.build().render(),
            "@startuml\nloop 1000 times\n  A -> B : ping\n  activate B\nend\n@enduml"
        );
    }
}
