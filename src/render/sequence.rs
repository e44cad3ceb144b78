use super::color::{render_background, ColorMode};
use super::common::{declaration, decorations, escape_text, reference, styled_arrow, Quoting};
use super::render_document;
use super::writer::Writer;
use crate::diagram::{sealed::Sealed, DiagramKind, Document};
use crate::primitives::sequence::{
    Autonumber, Fragment, Message, NotePlacement, Participant, ParticipantBox, Reference,
    SequenceDiagram, SequenceElement, SequenceNote, FOUND, LOST,
};
use crate::types::{DiagramMeta, Style};

impl Sealed for SequenceDiagram {
    fn meta_slot(&mut self) -> &mut DiagramMeta {
        &mut self.meta
    }
}

impl Document for SequenceDiagram {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Sequence
    }

    fn meta(&self) -> &DiagramMeta {
        &self.meta
    }

    fn render_with(&self, options: &super::RenderOptions) -> String {
        render_document(self.kind(), &self.meta, self.elements.len(), options, |w| {
            if let Some(autonumber) = &self.options.autonumber {
                w.line(autonumber_line(autonumber));
            }
            if self.options.hide_footbox {
                w.line("hide footbox");
            }
            write_elements(&self.elements, w);
        })
    }
}

fn autonumber_line(autonumber: &Autonumber) -> String {
    let mut line = String::from("autonumber");
    match (autonumber.start, autonumber.step) {
        (Some(start), Some(step)) => line.push_str(&format!(" {} {}", start, step)),
        (Some(start), None) => line.push_str(&format!(" {}", start)),
        (None, Some(step)) => line.push_str(&format!(" 1 {}", step)),
        (None, None) => {}
    }
    if let Some(format) = &autonumber.format {
        line.push_str(&format!(" \"{}\"", format));
    }
    line
}

fn write_elements(elements: &[SequenceElement], w: &mut Writer) {
    for element in elements {
        match element {
            SequenceElement::Participant(participant) => w.line(participant_line(participant)),
            SequenceElement::Message(message) => w.line(message_line(message)),
            SequenceElement::Activate(name) => {
                w.line(format!("activate {}", reference(name, Quoting::General)))
            }
            SequenceElement::Deactivate(name) => {
                w.line(format!("deactivate {}", reference(name, Quoting::General)))
            }
            SequenceElement::Destroy(name) => {
                w.line(format!("destroy {}", reference(name, Quoting::General)))
            }
            SequenceElement::Fragment(fragment) => write_fragment(fragment, w),
            SequenceElement::Divider(text) => w.line(format!("== {} ==", text)),
            SequenceElement::Delay(text) => match text {
                Some(text) => w.line(format!("...{}...", text)),
                None => w.line("..."),
            },
            SequenceElement::Spacing(pixels) => match pixels {
                Some(pixels) => w.line(format!("||{}||", pixels)),
                None => w.line("|||"),
            },
            SequenceElement::Note(note) => write_note(note, w),
            SequenceElement::Reference(reference) => write_reference(reference, w),
            SequenceElement::Box(participant_box) => write_box(participant_box, w),
        }
    }
}

fn participant_line(participant: &Participant) -> String {
    let mut line = declaration(
        participant.kind.keyword(),
        &participant.name,
        participant.alias.as_deref(),
        Quoting::General,
    );
    if let Some(order) = participant.order {
        line.push_str(&format!(" order {}", order));
    }
    line.push_str(&decorations(&participant.style));
    line
}

fn message_line(message: &Message) -> String {
    let mut line = String::new();
    if message.from == FOUND {
        line.push_str(FOUND);
    } else {
        line.push_str(&reference(&message.from, Quoting::General));
        line.push(' ');
    }
    line.push_str(&styled_arrow(message.kind.glyph(), &message.style, None));
    if message.to == LOST {
        line.push_str(LOST);
    } else {
        line.push(' ');
        line.push_str(&reference(&message.to, Quoting::General));
    }
    if let Some(activation) = &message.activation {
        line.push(' ');
        line.push_str(activation.suffix());
    }
    if let Some(label) = &message.label {
        line.push_str(" : ");
        line.push_str(&escape_text(label));
    }
    line
}

fn write_fragment(fragment: &Fragment, w: &mut Writer) {
    for (i, section) in fragment.sections.iter().enumerate() {
        let keyword = if i == 0 { fragment.kind.keyword() } else { "else" };
        match &section.label {
            Some(label) => w.line(format!("{} {}", keyword, label)),
            None => w.line(keyword),
        }
        w.nested(|w| write_elements(&section.elements, w));
    }
    w.line("end");
}

fn participants(names: &[String]) -> String {
    names
        .iter()
        .map(|name| reference(name, Quoting::General).into_owned())
        .collect::<Vec<_>>()
        .join(", ")
}

fn note_fill(style: &Style) -> String {
    match &style.background {
        Some(background) => format!(" {}", render_background(background, ColorMode::Hashed)),
        None => String::new(),
    }
}

fn write_note(note: &SequenceNote, w: &mut Writer) {
    let keyword = note.shape.keyword();
    let placement = match &note.placement {
        NotePlacement::Left(target) => format!(" left of {}", reference(target, Quoting::General)),
        NotePlacement::Right(target) => format!(" right of {}", reference(target, Quoting::General)),
        NotePlacement::Over(targets) => format!(" over {}", participants(targets)),
        NotePlacement::Across => " across".to_string(),
    };
    let head = format!("{}{}{}", keyword, placement, note_fill(&note.style));
    if note.content.contains('\n') {
        w.line(head);
        w.line(&note.content);
        w.line(format!("end {}", keyword));
    } else {
        w.line(format!("{} : {}", head, note.content));
    }
}

fn write_reference(reference: &Reference, w: &mut Writer) {
    let head = format!("ref over {}", participants(&reference.participants));
    if reference.content.contains('\n') {
        w.line(head);
        w.line(&reference.content);
        w.line("end ref");
    } else {
        w.line(format!("{} : {}", head, reference.content));
    }
}

fn write_box(participant_box: &ParticipantBox, w: &mut Writer) {
    let mut open = String::from("box");
    if let Some(title) = &participant_box.title {
        open.push_str(&format!(" \"{}\"", title));
    }
    open.push_str(&note_fill(&participant_box.style));
    w.block(open, "end box", |w| write_elements(&participant_box.elements, w));
}
