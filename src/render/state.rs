use super::common::{decorations, escape_text, quote_name, reference, styled_arrow, write_note, Quoting};
use super::render_document;
use super::writer::Writer;
use crate::diagram::{sealed::Sealed, DiagramKind, Document};
use crate::primitives::state::{CompositeState, State, StateDiagram, StateElement, Transition};
use crate::types::DiagramMeta;

impl Sealed for StateDiagram {
    fn meta_slot(&mut self) -> &mut DiagramMeta {
        &mut self.meta
    }
}

impl Document for StateDiagram {
    fn kind(&self) -> DiagramKind {
        DiagramKind::State
    }

    fn meta(&self) -> &DiagramMeta {
        &self.meta
    }

    fn render_with(&self, options: &super::RenderOptions) -> String {
        render_document(self.kind(), &self.meta, self.elements.len(), options, |w| {
            if self.options.hide_empty_description {
                w.line("hide empty description");
            }
            if self.options.left_to_right {
                w.line("left to right direction");
            }
            write_elements(&self.elements, w);
        })
    }
}

fn write_elements(elements: &[StateElement], w: &mut Writer) {
    for element in elements {
        match element {
            StateElement::State(state) => write_state(state, w),
            StateElement::Composite(composite) => write_composite(composite, w),
            StateElement::Pseudo(pseudo) => {
                w.line(format!(
                    "state {} <<{}>>",
                    quote_name(&pseudo.name),
                    pseudo.kind.stereotype()
                ));
            }
            StateElement::Transition(transition) => w.line(transition_line(transition)),
            StateElement::Note(note) => write_note(note, Quoting::General, w),
        }
    }
}

/// `state "Long Name" as LN <<stereotype>> #style`
fn state_head(name: &str, alias: Option<&str>, decorations: String) -> String {
    let mut head = String::from("state ");
    match alias {
        Some(alias) => head.push_str(&format!("\"{}\" as {}", name, alias)),
        None => head.push_str(&quote_name(name)),
    }
    head.push_str(&decorations);
    head
}

fn write_state(state: &State, w: &mut Writer) {
    w.line(state_head(&state.name, state.alias.as_deref(), decorations(&state.style)));
    let target = reference(state.reference(), Quoting::General);
    for description in &state.descriptions {
        w.line(format!("{} : {}", target, escape_text(description)));
    }
}

fn write_composite(composite: &CompositeState, w: &mut Writer) {
    let open = format!(
        "{} {{",
        state_head(&composite.name, composite.alias.as_deref(), decorations(&composite.style))
    );
    w.block(open, "}", |w| {
        for (i, region) in composite.regions.iter().enumerate() {
            if i > 0 {
                w.line(composite.separator.token());
            }
            write_elements(region, w);
        }
    });
}

pub(crate) fn transition_line(transition: &Transition) -> String {
    let mut line = format!(
        "{} {} {}",
        reference(&transition.source, Quoting::General),
        styled_arrow("-->", &transition.style, transition.direction),
        reference(&transition.target, Quoting::General)
    );
    if let Some(label) = &transition.label {
        line.push_str(" : ");
        line.push_str(&escape_text(label));
    }
    line
}
