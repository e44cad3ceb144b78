use super::color::{render_background, render_stereotype, ColorMode};
use super::common::{escape_text, styled_arrow};
use super::render_document;
use super::writer::Writer;
use crate::diagram::{sealed::Sealed, DiagramKind, Document};
use crate::primitives::activity::{
    Action, ActivityArrow, ActivityDiagram, ActivityElement, ActivityNote, Conditional, Fork,
    RepeatLoop, WhileLoop,
};
use crate::types::{DiagramMeta, Style};

impl Sealed for ActivityDiagram {
    fn meta_slot(&mut self) -> &mut DiagramMeta {
        &mut self.meta
    }
}

impl Document for ActivityDiagram {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Activity
    }

    fn meta(&self) -> &DiagramMeta {
        &self.meta
    }

    fn render_with(&self, options: &super::RenderOptions) -> String {
        render_document(self.kind(), &self.meta, self.elements.len(), options, |w| {
            write_elements(&self.elements, w)
        })
    }
}

fn write_elements(elements: &[ActivityElement], w: &mut Writer) {
    for element in elements {
        write_element(element, w);
    }
}

fn write_element(element: &ActivityElement, w: &mut Writer) {
    match element {
        ActivityElement::Start => w.line("start"),
        ActivityElement::Stop => w.line("stop"),
        ActivityElement::End => w.line("end"),
        ActivityElement::Kill => w.line("kill"),
        ActivityElement::Detach => w.line("detach"),
        ActivityElement::Break => w.line("break"),
        ActivityElement::Action(action) => w.line(action_line(action)),
        ActivityElement::Arrow(arrow) => w.line(arrow_line(arrow)),
        ActivityElement::If(conditional) => write_conditional(conditional, w),
        ActivityElement::While(while_loop) => write_while(while_loop, w),
        ActivityElement::Repeat(repeat) => write_repeat(repeat, w),
        ActivityElement::Fork(fork) => write_fork(fork, w),
        ActivityElement::Partition(partition) => {
            let mut open = format!("partition \"{}\"", partition.name);
            open.push_str(&fill(&partition.style, " "));
            open.push_str(" {");
            w.block(open, "}", |w| write_elements(&partition.elements, w));
        }
        ActivityElement::Group(group) => {
            w.block(format!("group {}", group.name), "end group", |w| {
                write_elements(&group.elements, w)
            });
        }
        ActivityElement::Swimlane(lane) => {
            match &lane.style.background {
                Some(background) => w.line(format!(
                    "|{}|{}|",
                    render_background(background, ColorMode::Hashed),
                    lane.name
                )),
                None => w.line(format!("|{}|", lane.name)),
            }
        }
        ActivityElement::Note(note) => write_note(note, w),
        ActivityElement::Connector(name) => w.line(format!("({})", name)),
    }
}

/// Hashed background preceded by `sep`, or nothing.
fn fill(style: &Style, sep: &str) -> String {
    match &style.background {
        Some(background) => format!("{}{}", sep, render_background(background, ColorMode::Hashed)),
        None => String::new(),
    }
}

fn action_line(action: &Action) -> String {
    let mut line = fill(&action.style, "");
    line.push(':');
    line.push_str(&action.text);
    line.push(';');
    if let Some(stereotype) = &action.style.stereotype {
        line.push(' ');
        line.push_str(&render_stereotype(stereotype));
    }
    line
}

fn arrow_line(arrow: &ActivityArrow) -> String {
    let glyph = if arrow.style.line.is_empty() {
        "->".to_string()
    } else {
        styled_arrow("-->", &arrow.style, None)
    };
    match &arrow.label {
        Some(label) => format!("{} {};", glyph, escape_text(label)),
        None => glyph,
    }
}

fn parenthesized(keyword: &str, text: Option<&String>) -> String {
    match text {
        Some(text) => format!(" {} ({})", keyword, text),
        None => String::new(),
    }
}

fn write_conditional(conditional: &Conditional, w: &mut Writer) {
    for (i, branch) in conditional.branches.iter().enumerate() {
        let keyword = if i == 0 { "if" } else { "elseif" };
        let mut head = format!("{} ({}) then", keyword, branch.condition);
        if let Some(label) = &branch.label {
            head.push_str(&format!(" ({})", label));
        }
        w.line(head);
        w.nested(|w| write_elements(&branch.elements, w));
    }
    if let Some(otherwise) = &conditional.otherwise {
        match &otherwise.label {
            Some(label) => w.line(format!("else ({})", label)),
            None => w.line("else"),
        }
        w.nested(|w| write_elements(&otherwise.elements, w));
    }
    w.line("endif");
}

fn write_while(while_loop: &WhileLoop, w: &mut Writer) {
    let open = format!(
        "while ({}){}",
        while_loop.condition,
        parenthesized("is", while_loop.label.as_ref())
    );
    let close = match &while_loop.exit_label {
        Some(label) => format!("endwhile ({})", label),
        None => "endwhile".to_string(),
    };
    w.block(open, &close, |w| write_elements(&while_loop.elements, w));
}

fn write_repeat(repeat: &RepeatLoop, w: &mut Writer) {
    let close = format!(
        "repeat while ({}){}{}",
        repeat.condition,
        parenthesized("is", repeat.label.as_ref()),
        parenthesized("not", repeat.exit_label.as_ref())
    );
    w.block("repeat", &close, |w| write_elements(&repeat.elements, w));
}

fn write_fork(fork: &Fork, w: &mut Writer) {
    let keyword = fork.kind.keyword();
    for (i, branch) in fork.branches.iter().enumerate() {
        if i == 0 {
            w.line(keyword);
        } else {
            w.line(format!("{} again", keyword));
        }
        w.nested(|w| write_elements(branch, w));
    }
    w.line(format!("end {}", keyword));
}

fn write_note(note: &ActivityNote, w: &mut Writer) {
    let mut head = String::new();
    if note.floating {
        head.push_str("floating ");
    }
    head.push_str("note ");
    head.push_str(note.side.keyword());
    head.push_str(&fill(&note.style, " "));
    if note.content.contains('\n') {
        w.line(head);
        w.line(&note.content);
        w.line("end note");
    } else {
        w.line(format!("{}: {}", head, note.content));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::activity::{ForkKind, Partition, Swimlane};

    fn body(diagram: &ActivityDiagram) -> String {
        let out = diagram.render();
        out.trim_start_matches("@startuml\n")
            .trim_end_matches("\n@enduml")
            .to_string()
    }

    #[test]
    fn test_action_with_color_and_sdl_stereotype() {
        let action = Action::new("Read input").style(Style::fill("#AAFFAA").stereotype("input"));
        assert_eq!(action_line(&action), "#AAFFAA:Read input; <<input>>");
    }

    #[test]
    fn test_arrow_forms() {
        assert_eq!(arrow_line(&ActivityArrow::new()), "->");
        assert_eq!(arrow_line(&ActivityArrow::from("ok")), "-> ok;");
        let styled = ActivityArrow::new().label("retry").style(Style::new().line_color("blue").dotted());
        assert_eq!(arrow_line(&styled), "-[#blue,dotted]-> retry;");
    }

    #[test]
    fn test_conditional_chain() {
        let mut builder = ActivityDiagram::builder();
        builder.start().unwrap();
        builder
            .conditional("Graphviz installed?", |c| {
                c.then(Some("yes"), |s| {
                    s.action("process all diagrams")?;
                    Ok(())
                })?;
                c.elseif("Java installed?", None, |s| {
                    s.action("process sequence only")?;
                    Ok(())
                })?;
                c.otherwise(Some("no"), |s| {
                    s.action("error")?;
                    Ok(())
                })?;
                Ok(())
            })
            .unwrap();
        builder.stop().unwrap();
        assert_eq!(
            body(&builder.build()),
            "start\nif (Graphviz installed?) then (yes)\n  :process all diagrams;\nelseif (Java installed?) then\n  :process sequence only;\nelse (no)\n  :error;\nendif\nstop"
        );
    }

    #[test]
    fn test_loops() {
        let mut builder = ActivityDiagram::builder();
        builder
            .while_loop(WhileLoop::new("more data?").is("yes").exit("no"), |s| {
                s.action("read")?;
                Ok(())
            })
            .unwrap();
        builder
            .repeat_loop(RepeatLoop::new("again?").is("yes").not("no"), |s| {
                s.action("retry")?;
                Ok(())
            })
            .unwrap();
        assert_eq!(
            body(&builder.build()),
            "while (more data?) is (yes)\n  :read;\nendwhile (no)\nrepeat\n  :retry;\nrepeat while (again?) is (yes) not (no)"
        );
    }

    #[test]
    fn test_fork_split_and_containers() {
        let mut builder = ActivityDiagram::builder();
        builder.swimlane(Swimlane::new("Ops").style(Style::fill("AntiqueWhite"))).unwrap();
        builder
            .partition(Partition::new("Setup").style(Style::fill("LightGray")), |s| {
                s.parallel(ForkKind::Split, |f| {
                    f.branch(|s| {
                        s.action("a")?;
                        Ok(())
                    })?;
                    f.branch(|s| {
                        s.action("b")?;
                        Ok(())
                    })?;
                    Ok(())
                })?;
                Ok(())
            })
            .unwrap();
        builder
            .group("Cleanup", |s| {
                s.note(ActivityNote::new("done").floating().left())?;
                s.connector("A")?;
                Ok(())
            })
            .unwrap();
        assert_eq!(
            body(&builder.build()),
            "|#AntiqueWhite|Ops|\npartition \"Setup\" #LightGray {\n  split\n    :a;\n  split again\n    :b;\n  end split\n}\ngroup Cleanup\n  floating note left: done\n  (A)\nend group"
        );
    }
}
