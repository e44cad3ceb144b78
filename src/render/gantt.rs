use super::color::{render_background, render_color, ColorMode};
use super::render_document;
use super::writer::Writer;
use crate::diagram::{sealed::Sealed, DiagramKind, Document};
use crate::primitives::gantt::{Anchor, GanttDiagram, GanttElement, Milestone, Task};
use crate::types::DiagramMeta;

impl Sealed for GanttDiagram {
    fn meta_slot(&mut self) -> &mut DiagramMeta {
        &mut self.meta
    }
}

impl Document for GanttDiagram {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Gantt
    }

    fn meta(&self) -> &DiagramMeta {
        &self.meta
    }

    fn render_with(&self, options: &super::RenderOptions) -> String {
        render_document(self.kind(), &self.meta, self.elements.len(), options, |w| {
            if let Some(date) = &self.options.project_start {
                w.line(format!("Project starts {}", date));
            }
            if let Some(scale) = &self.options.print_scale {
                w.line(format!("printscale {}", scale.keyword()));
            }
            for element in &self.elements {
                match element {
                    GanttElement::Task(task) => write_task(task, w),
                    GanttElement::Milestone(milestone) => w.line(milestone_line(milestone)),
                    GanttElement::Separator(label) => w.line(format!("-- {} --", label)),
                    GanttElement::ClosedWeekday(day) => {
                        w.line(format!("{} are closed", day.keyword()))
                    }
                    GanttElement::ClosedDate(date) => w.line(format!("{} is closed", date)),
                    GanttElement::Dependency { from, to } => {
                        w.line(format!("[{}] -> [{}]", from, to))
                    }
                }
            }
        })
    }
}

fn anchor_text(anchor: &Anchor) -> String {
    match anchor {
        Anchor::Date(date) => date.clone(),
        Anchor::End(task) => format!("at [{}]'s end", task),
        Anchor::Start(task) => format!("at [{}]'s start", task),
    }
}

/// The declaring line carries the duration (or the start when there is no
/// duration); every other fact is its own statement on the task reference.
fn write_task(task: &Task, w: &mut Writer) {
    let mut head = format!("[{}]", task.name);
    if let Some(alias) = &task.alias {
        head.push_str(&format!(" as [{}]", alias));
    }
    let reference = task.reference();
    match (task.days, &task.start) {
        (Some(days), start) => {
            let unit = if days == 1 { "day" } else { "days" };
            w.line(format!("{} requires {} {}", head, days, unit));
            if let Some(start) = start {
                w.line(format!("[{}] starts {}", reference, anchor_text(start)));
            }
        }
        (None, Some(start)) => w.line(format!("{} starts {}", head, anchor_text(start))),
        (None, None) => w.line(head),
    }
    if let Some(percent) = task.completion {
        w.line(format!("[{}] is {}% completed", reference, percent));
    }
    let fill = task
        .style
        .background
        .as_ref()
        .map(|background| render_background(background, ColorMode::AsIs));
    let outline = task.style.line.color.as_ref().map(render_color);
    let colors = match (fill, outline) {
        (Some(fill), Some(outline)) => Some(format!("{}/{}", fill, outline)),
        (Some(fill), None) => Some(fill),
        (None, Some(outline)) => Some(format!("/{}", outline)),
        (None, None) => None,
    };
    if let Some(colors) = colors {
        w.line(format!("[{}] is colored in {}", reference, colors));
    }
}

fn milestone_line(milestone: &Milestone) -> String {
    format!("[{}] happens {}", milestone.name, anchor_text(&milestone.at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::gantt::{PrintScale, Weekday};
    use crate::types::Style;

    #[test]
    fn test_milestone_anchors() {
        let dated = Milestone::new("Kickoff", Anchor::date("2024-01-08"));
        assert_eq!(milestone_line(&dated), "[Kickoff] happens 2024-01-08");
        let chained = Milestone::new("Release", Anchor::end_of("QA"));
        assert_eq!(milestone_line(&chained), "[Release] happens at [QA]'s end");
    }

    #[test]
    fn test_project_plan() {
        let mut builder = GanttDiagram::builder();
        builder.project_start("2024-01-01").unwrap();
        builder.print_scale(PrintScale::Weekly);
        builder.closed_weekday(Weekday::Saturday).unwrap();
        builder.closed_date("2024-01-15").unwrap();
        builder.separator("Phase 1").unwrap();
        builder
            .task(
                Task::new("Design")
                    .alias("D")
                    .days(10)
                    .completed(40)
                    .style(Style::fill("Lavender").line_color("LightBlue")),
            )
            .unwrap();
        builder
            .task(Task::new("Build").days(1).starts(Anchor::end_of("D")))
            .unwrap();
        builder.task(Task::new("Review").starts(Anchor::start_of("Build"))).unwrap();
        builder.dependency("D", "Build").unwrap();
        builder
            .milestone(Milestone::new("Done", Anchor::end_of("Build")))
            .unwrap();
        assert_eq!(
            builder.build().render(),
            "@startgantt\nProject starts 2024-01-01\nprintscale weekly\nsaturday are closed\n2024-01-15 is closed\n-- Phase 1 --\n[Design] as [D] requires 10 days\n[D] is 40% completed\n[D] is colored in Lavender/LightBlue\n[Build] requires 1 day\n[Build] starts at [D]'s end\n[Review] starts at [Build]'s start\n[D] -> [Build]\n[Done] happens at [Build]'s end\n@endgantt"
        );
    }
}
