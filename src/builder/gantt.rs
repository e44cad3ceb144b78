use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::{check_style, require_text, required, DiagramBuilder, StyleAxes};
use crate::error::{Error, Result};
use crate::primitives::gantt::{
    Anchor, GanttDiagram, GanttElement, GanttOptions, Milestone, PrintScale, Task, Weekday,
};

lazy_static! {
    static ref RE_DATE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
}

/// Bars take a fill and an outline color.
const BAR_AXES: StyleAxes = StyleAxes {
    background: true,
    line: true,
    ..StyleAxes::NONE
};

fn check_date(field: &'static str, date: &str) -> Result<()> {
    if !RE_DATE.is_match(date) {
        return Err(Error::Validation {
            field,
            reason: "must be a YYYY-MM-DD date",
        });
    }
    Ok(())
}

/// Task names are written inside `[…]`.
fn check_task_name(field: &'static str, name: &str) -> Result<()> {
    require_text(field, name)?;
    if name.contains('[') || name.contains(']') {
        return Err(Error::Validation {
            field,
            reason: "must not contain brackets",
        });
    }
    Ok(())
}

fn check_anchor(anchor: &Anchor) -> Result<()> {
    match anchor {
        Anchor::Date(date) => check_date("start date", date),
        Anchor::End(task) | Anchor::Start(task) => check_task_name("anchor task", task),
    }
}

pub type GanttDiagramBuilder = DiagramBuilder<GanttScope, GanttOptions>;

impl GanttDiagramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project_start(&mut self, date: impl Into<String>) -> Result<&mut Self> {
        let date = date.into();
        check_date("project start", &date)?;
        self.options.project_start = Some(date);
        Ok(self)
    }

    pub fn print_scale(&mut self, scale: PrintScale) -> &mut Self {
        self.options.print_scale = Some(scale);
        self
    }

    pub fn build(self) -> GanttDiagram {
        let (meta, options, scope) = self.into_parts();
        debug!(kind = "gantt", elements = scope.elements.len(); "Built diagram");
        GanttDiagram {
            meta,
            options,
            elements: scope.elements,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GanttScope {
    elements: Vec<GanttElement>,
}

impl GanttScope {
    pub fn elements(&self) -> &[GanttElement] {
        &self.elements
    }

    pub fn task(&mut self, task: Task) -> Result<&mut Self> {
        check_task_name("task name", &task.name)?;
        if let Some(alias) = &task.alias {
            check_task_name("alias", alias)?;
        }
        if task.days.is_none() && task.start.is_none() {
            return Err(Error::Validation {
                field: "task",
                reason: "needs a duration or a start",
            });
        }
        if task.days == Some(0) {
            return Err(Error::Validation {
                field: "task duration",
                reason: "must be at least one day",
            });
        }
        if let Some(start) = &task.start {
            check_anchor(start)?;
        }
        if task.completion.is_some_and(|percent| percent > 100) {
            return Err(Error::Validation {
                field: "task completion",
                reason: "must be between 0 and 100",
            });
        }
        check_style(&task.style, "task", BAR_AXES)?;
        self.elements.push(GanttElement::Task(task));
        Ok(self)
    }

    pub fn milestone(&mut self, milestone: Milestone) -> Result<&mut Self> {
        check_task_name("milestone name", &milestone.name)?;
        check_anchor(&milestone.at)?;
        self.elements.push(GanttElement::Milestone(milestone));
        Ok(self)
    }

    pub fn separator(&mut self, label: impl Into<String>) -> Result<&mut Self> {
        let label = required("separator label", label)?;
        self.elements.push(GanttElement::Separator(label));
        Ok(self)
    }

    pub fn closed_weekday(&mut self, day: Weekday) -> Result<&mut Self> {
        self.elements.push(GanttElement::ClosedWeekday(day));
        Ok(self)
    }

    pub fn closed_date(&mut self, date: impl Into<String>) -> Result<&mut Self> {
        let date = date.into();
        check_date("closed date", &date)?;
        self.elements.push(GanttElement::ClosedDate(date));
        Ok(self)
    }

    /// `[from] -> [to]`: `to` starts when `from` ends.
    pub fn dependency(&mut self, from: impl Into<String>, to: impl Into<String>) -> Result<&mut Self> {
        let from = from.into();
        let to = to.into();
        check_task_name("dependency source", &from)?;
        check_task_name("dependency target", &to)?;
        self.elements.push(GanttElement::Dependency { from, to });
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Style;

    #[test]
    fn test_task_validation() {
        let mut builder = GanttDiagramBuilder::new();
        assert_eq!(
            builder.task(Task::new("Design")).unwrap_err(),
            Error::Validation {
                field: "task",
                reason: "needs a duration or a start",
            }
        );
        assert!(builder.task(Task::new("Design").days(3).completed(101)).is_err());
        assert!(builder.task(Task::new("[Design]").days(3)).is_err());
        assert!(builder
            .task(Task::new("Design").starts(Anchor::date("Jan 1st")))
            .is_err());
        assert_eq!(
            builder
                .task(Task::new("Design").days(3).style(Style::new().text_color("red")))
                .unwrap_err(),
            Error::unsupported("task", "text color")
        );
        assert!(builder.elements().is_empty());
        builder.task(Task::new("Design").days(3).completed(100)).unwrap();
        assert_eq!(builder.elements().len(), 1);
    }

    #[test]
    fn test_dates_are_checked() {
        let mut builder = GanttDiagramBuilder::new();
        assert!(builder.project_start("2024/01/01").is_err());
        assert!(builder.closed_date("tomorrow").is_err());
        assert!(builder.options.project_start.is_none());
    }
}
