//! Gantt chart IR.
//!
//! Dates are ISO `YYYY-MM-DD` strings; tasks and milestones are referred to
//! by alias when they have one, by name otherwise.

use serde::{Deserialize, Serialize};

use crate::builder::GanttDiagramBuilder;
use crate::types::{DiagramMeta, Style};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttDiagram {
    pub(crate) meta: DiagramMeta,
    pub(crate) options: GanttOptions,
    pub(crate) elements: Vec<GanttElement>,
}

impl GanttDiagram {
    pub fn builder() -> GanttDiagramBuilder {
        GanttDiagramBuilder::new()
    }

    pub fn options(&self) -> &GanttOptions {
        &self.options
    }

    pub fn elements(&self) -> &[GanttElement] {
        &self.elements
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintScale {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl PrintScale {
    pub fn keyword(&self) -> &'static str {
        match self {
            PrintScale::Daily => "daily",
            PrintScale::Weekly => "weekly",
            PrintScale::Monthly => "monthly",
            PrintScale::Quarterly => "quarterly",
            PrintScale::Yearly => "yearly",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttOptions {
    pub project_start: Option<String>,
    pub print_scale: Option<PrintScale>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GanttElement {
    Task(Task),
    Milestone(Milestone),
    /// `-- label --`
    Separator(String),
    ClosedWeekday(Weekday),
    ClosedDate(String),
    /// `[A] -> [B]`
    Dependency { from: String, to: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn keyword(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

/// Anchor for a task start or a milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    Date(String),
    /// At the end of the referenced task.
    End(String),
    /// At the start of the referenced task.
    Start(String),
}

impl Anchor {
    pub fn date(date: impl Into<String>) -> Self {
        Anchor::Date(date.into())
    }

    pub fn end_of(task: impl Into<String>) -> Self {
        Anchor::End(task.into())
    }

    pub fn start_of(task: impl Into<String>) -> Self {
        Anchor::Start(task.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub alias: Option<String>,
    pub days: Option<u32>,
    pub start: Option<Anchor>,
    /// Percent complete, 0 to 100.
    pub completion: Option<u8>,
    /// Background is the bar fill, line color the bar outline.
    pub style: Style,
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            days: None,
            start: None,
            completion: None,
            style: Style::default(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn days(mut self, days: u32) -> Self {
        self.days = Some(days);
        self
    }

    pub fn starts(mut self, anchor: Anchor) -> Self {
        self.start = Some(anchor);
        self
    }

    pub fn completed(mut self, percent: u8) -> Self {
        self.completion = Some(percent);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Name used when other statements refer to this task.
    pub fn reference(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub at: Anchor,
}

impl Milestone {
    pub fn new(name: impl Into<String>, at: Anchor) -> Self {
        Self {
            name: name.into(),
            at,
        }
    }
}
