//! Scope-based builders for every diagram kind.
//!
//! A [`DiagramBuilder`] carries the diagram-wide metadata and the kind's
//! options, and derefs to the kind's element scope. Scope methods validate
//! their input and append one IR node; nested containers are built by a
//! callback that receives a fresh scope of the same vocabulary, and the
//! container is appended only when the callback returns `Ok`.

pub mod activity;
pub mod class;
pub mod component;
pub mod data;
pub mod deployment;
pub mod gantt;
pub mod mindmap;
pub mod network;
pub mod object;
pub mod sequence;
pub mod state;
pub mod usecase;
pub mod wbs;

use std::ops::{Deref, DerefMut};

use log::trace;

use crate::error::{Error, Result};
use crate::types::{DiagramMeta, Legend, Link, Note, Style};

pub use activity::{ActivityDiagramBuilder, ActivityScope, ConditionalBuilder, ForkBuilder};
pub use class::{ClassDiagramBuilder, ClassScope};
pub use component::{ComponentDiagramBuilder, ComponentScope};
pub use data::{DataScope, JsonBody, JsonDiagramBuilder, YamlBody, YamlDiagramBuilder};
pub use deployment::{DeploymentDiagramBuilder, DeploymentScope};
pub use gantt::{GanttDiagramBuilder, GanttScope};
pub use mindmap::{MindmapBranch, MindmapDiagramBuilder, MindmapScope};
pub use network::{GroupMembers, NetworkDiagramBuilder, NetworkMembers, NetworkScope};
pub use object::{ObjectDiagramBuilder, ObjectScope};
pub use sequence::{FragmentBuilder, SequenceDiagramBuilder, SequenceScope};
pub use state::{RegionBuilder, StateDiagramBuilder, StateScope};
pub use usecase::{UsecaseDiagramBuilder, UsecaseScope};
pub use wbs::{WbsBranch, WbsDiagramBuilder, WbsScope};

/// Accumulates one diagram: metadata, kind options and the top-level scope.
#[derive(Debug, Clone, Default)]
pub struct DiagramBuilder<S, O = ()> {
    pub(crate) meta: DiagramMeta,
    pub(crate) options: O,
    pub(crate) scope: S,
}

impl<S, O> DiagramBuilder<S, O> {
    pub fn title(&mut self, title: impl Into<String>) -> Result<&mut Self> {
        self.meta.title = Some(required("title", title)?);
        Ok(self)
    }

    /// `!theme <name>` directive.
    pub fn theme(&mut self, theme: impl Into<String>) -> Result<&mut Self> {
        self.meta.theme = Some(required("theme", theme)?);
        Ok(self)
    }

    /// Body of a diagram-wide `<style>` block.
    pub fn style_block(&mut self, css: impl Into<String>) -> Result<&mut Self> {
        self.meta.style = Some(required("style block", css)?);
        Ok(self)
    }

    pub fn header(&mut self, header: impl Into<String>) -> Result<&mut Self> {
        self.meta.header = Some(required("header", header)?);
        Ok(self)
    }

    pub fn footer(&mut self, footer: impl Into<String>) -> Result<&mut Self> {
        self.meta.footer = Some(required("footer", footer)?);
        Ok(self)
    }

    pub fn caption(&mut self, caption: impl Into<String>) -> Result<&mut Self> {
        self.meta.caption = Some(required("caption", caption)?);
        Ok(self)
    }

    pub fn legend(&mut self, legend: impl Into<Legend>) -> Result<&mut Self> {
        let legend = legend.into();
        require_text("legend content", &legend.content)?;
        self.meta.legend = Some(legend);
        Ok(self)
    }

    pub fn scope(&mut self) -> &mut S {
        &mut self.scope
    }

    /// Kind-specific rendering options (`hide empty members`, …).
    pub fn options_mut(&mut self) -> &mut O {
        &mut self.options
    }

    pub(crate) fn into_parts(self) -> (DiagramMeta, O, S) {
        (self.meta, self.options, self.scope)
    }
}

impl<S, O> Deref for DiagramBuilder<S, O> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.scope
    }
}

impl<S, O> DerefMut for DiagramBuilder<S, O> {
    fn deref_mut(&mut self) -> &mut S {
        &mut self.scope
    }
}

// ============================================================================
// Validation helpers
// ============================================================================

/// Fails with [`Error::Validation`] when `value` is empty or whitespace-only.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        trace!(field = field; "Rejected empty text");
        return Err(Error::empty(field));
    }
    Ok(())
}

pub(crate) fn require_optional(field: &'static str, value: Option<&str>) -> Result<()> {
    match value {
        Some(value) => require_text(field, value),
        None => Ok(()),
    }
}

pub(crate) fn required(field: &'static str, value: impl Into<String>) -> Result<String> {
    let value = value.into();
    require_text(field, &value)?;
    Ok(value)
}

/// Run a nested-scope callback against a fresh scope and hand back the scope
/// only if the callback succeeded.
pub(crate) fn scoped<S, F>(build: F) -> Result<S>
where
    S: Default,
    F: FnOnce(&mut S) -> Result<()>,
{
    let mut scope = S::default();
    build(&mut scope)?;
    Ok(scope)
}

/// The style axes an element's dialect can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StyleAxes {
    pub background: bool,
    pub line: bool,
    pub text: bool,
    pub stereotype: bool,
}

impl StyleAxes {
    pub const ALL: StyleAxes = StyleAxes {
        background: true,
        line: true,
        text: true,
        stereotype: true,
    };
    pub const NONE: StyleAxes = StyleAxes {
        background: false,
        line: false,
        text: false,
        stereotype: false,
    };
    pub const BACKGROUND: StyleAxes = StyleAxes {
        background: true,
        ..StyleAxes::NONE
    };
    pub const BACKGROUND_STEREOTYPE: StyleAxes = StyleAxes {
        background: true,
        stereotype: true,
        ..StyleAxes::NONE
    };
    /// Relationships written with the `#line:..;text:..` inline form.
    pub const LINK: StyleAxes = StyleAxes {
        line: true,
        text: true,
        ..StyleAxes::NONE
    };
    /// Edges written with the `-[#color,dashed]->` bracket form.
    pub const LINE: StyleAxes = StyleAxes {
        line: true,
        ..StyleAxes::NONE
    };
}

/// Fails with [`Error::UnsupportedStyle`] naming the first axis `element`
/// cannot express.
pub(crate) fn check_style(style: &Style, element: &'static str, axes: StyleAxes) -> Result<()> {
    let offending = if !axes.background && style.background.is_some() {
        Some("background")
    } else if !axes.line && !style.line.is_empty() {
        Some("line")
    } else if !axes.text && style.text_color.is_some() {
        Some("text color")
    } else if !axes.stereotype && style.stereotype.is_some() {
        Some("stereotype")
    } else {
        None
    };
    match offending {
        Some(axis) => {
            trace!(element = element, axis = axis; "Rejected unsupported style");
            Err(Error::unsupported(element, axis))
        }
        None => {
            if let Some(stereotype) = &style.stereotype {
                require_text("stereotype", &stereotype.name)?;
            }
            Ok(())
        }
    }
}

/// Notes on class-like diagrams: non-empty content, a background at most,
/// and an alias when the note floats.
pub(crate) fn check_note(note: &Note) -> Result<()> {
    require_text("note content", &note.content)?;
    require_optional("note target", note.target.as_deref())?;
    require_optional("note alias", note.alias.as_deref())?;
    if note.target.is_none() && note.alias.is_none() {
        return Err(Error::Validation {
            field: "note alias",
            reason: "a floating note needs an alias",
        });
    }
    check_style(&note.style, "note", StyleAxes::BACKGROUND)
}

pub(crate) fn check_alias(alias: Option<&str>) -> Result<()> {
    require_optional("alias", alias)
}

/// Endpoints and labels of a relationship; style limited to line and text.
pub(crate) fn check_link<K>(link: &Link<K>) -> Result<()> {
    require_text("relationship source", &link.source)?;
    require_text("relationship target", &link.target)?;
    require_optional("relationship label", link.label.as_deref())?;
    require_optional("source cardinality", link.source_label.as_deref())?;
    require_optional("target cardinality", link.target_label.as_deref())?;
    check_style(&link.style, "relationship", StyleAxes::LINK)
}
