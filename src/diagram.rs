//! The closed set of diagram kinds and the operations every diagram supports.

use serde::{Deserialize, Serialize};

use crate::builder::{require_text, required};
use crate::embed::{embed_rendered, EmbedOptions};
use crate::error::Result;
use crate::primitives::{
    ActivityDiagram, ClassDiagram, ComponentDiagram, DataDiagram, DeploymentDiagram, GanttDiagram,
    MindmapDiagram, NetworkDiagram, ObjectDiagram, SequenceDiagram, StateDiagram, UsecaseDiagram,
    WbsDiagram,
};
use crate::render::RenderOptions;
use crate::types::{DiagramMeta, Legend};

/// Tag for each supported diagram kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramKind {
    Activity,
    Class,
    Sequence,
    State,
    Component,
    Deployment,
    Object,
    Usecase,
    Network,
    Mindmap,
    Wbs,
    Json,
    Yaml,
    Gantt,
}

impl DiagramKind {
    pub fn name(&self) -> &'static str {
        match self {
            DiagramKind::Activity => "activity",
            DiagramKind::Class => "class",
            DiagramKind::Sequence => "sequence",
            DiagramKind::State => "state",
            DiagramKind::Component => "component",
            DiagramKind::Deployment => "deployment",
            DiagramKind::Object => "object",
            DiagramKind::Usecase => "usecase",
            DiagramKind::Network => "network",
            DiagramKind::Mindmap => "mindmap",
            DiagramKind::Wbs => "wbs",
            DiagramKind::Json => "json",
            DiagramKind::Yaml => "yaml",
            DiagramKind::Gantt => "gantt",
        }
    }

    /// Generic kinds share `@startuml`/`@enduml`; the rest have their own pair.
    pub fn is_generic(&self) -> bool {
        matches!(
            self,
            DiagramKind::Activity
                | DiagramKind::Class
                | DiagramKind::Sequence
                | DiagramKind::State
                | DiagramKind::Component
                | DiagramKind::Deployment
                | DiagramKind::Object
                | DiagramKind::Usecase
        )
    }

    /// Start and end marker lines.
    pub fn markers(&self) -> (&'static str, &'static str) {
        match self {
            DiagramKind::Json => ("@startjson", "@endjson"),
            DiagramKind::Yaml => ("@startyaml", "@endyaml"),
            DiagramKind::Mindmap => ("@startmindmap", "@endmindmap"),
            DiagramKind::Wbs => ("@startwbs", "@endwbs"),
            DiagramKind::Network => ("@startnwdiag", "@endnwdiag"),
            DiagramKind::Gantt => ("@startgantt", "@endgantt"),
            _ => ("@startuml", "@enduml"),
        }
    }
}

impl std::fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) mod sealed {
    use crate::types::DiagramMeta;

    pub trait Sealed {
        fn meta_slot(&mut self) -> &mut DiagramMeta;
    }
}

/// Operations shared by every built diagram.
///
/// Diagrams are immutable: the `with_*` methods return an updated copy and
/// leave the receiver untouched.
pub trait Document: sealed::Sealed + Clone {
    fn kind(&self) -> DiagramKind;

    fn meta(&self) -> &DiagramMeta;

    fn render_with(&self, options: &RenderOptions) -> String;

    fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    /// Render and wrap as an embedded sub-diagram (`{{ … }}`).
    fn embed(&self, options: &EmbedOptions) -> String {
        embed_rendered(&self.render(), self.kind(), options)
    }

    fn title(&self) -> Option<&str> {
        self.meta().title.as_deref()
    }

    fn with_title(&self, title: impl Into<String>) -> Result<Self> {
        let title = required("title", title)?;
        let mut copy = self.clone();
        copy.meta_slot().title = Some(title);
        Ok(copy)
    }

    fn with_theme(&self, theme: impl Into<String>) -> Result<Self> {
        let theme = required("theme", theme)?;
        let mut copy = self.clone();
        copy.meta_slot().theme = Some(theme);
        Ok(copy)
    }

    fn with_legend(&self, legend: impl Into<Legend>) -> Result<Self> {
        let legend = legend.into();
        require_text("legend content", &legend.content)?;
        let mut copy = self.clone();
        copy.meta_slot().legend = Some(legend);
        Ok(copy)
    }

    fn without_legend(&self) -> Self {
        let mut copy = self.clone();
        copy.meta_slot().legend = None;
        copy
    }
}

/// Any built diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Diagram {
    Activity(ActivityDiagram),
    Class(ClassDiagram),
    Sequence(SequenceDiagram),
    State(StateDiagram),
    Component(ComponentDiagram),
    Deployment(DeploymentDiagram),
    Object(ObjectDiagram),
    Usecase(UsecaseDiagram),
    Network(NetworkDiagram),
    Mindmap(MindmapDiagram),
    Wbs(WbsDiagram),
    /// JSON or YAML; the payload records which.
    Data(DataDiagram),
    Gantt(GanttDiagram),
}

impl Diagram {
    fn as_document(&self) -> &dyn DocumentView {
        match self {
            Diagram::Activity(d) => d,
            Diagram::Class(d) => d,
            Diagram::Sequence(d) => d,
            Diagram::State(d) => d,
            Diagram::Component(d) => d,
            Diagram::Deployment(d) => d,
            Diagram::Object(d) => d,
            Diagram::Usecase(d) => d,
            Diagram::Network(d) => d,
            Diagram::Mindmap(d) => d,
            Diagram::Wbs(d) => d,
            Diagram::Data(d) => d,
            Diagram::Gantt(d) => d,
        }
    }
}

/// Object-safe subset of [`Document`] used for dispatch.
trait DocumentView {
    fn view_kind(&self) -> DiagramKind;
    fn view_meta(&self) -> &DiagramMeta;
    fn view_render(&self, options: &RenderOptions) -> String;
}

impl<D: Document> DocumentView for D {
    fn view_kind(&self) -> DiagramKind {
        self.kind()
    }

    fn view_meta(&self) -> &DiagramMeta {
        self.meta()
    }

    fn view_render(&self, options: &RenderOptions) -> String {
        self.render_with(options)
    }
}

impl sealed::Sealed for Diagram {
    fn meta_slot(&mut self) -> &mut DiagramMeta {
        match self {
            Diagram::Activity(d) => d.meta_slot(),
            Diagram::Class(d) => d.meta_slot(),
            Diagram::Sequence(d) => d.meta_slot(),
            Diagram::State(d) => d.meta_slot(),
            Diagram::Component(d) => d.meta_slot(),
            Diagram::Deployment(d) => d.meta_slot(),
            Diagram::Object(d) => d.meta_slot(),
            Diagram::Usecase(d) => d.meta_slot(),
            Diagram::Network(d) => d.meta_slot(),
            Diagram::Mindmap(d) => d.meta_slot(),
            Diagram::Wbs(d) => d.meta_slot(),
            Diagram::Data(d) => d.meta_slot(),
            Diagram::Gantt(d) => d.meta_slot(),
        }
    }
}

impl Document for Diagram {
    fn kind(&self) -> DiagramKind {
        self.as_document().view_kind()
    }

    fn meta(&self) -> &DiagramMeta {
        self.as_document().view_meta()
    }

    fn render_with(&self, options: &RenderOptions) -> String {
        self.as_document().view_render(options)
    }
}

macro_rules! impl_from_diagram {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Diagram {
                fn from(diagram: $ty) -> Self {
                    Diagram::$variant(diagram)
                }
            }
        )*
    };
}

impl_from_diagram!(
    Activity(ActivityDiagram),
    Class(ClassDiagram),
    Sequence(SequenceDiagram),
    State(StateDiagram),
    Component(ComponentDiagram),
    Deployment(DeploymentDiagram),
    Object(ObjectDiagram),
    Usecase(UsecaseDiagram),
    Network(NetworkDiagram),
    Mindmap(MindmapDiagram),
    Wbs(WbsDiagram),
    Data(DataDiagram),
    Gantt(GanttDiagram),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_kinds_share_markers() {
        assert_eq!(DiagramKind::State.markers(), ("@startuml", "@enduml"));
        assert!(DiagramKind::Usecase.is_generic());
        assert!(!DiagramKind::Gantt.is_generic());
        assert_eq!(DiagramKind::Network.markers(), ("@startnwdiag", "@endnwdiag"));
    }

    #[test]
    fn test_copy_on_write_leaves_original_untouched() {
        let original: Diagram = StateDiagram::builder().build().into();
        let titled = original.with_title("Lifecycle").unwrap();
        assert_eq!(original.title(), None);
        assert_eq!(titled.title(), Some("Lifecycle"));
        assert!(titled.render().contains("title Lifecycle"));
        assert!(original.with_title(" ").is_err());

        let with_legend = titled.with_legend("key").unwrap();
        assert!(with_legend.meta().legend.is_some());
        assert!(with_legend.without_legend().meta().legend.is_none());
    }
}
