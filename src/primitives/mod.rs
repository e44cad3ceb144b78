//! Immutable IR for each diagram kind.
//!
//! One submodule per kind: the diagram value, its element sum type and the
//! node types that appear in it. Element vocabularies overlap in name
//! (`Group`, `Note`, …), so only the diagram types are re-exported here.

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

pub use activity::ActivityDiagram;
pub use class::ClassDiagram;
pub use component::ComponentDiagram;
pub use data::{DataDiagram, DataFormat};
pub use deployment::DeploymentDiagram;
pub use gantt::GanttDiagram;
pub use mindmap::MindmapDiagram;
pub use network::NetworkDiagram;
pub use object::ObjectDiagram;
pub use sequence::SequenceDiagram;
pub use state::StateDiagram;
pub use usecase::UsecaseDiagram;
pub use wbs::WbsDiagram;
