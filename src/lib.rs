//! umlscribe - Build UML and related diagrams in Rust and render them as
//! PlantUML-style diagram text
//!
//! Diagrams are assembled with scope-based builders that validate every call,
//! frozen into immutable values, and rendered by pure functions. The library
//! never runs a diagram engine itself; the output is text for one.
//!
//! # Example
//!
//! ```rust
//! use umlscribe::primitives::StateDiagram;
//! use umlscribe::Document;
//!
//! let mut builder = StateDiagram::builder();
//! builder.state("A").unwrap();
//! builder.state("B").unwrap();
//! builder.transition(("A", "B", "go")).unwrap();
//!
//! assert_eq!(
//!     builder.build().render(),
//!     "@startuml\nstate A\nstate B\nA --> B : go\n@enduml"
//! );
//! ```
//!
//! # Supported Diagram Types
//!
//! - Activity, class, sequence, state, component, deployment, object and
//!   use case diagrams (`@startuml`)
//! - Network diagrams (`@startnwdiag`)
//! - Mindmaps (`@startmindmap`) and work breakdown structures (`@startwbs`)
//! - JSON and YAML data views (`@startjson`, `@startyaml`)
//! - Gantt charts (`@startgantt`)

pub mod builder;
pub mod diagram;
pub mod embed;
pub mod error;
pub mod primitives;
pub mod render;
pub mod types;

pub use diagram::{Diagram, DiagramKind, Document};
pub use embed::{embed, embed_text, EmbedOptions};
pub use error::{Error, Result};
pub use render::{render, RenderOptions};
pub use types::*;
