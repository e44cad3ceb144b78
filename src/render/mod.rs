//! Text renderers: IR in, diagram-description text out.
//!
//! Every kind renders through [`render_document`], which owns the layout shared
//! by all kinds: start marker, metadata head, the kind's options and elements,
//! caption and legend, end marker.

pub mod color;
pub mod common;
pub(crate) mod writer;

mod activity;
mod class;
mod component;
mod data;
mod deployment;
mod gantt;
mod mindmap;
mod network;
mod object;
mod sequence;
mod state;
mod usecase;
mod wbs;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::diagram::{Diagram, DiagramKind, Document};
use crate::types::DiagramMeta;
use common::{write_meta_head, write_meta_tail};
use writer::Writer;

pub use color::{render_color, render_color_bare, render_color_hash, ColorMode};
pub use common::{escape_text, quote_class_name, quote_name};

/// Options for rendering diagram text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Spaces per nesting level inside containers.
    pub indent: usize,
    /// End the output with `\n`.
    pub trailing_newline: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            trailing_newline: false,
        }
    }
}

/// Render any diagram with default options.
pub fn render(diagram: &Diagram) -> String {
    diagram.render()
}

pub(crate) fn render_document(
    kind: DiagramKind,
    meta: &DiagramMeta,
    elements: usize,
    options: &RenderOptions,
    body: impl FnOnce(&mut Writer),
) -> String {
    debug!(kind = kind.name(), elements = elements; "Rendering diagram");

    let (start, end) = kind.markers();
    let mut w = Writer::new(options);
    w.line(start);
    write_meta_head(meta, &mut w);
    body(&mut w);
    write_meta_tail(meta, &mut w);
    w.line(end);
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{ClassDiagram, MindmapDiagram};
    use crate::types::{Legend, VerticalAlign};

    #[test]
    fn test_metadata_layout() {
        let mut builder = ClassDiagram::builder();
        builder.title("Inventory\nQ3").unwrap();
        builder.theme("plain").unwrap();
        builder.style_block("class {\n  FontColor blue\n}").unwrap();
        builder.header("draft").unwrap();
        builder.footer("page 1").unwrap();
        builder.caption("Figure 2").unwrap();
        builder
            .legend(Legend::new("stock only").valign(VerticalAlign::Top))
            .unwrap();
        builder.class("Item").unwrap();
        assert_eq!(
            builder.build().render(),
            "@startuml\ntitle\nInventory\nQ3\nend title\n!theme plain\n<style>\nclass {\n  FontColor blue\n}\n</style>\nheader draft\nfooter page 1\nclass Item\ncaption Figure 2\nlegend top\nstock only\nendlegend\n@enduml"
        );
    }

    #[test]
    fn test_render_options() {
        let mut builder = ClassDiagram::builder();
        builder
            .package("shop", |s| {
                s.class("Cart")?;
                Ok(())
            })
            .unwrap();
        let diagram = builder.build();
        let options = RenderOptions {
            indent: 4,
            trailing_newline: true,
        };
        assert_eq!(
            diagram.render_with(&options),
            "@startuml\npackage shop {\n    class Cart\n}\n@enduml\n"
        );
    }

    #[test]
    fn test_render_dispatches_on_kind() {
        let mut builder = MindmapDiagram::builder();
        builder.root("Idea", |_| Ok(())).unwrap();
        let diagram: Diagram = builder.build().into();
        assert_eq!(diagram.kind(), DiagramKind::Mindmap);
        assert_eq!(render(&diagram), "@startmindmap\n* Idea\n@endmindmap");
    }
}
