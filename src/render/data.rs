use super::render_document;
use crate::diagram::{sealed::Sealed, DiagramKind, Document};
use crate::primitives::data::{DataDiagram, DataFormat};
use crate::types::DiagramMeta;

impl Sealed for DataDiagram {
    fn meta_slot(&mut self) -> &mut DiagramMeta {
        &mut self.meta
    }
}

impl Document for DataDiagram {
    fn kind(&self) -> DiagramKind {
        match self.format {
            DataFormat::Json => DiagramKind::Json,
            DataFormat::Yaml => DiagramKind::Yaml,
        }
    }

    fn meta(&self) -> &DiagramMeta {
        &self.meta
    }

    fn render_with(&self, options: &super::RenderOptions) -> String {
        render_document(self.kind(), &self.meta, self.highlights.len(), options, |w| {
            for path in &self.highlights {
                let path = path
                    .iter()
                    .map(|segment| format!("\"{}\"", segment))
                    .collect::<Vec<_>>()
                    .join(" / ");
                w.line(format!("#highlight {}", path));
            }
            if !self.body.is_empty() {
                w.verbatim(&self.body);
            }
        })
    }
}
