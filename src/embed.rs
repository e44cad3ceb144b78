//! Sub-diagram embedding: turn a rendered diagram into a `{{ … }}` block that
//! can sit inside another diagram's note, message or legend text.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::diagram::{Diagram, DiagramKind, Document};

/// Line separator understood inside an inline embedded diagram. Plain text
/// uses [`TEXT_NEWLINE`](crate::render::common::TEXT_NEWLINE) instead.
pub const EMBED_NEWLINE: &str = "%newline()";

const GENERIC_START: &str = "@startuml";
const GENERIC_END: &str = "@enduml";

const TRANSPARENT_STYLE: [&str; 5] = [
    "<style>",
    "root {",
    "  BackgroundColor transparent",
    "}",
    "</style>",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedOptions {
    /// Collapse the block onto one line using [`EMBED_NEWLINE`].
    pub inline: bool,
    /// Inject a style block that makes the embedded background transparent.
    pub transparent: bool,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            inline: false,
            transparent: true,
        }
    }
}

impl EmbedOptions {
    pub fn inline() -> Self {
        Self {
            inline: true,
            ..Default::default()
        }
    }
}

pub fn embed(diagram: &Diagram, options: &EmbedOptions) -> String {
    diagram.embed(options)
}

/// Wrap already-rendered diagram text.
///
/// One `@startuml`/`@enduml` pair is stripped; the markers of specialized
/// kinds (`@startjson`, `@startmindmap`, …) are kept and the transparent
/// style goes right after the specialized start line.
pub fn embed_text(rendered: &str, options: &EmbedOptions) -> String {
    let mut body = content_lines(rendered);
    let generic = match (body.first(), body.last()) {
        (Some(first), Some(last)) if body.len() >= 2 => {
            first.trim_start().starts_with(GENERIC_START) && last.trim_start().starts_with(GENERIC_END)
        }
        _ => false,
    };
    if generic {
        body = body[1..body.len() - 1].to_vec();
    }
    let specialized = !generic
        && body
            .first()
            .is_some_and(|first| first.trim_start().starts_with("@start"));
    wrap(body, specialized, options)
}

/// Like [`embed_text`] for output of a diagram of known `kind`.
pub(crate) fn embed_rendered(rendered: &str, kind: DiagramKind, options: &EmbedOptions) -> String {
    let mut body = content_lines(rendered);
    let generic = kind.is_generic();
    if generic && body.len() >= 2 {
        body = body[1..body.len() - 1].to_vec();
    }
    let specialized = !generic && !body.is_empty();
    wrap(body, specialized, options)
}

fn content_lines(rendered: &str) -> Vec<&str> {
    let mut body: Vec<&str> = rendered.lines().collect();
    while body.last().is_some_and(|line| line.trim().is_empty()) {
        body.pop();
    }
    body
}

fn wrap(body: Vec<&str>, specialized: bool, options: &EmbedOptions) -> String {
    trace!(
        specialized = specialized,
        lines = body.len(),
        inline = options.inline;
        "Embedding diagram"
    );

    let mut lines: Vec<&str> = Vec::with_capacity(body.len() + TRANSPARENT_STYLE.len() + 2);
    lines.push("{{");
    if specialized {
        lines.push(body[0]);
        if options.transparent {
            lines.extend(TRANSPARENT_STYLE);
        }
        lines.extend(&body[1..]);
    } else {
        if options.transparent {
            lines.extend(TRANSPARENT_STYLE);
        }
        lines.extend(&body);
    }
    lines.push("}}");

    if options.inline {
        lines.join(EMBED_NEWLINE)
    } else {
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque() -> EmbedOptions {
        EmbedOptions {
            transparent: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_generic_markers_are_stripped() {
        let out = embed_text("@startuml\nA --> B\n@enduml", &opaque());
        assert_eq!(out, "{{\nA --> B\n}}");
    }

    #[test]
    fn test_specialized_markers_are_kept() {
        let out = embed_text("@startjson\n{\"a\": 1}\n@endjson", &EmbedOptions::default());
        assert_eq!(
            out,
            "{{\n@startjson\n<style>\nroot {\n  BackgroundColor transparent\n}\n</style>\n{\"a\": 1}\n@endjson\n}}"
        );
    }

    #[test]
    fn test_transparent_style_follows_braces_for_generic_bodies() {
        let out = embed_text("@startuml\nA --> B\n@enduml\n", &EmbedOptions::default());
        assert!(out.starts_with("{{\n<style>\nroot {"));
        assert!(out.ends_with("</style>\nA --> B\n}}"));
    }

    #[test]
    fn test_inline_mode_uses_embed_newline() {
        let out = embed_text("@startuml\nA --> B\nB --> C\n@enduml", &EmbedOptions { inline: true, transparent: false });
        assert_eq!(out, "{{%newline()A --> B%newline()B --> C%newline()}}");
    }

    #[test]
    fn test_kind_decides_marker_handling() {
        let text = "@startuml\nA --> B\n@enduml";
        assert_eq!(embed_rendered(text, DiagramKind::State, &opaque()), "{{\nA --> B\n}}");
        let gantt = "@startgantt\n[Build] requires 3 days\n@endgantt";
        assert_eq!(
            embed_rendered(gantt, DiagramKind::Gantt, &opaque()),
            "{{\n@startgantt\n[Build] requires 3 days\n@endgantt\n}}"
        );
        let styled = embed_rendered(gantt, DiagramKind::Gantt, &EmbedOptions::default());
        assert!(styled.starts_with("{{\n@startgantt\n<style>"));
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(embed_text("", &opaque()), "{{\n}}");
        assert_eq!(embed_text("@startuml\n@enduml", &opaque()), "{{\n}}");
        let styled = embed_text("", &EmbedOptions::default());
        assert_eq!(styled.lines().count(), 7);
    }
}
