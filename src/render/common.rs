//! Formatting rules shared by the per-kind renderers: name quoting, text
//! escaping, relationship lines, notes, legends and the metadata block.

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

use super::color::{
    render_background, render_bracket_style, render_element_style, render_link_style,
    render_stereotype, ColorMode,
};
use super::writer::Writer;
use crate::embed::EMBED_NEWLINE;
use crate::types::{
    ArrowDirection, DiagramMeta, HorizontalAlign, Legend, Link, Note, NotePosition, Style,
    VerticalAlign,
};

lazy_static! {
    static ref RE_PLAIN_NAME: Regex = Regex::new(r"^[\p{L}\p{N}_.]+$").unwrap();
    static ref RE_PLAIN_CLASS_NAME: Regex = Regex::new(r"^[\p{L}\p{N}_]+$").unwrap();
    // [*], [H], [Component], (Use case), :Actor:, and the bare [ ] message ends
    static ref RE_PSEUDO_REFERENCE: Regex =
        Regex::new(r"^(?:\[[^\]]*\]|\([^)]*\)|:[^:]+:|\[|\])$").unwrap();
}

/// Newline escape understood inside single-line text.
pub const TEXT_NEWLINE: &str = "\\n";

/// Quote `name` unless it is letters, digits, `_` and `.` only.
pub fn quote_name(name: &str) -> Cow<'_, str> {
    if RE_PLAIN_NAME.is_match(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("\"{}\"", name))
    }
}

/// Like [`quote_name`], but `.` also forces quotes since class diagrams read
/// it as a namespace separator.
pub fn quote_class_name(name: &str) -> Cow<'_, str> {
    if RE_PLAIN_CLASS_NAME.is_match(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("\"{}\"", name))
    }
}

/// Replace real line breaks with the single-line escape. Inside a block
/// `{{ … }}` embed the breaks become [`EMBED_NEWLINE`] so the sub-diagram
/// keeps its lines.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains('\n') {
        return Cow::Borrowed(text);
    }
    let text = text.replace("\r\n", "\n");
    let mut out = String::with_capacity(text.len() + 16);
    let mut depth = 0usize;
    let mut rest = text.as_str();
    while let Some(c) = rest.chars().next() {
        if rest.starts_with("{{\n") {
            depth += 1;
            out.push_str("{{");
            out.push_str(EMBED_NEWLINE);
            rest = &rest[3..];
        } else if depth > 0 && rest.starts_with("\n}}") {
            depth -= 1;
            out.push_str(EMBED_NEWLINE);
            out.push_str("}}");
            rest = &rest[3..];
        } else {
            match c {
                '\n' if depth > 0 => out.push_str(EMBED_NEWLINE),
                '\n' => out.push_str(TEXT_NEWLINE),
                _ => out.push(c),
            }
            rest = &rest[c.len_utf8()..];
        }
    }
    Cow::Owned(out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Quoting {
    General,
    Class,
}

impl Quoting {
    pub(crate) fn apply(self, name: &str) -> Cow<'_, str> {
        match self {
            Quoting::General => quote_name(name),
            Quoting::Class => quote_class_name(name),
        }
    }
}

/// A name used in a relationship or note. Pseudo references like `[*]` or
/// `(Login)` are already in diagram syntax and pass through.
pub(crate) fn reference(name: &str, quoting: Quoting) -> Cow<'_, str> {
    if RE_PSEUDO_REFERENCE.is_match(name) {
        Cow::Borrowed(name)
    } else {
        quoting.apply(name)
    }
}

/// `keyword name [as alias]`
pub(crate) fn declaration(keyword: &str, name: &str, alias: Option<&str>, quoting: Quoting) -> String {
    let mut out = format!("{} {}", keyword, quoting.apply(name));
    if let Some(alias) = alias {
        out.push_str(" as ");
        out.push_str(alias);
    }
    out
}

/// ` <<stereotype>> #style` suffix of a declaration; empty parts are skipped.
pub(crate) fn decorations(style: &Style) -> String {
    let mut out = String::new();
    if let Some(stereotype) = &style.stereotype {
        out.push(' ');
        out.push_str(&render_stereotype(stereotype));
    }
    let inline = render_element_style(style);
    if !inline.is_empty() {
        out.push(' ');
        out.push_str(&inline);
    }
    out
}

// ============================================================================
// Relationships
// ============================================================================

/// A relationship vocabulary: each diagram kind owns one glyph table.
pub(crate) trait LinkGlyph {
    fn glyph(&self, direction: Option<ArrowDirection>) -> String;

    /// Label emitted when the link carries none (`<<include>>`).
    fn default_label(&self) -> Option<&'static str> {
        None
    }
}

/// Build `head` + two line characters + `tail`, with a direction keyword
/// between the line characters when given: `<|--`, `<|-up-`, `.left.>`.
pub(crate) fn compose_glyph(head: &str, line: char, tail: &str, direction: Option<ArrowDirection>) -> String {
    match direction {
        Some(direction) => format!("{}{}{}{}{}", head, line, direction.keyword(), line, tail),
        None => format!("{}{}{}{}", head, line, line, tail),
    }
}

/// Arrow with an optional bracket style and direction placed after the first
/// dash: `-->`, `-up->`, `-[#red,dashed]->`, `-[#red]up->`.
pub(crate) fn styled_arrow(shaft: &str, style: &Style, direction: Option<ArrowDirection>) -> String {
    let bracket = render_bracket_style(&style.line);
    let direction = direction.map(|d| d.keyword()).unwrap_or_default();
    if bracket.is_empty() && direction.is_empty() {
        return shaft.to_string();
    }
    match shaft.split_once('-') {
        Some((head, rest)) => format!("{}-{}{}{}", head, bracket, direction, rest),
        None => shaft.to_string(),
    }
}

/// `A "1" *-- "many" B #style : label`
pub(crate) fn render_link<K: LinkGlyph>(link: &Link<K>, quoting: Quoting) -> String {
    let mut out = reference(&link.source, quoting).into_owned();
    if let Some(label) = &link.source_label {
        out.push_str(&format!(" \"{}\"", label));
    }
    out.push(' ');
    out.push_str(&link.kind.glyph(link.direction));
    if let Some(label) = &link.target_label {
        out.push_str(&format!(" \"{}\"", label));
    }
    out.push(' ');
    out.push_str(&reference(&link.target, quoting));

    let style = render_link_style(&link.style);
    if !style.is_empty() {
        out.push(' ');
        out.push_str(&style);
    }
    if let Some(label) = link.label.as_deref().or_else(|| link.kind.default_label()) {
        out.push_str(" : ");
        out.push_str(&escape_text(label));
    }
    out
}

// ============================================================================
// Notes and legends
// ============================================================================

fn note_color(style: &Style) -> String {
    match &style.background {
        Some(background) => format!(" {}", render_background(background, ColorMode::Hashed)),
        None => String::new(),
    }
}

/// Notes on class-like diagrams: attached (`note left of A : text`) or
/// floating (`note "text" as N1`). Multi-line content uses the
/// `note …` / `end note` block.
pub(crate) fn write_note(note: &Note, quoting: Quoting, w: &mut Writer) {
    let color = note_color(&note.style);
    let multiline = note.content.contains('\n');

    match &note.target {
        Some(target) => {
            let head = match note.position {
                NotePosition::Over => format!("note over {}{}", reference(target, quoting), color),
                position => format!(
                    "note {} of {}{}",
                    position.keyword(),
                    reference(target, quoting),
                    color
                ),
            };
            if multiline {
                w.line(head);
                w.line(&note.content);
                w.line("end note");
            } else {
                w.line(format!("{} : {}", head, note.content));
            }
        }
        None => {
            let alias = note.alias.as_deref().unwrap_or_default();
            if multiline {
                w.line(format!("note as {}{}", alias, color));
                w.line(&note.content);
                w.line("end note");
            } else {
                w.line(format!("note \"{}\" as {}{}", note.content, alias, color));
            }
        }
    }
}

pub(crate) fn write_legend(legend: &Legend, w: &mut Writer) {
    let mut head = String::from("legend");
    if let Some(vertical) = legend.vertical {
        head.push_str(match vertical {
            VerticalAlign::Top => " top",
            VerticalAlign::Bottom => " bottom",
        });
    }
    if let Some(horizontal) = legend.horizontal {
        head.push_str(match horizontal {
            HorizontalAlign::Left => " left",
            HorizontalAlign::Center => " center",
            HorizontalAlign::Right => " right",
        });
    }
    w.line(head);
    w.line(&legend.content);
    w.line("endlegend");
}

// ============================================================================
// Metadata
// ============================================================================

/// Single-line `keyword text`, or a `keyword` / `close` block for multi-line text.
fn write_keyword_text(keyword: &str, close: &str, text: &str, w: &mut Writer) {
    if text.contains('\n') {
        w.line(keyword);
        w.line(text);
        w.line(close);
    } else {
        w.line(format!("{} {}", keyword, text));
    }
}

/// Title, theme, style block, header and footer, in that order.
pub(crate) fn write_meta_head(meta: &DiagramMeta, w: &mut Writer) {
    if let Some(title) = &meta.title {
        write_keyword_text("title", "end title", title, w);
    }
    if let Some(theme) = &meta.theme {
        w.line(format!("!theme {}", theme));
    }
    if let Some(style) = &meta.style {
        w.line("<style>");
        w.line(style);
        w.line("</style>");
    }
    if let Some(header) = &meta.header {
        write_keyword_text("header", "endheader", header, w);
    }
    if let Some(footer) = &meta.footer {
        write_keyword_text("footer", "endfooter", footer, w);
    }
}

/// Caption and legend, after the elements.
pub(crate) fn write_meta_tail(meta: &DiagramMeta, w: &mut Writer) {
    if let Some(caption) = &meta.caption {
        w.line(format!("caption {}", escape_text(caption)));
    }
    if let Some(legend) = &meta.legend {
        write_legend(legend, w);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderOptions;

    struct Arrow;

    impl LinkGlyph for Arrow {
        fn glyph(&self, direction: Option<ArrowDirection>) -> String {
            compose_glyph("", '-', ">", direction)
        }
    }

    fn rendered(f: impl FnOnce(&mut Writer)) -> String {
        let options = RenderOptions::default();
        let mut w = Writer::new(&options);
        f(&mut w);
        w.finish()
    }

    #[test]
    fn test_quoting_rules() {
        assert_eq!(quote_name("Alice"), "Alice");
        assert_eq!(quote_name("net.Alice"), "net.Alice");
        assert_eq!(quote_name("Alice Smith"), "\"Alice Smith\"");
        assert_eq!(quote_name("a-b"), "\"a-b\"");
        assert_eq!(quote_class_name("net.Alice"), "\"net.Alice\"");
        assert_eq!(quote_class_name("Élan_2"), "Élan_2");
    }

    #[test]
    fn test_pseudo_references_pass_through() {
        assert_eq!(reference("[*]", Quoting::General), "[*]");
        assert_eq!(reference("(Log in)", Quoting::General), "(Log in)");
        assert_eq!(reference(":Main Admin:", Quoting::General), ":Main Admin:");
        assert_eq!(reference("Log in", Quoting::General), "\"Log in\"");
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a\nb"), "a\\nb");
        assert_eq!(escape_text("a\r\nb"), "a\\nb");
        assert_eq!(escape_text("plain"), "plain");
    }

    #[test]
    fn test_escape_text_keeps_embed_lines_apart() {
        assert_eq!(
            escape_text("see\n{{\n@startjson\n{\"a\": 1}\n@endjson\n}}\nbelow"),
            "see\\n{{%newline()@startjson%newline(){\"a\": 1}%newline()@endjson%newline()}}\\nbelow"
        );
        assert_eq!(escape_text("{{\nA\n{{\nB\n}}\n}}"), "{{%newline()A%newline(){{%newline()B%newline()}}%newline()}}");
        assert_eq!(escape_text("{{ inline }}\nnext"), "{{ inline }}\\nnext");
    }

    #[test]
    fn test_link_with_cardinality_style_and_label() {
        let link = Link::new("Car", Arrow, "Wheel")
            .cardinality("1", "4")
            .direction(ArrowDirection::Down)
            .style(Style::new().line_color("red"))
            .label("has\nwheels");
        assert_eq!(
            render_link(&link, Quoting::Class),
            "Car \"1\" -down-> \"4\" Wheel #red : has\\nwheels"
        );
    }

    #[test]
    fn test_styled_arrow_places_style_after_first_dash() {
        let red = Style::new().line_color("red").dashed();
        assert_eq!(styled_arrow("-->", &Style::new(), None), "-->");
        assert_eq!(styled_arrow("-->", &Style::new(), Some(ArrowDirection::Up)), "-up->");
        assert_eq!(styled_arrow("-->", &red, None), "-[#red,dashed]->");
        assert_eq!(styled_arrow("<->", &red, None), "<-[#red,dashed]>");
        assert_eq!(styled_arrow("->x", &red, Some(ArrowDirection::Left)), "-[#red,dashed]left>x");
    }

    #[test]
    fn test_notes() {
        let attached = Note::new("important").left().of("User Account");
        assert_eq!(
            rendered(|w| write_note(&attached, Quoting::General, w)),
            "note left of \"User Account\" : important"
        );

        let floating = Note::new("line one\nline two")
            .alias("N1")
            .style(Style::fill("yellow"));
        assert_eq!(
            rendered(|w| write_note(&floating, Quoting::General, w)),
            "note as N1 #yellow\nline one\nline two\nend note"
        );
    }

    #[test]
    fn test_meta_block_order() {
        let meta = DiagramMeta {
            title: Some("Two\nLines".to_string()),
            theme: Some("cerulean".to_string()),
            style: Some("root { FontSize 12 }".to_string()),
            header: Some("draft".to_string()),
            ..Default::default()
        };
        assert_eq!(
            rendered(|w| write_meta_head(&meta, w)),
            "title\nTwo\nLines\nend title\n!theme cerulean\n<style>\nroot { FontSize 12 }\n</style>\nheader draft"
        );
    }

    #[test]
    fn test_legend_position() {
        let legend = Legend::new("key")
            .valign(VerticalAlign::Top)
            .align(HorizontalAlign::Left);
        assert_eq!(
            rendered(|w| write_legend(&legend, w)),
            "legend top left\nkey\nendlegend"
        );
    }
}
