//! Type definitions shared by every diagram kind: colors, styles, stereotypes,
//! relationships, notes, legends and the diagram-wide metadata block.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

lazy_static! {
    static ref RE_HEX_BODY: Regex =
        Regex::new(r"^(?:[0-9A-Fa-f]{3,4}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$").unwrap();
}

/// Returns true when `value` (without any `#`) is 3, 4, 6 or 8 hex digits.
pub fn looks_like_hex(value: &str) -> bool {
    RE_HEX_BODY.is_match(value)
}

// ============================================================================
// Colors
// ============================================================================

/// A color as supplied by the caller.
///
/// Colors are stored exactly as given and only normalized when rendered, so a
/// user-supplied `#red` survives construction and is corrected later.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// A named color such as `red` or `LightBlue`.
    Named(String),
    /// `RGB`, `RGBA`, `RRGGBB` or `AARRGGBB`, with or without a leading `#`.
    Hex(String),
    Rgb(u8, u8, u8),
}

impl Color {
    pub fn named(name: impl Into<String>) -> Self {
        Color::Named(name.into())
    }

    pub fn hex(value: impl Into<String>) -> Self {
        Color::Hex(value.into())
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Classify free text: hex digits (after at most one `#`) become
    /// [`Color::Hex`], anything else a [`Color::Named`].
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        let body = value.strip_prefix('#').unwrap_or(value);
        if looks_like_hex(body) {
            Color::Hex(value.to_string())
        } else {
            Color::Named(value.to_string())
        }
    }

    /// The color text as supplied; RGB triples are spelled `#RRGGBB`.
    pub fn raw(&self) -> Cow<'_, str> {
        match self {
            Color::Named(name) => Cow::Borrowed(name.as_str()),
            Color::Hex(value) => Cow::Borrowed(value.as_str()),
            Color::Rgb(r, g, b) => Cow::Owned(format!("#{:02X}{:02X}{:02X}", r, g, b)),
        }
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Color::parse(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Color::parse(&value)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientDirection {
    Horizontal, // |
    Vertical,   // -
    DiagonalUp, // /
    DiagonalDown, // \
}

impl GradientDirection {
    pub fn separator(&self) -> char {
        match self {
            GradientDirection::Horizontal => '|',
            GradientDirection::Vertical => '-',
            GradientDirection::DiagonalUp => '/',
            GradientDirection::DiagonalDown => '\\',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub start: Color,
    pub end: Color,
    pub direction: GradientDirection,
}

impl Gradient {
    pub fn new(start: impl Into<Color>, end: impl Into<Color>, direction: GradientDirection) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            direction,
        }
    }

    pub fn horizontal(start: impl Into<Color>, end: impl Into<Color>) -> Self {
        Self::new(start, end, GradientDirection::Horizontal)
    }

    pub fn vertical(start: impl Into<Color>, end: impl Into<Color>) -> Self {
        Self::new(start, end, GradientDirection::Vertical)
    }
}

/// Fill of an element: a solid color or a two-stop gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Background {
    Solid(Color),
    Gradient(Gradient),
}

impl From<Color> for Background {
    fn from(color: Color) -> Self {
        Background::Solid(color)
    }
}

impl From<&str> for Background {
    fn from(value: &str) -> Self {
        Background::Solid(Color::parse(value))
    }
}

impl From<Gradient> for Background {
    fn from(gradient: Gradient) -> Self {
        Background::Gradient(gradient)
    }
}

// ============================================================================
// Line and element styles
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinePattern {
    Plain,
    Dashed,
    Dotted,
    Hidden,
}

impl LinePattern {
    pub fn keyword(&self) -> &'static str {
        match self {
            LinePattern::Plain => "plain",
            LinePattern::Dashed => "dashed",
            LinePattern::Dotted => "dotted",
            LinePattern::Hidden => "hidden",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<LinePattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<u32>,
    #[serde(default)]
    pub bold: bool,
}

impl LineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn pattern(mut self, pattern: LinePattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn thickness(mut self, thickness: u32) -> Self {
        self.thickness = Some(thickness);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.pattern.is_none() && self.thickness.is_none() && !self.bold
    }

    /// Only a color is set; nothing about the stroke itself.
    pub fn is_color_only(&self) -> bool {
        self.color.is_some() && self.pattern.is_none() && self.thickness.is_none() && !self.bold
    }
}

/// `<<name>>`, optionally with a spot glyph: `<< (S,#FF7700) name >>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stereotype {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot: Option<Spot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    pub glyph: char,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Stereotype {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spot: None,
        }
    }

    pub fn spot(mut self, glyph: char, color: Option<Color>) -> Self {
        self.spot = Some(Spot { glyph, color });
        self
    }
}

impl From<&str> for Stereotype {
    fn from(name: &str) -> Self {
        Stereotype::new(name)
    }
}

/// Visual style of an element or relationship.
///
/// Which axes are accepted depends on the element: builders reject axes the
/// element's dialect cannot express.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default)]
    pub line: LineStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stereotype: Option<Stereotype>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a style with only a background.
    pub fn fill(background: impl Into<Background>) -> Self {
        Self::new().background(background)
    }

    pub fn background(mut self, background: impl Into<Background>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn line(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    pub fn line_color(mut self, color: impl Into<Color>) -> Self {
        self.line.color = Some(color.into());
        self
    }

    pub fn dashed(mut self) -> Self {
        self.line.pattern = Some(LinePattern::Dashed);
        self
    }

    pub fn dotted(mut self) -> Self {
        self.line.pattern = Some(LinePattern::Dotted);
        self
    }

    pub fn bold(mut self) -> Self {
        self.line.bold = true;
        self
    }

    pub fn thickness(mut self, thickness: u32) -> Self {
        self.line.thickness = Some(thickness);
        self
    }

    pub fn text_color(mut self, color: impl Into<Color>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    pub fn stereotype(mut self, stereotype: impl Into<Stereotype>) -> Self {
        self.stereotype = Some(stereotype.into());
        self
    }

    /// True when no visual axis is set. The stereotype is not a visual axis.
    pub fn is_plain(&self) -> bool {
        self.background.is_none() && self.line.is_empty() && self.text_color.is_none()
    }
}

// ============================================================================
// Relationships
// ============================================================================

/// Layout hint placed inside an arrow (`-up->`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowDirection {
    pub fn keyword(&self) -> &'static str {
        match self {
            ArrowDirection::Up => "up",
            ArrowDirection::Down => "down",
            ArrowDirection::Left => "left",
            ArrowDirection::Right => "right",
        }
    }
}

/// A relationship between two elements, referenced by name or alias.
///
/// Endpoints are never resolved against the diagram: whatever text is given
/// is what the renderer emits. `K` is the diagram kind's relationship
/// vocabulary, which owns the glyph table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link<K> {
    pub source: String,
    pub target: String,
    pub kind: K,
    /// Cardinality or role at the source end, rendered as `"1"` before the glyph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<ArrowDirection>,
    #[serde(default)]
    pub style: Style,
}

impl<K> Link<K> {
    pub fn new(source: impl Into<String>, kind: K, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
            source_label: None,
            target_label: None,
            label: None,
            direction: None,
            style: Style::default(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn cardinality(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.source_label = Some(source.into());
        self.target_label = Some(target.into());
        self
    }

    pub fn source_label(mut self, label: impl Into<String>) -> Self {
        self.source_label = Some(label.into());
        self
    }

    pub fn target_label(mut self, label: impl Into<String>) -> Self {
        self.target_label = Some(label.into());
        self
    }

    pub fn direction(mut self, direction: ArrowDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

// ============================================================================
// Annotations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotePosition {
    Left,
    Right,
    Top,
    Bottom,
    Over,
}

impl NotePosition {
    pub fn keyword(&self) -> &'static str {
        match self {
            NotePosition::Left => "left",
            NotePosition::Right => "right",
            NotePosition::Top => "top",
            NotePosition::Bottom => "bottom",
            NotePosition::Over => "over",
        }
    }
}

/// A note attached to an element (`note left of A`) or floating
/// (`note "text" as N1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub content: String,
    pub position: NotePosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default)]
    pub style: Style,
}

impl Note {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            position: NotePosition::Right,
            target: None,
            alias: None,
            style: Style::default(),
        }
    }

    pub fn position(mut self, position: NotePosition) -> Self {
        self.position = position;
        self
    }

    pub fn left(self) -> Self {
        self.position(NotePosition::Left)
    }

    pub fn right(self) -> Self {
        self.position(NotePosition::Right)
    }

    pub fn top(self) -> Self {
        self.position(NotePosition::Top)
    }

    pub fn bottom(self) -> Self {
        self.position(NotePosition::Bottom)
    }

    /// Attach the note to the element with this name or alias.
    pub fn of(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl From<&str> for Note {
    fn from(content: &str) -> Self {
        Note::new(content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Bottom,
}

/// Legend block rendered at the end of the diagram body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<HorizontalAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<VerticalAlign>,
}

impl Legend {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            horizontal: None,
            vertical: None,
        }
    }

    pub fn align(mut self, horizontal: HorizontalAlign) -> Self {
        self.horizontal = Some(horizontal);
        self
    }

    pub fn valign(mut self, vertical: VerticalAlign) -> Self {
        self.vertical = Some(vertical);
        self
    }
}

impl From<&str> for Legend {
    fn from(content: &str) -> Self {
        Legend::new(content)
    }
}

// ============================================================================
// Diagram-wide metadata (common across all diagram kinds)
// ============================================================================

/// Title, theme, style block and page decorations shared by every kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Raw body of a `<style>` block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}
