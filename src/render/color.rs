//! Color normalization and inline style syntax.
//!
//! Colors are normalized here and nowhere else. Three modes exist because the
//! surrounding syntax sometimes supplies the `#` itself (`#back:red`) and
//! sometimes expects the color to carry it (`-[#red]->`):
//!
//! | mode    | hex input     | named input       |
//! |---------|---------------|-------------------|
//! | bare    | prefix removed | passed through    |
//! | hashed  | prefix kept    | prefix added      |
//! | as-is   | prefix kept    | stray `#` removed |

use serde::{Deserialize, Serialize};

use crate::types::{looks_like_hex, Background, Color, Gradient, LineStyle, Stereotype, Style};

/// How a color is spelled in a given syntactic context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Bare,
    Hashed,
    AsIs,
}

fn strip_hash(value: &str) -> &str {
    value.strip_prefix('#').unwrap_or(value)
}

/// Color without a leading `#`; exactly one leading `#` is stripped.
pub fn render_color_bare(color: &Color) -> String {
    strip_hash(&color.raw()).to_string()
}

/// Color with exactly one leading `#`, for hex and named colors alike.
pub fn render_color_hash(color: &Color) -> String {
    format!("#{}", render_color_bare(color))
}

/// Hex colors keep (or regain) their `#`; named colors lose a stray one.
pub fn render_color(color: &Color) -> String {
    let raw = color.raw();
    let body = strip_hash(&raw);
    if looks_like_hex(body) {
        format!("#{}", body)
    } else {
        body.to_string()
    }
}

pub fn render_color_in(color: &Color, mode: ColorMode) -> String {
    match mode {
        ColorMode::Bare => render_color_bare(color),
        ColorMode::Hashed => render_color_hash(color),
        ColorMode::AsIs => render_color(color),
    }
}

/// `#start|#end`; both endpoints in hashed mode.
pub fn render_gradient(gradient: &Gradient) -> String {
    format!(
        "{}{}{}",
        render_color_hash(&gradient.start),
        gradient.direction.separator(),
        render_color_hash(&gradient.end)
    )
}

pub fn render_background(background: &Background, mode: ColorMode) -> String {
    match background {
        Background::Solid(color) => render_color_in(color, mode),
        Background::Gradient(gradient) => render_gradient(gradient),
    }
}

/// `<<name>>` or `<< (G,#color) name >>`.
pub fn render_stereotype(stereotype: &Stereotype) -> String {
    match &stereotype.spot {
        None => format!("<<{}>>", stereotype.name),
        Some(spot) => match &spot.color {
            Some(color) => format!(
                "<< ({},{}) {} >>",
                spot.glyph,
                render_color_hash(color),
                stereotype.name
            ),
            None => format!("<< ({}) {} >>", spot.glyph, stereotype.name),
        },
    }
}

fn line_parts(line: &LineStyle, parts: &mut Vec<String>) {
    if let Some(color) = &line.color {
        parts.push(format!("line:{}", render_color_bare(color)));
    }
    if let Some(pattern) = &line.pattern {
        parts.push(format!("line.{}", pattern.keyword()));
    }
    if line.bold {
        parts.push("line.bold".to_string());
    }
}

/// Inline style of an element.
///
/// Only a background: the short `#color` form. Anything else: the extended
/// `#back:X;line:Y;line.dashed;line.bold;text:Z` form. Line thickness has no
/// inline spelling and is skipped.
pub fn render_element_style(style: &Style) -> String {
    if style.line.is_empty() && style.text_color.is_none() {
        return match &style.background {
            Some(background) => render_background(background, ColorMode::Hashed),
            None => String::new(),
        };
    }

    let mut parts = Vec::new();
    if let Some(background) = &style.background {
        parts.push(format!("back:{}", render_background(background, ColorMode::Bare)));
    }
    line_parts(&style.line, &mut parts);
    if let Some(color) = &style.text_color {
        parts.push(format!("text:{}", render_color_bare(color)));
    }
    if parts.is_empty() {
        return String::new();
    }
    format!("#{}", parts.join(";"))
}

/// Inline style of a relationship.
///
/// Only a line color: the short `#color` form. Anything else: the extended
/// `#line:X;line.dashed;line.bold;text:Z` form.
pub fn render_link_style(style: &Style) -> String {
    if style.text_color.is_none() {
        if style.line.is_empty() {
            return String::new();
        }
        if let (true, Some(color)) = (style.line.is_color_only(), &style.line.color) {
            return render_color_hash(color);
        }
    }

    let mut parts = Vec::new();
    line_parts(&style.line, &mut parts);
    if let Some(color) = &style.text_color {
        parts.push(format!("text:{}", render_color_bare(color)));
    }
    if parts.is_empty() {
        return String::new();
    }
    format!("#{}", parts.join(";"))
}

/// Arrow bracket style: `[#red,dashed,bold,thickness=2]`, or nothing.
pub fn render_bracket_style(line: &LineStyle) -> String {
    if line.is_empty() {
        return String::new();
    }
    let mut parts = Vec::new();
    if let Some(color) = &line.color {
        parts.push(render_color_hash(color));
    }
    if let Some(pattern) = &line.pattern {
        parts.push(pattern.keyword().to_string());
    }
    if line.bold {
        parts.push("bold".to_string());
    }
    if let Some(thickness) = line.thickness {
        parts.push(format!("thickness={}", thickness));
    }
    format!("[{}]", parts.join(","))
}
