//! SVG serialization of chart primitives.

use std::fmt::Write;

use crate::chart::{Fill, Primitive, Stroke, TextAnchor, Viewport, path_data};

/// Renders `primitives` as a standalone SVG document sized to `viewport`.
///
/// Price labels sit left of the y axis at negative x, so the root element
/// keeps `overflow="visible"`.
#[must_use]
pub fn to_svg(primitives: &[Primitive], viewport: Viewport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" overflow="visible">"#,
        viewport.width, viewport.height
    );
    for primitive in primitives {
        out.push_str("  ");
        write_primitive(&mut out, primitive);
        out.push('\n');
    }
    out.push_str("</svg>\n");
    out
}

fn write_primitive(out: &mut String, primitive: &Primitive) {
    // Writing into a String cannot fail.
    let _ = match primitive {
        Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            ..
        } => write!(
            out,
            r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}"{}/>"#,
            stroke_attrs(stroke)
        ),
        Primitive::Rect {
            x,
            y,
            width,
            height,
            fill,
            ..
        } => write!(
            out,
            r#"<rect x="{x}" y="{y}" width="{width}" height="{height}"{}/>"#,
            fill_attrs(Some(fill))
        ),
        Primitive::Path {
            commands,
            stroke,
            fill,
            ..
        } => write!(
            out,
            r#"<path d="{}"{}{}/>"#,
            path_data(commands),
            stroke.as_ref().map(stroke_attrs).unwrap_or_default(),
            fill_attrs(fill.as_ref())
        ),
        Primitive::Text {
            x,
            y,
            content,
            color,
            font_size,
            anchor,
            ..
        } => write!(
            out,
            r#"<text x="{x}" y="{y}" text-anchor="{}" dominant-baseline="middle" fill="{}" font-size="{font_size}px">{}</text>"#,
            anchor_name(*anchor),
            color.as_str(),
            escape(content)
        ),
    };
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut attrs = format!(
        r#" stroke="{}" stroke-width="{}""#,
        stroke.color.as_str(),
        stroke.width
    );
    if stroke.opacity < 1.0 {
        let _ = write!(attrs, r#" stroke-opacity="{}""#, stroke.opacity);
    }
    if let Some((dash, gap)) = stroke.dash {
        let _ = write!(attrs, r#" stroke-dasharray="{dash},{gap}""#);
    }
    attrs
}

fn fill_attrs(fill: Option<&Fill>) -> String {
    match fill {
        None => r#" fill="none""#.to_string(),
        Some(fill) if fill.opacity < 1.0 => format!(
            r#" fill="{}" fill-opacity="{}""#,
            fill.color.as_str(),
            fill.opacity
        ),
        Some(fill) => format!(r#" fill="{}""#, fill.color.as_str()),
    }
}

fn anchor_name(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
