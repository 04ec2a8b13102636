//! SVG serializer: converts a `SceneDocument` into a standalone SVG string.

use yeardots_protocol::{Paint, SceneCommand, SceneDocument, TextAlign};

/// Generic family name; the rasterizer maps it onto whichever font it was
/// given.
pub const FONT_FAMILY: &str = "sans-serif";

/// Render a scene as an SVG document string.
pub fn render_svg(doc: &SceneDocument) -> String {
    let mut svg = String::with_capacity(doc.commands.len() * 96);
    let (width, height) = (doc.width, doc.height);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#,
    ));

    for cmd in &doc.commands {
        svg.push_str("\n  ");
        write_command(&mut svg, cmd);
    }

    svg.push_str("\n</svg>");
    svg
}

fn write_command(svg: &mut String, cmd: &SceneCommand) {
    match cmd {
        SceneCommand::DrawRect {
            rect,
            corner_radius,
            fill,
            opacity,
        } => {
            svg.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                rect.x, rect.y, rect.w, rect.h
            ));
            if *corner_radius > 0.0 {
                svg.push_str(&format!(r#" rx="{corner_radius}""#));
            }
            let fill = match fill {
                Paint::Solid(color) => color.to_string(),
                Paint::Gradient(id) => format!("url(#{})", escape_xml(id)),
            };
            svg.push_str(&format!(r#" fill="{fill}""#));
            if *opacity < 1.0 {
                svg.push_str(&format!(r#" opacity="{opacity}""#));
            }
            svg.push_str("/>");
        }
        SceneCommand::DrawCircle {
            center,
            radius,
            fill,
            stroke,
        } => {
            svg.push_str(&format!(
                r#"<circle cx="{}" cy="{}" r="{radius}""#,
                center.x, center.y
            ));
            match fill {
                Some(color) => svg.push_str(&format!(r#" fill="{color}""#)),
                None => svg.push_str(r#" fill="none""#),
            }
            if let Some(stroke) = stroke {
                svg.push_str(&format!(
                    r#" stroke="{}" stroke-width="{}""#,
                    stroke.color, stroke.width
                ));
            }
            svg.push_str("/>");
        }
        SceneCommand::DrawText {
            position,
            text,
            color,
            style,
            align,
        } => {
            let anchor = match align {
                TextAlign::Center => "middle",
                TextAlign::Right => "end",
            };
            svg.push_str(&format!(
                r#"<text x="{}" y="{}" text-anchor="{anchor}" font-family="{FONT_FAMILY}" font-size="{}" font-weight="{}""#,
                position.x, position.y, style.font_size, style.font_weight
            ));
            if style.letter_spacing != 0.0 {
                svg.push_str(&format!(r#" letter-spacing="{}""#, style.letter_spacing));
            }
            svg.push_str(&format!(r#" fill="{color}">{}</text>"#, escape_xml(text)));
        }
        SceneCommand::DefineGradient { id, stops } => {
            svg.push_str(&format!(
                r#"<defs><linearGradient id="{}" x1="0%" y1="0%" x2="100%" y2="0%">"#,
                escape_xml(id)
            ));
            for stop in stops {
                svg.push_str(&format!(
                    r#"<stop offset="{}%" stop-color="{}"/>"#,
                    stop.offset_percent, stop.color
                ));
            }
            svg.push_str("</linearGradient></defs>");
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use yeardots_protocol::{Color, Point, Rect, Stroke, TextStyle};

    #[test]
    fn basic_svg_output() {
        let mut doc = SceneDocument::new(1179.0, 2556.0);
        doc.push(SceneCommand::DrawRect {
            rect: Rect::new(0.0, 0.0, 1179.0, 2556.0),
            corner_radius: 0.0,
            fill: Paint::Solid(Color::rgb(0x1c, 0x1d, 0x17)),
            opacity: 1.0,
        });
        let svg = render_svg(&doc);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"viewBox="0 0 1179 2556""#));
        assert!(svg.contains(r##"<rect x="0" y="0" width="1179" height="2556" fill="#1C1D17"/>"##));
    }

    #[test]
    fn outlined_circle_has_no_fill() {
        let mut doc = SceneDocument::new(100.0, 100.0);
        doc.push(SceneCommand::DrawCircle {
            center: Point::new(72.0, 904.0),
            radius: 10.5,
            fill: None,
            stroke: Some(Stroke {
                color: Color::rgb(0xb0, 0xb0, 0xb0).muted(),
                width: 3.0,
            }),
        });
        let svg = render_svg(&doc);
        assert!(svg.contains(
            r##"<circle cx="72" cy="904" r="10.5" fill="none" stroke="#B0B0B080" stroke-width="3"/>"##
        ));
    }

    #[test]
    fn gradient_reference_and_opacity() {
        let mut doc = SceneDocument::new(100.0, 100.0);
        doc.push(SceneCommand::DrawRect {
            rect: Rect::new(60.0, 1693.0, 979.0, 16.0),
            corner_radius: 8.0,
            fill: Paint::Solid(Color::rgb(0xa6, 0xa6, 0xa4)),
            opacity: 0.3,
        });
        doc.push(SceneCommand::DrawRect {
            rect: Rect::new(60.0, 1693.0, 400.0, 16.0),
            corner_radius: 8.0,
            fill: Paint::Gradient("seasonGradient".into()),
            opacity: 1.0,
        });
        let svg = render_svg(&doc);
        assert!(svg.contains(r##"rx="8" fill="#A6A6A4" opacity="0.3"/>"##));
        assert!(svg.contains(r#"fill="url(#seasonGradient)"/>"#));
    }

    #[test]
    fn escapes_xml_entities() {
        let mut doc = SceneDocument::new(100.0, 100.0);
        doc.push(SceneCommand::DrawText {
            position: Point::new(0.0, 0.0),
            text: "Q1 <&> Q2".into(),
            color: Color::rgb(0x89, 0x89, 0x89),
            style: TextStyle {
                font_size: 24.0,
                font_weight: 500,
                letter_spacing: 0.0,
            },
            align: TextAlign::Right,
        });
        let svg = render_svg(&doc);
        assert!(svg.contains("Q1 &lt;&amp;&gt; Q2"));
        assert!(svg.contains(r#"text-anchor="end""#));
        assert!(!svg.contains("letter-spacing"));
    }
}
