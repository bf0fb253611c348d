use std::fmt::Write as _;

use crate::error::ChartResult;
use crate::render::{
    LinePrimitive, PrimitiveGroup, RectPrimitive, RenderFrame, Renderer, SvgDocument,
    TextHAlign, TextPrimitive,
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub groups_written: usize,
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Serializes frames into standalone SVG documents.
///
/// The document is sized to the frame's chart box and its `viewBox` matches
/// that box; layers are written bottom to top.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: Option<SvgDocument>,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn document(&self) -> Option<&SvgDocument> {
        self.document.as_ref()
    }

    #[must_use]
    pub fn take_document(&mut self) -> Option<SvgDocument> {
        self.document.take()
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    fn write_group(out: &mut String, group: &PrimitiveGroup, stats: &mut SvgRenderStats) {
        if group.is_translated() {
            out.push_str("<g transform=\"translate(");
            push_number(out, group.offset_x);
            out.push(',');
            push_number(out, group.offset_y);
            out.push_str(")\">");
        } else {
            out.push_str("<g>");
        }
        for rect in &group.rects {
            write_rect(out, rect);
            stats.rects_drawn += 1;
        }
        for line in &group.lines {
            write_line(out, line);
            stats.lines_drawn += 1;
        }
        for text in &group.texts {
            write_text(out, text);
            stats.texts_drawn += 1;
        }
        out.push_str("</g>");
        stats.groups_written += 1;
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let chart_box = frame.chart_box;
        let mut stats = SvgRenderStats::default();
        let mut out = String::with_capacity(1024);
        let _ = write!(out, "<svg xmlns=\"{SVG_NS}\" xmlns:xlink=\"{XLINK_NS}\" viewBox=\"");
        for (index, value) in [chart_box.x, chart_box.y, chart_box.width, chart_box.height]
            .into_iter()
            .enumerate()
        {
            if index > 0 {
                out.push(' ');
            }
            push_number(&mut out, value);
        }
        out.push_str("\" width=\"");
        push_number(&mut out, chart_box.width);
        out.push_str("\" height=\"");
        push_number(&mut out, chart_box.height);
        out.push_str("\">");

        for (kind, groups) in frame.layers() {
            if groups.is_empty() {
                continue;
            }
            let _ = write!(out, "<g class=\"{}\">", kind.as_str());
            for group in groups {
                Self::write_group(&mut out, group, &mut stats);
            }
            out.push_str("</g>");
        }
        out.push_str("</svg>");

        self.document = Some(SvgDocument::new(out, chart_box.width, chart_box.height));
        self.last_stats = stats;
        Ok(())
    }
}

fn write_rect(out: &mut String, rect: &RectPrimitive) {
    out.push_str("<rect");
    push_attr_number(out, "x", rect.x);
    push_attr_number(out, "y", rect.y);
    push_attr_number(out, "width", rect.width);
    push_attr_number(out, "height", rect.height);
    if rect.corner_radius > 0.0 {
        push_attr_number(out, "rx", rect.corner_radius);
    }
    push_attr(out, "fill", &rect.fill_color.to_css());
    out.push_str("/>");
}

fn write_line(out: &mut String, line: &LinePrimitive) {
    out.push_str("<line");
    push_attr_number(out, "x1", line.x1);
    push_attr_number(out, "y1", line.y1);
    push_attr_number(out, "x2", line.x2);
    push_attr_number(out, "y2", line.y2);
    push_attr_number(out, "stroke-width", line.stroke_width);
    push_attr(out, "stroke", &line.color.to_css());
    out.push_str("/>");
}

fn write_text(out: &mut String, text: &TextPrimitive) {
    out.push_str("<text");
    push_attr_number(out, "x", text.x);
    push_attr_number(out, "y", text.y);
    if text.dy_ex != 0.0 {
        let mut buffer = ryu_js::Buffer::new();
        let dy = format!("{}ex", buffer.format(text.dy_ex));
        push_attr(out, "dy", &dy);
    }
    match text.h_align {
        TextHAlign::Left => {}
        TextHAlign::Right => push_attr(out, "text-anchor", "end"),
    }
    push_attr_number(out, "font-size", text.style.font_size_px);
    push_attr(out, "font-family", &text.style.font_family);
    push_attr(out, "fill", &text.color.to_css());
    out.push('>');
    escape_xml_into(out, &text.text);
    out.push_str("</text>");
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_xml_into(out, value);
    out.push('"');
}

fn push_attr_number(out: &mut String, name: &str, value: f64) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_number(out, value);
    out.push('"');
}

/// Shortest round-trip formatting, matching how browsers print numbers.
fn push_number(out: &mut String, value: f64) {
    // Frames are validated before writing, so only `-0` needs normalizing.
    let value = if value == 0.0 { 0.0 } else { value };
    let mut buffer = ryu_js::Buffer::new();
    out.push_str(buffer.format(value));
}

fn escape_xml_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
