use indexmap::IndexMap;

use crate::core::ChartBox;
use crate::error::{ChartError, ChartResult};
use crate::render::{GanttLayerKind, LinePrimitive, RectPrimitive, TextPrimitive};

/// Primitives sharing one translation; drawn rects first, then lines, then texts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrimitiveGroup {
    pub offset_x: f64,
    pub offset_y: f64,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl PrimitiveGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn translated(offset_x: f64, offset_y: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn is_translated(&self) -> bool {
        self.offset_x != 0.0 || self.offset_y != 0.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.lines.is_empty() && self.texts.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.offset_x.is_finite() || !self.offset_y.is_finite() {
            return Err(ChartError::InvalidData(
                "group offset must be finite".to_owned(),
            ));
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic gantt scene, layered bottom to top.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub chart_box: ChartBox,
    layers: IndexMap<GanttLayerKind, Vec<PrimitiveGroup>>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(chart_box: ChartBox) -> Self {
        let layers = GanttLayerKind::CANONICAL_ORDER
            .into_iter()
            .map(|kind| (kind, Vec::new()))
            .collect();
        Self { chart_box, layers }
    }

    /// Appends a group on top of the layer's existing content.
    pub fn push_group(&mut self, kind: GanttLayerKind, group: PrimitiveGroup) {
        self.layers.entry(kind).or_default().push(group);
    }

    /// Inserts a group beneath the layer's existing content.
    pub fn push_group_behind(&mut self, kind: GanttLayerKind, group: PrimitiveGroup) {
        self.layers.entry(kind).or_default().insert(0, group);
    }

    #[must_use]
    pub fn layer(&self, kind: GanttLayerKind) -> &[PrimitiveGroup] {
        self.layers.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Layers in paint order.
    pub fn layers(&self) -> impl Iterator<Item = (GanttLayerKind, &[PrimitiveGroup])> {
        self.layers
            .iter()
            .map(|(kind, groups)| (*kind, groups.as_slice()))
    }

    pub fn groups(&self) -> impl Iterator<Item = &PrimitiveGroup> {
        self.layers.values().flatten()
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.groups().map(|group| group.rects.len()).sum()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.groups().map(|group| group.lines.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.groups().map(|group| group.texts.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups().all(PrimitiveGroup::is_empty)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.chart_box.is_valid() {
            return Err(ChartError::InvalidData(format!(
                "frame box must be finite with positive size: width={}, height={}",
                self.chart_box.width, self.chart_box.height
            )));
        }
        for group in self.groups() {
            group.validate()?;
        }
        Ok(())
    }
}
