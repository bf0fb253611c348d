use serde::{Deserialize, Serialize};

/// Drawing layers of a gantt frame, declared bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GanttLayerKind {
    Stripes,
    Header,
    Labels,
    Bars,
    DurationLabels,
    MarkLines,
    MarkLabels,
}

impl GanttLayerKind {
    /// Canonical paint order; later layers draw over earlier ones.
    pub const CANONICAL_ORDER: [Self; 7] = [
        Self::Stripes,
        Self::Header,
        Self::Labels,
        Self::Bars,
        Self::DurationLabels,
        Self::MarkLines,
        Self::MarkLabels,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stripes => "stripes",
            Self::Header => "header",
            Self::Labels => "labels",
            Self::Bars => "bars",
            Self::DurationLabels => "duration-labels",
            Self::MarkLines => "mark-lines",
            Self::MarkLabels => "mark-labels",
        }
    }
}
