use crate::Edge;

/// The status indicator shown at an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusIndicator {
    /// More content may exist; shown while idle and while loading.
    Loading,
    /// The last attempt failed; the indicator offers a retry.
    Error,
}

impl StatusIndicator {
    /// Picks the indicator for one edge. A displayed error wins over the loading indicator.
    pub fn select(is_displaying_error: bool, can_load_more: bool) -> Option<Self> {
        if is_displaying_error {
            Some(Self::Error)
        } else if can_load_more {
            Some(Self::Loading)
        } else {
            None
        }
    }

    /// A stable key for the indicator element, unique per edge.
    pub fn key(self, edge: Edge) -> &'static str {
        match (self, edge) {
            (Self::Loading, Edge::Top) => "loading-indicator-top",
            (Self::Loading, Edge::Bottom) => "loading-indicator-bottom",
            (Self::Error, Edge::Top) => "loading-error-indicator-top",
            (Self::Error, Edge::Bottom) => "loading-error-indicator-bottom",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusIndicators {
    pub top: Option<StatusIndicator>,
    pub bottom: Option<StatusIndicator>,
}

impl StatusIndicators {
    pub fn get(&self, edge: Edge) -> Option<StatusIndicator> {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
        }
    }
}
