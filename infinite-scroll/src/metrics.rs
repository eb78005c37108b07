use crate::{Edge, Orientation, ScrollEvent};

/// The main-axis scalars the trigger logic needs, read from one [`ScrollEvent`].
///
/// Recomputed on every event and never retained.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    pub content_length: f64,
    /// Inset before the content (top, or left for horizontal lists).
    pub leading_inset: f64,
    /// Inset after the content (bottom, or right for horizontal lists).
    pub trailing_inset: f64,
    pub scroll_offset: f64,
    pub viewport_length: f64,
}

impl ScrollMetrics {
    pub fn from_event(event: &ScrollEvent, orientation: Orientation) -> Self {
        let metrics = match orientation {
            Orientation::Horizontal => Self {
                content_length: event.content_size.width,
                leading_inset: event.content_inset.left,
                trailing_inset: event.content_inset.right,
                scroll_offset: event.content_offset.x,
                viewport_length: event.layout_measurement.width,
            },
            Orientation::Vertical => Self {
                content_length: event.content_size.height,
                leading_inset: event.content_inset.top,
                trailing_inset: event.content_inset.bottom,
                scroll_offset: event.content_offset.y,
                viewport_length: event.layout_measurement.height,
            },
        };
        debug_assert!(
            metrics.is_finite(),
            "ScrollMetrics: non-finite scroll event ({metrics:?})"
        );
        metrics
    }

    /// Remaining scrollable distance past the trailing edge of the viewport.
    ///
    /// Negative while over-scrolled past the end.
    pub fn distance_from_end(&self) -> f64 {
        self.content_length + self.trailing_inset - self.scroll_offset - self.viewport_length
    }

    /// Scrolled distance from the leading edge. Negative while over-scrolled past the start.
    pub fn distance_from_start(&self) -> f64 {
        self.scroll_offset - self.leading_inset
    }

    pub fn distance_from(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.distance_from_start(),
            Edge::Bottom => self.distance_from_end(),
        }
    }

    fn is_finite(&self) -> bool {
        self.content_length.is_finite()
            && self.leading_inset.is_finite()
            && self.trailing_inset.is_finite()
            && self.scroll_offset.is_finite()
            && self.viewport_length.is_finite()
    }
}
