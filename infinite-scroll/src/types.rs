use core::fmt;

/// The scroll axis of a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

/// One end of the scrollable content along its main axis.
///
/// `Top` is the leading edge (left for horizontal lists), `Bottom` the trailing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Edge {
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 2] = [Edge::Top, Edge::Bottom];

    /// The identifier handed to error-reporting callbacks.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The platform the host UI runs on.
///
/// Only used to pick an [`crate::InitialOffsetStrategy`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Platform {
    Ios,
    Android,
    Web,
    #[default]
    Other,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A scroll or layout event as reported by the scroll container.
///
/// Both axes are always present; the engine's [`Orientation`] decides which one is read.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    pub content_size: Size,
    pub content_inset: Insets,
    pub content_offset: Point,
    pub layout_measurement: Size,
}

impl ScrollEvent {
    /// A vertical event with no insets and a viewport as wide as the content.
    pub fn vertical(content_height: f64, offset_y: f64, viewport_height: f64) -> Self {
        Self {
            content_size: Size {
                width: 0.0,
                height: content_height,
            },
            content_inset: Insets::default(),
            content_offset: Point { x: 0.0, y: offset_y },
            layout_measurement: Size {
                width: 0.0,
                height: viewport_height,
            },
        }
    }

    /// A horizontal event with no insets.
    pub fn horizontal(content_width: f64, offset_x: f64, viewport_width: f64) -> Self {
        Self {
            content_size: Size {
                width: content_width,
                height: 0.0,
            },
            content_inset: Insets::default(),
            content_offset: Point { x: offset_x, y: 0.0 },
            layout_measurement: Size {
                width: viewport_width,
                height: 0.0,
            },
        }
    }

    pub fn with_content_inset(mut self, content_inset: Insets) -> Self {
        self.content_inset = content_inset;
        self
    }
}

/// An imperative scroll request for the container.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTo {
    pub x: f64,
    pub y: f64,
    pub animated: bool,
}

impl ScrollTo {
    /// A non-animated jump to `offset` along the main axis of `orientation`.
    pub fn along(orientation: Orientation, offset: f64) -> Self {
        match orientation {
            Orientation::Vertical => Self {
                x: 0.0,
                y: offset,
                animated: false,
            },
            Orientation::Horizontal => Self {
                x: offset,
                y: 0.0,
                animated: false,
            },
        }
    }
}
