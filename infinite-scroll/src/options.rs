use crate::{CanLoadMore, Edge, InitialOffsetStrategy, Orientation, Platform};

/// Plain-data configuration for [`crate::InfiniteScroll`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize` so hosts can keep it in
/// their own settings files. Missing fields fall back to [`Default`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InfiniteScrollConfig {
    /// Start a bottom load once the remaining distance drops below this.
    pub distance_to_load_more_bottom: f64,
    /// Start a top load once the scrolled distance drops below this.
    pub distance_to_load_more_top: f64,
    /// Height (width for horizontal lists) of the region reserved above the content for the top
    /// loading/error indicator.
    pub top_loading_indicator_height: f64,
    pub orientation: Orientation,
    pub platform: Platform,
}

impl Default for InfiniteScrollConfig {
    fn default() -> Self {
        Self {
            distance_to_load_more_bottom: 150.0,
            distance_to_load_more_top: 50.0,
            top_loading_indicator_height: 100.0,
            orientation: Orientation::Vertical,
            platform: Platform::Other,
        }
    }
}

impl InfiniteScrollConfig {
    pub fn threshold(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.distance_to_load_more_top,
            Edge::Bottom => self.distance_to_load_more_bottom,
        }
    }

    pub fn initial_offset_strategy(&self) -> InitialOffsetStrategy {
        InitialOffsetStrategy::for_platform(self.platform)
    }
}

/// Configuration plus the per-edge capabilities.
///
/// Cheap to clone: predicates are stored in `Arc`s.
#[derive(Clone, Debug, Default)]
pub struct InfiniteScrollOptions {
    pub config: InfiniteScrollConfig,
    pub can_load_more_top: CanLoadMore,
    pub can_load_more_bottom: CanLoadMore,
}

impl InfiniteScrollOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: InfiniteScrollConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn can_load_more(&self, edge: Edge) -> &CanLoadMore {
        match edge {
            Edge::Top => &self.can_load_more_top,
            Edge::Bottom => &self.can_load_more_bottom,
        }
    }

    pub fn with_distance_to_load_more(mut self, top: f64, bottom: f64) -> Self {
        self.config.distance_to_load_more_top = top;
        self.config.distance_to_load_more_bottom = bottom;
        self
    }

    pub fn with_top_loading_indicator_height(mut self, height: f64) -> Self {
        self.config.top_loading_indicator_height = height;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.config.orientation = orientation;
        self
    }

    pub fn with_horizontal(self, horizontal: bool) -> Self {
        self.with_orientation(if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        })
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.config.platform = platform;
        self
    }

    pub fn with_can_load_more_top(mut self, can_load_more: impl Into<CanLoadMore>) -> Self {
        self.can_load_more_top = can_load_more.into();
        self
    }

    pub fn with_can_load_more_bottom(mut self, can_load_more: impl Into<CanLoadMore>) -> Self {
        self.can_load_more_bottom = can_load_more.into();
        self
    }

    pub fn with_can_load_more_top_fn(
        mut self,
        f: impl Fn() -> bool + Send + Sync + 'static,
    ) -> Self {
        self.can_load_more_top = CanLoadMore::predicate(f);
        self
    }

    pub fn with_can_load_more_bottom_fn(
        mut self,
        f: impl Fn() -> bool + Send + Sync + 'static,
    ) -> Self {
        self.can_load_more_bottom = CanLoadMore::predicate(f);
        self
    }
}
