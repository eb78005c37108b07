use crate::{InfiniteScrollConfig, Platform, ScrollTo};

/// When the first top-offset compensation runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitialOffsetStrategy {
    /// Apply synchronously at mount. The top indicator may be shown right away.
    Immediate,
    /// Apply once pending interactions have settled, on the following tick.
    ///
    /// For hosts whose first layout pass may not be committed when mount-time code runs. The top
    /// indicator stays hidden until the deferred application so it never flashes into view.
    AfterInteractions,
}

impl InitialOffsetStrategy {
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Android => Self::AfterInteractions,
            Platform::Ios | Platform::Web | Platform::Other => Self::Immediate,
        }
    }
}

/// What the host must do at mount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mount {
    /// Compensation already ran; issue the scroll request, if any.
    Applied(Option<ScrollTo>),
    /// Wait for interactions to settle, then call [`crate::InfiniteScroll::settle_mount`].
    Deferred,
}

/// Keeps the reserved top indicator region scrolled out of view while the top edge can load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopOffsetCompensator {
    strategy: InitialOffsetStrategy,
    can_show_top_indicator: bool,
}

impl TopOffsetCompensator {
    pub fn new(strategy: InitialOffsetStrategy) -> Self {
        Self {
            strategy,
            can_show_top_indicator: strategy == InitialOffsetStrategy::Immediate,
        }
    }

    pub fn strategy(&self) -> InitialOffsetStrategy {
        self.strategy
    }

    pub fn can_show_top_indicator(&self) -> bool {
        self.can_show_top_indicator
    }

    pub fn mount(&mut self, can_load_more_top: bool, config: &InfiniteScrollConfig) -> Mount {
        match self.strategy {
            InitialOffsetStrategy::Immediate => {
                Mount::Applied(self.apply(can_load_more_top, config))
            }
            InitialOffsetStrategy::AfterInteractions => Mount::Deferred,
        }
    }

    /// Allows the top indicator to show and, if the top edge can still load, returns the
    /// non-animated scroll that hides the reserved region.
    pub fn apply(
        &mut self,
        can_load_more_top: bool,
        config: &InfiniteScrollConfig,
    ) -> Option<ScrollTo> {
        self.can_show_top_indicator = true;
        if !can_load_more_top {
            return None;
        }
        istrace!(
            offset = config.top_loading_indicator_height,
            "TopOffsetCompensator::apply"
        );
        Some(ScrollTo::along(
            config.orientation,
            config.top_loading_indicator_height,
        ))
    }
}
