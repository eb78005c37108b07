use crate::{
    CanLoadMore, Edge, EdgeState, EdgeStates, Error, InfiniteScrollConfig, InfiniteScrollOptions,
    LoadOutcome, Mount, Orientation, ScrollEvent, ScrollMetrics, ScrollTo, StatusIndicator,
    StatusIndicators, TopOffsetCompensator, Triggers, trigger,
};

/// A headless bidirectional infinite-scroll engine.
///
/// This type is intentionally UI-agnostic and synchronous:
/// - It does not hold any UI objects or run any loader.
/// - Your adapter feeds it scroll events and reports when load attempts start and end.
/// - It answers which edges should load, which indicators to show, and which non-animated
///   scroll keeps the reserved top indicator region out of view.
///
/// For an async driver that owns loaders and a scroll container, see the
/// `infinite-scroll-adapter` crate.
#[derive(Clone, Debug)]
pub struct InfiniteScroll {
    options: InfiniteScrollOptions,
    states: EdgeStates,
    compensator: TopOffsetCompensator,
}

impl InfiniteScroll {
    /// Creates an engine with both edges idle.
    ///
    /// The initial offset strategy is picked from `options.config.platform` and fixed for the
    /// lifetime of the engine.
    pub fn new(options: InfiniteScrollOptions) -> Self {
        let strategy = options.config.initial_offset_strategy();
        isdebug!(
            orientation = ?options.config.orientation,
            strategy = ?strategy,
            "InfiniteScroll::new"
        );
        Self {
            compensator: TopOffsetCompensator::new(strategy),
            states: EdgeStates::default(),
            options,
        }
    }

    pub fn options(&self) -> &InfiniteScrollOptions {
        &self.options
    }

    pub fn config(&self) -> &InfiniteScrollConfig {
        &self.options.config
    }

    pub fn orientation(&self) -> Orientation {
        self.options.config.orientation
    }

    /// Replaces thresholds and capabilities. Edge states are left untouched.
    ///
    /// Orientation and platform are fixed at construction: changes to either are ignored.
    pub fn set_options(&mut self, mut options: InfiniteScrollOptions) {
        let fixed = &self.options.config;
        if options.config.orientation != fixed.orientation
            || options.config.platform != fixed.platform
        {
            iswarn!(
                orientation = ?options.config.orientation,
                platform = ?options.config.platform,
                "InfiniteScroll::set_options: ignoring orientation/platform change"
            );
        }
        options.config.orientation = fixed.orientation;
        options.config.platform = fixed.platform;
        istrace!("InfiniteScroll::set_options");
        self.options = options;
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut InfiniteScrollOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_can_load_more(&mut self, edge: Edge, can_load_more: impl Into<CanLoadMore>) {
        let can_load_more = can_load_more.into();
        match edge {
            Edge::Top => self.options.can_load_more_top = can_load_more,
            Edge::Bottom => self.options.can_load_more_bottom = can_load_more,
        }
    }

    pub fn state(&self, edge: Edge) -> EdgeState {
        *self.states.get(edge)
    }

    pub fn states(&self) -> EdgeStates {
        self.states
    }

    pub fn is_loading(&self, edge: Edge) -> bool {
        self.states.get(edge).is_loading()
    }

    pub fn is_displaying_error(&self, edge: Edge) -> bool {
        self.states.get(edge).is_displaying_error()
    }

    /// Evaluates the edge's capability now.
    pub fn can_load_more(&self, edge: Edge) -> bool {
        self.options.can_load_more(edge).evaluate()
    }

    pub fn can_show_top_indicator(&self) -> bool {
        self.compensator.can_show_top_indicator()
    }

    pub fn metrics(&self, event: &ScrollEvent) -> ScrollMetrics {
        ScrollMetrics::from_event(event, self.orientation())
    }

    pub fn should_load(&self, edge: Edge, metrics: &ScrollMetrics) -> bool {
        trigger::should_load(
            edge,
            self.states.get(edge),
            self.options.can_load_more(edge),
            metrics,
            self.options.config.threshold(edge),
        )
    }

    /// Decides, for one scroll event, which edges should start loading.
    ///
    /// Both edges are checked independently, so a short list can fire both from one event.
    pub fn evaluate(&self, event: &ScrollEvent) -> Triggers {
        let metrics = self.metrics(event);
        let triggers = Triggers {
            top: self.should_load(Edge::Top, &metrics),
            bottom: self.should_load(Edge::Bottom, &metrics),
        };
        if triggers.any() {
            istrace!(
                top = triggers.top,
                bottom = triggers.bottom,
                distance_from_start = metrics.distance_from_start(),
                distance_from_end = metrics.distance_from_end(),
                "InfiniteScroll::evaluate"
            );
        }
        triggers
    }

    /// Marks `edge` as loading and clears its error.
    ///
    /// Returns [`Error::AlreadyLoading`] if a load is already in flight for that edge.
    pub fn begin_load(&mut self, edge: Edge) -> Result<(), Error> {
        self.states.get_mut(edge).begin(edge)?;
        isdebug!(edge = edge.as_str(), "InfiniteScroll::begin_load");
        Ok(())
    }

    /// Ends the in-flight attempt for `edge`.
    ///
    /// For the top edge this re-applies the offset compensation whatever the outcome, and returns
    /// the scroll to issue, if any.
    pub fn finish_load(&mut self, edge: Edge, outcome: LoadOutcome) -> Option<ScrollTo> {
        self.states.get_mut(edge).finish(outcome);
        isdebug!(edge = edge.as_str(), outcome = ?outcome, "InfiniteScroll::finish_load");
        match edge {
            Edge::Top => self.apply_top_offset(),
            Edge::Bottom => None,
        }
    }

    /// Runs the mount-time compensation, or defers it depending on the strategy.
    pub fn mount(&mut self) -> Mount {
        let can_load_more_top = self.can_load_more(Edge::Top);
        self.compensator.mount(can_load_more_top, &self.options.config)
    }

    /// The deferred half of [`InfiniteScroll::mount`]. Call once pending interactions settled.
    pub fn settle_mount(&mut self) -> Option<ScrollTo> {
        self.apply_top_offset()
    }

    pub fn apply_top_offset(&mut self) -> Option<ScrollTo> {
        let can_load_more_top = self.can_load_more(Edge::Top);
        self.compensator.apply(can_load_more_top, &self.options.config)
    }

    /// Indicators to render around the content.
    pub fn status_indicators(&self) -> StatusIndicators {
        let top = StatusIndicator::select(
            self.is_displaying_error(Edge::Top),
            self.can_show_top_indicator() && self.can_load_more(Edge::Top),
        );
        let bottom = StatusIndicator::select(
            self.is_displaying_error(Edge::Bottom),
            self.can_load_more(Edge::Bottom),
        );
        StatusIndicators { top, bottom }
    }
}
