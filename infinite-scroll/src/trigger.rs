use crate::{CanLoadMore, Edge, EdgeState, ScrollMetrics};

/// Which edges should start loading after one scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Triggers {
    pub top: bool,
    pub bottom: bool,
}

impl Triggers {
    pub fn any(&self) -> bool {
        self.top || self.bottom
    }

    pub fn get(&self, edge: Edge) -> bool {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
        }
    }

    /// Fired edges, bottom first.
    pub fn edges(self) -> impl Iterator<Item = Edge> {
        [Edge::Bottom, Edge::Top]
            .into_iter()
            .filter(move |&edge| self.get(edge))
    }
}

/// Whether `edge` should start loading.
///
/// All of the following must hold, checked in this order: the edge is not loading, more content
/// may exist, no error is displayed (errors wait for an explicit retry), and the distance to the
/// edge is strictly below `threshold`.
pub fn should_load(
    edge: Edge,
    state: &EdgeState,
    can_load_more: &CanLoadMore,
    metrics: &ScrollMetrics,
    threshold: f64,
) -> bool {
    !state.is_loading()
        && can_load_more.evaluate()
        && !state.is_displaying_error()
        && metrics.distance_from(edge) < threshold
}

pub fn should_load_bottom(
    state: &EdgeState,
    can_load_more: &CanLoadMore,
    metrics: &ScrollMetrics,
    threshold: f64,
) -> bool {
    should_load(Edge::Bottom, state, can_load_more, metrics, threshold)
}

pub fn should_load_top(
    state: &EdgeState,
    can_load_more: &CanLoadMore,
    metrics: &ScrollMetrics,
    threshold: f64,
) -> bool {
    should_load(Edge::Top, state, can_load_more, metrics, threshold)
}
