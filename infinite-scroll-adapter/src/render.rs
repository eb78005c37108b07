use std::fmt;
use std::rc::Rc;

use infinite_scroll::{Edge, StatusIndicator};

use crate::RetryHandle;

/// Builds the indicator elements placed around the content.
///
/// `V` is whatever element type the host UI renders.
pub struct Renderers<V> {
    pub render_loading_indicator_top: Rc<dyn Fn() -> V>,
    pub render_loading_indicator_bottom: Rc<dyn Fn() -> V>,
    /// Shared by both edges. The handle retries the edge the error belongs to.
    pub render_loading_error_indicator: Rc<dyn Fn(RetryHandle) -> V>,
}

impl<V> Clone for Renderers<V> {
    fn clone(&self) -> Self {
        Self {
            render_loading_indicator_top: Rc::clone(&self.render_loading_indicator_top),
            render_loading_indicator_bottom: Rc::clone(&self.render_loading_indicator_bottom),
            render_loading_error_indicator: Rc::clone(&self.render_loading_error_indicator),
        }
    }
}

impl<V> Renderers<V> {
    pub fn new(
        render_loading_indicator_top: impl Fn() -> V + 'static,
        render_loading_indicator_bottom: impl Fn() -> V + 'static,
        render_loading_error_indicator: impl Fn(RetryHandle) -> V + 'static,
    ) -> Self {
        Self {
            render_loading_indicator_top: Rc::new(render_loading_indicator_top),
            render_loading_indicator_bottom: Rc::new(render_loading_indicator_bottom),
            render_loading_error_indicator: Rc::new(render_loading_error_indicator),
        }
    }

    /// One loading indicator for both edges.
    pub fn uniform(
        render_loading_indicator: impl Fn() -> V + 'static,
        render_loading_error_indicator: impl Fn(RetryHandle) -> V + 'static,
    ) -> Self {
        let loading: Rc<dyn Fn() -> V> = Rc::new(render_loading_indicator);
        Self {
            render_loading_indicator_top: Rc::clone(&loading),
            render_loading_indicator_bottom: loading,
            render_loading_error_indicator: Rc::new(render_loading_error_indicator),
        }
    }

    pub(crate) fn loading(&self, edge: Edge) -> V {
        match edge {
            Edge::Top => (self.render_loading_indicator_top)(),
            Edge::Bottom => (self.render_loading_indicator_bottom)(),
        }
    }
}

impl<V> fmt::Debug for Renderers<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderers").finish_non_exhaustive()
    }
}

/// A rendered status indicator with its stable key.
#[derive(Clone, Debug, PartialEq)]
pub struct Indicator<V> {
    pub key: &'static str,
    pub edge: Edge,
    pub kind: StatusIndicator,
    pub element: V,
}

/// The container's children: `[top indicator, content, bottom indicator]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Children<V> {
    pub top: Option<Indicator<V>>,
    pub content: V,
    pub bottom: Option<Indicator<V>>,
}

impl<V> Children<V> {
    /// Flattens into render order, dropping absent indicators.
    pub fn into_elements(self) -> Vec<V> {
        let mut out = Vec::with_capacity(3);
        out.extend(self.top.map(|i| i.element));
        out.push(self.content);
        out.extend(self.bottom.map(|i| i.element));
        out
    }
}
