use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use infinite_scroll::{
    Edge, EdgeState, InfiniteScroll, InfiniteScrollOptions, Mount, ScrollEvent, StatusIndicator,
    StatusIndicators,
};
use tokio::task::JoinHandle;

use crate::edge::Shared;
use crate::{Children, EdgeLoadController, Indicator, Loaders, OnScroll, Renderers, ScrollContainer};

/// Load tasks spawned by one scroll event.
///
/// Dropping the handles does not cancel the loads.
#[derive(Debug, Default)]
pub struct Spawned {
    pub top: Option<JoinHandle<()>>,
    pub bottom: Option<JoinHandle<()>>,
}

impl Spawned {
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none()
    }
}

/// A framework-neutral infinite scroll view that owns a scroll container.
///
/// The host drives it by calling:
/// - `mount` once the container exists
/// - `handle_scroll` for every scroll/layout event of the container
/// - `render` whenever it renders the container's children
///
/// Loads run as tasks on the current [`tokio::task::LocalSet`], so every method that may start a
/// load must be called from inside one.
pub struct InfiniteScrollView<C, V> {
    shared: Rc<Shared<C>>,
    top: EdgeLoadController<C>,
    bottom: EdgeLoadController<C>,
    renderers: Renderers<V>,
    on_scroll: Option<OnScroll>,
}

impl<C, V> fmt::Debug for InfiniteScrollView<C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfiniteScrollView")
            .field("engine", &self.shared.engine)
            .field("loaders", &self.shared.loaders)
            .field("on_scroll", &self.on_scroll.is_some())
            .finish_non_exhaustive()
    }
}

impl<C: ScrollContainer + 'static, V> InfiniteScrollView<C, V> {
    pub fn new(
        options: InfiniteScrollOptions,
        container: C,
        loaders: Loaders,
        renderers: Renderers<V>,
    ) -> Self {
        let shared = Rc::new(Shared {
            engine: RefCell::new(InfiniteScroll::new(options)),
            container: RefCell::new(container),
            loaders,
        });
        Self {
            top: EdgeLoadController::new(Edge::Top, Rc::clone(&shared)),
            bottom: EdgeLoadController::new(Edge::Bottom, Rc::clone(&shared)),
            shared,
            renderers,
            on_scroll: None,
        }
    }

    pub fn with_on_scroll(mut self, on_scroll: impl Fn(&ScrollEvent) + 'static) -> Self {
        self.on_scroll = Some(Rc::new(on_scroll) as OnScroll);
        self
    }

    pub fn controller(&self, edge: Edge) -> &EdgeLoadController<C> {
        match edge {
            Edge::Top => &self.top,
            Edge::Bottom => &self.bottom,
        }
    }

    pub fn state(&self, edge: Edge) -> EdgeState {
        self.shared.engine.borrow().state(edge)
    }

    pub fn is_loading(&self, edge: Edge) -> bool {
        self.state(edge).is_loading()
    }

    pub fn is_displaying_error(&self, edge: Edge) -> bool {
        self.state(edge).is_displaying_error()
    }

    pub fn can_show_top_indicator(&self) -> bool {
        self.shared.engine.borrow().can_show_top_indicator()
    }

    pub fn status_indicators(&self) -> StatusIndicators {
        self.shared.engine.borrow().status_indicators()
    }

    /// Replaces thresholds and capabilities (e.g. when the host's props change). Orientation and
    /// platform keep their construction-time values.
    pub fn set_options(&self, options: InfiniteScrollOptions) {
        self.shared.engine.borrow_mut().set_options(options);
    }

    pub fn update_options(&self, f: impl FnOnce(&mut InfiniteScrollOptions)) {
        self.shared.engine.borrow_mut().update_options(f);
    }

    /// Applies the initial top offset compensation.
    ///
    /// On hosts that defer it, returns the handle of the task that applies it once pending
    /// interactions have settled.
    pub fn mount(&self) -> Option<JoinHandle<()>> {
        let mount = self.shared.engine.borrow_mut().mount();
        match mount {
            Mount::Applied(scroll) => {
                if let Some(scroll) = scroll {
                    self.shared.scroll_to(scroll);
                }
                None
            }
            Mount::Deferred => {
                tracing::debug!("deferring top offset until interactions settle");
                let shared = Rc::clone(&self.shared);
                Some(tokio::task::spawn_local(async move {
                    // Let already queued work run, then apply on the following tick.
                    tokio::task::yield_now().await;
                    tokio::task::yield_now().await;
                    shared.apply_top_offset();
                }))
            }
        }
    }

    /// The composed scroll handler.
    ///
    /// Forwards to the host's `on_scroll` first, then starts a load for every edge whose trigger
    /// fires. Returns immediately; the loads run as spawned tasks.
    pub fn handle_scroll(&self, event: &ScrollEvent) -> Spawned {
        if let Some(on_scroll) = &self.on_scroll {
            on_scroll(event);
        }

        let triggers = self.shared.engine.borrow().evaluate(event);
        Spawned {
            bottom: triggers.bottom.then(|| self.bottom.spawn_load()),
            top: triggers.top.then(|| self.top.spawn_load()),
        }
    }

    /// Wraps `content` with the current status indicators.
    pub fn render(&self, content: V) -> Children<V> {
        let indicators = self.status_indicators();
        Children {
            top: self.render_indicator(Edge::Top, indicators.top),
            content,
            bottom: self.render_indicator(Edge::Bottom, indicators.bottom),
        }
    }

    fn render_indicator(
        &self,
        edge: Edge,
        kind: Option<StatusIndicator>,
    ) -> Option<Indicator<V>> {
        let kind = kind?;
        let element = match kind {
            StatusIndicator::Loading => self.renderers.loading(edge),
            StatusIndicator::Error => (self.renderers.render_loading_error_indicator)(
                self.controller(edge).retry_handle(),
            ),
        };
        Some(Indicator {
            key: kind.key(edge),
            edge,
            kind,
            element,
        })
    }

    pub fn scroll_responder(&self) -> C::Responder {
        self.shared.container.borrow().scroll_responder()
    }

    pub fn set_native_props(&self, props: C::NativeProps) {
        self.shared.container.borrow_mut().set_native_props(props);
    }
}
