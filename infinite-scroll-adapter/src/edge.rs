use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use infinite_scroll::{Edge, InfiniteScroll, LoadOutcome, ScrollTo};
use tokio::task::JoinHandle;

use crate::{Loaders, ScrollContainer};

/// State shared between a view and the load tasks it spawns.
///
/// Single-threaded: no borrow is ever held across an await point.
pub(crate) struct Shared<C> {
    pub(crate) engine: RefCell<InfiniteScroll>,
    pub(crate) container: RefCell<C>,
    pub(crate) loaders: Loaders,
}

impl<C: ScrollContainer> Shared<C> {
    pub(crate) fn scroll_to(&self, scroll: ScrollTo) {
        tracing::trace!(x = scroll.x, y = scroll.y, "scroll container to offset");
        self.container.borrow_mut().scroll_to(scroll);
    }

    pub(crate) fn apply_top_offset(&self) {
        let scroll = self.engine.borrow_mut().apply_top_offset();
        if let Some(scroll) = scroll {
            self.scroll_to(scroll);
        }
    }
}

/// Runs load attempts for one edge.
///
/// Cheap to clone; all clones drive the same edge state.
pub struct EdgeLoadController<C> {
    edge: Edge,
    shared: Rc<Shared<C>>,
}

impl<C> Clone for EdgeLoadController<C> {
    fn clone(&self) -> Self {
        Self {
            edge: self.edge,
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<C> fmt::Debug for EdgeLoadController<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeLoadController")
            .field("edge", &self.edge)
            .finish_non_exhaustive()
    }
}

impl<C: ScrollContainer + 'static> EdgeLoadController<C> {
    pub(crate) fn new(edge: Edge, shared: Rc<Shared<C>>) -> Self {
        Self { edge, shared }
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Starts a load attempt.
    ///
    /// The edge is marked as loading (and its error cleared) before this returns, so the UI can
    /// reflect it right away. The returned future runs the loader and records the outcome; a
    /// loader failure is reported to `on_load_error` and becomes error state, it is never
    /// returned. The only error is [`infinite_scroll::Error::AlreadyLoading`], when an attempt
    /// for this edge is still in flight.
    ///
    /// If the future is dropped before it completes, or the loader panics, the attempt is
    /// recorded as failed so the edge can load again.
    pub fn load_now(&self) -> impl Future<Output = Result<(), infinite_scroll::Error>> + use<C> {
        let attempt = self
            .shared
            .engine
            .borrow_mut()
            .begin_load(self.edge)
            .map(|()| Attempt {
                controller: self.clone(),
                finished: false,
            });
        async move {
            let attempt = attempt?;
            let outcome = attempt.controller.run().await;
            attempt.finish(outcome);
            Ok(())
        }
    }

    /// Fire-and-forget variant of [`EdgeLoadController::load_now`].
    ///
    /// Unexpected failures are logged, never returned. The handle may be dropped.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a [`tokio::task::LocalSet`].
    pub fn spawn_load(&self) -> JoinHandle<()> {
        let edge = self.edge;
        let load = self.load_now();
        tokio::task::spawn_local(async move {
            if let Err(err) = load.await {
                tracing::error!(
                    edge = edge.as_str(),
                    error = %err,
                    "unexpected error while loading more content"
                );
            }
        })
    }

    pub fn retry_handle(&self) -> RetryHandle {
        let controller = self.clone();
        RetryHandle {
            edge: self.edge,
            retry: Rc::new(move || controller.spawn_load()),
        }
    }

    async fn run(&self) -> LoadOutcome {
        let loader = Rc::clone(self.shared.loaders.get(self.edge));
        tracing::debug!(edge = self.edge.as_str(), "loading more content");

        match loader().await {
            Ok(()) => LoadOutcome::Loaded,
            Err(err) => {
                tracing::debug!(edge = self.edge.as_str(), error = %err, "load failed");
                if let Some(on_load_error) = &self.shared.loaders.on_load_error {
                    on_load_error(&err, self.edge);
                }
                LoadOutcome::Failed
            }
        }
    }
}

/// A begun load attempt. Ends the attempt as failed if dropped before [`Attempt::finish`].
struct Attempt<C: ScrollContainer + 'static> {
    controller: EdgeLoadController<C>,
    finished: bool,
}

impl<C: ScrollContainer + 'static> Attempt<C> {
    fn finish(mut self, outcome: LoadOutcome) {
        self.finished = true;
        let shared = &self.controller.shared;
        let scroll = shared.engine.borrow_mut().finish_load(self.controller.edge, outcome);
        if let Some(scroll) = scroll {
            shared.scroll_to(scroll);
        }
    }
}

impl<C: ScrollContainer + 'static> Drop for Attempt<C> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        let edge = self.controller.edge;
        let shared = &self.controller.shared;
        tracing::warn!(edge = edge.as_str(), "load abandoned before completion");

        // May run while unwinding from a panic that left a borrow held.
        let Ok(mut engine) = shared.engine.try_borrow_mut() else {
            tracing::error!(edge = edge.as_str(), "engine busy, edge left loading");
            return;
        };
        let scroll = engine.finish_load(edge, LoadOutcome::Failed);
        drop(engine);

        if let Some(scroll) = scroll {
            match shared.container.try_borrow_mut() {
                Ok(mut container) => container.scroll_to(scroll),
                Err(_) => {
                    tracing::error!(edge = edge.as_str(), "container busy, offset not applied")
                }
            }
        }
    }
}

/// Handed to the error indicator renderer; re-runs the failed edge's load on demand.
#[derive(Clone)]
pub struct RetryHandle {
    edge: Edge,
    retry: Rc<dyn Fn() -> JoinHandle<()>>,
}

impl RetryHandle {
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Spawns a new attempt for the edge. See [`EdgeLoadController::spawn_load`].
    pub fn retry(&self) -> JoinHandle<()> {
        (self.retry)()
    }
}

impl fmt::Debug for RetryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryHandle")
            .field("edge", &self.edge)
            .finish_non_exhaustive()
    }
}
