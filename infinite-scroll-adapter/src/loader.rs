use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use infinite_scroll::{Edge, ScrollEvent};

/// The future returned by a [`Loader`]. Resolves to `Err` when loading failed.
pub type LoadFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>>>>;

/// An asynchronous content loader for one edge. Takes no arguments; the host knows what to load.
pub type Loader = Rc<dyn Fn() -> LoadFuture>;

/// Called once per failed attempt with the loader's error and the edge it came from.
pub type OnLoadError = Rc<dyn Fn(&anyhow::Error, Edge)>;

/// A host scroll handler, called before the view's own handling.
pub type OnScroll = Rc<dyn Fn(&ScrollEvent)>;

/// Wraps an async closure into a [`Loader`].
pub fn loader<F, Fut>(f: F) -> Loader
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = anyhow::Result<()>> + 'static,
{
    Rc::new(move || Box::pin(f()) as LoadFuture)
}

/// The loaders for both edges plus the optional error reporter.
#[derive(Clone)]
pub struct Loaders {
    pub on_load_more_top: Loader,
    pub on_load_more_bottom: Loader,
    pub on_load_error: Option<OnLoadError>,
}

impl Loaders {
    pub fn new(on_load_more_top: Loader, on_load_more_bottom: Loader) -> Self {
        Self {
            on_load_more_top,
            on_load_more_bottom,
            on_load_error: None,
        }
    }

    pub fn with_on_load_error(mut self, f: impl Fn(&anyhow::Error, Edge) + 'static) -> Self {
        self.on_load_error = Some(Rc::new(f) as OnLoadError);
        self
    }

    pub fn get(&self, edge: Edge) -> &Loader {
        match edge {
            Edge::Top => &self.on_load_more_top,
            Edge::Bottom => &self.on_load_more_bottom,
        }
    }
}

impl std::fmt::Debug for Loaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loaders")
            .field("on_load_error", &self.on_load_error.is_some())
            .finish_non_exhaustive()
    }
}
