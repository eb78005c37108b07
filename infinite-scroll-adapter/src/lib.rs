//! Async adapter for the `infinite-scroll` crate.
//!
//! The `infinite-scroll` crate is synchronous and UI-agnostic. This crate drives it for a real
//! scroll container:
//!
//! - Runs the host's async loaders as local tasks, one in flight per edge
//! - Reports load failures and turns them into per-edge error state
//! - Issues the non-animated scrolls that keep the top indicator region hidden
//! - Wraps the host's content with loading/error indicators
//!
//! Everything here is single-threaded: tasks are spawned with [`tokio::task::spawn_local`].
#![forbid(unsafe_code)]

mod container;
mod edge;
mod loader;
mod render;
mod view;

#[cfg(test)]
mod tests;

pub use container::ScrollContainer;
pub use edge::{EdgeLoadController, RetryHandle};
pub use loader::{LoadFuture, Loader, Loaders, OnLoadError, OnScroll, loader};
pub use render::{Children, Indicator, Renderers};
pub use view::{InfiniteScrollView, Spawned};

pub use infinite_scroll;
