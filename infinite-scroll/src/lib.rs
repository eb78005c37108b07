//! A headless bidirectional infinite-scroll engine.
//!
//! For an async driver (loaders, scroll container plumbing, indicators), see the
//! `infinite-scroll-adapter` crate.
//!
//! This crate focuses on the decision logic around an infinitely scrolling list:
//! when a scroll position justifies loading more content at the top or bottom edge, the
//! per-edge loading/error state with an in-flight guard, and the top offset compensation that
//! keeps a reserved indicator region above the content scrolled out of view.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - scroll/layout events (content size, insets, offset, viewport size)
//! - the start and end of each load attempt
//! - a way to apply non-animated scroll requests
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod capability;
mod error;
mod indicator;
mod infinite_scroll;
mod metrics;
mod offset;
mod options;
mod state;
mod trigger;
mod types;


pub use capability::CanLoadMore;
pub use error::Error;
pub use indicator::{StatusIndicator, StatusIndicators};
pub use infinite_scroll::InfiniteScroll;
pub use metrics::ScrollMetrics;
pub use offset::{InitialOffsetStrategy, Mount, TopOffsetCompensator};
pub use options::{InfiniteScrollConfig, InfiniteScrollOptions};
pub use state::{EdgeState, EdgeStates, LoadOutcome};
pub use trigger::{Triggers, should_load, should_load_bottom, should_load_top};
pub use types::{Edge, Insets, Orientation, Platform, Point, ScrollEvent, ScrollTo, Size};
