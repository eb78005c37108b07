use crate::*;

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use infinite_scroll::{
    Edge, Error, InfiniteScrollOptions, Orientation, Platform, ScrollEvent, ScrollTo,
    StatusIndicator,
};
use tokio::sync::oneshot;
use tokio::task::LocalSet;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Clone, Debug, PartialEq)]
enum Call {
    ScrollTo(ScrollTo),
    SetNativeProps(&'static str),
}

#[derive(Clone, Default)]
struct RecordingContainer {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl RecordingContainer {
    fn scrolls(&self) -> Vec<ScrollTo> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::ScrollTo(s) => Some(*s),
                Call::SetNativeProps(_) => None,
            })
            .collect()
    }
}

impl ScrollContainer for RecordingContainer {
    type Responder = &'static str;
    type NativeProps = &'static str;

    fn scroll_to(&mut self, scroll: ScrollTo) {
        self.calls.borrow_mut().push(Call::ScrollTo(scroll));
    }

    fn scroll_responder(&self) -> Self::Responder {
        "responder"
    }

    fn set_native_props(&mut self, props: Self::NativeProps) {
        self.calls.borrow_mut().push(Call::SetNativeProps(props));
    }
}

/// A loader whose attempts stay in flight until the test resolves them.
#[derive(Clone, Default)]
struct Gate {
    calls: Rc<Cell<usize>>,
    pending: Rc<RefCell<VecDeque<oneshot::Sender<anyhow::Result<()>>>>>,
}

impl Gate {
    fn loader(&self) -> Loader {
        let gate = self.clone();
        loader(move || {
            let gate = gate.clone();
            async move {
                gate.calls.set(gate.calls.get() + 1);
                let (tx, rx) = oneshot::channel();
                gate.pending.borrow_mut().push_back(tx);
                rx.await.unwrap_or_else(|_| Err(anyhow::anyhow!("gate dropped")))
            }
        })
    }

    fn calls(&self) -> usize {
        self.calls.get()
    }

    async fn wait_for_calls(&self, n: usize) {
        while self.calls() < n {
            tokio::task::yield_now().await;
        }
    }

    /// Resolves the oldest attempt still in flight. Abandoned attempts are skipped.
    fn resolve(&self, result: anyhow::Result<()>) {
        let mut pending = self.pending.borrow_mut();
        let tx = loop {
            let tx = pending.pop_front().expect("no load in flight");
            if !tx.is_closed() {
                break tx;
            }
        };
        let _ = tx.send(result);
    }
}

#[derive(Debug)]
enum Element {
    Content,
    Loading(Edge),
    Error(RetryHandle),
}

fn renderers() -> Renderers<Element> {
    Renderers::new(
        || Element::Loading(Edge::Top),
        || Element::Loading(Edge::Bottom),
        Element::Error,
    )
}

struct Harness {
    view: InfiniteScrollView<RecordingContainer, Element>,
    container: RecordingContainer,
    top: Gate,
    bottom: Gate,
    errors: Rc<RefCell<Vec<(String, Edge)>>>,
}

fn harness(options: InfiniteScrollOptions) -> Harness {
    init_tracing();
    let container = RecordingContainer::default();
    let top = Gate::default();
    let bottom = Gate::default();
    let errors = Rc::new(RefCell::new(Vec::new()));
    let loaders = Loaders::new(top.loader(), bottom.loader()).with_on_load_error({
        let errors = Rc::clone(&errors);
        move |err, edge| errors.borrow_mut().push((err.to_string(), edge))
    });
    let view = InfiniteScrollView::new(options, container.clone(), loaders, renderers());
    Harness {
        view,
        container,
        top,
        bottom,
        errors,
    }
}

fn options(top: bool, bottom: bool) -> InfiniteScrollOptions {
    InfiniteScrollOptions::new()
        .with_distance_to_load_more(50.0, 150.0)
        .with_top_loading_indicator_height(100.0)
        .with_can_load_more_top(top)
        .with_can_load_more_bottom(bottom)
}

fn near_bottom() -> ScrollEvent {
    ScrollEvent::vertical(1000.0, 360.0, 500.0)
}

fn near_top() -> ScrollEvent {
    ScrollEvent::vertical(1000.0, 30.0, 500.0)
}

const RESERVED: ScrollTo = ScrollTo {
    x: 0.0,
    y: 100.0,
    animated: false,
};

#[tokio::test]
async fn bottom_load_succeeds() {
    LocalSet::new()
        .run_until(async {
            let h = harness(options(false, true));

            let spawned = h.view.handle_scroll(&near_bottom());
            assert!(spawned.top.is_none());
            assert!(h.view.is_loading(Edge::Bottom));

            h.bottom.wait_for_calls(1).await;
            // Overlapping events while the load is in flight do not retrigger.
            assert!(h.view.handle_scroll(&near_bottom()).is_empty());

            h.bottom.resolve(Ok(()));
            spawned.bottom.expect("bottom load").await.unwrap();

            assert!(!h.view.is_loading(Edge::Bottom));
            assert!(!h.view.is_displaying_error(Edge::Bottom));
            assert_eq!(h.bottom.calls(), 1);
            assert!(h.errors.borrow().is_empty());
            assert!(h.container.scrolls().is_empty());
        })
        .await;
}

#[tokio::test]
async fn failed_load_reports_once_and_shows_error() {
    LocalSet::new()
        .run_until(async {
            let h = harness(options(false, true));

            let spawned = h.view.handle_scroll(&near_bottom());
            h.bottom.wait_for_calls(1).await;
            h.bottom.resolve(Err(anyhow::anyhow!("boom")));
            spawned.bottom.expect("bottom load").await.unwrap();

            assert!(!h.view.is_loading(Edge::Bottom));
            assert!(h.view.is_displaying_error(Edge::Bottom));
            assert_eq!(*h.errors.borrow(), vec![("boom".to_owned(), Edge::Bottom)]);

            // No silent retry on further scrolling.
            assert!(h.view.handle_scroll(&near_bottom()).is_empty());
            assert_eq!(h.bottom.calls(), 1);
        })
        .await;
}

#[tokio::test]
async fn load_now_while_loading_is_rejected() {
    LocalSet::new()
        .run_until(async {
            let h = harness(options(false, true));
            let controller = h.view.controller(Edge::Bottom);

            let first = tokio::task::spawn_local(controller.load_now());
            assert!(h.view.is_loading(Edge::Bottom));

            let second = controller.load_now().await;
            assert_eq!(second, Err(Error::AlreadyLoading(Edge::Bottom)));
            assert!(h.view.is_loading(Edge::Bottom));

            h.bottom.wait_for_calls(1).await;
            h.bottom.resolve(Ok(()));
            assert_eq!(first.await.unwrap(), Ok(()));
            assert_eq!(h.bottom.calls(), 1);
        })
        .await;
}

#[tokio::test]
async fn dropped_load_future_ends_the_attempt() {
    LocalSet::new()
        .run_until(async {
            let h = harness(options(true, true));

            drop(h.view.controller(Edge::Bottom).load_now());
            assert!(!h.view.is_loading(Edge::Bottom));
            assert!(h.view.is_displaying_error(Edge::Bottom));
            assert_eq!(h.bottom.calls(), 0);
            assert!(h.errors.borrow().is_empty());
            assert!(h.container.scrolls().is_empty());

            // The top edge gets its offset back as on any other failure.
            let top = h.view.controller(Edge::Top).load_now();
            assert!(h.view.is_loading(Edge::Top));
            drop(top);
            assert!(!h.view.is_loading(Edge::Top));
            assert_eq!(h.container.scrolls(), vec![RESERVED]);

            // The edge can load again.
            let again = h.view.controller(Edge::Bottom).retry_handle().retry();
            h.bottom.wait_for_calls(1).await;
            h.bottom.resolve(Ok(()));
            again.await.unwrap();
            assert!(!h.view.is_loading(Edge::Bottom));
            assert!(!h.view.is_displaying_error(Edge::Bottom));
        })
        .await;
}

#[tokio::test]
async fn aborted_load_ends_the_attempt() {
    LocalSet::new()
        .run_until(async {
            let h = harness(options(false, true));

            let spawned = h.view.handle_scroll(&near_bottom());
            h.bottom.wait_for_calls(1).await;
            let task = spawned.bottom.expect("bottom load");
            task.abort();
            assert!(task.await.unwrap_err().is_cancelled());

            assert!(!h.view.is_loading(Edge::Bottom));
            assert!(h.view.is_displaying_error(Edge::Bottom));
            assert!(h.view.handle_scroll(&near_bottom()).is_empty());

            let retried = h.view.controller(Edge::Bottom).retry_handle().retry();
            h.bottom.wait_for_calls(2).await;
            h.bottom.resolve(Ok(()));
            retried.await.unwrap();
            assert!(!h.view.is_loading(Edge::Bottom));
            assert!(!h.view.is_displaying_error(Edge::Bottom));
        })
        .await;
}

#[tokio::test]
async fn panicking_loader_ends_the_attempt() {
    LocalSet::new()
        .run_until(async {
            init_tracing();
            let container = RecordingContainer::default();
            let bottom = Gate::default();
            fn broken() -> anyhow::Result<()> {
                panic!("loader bug")
            }
            let loaders = Loaders::new(loader(|| async { broken() }), bottom.loader());
            let view = InfiniteScrollView::new(
                options(true, false),
                container.clone(),
                loaders,
                renderers(),
            );

            let task = view.controller(Edge::Top).spawn_load();
            assert!(task.await.unwrap_err().is_panic());
            assert!(!view.is_loading(Edge::Top));
            assert!(view.is_displaying_error(Edge::Top));
            assert_eq!(container.scrolls(), vec![RESERVED]);
        })
        .await;
}

#[tokio::test]
async fn misuse_on_the_spawn_path_is_logged_not_raised() {
    LocalSet::new()
        .run_until(async {
            let h = harness(options(false, true));
            let spawned = h.view.handle_scroll(&near_bottom());

            let duplicate = h.view.controller(Edge::Bottom).spawn_load();
            duplicate.await.unwrap();
            assert!(h.view.is_loading(Edge::Bottom));

            h.bottom.wait_for_calls(1).await;
            h.bottom.resolve(Ok(()));
            spawned.bottom.expect("bottom load").await.unwrap();
            assert_eq!(h.bottom.calls(), 1);
        })
        .await;
}

#[tokio::test]
async fn top_completion_reapplies_offset_exactly_once() {
    LocalSet::new()
        .run_until(async {
            let h = harness(options(true, false));

            let spawned = h.view.handle_scroll(&near_top());
            h.top.wait_for_calls(1).await;
            assert!(h.container.scrolls().is_empty());
            h.top.resolve(Ok(()));
            spawned.top.expect("top load").await.unwrap();
            assert_eq!(h.container.scrolls(), vec![RESERVED]);

            // Failure reapplies too.
            let spawned = h.view.handle_scroll(&near_top());
            h.top.wait_for_calls(2).await;
            h.top.resolve(Err(anyhow::anyhow!("offline")));
            spawned.top.expect("top load").await.unwrap();
            assert_eq!(h.container.scrolls(), vec![RESERVED, RESERVED]);
            assert_eq!(*h.errors.borrow(), vec![("offline".to_owned(), Edge::Top)]);
        })
        .await;
}

#[tokio::test]
async fn top_exhausted_mid_flight_completes_without_offset() {
    LocalSet::new()
        .run_until(async {
            let h = harness(options(true, false));

            let spawned = h.view.handle_scroll(&near_top());
            h.top.wait_for_calls(1).await;
            h.view.update_options(|o| o.can_load_more_top = false.into());
            h.top.resolve(Ok(()));
            spawned.top.expect("top load").await.unwrap();

            assert!(!h.view.is_loading(Edge::Top));
            assert!(h.container.scrolls().is_empty());
            assert!(h.view.handle_scroll(&near_top()).is_empty());
        })
        .await;
}

#[tokio::test]
async fn both_edges_load_independently() {
    LocalSet::new()
        .run_until(async {
            let h = harness(options(true, true));

            // Short content reaches both thresholds at once.
            let spawned = h.view.handle_scroll(&ScrollEvent::vertical(300.0, 10.0, 250.0));
            h.top.wait_for_calls(1).await;
            h.bottom.wait_for_calls(1).await;

            h.bottom.resolve(Err(anyhow::anyhow!("bottom failed")));
            spawned.bottom.expect("bottom load").await.unwrap();
            assert!(h.view.is_displaying_error(Edge::Bottom));
            assert!(h.view.is_loading(Edge::Top));
            assert!(!h.view.is_displaying_error(Edge::Top));

            h.top.resolve(Ok(()));
            spawned.top.expect("top load").await.unwrap();
            assert!(!h.view.is_loading(Edge::Top));
            assert!(h.view.is_displaying_error(Edge::Bottom));
        })
        .await;
}

#[tokio::test]
async fn immediate_mount_scrolls_past_reserved_region() {
    LocalSet::new()
        .run_until(async {
            let h = harness(options(true, true).with_platform(Platform::Ios));
            assert!(h.view.mount().is_none());
            assert_eq!(h.container.scrolls(), vec![RESERVED]);
            assert!(h.view.can_show_top_indicator());

            let h = harness(options(false, true));
            assert!(h.view.mount().is_none());
            assert!(h.container.scrolls().is_empty());
        })
        .await;
}

#[tokio::test]
async fn deferred_mount_hides_top_indicator_until_settled() {
    LocalSet::new()
        .run_until(async {
            let h = harness(options(true, true).with_platform(Platform::Android));

            let pending = h.view.mount().expect("deferred mount");
            assert!(!h.view.can_show_top_indicator());
            assert!(h.container.scrolls().is_empty());
            let children = h.view.render(Element::Content);
            assert!(children.top.is_none());
            assert!(children.bottom.is_some());

            pending.await.unwrap();
            assert!(h.view.can_show_top_indicator());
            assert_eq!(h.container.scrolls(), vec![RESERVED]);
            let children = h.view.render(Element::Content);
            assert_eq!(children.top.map(|i| i.key), Some("loading-indicator-top"));
        })
        .await;
}

#[tokio::test]
async fn horizontal_mount_scrolls_on_x() {
    LocalSet::new()
        .run_until(async {
            let h = harness(options(true, false).with_orientation(Orientation::Horizontal));
            h.view.mount();
            assert_eq!(
                h.container.scrolls(),
                vec![ScrollTo {
                    x: 100.0,
                    y: 0.0,
                    animated: false
                }]
            );
        })
        .await;
}

#[tokio::test]
async fn error_indicator_retries_its_edge() {
    LocalSet::new()
        .run_until(async {
            let h = harness(options(false, true));

            let spawned = h.view.handle_scroll(&near_bottom());
            h.bottom.wait_for_calls(1).await;
            h.bottom.resolve(Err(anyhow::anyhow!("boom")));
            spawned.bottom.expect("bottom load").await.unwrap();

            let children = h.view.render(Element::Content);
            assert!(children.top.is_none());
            let bottom = children.bottom.expect("error indicator");
            assert_eq!(bottom.key, "loading-error-indicator-bottom");
            assert_eq!(bottom.kind, StatusIndicator::Error);
            let Element::Error(retry) = bottom.element else {
                panic!("expected an error element");
            };
            assert_eq!(retry.edge(), Edge::Bottom);

            let retried = retry.retry();
            assert!(h.view.is_loading(Edge::Bottom));
            assert!(!h.view.is_displaying_error(Edge::Bottom));
            h.bottom.wait_for_calls(2).await;
            h.bottom.resolve(Ok(()));
            retried.await.unwrap();

            assert!(!h.view.is_displaying_error(Edge::Bottom));
            assert_eq!(h.errors.borrow().len(), 1);
            let children = h.view.render(Element::Content);
            assert_eq!(
                children.bottom.map(|i| i.kind),
                Some(StatusIndicator::Loading)
            );
        })
        .await;
}

#[tokio::test]
async fn render_orders_children_around_content() {
    LocalSet::new()
        .run_until(async {
            let h = harness(options(true, true));
            let elements = h.view.render(Element::Content).into_elements();
            assert!(matches!(
                elements.as_slice(),
                [
                    Element::Loading(Edge::Top),
                    Element::Content,
                    Element::Loading(Edge::Bottom)
                ]
            ));

            let h = harness(options(false, false));
            let elements = h.view.render(Element::Content).into_elements();
            assert!(matches!(elements.as_slice(), [Element::Content]));
        })
        .await;
}

#[tokio::test]
async fn host_scroll_handler_runs_first() {
    LocalSet::new()
        .run_until(async {
            let seen = Rc::new(RefCell::new(Vec::new()));
            let h = harness(options(false, true));
            let view = h.view.with_on_scroll({
                let seen = Rc::clone(&seen);
                move |event| seen.borrow_mut().push(event.content_offset.y)
            });

            assert!(view.handle_scroll(&ScrollEvent::vertical(1000.0, 0.0, 500.0)).is_empty());
            let spawned = view.handle_scroll(&near_bottom());
            assert_eq!(*seen.borrow(), vec![0.0, 360.0]);

            h.bottom.wait_for_calls(1).await;
            h.bottom.resolve(Ok(()));
            spawned.bottom.expect("bottom load").await.unwrap();
        })
        .await;
}

#[tokio::test]
async fn predicate_capability_is_checked_per_event() {
    LocalSet::new()
        .run_until(async {
            let remaining = Arc::new(AtomicUsize::new(1));
            let h = harness(options(false, false).with_can_load_more_bottom_fn({
                let remaining = Arc::clone(&remaining);
                move || remaining.load(Ordering::Relaxed) > 0
            }));

            let spawned = h.view.handle_scroll(&near_bottom());
            h.bottom.wait_for_calls(1).await;
            remaining.store(0, Ordering::Relaxed);
            h.bottom.resolve(Ok(()));
            spawned.bottom.expect("bottom load").await.unwrap();

            assert!(h.view.handle_scroll(&near_bottom()).is_empty());
            assert!(h.view.render(Element::Content).bottom.is_none());
        })
        .await;
}

#[test]
fn pass_throughs_reach_the_container() {
    let h = harness(options(false, false));
    assert_eq!(h.view.scroll_responder(), "responder");
    h.view.set_native_props("opacity: 0.5");
    assert_eq!(
        *h.container.calls.borrow(),
        vec![Call::SetNativeProps("opacity: 0.5")]
    );
}
