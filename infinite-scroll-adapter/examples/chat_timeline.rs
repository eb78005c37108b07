// Example: a chat timeline that loads older messages at the top and newer ones at the bottom.
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use infinite_scroll::{Edge, InfiniteScrollOptions, ScrollEvent, ScrollTo};
use infinite_scroll_adapter::{InfiniteScrollView, Loaders, Renderers, ScrollContainer, loader};

const ROW: f64 = 40.0;
const VIEWPORT: f64 = 400.0;

#[derive(Default)]
struct Timeline {
    rows: RefCell<Vec<String>>,
    oldest: Cell<i64>,
    newest: Cell<i64>,
}

struct PrintingContainer;

impl ScrollContainer for PrintingContainer {
    type Responder = ();
    type NativeProps = ();

    fn scroll_to(&mut self, scroll: ScrollTo) {
        println!("  container: scroll_to {scroll:?}");
    }

    fn scroll_responder(&self) {}

    fn set_native_props(&mut self, _props: ()) {}
}

fn main() -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let local = tokio::task::LocalSet::new();
    local.block_on(&runtime, run())
}

async fn run() -> anyhow::Result<()> {
    let timeline = Rc::new(Timeline::default());
    timeline
        .rows
        .borrow_mut()
        .extend((0..20).map(|i| format!("message {i}")));
    timeline.newest.set(19);

    let older = loader({
        let timeline = Rc::clone(&timeline);
        move || {
            let timeline = Rc::clone(&timeline);
            async move {
                tokio::time::sleep(Duration::from_millis(20)).await;
                let oldest = timeline.oldest.get();
                let batch = (oldest - 10..oldest).map(|i| format!("message {i}"));
                timeline.rows.borrow_mut().splice(0..0, batch);
                timeline.oldest.set(oldest - 10);
                Ok(())
            }
        }
    });
    let newer = loader(|| async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        Err(anyhow::anyhow!("server unavailable"))
    });

    let loaders = Loaders::new(older, newer)
        .with_on_load_error(|err, edge| println!("  load error at {edge}: {err}"));
    let renderers = Renderers::uniform(
        || "[spinner]".to_owned(),
        |retry| format!("[failed to load {} - tap to retry]", retry.edge()),
    );
    let options = InfiniteScrollOptions::new()
        .with_can_load_more_top_fn(|| true)
        .with_can_load_more_bottom(true);
    let view = InfiniteScrollView::new(options, PrintingContainer, loaders, renderers);

    println!("mount");
    view.mount();

    let content_length = || timeline.rows.borrow().len() as f64 * ROW;

    println!("scroll near the top");
    let spawned = view.handle_scroll(&ScrollEvent::vertical(content_length(), 20.0, VIEWPORT));
    if let Some(top) = spawned.top {
        top.await?;
    }
    println!("  rows now {}", timeline.rows.borrow().len());

    println!("scroll to the bottom");
    let end = content_length() - VIEWPORT;
    let spawned = view.handle_scroll(&ScrollEvent::vertical(content_length(), end, VIEWPORT));
    if let Some(bottom) = spawned.bottom {
        bottom.await?;
    }

    let children = view.render(format!("{} rows", timeline.rows.borrow().len()));
    for (edge, indicator) in [(Edge::Top, &children.top), (Edge::Bottom, &children.bottom)] {
        if let Some(indicator) = indicator {
            println!("  {edge}: {} = {}", indicator.key, indicator.element);
        }
    }
    Ok(())
}
