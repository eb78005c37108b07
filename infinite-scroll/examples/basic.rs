// Example: drive the engine by hand, without any async runtime.
use infinite_scroll::{
    Edge, InfiniteScroll, InfiniteScrollOptions, LoadOutcome, Mount, ScrollEvent,
};

fn main() {
    let mut engine = InfiniteScroll::new(
        InfiniteScrollOptions::new()
            .with_distance_to_load_more(50.0, 150.0)
            .with_top_loading_indicator_height(100.0)
            .with_can_load_more_top(true)
            .with_can_load_more_bottom(true),
    );

    if let Mount::Applied(Some(scroll)) = engine.mount() {
        println!("mount: scroll container to {scroll:?}");
    }

    for offset in [100.0, 200.0, 360.0, 400.0] {
        let triggers = engine.evaluate(&ScrollEvent::vertical(1000.0, offset, 500.0));
        println!("offset={offset} triggers={triggers:?}");
        for edge in triggers.edges() {
            engine.begin_load(edge).expect("trigger only fires for idle edges");
        }
    }

    engine.finish_load(Edge::Bottom, LoadOutcome::Failed);
    println!(
        "after failure: state={:?} indicators={:?}",
        engine.state(Edge::Bottom),
        engine.status_indicators()
    );

    // Retry is explicit.
    engine.begin_load(Edge::Bottom).expect("bottom is idle");
    engine.finish_load(Edge::Bottom, LoadOutcome::Loaded);
    println!("after retry: state={:?}", engine.state(Edge::Bottom));
}
