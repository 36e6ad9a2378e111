use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window, use_window_scroll};

use crate::motion::{ScrollMetrics, ScrollSample};

/// The page-wide scroll sample. One producer, any number of readers; every
/// reader sees the same memoized value for a given event.
#[derive(Debug, Clone, Copy)]
struct ScrollFeed(Memo<ScrollSample>);

pub fn provide_scroll_sampler() {
    let (_, y) = use_window_scroll();
    // layout changes move the scrollable range without a scroll event
    let resized = ArcTrigger::new();
    let _ = use_event_listener(use_window(), ev::resize, {
        let resized = resized.clone();
        move |_| resized.notify()
    });
    let sample = Memo::new(move |_| {
        resized.track();
        measure(y.get()).sample()
    });
    provide_context(ScrollFeed(sample));
}

pub fn use_scroll_sample() -> Memo<ScrollSample> {
    expect_context::<ScrollFeed>().0
}

#[cfg(feature = "hydrate")]
fn measure(offset: f64) -> ScrollMetrics {
    let viewport_height = window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    let scroll_height = document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or_default();
    ScrollMetrics {
        offset,
        scroll_height,
        viewport_height,
    }
}

#[cfg(not(feature = "hydrate"))]
fn measure(offset: f64) -> ScrollMetrics {
    ScrollMetrics {
        offset,
        ..ScrollMetrics::default()
    }
}
