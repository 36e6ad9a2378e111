use leptos::{either::Either, html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_supported, use_timeout_fn,
    UseIntersectionObserverOptions, UseIntersectionObserverReturn, UseTimeoutFnReturn,
};

use super::scroll::use_scroll_sample;
use crate::motion::{
    deliver_delay, intersects, AnimationSpec, RevealAction, RevealAnimator, ViewportMargin,
    VisibilityRecord,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealTrigger {
    /// Reveal once, the first time the block scrolls into view.
    #[default]
    InView,
    /// Play on every insertion into the DOM.
    Mount,
}

#[component]
pub fn AnimatedContainer(
    spec: AnimationSpec,
    #[prop(optional)] trigger: RevealTrigger,
    /// Only used by in-view reveals; zero unless given.
    #[prop(optional)] margin: ViewportMargin,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    match trigger {
        RevealTrigger::Mount => Either::Left(view! {
            <div class=class style=spec.keyframe_style()>
                {children()}
            </div>
        }),
        RevealTrigger::InView => Either::Right(view! {
            <InViewReveal spec margin class>
                {children()}
            </InViewReveal>
        }),
    }
}

/// Section wrapper with the standard reveal, optionally delayed.
#[component]
pub fn AnimatedSection(
    #[prop(optional)] delay: f64,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <InViewReveal spec=AnimationSpec::reveal(delay) margin=ViewportMargin::SECTION class>
            {children()}
        </InViewReveal>
    }
}

#[component]
fn InViewReveal(
    spec: AnimationSpec,
    margin: ViewportMargin,
    class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let record = StoredValue::new(VisibilityRecord::sticky());
    let animator = StoredValue::new(RevealAnimator::new(spec.delay));
    let (visible, set_visible) = signal(false);
    let (revealed, set_revealed) = signal(false);

    // Cleared by its owner on unmount, so a pending reveal just goes away.
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            if deliver_delay(animator) == Some(RevealAction::Reveal) {
                set_revealed.set(true);
            }
        },
        spec.delay * 1000.0,
    );

    let observe = move |intersecting: bool| {
        if record
            .try_update_value(|r| r.observe(intersecting))
            .unwrap_or(false)
        {
            set_visible.set(record.with_value(|r| r.is_visible()));
        }
    };

    let is_supported = use_supported(|| {
        js_sys::Reflect::has(&window(), &"IntersectionObserver".into()).unwrap_or(false)
    });
    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        node_ref,
        move |entries, _| observe(entries.iter().any(|e| e.is_intersecting())),
        UseIntersectionObserverOptions::default().root_margin(margin.root_margin()),
    );

    // Browsers without IntersectionObserver fall back to measuring on scroll.
    let sample = use_scroll_sample();
    Effect::new(move |_| {
        sample.track();
        if is_supported.get_untracked() || record.with_value(|r| r.is_settled()) {
            return;
        }
        let Some(el) = node_ref.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let viewport_height = window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        observe(intersects(
            rect.top(),
            rect.bottom(),
            viewport_height,
            margin,
        ));
    });

    Effect::new(move |_| {
        if !visible.get() {
            return;
        }
        stop();
        match animator.try_update_value(|a| a.on_visible()) {
            Some(RevealAction::Reveal) => set_revealed.set(true),
            Some(RevealAction::Schedule(_)) => start(()),
            _ => {}
        }
    });

    view! {
        <div node_ref=node_ref class=class style=move || spec.transition_style(revealed.get())>
            {children()}
        </div>
    }
}
