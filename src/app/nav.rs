use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use super::scroll::use_scroll_sample;
use crate::{content::Profile, motion::NavController};

static SECTIONS: [(&str, &str); 3] = [
    ("About", "about"),
    ("Experience", "experience"),
    ("Skills", "skills"),
];

/// Smooth-scroll to an in-page anchor. Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        log::debug!("no section with id {id}");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn NavBar(profile: &'static Profile) -> impl IntoView {
    let sample = use_scroll_sample();
    let controller = StoredValue::new(NavController::default());
    let style = Memo::new(move |_| {
        let offset = sample.get().offset;
        controller.update_value(|c| {
            if let Some(state) = c.sample(offset) {
                log::debug!("navigation bar {state:?} at offset {offset}");
            }
        });
        controller.with_value(|c| c.style())
    });

    view! {
        <header
            class="fixed inset-x-0 top-0 z-50 border-b border-black/[0.08] bg-white/80 backdrop-blur-xl"
            style=move || style.get()
        >
            <nav class="mx-auto flex h-16 w-full max-w-[1200px] items-center justify-between px-6">
                <span class="text-xl font-medium text-text-primary">{profile.name.clone()}</span>
                <div class="flex items-center gap-2">
                    {SECTIONS
                        .iter()
                        .map(|&(label, id)| {
                            view! {
                                <button
                                    class="btn text-text-secondary hover:bg-primary/[0.08] hover:text-primary"
                                    on:click=move |_| scroll_to_section(id)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                    <a href=profile.mailto() class="btn btn-contained ml-4">
                        "Get in touch"
                    </a>
                </div>
            </nav>
        </header>
    }
}
