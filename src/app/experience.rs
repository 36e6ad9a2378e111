use leptos::{either::Either, prelude::*};

use super::animated::{AnimatedContainer, AnimatedSection, RevealTrigger};
use crate::{
    content::ExperienceEntry,
    motion::{AnimationSpec, Timeline},
};

#[component]
pub fn Experience(experiences: &'static [ExperienceEntry]) -> impl IntoView {
    let Some(timeline) = Timeline::new(experiences) else {
        log::warn!("experience timeline is empty");
        return Either::Right(());
    };
    let entries = timeline.rows().map(|(i, entry, _)| (i, entry)).collect::<Vec<_>>();
    let (timeline, set_timeline) = signal(timeline);

    let rows = entries
        .into_iter()
        .map(|(i, entry)| {
            let emphasis = move || timeline.with(|t| t.emphasis(i));
            view! {
                <button
                    class="card timeline-row w-full p-4 text-left"
                    style=move || emphasis().row_style(&entry.color)
                    on:click=move |_| {
                        set_timeline
                            .update(|t| {
                                t.select(i);
                            })
                    }
                >
                    <h4
                        class="type-h4"
                        style:color=move || emphasis().company_color(&entry.color).to_string()
                    >
                        {entry.company.clone()}
                    </h4>
                    <p class="type-body2 text-text-secondary">
                        {format!("{} • {}", entry.role, entry.period)}
                    </p>
                </button>
            }
        })
        .collect_view();

    Either::Left(view! {
        <section id="experience" class="bg-paper py-24">
            <div class="mx-auto max-w-6xl px-6">
                <AnimatedSection class="mb-16 text-center">
                    <p class="section-label mb-4">"EXPERIENCE"</p>
                    <h2 class="type-h2">"Where I've worked"</h2>
                </AnimatedSection>
                <div class="grid grid-cols-1 gap-8 md:grid-cols-12">
                    <div class="md:col-span-4">
                        <AnimatedSection delay=0.2>
                            <div class="flex flex-col gap-2">{rows}</div>
                        </AnimatedSection>
                    </div>
                    <div class="md:col-span-8">
                        <AnimatedSection delay=0.4>
                            {move || {
                                let (entry, generation) = timeline
                                    .with(|t| (t.active_entry(), t.generation()));
                                view! { <DetailPanel entry generation /> }
                            }}
                        </AnimatedSection>
                    </div>
                </div>
            </div>
        </section>
    })
}

/// Rebuilt from scratch on every selection so the entrance replays.
#[component]
fn DetailPanel(entry: &'static ExperienceEntry, generation: u64) -> impl IntoView {
    view! {
        <AnimatedContainer spec=AnimationSpec::detail_panel() trigger=RevealTrigger::Mount>
            <article class="card min-h-[400px] p-8" data-generation=generation.to_string()>
                <div class="mb-6">
                    <h3 class="type-h3 mb-2" style:color=entry.color.clone()>
                        {entry.company.clone()}
                    </h3>
                    <h4 class="type-h4 mb-2 text-text-primary">{entry.role.clone()}</h4>
                    <p class="type-body2 text-text-secondary">{entry.period.clone()}</p>
                </div>
                <p class="type-body mb-6 italic text-text-secondary">
                    {entry.description.clone()}
                </p>
                <ul class="mb-6 flex flex-col gap-4">
                    {entry
                        .highlights
                        .iter()
                        .enumerate()
                        .map(|(i, highlight)| {
                            view! {
                                <li>
                                    <AnimatedContainer
                                        spec=AnimationSpec::highlight(i)
                                        trigger=RevealTrigger::Mount
                                        class="flex gap-4"
                                    >
                                        <span
                                            class="mt-2 h-2 w-2 shrink-0 rounded-full"
                                            style:background-color=entry.color.clone()
                                        ></span>
                                        <span class="type-body text-text-primary">
                                            {highlight.clone()}
                                        </span>
                                    </AnimatedContainer>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="flex flex-wrap gap-2">
                    {entry
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <span
                                    class="chip"
                                    style:background-color=entry.tint()
                                    style:color=entry.color.clone()
                                >
                                    {skill.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </article>
        </AnimatedContainer>
    }
}
