use leptos::prelude::*;

use super::animated::AnimatedSection;
use crate::content::{Profile, Stat};

#[component]
pub fn About(profile: &'static Profile, stats: &'static [Stat]) -> impl IntoView {
    view! {
        <section id="about" class="bg-white py-24">
            <div class="mx-auto max-w-6xl px-6">
                <AnimatedSection>
                    <div class="grid grid-cols-1 items-center gap-12 md:grid-cols-2">
                        <div>
                            <p class="section-label mb-4">"ABOUT ME"</p>
                            <h2 class="type-h2 mb-6">{profile.about_title.clone()}</h2>
                            {profile
                                .about_paragraphs
                                .iter()
                                .map(|p| {
                                    view! { <p class="type-body mb-6 text-text-secondary">{p.clone()}</p> }
                                })
                                .collect_view()}
                        </div>
                        <div class="grid grid-cols-2 gap-4">
                            {stats
                                .iter()
                                .enumerate()
                                .map(|(i, stat)| {
                                    view! {
                                        <AnimatedSection delay={i as f64 * 0.1}>
                                            <div class="card card-lift p-6 text-center">
                                                <p class="type-h3 mb-2" style:color=stat.color.clone()>
                                                    {stat.number.clone()}
                                                </p>
                                                <p class="type-body2 text-text-secondary">
                                                    {stat.label.clone()}
                                                </p>
                                            </div>
                                        </AnimatedSection>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}
