use leptos::prelude::*;

use super::animated::AnimatedSection;
use crate::content::{Achievement, Education};

#[component]
pub fn Credentials(
    education: &'static [Education],
    achievements: &'static [Achievement],
) -> impl IntoView {
    view! {
        <section class="bg-paper py-24">
            <div class="mx-auto grid max-w-6xl grid-cols-1 gap-12 px-6 md:grid-cols-2">
                <AnimatedSection>
                    <p class="section-label mb-6">"EDUCATION"</p>
                    <div class="flex flex-col gap-6">
                        {education
                            .iter()
                            .map(|e| {
                                view! {
                                    <div class="card card-grow p-6">
                                        <h4 class="type-h4 mb-2 text-text-primary">
                                            {e.institution.clone()}
                                        </h4>
                                        <p class="type-body mb-1 text-primary">{e.program.clone()}</p>
                                        <p class="type-body2 text-text-secondary">{e.detail.clone()}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </AnimatedSection>
                <AnimatedSection delay=0.2>
                    <p class="section-label mb-6 text-warning">"ACHIEVEMENTS"</p>
                    <div class="card card-grow achievement-card p-8">
                        <div class="flex flex-col gap-6">
                            {achievements
                                .iter()
                                .map(|a| {
                                    view! {
                                        <div>
                                            <h4 class="type-h4 mb-2 text-[#d97706]">
                                                {format!("{} {}", a.icon, a.title)}
                                            </h4>
                                            <p class="type-body text-text-secondary">
                                                {a.description.clone()}
                                            </p>
                                        </div>
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
