use leptos::prelude::*;

use super::animated::{AnimatedContainer, AnimatedSection};
use crate::{
    content::SkillGroup,
    motion::{AnimationSpec, ViewportMargin},
};

#[component]
pub fn Skills(groups: &'static [SkillGroup]) -> impl IntoView {
    view! {
        <section id="skills" class="bg-white py-24">
            <div class="mx-auto max-w-6xl px-6">
                <AnimatedSection class="mb-16 text-center">
                    <p class="section-label mb-4">"SKILLS"</p>
                    <h2 class="type-h2">"Technologies I work with"</h2>
                </AnimatedSection>
                <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 md:grid-cols-4">
                    {groups
                        .iter()
                        .enumerate()
                        .map(|(i, group)| {
                            view! {
                                <AnimatedSection delay={i as f64 * 0.15} class="h-full">
                                    <div class="card card-lift skill-card h-full p-6">
                                        <h4 class="type-h4 mb-4 text-primary">
                                            {group.category.clone()}
                                        </h4>
                                        <div class="flex flex-col gap-2">
                                            {group
                                                .items
                                                .iter()
                                                .enumerate()
                                                .map(|(j, item)| {
                                                    view! {
                                                        <AnimatedContainer
                                                            spec=AnimationSpec::skill_item(j)
                                                            margin=ViewportMargin::ITEM
                                                        >
                                                            <p class="type-body text-text-secondary">
                                                                {item.clone()}
                                                            </p>
                                                        </AnimatedContainer>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </AnimatedSection>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
