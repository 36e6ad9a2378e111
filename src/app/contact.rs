use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use super::animated::AnimatedSection;
use crate::content::Profile;

fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[component]
pub fn Contact(profile: &'static Profile) -> impl IntoView {
    view! {
        <section class="bg-primary py-24">
            <div class="mx-auto max-w-3xl px-6 text-center">
                <AnimatedSection>
                    <h2 class="type-h2 mb-6 text-white">"Let's build something great together"</h2>
                    <p class="type-body mx-auto mb-8 max-w-[500px] text-white/80">
                        "I'm always interested in hearing about new opportunities and challenging problems to solve."
                    </p>
                    <a
                        href=profile.mailto()
                        class="btn btn-large bg-white px-10 text-primary hover:bg-white/90"
                    >
                        "Get in touch"
                    </a>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(profile: &'static Profile) -> impl IntoView {
    view! {
        <footer class="bg-ink py-8">
            <div class="mx-auto flex max-w-6xl flex-wrap items-center justify-between gap-4 px-6">
                <p class="type-body2 text-white/60">
                    {format!(
                        "© {} {}. Built with Rust + Leptos.",
                        copyright_year(),
                        profile.name,
                    )}
                </p>
                <div class="flex gap-4 text-white/60">
                    <a href=profile.mailto() class="hover:text-white" aria-label="Email">
                        "✉"
                    </a>
                    <a
                        href=profile.github.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-white"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    <a
                        href=profile.linkedin.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-white"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                </div>
            </div>
        </footer>
    }
}
