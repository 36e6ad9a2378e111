use leptos::prelude::*;

use super::{
    animated::{AnimatedContainer, RevealTrigger},
    nav::scroll_to_section,
    scroll::use_scroll_sample,
};
use crate::{
    content::Profile,
    motion::{AnimationSpec, HERO_FADE, HERO_SCALE},
};

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    let sample = use_scroll_sample();
    let parallax = move || {
        let progress = sample.get().progress;
        format!(
            "opacity: {}; transform: scale({});",
            HERO_FADE.apply(progress),
            HERO_SCALE.apply(progress)
        )
    };

    view! {
        <section
            class="hero-backdrop relative flex min-h-screen items-center justify-center overflow-hidden"
            style=parallax
        >
            <div class="hero-orb hero-orb-blue"></div>
            <div class="hero-orb hero-orb-green"></div>

            <div class="relative z-10 mx-auto max-w-3xl px-6 pt-16 text-center">
                <AnimatedContainer spec=AnimationSpec::intro(0.2) trigger=RevealTrigger::Mount>
                    <p class="mb-4 flex items-center justify-center gap-2 font-medium text-primary">
                        <span aria-hidden="true">"✦"</span>
                        {profile.headline.clone()}
                    </p>
                </AnimatedContainer>
                <AnimatedContainer spec=AnimationSpec::intro(0.4) trigger=RevealTrigger::Mount>
                    <h1 class="type-h1 mb-6 text-[2.5rem] md:text-[4rem]">
                        {profile.tagline.clone()}
                        " "
                        <span class="text-gradient">{profile.tagline_accent.clone()}</span>
                    </h1>
                </AnimatedContainer>
                <AnimatedContainer spec=AnimationSpec::intro(0.6) trigger=RevealTrigger::Mount>
                    <p class="type-h4 mx-auto mb-10 max-w-[600px] font-normal leading-relaxed text-text-secondary">
                        {profile.pitch.clone()}
                    </p>
                </AnimatedContainer>
                <AnimatedContainer spec=AnimationSpec::intro(0.8) trigger=RevealTrigger::Mount>
                    <div class="mb-12 flex flex-row justify-center gap-4">
                        <button
                            class="btn btn-contained btn-large"
                            on:click=move |_| scroll_to_section("experience")
                        >
                            "View my work"
                            <span aria-hidden="true">"→"</span>
                        </button>
                        <a href=profile.resume.clone() class="btn btn-outlined btn-large">
                            "Download CV"
                        </a>
                    </div>
                    <div class="flex flex-row justify-center gap-2">
                        <a
                            href=profile.mailto()
                            class="icon-button hover:bg-primary"
                            aria-label="Email"
                        >
                            "✉"
                        </a>
                        <a
                            href=profile.github.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="icon-button hover:bg-[#333]"
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-plain"></i>
                        </a>
                        <a
                            href=profile.linkedin.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="icon-button hover:bg-[#0077b5]"
                            aria-label="LinkedIn Profile"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                    </div>
                </AnimatedContainer>
            </div>

            <div class="absolute bottom-10 left-1/2 -translate-x-1/2">
                <AnimatedContainer spec=AnimationSpec::fade(1.0, 1.2) trigger=RevealTrigger::Mount>
                    <button
                        class="animate-bob text-3xl text-text-secondary"
                        aria-label="Scroll to about"
                        on:click=move |_| scroll_to_section("about")
                    >
                        "⌄"
                    </button>
                </AnimatedContainer>
            </div>
        </section>
    }
}
