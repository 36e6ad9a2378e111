mod about;
mod animated;
mod contact;
mod credentials;
mod experience;
mod hero;
mod nav;
mod scroll;
mod skills;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content;

use about::About;
use contact::{Contact, Footer};
use credentials::Credentials;
use experience::Experience;
use hero::Hero;
use nav::NavBar;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-white text-text-primary antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    scroll::provide_scroll_sampler();

    view! {
        <Title formatter=|title| format!("{title} - Portfolio") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let portfolio = match content::portfolio() {
        Ok(p) => p,
        Err(e) => {
            log::error!("portfolio content failed to load: {e}");
            return Either::Right(());
        }
    };

    Either::Left(view! {
        <Title text=portfolio.profile.name.clone() />
        <NavBar profile=&portfolio.profile />
        <main>
            <Hero profile=&portfolio.profile />
            <About profile=&portfolio.profile stats=&portfolio.stats />
            <Experience experiences=&portfolio.experiences />
            <Skills groups=&portfolio.skills />
            <Credentials education=&portfolio.education achievements=&portfolio.achievements />
            <Contact profile=&portfolio.profile />
        </main>
        <Footer profile=&portfolio.profile />
    })
}
