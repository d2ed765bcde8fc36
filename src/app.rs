mod about;
mod certifications;
mod contact;
mod cursor;
mod experience;
mod footer;
mod hero;
mod loading;
mod navigation;
mod projects;
mod scroll;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::site::{OWNER_FIRST_NAME, OWNER_TITLE};
use about::About;
use certifications::Certifications;
use contact::Contact;
use cursor::CursorFollower;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use loading::LoadingOverlay;
use navigation::NavigationBar;
use projects::Projects;
use skills::Skills;
use scroll::provide_scroll_coordinator;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER_FIRST_NAME} - {title}") />
        <Meta name="description" content=format!("{OWNER_FIRST_NAME}, {OWNER_TITLE}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The whole site: loading gate first, then cursor, navigation and every section.
#[component]
fn Portfolio() -> impl IntoView {
    let (loading, set_loading) = signal(true);
    provide_scroll_coordinator();

    view! {
        <Title text=OWNER_TITLE />
        <div class="bg-slate-950 min-h-screen selection:bg-purple-500 selection:text-white overflow-x-hidden">
            <Show when=move || loading.get()>
                <LoadingOverlay on_complete=Callback::new(move |_: ()| {
                    log::debug!("loading complete, mounting content");
                    set_loading(false);
                }) />
            </Show>
            <Show when=move || !loading()>
                <CursorFollower />
                <NavigationBar />
                <main>
                    <Hero />
                    <About />
                    <Certifications />
                    <Skills />
                    <Experience />
                    <Projects />
                    <Contact />
                    <Footer />
                </main>
            </Show>
        </div>
    }
}
