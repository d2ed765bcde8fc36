use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::use_window_scroll;

use super::scroll::ScrollCoordinator;
use crate::nav::{is_scrolled, NavMenu, NAV_LINKS};
use crate::site::{Section, OWNER_FIRST_NAME};

#[component]
pub fn NavigationBar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));
    let menu = RwSignal::new(NavMenu::default());
    let is_open = move || menu.with(|m| m.is_open());
    let coordinator = use_context::<ScrollCoordinator>();

    // falls back to the native anchor jump when there is no smooth scroller
    let follow = move |ev: MouseEvent, section: Section| {
        menu.update(|m| m.link_activated());
        if coordinator.is_some_and(|c| c.scroll_to_section(section.id())) {
            ev.prevent_default();
        }
    };

    let bar = move |transform: &'static str| {
        move || {
            if is_open() {
                format!("w-6 h-0.5 bg-white block transition-all duration-300 {transform}")
            } else {
                "w-6 h-0.5 bg-white block transition-all duration-300".to_string()
            }
        }
    };

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-slate-950/90 backdrop-blur-lg border-b border-white/10"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300"
            }
        }>
            <div class="max-w-7xl mx-auto flex justify-between items-center px-4 sm:px-6 md:px-12 py-4 md:py-6">
                <a
                    href=Section::Home.href()
                    class="text-white font-bold text-lg sm:text-xl uppercase"
                    on:click=move |ev| follow(ev, Section::Home)
                >
                    {OWNER_FIRST_NAME}
                    <span class="text-purple-400">"."</span>
                </a>
                <div class="hidden md:flex gap-8 items-center">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let section = link.section;
                            view! {
                                <a
                                    href=section.href()
                                    class="text-gray-400 hover:text-white transition-colors text-sm font-medium"
                                    on:click=move |ev| follow(ev, section)
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="md:hidden text-white text-sm font-medium z-50 relative"
                    aria-label="Toggle menu"
                    aria-expanded=move || is_open().to_string()
                    on:click=move |_| menu.update(|m| m.toggle())
                >
                    <div class="flex flex-col gap-1.5">
                        <span class=bar("rotate-45 translate-y-2")></span>
                        <span class=bar("opacity-0")></span>
                        <span class=bar("-rotate-45 -translate-y-2")></span>
                    </div>
                </button>
            </div>
        </nav>
        <Show when=is_open>
            <div class="fixed inset-0 z-40 bg-slate-950 md:hidden animate-slide-in">
                <div class="flex flex-col items-center justify-center h-full gap-8">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let section = link.section;
                            view! {
                                <a
                                    href=section.href()
                                    class="text-white text-2xl font-bold hover:text-purple-400 transition-colors"
                                    on:click=move |ev| follow(ev, section)
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>
    }
}
