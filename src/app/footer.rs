use leptos::prelude::*;

use super::scroll::Reveal;
use crate::motion::Entrance;
use crate::site::{OWNER_FIRST_NAME, SOCIAL_LINKS};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 sm:py-12 px-4 sm:px-6 bg-slate-950 border-t border-white/5">
            <Reveal
                entrance=Entrance::Fade
                class="max-w-7xl mx-auto flex flex-col md:flex-row justify-between items-center gap-6"
            >
                <div class="text-white font-bold text-lg hover:scale-105 transition-transform">
                    {OWNER_FIRST_NAME}
                    <span class="text-purple-500">"."</span>
                    "PORTFOLIO"
                </div>
                <div class="flex gap-6">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noreferrer"
                                    aria-label=link.label
                                    class="text-gray-500 hover:text-white hover:scale-125 hover:-translate-y-1 transition-all"
                                >
                                    <i class=link.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="text-gray-600 text-xs sm:text-sm text-center">
                    {format!("© {BUILD_YEAR} All Rights Reserved.")}
                </div>
            </Reveal>
        </footer>
    }
}
