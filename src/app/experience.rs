use leptos::prelude::*;

use super::scroll::Reveal;
use crate::motion::Entrance;
use crate::site::{Section, EXPERIENCE};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section
            id=Section::Experience.id()
            class="py-16 sm:py-24 bg-slate-950 relative overflow-hidden"
        >
            <div class="max-w-4xl mx-auto px-4 sm:px-6">
                <Reveal>
                    <h2 class="text-3xl sm:text-4xl md:text-5xl font-bold text-white mb-12 sm:mb-16 text-center">
                        "Professional Journey"
                    </h2>
                </Reveal>
                <div class="relative border-l border-white/10 ml-3 sm:ml-6 space-y-12">
                    {EXPERIENCE
                        .iter()
                        .enumerate()
                        .map(|(i, role)| {
                            view! {
                                <Reveal
                                    entrance=Entrance::FadeLeft
                                    delay_ms={i as u32 * 200}
                                    class="relative pl-8 sm:pl-12"
                                >
                                    <div class="absolute -left-[7px] top-2 w-3.5 h-3.5 rounded-full bg-purple-500 ring-4 ring-purple-500/20"></div>
                                    <div class="hover:translate-x-1 transition-transform">
                                        <span class="text-purple-400 text-sm font-mono">{role.years}</span>
                                        <h3 class="text-lg sm:text-xl text-white font-bold">{role.title}</h3>
                                        <h4 class="text-gray-400 mb-3 sm:mb-4 text-sm sm:text-base">
                                            {role.company}
                                        </h4>
                                        <p class="text-gray-500 text-sm sm:text-base leading-relaxed">
                                            {role.description}
                                        </p>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
