use leptos::prelude::*;

use super::scroll::Reveal;
use crate::motion::Entrance;
use crate::site::{Section, STATS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section
            id=Section::About.id()
            class="py-16 sm:py-24 md:py-32 bg-slate-950 relative overflow-hidden"
        >
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[600px] h-[600px] bg-purple-500 opacity-10 rounded-full blur-[150px] pointer-events-none"></div>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 md:px-12 relative z-10">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-12 md:gap-16 items-center">
                    <div>
                        <Reveal entrance=Entrance::FadeLeft>
                            <h2 class="text-3xl sm:text-4xl md:text-5xl font-bold text-white mb-6 leading-tight">
                                "Engineering " <br />
                                <span class="text-purple-400">"Digital Excellence"</span>
                            </h2>
                        </Reveal>
                        <Reveal entrance=Entrance::FadeLeft delay_ms=100>
                            <p class="text-gray-400 text-base sm:text-lg leading-relaxed">
                                "I don't just write code; I architect solutions. Specializing in the MERN stack and React Native, I bring a disciplined approach to full-stack development. My work bridges the gap between complex backend logic and buttery-smooth frontend interactions."
                            </p>
                        </Reveal>
                    </div>
                    <div class="grid grid-cols-3 gap-4 sm:gap-6">
                        {STATS
                            .iter()
                            .enumerate()
                            .map(|(i, stat)| {
                                view! {
                                    <Reveal
                                        entrance=Entrance::ScaleIn
                                        delay_ms={i as u32 * 100}
                                        class="p-4 sm:p-6 rounded-2xl bg-white/5 border border-white/10 text-center hover:-translate-y-1 hover:scale-105 transition-transform"
                                    >
                                        <h3 class="text-2xl sm:text-4xl font-bold text-white mb-2">
                                            {stat.value}
                                        </h3>
                                        <p class="text-gray-500 text-xs sm:text-sm uppercase tracking-wider">
                                            {stat.label}
                                        </p>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
