use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::scroll::Reveal;
use crate::motion::{interpolate, Entrance};
use crate::pointer::INTERACTIVE_MARKER;
use crate::site::{Section, CV_PATH, OWNER_NAME, OWNER_TITLE, PROFILE_IMAGE, SOCIAL_LINKS};

const PARTICLES: u32 = 5;

#[component]
pub fn Hero() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let drift = move |to: f64| {
        move || {
            let y = interpolate(scroll_y.get(), (0.0, 500.0), (0.0, to));
            format!("transform: translate3d(0, {y}px, 0)")
        }
    };
    let content_opacity = move || {
        let opacity = interpolate(scroll_y.get(), (0.0, 300.0), (1.0, 0.0));
        format!("opacity: {opacity}")
    };

    view! {
        <section
            id=Section::Home.id()
            class="relative min-h-screen flex items-center px-4 sm:px-6 md:px-12 bg-slate-950 overflow-hidden pt-24 md:pt-20"
        >
            <div
                class="absolute top-[-10%] right-[-5%] w-[300px] h-[300px] sm:w-[500px] sm:h-[500px] bg-purple-600/20 rounded-full blur-[80px] sm:blur-[120px] pointer-events-none"
                style=drift(150.0)
            ></div>
            <div
                class="absolute bottom-[10%] left-[-10%] w-[250px] h-[250px] sm:w-[400px] sm:h-[400px] bg-blue-600/10 rounded-full blur-[80px] sm:blur-[100px] pointer-events-none"
                style=drift(-150.0)
            ></div>
            {(0..PARTICLES)
                .map(|i| {
                    view! {
                        <div
                            class="absolute w-2 h-2 bg-purple-500/30 rounded-full animate-float"
                            style=format!(
                                "left: {}%; top: {}%; animation-duration: {}s;",
                                10 + i * 20,
                                20 + i * 15,
                                3 + i,
                            )
                        ></div>
                    }
                })
                .collect_view()}
            <div
                class="z-10 grid grid-cols-1 md:grid-cols-2 gap-8 md:gap-10 items-center w-full max-w-7xl mx-auto"
                style=content_opacity
            >
                <div class="flex flex-col justify-center text-center md:text-left order-2 md:order-1">
                    <Reveal delay_ms=300>
                        <h3 class="text-lg sm:text-xl md:text-2xl font-medium text-purple-400 mb-2">
                            "Hi, I am"
                        </h3>
                    </Reveal>
                    <Reveal delay_ms=400>
                        <h2 class="text-3xl sm:text-4xl md:text-6xl font-bold text-white mb-2 tracking-tight">
                            {OWNER_NAME}
                        </h2>
                    </Reveal>
                    <Reveal delay_ms=500>
                        <h1 class="text-4xl sm:text-5xl md:text-7xl font-extrabold text-transparent bg-clip-text bg-gradient-to-r from-purple-500 via-violet-400 to-white mb-6 md:mb-8">
                            {OWNER_TITLE}
                        </h1>
                    </Reveal>
                    <div class="flex gap-3 sm:gap-4 mb-8 md:mb-10 justify-center md:justify-start">
                        {SOCIAL_LINKS
                            .iter()
                            .enumerate()
                            .map(|(i, link)| {
                                view! {
                                    <Reveal entrance=Entrance::ScaleIn delay_ms={300 + i as u32 * 100}>
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noreferrer"
                                            aria-label=link.label
                                            class="w-10 h-10 sm:w-12 sm:h-12 rounded-full border border-white/20 flex items-center justify-center text-white/70 hover:text-purple-400 hover:border-purple-400 hover:bg-white/5 hover:scale-110 transition-all duration-300"
                                        >
                                            <i class=link.icon></i>
                                        </a>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                    <Reveal delay_ms=700 class="flex flex-wrap gap-4 sm:gap-6 mb-8 md:mb-12 justify-center md:justify-start">
                        <a
                            href=CV_PATH
                            download="cv.pdf"
                            class=format!(
                                "{INTERACTIVE_MARKER} px-6 sm:px-8 py-3 sm:py-3.5 border border-white/30 hover:border-white text-white font-medium rounded-lg transition-all hover:bg-white/5 hover:scale-105 text-sm sm:text-base"
                            )
                        >
                            "Download CV"
                        </a>
                    </Reveal>
                </div>
                <Reveal
                    entrance=Entrance::ScaleIn
                    class="relative flex justify-center items-center order-1 md:order-2 mt-8 md:mt-0"
                >
                    <div class="absolute w-[280px] h-[280px] sm:w-[350px] sm:h-[350px] md:w-[500px] md:h-[500px] rounded-full border-2 border-purple-500/20 border-dashed z-0 animate-spin-slow"></div>
                    <div class="absolute w-[250px] h-[250px] sm:w-[350px] sm:h-[350px] md:w-[500px] md:h-[500px] bg-slate-800/50 rounded-full border border-white/5 z-0 animate-breathe"></div>
                    <img
                        src=PROFILE_IMAGE
                        alt=OWNER_NAME
                        class="relative z-10 w-[220px] h-[220px] sm:w-[300px] sm:h-[300px] md:w-[450px] md:h-[450px] object-cover rounded-full border-4 border-white/10 shadow-2xl hover:scale-105 transition-transform duration-300"
                    />
                </Reveal>
            </div>
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-fade-in-late">
                <div class="flex flex-col items-center gap-2 animate-bob">
                    <span class="text-gray-500 text-xs">"Scroll Down"</span>
                    <div class="w-6 h-10 border-2 border-gray-500 rounded-full flex justify-center">
                        <div class="w-1 h-2 bg-purple-500 rounded-full mt-2 animate-bob"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}
