use leptos::{html, prelude::*};

use super::scroll::{use_reveal, Reveal};
use crate::site::{Section, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    let underline = NodeRef::<html::Div>::new();
    let underline_shown = use_reveal(underline);

    view! {
        <section
            id=Section::Projects.id()
            class="py-16 sm:py-24 md:py-32 px-4 sm:px-6 bg-slate-950 relative overflow-hidden"
        >
            <div class="absolute top-1/4 right-0 w-[500px] h-[500px] bg-purple-600/5 rounded-full blur-[120px] pointer-events-none animate-breathe"></div>
            <div class="max-w-7xl mx-auto relative z-10">
                <Reveal class="mb-12 sm:mb-16">
                    <h2 class="text-3xl sm:text-4xl md:text-5xl font-bold text-white mb-4">
                        "Selected Works"
                    </h2>
                    <div
                        node_ref=underline
                        class="h-1 bg-gradient-to-r from-purple-500 to-blue-500 rounded-full"
                        style=move || {
                            let width = if underline_shown.get() { 80 } else { 0 };
                            format!("width: {width}px; transition: width 0.8s ease-out;")
                        }
                    ></div>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 sm:gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <Reveal
                                    delay_ms={i as u32 * 100}
                                    class="group relative p-6 sm:p-8 rounded-2xl bg-white/5 border border-white/10 hover:border-purple-500/40 hover:-translate-y-2 hover:scale-[1.02] transition-all duration-300"
                                >
                                    <span class="inline-block text-xs px-3 py-1 rounded-full bg-purple-500/10 text-purple-300 mb-4">
                                        {project.category}
                                    </span>
                                    <h3 class="text-xl sm:text-2xl font-bold text-white mb-4 leading-tight group-hover:text-purple-300 transition-colors">
                                        {project.title}
                                    </h3>
                                    <p class="text-gray-400 text-sm leading-relaxed mb-6">
                                        {project.description}
                                    </p>
                                    <div class="flex flex-wrap gap-2 mb-6">
                                        {project
                                            .tech
                                            .iter()
                                            .map(|t| {
                                                view! {
                                                    <span class="text-xs px-2 py-1 rounded bg-slate-800 text-gray-300 hover:scale-110 transition-transform">
                                                        {*t}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <ul class="space-y-2">
                                        {project
                                            .features
                                            .iter()
                                            .map(|feature| {
                                                view! {
                                                    <li class="flex items-center gap-2 text-sm text-gray-400">
                                                        <i class="extra-check text-blue-400"></i>
                                                        {*feature}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
