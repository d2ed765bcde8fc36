use leptos::{html, prelude::*};

use super::scroll::{use_reveal, Reveal};
use crate::motion::Entrance;
use crate::site::{Section, MARQUEE_COPIES, MARQUEE_SKILLS, PROFICIENCIES, SKILL_CATEGORIES};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section
            id=Section::Skills.id()
            class="py-16 sm:py-20 bg-slate-950 overflow-hidden border-t border-white/5"
        >
            <Reveal class="text-center mb-12 px-4">
                <span class="text-purple-400 text-sm uppercase tracking-widest">"Tech Stack"</span>
                <h2 class="text-2xl sm:text-3xl text-white mt-4 font-bold">"Arsenal of Tools"</h2>
            </Reveal>
            <Marquee />
            <div class="max-w-7xl mx-auto px-4 sm:px-6 md:px-12 mt-16">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <Reveal
                                    delay_ms={i as u32 * 100}
                                    class="p-6 rounded-2xl bg-white/5 border border-white/10 hover:-translate-y-1 transition-transform"
                                >
                                    <div class="flex items-center gap-3 mb-6">
                                        <i class="extra-code text-purple-400"></i>
                                        <h3 class="text-xl font-bold text-white">{category.name}</h3>
                                    </div>
                                    <div class="space-y-3">
                                        {category
                                            .skills
                                            .iter()
                                            .enumerate()
                                            .map(|(j, skill)| {
                                                view! {
                                                    <Reveal
                                                        entrance=Entrance::FadeLeft
                                                        delay_ms={j as u32 * 100}
                                                        class="flex items-center justify-between p-3 rounded-lg bg-slate-900/50"
                                                    >
                                                        <div class="flex items-center gap-3 text-white">
                                                            <i class=skill.icon></i>
                                                            <span>{skill.name}</span>
                                                        </div>
                                                        <span class=format!(
                                                            "text-xs px-2 py-1 rounded-full {}",
                                                            skill.level.badge_class(),
                                                        )>{skill.level.label()}</span>
                                                    </Reveal>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <Reveal class="mt-12 p-6 sm:p-8 rounded-2xl bg-white/5 border border-white/10">
                    <h3 class="text-xl font-bold text-white mb-6 flex items-center gap-3">
                        <i class="extra-server text-purple-400"></i>
                        "Proficiency Overview"
                    </h3>
                    <div class="space-y-5">
                        {PROFICIENCIES
                            .iter()
                            .enumerate()
                            .map(|(i, p)| {
                                view! {
                                    <ProficiencyBar
                                        name=p.name
                                        percent=p.percent
                                        delay_ms={i as u32 * 100}
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

/// Endless right-to-left strip of skills; pauses while hovered.
#[component]
fn Marquee() -> impl IntoView {
    view! {
        <div class="relative">
            <div class="absolute left-0 top-0 bottom-0 w-24 bg-gradient-to-r from-slate-950 to-transparent z-10 pointer-events-none"></div>
            <div class="absolute right-0 top-0 bottom-0 w-24 bg-gradient-to-l from-slate-950 to-transparent z-10 pointer-events-none"></div>
            <div class="flex w-max animate-scroll-rtl">
                {(0..MARQUEE_COPIES)
                    .flat_map(|_| MARQUEE_SKILLS)
                    .map(|skill| {
                        view! {
                            <div class="flex items-center gap-3 mx-4 px-6 py-3 rounded-full bg-white/5 border border-white/10 whitespace-nowrap">
                                <i class=format!("{} text-2xl {}", skill.icon, skill.color)></i>
                                <span class="text-white font-medium">{skill.name}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProficiencyBar(name: &'static str, percent: u8, delay_ms: u32) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node);
    let width = move || {
        let to = if revealed.get() { percent } else { 0 };
        format!("width: {to}%; transition: width 1s ease-out {delay_ms}ms;")
    };

    view! {
        <div node_ref=node>
            <div class="flex justify-between text-sm mb-2">
                <span class="text-gray-300">{name}</span>
                <span class="text-purple-400 font-mono">{format!("{percent}%")}</span>
            </div>
            <div class="h-2 bg-slate-800 rounded-full overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-purple-500 to-blue-500 rounded-full"
                    style=width
                ></div>
            </div>
        </div>
    }
}
