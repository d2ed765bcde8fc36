use leptos::prelude::*;

use super::scroll::Reveal;
use crate::motion::Entrance;
use crate::site::{Section, CERTIFICATIONS};

#[component]
pub fn Certifications() -> impl IntoView {
    view! {
        <section id=Section::Certifications.id() class="py-16 sm:py-20 bg-[#030014] px-4 sm:px-6">
            <div class="max-w-6xl mx-auto">
                <div class="flex items-center gap-3 mb-10 sm:mb-12">
                    <Reveal
                        entrance=Entrance::ScaleIn
                        class="p-2 sm:p-3 bg-purple-500/10 rounded-lg"
                    >
                        <i class="extra-award text-purple-400"></i>
                    </Reveal>
                    <Reveal delay_ms=100>
                        <h2 class="text-2xl sm:text-3xl md:text-4xl font-bold text-white">
                            "Certifications"
                        </h2>
                    </Reveal>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {CERTIFICATIONS
                        .iter()
                        .enumerate()
                        .map(|(i, cert)| {
                            view! {
                                <Reveal
                                    delay_ms={i as u32 * 100}
                                    class="group relative p-6 sm:p-8 rounded-2xl bg-white/5 border border-white/10 hover:border-purple-500/40 hover:-translate-y-1 transition-all"
                                >
                                    <div class="flex justify-between items-start gap-4 mb-4">
                                        <div>
                                            <h3 class="text-lg sm:text-xl font-bold text-white group-hover:text-purple-300 transition-colors">
                                                {cert.title}
                                            </h3>
                                            <p class="text-gray-500 text-sm mt-1">
                                                "Issued by " {cert.issuer}
                                            </p>
                                        </div>
                                        <i class=format!("extra-check flex-shrink-0 {}", cert.accent)></i>
                                    </div>
                                    <p class="text-gray-400 text-sm sm:text-base leading-relaxed mb-6">
                                        {cert.description}
                                    </p>
                                    <a
                                        href=cert.link
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="inline-flex items-center gap-2 text-sm text-purple-400 hover:text-purple-300 hover:scale-105 transition-all"
                                    >
                                        "View Credential"
                                        <i class="extra-link"></i>
                                    </a>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
