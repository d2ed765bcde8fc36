use leptos::prelude::*;

use super::scroll::Reveal;
use crate::contact::{ContactChannel, ContactDraft, ExternalHandoff, HandoffError};
use crate::pointer::INTERACTIVE_MARKER;
use crate::site::Section;

/// Opens links in a new browsing context.
struct NewTab;

impl ExternalHandoff for NewTab {
    fn open(&self, url: &str) -> Result<(), HandoffError> {
        match window().open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(HandoffError::Blocked),
            Err(e) => Err(HandoffError::Failed(format!("{e:?}"))),
        }
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let channel = StoredValue::new(ContactChannel::from_env());
    let draft = RwSignal::new(ContactDraft::default());
    let (notice, set_notice) = signal(None::<String>);

    let field_class = "w-full bg-transparent border-b border-white/20 focus:border-purple-500 py-3 text-white placeholder-gray-600 focus:outline-none transition-colors";

    view! {
        <section
            id=Section::Contact.id()
            class="py-16 sm:py-24 md:py-32 px-4 sm:px-6 bg-slate-950 relative overflow-hidden"
        >
            <div class="absolute -bottom-1/4 -left-1/4 w-[500px] h-[500px] bg-blue-600/5 rounded-full blur-[120px] pointer-events-none animate-breathe"></div>
            <div class="max-w-5xl mx-auto grid grid-cols-1 md:grid-cols-2 gap-12 md:gap-16 relative z-10">
                <div>
                    <Reveal>
                        <span class="text-purple-400 text-sm uppercase tracking-widest">
                            "Get In Touch"
                        </span>
                    </Reveal>
                    <Reveal delay_ms=100>
                        <h2 class="text-3xl sm:text-4xl md:text-5xl font-bold text-white mt-4 mb-6 leading-tight">
                            "Let's create something extraordinary."
                        </h2>
                    </Reveal>
                    <Reveal delay_ms=200>
                        <p class="text-gray-400 text-base sm:text-lg">
                            "Open for freelance projects and full-time opportunities."
                        </p>
                    </Reveal>
                </div>
                <Reveal delay_ms=300>
                    <form
                        class="space-y-8"
                        novalidate
                        on:submit=move |ev| {
                            ev.prevent_default();
                            let res = channel
                                .with_value(|channel| {
                                    draft.with_untracked(|draft| channel.submit(draft, &NewTab))
                                });
                            set_notice(res.err().map(|e| e.to_string()));
                        }
                    >
                        <div class="group">
                            <label
                                for="contact_name"
                                class="text-gray-500 text-xs uppercase tracking-wider mb-2 block group-focus-within:text-purple-400 transition-colors"
                            >
                                "Name"
                            </label>
                            <input
                                id="contact_name"
                                type="text"
                                name="name"
                                placeholder="Your Name"
                                class=field_class
                                prop:value=move || draft.with(|d| d.name.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.name = value);
                                }
                            />
                        </div>
                        <div class="group">
                            <label
                                for="contact_details"
                                class="text-gray-500 text-xs uppercase tracking-wider mb-2 block group-focus-within:text-purple-400 transition-colors"
                            >
                                "Project Details"
                            </label>
                            <textarea
                                id="contact_details"
                                name="details"
                                rows="4"
                                placeholder="Tell me about your idea..."
                                class=format!("{field_class} resize-none")
                                prop:value=move || draft.with(|d| d.details.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.details = value);
                                }
                            ></textarea>
                        </div>
                        {move || {
                            notice
                                .get()
                                .map(|text| {
                                    view! {
                                        <p role="alert" class="text-red-400 text-sm">
                                            {text}
                                        </p>
                                    }
                                })
                        }}
                        <button
                            type="submit"
                            class=format!(
                                "{INTERACTIVE_MARKER} w-full flex items-center justify-center gap-3 px-8 py-4 bg-green-600 hover:bg-green-500 text-white font-medium rounded-lg hover:scale-[1.02] active:scale-[0.98] transition-all",
                            )
                        >
                            <i class="devicon-whatsapp-plain"></i>
                            {move || {
                                channel.with_value(|channel| format!("Send via {}", channel.service))
                            }}
                        </button>
                    </form>
                </Reveal>
            </div>
        </section>
    }
}
