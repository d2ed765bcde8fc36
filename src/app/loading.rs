use leptos::prelude::*;
use leptos_use::{use_interval_fn, use_timeout_fn, utils::Pausable, UseTimeoutFnReturn};

use crate::loading::{Advance, LoadingProgress, LOADING_EXIT_DELAY_MS, LOADING_TICK_MS};
use crate::site::{OWNER_FIRST_NAME, OWNER_TITLE};

#[component]
pub fn LoadingOverlay(on_complete: Callback<()>) -> impl IntoView {
    let progress = RwSignal::new(LoadingProgress::default());

    let UseTimeoutFnReturn { start: start_exit, .. } =
        use_timeout_fn(move |_: ()| on_complete.run(()), LOADING_EXIT_DELAY_MS);

    let Pausable { pause, .. } = use_interval_fn(
        move || {
            let mut outcome = Advance::Idle;
            progress.update(|p| outcome = p.advance());
            if outcome == Advance::Finished {
                start_exit(());
            }
        },
        LOADING_TICK_MS,
    );

    Effect::watch(
        move || progress.with(|p| p.is_complete()),
        move |done, _, _| {
            if *done {
                log::debug!("loading counter reached 100");
                pause();
            }
        },
        false,
    );

    view! {
        <div class="fixed inset-0 z-[9999] bg-slate-950 flex items-center justify-center">
            <div class="text-center">
                <div class="mb-8 animate-pop-in">
                    <h1 class="text-4xl md:text-6xl font-bold text-white mb-2">
                        {OWNER_FIRST_NAME}
                        <span class="text-purple-500">"."</span>
                    </h1>
                    <p class="text-gray-400 text-sm md:text-base">{OWNER_TITLE}</p>
                </div>
                <div class="w-64 h-1 bg-slate-800 rounded-full overflow-hidden mx-auto">
                    <div
                        class="h-full bg-gradient-to-r from-purple-500 to-blue-500 transition-all duration-300"
                        style=move || progress.with(|p| p.bar_width())
                    ></div>
                </div>
                <p class="text-purple-400 mt-4 font-mono text-sm">
                    {move || progress.with(|p| p.value())}
                    "%"
                </p>
            </div>
        </div>
    }
}
