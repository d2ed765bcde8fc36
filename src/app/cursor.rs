use std::sync::Arc;

use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener, use_media_query, use_window_size, UseWindowSizeReturn};
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::pointer::{
    cursor_enabled, CursorState, HoverTarget, PointerPosition, PointerSignal, PointerSink,
    PointerSource, Subscription, INTERACTIVE_MARKER,
};

/// Pointer events observed on the whole document.
struct DocumentPointer;

impl PointerSource for DocumentPointer {
    fn subscribe(&self, sink: PointerSink) -> Subscription {
        let move_sink = sink.clone();
        let stop_move = use_event_listener(use_document(), ev::mousemove, move |e| {
            let position = PointerPosition::new(e.client_x() as f64, e.client_y() as f64);
            move_sink(PointerSignal::Moved(position));
        });
        let stop_over = use_event_listener(use_document(), ev::mouseover, move |e| {
            sink(PointerSignal::Over(hover_target(&e)));
        });
        Subscription::new(move || {
            stop_move();
            stop_over();
        })
    }
}

fn hover_target(e: &MouseEvent) -> HoverTarget {
    let Some(el) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return HoverTarget::default();
    };
    let marked = el
        .closest(&format!(".{INTERACTIVE_MARKER}"))
        .ok()
        .flatten()
        .is_some();
    HoverTarget::new(el.tag_name(), marked)
}

#[component]
pub fn CursorFollower() -> impl IntoView {
    let UseWindowSizeReturn { width, .. } = use_window_size();
    let touch_only = use_media_query("(hover: none)");
    let enabled = Memo::new(move |_| cursor_enabled(width.get(), touch_only.get()));
    let cursor = RwSignal::new(CursorState::default());

    let subscription = DocumentPointer.subscribe(Arc::new(move |signal: PointerSignal| {
        cursor.maybe_update(|c| c.apply(signal));
    }));
    on_cleanup(move || {
        subscription.dispose();
        log::debug!("cursor follower unsubscribed");
    });

    view! {
        <Show when=move || enabled.get()>
            <div
                aria-hidden="true"
                class="fixed top-0 left-0 w-8 h-8 border border-white rounded-full pointer-events-none z-[9999] mix-blend-difference transition-[transform,background-color] duration-150 ease-out"
                style=move || cursor.with(|c| c.style())
            ></div>
        </Show>
    }
}
