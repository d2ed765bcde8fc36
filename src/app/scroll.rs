use std::sync::{Arc, Mutex};

use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_element_visibility, use_event_listener, use_event_listener_with_options, use_raf_fn,
    use_window, utils::Pausable, UseEventListenerOptions, UseRafFnCallbackArgs,
};
use web_sys::{ScrollBehavior, ScrollToOptions, WheelEvent};

use crate::motion::{normalize_wheel, DeltaMode, Entrance, RevealLatch, SmoothScroll};

/// Shared handle on the page's smooth-scroll engine.
#[derive(Clone, Copy)]
pub struct ScrollCoordinator {
    engine: StoredValue<Arc<Mutex<SmoothScroll>>>,
}

impl ScrollCoordinator {
    fn with_engine<T>(&self, f: impl FnOnce(&mut SmoothScroll) -> T) -> T {
        self.engine.with_value(|engine| {
            let mut engine = engine.lock().expect("should be able to lock scroll engine");
            f(&mut engine)
        })
    }

    /// Eases the page to the section with `id`. Returns false when no such element exists.
    pub fn scroll_to_section(&self, id: &str) -> bool {
        let Some(el) = document().get_element_by_id(id) else {
            log::warn!("no section with id {id}");
            return false;
        };
        let top = el.get_bounding_client_rect().top() + window().scroll_y().unwrap_or_default();
        let limit = scroll_limit();
        self.with_engine(|engine| {
            engine.set_limit(limit);
            engine.scroll_to(top);
        });
        true
    }
}

fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default()
}

fn scroll_limit() -> f64 {
    let content = document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or_default();
    (content - viewport_height()).max(0.0)
}

fn jump_to(y: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(y);
    opts.set_behavior(ScrollBehavior::Instant);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Starts the smooth-scroll frame loop for the current owner and provides its handle as
/// context. Everything is released when the owner is disposed.
pub fn provide_scroll_coordinator() -> ScrollCoordinator {
    let coordinator = ScrollCoordinator {
        engine: StoredValue::new(Arc::new(Mutex::new(SmoothScroll::default()))),
    };

    let Pausable { pause, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let dt = args.delta / 1000.0;
        if let Some(y) = coordinator.with_engine(|engine| engine.advance(dt)) {
            jump_to(y);
        }
    });

    _ = use_event_listener_with_options(
        use_window(),
        ev::wheel,
        move |e: WheelEvent| {
            // pinch-zoom arrives as ctrl+wheel
            if e.ctrl_key() {
                return;
            }
            e.prevent_default();
            let delta = normalize_wheel(
                e.delta_y(),
                DeltaMode::from(e.delta_mode()),
                viewport_height(),
            );
            let limit = scroll_limit();
            coordinator.with_engine(|engine| {
                engine.set_limit(limit);
                engine.on_wheel(delta);
            });
        },
        UseEventListenerOptions::default().passive(false),
    );

    _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or_default();
        coordinator.with_engine(|engine| engine.sync(y));
    });

    Effect::new(move |_| {
        let y = window().scroll_y().unwrap_or_default();
        let limit = scroll_limit();
        coordinator.with_engine(|engine| {
            engine.set_limit(limit);
            engine.sync(y);
        });
        log::debug!("smooth scroll started at {y}");
    });

    on_cleanup(move || {
        pause();
        log::debug!("smooth scroll stopped");
    });

    provide_context(coordinator);
    coordinator
}

/// True once `target` has intersected the viewport. It never flips back.
pub fn use_reveal(target: NodeRef<html::Div>) -> Signal<bool> {
    let latch = RwSignal::new(RevealLatch::default());
    let visible = use_element_visibility(target);

    Effect::new(move |_| {
        let intersecting = visible.get();
        latch.maybe_update(|latch| latch.observe(intersecting));
    });

    Signal::derive(move || latch.with(|latch| latch.is_revealed()))
}

/// Plays an entrance transition the first time its content scrolls into view.
#[component]
pub fn Reveal(
    #[prop(optional)] entrance: Entrance,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node);

    view! {
        <div node_ref=node class=class style=move || entrance.style(revealed.get(), delay_ms)>
            {children()}
        </div>
    }
}
