use std::sync::Arc;

/// Viewports narrower than this get no custom cursor.
pub const MOBILE_BREAKPOINT: f64 = 768.0;
/// Class that marks an element as interactive for the cursor.
pub const INTERACTIVE_MARKER: &str = "interactive";

const CURSOR_RADIUS: f64 = 16.0;
const HOVER_SCALE: f64 = 2.5;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The element under the pointer, reduced to what the cursor cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverTarget {
    tag_name: String,
    marked: bool,
}

impl HoverTarget {
    pub fn new(tag_name: impl Into<String>, marked: bool) -> Self {
        Self {
            tag_name: tag_name.into(),
            marked,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.marked
            || self.tag_name.eq_ignore_ascii_case("button")
            || self.tag_name.eq_ignore_ascii_case("a")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PointerSignal {
    Moved(PointerPosition),
    Over(HoverTarget),
}

pub type PointerSink = Arc<dyn Fn(PointerSignal) + Send + Sync>;

/// Handle on a live input subscription. Disposing or dropping it detaches every listener.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn dispose(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

/// Anything that can push pointer movement and hover changes.
pub trait PointerSource {
    fn subscribe(&self, sink: PointerSink) -> Subscription;
}

pub fn cursor_enabled(viewport_width: f64, touch_only: bool) -> bool {
    !touch_only && viewport_width >= MOBILE_BREAKPOINT
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorState {
    pub position: PointerPosition,
    pub hovering: bool,
}

impl CursorState {
    /// Returns true when the state changed.
    pub fn apply(&mut self, signal: PointerSignal) -> bool {
        match signal {
            PointerSignal::Moved(position) => {
                let changed = self.position != position;
                self.position = position;
                changed
            }
            PointerSignal::Over(target) => {
                let hovering = target.is_interactive();
                let changed = self.hovering != hovering;
                self.hovering = hovering;
                changed
            }
        }
    }

    pub fn style(&self) -> String {
        let scale = if self.hovering { HOVER_SCALE } else { 1.0 };
        let fill = if self.hovering { "white" } else { "transparent" };
        format!(
            "transform: translate3d({}px, {}px, 0) scale({}); background-color: {};",
            self.position.x - CURSOR_RADIUS,
            self.position.y - CURSOR_RADIUS,
            scale,
            fill
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct FakePointer {
        sinks: Arc<Mutex<Vec<(usize, PointerSink)>>>,
        next_id: Arc<Mutex<usize>>,
    }

    impl FakePointer {
        fn emit(&self, signal: PointerSignal) {
            let sinks = self.sinks.lock().unwrap().clone();
            for (_, sink) in sinks {
                sink(signal.clone());
            }
        }

        fn listener_count(&self) -> usize {
            self.sinks.lock().unwrap().len()
        }
    }

    impl PointerSource for FakePointer {
        fn subscribe(&self, sink: PointerSink) -> Subscription {
            let id = {
                let mut next = self.next_id.lock().unwrap();
                *next += 1;
                *next
            };
            self.sinks.lock().unwrap().push((id, sink));
            let sinks = self.sinks.clone();
            Subscription::new(move || sinks.lock().unwrap().retain(|(i, _)| *i != id))
        }
    }

    fn track(source: &FakePointer) -> (Arc<Mutex<CursorState>>, Subscription) {
        let state = Arc::new(Mutex::new(CursorState::default()));
        let sink_state = state.clone();
        let sub = source.subscribe(Arc::new(move |signal: PointerSignal| {
            sink_state.lock().unwrap().apply(signal);
        }));
        (state, sub)
    }

    #[test]
    fn test_subscribe_receives_moves() {
        let source = FakePointer::default();
        let (state, _sub) = track(&source);
        assert_eq!(source.listener_count(), 1);

        source.emit(PointerSignal::Moved(PointerPosition::new(10.0, 20.0)));
        source.emit(PointerSignal::Moved(PointerPosition::new(40.0, 5.0)));
        assert_eq!(
            state.lock().unwrap().position,
            PointerPosition::new(40.0, 5.0)
        );
    }

    #[test]
    fn test_dispose_detaches_listeners() {
        let source = FakePointer::default();
        let (state, sub) = track(&source);
        source.emit(PointerSignal::Moved(PointerPosition::new(1.0, 1.0)));

        sub.dispose();
        assert_eq!(source.listener_count(), 0);

        source.emit(PointerSignal::Moved(PointerPosition::new(300.0, 300.0)));
        source.emit(PointerSignal::Over(HoverTarget::new("BUTTON", false)));
        let state = *state.lock().unwrap();
        assert_eq!(state.position, PointerPosition::new(1.0, 1.0));
        assert!(!state.hovering);
    }

    #[test]
    fn test_drop_detaches_listeners() {
        let source = FakePointer::default();
        {
            let (_state, _sub) = track(&source);
            let (_other, _other_sub) = track(&source);
            assert_eq!(source.listener_count(), 2);
        }
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn test_interactive_targets() {
        assert!(HoverTarget::new("BUTTON", false).is_interactive());
        assert!(HoverTarget::new("A", false).is_interactive());
        assert!(HoverTarget::new("DIV", true).is_interactive());
        assert!(!HoverTarget::new("DIV", false).is_interactive());
        assert!(!HoverTarget::new("ARTICLE", false).is_interactive());
        assert!(!HoverTarget::default().is_interactive());
    }

    #[test]
    fn test_hover_changes_style() {
        let mut state = CursorState::default();
        assert!(state.apply(PointerSignal::Moved(PointerPosition::new(116.0, 66.0))));
        assert!(state.style().contains("translate3d(100px, 50px, 0) scale(1)"));
        assert!(state.style().contains("transparent"));

        assert!(state.apply(PointerSignal::Over(HoverTarget::new("A", false))));
        assert!(!state.apply(PointerSignal::Over(HoverTarget::new("BUTTON", false))));
        assert!(state.style().contains("scale(2.5)"));
        assert!(state.style().contains("white"));

        assert!(state.apply(PointerSignal::Over(HoverTarget::new("P", false))));
        assert!(!state.hovering);
    }

    #[test]
    fn test_disabled_on_narrow_or_touch() {
        assert!(!cursor_enabled(375.0, false));
        assert!(!cursor_enabled(767.9, false));
        assert!(!cursor_enabled(1440.0, true));
        assert!(cursor_enabled(768.0, false));
        assert!(cursor_enabled(1440.0, false));
    }
}
