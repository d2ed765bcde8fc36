//! Scroll-driven motion: the smooth-scroll engine, reveal latches and entrance styles.

/// Seconds a wheel-driven scroll takes to settle.
pub const SCROLL_DURATION: f64 = 1.2;
pub const LINE_HEIGHT_PX: f64 = 16.0;

pub const ENTRANCE_DURATION_MS: u32 = 600;
pub const ENTRANCE_EASE: &str = "cubic-bezier(0.6, -0.05, 0.01, 0.99)";

/// Exponential ease-out used for inertial scrolling.
pub fn ease_out_expo(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// Linear map from `input` onto `output`, clamped at both ends.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_end == in_start {
        return out_end;
    }
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

/// `WheelEvent.deltaMode` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaMode {
    Pixel,
    Line,
    Page,
}

impl From<u32> for DeltaMode {
    fn from(value: u32) -> Self {
        match value {
            1 => DeltaMode::Line,
            2 => DeltaMode::Page,
            _ => DeltaMode::Pixel,
        }
    }
}

pub fn normalize_wheel(delta: f64, mode: DeltaMode, viewport_height: f64) -> f64 {
    match mode {
        DeltaMode::Pixel => delta,
        DeltaMode::Line => delta * LINE_HEIGHT_PX,
        DeltaMode::Page => delta * viewport_height,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SmoothScrollOptions {
    pub duration: f64,
    pub wheel_multiplier: f64,
    pub easing: fn(f64) -> f64,
}

impl Default for SmoothScrollOptions {
    fn default() -> Self {
        Self {
            duration: SCROLL_DURATION,
            wheel_multiplier: 1.0,
            easing: ease_out_expo,
        }
    }
}

/// Inertial scroll state advanced once per animation frame.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    options: SmoothScrollOptions,
    current: f64,
    target: f64,
    from: f64,
    elapsed: f64,
    limit: f64,
    animating: bool,
}

impl SmoothScroll {
    pub fn new(options: SmoothScrollOptions) -> Self {
        Self {
            options,
            current: 0.0,
            target: 0.0,
            from: 0.0,
            elapsed: 0.0,
            limit: 0.0,
            animating: false,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.min(self.limit);
    }

    pub fn on_wheel(&mut self, delta: f64) {
        let target = self.target + delta * self.options.wheel_multiplier;
        self.scroll_to(target);
    }

    pub fn scroll_to(&mut self, target: f64) {
        let target = target.clamp(0.0, self.limit);
        if target == self.target && self.animating {
            return;
        }
        self.from = self.current;
        self.target = target;
        self.elapsed = 0.0;
        self.animating = self.from != self.target;
    }

    /// Adopts a position the browser scrolled to on its own. Ignored mid-animation,
    /// since our own frames also surface as native scroll events.
    pub fn sync(&mut self, native: f64) {
        if self.animating {
            return;
        }
        let native = native.clamp(0.0, self.limit.max(native));
        self.current = native;
        self.target = native;
    }

    /// Steps the animation by `dt` seconds. Returns the position to scroll to, or
    /// `None` when idle.
    pub fn advance(&mut self, dt: f64) -> Option<f64> {
        if !self.animating {
            return None;
        }
        self.elapsed += dt.max(0.0);
        let progress = if self.options.duration > 0.0 {
            (self.elapsed / self.options.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        if progress >= 1.0 {
            self.current = self.target;
            self.animating = false;
        } else {
            let eased = (self.options.easing)(progress);
            self.current = self.from + (self.target - self.from) * eased;
        }
        Some(self.current)
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(SmoothScrollOptions::default())
    }
}

/// Switches to revealed the first time its element intersects the viewport, then stays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns true only on the observation that plays the entrance.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Entrance {
    #[default]
    FadeUp,
    FadeLeft,
    FadeRight,
    ScaleIn,
    Fade,
}

impl Entrance {
    fn hidden_transform(self) -> &'static str {
        match self {
            Entrance::FadeUp => "translate3d(0, 60px, 0)",
            Entrance::FadeLeft => "translate3d(-60px, 0, 0)",
            Entrance::FadeRight => "translate3d(60px, 0, 0)",
            Entrance::ScaleIn => "scale(0.8)",
            Entrance::Fade => "none",
        }
    }

    pub fn style(self, revealed: bool, delay_ms: u32) -> String {
        let (opacity, transform) = if revealed {
            (1, "none")
        } else {
            (0, self.hidden_transform())
        };
        format!(
            "opacity: {opacity}; transform: {transform}; transition: opacity {ENTRANCE_DURATION_MS}ms {ENTRANCE_EASE} {delay_ms}ms, transform {ENTRANCE_DURATION_MS}ms {ENTRANCE_EASE} {delay_ms}ms;"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn engine(limit: f64) -> SmoothScroll {
        let mut scroll = SmoothScroll::default();
        scroll.set_limit(limit);
        scroll
    }

    fn settle(scroll: &mut SmoothScroll) -> Vec<f64> {
        let mut frames = Vec::new();
        while let Some(y) = scroll.advance(FRAME) {
            frames.push(y);
            assert!(frames.len() < 10_000, "animation never settled");
        }
        frames
    }

    #[test]
    fn test_easing_bounds() {
        assert!(ease_out_expo(0.0).abs() < 0.01);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert_eq!(ease_out_expo(5.0), 1.0);
        assert!(ease_out_expo(0.5) > 0.9);
    }

    #[test]
    fn test_interpolate_clamps() {
        assert_eq!(interpolate(250.0, (0.0, 500.0), (0.0, 150.0)), 75.0);
        assert_eq!(interpolate(-20.0, (0.0, 500.0), (0.0, 150.0)), 0.0);
        assert_eq!(interpolate(900.0, (0.0, 500.0), (0.0, -150.0)), -150.0);
        assert_eq!(interpolate(150.0, (0.0, 300.0), (1.0, 0.0)), 0.5);
        assert_eq!(interpolate(3.0, (1.0, 1.0), (0.0, 7.0)), 7.0);
    }

    #[test]
    fn test_wheel_normalization() {
        assert_eq!(normalize_wheel(100.0, DeltaMode::from(0), 800.0), 100.0);
        assert_eq!(normalize_wheel(3.0, DeltaMode::from(1), 800.0), 48.0);
        assert_eq!(normalize_wheel(1.0, DeltaMode::from(2), 800.0), 800.0);
    }

    #[test]
    fn test_wheel_converges_on_target() {
        let mut scroll = engine(2000.0);
        scroll.on_wheel(300.0);
        assert!(scroll.is_animating());

        let frames = settle(&mut scroll);
        assert!(frames.windows(2).all(|w| w[1] >= w[0]));
        assert_eq!(*frames.last().unwrap(), 300.0);
        assert_eq!(scroll.current(), 300.0);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.advance(FRAME), None);
    }

    #[test]
    fn test_target_clamped_to_limit() {
        let mut scroll = engine(500.0);
        scroll.on_wheel(-100.0);
        assert_eq!(scroll.target(), 0.0);
        assert!(!scroll.is_animating());

        scroll.on_wheel(400.0);
        scroll.on_wheel(400.0);
        assert_eq!(scroll.target(), 500.0);
        settle(&mut scroll);
        assert_eq!(scroll.current(), 500.0);

        scroll.set_limit(200.0);
        assert_eq!(scroll.target(), 200.0);
    }

    #[test]
    fn test_wheel_mid_flight_retargets_from_current() {
        let mut scroll = engine(5000.0);
        scroll.on_wheel(1000.0);
        for _ in 0..10 {
            scroll.advance(FRAME);
        }
        let mid = scroll.current();
        assert!(mid > 0.0 && mid < 1000.0);

        scroll.on_wheel(500.0);
        assert_eq!(scroll.target(), 1500.0);
        let frames = settle(&mut scroll);
        assert!(frames[0] >= mid);
        assert_eq!(scroll.current(), 1500.0);
    }

    #[test]
    fn test_sync_only_when_idle() {
        let mut scroll = engine(3000.0);
        scroll.sync(1200.0);
        assert_eq!(scroll.current(), 1200.0);
        assert_eq!(scroll.target(), 1200.0);

        scroll.on_wheel(100.0);
        scroll.advance(FRAME);
        scroll.sync(0.0);
        assert_eq!(scroll.target(), 1300.0);
        assert!(scroll.current() >= 1200.0);
    }

    #[test]
    fn test_scroll_to_anchor() {
        let mut scroll = engine(4000.0);
        scroll.scroll_to(2500.0);
        settle(&mut scroll);
        assert_eq!(scroll.current(), 2500.0);
    }

    #[test]
    fn test_reveal_plays_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());
        assert!(latch.observe(true));
        assert!(latch.is_revealed());

        // leaving and re-entering the viewport never replays
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_entrance_styles() {
        let hidden = Entrance::FadeLeft.style(false, 200);
        assert!(hidden.starts_with("opacity: 0; transform: translate3d(-60px, 0, 0);"));
        assert!(hidden.contains("600ms cubic-bezier(0.6, -0.05, 0.01, 0.99) 200ms"));

        let shown = Entrance::ScaleIn.style(true, 0);
        assert!(shown.starts_with("opacity: 1; transform: none;"));
        assert!(Entrance::ScaleIn.style(false, 0).contains("scale(0.8)"));
    }
}
