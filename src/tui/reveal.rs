use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::model::UiConfig;

/// Fraction of a card that must be on screen before it is revealed
pub const REVEAL_THRESHOLD: f32 = 0.1;
/// Duration of the fade-in after a card is revealed
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// How a card should be drawn right now
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reveal {
    Hidden,
    /// Fading in; progress in [0, 1)
    Fading(f32),
    Visible,
}

/// Tracks which cards have entered the viewport.
///
/// Renderers `observe` every card they lay out, then report on-screen
/// fractions through `update`. Keys are stable per card ("project:3").
pub trait RevealObserver {
    fn observe(&mut self, key: &str);
    fn update(&mut self, intersections: &[(String, f32)], now: Instant);
    fn reveal(&self, key: &str, now: Instant) -> Reveal;
}

/// Reveal cards once at least `REVEAL_THRESHOLD` of them is in view.
/// Revealed cards stop being observed and stay revealed.
#[derive(Debug, Default)]
pub struct ViewportReveal {
    observed: HashSet<String>,
    revealed: HashMap<String, Instant>,
}

impl RevealObserver for ViewportReveal {
    fn observe(&mut self, key: &str) {
        if !self.revealed.contains_key(key) {
            self.observed.insert(key.to_string());
        }
    }

    fn update(&mut self, intersections: &[(String, f32)], now: Instant) {
        for (key, fraction) in intersections {
            if *fraction >= REVEAL_THRESHOLD && self.observed.remove(key) {
                self.revealed.insert(key.clone(), now);
            }
        }
    }

    fn reveal(&self, key: &str, now: Instant) -> Reveal {
        match self.revealed.get(key) {
            None => Reveal::Hidden,
            Some(at) => {
                let elapsed = now.saturating_duration_since(*at);
                if elapsed >= FADE_DURATION {
                    Reveal::Visible
                } else {
                    Reveal::Fading(elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32())
                }
            }
        }
    }
}

/// Fallback: everything is visible immediately
#[derive(Debug, Default)]
pub struct ImmediateReveal;

impl RevealObserver for ImmediateReveal {
    fn observe(&mut self, _key: &str) {}

    fn update(&mut self, _intersections: &[(String, f32)], _now: Instant) {}

    fn reveal(&self, _key: &str, _now: Instant) -> Reveal {
        Reveal::Visible
    }
}

/// Pick the observer implementation once at startup
pub fn observer_for(ui: &UiConfig) -> Box<dyn RevealObserver> {
    if ui.reveal_on_scroll {
        Box::new(ViewportReveal::default())
    } else {
        Box::new(ImmediateReveal)
    }
}

/// Fraction of a card spanning rows `[top, top+height)` that lies within
/// the viewport rows `[0, viewport)`
pub fn visible_fraction(top: isize, height: usize, viewport: usize) -> f32 {
    if height == 0 {
        return 0.0;
    }
    let bottom = top + height as isize;
    let start = top.max(0);
    let end = bottom.min(viewport as isize);
    if end <= start {
        return 0.0;
    }
    (end - start) as f32 / height as f32
}
