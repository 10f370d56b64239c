//! Scroll and animation bookkeeping for the landing page.
//!
//! None of this touches a renderer; each piece computes the state a view
//! should show for a given scroll position or frame.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Duration of the impact counter animation
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);
/// Frame interval (~60fps)
pub const COUNTER_FRAME: Duration = Duration::from_millis(16);

/// Header switches to its translucent "scrolled" style past this offset
pub const HEADER_SCROLLED_OFFSET: f64 = 50.0;
/// Scroll-to-top button appears past this offset
pub const SCROLL_TO_TOP_OFFSET: f64 = 300.0;
/// Extra margin when deciding which section is "current"
pub const SECTION_BUFFER: f64 = 100.0;

/// Trailing decoration kept while a counter runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterSuffix {
    None,
    Plus,
    Percent,
}

impl CounterSuffix {
    fn as_str(&self) -> &'static str {
        match self {
            CounterSuffix::None => "",
            CounterSuffix::Plus => "+",
            CounterSuffix::Percent => "%",
        }
    }
}

/// Count-up animation for a statistic such as `50+` or `95%`
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    step: f64,
    current: f64,
    suffix: CounterSuffix,
    done: bool,
}

impl CounterAnimation {
    /// Parse the final text; every non-digit is ignored for the target.
    pub fn from_text(text: &str) -> Self {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        let target = digits.parse::<u64>().unwrap_or(0);
        let suffix = if text.contains('%') {
            CounterSuffix::Percent
        } else if text.contains('+') {
            CounterSuffix::Plus
        } else {
            CounterSuffix::None
        };
        let frames = COUNTER_DURATION.as_millis() as f64 / COUNTER_FRAME.as_millis() as f64;

        Self {
            target,
            step: target as f64 / frames,
            current: 0.0,
            suffix,
            done: target == 0,
        }
    }

    /// Advance one frame. Returns `false` once the target has been reached.
    pub fn tick(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.current += self.step;
        if self.current >= self.target as f64 {
            self.current = self.target as f64;
            self.done = true;
        }
        true
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Text for the current frame, suffix preserved
    pub fn text(&self) -> String {
        format!("{}{}", self.current.floor() as u64, self.suffix.as_str())
    }
}

/// Vertical extent of a page section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section the viewport is in, for nav highlighting.
///
/// A section is current when
/// `top - header - 100 <= scroll_y < top - header - 100 + height`.
/// When several match, the last one in document order wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, header_height: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| {
            let start = s.top - header_height - SECTION_BUFFER;
            scroll_y >= start && scroll_y < start + s.height
        })
        .last()
        .map(|s| s.id.as_str())
}

/// Header and scroll-to-top state for a scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderState {
    pub scrolled: bool,
    pub scroll_to_top_visible: bool,
}

impl HeaderState {
    pub fn from_scroll(scroll_y: f64) -> Self {
        Self {
            scrolled: scroll_y > HEADER_SCROLLED_OFFSET,
            scroll_to_top_visible: scroll_y > SCROLL_TO_TOP_OFFSET,
        }
    }

    /// Inline style for the header
    pub fn header_style(&self) -> &'static str {
        if self.scrolled {
            "background: rgba(255, 255, 255, 0.98); backdrop-filter: blur(20px); box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);"
        } else {
            "background: rgba(255, 255, 255, 1); backdrop-filter: blur(10px); box-shadow: none;"
        }
    }
}

/// Images whose real source is loaded only once they scroll into view
#[derive(Debug, Default)]
pub struct LazyImages {
    pending: BTreeMap<String, String>,
}

impl LazyImages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track image `id` whose deferred source is `data_src`.
    pub fn track(&mut self, id: impl Into<String>, data_src: impl Into<String>) {
        self.pending.insert(id.into(), data_src.into());
    }

    /// The image became visible: hand out its source once and stop tracking.
    pub fn reveal(&mut self, id: &str) -> Option<String> {
        self.pending.remove(id)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

/// Lets a call through at most once per interval
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Whether a call at `now` may run.
    pub fn admit(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}
