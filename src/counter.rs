//! Animated numeric labels.
//!
//! A counter moves from the value currently displayed toward a target in a
//! fixed number of evenly spaced steps. Starting a new animation cancels the
//! frames still queued from the previous one.

use std::time::Duration;

use serde::Serialize;

use crate::schedule::{TaskHandle, Timeline};

/// Step count and total duration of one counter animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterProfile {
    pub steps: u32,
    pub duration: Duration,
}

/// The "N projects" label under the filter bar.
pub const PROJECT_COUNTER: CounterProfile = CounterProfile {
    steps: 20,
    duration: Duration::from_millis(600),
};

/// Percentage labels on skill bars.
pub const SKILL_COUNTER: CounterProfile = CounterProfile {
    steps: 50,
    duration: Duration::from_millis(1500),
};

/// One displayed value and the offset from animation start at which it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CounterFrame {
    #[serde(rename = "at_ms", serialize_with = "serialize_millis")]
    pub at: Duration,
    pub value: i64,
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

/// Interpolated frames from `start` to `end`.
///
/// Values are monotonic in the direction of `end - start` and the last frame
/// is exactly `end`. Equal endpoints yield a single frame.
pub fn frames(start: i64, end: i64, profile: CounterProfile) -> Vec<CounterFrame> {
    let steps = profile.steps.max(1);
    let tick = profile.duration / steps;

    if start == end {
        return vec![CounterFrame { at: tick, value: end }];
    }

    let span = (end - start) as f64;
    (1..=steps)
        .map(|i| {
            let value = if i == steps {
                end
            } else {
                start + (span * i as f64 / steps as f64).round() as i64
            };
            CounterFrame {
                at: tick * i,
                value,
            }
        })
        .collect()
}

/// Parse the integer a label currently shows. Anything unparseable counts as 0.
///
/// Leading digits are read the way a lenient integer parse would, so `"42%"`
/// reads as 42.
pub fn parse_displayed(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

/// Drives one label's animation on its own timeline.
#[derive(Debug)]
pub struct CounterUpdater {
    profile: CounterProfile,
    timeline: Timeline<i64>,
    pending: Vec<TaskHandle>,
}

impl CounterUpdater {
    pub fn new(profile: CounterProfile) -> Self {
        Self {
            profile,
            timeline: Timeline::new(),
            pending: Vec::new(),
        }
    }

    /// Queue frames from `start` to `end`, superseding any animation in flight.
    pub fn animate(&mut self, start: i64, end: i64) -> Vec<CounterFrame> {
        for handle in self.pending.drain(..) {
            self.timeline.cancel(handle);
        }

        let frames = frames(start, end, self.profile);
        self.pending = frames
            .iter()
            .map(|f| self.timeline.schedule(f.at, f.value))
            .collect();
        frames
    }

    /// Advance the clock. Returns the value to display now, if a frame fired.
    pub fn advance(&mut self, elapsed: Duration) -> Option<i64> {
        let fired = self.timeline.advance(elapsed);
        self.forget_fired();
        fired.last().copied()
    }

    /// Release every queued frame. Returns the final value, if any was queued.
    pub fn finish(&mut self) -> Option<i64> {
        let fired = self.timeline.run_to_completion();
        self.pending.clear();
        fired.last().copied()
    }

    pub fn is_animating(&self) -> bool {
        !self.pending.is_empty()
    }

    fn forget_fired(&mut self) {
        let timeline = &self.timeline;
        self.pending.retain(|h| timeline.is_pending(*h));
    }
}

impl Default for CounterUpdater {
    fn default() -> Self {
        Self::new(PROJECT_COUNTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_monotonically_and_ends_on_target() {
        let frames = frames(0, 15, PROJECT_COUNTER);
        assert_eq!(frames.len(), 20);
        assert!(frames.windows(2).all(|w| w[0].value <= w[1].value));
        assert_eq!(frames.last().unwrap().value, 15);
        assert_eq!(frames.last().unwrap().at, Duration::from_millis(600));
    }

    #[test]
    fn counts_down_monotonically() {
        let frames = frames(15, 6, PROJECT_COUNTER);
        assert!(frames.windows(2).all(|w| w[0].value >= w[1].value));
        assert!(frames.iter().all(|f| (6..=15).contains(&f.value)));
        assert_eq!(frames.last().unwrap().value, 6);
    }

    #[test]
    fn equal_endpoints_produce_a_single_frame() {
        let frames = frames(6, 6, PROJECT_COUNTER);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].value, 6);
    }

    #[test]
    fn skill_profile_ticks_every_thirty_milliseconds() {
        let frames = frames(0, 90, SKILL_COUNTER);
        assert_eq!(frames.len(), 50);
        assert_eq!(frames[0].at, Duration::from_millis(30));
        assert_eq!(frames.last().unwrap().value, 90);
    }

    #[test]
    fn parses_displayed_values_leniently() {
        assert_eq!(parse_displayed("15"), 15);
        assert_eq!(parse_displayed(" 42%"), 42);
        assert_eq!(parse_displayed("-3"), -3);
        assert_eq!(parse_displayed(""), 0);
        assert_eq!(parse_displayed("abc"), 0);
    }

    #[test]
    fn new_animation_supersedes_the_pending_one() {
        let mut counter = CounterUpdater::default();
        counter.animate(0, 15);
        assert_eq!(counter.advance(Duration::from_millis(300)), Some(8));

        counter.animate(8, 6);
        assert_eq!(counter.finish(), Some(6));
        assert!(!counter.is_animating());
    }

    #[test]
    fn advance_without_due_frames_reports_nothing() {
        let mut counter = CounterUpdater::default();
        counter.animate(0, 6);
        assert_eq!(counter.advance(Duration::from_millis(1)), None);
        assert!(counter.is_animating());
    }
}
