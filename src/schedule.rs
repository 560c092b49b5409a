//! Deterministic scheduling of timed visual effects.
//!
//! Effects are queued on a [`Timeline`] with a delay and released when the
//! timeline's clock is advanced past their due time. The clock only moves when
//! the owner calls [`Timeline::advance`], so tests drive time explicitly.

use std::time::Duration;

/// Identifies a scheduled task so it can be cancelled before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Scheduled<T> {
    handle: TaskHandle,
    due: Duration,
    payload: T,
}

/// A queue of payloads keyed by due time on a manually driven clock.
#[derive(Debug)]
pub struct Timeline<T> {
    now: Duration,
    next_id: u64,
    tasks: Vec<Scheduled<T>>,
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            tasks: Vec::new(),
        }
    }

    /// Current clock reading.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `payload` to fire `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.tasks.push(Scheduled {
            handle,
            due: self.now + delay,
            payload,
        });
        handle
    }

    /// Drop a pending task. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.handle != handle);
        self.tasks.len() != before
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|t| t.handle == handle)
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Move the clock forward and return every payload now due, ordered by due
    /// time and then by scheduling order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<T> {
        self.now += elapsed;
        let now = self.now;

        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|t| t.due <= now);
        self.tasks = pending;

        due.sort_by_key(|t| (t.due, t.handle));
        due.into_iter().map(|t| t.payload).collect()
    }

    /// Advance to the last due time, releasing everything still queued.
    pub fn run_to_completion(&mut self) -> Vec<T> {
        let last = self.tasks.iter().map(|t| t.due).max();
        match last {
            Some(due) if due > self.now => self.advance(due - self.now),
            _ => self.advance(Duration::ZERO),
        }
    }
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releases_tasks_once_due_in_order() {
        let mut timeline = Timeline::new();
        timeline.schedule(Duration::from_millis(30), "b");
        timeline.schedule(Duration::from_millis(10), "a");
        timeline.schedule(Duration::from_millis(30), "c");

        assert!(timeline.advance(Duration::from_millis(5)).is_empty());
        assert_eq!(timeline.advance(Duration::from_millis(5)), vec!["a"]);
        assert_eq!(timeline.advance(Duration::from_millis(100)), vec!["b", "c"]);
        assert_eq!(timeline.pending(), 0);
        assert_eq!(timeline.now(), Duration::from_millis(110));
    }

    #[test]
    fn cancelled_tasks_never_fire() {
        let mut timeline = Timeline::new();
        let keep = timeline.schedule(Duration::from_millis(10), 1);
        let drop = timeline.schedule(Duration::from_millis(10), 2);

        assert!(timeline.cancel(drop));
        assert!(!timeline.cancel(drop));
        assert!(timeline.is_pending(keep));
        assert_eq!(timeline.run_to_completion(), vec![1]);
        assert!(!timeline.is_pending(keep));
    }

    #[test]
    fn delays_are_relative_to_the_current_time() {
        let mut timeline = Timeline::new();
        timeline.advance(Duration::from_millis(100));
        timeline.schedule(Duration::from_millis(10), ());

        assert!(timeline.advance(Duration::from_millis(9)).is_empty());
        assert_eq!(timeline.advance(Duration::from_millis(1)).len(), 1);
    }
}
