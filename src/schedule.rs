//! Timeline - cooperative virtual-time job queue
//!
//! Jobs are plain data ordered by due time, then by insertion order, so
//! two jobs due at the same instant run in the order they were queued.
//! Nothing here knows about wall clocks: the owner advances time.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<J> {
    due: u64,
    seq: u64,
    job: J,
}

impl<J> PartialEq for Entry<J> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<J> Eq for Entry<J> {}

impl<J> PartialOrd for Entry<J> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<J> Ord for Entry<J> {
    // Reversed: BinaryHeap is a max-heap and we want the earliest first
    fn cmp(&self, other: &Self) -> Ordering {
        (other.due, other.seq).cmp(&(self.due, self.seq))
    }
}

pub struct Timeline<J> {
    now: u64,
    seq: u64,
    queue: BinaryHeap<Entry<J>>,
}

impl<J> Timeline<J> {
    pub fn new() -> Self {
        Self { now: 0, seq: 0, queue: BinaryHeap::new() }
    }

    /// Current virtual time in ms
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Queue a job `delay_ms` from now
    pub fn after(&mut self, delay_ms: u64, job: J) {
        self.at(self.now.saturating_add(delay_ms), job);
    }

    /// Queue a job at an absolute time; past times run on the next advance
    pub fn at(&mut self, due: u64, job: J) {
        self.seq += 1;
        self.queue.push(Entry { due, seq: self.seq, job });
    }

    /// Pop the earliest job due at or before `until`, moving time up to it
    pub fn pop_due(&mut self, until: u64) -> Option<J> {
        if self.queue.peek()?.due > until {
            return None;
        }
        let entry = self.queue.pop()?;
        self.now = self.now.max(entry.due);
        Some(entry.job)
    }

    /// Move time forward once every due job has been popped
    pub fn settle(&mut self, until: u64) {
        self.now = self.now.max(until);
    }

    pub fn next_due(&self) -> Option<u64> {
        self.queue.peek().map(|e| e.due)
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<J> Default for Timeline<J> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(t: &mut Timeline<&'static str>, until: u64) -> Vec<&'static str> {
        let mut out = Vec::new();
        while let Some(job) = t.pop_due(until) {
            out.push(job);
        }
        t.settle(until);
        out
    }

    #[test]
    fn jobs_run_in_due_order() {
        let mut t = Timeline::new();
        t.after(300, "c");
        t.after(100, "a");
        t.after(200, "b");
        assert_eq!(drain(&mut t, 1_000), vec!["a", "b", "c"]);
        assert_eq!(t.now(), 1_000);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut t = Timeline::new();
        t.after(50, "first");
        t.after(50, "second");
        t.after(50, "third");
        assert_eq!(drain(&mut t, 50), vec!["first", "second", "third"]);
    }

    #[test]
    fn future_jobs_wait() {
        let mut t = Timeline::new();
        t.after(500, "later");
        assert!(drain(&mut t, 499).is_empty());
        assert_eq!(t.next_due(), Some(500));
        assert_eq!(drain(&mut t, 500), vec!["later"]);
        assert!(t.is_empty());
    }

    #[test]
    fn time_follows_popped_jobs() {
        let mut t = Timeline::new();
        t.after(100, "a");
        t.after(900, "b");
        assert_eq!(t.pop_due(1_000), Some("a"));
        assert_eq!(t.now(), 100);
        t.after(50, "c");
        assert_eq!(drain(&mut t, 1_000), vec!["c", "b"]);
    }

    #[test]
    fn clear_drops_everything() {
        let mut t = Timeline::new();
        t.after(1, "x");
        t.after(2, "y");
        t.clear();
        assert_eq!(t.len(), 0);
        assert_eq!(t.next_due(), None);
    }
}
