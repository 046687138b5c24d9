use crate::api::types::{ChartRange, RankWindow};
use std::collections::VecDeque;

/// A single backend request for the poll loop to issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fetch {
    Summary,
    Series(ChartRange),
    Recompute,
    Rank(RankWindow),
}

/// Pending fetch jobs, drained one at a time by the poll thread. The TUI
/// thread only enqueues; with a single issuer, requests never overlap and a
/// fast key press during an in-flight request just queues behind it.
#[derive(Clone, Debug, Default)]
pub struct FetchQueue {
    jobs: VecDeque<Fetch>,
}

impl FetchQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a job unless an identical one is already pending.
    pub fn push(&mut self, job: Fetch) {
        if !self.jobs.contains(&job) {
            self.jobs.push_back(job);
        }
    }

    pub fn pop(&mut self) -> Option<Fetch> {
        self.jobs.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// First fetches after startup: summary counters, the default chart
    /// range, and today's leaderboard.
    pub fn seed_initial(&mut self, range: ChartRange, window: RankWindow) {
        self.push(Fetch::Summary);
        self.push(Fetch::Series(range));
        self.push(Fetch::Rank(window));
    }

    /// Periodic refresh: re-read the counters, recompute today's statistics,
    /// then re-fetch the chart for whichever range is currently selected.
    pub fn schedule_refresh(&mut self, last_range: ChartRange) {
        self.push(Fetch::Summary);
        self.push(Fetch::Recompute);
        self.push(Fetch::Series(last_range));
    }

    /// A recompute requested from the UI re-fetches the chart for the
    /// currently selected range right after the acknowledgement.
    pub fn request_recompute(&mut self, last_range: ChartRange) {
        self.push(Fetch::Recompute);
        self.push(Fetch::Series(last_range));
    }
}
