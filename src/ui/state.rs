use crate::api::error::ApiError;
use crate::api::types::{ChartRange, RankEntry, RankWindow, SeriesPoint, StatsData, SummaryCounters};
use crate::poll::{Fetch, FetchQueue};
use std::time::Instant;

/// Latest speak time series, with the axis bounds the server computed for it.
#[derive(Clone, Debug)]
pub struct ChartView {
    pub range: ChartRange,
    pub points: Vec<SeriesPoint>,
    pub max_speaks: i64,
    pub min_speaks: i64,
}

/// Latest leaderboard. Entries stay in response order; ranks are the
/// 1-indexed positions in that order.
#[derive(Clone, Debug)]
pub struct RankView {
    pub window: RankWindow,
    pub entries: Vec<RankEntry>,
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub botid: String,
    pub target: String,
    pub summary: Option<SummaryCounters>,
    pub chart: Option<ChartView>,
    pub rank: Option<RankView>,
    pub selected_range: ChartRange,
    pub selected_window: RankWindow,
    pub recomputing: bool,
    pub last_update: Instant,
    pub last_error: Option<String>,
    pub should_quit: bool,
    pub queue: FetchQueue,
}

impl AppState {
    pub fn new(botid: String, target: String) -> Self {
        // Same first paints as the original widget: 60-day chart, today's rank.
        let selected_range = ChartRange::TwoMonths;
        let selected_window = RankWindow::Today;

        let mut queue = FetchQueue::new();
        queue.seed_initial(selected_range, selected_window);

        Self {
            botid,
            target,
            summary: None,
            chart: None,
            rank: None,
            selected_range,
            selected_window,
            recomputing: false,
            last_update: Instant::now(),
            last_error: None,
            should_quit: false,
            queue,
        }
    }

    pub fn select_range(&mut self, range: ChartRange) {
        self.selected_range = range;
        self.queue.push(Fetch::Series(range));
    }

    pub fn select_window(&mut self, window: RankWindow) {
        self.selected_window = window;
        self.queue.push(Fetch::Rank(window));
    }

    pub fn request_recompute(&mut self) {
        self.recomputing = true;
        self.queue.request_recompute(self.selected_range);
    }

    /// Fold a successful response into the state.
    pub fn apply(&mut self, data: StatsData) {
        match data {
            StatsData::Summary(counters) => {
                self.summary = Some(counters);
            }
            StatsData::Series { range, data } => {
                self.chart = Some(ChartView {
                    range,
                    points: data.statistics_data,
                    max_speaks: data.max_speaks,
                    min_speaks: data.min_speaks,
                });
            }
            StatsData::Recomputed => {
                self.recomputing = false;
            }
            StatsData::Rank { window, entries } => {
                self.rank = Some(RankView { window, entries });
            }
        }
        self.last_update = Instant::now();
        self.last_error = None;
    }

    /// A non-success envelope changes nothing on screen; transport and decode
    /// failures are surfaced in the footer.
    pub fn record_failure(&mut self, job: Fetch, error: &ApiError) {
        if job == Fetch::Recompute {
            self.recomputing = false;
        }
        if !error.is_unsuccessful() {
            self.last_error = Some(error.to_string());
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
