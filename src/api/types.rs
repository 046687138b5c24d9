use serde::Deserialize;

/// Request discriminant selecting which statistics view to fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryKind {
    /// Summary counters for today
    Summary,
    /// Speak time series over a date range
    Series,
    /// Ask the server to recompute today's speak statistics
    Recompute,
    /// Speaker leaderboard
    Rank,
}

impl QueryKind {
    pub fn wire_value(self) -> u8 {
        match self {
            QueryKind::Summary => 1,
            QueryKind::Series => 2,
            QueryKind::Recompute => 3,
            QueryKind::Rank => 4,
        }
    }
}

/// Date range for the speak chart. The server rejects any other `days` value,
/// so the valid ones are the only representable ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartRange {
    Week,
    Month,
    TwoMonths,
}

impl ChartRange {
    pub fn days(self) -> u32 {
        match self {
            ChartRange::Week => 7,
            ChartRange::Month => 30,
            ChartRange::TwoMonths => 60,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChartRange::Week => "7 days",
            ChartRange::Month => "30 days",
            ChartRange::TwoMonths => "60 days",
        }
    }
}

/// Date window for the leaderboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankWindow {
    Today,
    Yesterday,
    Week,
    AllTime,
}

impl RankWindow {
    pub fn days(self) -> u32 {
        match self {
            RankWindow::Today => 0,
            RankWindow::Yesterday => 1,
            RankWindow::Week => 7,
            RankWindow::AllTime => 99999,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RankWindow::Today => "today",
            RankWindow::Yesterday => "yesterday",
            RankWindow::Week => "7 days",
            RankWindow::AllTime => "all time",
        }
    }
}

/// Response envelope common to every query. `data` is absent for recompute
/// acknowledgements and for non-success responses.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: u8,
    pub data: Option<T>,
}

/// The four counters of the summary panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SummaryCounters {
    pub speak_today_count: i64,
    pub sign_today_count: i64,
    pub point_today_total: i64,
    pub score_today_total: i64,
}

#[derive(Debug, Deserialize)]
pub struct SummaryData {
    pub statistics_data: SummaryCounters,
}

/// One day of the speak time series.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SeriesPoint {
    pub date: String,
    pub message_count: i64,
    // The backend spells this field "vaild_count" on the wire.
    #[serde(rename = "vaild_count")]
    pub valid_count: i64,
}

/// Speak time series with the chart axis bounds the server derives from it
/// (max message count rounded up to the next 100, min valid count rounded
/// down to the previous 100).
#[derive(Clone, Debug, Deserialize)]
pub struct SeriesData {
    pub botid: String,
    pub target: String,
    pub max_speaks: i64,
    pub min_speaks: i64,
    pub statistics_data: Vec<SeriesPoint>,
}

/// One leaderboard row. Rows arrive pre-sorted; display order is wire order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RankEntry {
    pub id: i64,
    pub name: String,
    pub count: i64,
}

#[derive(Debug, Deserialize)]
pub struct RankData {
    pub botid: String,
    pub target: String,
    pub statistics_data: Vec<RankEntry>,
}

/// Discriminated union over the four response payloads, tagged with the
/// request parameters the payload answers.
#[derive(Clone, Debug)]
pub enum StatsData {
    Summary(SummaryCounters),
    Series { range: ChartRange, data: SeriesData },
    Recomputed,
    Rank { window: RankWindow, entries: Vec<RankEntry> },
}
