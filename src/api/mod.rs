pub mod client;
pub mod error;
pub mod types;

pub use client::StatsClient;
pub use error::ApiError;
pub use types::{
    ChartRange, QueryKind, RankEntry, RankWindow, SeriesData, SeriesPoint, StatsData,
    SummaryCounters,
};
