use crate::api::error::ApiError;
use crate::api::types::{
    ChartRange, Envelope, QueryKind, RankData, RankEntry, RankWindow, SeriesData, StatsData,
    SummaryCounters, SummaryData,
};
use crate::poll::Fetch;
use serde::de::DeserializeOwned;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the bot-admin statistics endpoint. Every query is a POST with a
/// form-encoded `{type, botid, target, days}` body to the same URL; the
/// response shape follows the requested `type`.
pub struct StatsClient {
    http: reqwest::blocking::Client,
    url: String,
    botid: String,
    target: String,
}

impl StatsClient {
    pub fn new(url: &str, botid: &str, target: &str) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            http,
            url: url.to_string(),
            botid: botid.to_string(),
            target: target.to_string(),
        })
    }

    /// Issue one fetch job and return the decoded payload tagged with the
    /// parameters it answers.
    pub fn fetch(&self, job: Fetch) -> Result<StatsData, ApiError> {
        match job {
            Fetch::Summary => Ok(StatsData::Summary(self.fetch_summary()?)),
            Fetch::Series(range) => Ok(StatsData::Series {
                range,
                data: self.fetch_series(range)?,
            }),
            Fetch::Recompute => {
                self.recompute()?;
                Ok(StatsData::Recomputed)
            }
            Fetch::Rank(window) => Ok(StatsData::Rank {
                window,
                entries: self.fetch_rank(window)?,
            }),
        }
    }

    pub fn fetch_summary(&self) -> Result<SummaryCounters, ApiError> {
        let data: SummaryData = self.post(QueryKind::Summary, 0)?;
        Ok(data.statistics_data)
    }

    pub fn fetch_series(&self, range: ChartRange) -> Result<SeriesData, ApiError> {
        self.post(QueryKind::Series, range.days())
    }

    /// Recompute carries no payload; only the success flag matters. The
    /// original widget always sent `days=1` here, so we do too.
    pub fn recompute(&self) -> Result<(), ApiError> {
        self.post_envelope::<serde_json::Value>(QueryKind::Recompute, 1)?;
        Ok(())
    }

    pub fn fetch_rank(&self, window: RankWindow) -> Result<Vec<RankEntry>, ApiError> {
        let data: RankData = self.post(QueryKind::Rank, window.days())?;
        Ok(data.statistics_data)
    }

    fn post<T: DeserializeOwned>(&self, kind: QueryKind, days: u32) -> Result<T, ApiError> {
        let envelope = self.post_envelope(kind, days)?;
        envelope.data.ok_or(ApiError::MissingData)
    }

    fn post_envelope<T: DeserializeOwned>(
        &self,
        kind: QueryKind,
        days: u32,
    ) -> Result<Envelope<T>, ApiError> {
        let form = [
            ("type", kind.wire_value().to_string()),
            ("botid", self.botid.clone()),
            ("target", self.target.clone()),
            ("days", days.to_string()),
        ];

        let response = self
            .http
            .post(&self.url)
            .form(&form)
            .send()
            .map_err(ApiError::Transport)?;

        let envelope: Envelope<T> = response.json().map_err(ApiError::Decode)?;
        if envelope.success != 1 {
            return Err(ApiError::Unsuccessful);
        }

        Ok(envelope)
    }
}
