use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One day of claim activity. `date` uses the statistics collaborator's
/// compact `YY-MM-DD` token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyStat {
    /// Compact day token, e.g. `25-08-27`.
    pub date: String,

    /// Number of jobs claimed on that day.
    pub claimed: u32,
}

/// Failure to interpret a compact stat-date token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatDateError {
    /// The token does not follow the `YY-MM-DD` shape.
    #[error("malformed stat date token: {0}")]
    Malformed(String),
}

impl DailyStat {
    /// Expand the compact token into a short display label; `25-08-27`
    /// becomes `Aug 27`.
    pub fn label(&self) -> Result<String, StatDateError> {
        let expanded = format!("20{}", self.date);
        NaiveDate::parse_from_str(&expanded, "%Y-%m-%d")
            .map(|date| date.format("%b %-d").to_string())
            .map_err(|_| StatDateError::Malformed(self.date.clone()))
    }
}

/// One entry in the admin recent-activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    /// Human-readable description of what happened.
    pub description: String,

    /// Activity kind, e.g. `approved`, `claimed`, `posted`.
    #[serde(rename = "type")]
    pub activity_type: String,

    /// RFC 3339 timestamp of the activity.
    pub date_time: String,
}

impl RecentActivity {
    /// Short display timestamp, e.g. `Aug 27, 3:05 PM`; falls back to the
    /// raw value when the collaborator sends something unparseable.
    pub fn timestamp_label(&self) -> String {
        DateTime::parse_from_rfc3339(&self.date_time)
            .map(|moment| moment.format("%b %-d, %-I:%M %p").to_string())
            .unwrap_or_else(|_| self.date_time.clone())
    }
}

/// Aggregate counters accompanying the statistics payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Total activity entries matched by the query.
    pub total_activities_found: u32,

    /// Human-readable recent-activity window, e.g. `last 7 days`.
    pub recent_period: String,

    /// Human-readable statistics window, e.g. `last 30 days`.
    pub stats_period: String,
}

/// Query parameters the collaborator evaluated the statistics with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QueryParameters {
    /// Days of recent activity included.
    pub recent_days: u32,

    /// Maximum recent-activity entries returned.
    pub recent_limit: u32,

    /// Days of daily statistics included.
    pub stats_days: u32,

    /// When the payload was generated, RFC 3339.
    pub generated_at: String,
}

/// Admin statistics payload; only `stats` feeds the chart, the rest renders
/// as tiles and lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatistics {
    /// Aggregate counters for the queried window.
    pub summary: Summary,

    /// Jobs posted over the window.
    pub total_posted_jobs: u32,

    /// Jobs that expired unclaimed.
    pub total_expired_jobs: u32,

    /// Parameters the collaborator evaluated.
    pub query_parameters: QueryParameters,

    /// Daily claim counts, chronologically ascending.
    pub stats: Vec<DailyStat>,

    /// Jobs approved over the window.
    pub total_approved_jobs: u32,

    /// All jobs known to the platform.
    pub total_jobs: u32,

    /// Jobs currently claimed.
    pub total_claimed_jobs: u32,

    /// Jobs with submitted work awaiting review.
    pub total_submitted_jobs: u32,

    /// Jobs whose submissions were rejected.
    pub total_rejected_jobs: u32,

    /// Most recent platform activity, newest first.
    pub recent: Vec<RecentActivity>,
}

/// One day of a worker's application activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendPoint {
    /// Compact day token, same shape as [`DailyStat::date`].
    pub date: String,

    /// Applications submitted on that day.
    pub applied: u32,
}

/// Worker-facing metrics payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkerMetrics {
    /// Daily application counts, chronologically ascending.
    pub trend: Vec<TrendPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_label_expands_compact_token() {
        let stat = DailyStat {
            date: "25-08-27".to_string(),
            claimed: 3,
        };
        assert_eq!(stat.label().unwrap(), "Aug 27");
    }

    #[test]
    fn stat_label_rejects_malformed_token() {
        let stat = DailyStat {
            date: "not-a-date".to_string(),
            claimed: 0,
        };
        assert_eq!(
            stat.label(),
            Err(StatDateError::Malformed("not-a-date".to_string()))
        );
    }

    #[test]
    fn activity_timestamp_label_formats_rfc3339() {
        let activity = RecentActivity {
            description: "Job approved".to_string(),
            activity_type: "approved".to_string(),
            date_time: "2025-08-27T15:05:00Z".to_string(),
        };
        assert_eq!(activity.timestamp_label(), "Aug 27, 3:05 PM");
    }

    #[test]
    fn activity_timestamp_label_falls_back_to_raw_value() {
        let activity = RecentActivity {
            description: "Job claimed".to_string(),
            activity_type: "claimed".to_string(),
            date_time: "yesterday".to_string(),
        };
        assert_eq!(activity.timestamp_label(), "yesterday");
    }

    #[test]
    fn admin_statistics_deserializes_from_wire_names() {
        let raw = r#"{
            "summary": {
                "totalActivitiesFound": 12,
                "recentPeriod": "last 7 days",
                "statsPeriod": "last 30 days"
            },
            "totalPostedJobs": 40,
            "totalExpiredJobs": 2,
            "queryParameters": {
                "recentDays": 7,
                "recentLimit": 10,
                "statsDays": 30,
                "generatedAt": "2025-08-27T12:00:00Z"
            },
            "stats": [{"date": "25-08-26", "claimed": 4}],
            "totalApprovedJobs": 18,
            "totalJobs": 55,
            "totalClaimedJobs": 21,
            "totalSubmittedJobs": 9,
            "totalRejectedJobs": 3,
            "recent": [{
                "description": "Job approved",
                "type": "approved",
                "dateTime": "2025-08-27T09:30:00Z"
            }]
        }"#;

        let statistics: AdminStatistics = serde_json::from_str(raw).unwrap();
        assert_eq!(statistics.summary.total_activities_found, 12);
        assert_eq!(statistics.total_jobs, 55);
        assert_eq!(statistics.stats.len(), 1);
        assert_eq!(statistics.stats[0].claimed, 4);
        assert_eq!(statistics.recent[0].activity_type, "approved");
    }

    #[test]
    fn worker_metrics_roundtrips() {
        let metrics = WorkerMetrics {
            trend: vec![TrendPoint {
                date: "25-08-27".to_string(),
                applied: 2,
            }],
        };

        let raw = serde_json::to_string(&metrics).unwrap();
        let parsed: WorkerMetrics = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, metrics);
    }
}
