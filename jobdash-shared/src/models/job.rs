use serde::{Deserialize, Serialize};

/// A job category a posting can be filed under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobCategory {
    /// Opaque category identifier.
    pub category_id: String,

    /// Display name.
    pub name: String,
}

/// Request to create a job posting. Durations and expiries travel as plain
/// epoch seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobPostRequest {
    /// Job title.
    pub name: String,

    /// Full description of the work.
    pub description: String,

    /// Category the job is filed under.
    pub category_id: String,

    /// Payment offered, in whole currency units.
    pub pay_amount: u32,

    /// Completion deadline as epoch seconds.
    pub time_to_complete_seconds: i64,

    /// Listing expiry as epoch seconds.
    pub expiry_seconds: i64,
}

/// Response to a successful job posting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobPostResponse {
    /// Identifier assigned to the new posting.
    pub job_id: String,
}
