use serde::Deserialize;

/// One account's farming progress for a single week, as returned by the
/// retrieval endpoint.
///
/// Entries are read-only snapshots: they live for one render cycle and are
/// replaced wholesale by the next fetch. `progress_id` is present only when a
/// stored progress record exists for the account/week pair; without it there
/// is nothing to edit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProgressEntry {
    pub account_name: String,
    pub steamid: String,
    #[serde(default)]
    pub drop_farmed: bool,
    #[serde(default)]
    pub case_name: Option<String>,
    #[serde(default)]
    pub additional_drop: Option<String>,
    #[serde(default)]
    pub case_value: Option<f64>,
    #[serde(default)]
    pub progress_id: Option<String>,
    #[serde(default)]
    pub week_start: String,
}

/// The full result for one queried week: the entries in server order plus the
/// optional aggregate case value. `total_value` is `None` when the endpoint
/// answered with the legacy bare-array shape, which carries no aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekResult {
    pub entries: Vec<ProgressEntry>,
    pub total_value: Option<f64>,
}
