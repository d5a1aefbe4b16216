use tracker_core::model::{ProgressEntry, WeekResult};

use crate::vm::edit_vm::EditDraft;
use crate::vm::money_fmt::format_case_value;

const PROFILE_URL_BASE: &str = "https://steamcommunity.com/profiles/";

/// One rendered table row, fully formatted for display.
#[derive(Clone, Debug, PartialEq)]
pub struct WeekRowVm {
    pub account_name: String,
    pub profile_url: String,
    pub farmed_label: &'static str,
    pub case_label: String,
    pub drop_label: String,
    pub value_label: String,
    pub edit: Option<EditDraft>,
}

impl From<&ProgressEntry> for WeekRowVm {
    fn from(entry: &ProgressEntry) -> Self {
        Self {
            account_name: entry.account_name.clone(),
            profile_url: format!("{PROFILE_URL_BASE}{}", entry.steamid),
            farmed_label: if entry.drop_farmed { "Yes" } else { "No" },
            case_label: text_or(entry.case_name.as_deref(), "N/A"),
            drop_label: text_or(entry.additional_drop.as_deref(), "-"),
            value_label: entry
                .case_value
                .map_or_else(|| "-".to_string(), format_case_value),
            edit: EditDraft::from_entry(entry),
        }
    }
}

// The backend sends "" where it means "nothing recorded"; treat that the same
// as an absent field.
fn text_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => fallback.to_string(),
    }
}

/// A whole week's table content: rows in server order plus the optional
/// formatted aggregate for the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct WeekVm {
    pub rows: Vec<WeekRowVm>,
    pub total_label: Option<String>,
}

#[must_use]
pub fn map_week_vm(result: &WeekResult) -> WeekVm {
    WeekVm {
        rows: result.entries.iter().map(WeekRowVm::from).collect(),
        total_label: result.total_value.map(format_case_value),
    }
}
