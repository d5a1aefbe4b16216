use tracker_core::model::ProgressEntry;

/// The metadata attached to a row's Edit control, carried into the edit
/// dialog as-is.
///
/// Absent optional fields become empty strings so the form inputs start
/// blank. No validation happens here; this is pure data transfer.
#[derive(Clone, Debug, PartialEq)]
pub struct EditDraft {
    pub progress_id: String,
    pub account_name: String,
    pub week_start: String,
    pub drop_farmed: bool,
    pub case_name: String,
    pub additional_drop: String,
}

impl EditDraft {
    /// Builds the draft for an entry, or `None` when the entry has no stored
    /// progress record to edit.
    #[must_use]
    pub fn from_entry(entry: &ProgressEntry) -> Option<Self> {
        let progress_id = entry.progress_id.clone()?;
        Some(Self {
            progress_id,
            account_name: entry.account_name.clone(),
            week_start: entry.week_start.clone(),
            drop_farmed: entry.drop_farmed,
            case_name: entry.case_name.clone().unwrap_or_default(),
            additional_drop: entry.additional_drop.clone().unwrap_or_default(),
        })
    }

    /// The update form target for this record.
    #[must_use]
    pub fn action_path(&self) -> String {
        format!("/update_progress/{}", self.progress_id)
    }
}
