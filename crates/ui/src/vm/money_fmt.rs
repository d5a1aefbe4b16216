/// Case values are dollar amounts; the table always shows two decimals.
#[must_use]
pub fn format_case_value(value: f64) -> String {
    format!("{value:.2}")
}
