mod edit_modal;
mod home;
mod state;
mod week_table;

pub use edit_modal::EditProgressModal;
pub use home::HomeView;
pub use state::{FetchState, fetch_state_from_outcome, fetch_state_from_resource};
pub use week_table::WeekTable;

#[cfg(test)]
mod view_smoke;
