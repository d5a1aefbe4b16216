mod progress;
mod week;

pub use progress::{ProgressEntry, WeekResult};
pub use week::{WeekDateError, WeekStart};
