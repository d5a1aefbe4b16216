mod edit_vm;
mod money_fmt;
mod week_vm;

pub use edit_vm::EditDraft;
pub use money_fmt::format_case_value;
pub use week_vm::{WeekRowVm, WeekVm, map_week_vm};
