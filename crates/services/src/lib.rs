#![forbid(unsafe_code)]

pub mod error;
pub mod week_data_service;

pub use tracker_core::Clock;

pub use error::WeekDataError;
pub use week_data_service::{WeekDataApi, WeekDataConfig, WeekDataService, WeekFetch};
