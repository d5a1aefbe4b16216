use std::sync::Arc;

use services::{Clock, WeekDataApi};
use tracker_core::model::WeekStart;

pub trait UiApp: Send + Sync {
    fn week_data(&self) -> Arc<dyn WeekDataApi>;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    week_data: Arc<dyn WeekDataApi>,
    current_week: WeekStart,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let week_data = app.week_data();
        // The current week is pinned at startup; every view derives from it.
        let current_week = WeekStart::most_recent(app.clock().now());

        Self {
            week_data,
            current_week,
        }
    }

    #[must_use]
    pub fn week_data(&self) -> Arc<dyn WeekDataApi> {
        Arc::clone(&self.week_data)
    }

    #[must_use]
    pub fn current_week(&self) -> WeekStart {
        self.current_week
    }

    #[must_use]
    pub fn last_week(&self) -> WeekStart {
        self.current_week.previous()
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
