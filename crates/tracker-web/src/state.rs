//! Application state management

use tracker_core::{Config, Dataset, DashboardSession};

/// Application state holding configuration and the dataset being shown
///
/// Shared read-only between requests; view state lives in per-request
/// [`DashboardSession`]s.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Data rendered by every page
    pub dataset: Dataset,
}

impl AppState {
    /// Create application state, loading the configured dataset
    ///
    /// # Errors
    ///
    /// Returns an error if `dashboard.dataset_path` is set and cannot be loaded.
    pub fn new(config: Config) -> tracker_core::Result<Self> {
        let dataset = Dataset::load(config.dashboard.dataset_path.as_deref())?;
        Ok(Self::with_dataset(config, dataset))
    }

    /// Create application state around an already loaded dataset
    #[must_use]
    pub const fn with_dataset(config: Config, dataset: Dataset) -> Self {
        Self { config, dataset }
    }

    /// Fresh session using the configured tab layout
    #[must_use]
    pub fn new_session(&self) -> DashboardSession {
        DashboardSession::new(self.config.dashboard.tab_layout)
    }
}
