//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The state is built once at startup and is read-only afterwards; the
//! scoring model holds no data, so handlers never need to coordinate.

use crate::config::AppConfig;
use cardio_risk_shared::{model_by_id, RiskError, RiskModel};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
///
/// All fields are cheap to clone across async tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Scoring model selected by `scoring.model`
    pub model: Arc<dyn RiskModel>,
    /// Prometheus render handle, present when metrics are enabled
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state
    ///
    /// Fails if the configured model identifier is unknown.
    pub fn new(config: AppConfig) -> Result<Self, RiskError> {
        let model: Arc<dyn RiskModel> = model_by_id(&config.scoring.model)?.into();

        Ok(Self {
            config: Arc::new(config),
            model,
            metrics: None,
        })
    }

    /// Attach the Prometheus handle used by `/metrics`
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the scoring model
    #[inline]
    pub fn model(&self) -> &dyn RiskModel {
        self.model.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_uses_configured_model() {
        let state = AppState::new(AppConfig::default()).unwrap();
        assert_eq!(state.model().id(), "framingham-points-v1");
        assert!(state.metrics.is_none());

        // Clone should be O(1) - just Arc increments
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.config, &cloned.config));
    }

    #[test]
    fn test_state_rejects_unknown_model() {
        let mut config = AppConfig::default();
        config.scoring.model = "unknown".to_string();
        assert!(matches!(
            AppState::new(config),
            Err(RiskError::UnknownModel(id)) if id == "unknown"
        ));
    }
}
