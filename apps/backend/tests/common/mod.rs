//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for building the router with chosen engine settings
//! - Helper functions for creating request bodies

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use steno_core::{AnalysisSettings, EquivalenceConfig};
use steno_marker_backend::{app, AppState};

/// Test context holding the router under test.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a context with default settings (equivalence off, no cap).
    pub fn new() -> Self {
        Self::with_settings(AnalysisSettings::default())
    }

    /// Create a context with equivalence mode switched on.
    pub fn with_equivalence() -> Self {
        Self::with_settings(AnalysisSettings {
            equivalence: EquivalenceConfig::on(),
            ..Default::default()
        })
    }

    /// Create a context with explicit settings.
    pub fn with_settings(settings: AnalysisSettings) -> Self {
        Self {
            app: app(AppState::new(settings)),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }
}
