//! Common test utilities and fixtures for integration tests.
//!
//! The grading service is stateless, so tests run against the in-process
//! router with no external services.

pub mod fixtures;

use answer_core::{Grader, MatchPolicy};
use axum::Router;
use axum_test::TestServer;

use answer_grader_backend::{build_router, AppState};

/// Test context holding the router under test.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a context using the default grading policy.
    pub fn new() -> Self {
        Self::with_grader(Grader::default())
    }

    /// Create a context using a custom policy.
    ///
    /// # Panics
    /// Panics if the policy is invalid.
    pub fn with_policy(policy: MatchPolicy) -> Self {
        Self::with_grader(Grader::new(policy).expect("test policy should be valid"))
    }

    fn with_grader(grader: Grader) -> Self {
        let app = build_router(AppState::new(grader));
        Self { app }
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
