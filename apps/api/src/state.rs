use std::sync::Arc;

use crate::analysis::analyzer::ResumeAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub analyzer: ResumeAnalyzer,
}
