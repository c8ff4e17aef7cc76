//! Page performance reports.

pub mod handlers;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::preferences::{get_json, keys, set_json, PreferenceStore};

/// Raw navigation and paint timings sent by the page, in milliseconds since
/// navigation start.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PerformanceSample {
    pub dom_content_loaded_ms: Option<f64>,
    pub load_ms: Option<f64>,
    pub first_paint_ms: Option<f64>,
    pub first_contentful_paint_ms: Option<f64>,
    pub user_agent: Option<String>,
    pub connection: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub load_time: Option<f64>,
    pub dom_ready: Option<f64>,
    pub first_paint: Option<f64>,
    pub first_contentful_paint: Option<f64>,
    pub user_agent: String,
    pub connection: String,
    pub timestamp: String,
}

impl From<PerformanceSample> for PerformanceReport {
    fn from(sample: PerformanceSample) -> Self {
        Self {
            load_time: sample.load_ms,
            dom_ready: sample.dom_content_loaded_ms,
            first_paint: sample.first_paint_ms,
            first_contentful_paint: sample.first_contentful_paint_ms,
            user_agent: sample.user_agent.unwrap_or_default(),
            connection: sample
                .connection
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| "unknown".to_string()),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Builds the report, logs it and replaces the stored snapshot.
pub async fn record_performance(
    store: &dyn PreferenceStore,
    sample: PerformanceSample,
) -> Result<PerformanceReport, AppError> {
    let report = PerformanceReport::from(sample);
    info!(
        load_time = ?report.load_time,
        dom_ready = ?report.dom_ready,
        first_paint = ?report.first_paint,
        first_contentful_paint = ?report.first_contentful_paint,
        connection = %report.connection,
        "page performance"
    );
    set_json(store, keys::PERF_REPORT, &report).await?;
    Ok(report)
}

pub async fn stored_performance(
    store: &dyn PreferenceStore,
) -> Result<Option<PerformanceReport>, AppError> {
    get_json(store, keys::PERF_REPORT).await
}
