//! Main InsightLens struct and public API.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charts::{ChartBuilder, ChartSeries};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::inference::ColumnClassifier;
use crate::input::Tokenizer;
use crate::insight::InsightEngine;
use crate::metrics::{Metric, MetricsEngine, RevenueStatistics};
use crate::overview::OverviewBuilder;
use crate::schema::DatasetOverview;

/// Result of analyzing one input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Dataset-level quality statistics and column classification.
    pub overview: DatasetOverview,
    /// Headline metrics.
    pub metrics: Vec<Metric>,
    /// Descriptive statistics of the revenue column, when one has values.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub revenue_statistics: Option<RevenueStatistics>,
    /// Chart-ready series.
    pub charts: Vec<ChartSeries>,
    /// Observations about the data.
    pub insights: Vec<String>,
    /// Suggested next steps.
    pub recommendations: Vec<String>,
}

/// The InsightLens analysis engine.
///
/// Holds only immutable configuration; concurrent calls share nothing.
pub struct InsightLens {
    config: AnalysisConfig,
    tokenizer: Tokenizer,
    classifier: ColumnClassifier,
    charts: ChartBuilder,
}

impl InsightLens {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: AnalysisConfig) -> Self {
        let tokenizer = Tokenizer::with_config(config.tokenizer.clone());
        let classifier = ColumnClassifier::with_config(config.classifier.clone());
        let charts = ChartBuilder::with_config(config.charts.clone());

        Self {
            config,
            tokenizer,
            classifier,
            charts,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze raw CSV text.
    ///
    /// Fails only when the text lacks a header row or a data row.
    pub fn analyze(&self, raw: &str) -> Result<AnalysisResult> {
        let started = Instant::now();

        let table = self.tokenizer.tokenize(raw)?;
        let overview = OverviewBuilder::new(&self.classifier).build(&table, raw.len());

        let metrics = MetricsEngine::compute(&table, &overview, &self.config.thresholds);
        let revenue_statistics = RevenueStatistics::compute(&table, &overview);
        let charts = self.charts.build(&table, &overview);
        let generated = InsightEngine::generate(&table, &overview, &self.config);

        debug!(
            rows = overview.row_count,
            columns = overview.column_count,
            metrics = metrics.len(),
            charts = charts.len(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "analysis complete"
        );

        Ok(AnalysisResult {
            overview,
            metrics,
            revenue_statistics,
            charts,
            insights: generated.insights,
            recommendations: generated.recommendations,
        })
    }
}

impl Default for InsightLens {
    fn default() -> Self {
        Self::new()
    }
}
