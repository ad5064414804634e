//! Headline metric types.

use serde::{Deserialize, Serialize};

/// Direction indicator shown next to a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// How a metric value should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    Currency,
    Percentage,
    Number,
}

/// A metric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

impl From<usize> for MetricValue {
    fn from(value: usize) -> Self {
        MetricValue::Number(value as f64)
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        MetricValue::Text(value)
    }
}

/// A labelled headline indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub label: String,
    pub value: MetricValue,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub percent_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub trend: Option<Trend>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub display_format: Option<DisplayFormat>,
}

impl Metric {
    /// Create a metric with no trend or format.
    pub fn new(label: impl Into<String>, value: impl Into<MetricValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            percent_change: None,
            trend: None,
            display_format: None,
        }
    }

    /// Set the trend indicator.
    pub fn with_trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }

    /// Set the display format.
    pub fn with_format(mut self, format: DisplayFormat) -> Self {
        self.display_format = Some(format);
        self
    }

    /// Render the value according to its display format.
    pub fn formatted_value(&self) -> String {
        match (&self.value, self.display_format) {
            (MetricValue::Text(s), _) => s.clone(),
            (MetricValue::Number(n), Some(DisplayFormat::Currency)) => format_currency(*n),
            (MetricValue::Number(n), Some(DisplayFormat::Percentage)) => format!("{}%", n),
            (MetricValue::Number(n), _) => format_number(*n),
        }
    }
}

/// Format a monetary amount as `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    format!(
        "{}${}.{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Format a count or measure with thousands separators.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{}{}", sign, group_thousands(value.abs() as u64))
    } else {
        format!("{:.2}", value)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
