use crate::report::format::{format_fixed, group_thousands};
use serde::Serialize;

/// A single reported quantity, tagged with how it should be shown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// kWh
    Energy(f64),
    /// kW
    Power(f64),
    Count(u32),
    Currency(f64),
    Text(String),
}

impl MetricValue {
    /// Unrounded value as written to the export file.
    pub fn raw(&self) -> String {
        match self {
            MetricValue::Energy(v) | MetricValue::Power(v) | MetricValue::Currency(v) => {
                v.to_string()
            }
            MetricValue::Count(n) => n.to_string(),
            MetricValue::Text(s) => s.clone(),
        }
    }

    /// Human-readable value with unit.
    pub fn display(&self) -> String {
        match self {
            MetricValue::Energy(v) => format!("{} kWh", format_fixed(*v)),
            MetricValue::Power(v) => format!("{} kW", format_fixed(*v)),
            MetricValue::Count(n) => n.to_string(),
            MetricValue::Currency(v) => group_thousands(*v),
            MetricValue::Text(s) => s.clone(),
        }
    }
}

/// Label/value pair in report order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub label: String,
    pub value: MetricValue,
}

impl MetricRow {
    pub fn new(label: impl Into<String>, value: MetricValue) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
