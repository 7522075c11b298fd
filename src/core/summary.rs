use crate::domain::model::{QuantumObject, RiskBand, TierThresholds, STORAGE_THRESHOLDS};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Collection-wide cutoffs. They follow the storage tiers on purpose and are
/// not derived from each object's own thresholds.
pub const AGGREGATE_THRESHOLDS: TierThresholds = STORAGE_THRESHOLDS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SystemSummary {
    pub total: usize,
    pub critical: usize,
    pub safe: usize,
    pub moderate: usize,
}

#[derive(Serialize)]
struct SummaryDocument<'a> {
    #[serde(flatten)]
    summary: &'a SystemSummary,
    generated_at: DateTime<Utc>,
}

impl SystemSummary {
    pub fn from_stabilities<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut summary = Self::default();
        for value in values {
            summary.total += 1;
            match RiskBand::classify(value, AGGREGATE_THRESHOLDS) {
                RiskBand::High => summary.critical += 1,
                RiskBand::Nominal => summary.safe += 1,
                RiskBand::Elevated => {}
            }
        }
        // Moderate is whatever is neither critical nor safe.
        summary.moderate = summary.total - summary.critical - summary.safe;
        summary
    }

    pub fn from_objects<'a, I>(objects: I) -> Self
    where
        I: IntoIterator<Item = &'a QuantumObject>,
    {
        Self::from_stabilities(objects.into_iter().map(QuantumObject::stability))
    }

    pub fn render_text(&self) -> String {
        format!(
            "=== SYSTEM REPORT ===\nTotal Objects: {}\nCritical Level: {}\nSafe Level: {}\nModerate Risk Level: {}",
            self.total, self.critical, self.safe, self.moderate
        )
    }

    pub fn render_json(&self) -> Result<String> {
        let document = SummaryDocument {
            summary: self,
            generated_at: Utc::now(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    pub fn render(&self, format: SummaryFormat) -> Result<String> {
        match format {
            SummaryFormat::Text => Ok(self.render_text()),
            SummaryFormat::Json => self.render_json(),
        }
    }
}
